//! Seller identity printed in the page header and footer.

use serde::{Deserialize, Serialize};

/// Company details for the invoice header, footer and signatory line.
///
/// Serde-loadable so deployments can ship their own profile as JSON or
/// TOML; the `Default` carries a complete sample identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    /// Up to two centered address lines under the company name.
    pub address_lines: Vec<String>,
    pub phone: String,
    pub email: String,
    pub gstin: Option<String>,
    /// Terms-and-conditions lines printed in the footer.
    pub terms: Vec<String>,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: "Shree Balaji Trading Co.".to_string(),
            address_lines: vec![
                "Shop No. 7, Grain Market Road".to_string(),
                "Itwari, Nagpur, Maharashtra - 440002".to_string(),
            ],
            phone: "+91 98765 43210".to_string(),
            email: "balajitradingco@gmail.com".to_string(),
            gstin: Some("27AAPFU0939F1ZV".to_string()),
            terms: vec![
                "1. Goods once sold will not be taken back.".to_string(),
                "2. Interest @18% p.a. will be charged on overdue bills.".to_string(),
                "3. Subject to Nagpur jurisdiction only.".to_string(),
            ],
        }
    }
}
