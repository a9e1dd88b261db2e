use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use super::arithmetic;
use super::error::BijakError;

/// Top-level invoice record — the input contract of the rendering core.
///
/// Constructed upstream (form flow) and treated as immutable here.
/// Totals are derived, never stored: call [`Invoice::totals`] to compute
/// them fresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub header: InvoiceHeader,
    /// Party the invoice is billed to.
    pub billing: Party,
    /// Party the goods ship to. Often identical to `billing`.
    pub shipping: Party,
    pub lines: Vec<LineItem>,
    pub charges: ChargeSet,
    /// When false, every GST amount is forced to zero regardless of line rates.
    pub gst_enabled: bool,
    /// When set, the matching signature image is composited near the
    /// "Authorized Signatory" line.
    pub signature: Option<Signatory>,
}

impl Invoice {
    /// Compute the invoice totals from lines and charges.
    ///
    /// Derived on every call — the core never persists totals.
    pub fn totals(&self) -> Result<InvoiceTotals, BijakError> {
        arithmetic::invoice_totals(&self.lines, &self.charges, self.gst_enabled)
    }
}

/// Invoice identity: number, bill date, optional vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceHeader {
    /// Pre-assigned, opaque to the core. The upstream sequence issues
    /// `INV-<year>-<5-digit>` numbers (see [`super::InvoiceNumberSequence`]).
    pub number: String,
    pub bill_date: NaiveDate,
    /// Lorry / vehicle identifier, printed below the amount-in-words line.
    pub lorry_number: Option<String>,
}

/// Billing or shipping party.
///
/// Everything except one identifying name is optional; empty fields are
/// simply omitted from the rendered party box.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub shop_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// GST registration number. Presence when GST is enabled is policy of
    /// the upstream form layer, not enforced here.
    pub gstin: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

/// One catalog product on the invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub product_name: String,
    /// HSN tax classification code.
    pub hsn_code: Option<String>,
    /// Non-negative; fractional for weight-based units.
    pub quantity: Decimal,
    /// Non-negative price per unit.
    pub unit_price: Decimal,
    /// GST percentage, 0 or more.
    pub gst_rate: Decimal,
}

impl LineItem {
    /// Line total at full precision, no rounding.
    pub fn line_total(&self) -> Result<Decimal, BijakError> {
        arithmetic::line_total(self.quantity, self.unit_price)
    }

    /// GST amount for this line, honoring the invoice-level toggle.
    pub fn gst_amount(&self, gst_enabled: bool) -> Result<Decimal, BijakError> {
        let total = self.line_total()?;
        Ok(arithmetic::line_gst(total, self.gst_rate, gst_enabled))
    }
}

/// Additional surcharges, independent of line items and never taxed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChargeSet {
    pub transport: Decimal,
    pub packaging: Decimal,
    pub other: Decimal,
}

impl ChargeSet {
    pub fn total(&self) -> Decimal {
        self.transport + self.packaging + self.other
    }
}

/// Who signs the invoice. Selects the signature image overlay; the
/// "Authorized Signatory" line itself always prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signatory {
    Proprietor,
    Accountant,
}

/// Derived invoice totals. Computed fresh per render; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of line totals at full precision.
    pub subtotal: Decimal,
    /// Sum of per-line GST amounts; zero when GST is disabled.
    pub gst_total: Decimal,
    /// subtotal + charges + gst_total.
    pub grand_total: Decimal,
    /// Grand total rounded half-away-from-zero to a whole rupee.
    pub rounded_total: Decimal,
    /// rounded_total - grand_total, signed.
    pub round_off: Decimal,
    /// Display decomposition of `gst_total` into SGST/CGST rows.
    pub gst_split: GstSplit,
}

/// Display-only SGST/CGST decomposition.
///
/// The aggregate GST amount is halved for both rows; the rate label lists
/// each distinct non-zero line rate halved, in first-appearance order.
/// The total is never re-apportioned per rate — only the label varies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstSplit {
    pub half_rates: Vec<Decimal>,
    pub half_amount: Decimal,
}

impl GstSplit {
    /// Rate label, e.g. "2.5%, 6%" for line rates of 5% and 12%.
    pub fn rate_label(&self) -> String {
        self.half_rates
            .iter()
            .map(|r| format!("{}%", r.normalize()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Convert an externally supplied float into a `Decimal`, rejecting
/// NaN and infinities. `Decimal` cannot represent non-finite values, so
/// this is the only boundary where they can appear.
pub fn decimal_from_f64(value: f64) -> Result<Decimal, BijakError> {
    if !value.is_finite() {
        return Err(BijakError::InvalidAmount(format!(
            "non-finite value {value} is not a valid amount"
        )));
    }
    Decimal::from_f64(value)
        .ok_or_else(|| BijakError::InvalidAmount(format!("{value} is out of range for Decimal")))
}
