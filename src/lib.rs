//! # bijak
//!
//! Indian GST invoicing library: invoice totals with the SGST/CGST display
//! split, amount-in-words under the Indian numbering system, and paginated
//! PDF rendering.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use bijak::core::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new(
//!     "INV-2026-00001",
//!     NaiveDate::from_ymd_opt(2026, 4, 12).unwrap(),
//! )
//! .billing(PartyBuilder::new("Ramesh Kumar").shop_name("Kumar Traders").build())
//! .add_line(LineItemBuilder::new("Cement Bags", dec!(2), dec!(100)).gst_rate(dec!(5)).build())
//! .add_line(LineItemBuilder::new("Binding Wire", dec!(1), dec!(50)).build())
//! .gst(true)
//! .build()
//! .unwrap();
//!
//! let totals = invoice.totals().unwrap();
//! assert_eq!(totals.subtotal, dec!(250));
//! assert_eq!(totals.gst_total, dec!(10.00));
//! assert_eq!(totals.rounded_total, dec!(260));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice types, totals arithmetic, numbering, amount-in-words |
//! | `pdf` | Paginated layout engine and lopdf rendering backend |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "pdf")]
pub mod pdf;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
