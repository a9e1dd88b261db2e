//! Core invoice types, arithmetic, numbering and amount-in-words.
//!
//! This module provides the foundational types for Indian GST invoicing:
//! the invoice value model, decimal-safe total computation with the
//! SGST/CGST display split, and the Indian-numbering words converter.

mod arithmetic;
mod builder;
mod error;
mod numbering;
mod types;
mod validation;
mod words;

pub use arithmetic::{
    format_amount, format_signed, invoice_totals, line_gst, line_total, round_off,
};
pub use builder::*;
pub use error::*;
pub use numbering::*;
pub use types::*;
pub use validation::validate_invoice;
pub use words::amount_in_words;
