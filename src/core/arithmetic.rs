//! Decimal-safe invoice arithmetic: line totals, GST, round-off.
//!
//! All computation is done on [`rust_decimal::Decimal`] at full precision;
//! rounding happens only where the document demands it (the whole-rupee
//! grand total and 2-decimal display formatting).

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::error::BijakError;
use super::types::{ChargeSet, GstSplit, InvoiceTotals, LineItem};

/// quantity × unit price, full precision carried forward.
///
/// Negative inputs fail fast with [`BijakError::InvalidAmount`]; the
/// component never silently clamps.
pub fn line_total(quantity: Decimal, unit_price: Decimal) -> Result<Decimal, BijakError> {
    if quantity.is_sign_negative() {
        return Err(BijakError::InvalidAmount(format!(
            "quantity {quantity} must not be negative"
        )));
    }
    if unit_price.is_sign_negative() {
        return Err(BijakError::InvalidAmount(format!(
            "unit price {unit_price} must not be negative"
        )));
    }
    Ok(quantity * unit_price)
}

/// GST for one line. Zero when the invoice-level toggle is off or the
/// rate is zero; otherwise `total × rate / 100`.
pub fn line_gst(line_total: Decimal, gst_rate: Decimal, gst_enabled: bool) -> Decimal {
    if !gst_enabled || gst_rate == Decimal::ZERO {
        return Decimal::ZERO;
    }
    line_total * gst_rate / dec!(100)
}

/// Compute all invoice totals from line items and charges.
pub fn invoice_totals(
    lines: &[LineItem],
    charges: &ChargeSet,
    gst_enabled: bool,
) -> Result<InvoiceTotals, BijakError> {
    for (i, line) in lines.iter().enumerate() {
        if line.gst_rate.is_sign_negative() {
            return Err(BijakError::InvalidAmount(format!(
                "lines[{i}]: GST rate {} must not be negative",
                line.gst_rate
            )));
        }
    }
    for (field, value) in [
        ("transport", charges.transport),
        ("packaging", charges.packaging),
        ("other", charges.other),
    ] {
        if value.is_sign_negative() {
            return Err(BijakError::InvalidAmount(format!(
                "charge {field} {value} must not be negative"
            )));
        }
    }

    let mut subtotal = Decimal::ZERO;
    let mut gst_total = Decimal::ZERO;
    for line in lines {
        let total = line_total(line.quantity, line.unit_price)?;
        subtotal += total;
        gst_total += line_gst(total, line.gst_rate, gst_enabled);
    }

    let grand_total = subtotal + charges.total() + gst_total;
    let (rounded_total, delta) = round_off(grand_total);

    Ok(InvoiceTotals {
        subtotal,
        gst_total,
        grand_total,
        rounded_total,
        round_off: delta,
        gst_split: gst_split(lines, gst_total),
    })
}

/// Round a grand total half-away-from-zero to a whole rupee.
/// Returns the rounded total and the signed round-off delta.
pub fn round_off(grand_total: Decimal) -> (Decimal, Decimal) {
    let rounded = grand_total.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    (rounded, rounded - grand_total)
}

/// Build the SGST/CGST display decomposition.
///
/// The label lists each distinct non-zero line rate halved, in first
/// appearance order; when every line rate is zero the label falls back to
/// the zero rate halved. The amount shown on both rows is half the
/// aggregate — never re-derived per rate.
fn gst_split(lines: &[LineItem], gst_total: Decimal) -> GstSplit {
    let mut half_rates: Vec<Decimal> = Vec::new();
    for line in lines {
        if line.gst_rate == Decimal::ZERO {
            continue;
        }
        let half = line.gst_rate / dec!(2);
        if !half_rates.contains(&half) {
            half_rates.push(half);
        }
    }
    if half_rates.is_empty() {
        half_rates.push(Decimal::ZERO);
    }
    GstSplit {
        half_rates,
        half_amount: gst_total / dec!(2),
    }
}

/// Format a currency amount for display with exactly two decimals,
/// half-away-from-zero.
pub fn format_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Format the round-off delta with an explicit sign: "+0.40", "-0.25".
/// Zero prints as "+0.00".
pub fn format_signed(delta: Decimal) -> String {
    if delta < Decimal::ZERO {
        format!("-{}", format_amount(delta.abs()))
    } else {
        format!("+{}", format_amount(delta.abs()))
    }
}
