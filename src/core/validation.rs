//! Invoice validation: all rules are checked, all errors returned.

use rust_decimal::Decimal;

use super::error::ValidationError;
use super::types::{Invoice, LineItem, Party};

/// Validate an invoice before rendering. Returns every violation found,
/// not just the first.
///
/// The GSTIN-when-GST-enabled policy is deliberately NOT enforced here —
/// that decision belongs to the upstream form layer.
pub fn validate_invoice(invoice: &Invoice) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.header.number.trim().is_empty() {
        errors.push(ValidationError::new(
            "header.number",
            "invoice number must not be empty",
        ));
    }

    validate_party(&invoice.billing, "billing", &mut errors);
    validate_party(&invoice.shipping, "shipping", &mut errors);

    if invoice.lines.is_empty() {
        errors.push(ValidationError::new(
            "lines",
            "invoice must have at least one line item",
        ));
    }
    for (i, line) in invoice.lines.iter().enumerate() {
        validate_line(line, i, &mut errors);
    }

    for (field, value) in [
        ("charges.transport", invoice.charges.transport),
        ("charges.packaging", invoice.charges.packaging),
        ("charges.other", invoice.charges.other),
    ] {
        if value.is_sign_negative() {
            errors.push(ValidationError::new(field, "charge must not be negative"));
        }
    }

    errors
}

fn validate_party(party: &Party, prefix: &str, errors: &mut Vec<ValidationError>) {
    // At minimum one identifying name.
    let has_name = !party.name.trim().is_empty();
    let has_shop = party
        .shop_name
        .as_deref()
        .is_some_and(|s| !s.trim().is_empty());
    if !has_name && !has_shop {
        errors.push(ValidationError::new(
            format!("{prefix}.name"),
            "party must have a contact name or a shop name",
        ));
    }
}

fn validate_line(line: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    if line.product_name.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("lines[{index}].product_name"),
            "product name must not be empty",
        ));
    }
    if line.quantity.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("lines[{index}].quantity"),
            "quantity must not be negative",
        ));
    }
    if line.unit_price.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("lines[{index}].unit_price"),
            "unit price must not be negative",
        ));
    }
    if line.gst_rate.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("lines[{index}].gst_rate"),
            "GST rate must not be negative",
        ));
    }
    if line.gst_rate > Decimal::ONE_HUNDRED {
        errors.push(ValidationError::new(
            format!("lines[{index}].gst_rate"),
            "GST rate above 100% is not plausible",
        ));
    }
}
