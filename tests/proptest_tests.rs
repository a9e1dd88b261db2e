//! Property-based tests for arithmetic and the words converter.
//!
//! Run with: `cargo test --test proptest_tests`

use bijak::core::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A reasonable price: 0.01 .. 99,999.99 rupees.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (1u64..10_000_000u64).prop_map(|paise| Decimal::new(paise as i64, 2))
}

/// Quantity: up to three fractional digits, as weight-based units allow.
fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (1u64..1_000_000u64).prop_map(|milli| Decimal::new(milli as i64, 3))
}

/// One of the GST slabs actually used on Indian invoices.
fn arb_gst_rate() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(dec!(0)),
        Just(dec!(5)),
        Just(dec!(12)),
        Just(dec!(18)),
        Just(dec!(28)),
    ]
}

fn arb_line() -> impl Strategy<Value = LineItem> {
    (arb_quantity(), arb_price(), arb_gst_rate()).prop_map(|(quantity, unit_price, rate)| {
        LineItemBuilder::new("Prop Item", quantity, unit_price)
            .gst_rate(rate)
            .build()
    })
}

proptest! {
    // P1: line total is the exact product.
    #[test]
    fn line_total_is_exact_product(quantity in arb_quantity(), price in arb_price()) {
        let total = line_total(quantity, price).unwrap();
        prop_assert_eq!(total, quantity * price);
    }

    // P2: disabling GST forces the aggregate to zero for any lines.
    #[test]
    fn disabled_gst_is_always_zero(lines in prop::collection::vec(arb_line(), 1..20)) {
        let totals = invoice_totals(&lines, &ChargeSet::default(), false).unwrap();
        prop_assert_eq!(totals.gst_total, Decimal::ZERO);
        prop_assert_eq!(totals.grand_total, totals.subtotal);
    }

    // P3: rounded == grand + delta, and rounded is a whole rupee.
    #[test]
    fn round_off_invariant(lines in prop::collection::vec(arb_line(), 1..20)) {
        let totals = invoice_totals(&lines, &ChargeSet::default(), true).unwrap();
        prop_assert_eq!(totals.rounded_total, totals.grand_total + totals.round_off);
        prop_assert_eq!(totals.rounded_total, totals.rounded_total.trunc());
        // Delta can never exceed half a rupee in magnitude.
        prop_assert!(totals.round_off.abs() <= dec!(0.5));
    }

    // The split amount is always exactly half the aggregate.
    #[test]
    fn split_is_half(lines in prop::collection::vec(arb_line(), 1..20)) {
        let totals = invoice_totals(&lines, &ChargeSet::default(), true).unwrap();
        prop_assert_eq!(totals.gst_split.half_amount * dec!(2), totals.gst_total);
    }

    // Words output is well-formed for any amount in range.
    #[test]
    fn words_are_well_formed(rupees in 0u64..100_000_000, paise in 0u64..100) {
        let amount = Decimal::new((rupees * 100 + paise) as i64, 2);
        let words = amount_in_words(amount);
        prop_assert!(!words.contains("  "), "double space in {}", words);
        prop_assert_eq!(words.trim(), words.as_str());
        if rupees == 0 && paise == 0 {
            prop_assert_eq!(words, "Zero");
        } else if paise == 0 {
            prop_assert!(words.ends_with("Rupees"));
        } else {
            prop_assert!(words.ends_with("Paise"));
        }
    }
}
