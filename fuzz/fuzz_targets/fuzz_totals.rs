#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

use bijak::core::{ChargeSet, LineItemBuilder, invoice_totals};

fuzz_target!(|input: Vec<(i64, i64, u8)>| {
    // Must not panic on arbitrary line data; negatives must come back
    // as errors, never as clamped values.
    let lines: Vec<_> = input
        .iter()
        .take(64)
        .map(|&(qty, price, rate)| {
            LineItemBuilder::new("Fuzz", Decimal::new(qty, 3), Decimal::new(price, 2))
                .gst_rate(Decimal::from(rate % 101))
                .build()
        })
        .collect();
    if lines.is_empty() {
        return;
    }

    if let Ok(totals) = invoice_totals(&lines, &ChargeSet::default(), true) {
        assert_eq!(totals.rounded_total, totals.grand_total + totals.round_off);
    }
});
