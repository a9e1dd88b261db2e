#![no_main]

use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|input: (u64, u32)| {
    let (mantissa, scale) = input;
    // Must not panic for any non-negative decimal — errors are fine,
    // panics are bugs.
    let amount = Decimal::new((mantissa % (i64::MAX as u64)) as i64, scale % 28).abs();
    let words = bijak::core::amount_in_words(amount);
    assert!(!words.contains("  "));
    assert!(!words.is_empty());
});
