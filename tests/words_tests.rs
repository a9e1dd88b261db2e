use bijak::core::amount_in_words;
use rust_decimal_macros::dec;

#[test]
fn zero_is_literal() {
    assert_eq!(amount_in_words(dec!(0)), "Zero");
}

#[test]
fn one_hundred() {
    assert_eq!(amount_in_words(dec!(100)), "One Hundred Rupees");
}

#[test]
fn lakh_grouping() {
    assert_eq!(
        amount_in_words(dec!(1234567)),
        "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Rupees"
    );
}

#[test]
fn paise_suffix() {
    assert!(amount_in_words(dec!(100.50)).ends_with("and Fifty Paise"));
}

#[test]
fn exact_rupees_have_no_paise_clause() {
    assert_eq!(amount_in_words(dec!(260.00)), "Two Hundred Sixty Rupees");
}

#[test]
fn teens_use_direct_lookup() {
    assert_eq!(amount_in_words(dec!(14)), "Fourteen Rupees");
    assert_eq!(amount_in_words(dec!(19)), "Nineteen Rupees");
}

#[test]
fn round_tens_have_no_trailing_ones() {
    assert_eq!(amount_in_words(dec!(40)), "Forty Rupees");
    assert_eq!(amount_in_words(dec!(90.20)), "Ninety Rupees and Twenty Paise");
}

#[test]
fn crore_amounts() {
    assert_eq!(amount_in_words(dec!(10000000)), "One Crore Rupees");
    assert_eq!(
        amount_in_words(dec!(12345678)),
        "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight Rupees"
    );
}

#[test]
fn magnitude_gaps_skip_silent_components() {
    // No stray "Zero" for empty thousand/hundred positions.
    assert_eq!(amount_in_words(dec!(100001)), "One Lakh One Rupees");
    assert_eq!(amount_in_words(dec!(1000005)), "Ten Lakh Five Rupees");
}

#[test]
fn fractional_paise_round_to_nearest() {
    assert!(amount_in_words(dec!(10.255)).ends_with("and Twenty Six Paise"));
    // A fraction rounding up to a full rupee carries over.
    assert_eq!(amount_in_words(dec!(1.999)), "Two Rupees");
}

#[test]
fn single_spaced_output() {
    for amount in [dec!(105), dec!(1000100), dec!(90909090.09)] {
        let words = amount_in_words(amount);
        assert!(!words.contains("  "), "double space in {words:?}");
        assert_eq!(words.trim(), words);
    }
}
