//! Amount-in-words conversion under the Indian numbering system.
//!
//! "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Rupees" —
//! grouping by crore (1,00,00,000), lakh (1,00,000), thousand and hundred.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Render 0..=99. Returns an empty string for 0 so callers can join
/// components without emitting a stray "Zero".
fn two_digits(n: u64) -> String {
    debug_assert!(n < 100);
    if n < 20 {
        ONES[n as usize].to_string()
    } else if n % 10 == 0 {
        TENS[(n / 10) as usize].to_string()
    } else {
        format!("{} {}", TENS[(n / 10) as usize], ONES[(n % 10) as usize])
    }
}

/// A non-negative integer in Indian-grouped English words; "Zero" for 0.
fn integer_words(mut n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let crore = n / 10_000_000;
    n %= 10_000_000;
    let lakh = n / 100_000;
    n %= 100_000;
    let thousand = n / 1_000;
    n %= 1_000;
    let hundred = n / 100;
    let rest = n % 100;

    if crore > 0 {
        // Amounts of 100 crore and above recurse so "One Hundred Crore"
        // comes out grouped rather than as a raw number.
        let crore_words = if crore > 99 {
            integer_words(crore)
        } else {
            two_digits(crore)
        };
        parts.push(format!("{crore_words} Crore"));
    }
    if lakh > 0 {
        parts.push(format!("{} Lakh", two_digits(lakh)));
    }
    if thousand > 0 {
        parts.push(format!("{} Thousand", two_digits(thousand)));
    }
    if hundred > 0 {
        parts.push(format!("{} Hundred", ONES[hundred as usize]));
    }
    if rest > 0 {
        parts.push(two_digits(rest));
    }

    parts.join(" ")
}

/// Convert a non-negative rupee amount into English words, with an
/// optional paise clause. An amount of exactly zero is the bare literal
/// "Zero".
///
/// ```
/// use bijak::core::amount_in_words;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(amount_in_words(dec!(0)), "Zero");
/// assert_eq!(amount_in_words(dec!(100)), "One Hundred Rupees");
/// assert_eq!(
///     amount_in_words(dec!(100.50)),
///     "One Hundred Rupees and Fifty Paise"
/// );
/// ```
pub fn amount_in_words(amount: Decimal) -> String {
    debug_assert!(!amount.is_sign_negative(), "amounts are non-negative");

    // Work in whole paise so a fractional part that rounds up to a full
    // rupee (e.g. 1.999) carries instead of printing "One Hundred Paise".
    let total_paise = (amount * dec!(100))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0);
    if total_paise == 0 {
        return "Zero".to_string();
    }
    let rupees = total_paise / 100;
    let paise = total_paise % 100;

    let mut words = format!("{} Rupees", integer_words(rupees));
    if paise > 0 {
        words.push_str(&format!(" and {} Paise", two_digits(paise)));
    }
    words
}
