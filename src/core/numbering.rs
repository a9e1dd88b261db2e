use chrono::{Datelike, NaiveDate};

use super::error::BijakError;

/// Year-scoped invoice number sequence.
///
/// Issues numbers in the format `INV-<year>-<5-digit-seq>`, e.g.
/// "INV-2026-00001", "INV-2026-00002". Numbers are assigned exactly once
/// and increase monotonically within a year; the counter resets to 1 when
/// the year advances.
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    year: i32,
    next_number: u64,
    zero_pad: usize,
}

impl InvoiceNumberSequence {
    /// Create a new sequence starting at 1 with the standard "INV-" prefix.
    pub fn new(year: i32) -> Self {
        Self {
            prefix: "INV-".to_string(),
            year,
            next_number: 1,
            zero_pad: 5,
        }
    }

    /// Continue an existing sequence from a given counter value, e.g. after
    /// reloading persisted state.
    pub fn starting_at(year: i32, next_number: u64) -> Self {
        Self {
            next_number,
            ..Self::new(year)
        }
    }

    /// Override the prefix (default "INV-").
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Issue the next invoice number, consuming it.
    pub fn next_number(&mut self) -> String {
        let num = self.next_number;
        self.next_number += 1;
        self.format(num)
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        self.format(self.next_number)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Advance to a new year, resetting the counter to 1. The year can
    /// only move forward.
    pub fn advance_year(&mut self, new_year: i32) -> Result<(), BijakError> {
        if new_year <= self.year {
            return Err(BijakError::Numbering(format!(
                "new year {new_year} must be greater than current year {}",
                self.year
            )));
        }
        self.year = new_year;
        self.next_number = 1;
        Ok(())
    }

    /// Advance the year automatically when a bill date falls in a later
    /// year. Returns true if the year was advanced.
    pub fn auto_advance(&mut self, bill_date: NaiveDate) -> bool {
        if bill_date.year() > self.year {
            self.year = bill_date.year();
            self.next_number = 1;
            true
        } else {
            false
        }
    }

    fn format(&self, num: u64) -> String {
        format!(
            "{}{}-{:0>width$}",
            self.prefix,
            self.year,
            num,
            width = self.zero_pad
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_numbering() {
        let mut seq = InvoiceNumberSequence::new(2026);
        assert_eq!(seq.next_number(), "INV-2026-00001");
        assert_eq!(seq.next_number(), "INV-2026-00002");
        assert_eq!(seq.next_number(), "INV-2026-00003");
    }

    #[test]
    fn peek_does_not_consume() {
        let mut seq = InvoiceNumberSequence::new(2026);
        assert_eq!(seq.peek(), "INV-2026-00001");
        assert_eq!(seq.peek(), "INV-2026-00001");
        assert_eq!(seq.next_number(), "INV-2026-00001");
        assert_eq!(seq.peek(), "INV-2026-00002");
    }

    #[test]
    fn starting_at() {
        let mut seq = InvoiceNumberSequence::starting_at(2026, 412);
        assert_eq!(seq.next_number(), "INV-2026-00412");
    }

    #[test]
    fn year_advance_resets_counter() {
        let mut seq = InvoiceNumberSequence::new(2025);
        seq.next_number();
        seq.next_number();
        seq.advance_year(2026).unwrap();
        assert_eq!(seq.next_number(), "INV-2026-00001");
    }

    #[test]
    fn year_advance_rejects_past() {
        let mut seq = InvoiceNumberSequence::new(2026);
        assert!(seq.advance_year(2025).is_err());
        assert!(seq.advance_year(2026).is_err());
    }

    #[test]
    fn auto_advance_on_bill_date() {
        let mut seq = InvoiceNumberSequence::new(2025);
        seq.next_number();

        let jan = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert!(seq.auto_advance(jan));
        assert_eq!(seq.next_number(), "INV-2026-00001");

        let feb = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert!(!seq.auto_advance(feb));
        assert_eq!(seq.next_number(), "INV-2026-00002");
    }
}
