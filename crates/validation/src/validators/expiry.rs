//! Card expiry date validator (`MM/YY`)

use crate::error::{FailureKind, ValidationResult};
use crate::traits::{FieldContext, FieldValidator};
use chrono::{Datelike, NaiveDate};

/// Validator for `MM/YY` expiry dates, relative to a supplied "today"
///
/// A card stays valid through the whole of its expiry month.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpiryDateValidator;

impl ExpiryDateValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate an expiry date as of `today`
    pub fn check(&self, expiry: &str, today: NaiveDate) -> ValidationResult {
        if expiry.is_empty() {
            return ValidationResult::failure(FailureKind::EmptyInput, "Expiry date is required");
        }

        let Some((month, year)) = split_expiry(expiry) else {
            return ValidationResult::failure(
                FailureKind::FormatError,
                "Expiry date must be in MM/YY format",
            );
        };

        let (Some(month), Some(year)) = (parse_two_digits(month), parse_two_digits(year)) else {
            return ValidationResult::failure(FailureKind::FormatError, "Invalid expiry date format");
        };

        if !(1..=12).contains(&month) {
            return ValidationResult::failure(
                FailureKind::InvalidMonth,
                "Invalid month (must be 01-12)",
            );
        }

        let current_year = today.year().rem_euclid(100) as u32;
        let current_month = today.month();

        if year < current_year || (year == current_year && month < current_month) {
            return ValidationResult::failure(FailureKind::Expired, "Card has expired");
        }

        ValidationResult::success("Valid expiry date")
    }
}

/// Split on the slash, which must sit at byte index 2 of a 5-byte value
fn split_expiry(expiry: &str) -> Option<(&str, &str)> {
    if expiry.len() != 5 || expiry.as_bytes()[2] != b'/' {
        return None;
    }
    Some((&expiry[..2], &expiry[3..]))
}

fn parse_two_digits(part: &str) -> Option<u32> {
    if part.bytes().all(|b| b.is_ascii_digit()) {
        part.parse().ok()
    } else {
        None
    }
}

impl FieldValidator for ExpiryDateValidator {
    fn validate(&self, value: &str, ctx: &FieldContext<'_>) -> ValidationResult {
        self.check(value, ctx.today)
    }

    fn rule_name(&self) -> &'static str {
        "expiry_date"
    }
}
