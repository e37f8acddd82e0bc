//! Phone number validator

use crate::error::{FailureKind, ValidationResult};
use crate::traits::{FieldContext, FieldValidator};
use serde_json::{json, Value};

/// Validator for phone numbers in any punctuation style
///
/// Only the digits are counted; `+1 (555) 123-4567` has 11.
#[derive(Debug, Clone)]
pub struct PhoneValidator {
    pub min_digits: usize,
    pub max_digits: usize,
}

impl PhoneValidator {
    pub fn new() -> Self {
        Self {
            min_digits: 10,
            max_digits: 15,
        }
    }

    pub fn check(&self, phone: &str) -> ValidationResult {
        if phone.is_empty() {
            return ValidationResult::failure(FailureKind::EmptyInput, "Phone number is required");
        }

        let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
        if digits < self.min_digits || digits > self.max_digits {
            return ValidationResult::failure(
                FailureKind::LengthOutOfRange,
                format!(
                    "Phone number must be {}-{} digits",
                    self.min_digits, self.max_digits
                ),
            );
        }

        ValidationResult::success("Valid phone number")
    }
}

impl Default for PhoneValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldValidator for PhoneValidator {
    fn validate(&self, value: &str, _ctx: &FieldContext<'_>) -> ValidationResult {
        self.check(value)
    }

    fn rule_name(&self) -> &'static str {
        "phone"
    }

    fn parameters(&self) -> Option<Value> {
        Some(json!({
            "min_digits": self.min_digits,
            "max_digits": self.max_digits,
        }))
    }
}
