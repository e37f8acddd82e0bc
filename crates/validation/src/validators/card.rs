//! Card number validator

use crate::error::{FailureKind, ValidationResult};
use crate::luhn::{luhn_check, CardNetwork};
use crate::traits::{FieldContext, FieldValidator};
use serde_json::{json, Value};

/// Validator for primary account numbers typed with optional spaces
#[derive(Debug, Clone)]
pub struct CardNumberValidator {
    /// Minimum digit count (inclusive)
    pub min_length: usize,
    /// Maximum digit count (inclusive)
    pub max_length: usize,
}

impl CardNumberValidator {
    /// Create a validator accepting 13 to 19 digits
    pub fn new() -> Self {
        Self {
            min_length: 13,
            max_length: 19,
        }
    }

    /// Set the accepted digit-count range
    pub fn length_range(mut self, min: usize, max: usize) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Validate a card number, detecting its network on success
    pub fn check(&self, raw: &str) -> ValidationResult {
        let number: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

        if number.is_empty() {
            return ValidationResult::failure(FailureKind::EmptyInput, "Card number is required");
        }

        let length = number.chars().count();
        if length < self.min_length || length > self.max_length {
            return ValidationResult::failure(
                FailureKind::LengthOutOfRange,
                format!(
                    "Card number must be {}-{} digits",
                    self.min_length, self.max_length
                ),
            );
        }

        if !number.chars().all(|c| c.is_ascii_digit()) {
            return ValidationResult::failure(
                FailureKind::NonDigit,
                "Card number must contain only digits",
            );
        }

        if !luhn_check(&number) {
            return ValidationResult::failure(
                FailureKind::LuhnFailure,
                "Invalid card number (failed Luhn check)",
            );
        }

        ValidationResult::success("Valid card number").with_card_type(CardNetwork::detect(&number))
    }
}

impl Default for CardNumberValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldValidator for CardNumberValidator {
    fn validate(&self, value: &str, _ctx: &FieldContext<'_>) -> ValidationResult {
        self.check(value)
    }

    fn rule_name(&self) -> &'static str {
        "card_number"
    }

    fn parameters(&self) -> Option<Value> {
        Some(json!({
            "min_length": self.min_length,
            "max_length": self.max_length,
        }))
    }
}
