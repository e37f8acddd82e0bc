//! Cardholder name validator

use crate::error::{FailureKind, ValidationResult};
use crate::traits::{FieldContext, FieldValidator};
use regex::Regex;
use std::sync::LazyLock;

// Embossed names are upper case; the input layer upper-cases as the user types.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z\s]+$").expect("name pattern is valid"));

/// Validator for upper-case cardholder names
#[derive(Debug, Clone)]
pub struct CardholderNameValidator {
    /// Minimum character count
    pub min_length: usize,
}

impl CardholderNameValidator {
    pub fn new() -> Self {
        Self { min_length: 2 }
    }

    pub fn check(&self, name: &str) -> ValidationResult {
        if name.trim().is_empty() {
            return ValidationResult::failure(FailureKind::EmptyInput, "Cardholder name is required");
        }

        if name.chars().count() < self.min_length {
            return ValidationResult::failure(
                FailureKind::TooShort,
                format!("Name must be at least {} characters", self.min_length),
            );
        }

        if !NAME_PATTERN.is_match(name) {
            return ValidationResult::failure(
                FailureKind::InvalidCharacters,
                "Name must contain only letters and spaces",
            );
        }

        ValidationResult::success("Valid cardholder name")
    }
}

impl Default for CardholderNameValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldValidator for CardholderNameValidator {
    fn validate(&self, value: &str, _ctx: &FieldContext<'_>) -> ValidationResult {
        self.check(value)
    }

    fn rule_name(&self) -> &'static str {
        "cardholder_name"
    }
}
