//! Email format validator

use crate::error::{FailureKind, ValidationResult};
use crate::traits::{FieldContext, FieldValidator};
use regex::Regex;
use std::sync::LazyLock;

// local@domain.tld: no whitespace, exactly one '@', a dot somewhere after it
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Validator for receipt email addresses
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl EmailValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, email: &str) -> ValidationResult {
        if email.is_empty() {
            return ValidationResult::failure(FailureKind::EmptyInput, "Email is required");
        }

        if !EMAIL_PATTERN.is_match(email) {
            return ValidationResult::failure(FailureKind::FormatError, "Invalid email format");
        }

        ValidationResult::success("Valid email address")
    }
}

impl FieldValidator for EmailValidator {
    fn validate(&self, value: &str, _ctx: &FieldContext<'_>) -> ValidationResult {
        self.check(value)
    }

    fn rule_name(&self) -> &'static str {
        "email"
    }
}
