//! Card verification value validator

use crate::error::{FailureKind, ValidationResult};
use crate::traits::{FieldContext, FieldValidator};
use regex::Regex;
use std::sync::LazyLock;

static CVV_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("CVV pattern is valid"));

/// Validator for 3 or 4 digit security codes
#[derive(Debug, Clone, Copy, Default)]
pub struct CvvValidator;

impl CvvValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, cvv: &str) -> ValidationResult {
        if cvv.is_empty() {
            return ValidationResult::failure(FailureKind::EmptyInput, "CVV is required");
        }

        if !CVV_PATTERN.is_match(cvv) {
            return ValidationResult::failure(FailureKind::FormatError, "CVV must be 3-4 digits");
        }

        ValidationResult::success("Valid CVV")
    }
}

impl FieldValidator for CvvValidator {
    fn validate(&self, value: &str, _ctx: &FieldContext<'_>) -> ValidationResult {
        self.check(value)
    }

    fn rule_name(&self) -> &'static str {
        "cvv"
    }
}
