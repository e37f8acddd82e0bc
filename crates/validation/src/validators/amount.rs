//! Transaction amount validator

use crate::error::{FailureKind, ValidationResult};
use crate::traits::{FieldContext, FieldValidator};
use serde_json::{json, Value};

/// Hard ceiling on a single transaction, in display currency units
pub const DEFAULT_MAX_AMOUNT: f64 = 50_000.0;

/// Validator for positive decimal amounts up to a ceiling
#[derive(Debug, Clone)]
pub struct AmountValidator {
    /// Maximum amount (inclusive)
    pub max: f64,
}

impl AmountValidator {
    pub fn new() -> Self {
        Self {
            max: DEFAULT_MAX_AMOUNT,
        }
    }

    /// Set the maximum accepted amount
    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    pub fn check(&self, raw: &str) -> ValidationResult {
        let raw = raw.trim();
        if raw.is_empty() {
            return ValidationResult::failure(FailureKind::EmptyInput, "Amount is required");
        }

        let amount = match raw.parse::<f64>() {
            Ok(amount) if amount.is_finite() => amount,
            _ => {
                return ValidationResult::failure(
                    FailureKind::NotANumber,
                    "Amount must be a valid number",
                );
            }
        };

        if amount <= 0.0 {
            return ValidationResult::failure(
                FailureKind::NonPositive,
                "Amount must be greater than zero",
            );
        }

        if amount > self.max {
            return ValidationResult::failure(
                FailureKind::ExceedsLimit,
                format!("Amount cannot exceed ${}", group_thousands(self.max)),
            );
        }

        ValidationResult::success("Valid amount")
    }
}

impl Default for AmountValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// `50000.0` -> `50,000`; fractional ceilings keep two decimals
fn group_thousands(value: f64) -> String {
    let cents = (value * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match cents % 100 {
        0 => grouped,
        fraction => format!("{}.{:02}", grouped, fraction),
    }
}

impl FieldValidator for AmountValidator {
    fn validate(&self, value: &str, _ctx: &FieldContext<'_>) -> ValidationResult {
        self.check(value)
    }

    fn rule_name(&self) -> &'static str {
        "amount"
    }

    fn parameters(&self) -> Option<Value> {
        Some(json!({ "max": self.max }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_bounds() {
        let validator = AmountValidator::new();
        assert_eq!(validator.check("0").kind(), Some(FailureKind::NonPositive));
        assert_eq!(validator.check("-5").kind(), Some(FailureKind::NonPositive));
        assert!(validator.check("0.01").is_valid());
        assert!(validator.check("50000").is_valid());
        assert_eq!(validator.check("50000.01").kind(), Some(FailureKind::ExceedsLimit));
    }

    #[test]
    fn test_amount_parsing() {
        let validator = AmountValidator::new();
        assert_eq!(validator.check("abc").kind(), Some(FailureKind::NotANumber));
        assert_eq!(validator.check("12abc").kind(), Some(FailureKind::NotANumber));
        assert_eq!(validator.check("NaN").kind(), Some(FailureKind::NotANumber));
        assert_eq!(validator.check("inf").kind(), Some(FailureKind::NotANumber));
        assert_eq!(validator.check("").kind(), Some(FailureKind::EmptyInput));
        assert_eq!(validator.check("   ").kind(), Some(FailureKind::EmptyInput));
        assert!(validator.check(" 125.50 ").is_valid());
    }

    #[test]
    fn test_limit_message() {
        let result = AmountValidator::new().check("60000");
        assert_eq!(result.message, "Amount cannot exceed $50,000");

        let result = AmountValidator::new().max(1234.5).check("2000");
        assert_eq!(result.message, "Amount cannot exceed $1,234.50");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(1_234_567.0), "1,234,567");
    }
}
