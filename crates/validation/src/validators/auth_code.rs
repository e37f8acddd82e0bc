//! Authorization (approval) code validator

use crate::error::{FailureKind, ValidationResult};
use crate::protocol::ProtocolDigitMap;
use crate::traits::{FieldContext, FieldValidator};
use serde_json::{json, Value};
use std::sync::Arc;

/// Validator for approval codes whose length depends on the selected protocol
#[derive(Debug, Clone)]
pub struct AuthCodeValidator {
    protocols: Arc<ProtocolDigitMap>,
}

impl AuthCodeValidator {
    /// Create a validator over the built-in protocol table
    pub fn new() -> Self {
        Self::with_protocols(Arc::new(ProtocolDigitMap::standard()))
    }

    pub fn with_protocols(protocols: Arc<ProtocolDigitMap>) -> Self {
        Self { protocols }
    }

    pub fn protocols(&self) -> &ProtocolDigitMap {
        &self.protocols
    }

    /// Validate `code` against the protocol selected alongside it
    pub fn check(&self, code: &str, protocol: Option<&str>) -> ValidationResult {
        if code.is_empty() {
            return ValidationResult::failure(
                FailureKind::EmptyInput,
                "Authorization code is required",
            );
        }

        let Some(protocol) = protocol.filter(|p| !p.trim().is_empty()) else {
            return ValidationResult::failure(
                FailureKind::ProtocolRequired,
                "Please select a protocol first",
            );
        };

        let Some(required) = self.protocols.required_digits(protocol) else {
            return ValidationResult::failure(
                FailureKind::UnknownProtocol,
                "Invalid protocol selected",
            );
        };

        if !code.chars().all(|c| c.is_ascii_digit()) {
            return ValidationResult::failure(
                FailureKind::NonDigit,
                "Authorization code must contain only digits",
            );
        }

        if code.len() != usize::from(required) {
            return ValidationResult::failure(
                FailureKind::WrongLength,
                format!("Authorization code must be exactly {} digits", required),
            );
        }

        ValidationResult::success(format!("Valid {}-digit authorization code", required))
    }
}

impl Default for AuthCodeValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldValidator for AuthCodeValidator {
    fn validate(&self, value: &str, ctx: &FieldContext<'_>) -> ValidationResult {
        self.check(value, ctx.protocol)
    }

    fn rule_name(&self) -> &'static str {
        "auth_code"
    }

    fn parameters(&self) -> Option<Value> {
        Some(json!({ "protocols": self.protocols.len() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOUR_DIGIT: &str = "POS Terminal -101.1 (4-digit approval)";
    const SIX_DIGIT: &str = "POS Terminal -201.3 (6-digit approval)";

    #[test]
    fn test_auth_code_lengths() {
        let validator = AuthCodeValidator::new();

        let result = validator.check("1234", Some(FOUR_DIGIT));
        assert!(result.is_valid());
        assert_eq!(result.message, "Valid 4-digit authorization code");

        let result = validator.check("12345", Some(FOUR_DIGIT));
        assert_eq!(result.kind(), Some(FailureKind::WrongLength));
        assert_eq!(result.message, "Authorization code must be exactly 4 digits");

        assert!(validator.check("123456", Some(SIX_DIGIT)).is_valid());
        assert_eq!(validator.check("1234", Some(SIX_DIGIT)).kind(), Some(FailureKind::WrongLength));
    }

    #[test]
    fn test_auth_code_check_order() {
        let validator = AuthCodeValidator::new();

        assert_eq!(validator.check("", None).kind(), Some(FailureKind::EmptyInput));
        assert_eq!(validator.check("1234", None).kind(), Some(FailureKind::ProtocolRequired));
        assert_eq!(validator.check("1234", Some("")).kind(), Some(FailureKind::ProtocolRequired));
        assert_eq!(validator.check("12ab", Some("Nope")).kind(), Some(FailureKind::UnknownProtocol));
        assert_eq!(validator.check("12ab", Some(FOUR_DIGIT)).kind(), Some(FailureKind::NonDigit));
    }

    #[test]
    fn test_custom_protocol_map() {
        let map = ProtocolDigitMap::from_entries([("Kiosk", 6)]).unwrap();
        let validator = AuthCodeValidator::with_protocols(Arc::new(map));

        assert!(validator.check("654321", Some("Kiosk")).is_valid());
        assert_eq!(
            validator.check("1234", Some(FOUR_DIGIT)).kind(),
            Some(FailureKind::UnknownProtocol)
        );
    }

    #[test]
    fn test_reads_protocol_from_context() {
        let validator = AuthCodeValidator::new();
        let today = chrono::NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let ctx = FieldContext::new(today).with_protocol(Some(FOUR_DIGIT));
        assert!(validator.validate("9876", &ctx).is_valid());
    }
}
