//! Validation outcome types and error handling

use crate::luhn::CardNetwork;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Machine-readable reason a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    EmptyInput,
    LengthOutOfRange,
    NonDigit,
    LuhnFailure,
    FormatError,
    InvalidMonth,
    Expired,
    NotANumber,
    NonPositive,
    ExceedsLimit,
    TooShort,
    InvalidCharacters,
    ProtocolRequired,
    UnknownProtocol,
    WrongLength,
}

impl FailureKind {
    /// Get the snake_case code used in serialized reports
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::EmptyInput => "empty_input",
            FailureKind::LengthOutOfRange => "length_out_of_range",
            FailureKind::NonDigit => "non_digit",
            FailureKind::LuhnFailure => "luhn_failure",
            FailureKind::FormatError => "format_error",
            FailureKind::InvalidMonth => "invalid_month",
            FailureKind::Expired => "expired",
            FailureKind::NotANumber => "not_a_number",
            FailureKind::NonPositive => "non_positive",
            FailureKind::ExceedsLimit => "exceeds_limit",
            FailureKind::TooShort => "too_short",
            FailureKind::InvalidCharacters => "invalid_characters",
            FailureKind::ProtocolRequired => "protocol_required",
            FailureKind::UnknownProtocol => "unknown_protocol",
            FailureKind::WrongLength => "wrong_length",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of validating a single field value
///
/// Expected bad input is reported here with `valid = false`; validators
/// never return `Err` for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether the value passed every check
    pub valid: bool,
    /// Human-readable message for display next to the input
    pub message: String,
    /// Detected card network, only set by a successful card-number check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardNetwork>,
    /// Failure code, only set when `valid` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<FailureKind>,
}

impl ValidationResult {
    /// Create a passing result
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
            card_type: None,
            code: None,
        }
    }

    /// Create a failing result with its failure code
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
            card_type: None,
            code: Some(kind),
        }
    }

    /// Attach the detected card network
    pub fn with_card_type(mut self, network: CardNetwork) -> Self {
        self.card_type = Some(network);
        self
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Failure code, if this result is a failure
    pub fn kind(&self) -> Option<FailureKind> {
        self.code
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Collected per-field results of one form-submit attempt
///
/// `is_valid` is true iff every recorded result is valid. `errors` holds
/// the failing messages in the order their fields were recorded.
///
/// Serialize-only: the recording order is not part of the wire shape, so a
/// report is always built through [`FormValidationReport::record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidationReport {
    pub is_valid: bool,
    pub results: BTreeMap<String, ValidationResult>,
    pub errors: Vec<String>,
    #[serde(skip)]
    order: Vec<String>,
}

impl FormValidationReport {
    /// Create an empty (and therefore valid) report
    pub fn new() -> Self {
        Self {
            is_valid: true,
            results: BTreeMap::new(),
            errors: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Record the result for a field
    ///
    /// Recording a field twice replaces its earlier result but keeps its
    /// original position in `errors`.
    pub fn record(&mut self, field: impl Into<String>, result: ValidationResult) {
        let field = field.into();
        if self.results.insert(field.clone(), result).is_none() {
            self.order.push(field);
        }
        self.refresh();
    }

    fn refresh(&mut self) {
        self.errors = self
            .order
            .iter()
            .filter_map(|field| self.results.get(field))
            .filter(|result| !result.valid)
            .map(|result| result.message.clone())
            .collect();
        self.is_valid = self.results.values().all(|result| result.valid);
    }

    /// Get the result recorded for a field
    pub fn field_result(&self, field: &str) -> Option<&ValidationResult> {
        self.results.get(field)
    }

    /// Names of the fields that failed, in recording order
    pub fn failed_fields(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter(|field| self.results.get(*field).is_some_and(|r| !r.valid))
            .map(String::as_str)
            .collect()
    }

    /// Number of fields checked
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Convert to the JSON shape the form-submission handler consumes
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "isValid": self.is_valid,
            "results": self.results,
            "errors": self.errors,
        })
    }
}

impl Default for FormValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FormValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            write!(f, "All {} field(s) valid", self.results.len())
        } else {
            write!(f, "Validation failed for {} field(s):", self.errors.len())?;
            for field in self.failed_fields() {
                if let Some(result) = self.results.get(field) {
                    write!(f, "\n  {}: {}", field, result.message)?;
                }
            }
            Ok(())
        }
    }
}

/// Errors raised while building a protocol digit map
#[derive(Debug, Error)]
pub enum ProtocolMapError {
    #[error("Protocol '{label}' requires {digits} digits; only 4 or 6 are supported")]
    InvalidDigits { label: String, digits: u8 },

    #[error("Protocol map must contain at least one protocol")]
    Empty,

    #[error("Protocol map YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_result_creation() {
        let ok = ValidationResult::success("Valid CVV");
        assert!(ok.is_valid());
        assert!(ok.kind().is_none());

        let bad = ValidationResult::failure(FailureKind::FormatError, "CVV must be 3-4 digits");
        assert!(!bad.is_valid());
        assert_eq!(bad.kind(), Some(FailureKind::FormatError));
        assert_eq!(bad.to_string(), "CVV must be 3-4 digits (format_error)");
    }

    #[test]
    fn test_validation_result_serializes_camel_case() {
        let result = ValidationResult::success("Valid card number").with_card_type(CardNetwork::Visa);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["valid"], true);
        assert_eq!(json["cardType"], "VISA");
        assert!(json.get("code").is_none());

        let failed = ValidationResult::failure(FailureKind::LuhnFailure, "bad");
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["code"], "luhn_failure");
        assert!(json.get("cardType").is_none());
    }

    #[test]
    fn test_report_collects_all_failures() {
        let mut report = FormValidationReport::new();
        assert!(report.is_valid);

        report.record("cvv", ValidationResult::failure(FailureKind::FormatError, "CVV must be 3-4 digits"));
        report.record("amount", ValidationResult::success("Valid amount"));
        report.record("cardNumber", ValidationResult::failure(FailureKind::EmptyInput, "Card number is required"));

        assert!(!report.is_valid);
        assert_eq!(report.len(), 3);
        assert_eq!(report.errors, vec!["CVV must be 3-4 digits", "Card number is required"]);
        assert_eq!(report.failed_fields(), vec!["cvv", "cardNumber"]);
    }

    #[test]
    fn test_report_rerecord_replaces_result() {
        let mut report = FormValidationReport::new();
        report.record("cvv", ValidationResult::failure(FailureKind::FormatError, "CVV must be 3-4 digits"));
        report.record("cvv", ValidationResult::success("Valid CVV"));

        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_report_json_shape() {
        let mut report = FormValidationReport::new();
        report.record("cvv", ValidationResult::failure(FailureKind::EmptyInput, "CVV is required"));

        let json = report.to_json();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["errors"][0], "CVV is required");
        assert_eq!(json["results"]["cvv"]["code"], "empty_input");
    }

    #[test]
    fn test_report_serializes_without_recording_order() {
        let mut report = FormValidationReport::new();
        report.record("cvv", ValidationResult::failure(FailureKind::EmptyInput, "CVV is required"));
        report.record("amount", ValidationResult::failure(FailureKind::NonPositive, "Amount must be greater than zero"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, report.to_json());
        assert!(json.get("order").is_none());

        let copy = report.clone();
        assert_eq!(copy.failed_fields(), vec!["cvv", "amount"]);
        assert_eq!(
            copy.to_string(),
            "Validation failed for 2 field(s):\n  cvv: CVV is required\n  amount: Amount must be greater than zero"
        );
    }
}
