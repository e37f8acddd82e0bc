//! Field-validator registry and form-level aggregation

use crate::error::{FormValidationReport, ValidationResult};
use crate::protocol::ProtocolDigitMap;
use crate::traits::{Clock, FieldContext, FieldValidator, SystemClock};
use crate::validators::*;
use std::collections::HashMap;
use std::sync::Arc;

/// Raw form submission: field name to the value typed by the user
pub type FormData = HashMap<String, String>;

/// Field names used by the terminal's payment form
pub mod fields {
    pub const CARD_NUMBER: &str = "cardNumber";
    pub const EXPIRY_DATE: &str = "expiryDate";
    pub const CVV: &str = "cvv";
    pub const AMOUNT: &str = "amount";
    pub const CARDHOLDER_NAME: &str = "cardholderName";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const AUTH_CODE: &str = "authCode";
    /// Not validated itself; supplies context to the auth-code field
    pub const PROTOCOL: &str = "protocol";
}

/// Ordered collection of field validators plus the clock they run against
#[derive(Clone)]
pub struct Registry {
    entries: Vec<(String, Arc<dyn FieldValidator>)>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("fields", &self.field_names())
            .finish()
    }
}

impl Registry {
    /// Create an empty registry using the system clock
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Registry with every payment-form field and default settings
    pub fn standard() -> Self {
        RegistryBuilder::new().build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Register a validator for a field, replacing any previous one in place
    pub fn field<V>(mut self, name: impl Into<String>, validator: V) -> Self
    where
        V: FieldValidator + 'static,
    {
        self.insert(name.into(), Arc::new(validator));
        self
    }

    fn insert(&mut self, name: String, validator: Arc<dyn FieldValidator>) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = validator,
            None => self.entries.push((name, validator)),
        }
    }

    /// Replace the clock used for date-sensitive fields
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Get the validator registered for a field
    pub fn get(&self, field: &str) -> Option<&Arc<dyn FieldValidator>> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, validator)| validator)
    }

    /// Registered field names in registration order
    pub fn field_names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate one field as an on-blur hook would
    ///
    /// Returns `None` when no validator is registered for `field`.
    pub fn validate_field(
        &self,
        field: &str,
        value: &str,
        protocol: Option<&str>,
    ) -> Option<ValidationResult> {
        let ctx = FieldContext::from_clock(self.clock.as_ref()).with_protocol(protocol);
        self.get(field).map(|validator| validator.validate(value, &ctx))
    }

    /// Validate every registered field present in the form
    ///
    /// Fields without a registered validator are ignored. All failures are
    /// reported, not just the first. The `protocol` entry supplies context
    /// to the auth-code validator.
    pub fn validate_form(&self, form: &FormData) -> FormValidationReport {
        let ctx = FieldContext::from_clock(self.clock.as_ref())
            .with_protocol(form.get(fields::PROTOCOL).map(String::as_str));

        let mut report = FormValidationReport::new();
        for (field, validator) in &self.entries {
            let Some(value) = form.get(field) else {
                continue;
            };

            let result = validator.validate(value, &ctx);
            if let Some(code) = result.code {
                tracing::debug!(field = %field, rule = validator.rule_name(), %code, "field failed validation");
            }
            report.record(field.clone(), result);
        }

        tracing::debug!(
            checked = report.len(),
            failed = report.errors.len(),
            "form validation complete"
        );

        report
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for the standard payment-form registry
pub struct RegistryBuilder {
    max_amount: f64,
    protocols: ProtocolDigitMap,
    clock: Arc<dyn Clock>,
    extra: Vec<(String, Arc<dyn FieldValidator>)>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            max_amount: amount::DEFAULT_MAX_AMOUNT,
            protocols: ProtocolDigitMap::standard(),
            clock: Arc::new(SystemClock),
            extra: Vec::new(),
        }
    }

    /// Set the amount ceiling
    pub fn max_amount(mut self, max_amount: f64) -> Self {
        self.max_amount = max_amount;
        self
    }

    /// Set the protocol table used by the auth-code field
    pub fn protocols(mut self, protocols: ProtocolDigitMap) -> Self {
        self.protocols = protocols;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Add or override a field validator
    pub fn field<V>(mut self, name: impl Into<String>, validator: V) -> Self
    where
        V: FieldValidator + 'static,
    {
        self.extra.push((name.into(), Arc::new(validator)));
        self
    }

    /// Build the registry
    pub fn build(self) -> Registry {
        let mut registry = Registry::new()
            .with_clock(self.clock)
            .field(fields::CARD_NUMBER, CardNumberValidator::new())
            .field(fields::EXPIRY_DATE, ExpiryDateValidator::new())
            .field(fields::CVV, CvvValidator::new())
            .field(fields::AMOUNT, AmountValidator::new().max(self.max_amount))
            .field(fields::CARDHOLDER_NAME, CardholderNameValidator::new())
            .field(fields::EMAIL, EmailValidator::new())
            .field(fields::PHONE, PhoneValidator::new())
            .field(
                fields::AUTH_CODE,
                AuthCodeValidator::with_protocols(Arc::new(self.protocols)),
            );

        for (name, validator) in self.extra {
            registry.insert(name, validator);
        }

        registry
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
