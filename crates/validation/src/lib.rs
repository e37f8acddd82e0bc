//! # terminal-validation
//!
//! Client-side payment-field validation for the terminal front end.
//! Every validator is a pure function of its input (plus the injected
//! "today" for expiry dates) and reports failures as data, never as `Err`.

pub mod error;
pub mod luhn;
pub mod protocol;
pub mod registry;
pub mod traits;
pub mod validators;

// Re-exports for easy access
pub use error::{FailureKind, FormValidationReport, ProtocolMapError, ValidationResult};
pub use luhn::{luhn_check, CardNetwork};
pub use protocol::ProtocolDigitMap;
pub use registry::{fields, FormData, Registry, RegistryBuilder};
pub use traits::{Clock, FieldContext, FieldValidator, FixedClock, SystemClock};

// Built-in validators
pub use validators::{
    amount::AmountValidator,
    auth_code::AuthCodeValidator,
    card::CardNumberValidator,
    cvv::CvvValidator,
    email::EmailValidator,
    expiry::ExpiryDateValidator,
    name::CardholderNameValidator,
    phone::PhoneValidator,
};
