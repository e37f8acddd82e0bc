//! Built-in validators for the terminal's payment form fields

pub mod amount;
pub mod auth_code;
pub mod card;
pub mod cvv;
pub mod email;
pub mod expiry;
pub mod name;
pub mod phone;

pub use amount::AmountValidator;
pub use auth_code::AuthCodeValidator;
pub use card::CardNumberValidator;
pub use cvv::CvvValidator;
pub use email::EmailValidator;
pub use expiry::ExpiryDateValidator;
pub use name::CardholderNameValidator;
pub use phone::PhoneValidator;
