//! # terminal-receipt
//!
//! Display formatting for the terminal: card and expiry input masks,
//! currency amounts, amounts in words, and plain-text receipts and
//! transaction reports for thermal and page printers.

pub mod currency;
pub mod error;
pub mod format;
pub mod receipt;
pub mod report;
pub mod words;

pub use currency::format_currency;
pub use error::ReceiptError;
pub use format::{
    format_card_number, format_date_time, format_expiry_date, format_time,
    format_transaction_id, generate_transaction_id, mask_card_number,
};
pub use receipt::{render_receipt, PrintSettings, Transaction};
pub use report::{render_report, ReportFilter};
pub use words::{amount_to_words, MAX_WORDS_AMOUNT};
