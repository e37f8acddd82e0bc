//! Receipt error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReceiptError {
    #[error("Transaction data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Transaction is missing its transaction_id")]
    MissingTransactionId,

    #[error("Amount {0} cannot be written in words; it must be finite and below 10 trillion")]
    AmountOutOfRange(f64),
}
