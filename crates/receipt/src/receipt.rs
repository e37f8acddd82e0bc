//! Single-transaction receipts for thermal printers

use crate::currency::format_currency;
use crate::error::ReceiptError;
use crate::format::format_date_time;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    "USD".to_string()
}

/// A processed transaction as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub card_masked: Option<String>,
    #[serde(default)]
    pub card_holder_name: Option<String>,
    #[serde(default)]
    pub auth_code: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub payout_status: Option<String>,
}

impl Transaction {
    /// Parse a single transaction object
    pub fn from_json(source: &str) -> Result<Self, ReceiptError> {
        let transaction: Self = serde_json::from_str(source)?;
        transaction.ensure_id()?;
        Ok(transaction)
    }

    /// Parse a JSON array of transactions
    pub fn list_from_json(source: &str) -> Result<Vec<Self>, ReceiptError> {
        let transactions: Vec<Self> = serde_json::from_str(source)?;
        for transaction in &transactions {
            transaction.ensure_id()?;
        }
        Ok(transactions)
    }

    fn ensure_id(&self) -> Result<(), ReceiptError> {
        if self.transaction_id.trim().is_empty() {
            return Err(ReceiptError::MissingTransactionId);
        }
        Ok(())
    }

    pub fn is_approved(&self) -> bool {
        self.status.eq_ignore_ascii_case("approved")
    }

    /// Protocol label without its parenthesised description
    pub fn protocol_name(&self) -> Option<&str> {
        self.protocol
            .as_deref()
            .map(|p| p.split(" (").next().unwrap_or(p))
    }
}

/// Printer layout and which receipt rows to show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintSettings {
    pub business_name: String,
    pub business_address: Vec<String>,
    pub footer_message: String,
    /// Characters per line
    pub width: usize,
    pub show_transaction_id: bool,
    pub show_date_time: bool,
    pub show_card_info: bool,
    pub show_amount: bool,
    pub show_auth_code: bool,
    pub show_protocol: bool,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            business_name: "BLACK ROCK TERMINAL".to_string(),
            business_address: vec![
                "123 Business Street".to_string(),
                "Suite 100".to_string(),
                "City, State 12345".to_string(),
                "Phone: (555) 123-4567".to_string(),
            ],
            footer_message: "Thank you for your business!".to_string(),
            width: 40,
            show_transaction_id: true,
            show_date_time: true,
            show_card_info: true,
            show_amount: true,
            show_auth_code: true,
            show_protocol: false,
        }
    }
}

impl PrintSettings {
    /// Parse settings; omitted keys keep their defaults
    pub fn from_json(source: &str) -> Result<Self, ReceiptError> {
        Ok(serde_json::from_str(source)?)
    }
}

pub(crate) fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = (width - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// `Label:            value`, wrapping the value onto its own line when
/// both do not fit
pub(crate) fn row(label: &str, value: &str, width: usize) -> String {
    let used = label.chars().count() + value.chars().count();
    if used < width {
        format!("{}{}{}", label, " ".repeat(width - used), value)
    } else {
        let pad = width.saturating_sub(value.chars().count());
        format!("{}\n{}{}", label, " ".repeat(pad), value)
    }
}

/// Render a plain-text receipt
pub fn render_receipt(transaction: &Transaction, settings: &PrintSettings) -> String {
    let width = settings.width;
    let mut lines = vec!["=".repeat(width), center(&settings.business_name, width)];

    lines.extend(settings.business_address.iter().map(|line| center(line, width)));
    lines.push(String::new());
    lines.push(center("PAYMENT RECEIPT", width));
    lines.push("=".repeat(width));

    if settings.show_transaction_id {
        lines.push(row("Transaction ID:", &transaction.transaction_id, width));
    }

    if settings.show_date_time {
        if let Some(created_at) = transaction.created_at {
            lines.push(row("Date/Time:", &format_date_time(created_at), width));
        }
    }

    if settings.show_amount {
        let amount = format!(
            "{} {}",
            format_currency(transaction.amount, &transaction.currency),
            transaction.currency
        );
        lines.push(row("Amount:", &amount, width));
    }

    if settings.show_card_info {
        if let Some(card) = &transaction.card_masked {
            lines.push(row("Card:", card, width));
        }
    }

    if let Some(holder) = &transaction.card_holder_name {
        lines.push(row("Cardholder:", holder, width));
    }

    if settings.show_auth_code {
        if let Some(code) = &transaction.auth_code {
            lines.push(row("Auth Code:", code, width));
        }
    }

    if settings.show_protocol {
        if let Some(protocol) = transaction.protocol_name() {
            lines.push(row("Protocol:", protocol, width));
        }
    }

    lines.push(row("Status:", &transaction.status.to_uppercase(), width));
    lines.push("-".repeat(width));
    lines.push(center(&settings.footer_message, width));
    lines.push(center("Keep this receipt for your records", width));
    lines.push(center("Secure Payment Processing", width));
    lines.push("=".repeat(width));

    tracing::debug!(transaction_id = %transaction.transaction_id, "rendered receipt");

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
