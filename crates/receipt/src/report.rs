//! Multi-transaction reports for page printers

use crate::currency::format_currency;
use crate::format::{format_date_time, format_transaction_id};
use crate::receipt::{center, PrintSettings, Transaction};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

const REPORT_WIDTH: usize = 100;

/// Which transactions a report covers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    /// Case-insensitive status match, e.g. `approved`
    pub status: Option<String>,
    /// First day included
    pub start_date: Option<NaiveDate>,
    /// Last day included
    pub end_date: Option<NaiveDate>,
}

impl ReportFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Whether a transaction falls inside the filter
    ///
    /// Transactions without a timestamp are excluded once either date
    /// bound is set.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(status) = &self.status {
            if !transaction.status.eq_ignore_ascii_case(status) {
                return false;
            }
        }

        if self.start_date.is_none() && self.end_date.is_none() {
            return true;
        }

        let Some(day) = transaction.created_at.map(|at| at.date_naive()) else {
            return false;
        };

        self.start_date.map_or(true, |start| day >= start)
            && self.end_date.map_or(true, |end| day <= end)
    }

    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|tx| self.matches(tx)).collect()
    }
}

fn or_all(value: Option<String>) -> String {
    value.unwrap_or_else(|| "All".to_string())
}

/// Render a transaction report covering the transactions the filter keeps
pub fn render_report(
    transactions: &[Transaction],
    filter: &ReportFilter,
    settings: &PrintSettings,
    generated_at: DateTime<Utc>,
) -> String {
    let selected = filter.apply(transactions);

    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for tx in &selected {
        *totals.entry(tx.currency.as_str()).or_default() += tx.amount;
    }

    let mut lines = vec![
        center(&settings.business_name, REPORT_WIDTH),
        center("Transaction Report", REPORT_WIDTH),
        center(&format!("Generated on: {}", format_date_time(generated_at)), REPORT_WIDTH),
        String::new(),
        "Report Summary".to_string(),
        format!("  Total Transactions: {}", selected.len()),
        format!(
            "  Date Range: {} to {}",
            or_all(filter.start_date.map(|d| d.to_string())),
            or_all(filter.end_date.map(|d| d.to_string()))
        ),
        format!("  Status Filter: {}", or_all(filter.status.clone())),
    ];

    for (currency, total) in &totals {
        lines.push(format!(
            "  Total Amount ({}): {}",
            currency,
            format_currency(*total, currency)
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "{:<20} {:<23} {:>16} {:<19} {:<18} {:<9} {}",
        "Transaction ID", "Date/Time", "Amount", "Card", "Cardholder", "Status", "Payout"
    ));
    lines.push("-".repeat(REPORT_WIDTH));

    for tx in &selected {
        lines.push(format!(
            "{:<20} {:<23} {:>16} {:<19} {:<18} {:<9} {}",
            format_transaction_id(&tx.transaction_id),
            tx.created_at.map(format_date_time).unwrap_or_else(|| "N/A".to_string()),
            format!("{} {}", format_currency(tx.amount, &tx.currency), tx.currency),
            tx.card_masked.as_deref().unwrap_or("N/A"),
            tx.card_holder_name.as_deref().unwrap_or("N/A"),
            tx.status.to_uppercase(),
            tx.payout_status.as_deref().unwrap_or("N/A").to_uppercase(),
        ));
    }

    lines.push("-".repeat(REPORT_WIDTH));
    lines.push(center("Confidential Transaction Report", REPORT_WIDTH));
    lines.push(center(
        "This report contains sensitive payment information",
        REPORT_WIDTH,
    ));
    lines.push(center(
        &format!("Generated by: {}", settings.business_name),
        REPORT_WIDTH,
    ));

    tracing::debug!(
        transactions = selected.len(),
        skipped = transactions.len() - selected.len(),
        "rendered transaction report"
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
