use super::read_file;
use anyhow::Context;
use chrono::{NaiveDate, Utc};
use std::io::Write;
use std::path::Path;
use terminal_receipt::{
    amount_to_words, format_currency, render_receipt, render_report, PrintSettings, ReportFilter,
    Transaction,
};

fn load_settings(path: Option<&Path>) -> anyhow::Result<PrintSettings> {
    match path {
        Some(path) => PrintSettings::from_json(&read_file(path)?)
            .with_context(|| format!("Invalid print settings in {}", path.display())),
        None => Ok(PrintSettings::default()),
    }
}

pub fn words(amount: f64, out: &mut impl Write) -> anyhow::Result<()> {
    let in_words = amount_to_words(amount)?;
    writeln!(out, "{}", format_currency(amount, "USD"))?;
    writeln!(out, "{}", in_words)?;
    Ok(())
}

pub fn receipt(file: &Path, settings: Option<&Path>, out: &mut impl Write) -> anyhow::Result<()> {
    let transaction = Transaction::from_json(&read_file(file)?)
        .with_context(|| format!("Invalid transaction in {}", file.display()))?;
    let settings = load_settings(settings)?;

    write!(out, "{}", render_receipt(&transaction, &settings))?;
    Ok(())
}

pub fn report(
    file: &Path,
    status: Option<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    settings: Option<&Path>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            anyhow::bail!("--from {} is after --to {}", from, to);
        }
    }

    let transactions = Transaction::list_from_json(&read_file(file)?)
        .with_context(|| format!("Invalid transaction list in {}", file.display()))?;
    let settings = load_settings(settings)?;

    let mut filter = ReportFilter::new().between(from, to);
    if let Some(status) = status {
        filter = filter.status(status);
    }

    write!(out, "{}", render_report(&transactions, &filter, &settings, Utc::now()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::output;
    use std::fs;

    const TRANSACTION: &str = r#"{
        "transaction_id": "BRT1718461800000ABC123",
        "amount": 1250.0,
        "status": "approved",
        "created_at": "2025-06-15T14:30:00Z",
        "card_masked": "**** **** **** 4242",
        "card_holder_name": "JANE DOE"
    }"#;

    #[test]
    fn test_words() {
        let mut buf = Vec::new();
        words(21.5, &mut buf).unwrap();
        assert_eq!(output(buf), "$21.50\nTwenty One Dollars and Fifty Cents\n");

        assert!(words(f64::INFINITY, &mut Vec::new()).is_err());
    }

    #[test]
    fn test_words_rejects_amounts_past_trillions() {
        let mut buf = Vec::new();
        let err = words(1e15, &mut buf).unwrap_err();
        assert!(err.to_string().contains("cannot be written in words"));
        assert!(buf.is_empty());

        let mut buf = Vec::new();
        words(-1_000_000_000_000.0, &mut buf).unwrap();
        assert!(output(buf).ends_with("Minus One Trillion Dollars\n"));
    }

    #[test]
    fn test_receipt_with_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let tx_path = dir.path().join("tx.json");
        let settings_path = dir.path().join("settings.json");
        fs::write(&tx_path, TRANSACTION).unwrap();
        fs::write(&settings_path, r#"{"business_name": "CORNER CAFE"}"#).unwrap();

        let mut buf = Vec::new();
        receipt(&tx_path, Some(&settings_path), &mut buf).unwrap();

        let text = output(buf);
        assert!(text.contains("CORNER CAFE"));
        assert!(text.contains("$1,250.00 USD"));
    }

    #[test]
    fn test_receipt_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = receipt(&dir.path().join("absent.json"), None, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }

    #[test]
    fn test_report_filters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("txs.json");
        fs::write(&path, format!("[{}]", TRANSACTION)).unwrap();

        let mut buf = Vec::new();
        let june = NaiveDate::from_ymd_opt(2025, 6, 1);
        report(&path, Some("approved".to_string()), june, None, None, &mut buf).unwrap();

        let text = output(buf);
        assert!(text.contains("Total Transactions: 1"));
        assert!(text.contains("Date Range: 2025-06-01 to All"));

        let july = NaiveDate::from_ymd_opt(2025, 7, 1);
        assert!(report(&path, None, july, june, None, &mut Vec::new()).is_err());
    }
}
