//! Amounts written out in words, as printed on cheque-style receipts

use crate::error::ReceiptError;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];
const TEENS: [&str; 10] = [
    "Ten", "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen",
    "Eighteen", "Nineteen",
];
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];
const SCALES: [&str; 5] = ["", "Thousand", "Million", "Billion", "Trillion"];

/// Exclusive upper bound on the magnitude `amount_to_words` accepts
///
/// Keeps every whole-dollar group inside `SCALES` and the cent count
/// exactly representable in an `f64`.
pub const MAX_WORDS_AMOUNT: f64 = 10_000_000_000_000.0;

/// Write a dollar amount in words
///
/// `123.45` becomes `One Hundred Twenty Three Dollars and Forty Five Cents`.
/// Cents are rounded; negative amounts are prefixed with `Minus`. Amounts
/// that are not finite or whose magnitude reaches [`MAX_WORDS_AMOUNT`] are
/// rejected.
pub fn amount_to_words(amount: f64) -> Result<String, ReceiptError> {
    if !amount.is_finite() || amount.abs() >= MAX_WORDS_AMOUNT {
        return Err(ReceiptError::AmountOutOfRange(amount));
    }

    let total_cents = (amount.abs() * 100.0).round() as u64;
    let dollars = total_cents / 100;
    let cents = total_cents % 100;

    let mut words = format!(
        "{} {}",
        integer_to_words(dollars),
        if dollars == 1 { "Dollar" } else { "Dollars" }
    );

    if cents > 0 {
        words.push_str(&format!(
            " and {} {}",
            integer_to_words(cents),
            if cents == 1 { "Cent" } else { "Cents" }
        ));
    }

    if amount < 0.0 && total_cents > 0 {
        words.insert_str(0, "Minus ");
    }

    Ok(words)
}

fn integer_to_words(mut value: u64) -> String {
    if value == 0 {
        return "Zero".to_string();
    }

    let mut groups = Vec::new();
    let mut scale = 0;
    while value > 0 {
        let chunk = value % 1000;
        if chunk > 0 {
            let mut parts = hundreds_to_words(chunk);
            if let Some(name) = SCALES.get(scale).filter(|s| !s.is_empty()) {
                parts.push(*name);
            }
            groups.push(parts.join(" "));
        }
        value /= 1000;
        scale += 1;
    }

    groups.reverse();
    groups.join(" ")
}

fn hundreds_to_words(mut value: u64) -> Vec<&'static str> {
    let mut parts = Vec::new();

    if value > 99 {
        parts.push(ONES[(value / 100) as usize]);
        parts.push("Hundred");
        value %= 100;
    }

    if value > 19 {
        parts.push(TENS[(value / 10) as usize]);
        value %= 10;
    } else if value > 9 {
        parts.push(TEENS[(value - 10) as usize]);
        value = 0;
    }

    if value > 0 {
        parts.push(ONES[value as usize]);
    }

    parts
}
