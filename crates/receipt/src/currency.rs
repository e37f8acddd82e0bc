//! Currency amounts in en-US display style

/// Format an amount as `$1,234.56`
///
/// USD, EUR and GBP use their symbols; any other code is written as a
/// prefix (`CAD 1,234.56`). Amounts are rounded to the cent.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    let number = format!("{}.{:02}", group_thousands(cents / 100), cents % 100);

    match currency.to_ascii_uppercase().as_str() {
        "USD" | "" => format!("{}${}", sign, number),
        "EUR" => format!("{}€{}", sign, number),
        "GBP" => format!("{}£{}", sign, number),
        other => format!("{}{} {}", sign, other, number),
    }
}

pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd() {
        assert_eq!(format_currency(0.0, "USD"), "$0.00");
        assert_eq!(format_currency(5.5, "USD"), "$5.50");
        assert_eq!(format_currency(1234.567, "usd"), "$1,234.57");
        assert_eq!(format_currency(50000.0, "USD"), "$50,000.00");
        assert_eq!(format_currency(1_000_000.0, "USD"), "$1,000,000.00");
    }

    #[test]
    fn test_other_currencies() {
        assert_eq!(format_currency(99.9, "EUR"), "€99.90");
        assert_eq!(format_currency(12.0, "GBP"), "£12.00");
        assert_eq!(format_currency(1500.0, "CAD"), "CAD 1,500.00");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_currency(-42.1, "USD"), "-$42.10");
        assert_eq!(format_currency(-0.001, "USD"), "$0.00");
    }
}
