use super::Terminal;
use std::io::Write;
use terminal_receipt::{format_card_number, mask_card_number};
use terminal_validation::{fields, CardNetwork};

/// Returns whether the card number is valid
pub fn run(terminal: &Terminal, number: &str, out: &mut impl Write) -> anyhow::Result<bool> {
    let Some(result) = terminal.registry.validate_field(fields::CARD_NUMBER, number, None) else {
        anyhow::bail!("No card number validator registered");
    };

    let compact: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    let network = result
        .card_type
        .unwrap_or_else(|| CardNetwork::detect(&compact));

    writeln!(out, "Card:    {}", format_card_number(number))?;
    writeln!(out, "Masked:  {}", mask_card_number(number))?;
    writeln!(out, "Network: {}", network)?;
    writeln!(out, "Result:  {}", result.message)?;

    Ok(result.valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{output, terminal};

    #[test]
    fn test_valid_amex() {
        let mut buf = Vec::new();
        assert!(run(&terminal(), "3782 822463 10005", &mut buf).unwrap());

        let text = output(buf);
        assert!(text.contains("Network: AMERICAN EXPRESS"));
        assert!(text.contains("Masked:  **** **** **** 0005"));
        assert!(text.contains("Result:  Valid card number"));
    }

    #[test]
    fn test_luhn_failure_still_reports_network() {
        let mut buf = Vec::new();
        assert!(!run(&terminal(), "4242424242424241", &mut buf).unwrap());

        let text = output(buf);
        assert!(text.contains("Network: VISA"));
        assert!(text.contains("Invalid card number"));
    }
}
