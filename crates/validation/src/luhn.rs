//! Luhn checksum and card-network detection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Check a digit string against the Luhn checksum
///
/// Digits are scanned from the rightmost; every second digit is doubled
/// (minus 9 when the result exceeds 9). Any non-digit character fails
/// the check. An empty string sums to zero and therefore passes, so
/// callers must reject blank input themselves.
pub fn luhn_check(digits: &str) -> bool {
    let mut sum = 0u32;
    let mut double = false;

    for c in digits.chars().rev() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };

        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }

        sum += digit;
        double = !double;
    }

    sum % 10 == 0
}

/// Payment card network, identified by number prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardNetwork {
    #[serde(rename = "VISA TEST")]
    VisaTest,
    #[serde(rename = "VISA")]
    Visa,
    #[serde(rename = "MASTERCARD")]
    Mastercard,
    #[serde(rename = "AMERICAN EXPRESS")]
    AmericanExpress,
    #[serde(rename = "DISCOVER")]
    Discover,
    #[serde(rename = "JCB")]
    Jcb,
    #[serde(rename = "DINERS CLUB")]
    DinersClub,
    Unknown,
}

/// Prefix table in priority order; the first matching row wins.
///
/// `411111` sits above the generic `4` so test cards keep their own label.
const NETWORK_PREFIXES: &[(CardNetwork, &[&str])] = &[
    (CardNetwork::VisaTest, &["411111"]),
    (CardNetwork::Visa, &["4"]),
    (
        CardNetwork::Mastercard,
        &["51", "52", "53", "54", "55", "22", "23", "24", "25", "26", "27"],
    ),
    (CardNetwork::AmericanExpress, &["34", "37"]),
    (CardNetwork::Discover, &["6011", "65"]),
    (CardNetwork::Jcb, &["35"]),
    (CardNetwork::DinersClub, &["30", "36", "38"]),
];

impl CardNetwork {
    /// Detect the network of a whitespace-free card number
    pub fn detect(card_number: &str) -> Self {
        NETWORK_PREFIXES
            .iter()
            .find(|(_, prefixes)| prefixes.iter().any(|p| card_number.starts_with(p)))
            .map(|(network, _)| *network)
            .unwrap_or(CardNetwork::Unknown)
    }

    /// Display label, e.g. `AMERICAN EXPRESS`
    pub fn label(&self) -> &'static str {
        match self {
            CardNetwork::VisaTest => "VISA TEST",
            CardNetwork::Visa => "VISA",
            CardNetwork::Mastercard => "MASTERCARD",
            CardNetwork::AmericanExpress => "AMERICAN EXPRESS",
            CardNetwork::Discover => "DISCOVER",
            CardNetwork::Jcb => "JCB",
            CardNetwork::DinersClub => "DINERS CLUB",
            CardNetwork::Unknown => "Unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, CardNetwork::Unknown)
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
