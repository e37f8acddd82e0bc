//! Input masks and short display forms

use chrono::{DateTime, Utc};
use rand::Rng;

const CARD_DISPLAY_DIGITS: usize = 16;
const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Reformat card input as `4242 4242 4242 4242`
///
/// Non-digits are dropped and the result is capped at 16 digits.
pub fn format_card_number(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(CARD_DISPLAY_DIGITS)
        .collect();

    digits
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reformat expiry input as `MM/YY` while the user types
pub fn format_expiry_date(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(4).collect();

    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Mask all but the last four digits: `**** **** **** 4242`
pub fn mask_card_number(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return "**** **** **** ****".to_string();
    }

    let last_four: String = digits[digits.len() - 4..].iter().collect();
    format!("**** **** **** {}", last_four)
}

/// Shorten long transaction ids to `first8...last6`
pub fn format_transaction_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= 16 {
        return id.to_string();
    }

    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("{}...{}", head, tail)
}

/// `BRT` + Unix milliseconds + six random base-36 characters
pub fn generate_transaction_id<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: String = (0..6)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("BRT{}{}", now.timestamp_millis(), suffix)
}

/// `Jun 15, 2025, 02:30 PM`
pub fn format_date_time(at: DateTime<Utc>) -> String {
    at.format("%b %d, %Y, %I:%M %p").to_string()
}

/// `02:30:05 PM`
pub fn format_time(at: DateTime<Utc>) -> String {
    at.format("%I:%M:%S %p").to_string()
}
