//! Authorization protocol labels and their required approval-code length

use crate::error::ProtocolMapError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Protocols offered by the terminal out of the box
pub const DEFAULT_PROTOCOLS: &[(&str, u8)] = &[
    ("POS Terminal -101.1 (4-digit approval)", 4),
    ("POS Terminal -101.4 (6-digit approval)", 6),
    ("POS Terminal -101.6 (Pre-authorization)", 6),
    ("POS Terminal -101.7 (4-digit approval)", 4),
    ("POS Terminal -101.8 (PIN-LESS transaction)", 4),
    ("POS Terminal -201.1 (6-digit approval)", 6),
    ("POS Terminal -201.3 (6-digit approval)", 6),
    ("POS Terminal -201.5 (6-digit approval)", 6),
];

const SUPPORTED_DIGITS: [u8; 2] = [4, 6];

/// Read-only mapping from protocol label to authorization-code length
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProtocolDigitMap {
    entries: BTreeMap<String, u8>,
}

impl ProtocolDigitMap {
    /// The built-in protocol table
    pub fn standard() -> Self {
        Self {
            entries: DEFAULT_PROTOCOLS
                .iter()
                .map(|(label, digits)| (label.to_string(), *digits))
                .collect(),
        }
    }

    /// Build a map from explicit entries, rejecting unsupported lengths
    pub fn from_entries<I, S>(entries: I) -> Result<Self, ProtocolMapError>
    where
        I: IntoIterator<Item = (S, u8)>,
        S: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (label, digits) in entries {
            let label = label.into();
            if !SUPPORTED_DIGITS.contains(&digits) {
                return Err(ProtocolMapError::InvalidDigits { label, digits });
            }
            map.insert(label, digits);
        }

        if map.is_empty() {
            return Err(ProtocolMapError::Empty);
        }

        Ok(Self { entries: map })
    }

    /// Parse a YAML document of `label: digits` pairs
    pub fn from_yaml(source: &str) -> Result<Self, ProtocolMapError> {
        let entries: BTreeMap<String, u8> = serde_yaml::from_str(source)?;
        Self::from_entries(entries)
    }

    /// Required digit count for a protocol label
    pub fn required_digits(&self, label: &str) -> Option<u8> {
        self.entries.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.entries.iter().map(|(label, digits)| (label.as_str(), *digits))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ProtocolDigitMap {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_map() {
        let map = ProtocolDigitMap::standard();
        assert_eq!(map.len(), 8);
        assert_eq!(map.required_digits("POS Terminal -101.1 (4-digit approval)"), Some(4));
        assert_eq!(map.required_digits("POS Terminal -101.6 (Pre-authorization)"), Some(6));
        assert_eq!(map.required_digits("POS Terminal -101.8 (PIN-LESS transaction)"), Some(4));
        assert_eq!(map.required_digits("POS Terminal -999"), None);
    }

    #[test]
    fn test_from_entries_rejects_unsupported_lengths() {
        let result = ProtocolDigitMap::from_entries([("Custom", 5)]);
        assert!(matches!(
            result,
            Err(ProtocolMapError::InvalidDigits { digits: 5, .. })
        ));

        let empty: Vec<(String, u8)> = Vec::new();
        assert!(matches!(
            ProtocolDigitMap::from_entries(empty),
            Err(ProtocolMapError::Empty)
        ));
    }

    #[test]
    fn test_from_yaml() {
        let yaml = "\"Kiosk -1 (4-digit approval)\": 4\n\"Kiosk -2 (6-digit approval)\": 6\n";
        let map = ProtocolDigitMap::from_yaml(yaml).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.required_digits("Kiosk -2 (6-digit approval)"), Some(6));
        assert!(!map.contains("POS Terminal -101.1 (4-digit approval)"));
    }

    #[test]
    fn test_from_yaml_malformed() {
        let result = ProtocolDigitMap::from_yaml("- not\n- a map\n");
        assert!(matches!(result, Err(ProtocolMapError::Yaml(_))));
    }
}
