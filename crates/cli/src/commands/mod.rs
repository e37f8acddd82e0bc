pub mod card;
pub mod print;
pub mod protocols;
pub mod validate;

use anyhow::Context;
use std::path::Path;
use terminal_core::AppConfig;
use terminal_validation::{ProtocolDigitMap, Registry};

/// Configuration plus the validators built from it
pub struct Terminal {
    pub config: AppConfig,
    pub protocols: ProtocolDigitMap,
    pub registry: Registry,
}

impl Terminal {
    pub fn load(config: AppConfig) -> anyhow::Result<Self> {
        let protocols = match config.read_protocol_file()? {
            Some(source) => ProtocolDigitMap::from_yaml(&source).with_context(|| {
                let path = config.protocol_file.as_deref().unwrap_or(Path::new(""));
                format!("Invalid protocol file {}", path.display())
            })?,
            None => ProtocolDigitMap::standard(),
        };

        tracing::debug!(
            protocols = protocols.len(),
            max_amount = config.max_amount,
            "building validator registry"
        );

        let registry = Registry::builder()
            .max_amount(config.max_amount)
            .protocols(protocols.clone())
            .build();

        Ok(Self {
            config,
            protocols,
            registry,
        })
    }
}

pub(crate) fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
