use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::check::CheckConfig;
use crate::logging::LoggingConfig;

/// Resolved `swin.toml`. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwinConfig {
    pub logging: LoggingConfig,
    pub check: CheckConfig,
}

impl SwinConfig {
    /// Read and parse a `swin.toml` file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.as_ref().display()))?;
        content.parse()
    }
}

impl FromStr for SwinConfig {
    type Err = anyhow::Error;

    /// Parse a TOML string into a validated [`SwinConfig`].
    fn from_str(toml_str: &str) -> anyhow::Result<Self> {
        let config: SwinConfig = toml::from_str(toml_str)?;
        config.check.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
