use serde::Deserialize;
use sw_lang::CheckOptions;

use crate::types::HumanDuration;

/// `[check]` section: knobs for window clause checking.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Reject windows (or session gaps) longer than this.
    pub max_window_size: Option<HumanDuration>,
    /// Treat lint warnings as errors.
    pub deny_warnings: bool,
}

impl CheckConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_window_size.is_some_and(|max| max.as_duration().is_zero()) {
            anyhow::bail!("check.max_window_size must be greater than zero");
        }
        Ok(())
    }

    pub fn to_options(&self) -> CheckOptions {
        CheckOptions {
            max_window_size: self.max_window_size.map(|d| d.as_duration()),
            deny_warnings: self.deny_warnings,
        }
    }
}
