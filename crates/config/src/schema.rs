use plotmon_core::{MonitorError, Result};
use serde::Deserialize;

/// Root configuration structure parsed from `plotmon.toml`.
///
/// Only timing knobs are configurable; the set of panels and the metrics
/// they track are fixed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Interval between sampling cycles, in milliseconds.
    pub sample_interval_ms: u64,
    /// Number of samples each chart retains (60 = one minute at 1 Hz).
    pub history_len: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 1_000,
            history_len: 60,
        }
    }
}

impl MonitorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sample_interval_ms == 0 {
            return Err(MonitorError::Config(
                "sample_interval_ms must be greater than zero".into(),
            ));
        }
        if self.history_len == 0 {
            return Err(MonitorError::Config(
                "history_len must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
