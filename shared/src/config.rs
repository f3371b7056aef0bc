//! Dashboard configuration, parsed from the host page.

use serde::{Deserialize, Serialize};

use crate::error::{AdminError, Result};

/// Runtime knobs for the dashboard. Every field has a default, so a host page
/// only needs to spell out what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// How often the KPI board draws a new snapshot.
    pub kpi_refresh_ms: u32,
    /// Upload dialog behaviour.
    pub upload: UploadConfig,
    /// Synthetic data used when the host supplies none.
    pub samples: SampleConfig,
}

/// Simulated upload pipeline settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Delay between progress ticks.
    pub tick_ms: u32,
    /// Progress added per tick, in percent.
    pub step_percent: u8,
    /// Owner recorded on uploaded documents.
    pub owner: String,
    /// `accept` attribute of the file input.
    pub accept: String,
}

/// Sample generator sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Generate random records; otherwise use the small fixed fixtures.
    pub generate: bool,
    /// Number of generated users.
    pub users: usize,
    /// Number of generated audit entries.
    pub audit: usize,
    /// Number of generated activity entries.
    pub activity: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            kpi_refresh_ms: 30_000,
            upload: UploadConfig::default(),
            samples: SampleConfig::default(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            tick_ms: 120,
            step_percent: 14,
            owner: "Admin".to_string(),
            accept: ".pdf,.doc,.docx,.xls,.xlsx,.txt,image/*".to_string(),
        }
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            generate: true,
            users: 10,
            audit: 50,
            activity: 100,
        }
    }
}

impl DashboardConfig {
    /// Parse a JSON document, filling missing fields with defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| AdminError::Config(err.to_string()))?;
        config.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.upload.step_percent == 0 || self.upload.step_percent > 100 {
            return Err(AdminError::Config(format!(
                "upload.step_percent must be within 1..=100, got {}",
                self.upload.step_percent
            )));
        }
        if self.upload.tick_ms == 0 || self.kpi_refresh_ms == 0 {
            return Err(AdminError::Config("timer intervals must be positive".to_string()));
        }
        Ok(self)
    }
}
