// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulsewave_error::{PulseWaveError, Result};
use pulsewave_render::{RenderSettings, Sprite};
use pulsewave_stream::IngestSettings;
use serde::{Deserialize, Serialize};

/// Complete display configuration, loadable from TOML.
///
/// Every field has a default, so an empty document is a valid configuration.
///
/// ```
/// use pulsewave::PulseWaveConfig;
///
/// let config = PulseWaveConfig::from_toml_str(
///     r#"
///     seed = 7
///
///     [render]
///     width = 640.0
///     height = 360.0
///     mode = "composite"
///     "#,
/// )?;
///
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.render.line_count, 10);
/// assert_eq!(config.ingest.serial.baud_rate, 9600);
/// # Ok::<(), pulsewave::PulseWaveError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PulseWaveConfig {
    /// Seed for the random wave parameters; a fresh one is drawn when absent
    pub seed: Option<u64>,
    /// Host image id drawn at the middle line's peak during strong rotation
    pub highlight_sprite: Option<String>,
    pub ingest: IngestSettings,
    pub render: RenderSettings,
}

impl PulseWaveConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    /// Returns [`PulseWaveError::Config`] if the document is malformed or a value is invalid.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)
            .map_err(|error| PulseWaveError::config_error(error.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns [`PulseWaveError::Config`] for the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        let range = self.ingest.range;
        if range.min >= range.max {
            return Err(PulseWaveError::config_error(format!(
                "ingest range {}..={} is empty",
                range.min, range.max
            )));
        }
        if self.ingest.serial.baud_rate == 0 {
            return Err(PulseWaveError::config_error("baud_rate must be positive"));
        }
        if self.ingest.serial.read_buffer == 0 {
            return Err(PulseWaveError::config_error("read_buffer must be positive"));
        }
        if matches!(&self.highlight_sprite, Some(id) if id.trim().is_empty()) {
            return Err(PulseWaveError::config_error("highlight_sprite must not be blank"));
        }
        self.render.validate()
    }

    /// The configured seed, or a random one.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    pub fn sprite(&self) -> Option<Sprite> {
        self.highlight_sprite.as_deref().map(Sprite::new)
    }
}
