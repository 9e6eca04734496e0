//! Simulation configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Default config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub blobs: BlobConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub survey: SurveyConfig,
}

impl Config {
    /// Load configuration from `path`, writing the defaults there if it is missing.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Self::from_toml(&contents)?
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            default_config
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let WorldConfig { width, height } = self.world;
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(ConfigError::InvalidWorld { width, height });
        }
        if !(self.blobs.radius > 0.0 && self.blobs.radius.is_finite()) {
            return Err(ConfigError::InvalidRadius(self.blobs.radius));
        }
        if !(self.blobs.speed >= 0.0 && self.blobs.speed.is_finite()) {
            return Err(ConfigError::InvalidSpeed(self.blobs.speed));
        }
        if !(0.0..=1.0).contains(&self.blobs.bouncer_ratio) {
            return Err(ConfigError::InvalidRatio(self.blobs.bouncer_ratio));
        }
        if !(self.survey.radius >= 0.0 && self.survey.radius.is_finite()) {
            return Err(ConfigError::InvalidSurveyRadius(self.survey.radius));
        }
        Ok(())
    }
}

/// World size. The root region spans `(0, 0)` to `(width, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct WorldConfig {
    #[serde(default = "default_world_width")]
    pub width: f32,
    #[serde(default = "default_world_height")]
    pub height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: default_world_width(),
            height: default_world_height(),
        }
    }
}

fn default_world_width() -> f32 {
    800.0
}
fn default_world_height() -> f32 {
    600.0
}

/// Blob population.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BlobConfig {
    /// Number of blobs spawned at start.
    #[serde(default = "default_blob_count")]
    pub count: usize,
    #[serde(default = "default_blob_radius")]
    pub radius: f32,
    /// Largest per-axis displacement in one step.
    #[serde(default = "default_blob_speed")]
    pub speed: f32,
    /// Fraction of blobs that bounce instead of wandering.
    #[serde(default = "default_bouncer_ratio")]
    pub bouncer_ratio: f64,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            count: default_blob_count(),
            radius: default_blob_radius(),
            speed: default_blob_speed(),
            bouncer_ratio: default_bouncer_ratio(),
        }
    }
}

fn default_blob_count() -> usize {
    200
}
fn default_blob_radius() -> f32 {
    5.0
}
fn default_blob_speed() -> f32 {
    3.0
}
fn default_bouncer_ratio() -> f64 {
    0.5
}

/// What happens to blobs found colliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionMode {
    /// Report colliders and leave them in place.
    #[default]
    Color,
    /// Remove colliders from the world.
    Destroy,
}

/// Simulation run settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimulationConfig {
    #[serde(default = "default_steps")]
    pub steps: u64,
    #[serde(default)]
    pub mode: CollisionMode,
    /// RNG seed; OS entropy when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            mode: CollisionMode::default(),
            seed: None,
        }
    }
}

fn default_steps() -> u64 {
    100
}

/// Random dot survey settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SurveyConfig {
    #[serde(default = "default_survey_dots")]
    pub dots: usize,
    #[serde(default = "default_survey_queries")]
    pub queries: usize,
    #[serde(default = "default_survey_radius")]
    pub radius: f64,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            dots: default_survey_dots(),
            queries: default_survey_queries(),
            radius: default_survey_radius(),
        }
    }
}

fn default_survey_dots() -> usize {
    1000
}
fn default_survey_queries() -> usize {
    20
}
fn default_survey_radius() -> f64 {
    40.0
}
