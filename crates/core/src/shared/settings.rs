use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_EYE_OPEN_THRESHOLD, DEFAULT_SCALE_FACTOR, DEFAULT_SMILING_THRESHOLD,
    SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
};
use super::error::EmojifyError;
use crate::expression::domain::expression_classifier::ClassifierThresholds;

/// Tunable parameters for classification and overlay placement.
///
/// Missing fields fall back to their defaults, so a settings file only
/// needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmojifySettings {
    #[serde(default = "default_eye_open_threshold")]
    pub eye_open_threshold: f64,
    #[serde(default = "default_smiling_threshold")]
    pub smiling_threshold: f64,
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,
}

fn default_eye_open_threshold() -> f64 {
    DEFAULT_EYE_OPEN_THRESHOLD
}

fn default_smiling_threshold() -> f64 {
    DEFAULT_SMILING_THRESHOLD
}

fn default_scale_factor() -> f64 {
    DEFAULT_SCALE_FACTOR
}

impl Default for EmojifySettings {
    fn default() -> Self {
        Self {
            eye_open_threshold: DEFAULT_EYE_OPEN_THRESHOLD,
            smiling_threshold: DEFAULT_SMILING_THRESHOLD,
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

impl EmojifySettings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Loads from the per-user config location, or defaults when no file exists.
    pub fn load() -> Result<Self, EmojifyError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, EmojifyError> {
        let json = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), EmojifyError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), EmojifyError> {
        check_probability("eye_open_threshold", self.eye_open_threshold)?;
        check_probability("smiling_threshold", self.smiling_threshold)?;
        if !(self.scale_factor.is_finite() && self.scale_factor > 0.0) {
            return Err(EmojifyError::InvalidConfig(format!(
                "scale_factor must be positive, got {}",
                self.scale_factor
            )));
        }
        Ok(())
    }

    pub fn thresholds(&self) -> ClassifierThresholds {
        ClassifierThresholds {
            eye_open: self.eye_open_threshold,
            smiling: self.smiling_threshold,
        }
    }
}

fn check_probability(name: &str, value: f64) -> Result<(), EmojifyError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EmojifyError::InvalidConfig(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}
