//! Remover configuration.
//!
//! Three knobs: where to read, where to write, and how bright a pixel must be
//! to count as background. Values come from built-in defaults, optionally
//! overlaid by a TOML file, and finally by whatever the caller sets directly.
//!
//! ```toml
//! input_path = "logo/81481159904.png"
//! output_path = "logo/logo-transparent.png"
//! threshold = 240
//! ```

use crate::core_modules::classifier::classifier::{DEFAULT_THRESHOLD, Threshold};
use crate::error::{RemoverError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_PATH: &str = "logo/81481159904.png";
pub const DEFAULT_OUTPUT_PATH: &str = "logo/logo-transparent.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoverConfig {
    /// Source image; any format the decoder recognises.
    pub input_path: PathBuf,
    /// Destination PNG. Its parent directory must already exist.
    pub output_path: PathBuf,
    /// Per-channel brightness cutoff; strictly brighter pixels become transparent.
    pub threshold: Threshold,
}

impl Default for RemoverConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// On-disk shape. The threshold is read wide so out-of-range values get a
/// dedicated error instead of a generic integer overflow message.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    threshold: Option<i64>,
}

impl RemoverConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Reads `path` and overlays its keys on the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| RemoverError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content, path)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parses TOML text and overlays its keys on the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, origin: &Path) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|source| RemoverError::ConfigParse {
                path: origin.to_path_buf(),
                source,
            })?;

        let mut config = Self::default();
        if let Some(input_path) = file.input_path {
            config.input_path = input_path;
        }
        if let Some(output_path) = file.output_path {
            config.output_path = output_path;
        }
        if let Some(threshold) = file.threshold {
            config.threshold =
                Threshold::try_from(threshold).map_err(|_| RemoverError::InvalidThreshold(threshold))?;
        }
        Ok(config)
    }
}
