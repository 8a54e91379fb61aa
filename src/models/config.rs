use color_histogram::AnalysisConfig;
use serde::Deserialize;

use crate::assets::AssetLoader;
use crate::export::CopyFormat;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Thresholds passed to the analysis engine
    #[serde(default)]
    pub analysis: AnalysisSection,

    /// Export defaults
    #[serde(default)]
    pub export: ExportSection,
}

/// `analysis:` section
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AnalysisSection {
    /// Minimum share in percent for a color to be listed
    #[serde(default = "default_percentage_threshold")]
    pub percentage_threshold: f64,

    /// Channels all >= this value count as white
    #[serde(default = "default_white_threshold")]
    pub white_threshold: u8,
}

fn default_percentage_threshold() -> f64 {
    AnalysisConfig::default().percentage_threshold
}

fn default_white_threshold() -> u8 {
    AnalysisConfig::default().white_threshold
}

impl Default for AnalysisSection {
    fn default() -> Self {
        Self {
            percentage_threshold: default_percentage_threshold(),
            white_threshold: default_white_threshold(),
        }
    }
}

impl From<&AnalysisSection> for AnalysisConfig {
    fn from(section: &AnalysisSection) -> Self {
        AnalysisConfig::new(section.white_threshold, section.percentage_threshold)
    }
}

/// `export:` section
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ExportSection {
    #[serde(default)]
    pub format: CopyFormat,
}

impl AppConfig {
    /// Load configuration from AssetLoader (external file or embedded default)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        white_threshold = config.analysis.white_threshold,
                        percentage_threshold = config.analysis.percentage_threshold,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Engine configuration, with optional per-invocation overrides
    pub fn analysis_config(
        &self,
        percentage_threshold: Option<f64>,
        white_threshold: Option<u8>,
    ) -> AnalysisConfig {
        let mut config = AnalysisConfig::from(&self.analysis);
        if let Some(p) = percentage_threshold {
            config.percentage_threshold = p;
        }
        if let Some(w) = white_threshold {
            config.white_threshold = w;
        }
        config
    }
}
