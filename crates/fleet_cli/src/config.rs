use anyhow::{Context, Result};
use fleet_core::SimConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PLOT_FILE: &str = "tesla_fleet_empathy_sim.png";

/// Everything a `fleet-sim` run needs, as stored in a TOML config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub simulation: SimConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Whether to render the dashboard PNG at all
    #[serde(default = "default_plot")]
    pub plot: bool,
    #[serde(default = "default_plot_path")]
    pub plot_path: PathBuf,
    /// Pixel size of the dashboard (14x10 inches at 300 dpi by default)
    #[serde(default = "default_plot_width")]
    pub plot_width: u32,
    #[serde(default = "default_plot_height")]
    pub plot_height: u32,
    /// Optional CSV dump of the four daily series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv_path: Option<PathBuf>,
    /// Optional JSON dump of the end-of-run summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_json_path: Option<PathBuf>,
}

fn default_plot() -> bool {
    true
}
fn default_plot_path() -> PathBuf {
    PathBuf::from(DEFAULT_PLOT_FILE)
}
fn default_plot_width() -> u32 {
    4200
}
fn default_plot_height() -> u32 {
    3000
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            plot: default_plot(),
            plot_path: default_plot_path(),
            plot_width: default_plot_width(),
            plot_height: default_plot_height(),
            csv_path: None,
            summary_json_path: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, toml).with_context(|| format!("Failed to write config file: {:?}", path))?;
        Ok(())
    }
}
