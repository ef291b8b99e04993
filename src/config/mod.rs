//! Dashboard configuration
//!
//! Every presentation constant that was once hardcoded lives here as an
//! operator-tunable TOML value. Each struct implements `Default` matching the
//! shipped behavior, so running without any config file changes nothing.
//!
//! ## Loading Order
//!
//! 1. `ATLAS_CONFIG` environment variable (path to TOML file)
//! 2. `atlas.toml` in the current working directory
//! 3. Built-in defaults
//!
//! The loaded config is threaded explicitly into the layers that need it;
//! there is no global. A missing file is not an error, a malformed or invalid
//! file is.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::pipeline::ViewSettings;
use crate::view::{GeoPoint, MapDefaults};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a dashboard deployment.
///
/// Load with `AtlasConfig::load()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Registry dataset location
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Table presentation
    #[serde(default)]
    pub table: TableConfig,

    /// Chart presentation
    #[serde(default)]
    pub charts: ChartsConfig,

    /// Map presentation
    #[serde(default)]
    pub map: MapConfig,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            dataset: DatasetConfig::default(),
            table: TableConfig::default(),
            charts: ChartsConfig::default(),
            map: MapConfig::default(),
        }
    }
}

impl AtlasConfig {
    /// Load configuration using the standard search order:
    /// 1. `ATLAS_CONFIG` environment variable
    /// 2. `./atlas.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var("ATLAS_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded config from ATLAS_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from ATLAS_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "ATLAS_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. Check ./atlas.toml
        let local = PathBuf::from("atlas.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded config from ./atlas.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./atlas.toml, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No atlas.toml found — using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the loaded values for internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        if self.table.page_size == 0 {
            errors.push("table.page_size must be at least 1".to_string());
        }
        if self.charts.district_top_n == 0 {
            errors.push("charts.district_top_n must be at least 1".to_string());
        }
        if !(-90.0..=90.0).contains(&self.map.center_lat) {
            errors.push(format!(
                "map.center_lat {} outside [-90, 90]",
                self.map.center_lat
            ));
        }
        if !(-180.0..=180.0).contains(&self.map.center_lng) {
            errors.push(format!(
                "map.center_lng {} outside [-180, 180]",
                self.map.center_lng
            ));
        }
        if self.map.single_close_zoom < self.map.zoom {
            errors.push(format!(
                "map.single_close_zoom {} below map.zoom {}",
                self.map.single_close_zoom, self.map.zoom
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Presentation settings for the derivation pipeline.
    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            page_size: self.table.page_size,
            district_top_n: self.charts.district_top_n,
            map: MapDefaults {
                center: GeoPoint { lat: self.map.center_lat, lng: self.map.center_lng },
                zoom: self.map.zoom,
                single_close_zoom: self.map.single_close_zoom,
                padding_px: self.map.padding_px,
            },
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            ConfigError::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            ConfigError::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Sections
// ============================================================================

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address. Can be overridden by the `--addr` CLI flag.
    #[serde(default = "default_server_addr")]
    pub addr: String,
}

fn default_server_addr() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { addr: default_server_addr() }
    }
}

/// Registry dataset location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the registry JSON array. Can be overridden by the `--dataset`
    /// CLI flag.
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

fn default_dataset_path() -> String {
    "data/centers.json".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self { path: default_dataset_path() }
    }
}

/// Table presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Rows per table page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    10
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { page_size: default_page_size() }
    }
}

/// Chart presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartsConfig {
    /// Districts kept by the ranking bar chart.
    #[serde(default = "default_district_top_n")]
    pub district_top_n: usize,
}

fn default_district_top_n() -> usize {
    8
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self { district_top_n: default_district_top_n() }
    }
}

/// Map presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Country-overview center latitude.
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    /// Country-overview center longitude.
    #[serde(default = "default_center_lng")]
    pub center_lng: f64,
    /// Country-overview zoom level.
    #[serde(default = "default_zoom")]
    pub zoom: u32,
    /// Zoom applied to a lone marker viewed from further out.
    #[serde(default = "default_single_close_zoom")]
    pub single_close_zoom: u32,
    /// Pixel padding when framing marker bounds.
    #[serde(default = "default_padding_px")]
    pub padding_px: u32,
}

fn default_center_lat() -> f64 {
    48.5
}

fn default_center_lng() -> f64 {
    31.5
}

fn default_zoom() -> u32 {
    6
}

fn default_single_close_zoom() -> u32 {
    10
}

fn default_padding_px() -> u32 {
    50
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
            zoom: default_zoom(),
            single_close_zoom: default_single_close_zoom(),
            padding_px: default_padding_px(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
