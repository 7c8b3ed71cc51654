//! Configuration types.

use serde::{Deserialize, Serialize};

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    /// TCP port to listen on. Overridable with the `PORT` env var.
    pub port: u16,
    /// Path of the JSON data file.
    pub data_file: String,
    /// Directory of built frontend assets.
    pub static_dir: String,
    /// Chart geometry and palette handed to the renderer.
    pub chart: ChartConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            data_file: "data.json".to_string(),
            static_dir: "dist".to_string(),
            chart: ChartConfig::default(),
        }
    }
}

/// Geometry and date range for the full-screen step chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    /// Drawing surface width in pixels.
    pub width: u32,
    /// Drawing surface height in pixels.
    pub height: u32,
    /// Margin around the plot area in pixels.
    pub margin: u32,
    /// How many days of history the chart shows.
    pub days_shown: u32,
    /// Series and annotation colors.
    pub palette: ChartPalette,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            margin: 48,
            days_shown: 120,
            palette: ChartPalette::default(),
        }
    }
}

/// Color palette for the chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartPalette {
    /// Checking balance step line.
    pub balance: String,
    /// Incoming-pay overlay.
    pub incoming: String,
    /// Debt line.
    pub debt: String,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            balance: "#4fc3f7".to_string(),
            incoming: "#81c784".to_string(),
            debt: "#e57373".to_string(),
        }
    }
}
