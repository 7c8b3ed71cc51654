//! Server configuration.
//!
//! A single YAML file configures the listen port, the data file location,
//! the static frontend directory, and the chart geometry the kiosk
//! renderer uses (an explicit struct, not module-level mutable globals).

mod loader;
mod types;

pub use loader::load_or_default;
pub use types::{ChartConfig, ChartPalette, ServerConfig};
