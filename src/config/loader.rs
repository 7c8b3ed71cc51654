//! Configuration loading.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::ServerConfig;

/// Loads the server configuration from a YAML file.
///
/// A missing file is not an error: the appliance runs fine on defaults,
/// so startup logs the fallback and continues. A file that exists but
/// fails to parse is a hard error, because silently ignoring a typo'd
/// config would be worse than refusing to start.
///
/// After loading, the `PORT` environment variable overrides the
/// configured port (legacy deployment behaviour).
///
/// # Errors
///
/// Returns [`EngineError::ConfigParse`] if the file exists but is not
/// valid YAML for [`ServerConfig`].
pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<ServerConfig> {
    let path = path.as_ref();

    let mut config = if path.exists() {
        let content = fs::read_to_string(path).map_err(|e| EngineError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?
    } else {
        info!(path = %path.display(), "No config file found, using defaults");
        ServerConfig::default()
    };

    if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
        config.port = port;
    }

    Ok(config)
}
