use std::{fs, path::Path};

use tracing::info;

use crate::{DevaudioError, Result};

const DEFAULT_CONFIG: &str = r#"# devaudio configuration file

[general]
# log_level = "info"

[audio]
# shaper = "linear"
# property_file = "/var/lib/devaudio/properties.toml"

[audio.volume]
# default = 60
"#;

/// Creates a default configuration file, including its parent directory
pub fn create_default_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| DevaudioError::IoError {
            path: parent.to_path_buf(),
            details: format!("Failed to create config directory: {e}"),
        })?;
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|e| DevaudioError::IoError {
        path: path.to_path_buf(),
        details: format!("Failed to create config file: {e}"),
    })?;

    info!(path = %path.display(), "Created default configuration file");
    Ok(())
}
