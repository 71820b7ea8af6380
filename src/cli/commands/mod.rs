//! CLI command implementations

pub mod sheet;
pub mod snapshot;

use std::path::Path;

use crate::cli::CliError;
use crate::client::SmartsheetClient;
use crate::config::ClientConfig;

/// Client configured from `config_path`, or from the environment when not given
pub fn connect(config_path: Option<&Path>) -> Result<SmartsheetClient, CliError> {
    let config = match config_path {
        Some(path) => ClientConfig::from_toml_file(path)?,
        None => ClientConfig::from_env()?,
    };
    tracing::debug!("Using {:?}", config);
    Ok(SmartsheetClient::from_config(config)?)
}

/// Refuse to replace an existing file unless `force` is set
pub(crate) fn check_output(path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::OutputExists(path.to_path_buf()));
    }
    Ok(())
}
