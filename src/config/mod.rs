use std::env;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

/// Environment variable naming the directory the data file lives in.
pub const ENV_VAR: &str = "ARBEIT_PATH";

/// File name of the data document inside that directory.
pub const FILE_NAME: &str = "arbeit.json";

/// Resolved runtime configuration.
///
/// The data-file path is resolved once here and handed to the commands
/// explicitly; nothing below this layer reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub file: PathBuf,
}

impl Config {
    /// Resolve the data file: the `--file` override wins, otherwise
    /// `$ARBEIT_PATH/arbeit.json`.
    pub fn resolve(override_file: Option<&str>) -> AppResult<Self> {
        if let Some(file) = override_file {
            return Ok(Self {
                file: PathBuf::from(file),
            });
        }

        let dir = env::var(ENV_VAR)
            .map_err(|_| AppError::Config(format!("{ENV_VAR} is not set")))?;

        Ok(Self {
            file: PathBuf::from(dir).join(FILE_NAME),
        })
    }
}
