use std::path::PathBuf;

use arcmenu_model::ModelError;
use thiserror::Error;

use crate::lifecycle::scheduler::TaskTicket;

#[derive(Error, Debug)]
pub enum MenuError {
    /// An open command carried missing, empty, or non-list data. The menu
    /// state is left untouched.
    #[error("Input rejected: {0}")]
    InputRejected(#[from] ModelError),

    /// A deferred task fired after its session was closed or replaced.
    #[error("Stale callback discarded: {ticket:?}")]
    StaleCallback { ticket: TaskTicket },

    /// A UI-initiated operation arrived while the menu was closed.
    #[error("Menu is not open")]
    NotOpen,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be {expectation}, got {value}")]
    OutOfRange {
        field: &'static str,
        expectation: &'static str,
        value: f32,
    },
}

pub type Result<T> = std::result::Result<T, MenuError>;
