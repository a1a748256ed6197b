//! Embedding pipeline error types

use std::path::PathBuf;
use thiserror::Error;

use crate::util::config::ConfigError;

/// Errors that can occur while building, reading, rendering or writing.
///
/// Every variant aborts the run; nothing is retried.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// Required configuration is missing or inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// The configuration file could not be loaded
    #[error(transparent)]
    ConfigFile(#[from] ConfigError),

    /// Variant name cannot produce a usable declaration
    #[error("Invalid variant name {0:?}")]
    InvalidVariant(String),

    /// The build toolchain could not be started
    #[error("Failed to run `{command}`: {source}")]
    BuildSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The build toolchain exited unsuccessfully
    #[error("Build failed: `{command}` exited with {}", exit_code(.code))]
    BuildFailed { command: String, code: Option<i32> },

    /// The build succeeded but did not produce the expected file
    #[error("Missing artifact for variant '{variant}': {}", .path.display())]
    MissingArtifact { variant: String, path: PathBuf },

    /// Reading an artifact failed for a reason other than absence
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a generated source file failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Result type for embedding operations
pub type EmbedResult<T> = Result<T, EmbedError>;
