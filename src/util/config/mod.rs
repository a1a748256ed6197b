//! precompile-embed configuration file
//!
//! An optional `precompile-embed.toml` in the workspace tunes the build,
//! the artifact naming, the output layout and the variant list. Every field
//! has a default reproducing the go-ethereum setup, so an empty file (or no
//! file) is valid.
//!
//! # Priority
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. precompile-embed.toml
//! 4. Default values
//! ```
//!
//! # Example
//!
//! ```toml
//! [build]
//! target = "wasm32-unknown-unknown"
//!
//! [output]
//! mode = "local"
//!
//! [[variant]]
//! name = "verify"
//!
//! [[variant]]
//! name = "update"
//! output = "generated/wasm_{variant}.go"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::embed::builder::DEFAULT_TARGET;
use crate::embed::template::{TemplateSpec, GETH_LICENSE_HEADER};

/// Configuration file name looked up in the workspace
pub const CONFIG_FILE: &str = "precompile-embed.toml";

/// Contents of `precompile-embed.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmbedConfig {
    /// Build toolchain settings
    #[serde(default)]
    pub build: BuildConfig,
    /// Artifact naming
    #[serde(default)]
    pub artifact: ArtifactConfig,
    /// Generated source layout
    #[serde(default)]
    pub output: OutputConfig,
    /// Ordered variant list; empty means the defaults
    #[serde(default, rename = "variant", skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<VariantConfig>,
}

/// `[build]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Target triple passed to `cargo build --target`
    #[serde(default = "default_target")]
    pub target: String,
    /// Build only this workspace member
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
}

fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            package: None,
        }
    }
}

/// `[artifact]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Artifact file stem before `_<variant>`
    #[serde(default = "default_basename")]
    pub basename: String,
    /// Artifact file extension
    #[serde(default = "default_artifact_extension")]
    pub extension: String,
}

fn default_basename() -> String {
    "precompile_1x_tree".to_string()
}

fn default_artifact_extension() -> String {
    "wasm".to_string()
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            basename: default_basename(),
            extension: default_artifact_extension(),
        }
    }
}

/// Where generated files are rooted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Under `$GOPATH` in the go-ethereum checkout
    #[default]
    Gopath,
    /// Relative to the current working directory
    Local,
}

/// `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path resolution strategy
    #[serde(default)]
    pub mode: OutputMode,
    /// Directory below `$GOPATH` used in gopath mode
    #[serde(default = "default_go_subdir")]
    pub go_subdir: PathBuf,
    /// File name before the variant name
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    /// Generated file extension
    #[serde(default = "default_output_extension")]
    pub extension: String,
    /// Go package declared by generated files
    #[serde(default = "default_package")]
    pub package: String,
    /// Declaration name prefix
    #[serde(default = "default_ident_prefix")]
    pub ident_prefix: String,
    /// File whose contents replace the license header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_file: Option<PathBuf>,
}

fn default_go_subdir() -> PathBuf {
    PathBuf::from("src/github.com/ethereum/go-ethereum/core/vm")
}

fn default_file_prefix() -> String {
    "wasm_".to_string()
}

fn default_output_extension() -> String {
    "go".to_string()
}

fn default_package() -> String {
    "vm".to_string()
}

fn default_ident_prefix() -> String {
    "wasm".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::default(),
            go_subdir: default_go_subdir(),
            file_prefix: default_file_prefix(),
            extension: default_output_extension(),
            package: default_package(),
            ident_prefix: default_ident_prefix(),
            header_file: None,
        }
    }
}

/// One `[[variant]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Variant name
    pub name: String,
    /// Artifact path template overriding the derived one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<String>,
    /// Output path template overriding the derived one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl VariantConfig {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            artifact: None,
            output: None,
        }
    }
}

impl EmbedConfig {
    /// Template settings for rendering. Reads `header_file` when set.
    pub fn template_spec(&self) -> Result<TemplateSpec, ConfigError> {
        let header = match &self.output.header_file {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                text.trim_end_matches('\n').to_string()
            }
            None => GETH_LICENSE_HEADER.to_string(),
        };

        Ok(TemplateSpec {
            header,
            package: self.output.package.clone(),
            ident_prefix: self.output.ident_prefix.clone(),
        })
    }
}

/// Load a configuration file. The file must exist.
pub fn load_config(path: &Path) -> Result<EmbedConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load `precompile-embed.toml` from `workspace`, or defaults if absent.
pub fn load_workspace_config(workspace: &Path) -> Result<EmbedConfig, ConfigError> {
    let path = workspace.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(EmbedConfig::default());
    }
    load_config(&path)
}

/// Configuration file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
