//! Invoking the external build toolchain

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::embed::error::{EmbedError, EmbedResult};

/// Default compilation target for the precompiles
pub const DEFAULT_TARGET: &str = "wasm32-unknown-unknown";

/// Something that turns the workspace sources into artifacts.
///
/// The pipeline calls [`Toolchain::build`] exactly once, before reading
/// any artifact.
pub trait Toolchain {
    /// Human readable command line, used in logs and errors
    fn describe(&self) -> String;

    /// Build everything in `workspace`. Any failure is fatal.
    fn build(
        &self,
        workspace: &Path,
    ) -> EmbedResult<()>;
}

/// `cargo build --target=<target> --release`
#[derive(Debug, Clone)]
pub struct CargoToolchain {
    program: String,
    target: String,
    package: Option<String>,
}

impl CargoToolchain {
    pub fn new(
        program: &str,
        target: &str,
    ) -> Self {
        CargoToolchain {
            program: program.to_string(),
            target: target.to_string(),
            package: None,
        }
    }

    /// Restrict the build to one workspace member
    pub fn with_package(
        mut self,
        package: Option<String>,
    ) -> Self {
        self.package = package;
        self
    }

    fn args(&self) -> Vec<String> {
        let mut args = vec![
            "build".to_string(),
            format!("--target={}", self.target),
            "--release".to_string(),
        ];
        if let Some(package) = &self.package {
            args.push("--package".to_string());
            args.push(package.clone());
        }
        args
    }
}

impl Toolchain for CargoToolchain {
    fn describe(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args());
        parts.join(" ")
    }

    fn build(
        &self,
        workspace: &Path,
    ) -> EmbedResult<()> {
        let command = self.describe();
        info!("building: {}", command);
        debug!("build workspace: {}", workspace.display());

        let status = Command::new(&self.program)
            .args(self.args())
            .current_dir(workspace)
            .status()
            .map_err(|source| EmbedError::BuildSpawn {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(EmbedError::BuildFailed {
                command,
                code: status.code(),
            });
        }

        Ok(())
    }
}
