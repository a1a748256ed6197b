//! Resolved run configuration
//!
//! [`Config::resolve`] merges the configuration file, the captured
//! environment and CLI overrides, and validates the result once. The
//! pipeline only ever sees a validated [`Config`].

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::debug;

use crate::embed::error::{EmbedError, EmbedResult};
use crate::embed::template::TemplateSpec;
use crate::embed::variant::{declaration_name, PathTemplate, VariantSpec, DEFAULT_VARIANTS};
use crate::util::config::{EmbedConfig, OutputMode, VariantConfig};

/// Environment values the tool depends on, captured once at start-up.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// `$GOPATH`
    pub gopath: Option<String>,
    /// `$CARGO`, the toolchain program to run
    pub cargo: Option<String>,
    /// Process working directory
    pub cwd: PathBuf,
}

impl Environment {
    pub fn capture() -> EmbedResult<Self> {
        let cwd = std::env::current_dir().map_err(|e| {
            EmbedError::Config(format!("cannot determine working directory: {}", e))
        })?;
        Ok(Environment {
            gopath: std::env::var("GOPATH").ok(),
            cargo: std::env::var("CARGO").ok(),
            cwd,
        })
    }
}

/// Values given on the command line; `None` keeps the lower layers.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub mode: Option<OutputMode>,
    pub workspace: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    /// Restrict the run to these variants, in this order
    pub variants: Vec<String>,
}

/// Validated configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the build runs in
    pub workspace: PathBuf,
    /// Toolchain program, normally `cargo`
    pub program: String,
    /// Target triple
    pub target: String,
    /// Workspace member to build, if any
    pub package: Option<String>,
    pub template: TemplateSpec,
    /// Ordered, non-empty, uniquely named
    pub variants: Vec<VariantSpec>,
}

impl Config {
    pub fn resolve(
        file: &EmbedConfig,
        env: &Environment,
        overrides: &Overrides,
    ) -> EmbedResult<Self> {
        let workspace = match &overrides.workspace {
            Some(dir) => env.cwd.join(dir),
            None => env.cwd.clone(),
        };

        let mode = overrides.mode.unwrap_or(file.output.mode);
        let out_dir = match &overrides.out_dir {
            Some(dir) => env.cwd.join(dir),
            None => match mode {
                OutputMode::Gopath => {
                    let gopath = env
                        .gopath
                        .as_deref()
                        .map(str::trim)
                        .filter(|value| !value.is_empty())
                        .ok_or_else(|| {
                            EmbedError::Config("GOPATH is not set or empty".to_string())
                        })?;
                    PathBuf::from(gopath).join(&file.output.go_subdir)
                }
                OutputMode::Local => env.cwd.clone(),
            },
        };
        debug!("output directory: {}", out_dir.display());

        let template = file.template_spec()?;

        let artifact_dir = workspace
            .join("target")
            .join(&file.build.target)
            .join("release");
        let default_artifact = artifact_dir.join(format!(
            "{}_{{variant}}.{}",
            file.artifact.basename, file.artifact.extension
        ));
        let default_output = out_dir.join(format!(
            "{}{{variant}}.{}",
            file.output.file_prefix, file.output.extension
        ));

        let entries = select_variants(&file.variants, &overrides.variants);
        let mut variants = Vec::with_capacity(entries.len());
        for entry in entries {
            let artifact = match &entry.artifact {
                Some(path) => PathTemplate::new(workspace.join(path).to_string_lossy()),
                None => PathTemplate::new(default_artifact.to_string_lossy()),
            };
            let output = match &entry.output {
                Some(path) => PathTemplate::new(out_dir.join(path).to_string_lossy()),
                None => PathTemplate::new(default_output.to_string_lossy()),
            };
            variants.push(VariantSpec::new(&entry.name, artifact, output));
        }

        validate_variants(&variants, &template)?;

        Ok(Config {
            workspace,
            program: env.cargo.clone().unwrap_or_else(|| "cargo".to_string()),
            target: file.build.target.clone(),
            package: file.build.package.clone(),
            template,
            variants,
        })
    }
}

/// Configured entries (or the defaults), narrowed to `only` when given.
fn select_variants(
    configured: &[VariantConfig],
    only: &[String],
) -> Vec<VariantConfig> {
    let base: Vec<VariantConfig> = if configured.is_empty() {
        DEFAULT_VARIANTS
            .iter()
            .map(|name| VariantConfig::named(name))
            .collect()
    } else {
        configured.to_vec()
    };

    if only.is_empty() {
        return base;
    }

    only.iter()
        .map(|name| {
            base.iter()
                .find(|entry| &entry.name == name)
                .cloned()
                .unwrap_or_else(|| VariantConfig::named(name))
        })
        .collect()
}

fn validate_variants(
    variants: &[VariantSpec],
    template: &TemplateSpec,
) -> EmbedResult<()> {
    if variants.is_empty() {
        return Err(EmbedError::Config("no variants configured".to_string()));
    }

    let mut names = HashSet::new();
    let mut idents = HashSet::new();
    let mut outputs = HashSet::new();
    for variant in variants {
        let ident = declaration_name(&template.ident_prefix, &variant.name)?;
        if !names.insert(variant.name.as_str()) {
            return Err(EmbedError::Config(format!(
                "variant '{}' listed twice",
                variant.name
            )));
        }
        if !idents.insert(ident.clone()) {
            return Err(EmbedError::Config(format!(
                "variant '{}' collides on declaration {}",
                variant.name, ident
            )));
        }
        if !outputs.insert(variant.output_path()) {
            return Err(EmbedError::Config(format!(
                "variant '{}' shares its output file with another variant",
                variant.name
            )));
        }
    }
    Ok(())
}
