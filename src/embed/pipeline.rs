//! Build → read → render → write
//!
//! The toolchain runs once. Every variant is then read and rendered before
//! the first file is written, so a failing variant leaves the output tree
//! exactly as it was.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::embed::artifact::read_artifact;
use crate::embed::builder::Toolchain;
use crate::embed::config::Config;
use crate::embed::error::EmbedResult;
use crate::embed::variant::declaration_name;
use crate::embed::writer::write_source;

/// One generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub variant: String,
    /// Declaration name inside the file
    pub declaration: String,
    pub output: PathBuf,
    /// Size of the embedded artifact
    pub artifact_len: usize,
}

/// Files written by a run, in variant order
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub generated: Vec<Generated>,
}

struct Staged {
    entry: Generated,
    contents: String,
}

pub struct Pipeline<'a, T: Toolchain> {
    config: &'a Config,
    toolchain: T,
}

impl<'a, T: Toolchain> Pipeline<'a, T> {
    pub fn new(
        config: &'a Config,
        toolchain: T,
    ) -> Self {
        Pipeline { config, toolchain }
    }

    pub fn run(&self) -> EmbedResult<Report> {
        self.toolchain.build(&self.config.workspace)?;
        let staged = self.stage()?;
        self.commit(staged)
    }

    fn stage(&self) -> EmbedResult<Vec<Staged>> {
        let template = &self.config.template;
        let mut staged = Vec::with_capacity(self.config.variants.len());

        for variant in &self.config.variants {
            let artifact = read_artifact(variant)?;
            debug!(
                "variant {}: {} bytes from {}",
                variant.name,
                artifact.bytes.len(),
                artifact.path.display()
            );

            let contents = template.render(&variant.name, &artifact.bytes)?;
            staged.push(Staged {
                entry: Generated {
                    variant: variant.name.clone(),
                    declaration: declaration_name(&template.ident_prefix, &variant.name)?,
                    output: variant.output_path(),
                    artifact_len: artifact.bytes.len(),
                },
                contents,
            });
        }

        Ok(staged)
    }

    fn commit(
        &self,
        staged: Vec<Staged>,
    ) -> EmbedResult<Report> {
        let mut report = Report::default();
        for Staged { entry, contents } in staged {
            write_source(&entry.output, &contents)?;
            info!(
                "wrote {} ({}, {} bytes)",
                entry.output.display(),
                entry.declaration,
                entry.artifact_len
            );
            report.generated.push(entry);
        }
        Ok(report)
    }
}
