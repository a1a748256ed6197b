//! Reading build artifacts

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::embed::error::{EmbedError, EmbedResult};
use crate::embed::variant::VariantSpec;

/// Raw bytes of one variant's compiled artifact.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub variant: String,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Read the artifact belonging to `variant`.
///
/// An absent file is reported as [`EmbedError::MissingArtifact`].
pub fn read_artifact(variant: &VariantSpec) -> EmbedResult<Artifact> {
    let path = variant.artifact_path();
    let bytes = read_bytes(&variant.name, &path)?;

    Ok(Artifact {
        variant: variant.name.clone(),
        path,
        bytes,
    })
}

/// Read the whole file at `path` on behalf of `variant`.
pub fn read_bytes(
    variant: &str,
    path: &Path,
) -> EmbedResult<Vec<u8>> {
    debug!("reading artifact {}", path.display());

    fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => EmbedError::MissingArtifact {
            variant: variant.to_string(),
            path: path.to_path_buf(),
        },
        _ => EmbedError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}
