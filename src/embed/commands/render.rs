//! `precompile-embed render` - template one existing artifact without building

use std::path::Path;

use crate::embed::artifact::read_bytes;
use crate::embed::error::EmbedResult;
use crate::embed::template::TemplateSpec;
use crate::embed::writer::write_source;

/// Render `artifact` as the source for `variant`.
///
/// Writes to `output` when given, otherwise returns the text for the
/// caller to print.
pub fn exec(
    template: &TemplateSpec,
    variant: &str,
    artifact: &Path,
    output: Option<&Path>,
) -> EmbedResult<Option<String>> {
    let bytes = read_bytes(variant, artifact)?;

    let contents = template.render(variant, &bytes)?;

    match output {
        Some(path) => {
            write_source(path, &contents)?;
            println!("✓ {} -> {}", variant, path.display());
            Ok(None)
        }
        None => Ok(Some(contents)),
    }
}
