//! Variant descriptors
//!
//! A variant names one precompile flavor. It decides which artifact is read
//! and which source file and declaration are produced for it.

use std::path::PathBuf;

use crate::embed::error::{EmbedError, EmbedResult};

/// Variants generated when nothing else is configured, in generation order.
pub const DEFAULT_VARIANTS: [&str; 2] = ["verify", "update"];

/// Placeholder substituted with the variant name in path templates.
pub const VARIANT_PLACEHOLDER: &str = "{variant}";

/// A path with a `{variant}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate(String);

impl PathTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        PathTemplate(template.into())
    }

    /// Substitute every placeholder occurrence with `name`.
    pub fn render(
        &self,
        name: &str,
    ) -> PathBuf {
        PathBuf::from(self.0.replace(VARIANT_PLACEHOLDER, name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One entry of the ordered variant list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSpec {
    /// Variant name, e.g. `verify`
    pub name: String,
    /// Where the build leaves this variant's artifact
    pub artifact: PathTemplate,
    /// Where the generated source for this variant goes
    pub output: PathTemplate,
}

impl VariantSpec {
    pub fn new(
        name: &str,
        artifact: PathTemplate,
        output: PathTemplate,
    ) -> Self {
        VariantSpec {
            name: name.to_string(),
            artifact,
            output,
        }
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.artifact.render(&self.name)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output.render(&self.name)
    }
}

/// Upper-case the first character and lower-case the rest.
///
/// `verify` becomes `Verify`, `UPDATE` becomes `Update`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Build the declaration name for a variant: `prefix` + capitalized name.
///
/// Fails for an empty name, or when the result is not a valid identifier.
pub fn declaration_name(
    prefix: &str,
    name: &str,
) -> EmbedResult<String> {
    if name.is_empty() {
        return Err(EmbedError::InvalidVariant(name.to_string()));
    }

    let ident = format!("{}{}", prefix, capitalize(name));
    if !is_identifier(&ident) {
        return Err(EmbedError::InvalidVariant(name.to_string()));
    }
    Ok(ident)
}

fn is_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {
            chars.all(unicode_ident::is_xid_continue)
        }
        _ => false,
    }
}
