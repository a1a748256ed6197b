//! Go source rendering
//!
//! Produces a file of the form:
//!
//! ```text
//! // Copyright 2020 The go-ethereum Authors
//! // ...
//!
//! package vm
//!
//! var wasmVerify = []byte{0, 97, 115, 109, ...}
//! ```

mod license;

pub use license::GETH_LICENSE_HEADER;

use crate::embed::error::EmbedResult;
use crate::embed::variant::declaration_name;

/// Fixed parts of the generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpec {
    /// Comment block emitted verbatim
    pub header: String,
    /// Go package the file belongs to
    pub package: String,
    /// Prepended to the capitalized variant name
    pub ident_prefix: String,
}

impl Default for TemplateSpec {
    fn default() -> Self {
        TemplateSpec {
            header: GETH_LICENSE_HEADER.to_string(),
            package: "vm".to_string(),
            ident_prefix: "wasm".to_string(),
        }
    }
}

impl TemplateSpec {
    /// Render the source file embedding `bytes` for `variant`.
    pub fn render(
        &self,
        variant: &str,
        bytes: &[u8],
    ) -> EmbedResult<String> {
        let ident = declaration_name(&self.ident_prefix, variant)?;
        Ok(format!(
            "{header}\n\npackage {package}\n\nvar {ident} = []byte{{{list}}}",
            header = self.header,
            package = self.package,
            ident = ident,
            list = format_byte_list(bytes),
        ))
    }
}

/// Decimal byte values separated by `", "`, without brackets.
pub fn format_byte_list(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
