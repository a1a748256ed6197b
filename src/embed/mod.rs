//! Precompile embedding
//!
//! Builds the WebAssembly precompiles, reads each variant's artifact and
//! writes it into a Go source file as a byte slice literal.

pub mod artifact;
pub mod builder;
pub mod commands;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod template;
pub mod variant;
pub mod writer;

pub use builder::{CargoToolchain, Toolchain};
pub use config::{Config, Environment, Overrides};
pub use error::{EmbedError, EmbedResult};
pub use pipeline::{Generated, Pipeline, Report};
pub use template::TemplateSpec;
pub use variant::VariantSpec;
