//! precompile-embed
//!
//! Builds the WebAssembly tree precompiles and embeds each one in a
//! go-ethereum source file as a `[]byte` literal.
//!
//! # Example
//!
//! ```no_run
//! use precompile_embed::embed::commands::generate;
//! use precompile_embed::{Config, Environment, Overrides, Result};
//! use precompile_embed::util::config::EmbedConfig;
//!
//! fn main() -> Result<()> {
//!     let env = Environment::capture()?;
//!     let config = Config::resolve(&EmbedConfig::default(), &env, &Overrides::default())?;
//!     generate::exec(&config)?;
//!     Ok(())
//! }
//! ```

#![warn(rust_2018_idioms)]

pub mod embed;
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use embed::{
    CargoToolchain, Config, EmbedError, EmbedResult, Environment, Overrides, Pipeline, Report,
    TemplateSpec, Toolchain, VariantSpec,
};

/// Tool version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool name
pub const NAME: &str = "precompile-embed";
