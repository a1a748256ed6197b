//! `precompile-embed generate` - build the precompiles and regenerate the Go sources

use crate::embed::builder::{CargoToolchain, Toolchain};
use crate::embed::config::Config;
use crate::embed::error::EmbedResult;
use crate::embed::pipeline::{Pipeline, Report};

/// Run the full pipeline with an explicit toolchain
pub fn exec_with<T: Toolchain>(
    config: &Config,
    toolchain: T,
) -> EmbedResult<Report> {
    let report = Pipeline::new(config, toolchain).run()?;

    for generated in &report.generated {
        println!(
            "✓ {} -> {} ({} bytes)",
            generated.variant,
            generated.output.display(),
            generated.artifact_len
        );
    }

    Ok(report)
}

/// Run the full pipeline with `cargo`
pub fn exec(config: &Config) -> EmbedResult<Report> {
    let toolchain = CargoToolchain::new(&config.program, &config.target)
        .with_package(config.package.clone());
    exec_with(config, toolchain)
}
