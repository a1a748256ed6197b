//! `precompile-embed variants` - show what a run would read and write

use crate::embed::config::Config;
use crate::embed::error::EmbedResult;
use crate::embed::variant::declaration_name;

/// One line per variant: name, declaration, artifact and output paths
pub fn describe(config: &Config) -> EmbedResult<Vec<String>> {
    config
        .variants
        .iter()
        .map(|variant| {
            let ident = declaration_name(&config.template.ident_prefix, &variant.name)?;
            Ok(format!(
                "{} ({})\n  artifact: {}\n  output:   {}",
                variant.name,
                ident,
                variant.artifact_path().display(),
                variant.output_path().display()
            ))
        })
        .collect()
}

pub fn exec(config: &Config) -> EmbedResult<()> {
    for line in describe(config)? {
        println!("{}", line);
    }
    Ok(())
}
