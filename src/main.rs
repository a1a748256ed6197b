//! precompile-embed - CLI

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::{Path, PathBuf};

use precompile_embed::embed::commands::{generate, render, variants};
use precompile_embed::util::config::{load_config, load_workspace_config, EmbedConfig, OutputMode};
use precompile_embed::util::logger;
use precompile_embed::{Config, Environment, Overrides, NAME, VERSION};

/// Build the wasm tree precompiles and embed them into go-ethereum sources
#[derive(Parser, Debug)]
#[command(name = "precompile-embed")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file (default: <workspace>/precompile-embed.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
struct Layout {
    /// Where generated files go
    #[arg(long, value_enum)]
    mode: Option<OutputMode>,

    /// Directory containing the precompile workspace
    #[arg(long, value_name = "DIR")]
    workspace: Option<PathBuf>,

    /// Write generated files here instead of the mode's directory
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Only handle these variants (repeatable)
    #[arg(long = "variant", value_name = "NAME")]
    variants: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the precompiles and regenerate every variant's source file
    Generate {
        #[command(flatten)]
        layout: Layout,
    },

    /// Render one existing artifact without building
    Render {
        /// Variant name used for the declaration
        #[arg(long, value_name = "NAME")]
        variant: String,

        /// Compiled artifact to embed
        #[arg(long, value_name = "FILE")]
        artifact: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List variants with their artifact and output paths
    Variants {
        #[command(flatten)]
        layout: Layout,
    },
}

fn load_file_config(
    explicit: Option<&Path>,
    workspace: &Path,
) -> Result<EmbedConfig> {
    let config = match explicit {
        Some(path) => load_config(path)?,
        None => load_workspace_config(workspace)?,
    };
    Ok(config)
}

fn resolve(
    explicit: Option<&Path>,
    layout: Layout,
    env: &Environment,
) -> Result<Config> {
    let workspace = match &layout.workspace {
        Some(dir) => env.cwd.join(dir),
        None => env.cwd.clone(),
    };
    let file = load_file_config(explicit, &workspace)?;
    let overrides = Overrides {
        mode: layout.mode,
        workspace: layout.workspace,
        out_dir: layout.out_dir,
        variants: layout.variants,
    };
    Ok(Config::resolve(&file, env, &overrides)?)
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli(args.verbose, args.quiet);

    let env = Environment::capture()?;
    let explicit = args.config.as_deref();

    match args.command {
        Commands::Generate { layout } => {
            let config = resolve(explicit, layout, &env).context("Invalid configuration")?;
            generate::exec(&config).context("Failed to generate precompile sources")?;
        }
        Commands::Render {
            variant,
            artifact,
            output,
        } => {
            let file = load_file_config(explicit, &env.cwd)?;
            let template = file.template_spec()?;
            let rendered = render::exec(&template, &variant, &artifact, output.as_deref())
                .with_context(|| format!("Failed to render: {}", artifact.display()))?;
            if let Some(text) = rendered {
                print!("{}", text);
            }
        }
        Commands::Variants { layout } => {
            let config = resolve(explicit, layout, &env).context("Invalid configuration")?;
            variants::exec(&config)?;
        }
    }

    Ok(())
}
