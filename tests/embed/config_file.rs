//! Loading precompile-embed.toml and layering it under the CLI

use std::fs;
use std::path::Path;

use precompile_embed::embed::commands::generate;
use precompile_embed::util::config::{load_workspace_config, OutputMode, CONFIG_FILE};
use precompile_embed::{Config, Overrides};

use crate::common::{parse_declaration, FakeToolchain, Sandbox};

fn write_config(
    workspace: &Path,
    text: &str,
) {
    fs::write(workspace.join(CONFIG_FILE), text).unwrap();
}

#[test]
fn test_config_file_selects_local_mode() {
    let sandbox = Sandbox::new();
    write_config(&sandbox.workspace(), "[output]\nmode = \"local\"\n");

    let file = load_workspace_config(&sandbox.workspace()).unwrap();
    let config = Config::resolve(&file, &sandbox.env(), &Overrides::default()).unwrap();

    generate::exec_with(&config, FakeToolchain::producing(vec![("verify", vec![1]), ("update", vec![2])]))
        .unwrap();
    assert_eq!(
        sandbox.files_in(&sandbox.workspace()),
        vec!["wasm_update.go", "wasm_verify.go"]
    );
}

#[test]
fn test_cli_mode_beats_config_file() {
    let sandbox = Sandbox::new();
    write_config(&sandbox.workspace(), "[output]\nmode = \"local\"\n");

    let file = load_workspace_config(&sandbox.workspace()).unwrap();
    let overrides = Overrides {
        mode: Some(OutputMode::Gopath),
        ..Overrides::default()
    };
    let config = Config::resolve(&file, &sandbox.env(), &overrides).unwrap();
    assert!(config.variants[0].output_path().starts_with(sandbox.vm_dir()));
}

#[test]
fn test_custom_variants_and_prefix() {
    let sandbox = Sandbox::new();
    write_config(
        &sandbox.workspace(),
        r#"
[output]
mode = "local"
ident_prefix = "precompile"
file_prefix = "precompile_"

[[variant]]
name = "account"
artifact = "target/wasm32-unknown-unknown/release/precompile_1x_tree_{variant}.wasm"
"#,
    );

    let file = load_workspace_config(&sandbox.workspace()).unwrap();
    let config = Config::resolve(&file, &sandbox.env(), &Overrides::default()).unwrap();
    assert_eq!(config.variants.len(), 1);

    generate::exec_with(&config, FakeToolchain::producing(vec![("account", vec![42])])).unwrap();

    let source = fs::read_to_string(sandbox.workspace().join("precompile_account.go")).unwrap();
    assert_eq!(
        parse_declaration(&source),
        ("precompileAccount".to_string(), vec![42])
    );
}

#[test]
fn test_invalid_config_file_is_error() {
    let sandbox = Sandbox::new();
    write_config(&sandbox.workspace(), "[[variant]]\nartifact = 3\n");
    assert!(load_workspace_config(&sandbox.workspace()).is_err());
}
