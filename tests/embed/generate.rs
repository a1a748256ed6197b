//! End-to-end runs of the generate pipeline against a fake toolchain

use std::fs;

use precompile_embed::embed::commands::generate;
use precompile_embed::util::config::EmbedConfig;
use precompile_embed::{Config, EmbedError, Environment, Overrides};

use crate::common::{parse_declaration, release_dir, FakeToolchain, Sandbox};

#[test]
fn test_generate_into_gopath() {
    let sandbox = Sandbox::new();
    let config = sandbox.gopath_config();
    let toolchain = FakeToolchain::producing(vec![("verify", vec![0, 97, 115, 109]), ("update", vec![1, 2, 255])]);

    let report = generate::exec_with(&config, toolchain).unwrap();
    assert_eq!(report.generated.len(), 2);

    assert_eq!(
        sandbox.files_in(&sandbox.vm_dir()),
        vec!["wasm_update.go", "wasm_verify.go"]
    );

    let verify = fs::read_to_string(sandbox.vm_dir().join("wasm_verify.go")).unwrap();
    assert!(verify.starts_with("// Copyright 2020 The go-ethereum Authors\n"));
    assert!(verify.contains("\n\npackage vm\n\n"));
    assert_eq!(
        parse_declaration(&verify),
        ("wasmVerify".to_string(), vec![0, 97, 115, 109])
    );

    let update = fs::read_to_string(sandbox.vm_dir().join("wasm_update.go")).unwrap();
    assert!(update.ends_with("var wasmUpdate = []byte{1, 2, 255}"));
}

#[test]
fn test_generate_local_mode() {
    let sandbox = Sandbox::new();
    let config = sandbox.local_config();
    let toolchain = FakeToolchain::producing(vec![("verify", vec![7]), ("update", vec![8])]);

    generate::exec_with(&config, toolchain).unwrap();

    assert_eq!(
        sandbox.files_in(&sandbox.workspace()),
        vec!["wasm_update.go", "wasm_verify.go"]
    );
    assert!(sandbox.files_in(&sandbox.vm_dir()).is_empty());
}

#[test]
fn test_declarations_are_unique() {
    let sandbox = Sandbox::new();
    let config = sandbox.gopath_config();
    let toolchain = FakeToolchain::producing(vec![("verify", vec![1]), ("update", vec![1])]);

    let report = generate::exec_with(&config, toolchain).unwrap();
    let names: Vec<_> = report
        .generated
        .iter()
        .map(|g| g.declaration.as_str())
        .collect();
    assert_eq!(names, vec!["wasmVerify", "wasmUpdate"]);
}

#[test]
fn test_each_variant_embeds_its_own_artifact() {
    let sandbox = Sandbox::new();
    let config = sandbox.gopath_config();
    let toolchain = FakeToolchain::producing(vec![("verify", vec![10, 11]), ("update", vec![20, 21, 22])]);

    generate::exec_with(&config, toolchain).unwrap();

    let update = fs::read_to_string(sandbox.vm_dir().join("wasm_update.go")).unwrap();
    assert_eq!(parse_declaration(&update).1, vec![20, 21, 22]);
}

#[test]
fn test_regenerate_overwrites() {
    let sandbox = Sandbox::new();
    let config = sandbox.gopath_config();

    generate::exec_with(
        &config,
        FakeToolchain::producing(vec![("verify", vec![1, 1, 1, 1]), ("update", vec![2])]),
    )
    .unwrap();
    generate::exec_with(&config, FakeToolchain::producing(vec![("verify", vec![3]), ("update", vec![4])]))
        .unwrap();

    let verify = fs::read_to_string(sandbox.vm_dir().join("wasm_verify.go")).unwrap();
    assert_eq!(parse_declaration(&verify).1, vec![3]);
}

#[test]
fn test_empty_gopath_is_config_error() {
    let sandbox = Sandbox::new();
    let env = Environment {
        gopath: Some(String::new()),
        ..sandbox.env()
    };

    let err = Config::resolve(&EmbedConfig::default(), &env, &Overrides::default()).unwrap_err();
    assert!(matches!(err, EmbedError::Config(_)));
    assert!(sandbox.files_in(&sandbox.vm_dir()).is_empty());
}

#[test]
fn test_build_failure_writes_nothing() {
    let sandbox = Sandbox::new();
    let config = sandbox.gopath_config();

    let err = generate::exec_with(&config, FakeToolchain::failing(101)).unwrap_err();
    assert!(matches!(err, EmbedError::BuildFailed { code: Some(101), .. }));
    assert!(sandbox.files_in(&sandbox.vm_dir()).is_empty());
}

#[test]
fn test_missing_artifact_reports_variant() {
    let sandbox = Sandbox::new();
    let config = sandbox.gopath_config();
    let toolchain = FakeToolchain::producing(vec![("verify", vec![1, 2, 3])]);

    let err = generate::exec_with(&config, toolchain).unwrap_err();
    match err {
        EmbedError::MissingArtifact { variant, path } => {
            assert_eq!(variant, "update");
            assert_eq!(
                path,
                release_dir(&sandbox.workspace()).join("precompile_1x_tree_update.wasm")
            );
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(sandbox.files_in(&sandbox.vm_dir()).is_empty());
}

#[test]
fn test_missing_output_directory_is_write_error() {
    let sandbox = Sandbox::new();
    fs::remove_dir_all(sandbox.vm_dir()).unwrap();
    let config = sandbox.gopath_config();
    let toolchain = FakeToolchain::producing(vec![("verify", vec![1]), ("update", vec![2])]);

    let err = generate::exec_with(&config, toolchain).unwrap_err();
    assert!(matches!(err, EmbedError::Write { .. }));
}

#[test]
fn test_selected_variant_only() {
    let sandbox = Sandbox::new();
    let overrides = Overrides {
        variants: vec!["verify".to_string()],
        ..Overrides::default()
    };
    let config = Config::resolve(&EmbedConfig::default(), &sandbox.env(), &overrides).unwrap();
    let toolchain = FakeToolchain::producing(vec![("verify", vec![5])]);

    generate::exec_with(&config, toolchain).unwrap();
    assert_eq!(sandbox.files_in(&sandbox.vm_dir()), vec!["wasm_verify.go"]);
}
