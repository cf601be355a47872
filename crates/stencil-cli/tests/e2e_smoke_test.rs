use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use stencil::StencilError;
use stencil_cli::{Args, run};

const TEAM: &str = r#"
[[file]]
name = "com/acme/Team.java"
imports = ["java.util.List", "java.lang.String"]

[[file.declaration]]
kind = "class"
name = "Team"
modifiers = ["public"]

[[file.declaration.field]]
name = "members"
type = "List<String>"
modifiers = ["private", "final"]

[[file.declaration.method]]
name = "members"
returns = "List<String>"
modifiers = ["public"]
body = ["return members;"]
"#;

const TEAM_JAVA: &str = "\
package com.acme;

import java.util.List;

public class Team {
    private final List<String> members;

    public List<String> members() {
        return members;
    }
}
";

fn demos_dir() -> PathBuf {
    // Demos live at the workspace root, not in the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

/// Collects model documents, leaving out configuration files
fn collect_models(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| {
                    path.extension().and_then(|ext| ext.to_str()) == Some("toml")
                        && path.file_stem().and_then(|stem| stem.to_str()) != Some("config")
                })
                .collect()
        })
        .unwrap_or_default();

    files.sort();
    files
}

fn args(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        overwrite: false,
        dry_run: false,
        log_level: "off".to_string(),
    }
}

fn write_model(dir: &Path, source: &str) -> PathBuf {
    let path = dir.join("model.toml");
    fs::write(&path, source).expect("Failed to write model document");
    path
}

#[test]
fn e2e_smoke_test_demos() {
    let models = collect_models(&demos_dir());
    assert!(!models.is_empty(), "No model documents found in demos/");

    let mut failed = Vec::new();
    for model in &models {
        let out = tempdir().expect("Failed to create temp directory");
        if let Err(err) = run(&args(model, out.path())) {
            failed.push((model.clone(), err));
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_demo_with_config() {
    let out = tempdir().expect("Failed to create temp directory");
    let mut args = args(&demos_dir().join("user.toml"), out.path());
    args.config = Some(demos_dir().join("config.toml").to_string_lossy().to_string());

    run(&args).expect("Demo should render");

    let user = fs::read_to_string(out.path().join("com/acme/model/User.java")).expect("User.java");
    assert!(user.starts_with("package com.acme.model;\n\nimport java.util.List;\nimport static java.util.Objects.requireNonNull;\n"));
    assert!(user.contains("\n  public String name() {\n    return name;\n  }\n"));
    assert!(user.contains("this.roles = List.copyOf(roles);"));

    let repository = fs::read_to_string(out.path().join("com/acme/repo/UserRepository.java"))
        .expect("UserRepository.java");
    assert!(repository.contains("import com.acme.model.User;"));
    assert!(repository.contains("void save(User user) throws java.io.IOException;"));
}

#[test]
fn e2e_generates_expected_source() {
    let dir = tempdir().expect("Failed to create temp directory");
    let model = write_model(dir.path(), TEAM);
    let out = dir.path().join("out");

    run(&args(&model, &out)).expect("Model should render");

    let generated = fs::read_to_string(out.join("com/acme/Team.java")).expect("Team.java");
    assert_eq!(generated, TEAM_JAVA);
}

#[test]
fn e2e_existing_files_need_overwrite() {
    let dir = tempdir().expect("Failed to create temp directory");
    let model = write_model(dir.path(), TEAM);
    let out = dir.path().join("out");
    let target = out.join("com/acme/Team.java");
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, "// hand edited\n").unwrap();

    let mut args = args(&model, &out);
    run(&args).expect("Skipping is not an error");
    assert_eq!(fs::read_to_string(&target).unwrap(), "// hand edited\n");

    args.overwrite = true;
    run(&args).expect("Overwrite should succeed");
    assert_eq!(fs::read_to_string(&target).unwrap(), TEAM_JAVA);
}

#[test]
fn e2e_dry_run_writes_nothing() {
    let dir = tempdir().expect("Failed to create temp directory");
    let model = write_model(dir.path(), TEAM);
    let out = dir.path().join("out");

    let mut args = args(&model, &out);
    args.dry_run = true;
    run(&args).expect("Dry run should succeed");

    assert!(!out.exists());
}

#[test]
fn e2e_invalid_type_expression_is_a_parse_error() {
    let dir = tempdir().expect("Failed to create temp directory");
    let broken = TEAM.replacen("type = \"List<String>\"", "type = \"List<String\"", 1);
    let model = write_model(dir.path(), &broken);

    let err = run(&args(&model, &dir.path().join("out"))).unwrap_err();
    assert!(matches!(err, StencilError::Parse { ref src, .. } if src == "List<String"));
}

#[test]
fn e2e_missing_input_is_an_io_error() {
    let dir = tempdir().expect("Failed to create temp directory");

    let err = run(&args(&dir.path().join("absent.toml"), dir.path())).unwrap_err();
    assert!(matches!(err, StencilError::Io(_)));
}

#[test]
fn e2e_file_name_outside_output_is_rejected() {
    let dir = tempdir().expect("Failed to create temp directory");
    let escaping = TEAM.replacen("com/acme/Team.java", "../escaped/Team.java", 1);
    let model = write_model(dir.path(), &escaping);

    let err = run(&args(&model, &dir.path().join("out"))).unwrap_err();
    assert!(matches!(err, StencilError::Io(ref io) if io.kind() == std::io::ErrorKind::InvalidInput));
    assert!(!dir.path().join("escaped").exists());
}
