use std::{fs, path::PathBuf};

use tempfile::tempdir;

use corkboard_cli::{Args, run};

/// Collects all .json files from a directory
fn collect_board_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    files.sort();
    files
}

/// Demo boards live at the workspace root, not in the crate
fn demos_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

fn args_for(input: &PathBuf, output: PathBuf, strategy: Option<&str>) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        strategy: strategy.map(str::to_string),
        fit: true,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let valid_demos = collect_board_files(demos_path());

    assert!(!valid_demos.is_empty(), "No demo boards found in demos/");

    let mut failed = Vec::new();

    for demo_path in &valid_demos {
        for strategy in ["grid", "masonry", "compact"] {
            let output_path = temp_dir.path().join(format!(
                "{}_{strategy}.json",
                demo_path.file_stem().unwrap().to_string_lossy()
            ));
            let args = args_for(demo_path, output_path.clone(), Some(strategy));

            if let Err(e) = run(&args) {
                failed.push((demo_path.clone(), strategy, e.to_string()));
                continue;
            }

            let input: serde_json::Value =
                serde_json::from_str(&fs::read_to_string(demo_path).unwrap()).unwrap();
            let output: serde_json::Value =
                serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
            let input_len = input.as_array().map(Vec::len);
            let output_len = output.as_array().map(Vec::len);
            if input_len != output_len {
                failed.push((
                    demo_path.clone(),
                    strategy,
                    format!("panel count changed: {input_len:?} -> {output_len:?}"),
                ));
            }
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemo boards that failed:");
        for (path, strategy, err) in &failed {
            eprintln!("  - {} ({strategy}): {err}", path.display());
        }
        panic!("{} demo run(s) failed unexpectedly", failed.len());
    }

    println!("✅ All {} demo boards passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let error_demos = collect_board_files(demos_path().join("errors"));

    assert!(
        !error_demos.is_empty(),
        "No error boards found in demos/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join(format!(
            "error_{}.json",
            demo_path.file_stem().unwrap().to_string_lossy()
        ));
        let args = args_for(demo_path, output_path.clone(), None);

        if run(&args).is_ok() {
            unexpectedly_succeeded.push(demo_path.clone());
        }
        assert!(
            !output_path.exists(),
            "{} wrote output despite failing",
            demo_path.display()
        );
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError boards that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error board(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!("✅ All {} error boards failed as expected", error_demos.len());
}

#[test]
fn e2e_unknown_strategy_is_rejected() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demo = collect_board_files(demos_path())
        .into_iter()
        .next()
        .expect("No demo boards found");

    let args = args_for(&demo, temp_dir.path().join("out.json"), Some("spiral"));
    let err = run(&args).expect_err("Unknown strategy should fail");
    assert!(err.to_string().contains("spiral"));
}
