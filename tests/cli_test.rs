//! CLI Tests
//!
//! Runs the compiled binary and checks the observable contract: stdout
//! wording and exit status.

mod common;

use common::{TestTree, BINARY, HEADER};
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_repo-hygiene"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("REPO_HYGIENE_LOG")
        .output()
        .expect("Failed to run repo-hygiene")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_missing_start_dir() {
    let output = run(&[]);

    assert_eq!(stdout(&output), "Provide start dir!\n");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_header_check_output() {
    let tree = TestTree::new().unwrap();
    tree.write("a.cpp", "// Copyright 2021 Example Corp\n").unwrap();
    tree.write("b.cpp", "int b;\n").unwrap();
    let root = tree.root().to_string_lossy().to_string();

    let output = run(&[&root]);

    let expected = format!(
        "Provided start dir:{}\nCheck for missing headers\n#########################\n## No header files detected:\n{}\n",
        root,
        tree.display("b.cpp")
    );
    assert_eq!(stdout(&output), expected);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_header_check_success() {
    let tree = TestTree::new().unwrap();
    tree.write("a.cpp", HEADER).unwrap();
    let root = tree.root().to_string_lossy().to_string();

    let output = run(&[&root]);

    assert_eq!(
        stdout(&output),
        format!(
            "Provided start dir:{}\nCheck for missing headers\nSuccess: All files have headers\n",
            root
        )
    );
    assert!(output.status.success());
}

#[test]
fn test_unknown_mode_runs_header_check() {
    let tree = TestTree::new().unwrap();
    let root = tree.root().to_string_lossy().to_string();

    let output = run(&[&root, "headers"]);

    assert!(stdout(&output).contains("Check for missing headers\n"));
    assert!(output.status.success());
}

#[test]
fn test_extra_arguments_fall_through_to_header_check() {
    let tree = TestTree::new().unwrap();
    tree.write("c.cpp", "strcpy(a, b);\n").unwrap();
    let root = tree.root().to_string_lossy().to_string();

    for args in [
        vec![root.as_str(), "FUNCTIONS"],
        vec![root.as_str(), "headers", "functions"],
        vec![root.as_str(), "x", "y", "z"],
    ] {
        let output = run(&args);
        let text = stdout(&output);

        assert!(text.contains("Check for missing headers\n"), "args: {:?}", args);
        assert!(text.ends_with(&format!("{}\n", tree.display("c.cpp"))), "args: {:?}", args);
        assert_eq!(output.status.code(), Some(1), "args: {:?}", args);
    }
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let tree = TestTree::new().unwrap();
    let root = tree.root().to_string_lossy().to_string();

    let output = run(&[&root, "-x"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("-x"));
}

#[test]
fn test_flags_after_functions_mode() {
    let tree = TestTree::new().unwrap();
    tree.write("c.cpp", "strcpy(a, b);\n").unwrap();
    let root = tree.root().to_string_lossy().to_string();

    let output = run(&[&root, "functions", "--quiet"]);

    assert_eq!(
        stdout(&output),
        format!(
            "Provided start dir:{}\nCheck for forbidden functions\n#########################\n## Forbidden functions detected:\n{}\n",
            root,
            tree.display("c.cpp")
        )
    );
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_functions_check_output() {
    let tree = TestTree::new().unwrap();
    tree.write("c.cpp", "char buf[10]; strcpy(buf, src);\n").unwrap();
    let root = tree.root().to_string_lossy().to_string();
    let path = tree.display("c.cpp");

    let output = run(&[&root, "functions"]);

    let expected = format!(
        "Provided start dir:{root}\n\
         Check for forbidden functions\n\
         ERROR: Forbidden function detected in:{path}\n\
         Line start:char buf[10]; strcpy(buf, src);End\n\
         Function:['strcpy(']\n\
         #########################\n\
         ## Forbidden functions detected:\n\
         {path}\n"
    );
    assert_eq!(stdout(&output), expected);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_empty_directory_both_checks_succeed() {
    let tree = TestTree::new().unwrap();
    let root = tree.root().to_string_lossy().to_string();

    let headers = run(&[&root]);
    assert!(stdout(&headers).ends_with("Success: All files have headers\n"));
    assert!(headers.status.success());

    let functions = run(&[&root, "functions"]);
    assert!(stdout(&functions).ends_with("Success: All files checked for forbidden functions\n"));
    assert!(functions.status.success());
}

#[test]
fn test_unreadable_policy_flag() {
    let tree = TestTree::new().unwrap();
    tree.write("blob.raw", BINARY).unwrap();
    let root = tree.root().to_string_lossy().to_string();
    let path = tree.display("blob.raw");

    let report = run(&[&root]);
    let text = stdout(&report);
    assert!(text.contains(&format!("ERROR: Cannot parse file:{}\n", path)));
    assert!(text.ends_with(&format!(
        "Success: All files have headers\n#########################\n## Unreadable files:\n{}\n",
        path
    )));
    assert!(report.status.success());

    let violation = run(&[&root, "--unreadable", "violation"]);
    assert!(stdout(&violation).ends_with(&format!("## No header files detected:\n{}\n", path)));
    assert_eq!(violation.status.code(), Some(1));

    let quiet = run(&[&root, "--unreadable", "ignore", "--quiet"]);
    assert_eq!(
        stdout(&quiet),
        format!(
            "Provided start dir:{}\nCheck for missing headers\nSuccess: All files have headers\n",
            root
        )
    );
    assert!(quiet.status.success());
}

#[test]
fn test_json_output() {
    let tree = TestTree::new().unwrap();
    tree.write("b.cpp", "int b;\n").unwrap();
    let root = tree.root().to_string_lossy().to_string();

    let output = run(&[&root, "--json"]);
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["check"], "headers");
    assert_eq!(json["violations"][0], tree.display("b.cpp"));
    assert_eq!(json["files_scanned"], 1);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_directory_is_usage_error() {
    let tree = TestTree::new().unwrap();
    let missing = tree.root().join("does-not-exist");
    let missing = missing.to_string_lossy().to_string();

    let output = run(&[&missing]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}
