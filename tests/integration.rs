//! Integration tests for foldertree


use assert_cmd::Command;
use foldertree::{DirectoryNode, OutputConfig, TreeFormatter, scan};
use harness::{TestTree, run_foldertree};
use predicates::prelude::*;

#[test]
fn test_basic_tree_output() {
    let tree = TestTree::new();
    tree.add_file("root/a.txt", "");
    tree.add_file("root/sub/b.txt", "");

    let (stdout, _stderr, success) = run_foldertree(tree.path(), &["root", "--color", "never"]);
    assert!(success, "foldertree should succeed");
    assert_eq!(stdout, "root/\n  sub/\n    b.txt\n  a.txt\n");
}

#[test]
fn test_empty_directory_prints_one_line() {
    let tree = TestTree::new();
    tree.add_dir("empty");

    let (stdout, _stderr, success) = run_foldertree(tree.path(), &["empty"]);
    assert!(success);
    assert_eq!(stdout, "empty/\n");
}

#[test]
fn test_files_only_directory() {
    let tree = TestTree::new();
    tree.add_file("dir/y.txt", "");
    tree.add_file("dir/x.txt", "");

    let (stdout, _stderr, success) = run_foldertree(tree.path(), &["dir"]);
    assert!(success);
    assert_eq!(stdout, "dir/\n  x.txt\n  y.txt\n");
}

#[test]
fn test_hidden_entries_are_shown() {
    let tree = TestTree::new();
    tree.add_file("proj/.env", "");
    tree.add_file("proj/.config/settings", "");

    let (stdout, _stderr, success) = run_foldertree(tree.path(), &["proj"]);
    assert!(success);
    assert_eq!(stdout, "proj/\n  .config/\n    settings\n  .env\n");
}

#[test]
fn test_missing_path_fails_without_output() {
    let tree = TestTree::new();

    let (stdout, stderr, success) = run_foldertree(tree.path(), &["nope"]);
    assert!(!success, "missing path should fail");
    assert!(stdout.is_empty(), "no partial output expected: {}", stdout);
    assert!(stderr.contains("foldertree:"), "stderr: {}", stderr);
    assert!(stderr.contains("nope"), "stderr: {}", stderr);
}

#[test]
fn test_file_path_fails() {
    let tree = TestTree::new();
    tree.add_file("file.txt", "content");

    Command::cargo_bin("foldertree")
        .unwrap()
        .current_dir(tree.path())
        .arg("file.txt")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_path_is_required() {
    Command::cargo_bin("foldertree")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_indent_flag() {
    let tree = TestTree::new();
    tree.add_file("root/a.txt", "");

    Command::cargo_bin("foldertree")
        .unwrap()
        .current_dir(tree.path())
        .args(["root", "--indent", "3"])
        .assert()
        .success()
        .stdout("   root/\n     a.txt\n");
}

#[test]
fn test_indent_conflicts_with_json() {
    let tree = TestTree::new();
    tree.add_file("root/a.txt", "");

    Command::cargo_bin("foldertree")
        .unwrap()
        .current_dir(tree.path())
        .args(["root", "--json", "--indent", "4"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_summary_flag() {
    let tree = TestTree::new();
    tree.add_file("root/a.txt", "");
    tree.add_file("root/sub/b.txt", "");
    tree.add_file("root/sub/c.txt", "");

    let (stdout, _stderr, success) = run_foldertree(tree.path(), &["root", "--summary"]);
    assert!(success);
    assert!(
        stdout.ends_with("\n1 directories, 3 files\n"),
        "stdout: {}",
        stdout
    );
}

#[test]
fn test_json_output() {
    let tree = TestTree::new();
    tree.add_file("root/a.txt", "");
    tree.add_file("root/sub/b.txt", "");

    let (stdout, _stderr, success) = run_foldertree(tree.path(), &["root", "--json"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["name"], "root");
    assert_eq!(value["files"], serde_json::json!(["a.txt"]));
    assert_eq!(
        value["subdirectories"]["sub"]["files"],
        serde_json::json!(["b.txt"])
    );
}

#[test]
fn test_color_always_marks_directories() {
    let tree = TestTree::new();
    tree.add_file("root/a.txt", "");

    let (stdout, _stderr, success) =
        run_foldertree(tree.path(), &["root", "--color", "always"]);
    assert!(success);
    assert!(stdout.contains("\x1b["), "expected ANSI codes: {:?}", stdout);
    assert!(stdout.contains("  a.txt\n"));
}

#[test]
fn test_library_scan_and_format() {
    let tree = TestTree::new();
    tree.add_file("src/main.rs", "");
    tree.add_file("src/tree/node.rs", "");
    tree.add_file("Cargo.toml", "");

    let root = scan(tree.path()).unwrap();
    let expected = DirectoryNode::empty(root.name())
        .with_file("Cargo.toml")
        .with_subdirectory(
            DirectoryNode::empty("src")
                .with_file("main.rs")
                .with_subdirectory(DirectoryNode::empty("tree").with_file("node.rs")),
        );
    assert_eq!(root, expected);

    let output = TreeFormatter::new(OutputConfig::default()).format(&root);
    let lines: Vec<_> = output.lines().skip(1).collect();
    assert_eq!(
        lines,
        vec!["  src/", "    tree/", "      node.rs", "    main.rs", "  Cargo.toml"]
    );
}

#[test]
fn test_every_line_indented_by_depth() {
    let tree = TestTree::new();
    // Names carry their depth below the scan root: d1 is at depth 1, f2 at depth 2.
    tree.add_file("top/f1", "");
    tree.add_file("top/d1/f2", "");
    tree.add_file("top/d1/d2/f3", "");
    tree.add_file("top/d1/d2/d3/f4", "");
    tree.add_dir("top/d1/d2/d3/d4");

    let root = scan(tree.path().join("top")).unwrap();
    let output = TreeFormatter::new(OutputConfig::default()).format(&root);
    assert_eq!(output.lines().next(), Some("top/"));
    for line in output.lines().skip(1) {
        let name = line.trim_start().trim_end_matches('/');
        let depth: usize = name[1..].parse().unwrap();
        let indent = line.len() - line.trim_start().len();
        assert_eq!(indent, 2 * depth, "wrong indent for {:?}", line);
    }
    assert_eq!(output.lines().count(), 1 + 4 + 4);
}

#[test]
fn test_populated_tree_counts() {
    let tree = TestTree::new();
    tree.populate(3, 2, 2);

    let root = scan(tree.path()).unwrap();
    assert_eq!(root.directory_count(), 2 + 4 + 8);
    assert_eq!(root.file_count(), 2 * (1 + 2 + 4 + 8));
    assert_eq!(scan(tree.path()).unwrap(), root);
}
