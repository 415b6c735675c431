#![allow(dead_code)]

use log::debug;
use rendertemplates::cli::{run, Args};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

pub const FIXTURES_DIR: &str = "tests/fixtures";

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let mut files1 = std::collections::HashSet::new();
    let mut files2 = std::collections::HashSet::new();

    // Follow symlinks so files reachable via symlinked folders are included in the comparison.
    for entry in WalkDir::new(dir1)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
    {
        let rel = entry.path().strip_prefix(dir1).unwrap().to_path_buf();
        files1.insert(rel);
    }
    for entry in WalkDir::new(dir2)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
    {
        let rel = entry.path().strip_prefix(dir2).unwrap().to_path_buf();
        files2.insert(rel);
    }

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);
    println!();

    let only_in_actual: Vec<_> = files1.difference(&files2).collect();
    let only_in_expected: Vec<_> = files2.difference(&files1).collect();

    if !only_in_actual.is_empty() {
        println!("Files only in ACTUAL output:");
        for file in &only_in_actual {
            println!("  + {:?}", file);
        }
        println!();
    }

    if !only_in_expected.is_empty() {
        println!("Files only in EXPECTED output:");
        for file in &only_in_expected {
            println!("  - {:?}", file);
        }
        println!();
    }

    let mut has_content_diff = false;
    for file in files1.intersection(&files2) {
        let path1 = dir1.join(file);
        let path2 = dir2.join(file);
        let content1 = fs::read(&path1).unwrap();
        let content2 = fs::read(&path2).unwrap();
        if content1 != content2 {
            if !has_content_diff {
                println!("Files with different content:");
                has_content_diff = true;
            }
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:");
            match String::from_utf8(content1.clone()) {
                Ok(s) => println!("{}", s),
                Err(_) => println!("  (binary content, {} bytes)", content1.len()),
            }
            println!("  --- Expected content:");
            match String::from_utf8(content2.clone()) {
                Ok(s) => println!("{}", s),
                Err(_) => println!("  (binary content, {} bytes)", content2.len()),
            }
        }
    }

    if !has_content_diff && only_in_actual.is_empty() && only_in_expected.is_empty() {
        println!("No differences found (this shouldn't happen if test failed!)");
    }
    println!("=== End of Comparison ===\n");
}

/// Copies a fixture's config, data files and templates into a fresh temporary workspace.
pub fn copy_fixture(name: &str) -> TempDir {
    let source = Path::new(FIXTURES_DIR).join(name);
    let workspace = tempfile::tempdir().unwrap();
    for entry in WalkDir::new(&source).into_iter().filter_map(Result::ok) {
        let rel = entry.path().strip_prefix(&source).unwrap();
        if rel.starts_with("expected") {
            continue;
        }
        let target = workspace.path().join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
    workspace
}

/// CLI arguments reading everything from a fixture workspace.
pub fn workspace_args(workspace: &Path) -> Args {
    Args {
        config: Some(workspace.join("config.yaml")),
        data: workspace.join("data"),
        data_file: None,
        templates: Some(workspace.join("templates")),
        show_output_dir: true,
        gh_token: None,
        append_slice: false,
        dry_run: false,
        verbose: 2,
    }
}

/// Runs rendertemplates on a copy of the fixture, compares the generated directory to
/// the fixture's expected output, prints any differences, and asserts that they are identical.
///
/// # Arguments
/// * `fixture` - Name of the fixture directory under `tests/fixtures`.
/// * `generated` - Directory, relative to the workspace, the fixture renders into.
pub fn run_and_assert(fixture: &str, generated: &str) -> TempDir {
    let workspace = copy_fixture(fixture);
    run(workspace_args(workspace.path())).unwrap();

    let actual = workspace.path().join(generated);
    let expected: PathBuf = Path::new(FIXTURES_DIR).join(fixture).join("expected").join(generated);
    match dir_diff::is_different(&actual, &expected) {
        Ok(different) => {
            if different {
                print_dir_diff(&actual, &expected);
                panic!("Directories differ. See above for details.");
            }
        }
        Err(e) => {
            debug!("Error comparing directories: {e}");
        }
    }
    assert!(!dir_diff::is_different(&actual, &expected).unwrap());
    workspace
}
