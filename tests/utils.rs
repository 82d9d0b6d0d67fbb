#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use template_rename::cli::Args;
use walkdir::WalkDir;

pub const TEMPLATE_FIXTURE: &str = "tests/templates/python-project-template";
pub const EXPECTED_MY_APP: &str = "tests/expected/my-app";

/// Copies the fixture template into `workspace`, keeping its directory name.
///
/// The destination of a run is a sibling of the template, so the template is
/// never used in place.
pub fn copy_template(fixture: &str, workspace: &Path) -> PathBuf {
    let fixture = Path::new(fixture);
    let template_root = workspace.join(fixture.file_name().unwrap());
    for entry in WalkDir::new(fixture).into_iter().filter_map(Result::ok) {
        let target = template_root.join(entry.path().strip_prefix(fixture).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
    template_root
}

/// Non-interactive arguments for renaming `template_dir` to `project_name`.
pub fn args_for(project_name: &str, template_dir: &Path, cred_dir: &Path) -> Args {
    Args {
        project_name: project_name.to_string(),
        repo_name: None,
        template_dir: template_dir.to_path_buf(),
        cred_dir: Some(cred_dir.to_path_buf()),
        yes: true,
        dry_run: false,
        verbose: 2,
    }
}

/// Prints files only present in one directory and files whose contents differ.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let collect = |dir: &Path| -> std::collections::BTreeSet<PathBuf> {
        WalkDir::new(dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file())
            .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
            .collect()
    };
    let files1 = collect(dir1);
    let files2 = collect(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {:?}", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?}", file);
    }
    for file in files1.intersection(&files2) {
        let content1 = fs::read(dir1.join(file)).unwrap();
        let content2 = fs::read(dir2.join(file)).unwrap();
        if content1 != content2 {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", String::from_utf8_lossy(&content1));
            println!("  --- Expected content:\n{}", String::from_utf8_lossy(&content2));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that `actual` and `expected` hold the same files with the same contents.
pub fn assert_same_tree(actual: &Path, expected: &str) {
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, Path::new(expected));
        panic!("Directories differ. See above for details.");
    }
}
