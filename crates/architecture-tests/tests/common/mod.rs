//! Shared helpers for architecture tests.
//!
//! Invariants:
//! - Paths are resolved from the workspace root, never from the process
//!   working directory, so `cargo test` works from any member crate.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Library crates that must stay free of terminal output.
pub const LIBRARY_CRATES: &[&str] = &["client", "config"];

/// Find the workspace root by looking for Cargo.toml with [workspace].
pub fn find_workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let mut dir = manifest_dir;
    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.exists()
            && let Ok(content) = fs::read_to_string(&cargo_toml)
            && content.contains("[workspace]")
        {
            return dir.to_path_buf();
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => panic!("no workspace Cargo.toml above {}", manifest_dir.display()),
        }
    }
}

/// All `.rs` files under `dir`, skipping build output.
pub fn rust_files(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.file_name() != "target")
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Production source files of a crate: `src/` minus test-only modules.
///
/// Directories named `tests` or `testing` under `src/` hold test code and are
/// skipped.
pub fn production_sources(crate_name: &str) -> Vec<PathBuf> {
    let src = find_workspace_root().join("crates").join(crate_name).join("src");
    assert!(src.exists(), "{} not found", src.display());

    rust_files(&src)
        .into_iter()
        .filter(|path| {
            !path
                .strip_prefix(&src)
                .unwrap_or(path)
                .components()
                .any(|c| c.as_os_str() == "tests" || c.as_os_str() == "testing")
        })
        .collect()
}

/// The part of a source file that precedes its first `#[cfg(test)]` item,
/// as (1-based line number, line) pairs.
pub fn non_test_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .map(|(i, line)| (i + 1, line))
        .collect()
}

/// True when `line` is a comment or doc comment.
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with("//")
}
