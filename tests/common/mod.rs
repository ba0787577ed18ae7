#![allow(dead_code)]

use ipe::config::ListingConfig;
use ipe::order::SortKey;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Listing of `root` sorted by name, no color, wide enough for a single row.
pub fn config_for(root: &Path) -> ListingConfig {
    ListingConfig {
        sources: vec![root.display().to_string()],
        sort: SortKey::Name,
        width: Some(80),
        ..ListingConfig::default()
    }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Overwrite `path` (relative to `root`) with `size` bytes.
pub fn write_sized(root: &Path, path: &str, size: usize) {
    fs::write(root.join(path), vec![b'x'; size]).unwrap();
}

/// The `d` directory used across scenarios: `a.txt` (10 B), `b.txt`
/// (20000 B), `sub/`.
pub fn sample_dir() -> TempDir {
    let tmp = create_fixture(&["a.txt", "b.txt", "sub/"]);
    write_sized(tmp.path(), "a.txt", 10);
    write_sized(tmp.path(), "b.txt", 20_000);
    tmp
}

/// Title the assembler prints for a root section.
pub fn title_of(root: &Path) -> String {
    format!("{}:", root.canonicalize().unwrap().display())
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_target(false)
        .with_test_writer()
        .try_init();
}
