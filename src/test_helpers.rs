//! Shared test utilities for the vanity-pages test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let (_tmp, config) = test_config(&["kube-ipam"]);
//! generate(&config).unwrap();
//! assert_eq!(read_output(&config, "CNAME"), "routerd.net\n");
//! ```

use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::config::SiteConfig;

// =========================================================================
// Fixture setup
// =========================================================================

/// Stock config with the given modules and an output directory inside a
/// fresh temp dir. Keep the `TempDir` alive for the duration of the test.
pub fn test_config(modules: &[&str]) -> (TempDir, SiteConfig) {
    let tmp = TempDir::new().unwrap();
    let config = SiteConfig {
        output_dir: tmp.path().join("www"),
        modules: modules.iter().map(|m| m.to_string()).collect(),
        ..SiteConfig::default()
    };
    (tmp, config)
}

// =========================================================================
// Output inspection
// =========================================================================

/// Read a generated file. Panics with the path on failure.
pub fn read_output(config: &SiteConfig, relative: &str) -> String {
    let path = config.output_dir.join(relative);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("could not read {}: {e}", path.display()))
}

/// Sorted relative paths under `root`. Directories end with `/`.
pub fn list_tree(root: &Path) -> Vec<String> {
    let mut entries: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.unwrap())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_string_lossy().into_owned();
            if e.file_type().is_dir() {
                format!("{rel}/")
            } else {
                rel
            }
        })
        .collect();
    entries.sort();
    entries
}
