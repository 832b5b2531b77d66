//! CLI output formatting.
//!
//! Output is **information-centric, not file-centric**: each module is shown
//! by its positional index and name first, with the import path and file
//! written as indented context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Site
//!     Domain: routerd.net
//!     Org: https://github.com/routerd
//!     Output: www/
//!
//! Modules
//! 001 kube-ipam
//!     Import: routerd.net/kube-ipam
//!     Source: https://github.com/routerd/kube-ipam
//! 002 go-firewalld
//!     Import: routerd.net/go-firewalld
//!     Source: https://github.com/routerd/go-firewalld
//! ```
//!
//! ## Generate
//!
//! ```text
//! Domain → CNAME
//! 001 kube-ipam → kube-ipam/index.html
//! 002 go-firewalld → go-firewalld/index.html
//! Home → index.html
//! Redirects → _redirects
//!
//! Generated 2 module pages in www/
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::config::SiteConfig;
use crate::generate::{CNAME_FILE, GenerateReport, INDEX_FILE, REDIRECTS_FILE};
use crate::types;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, plural)
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format the resolved configuration and the modules it publishes.
pub fn format_check_output(config: &SiteConfig) -> Vec<String> {
    let mut lines = vec![
        "Site".to_string(),
        format!("{}Domain: {}", indent(1), config.domain),
        format!("{}Org: {}", indent(1), types::org_url(config)),
        format!("{}Output: {}", indent(1), config.output_dir.display()),
        String::new(),
        "Modules".to_string(),
    ];

    if config.modules.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, module) in config.modules.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), module));
        lines.push(format!(
            "{}Import: {}",
            indent(1),
            types::import_path(config, module)
        ));
        lines.push(format!(
            "{}Source: {}",
            indent(1),
            types::repo_url(config, module)
        ));
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(config: &SiteConfig) {
    for line in format_check_output(config) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate output
// ============================================================================

/// Format the files written by a generate run.
///
/// Module pages are labelled with their list position; the three site-level
/// files get a fixed label.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    let mut module_pos = 0;

    for file in &report.files {
        let label = if file == Path::new(CNAME_FILE) {
            "Domain".to_string()
        } else if file == Path::new(INDEX_FILE) {
            "Home".to_string()
        } else if file == Path::new(REDIRECTS_FILE) {
            "Redirects".to_string()
        } else {
            module_pos += 1;
            let module = file
                .parent()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            format!("{} {}", format_index(module_pos), module)
        };
        lines.push(format!("{} → {}", label, file.display()));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} in {}",
        plural(report.module_count, "module page", "module pages"),
        report.output_dir.display()
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
