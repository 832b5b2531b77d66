//! Site generation.
//!
//! Renders the whole vanity import site from a [`SiteConfig`]. The output
//! directory is disposable: it is deleted and rebuilt on every run, never
//! patched in place.
//!
//! ## Output Structure
//!
//! ```text
//! www/
//! ├── CNAME                  # Custom domain binding for the host
//! ├── index.html             # Refresh to the GitHub organization
//! ├── _redirects             # go-get=1 rewrite rules, one per module
//! ├── kube-ipam/
//! │   └── index.html         # go-import + go-source + refresh to godoc
//! └── go-firewalld/
//!     └── index.html
//! ```
//!
//! ## Why `_redirects`
//!
//! `go get routerd.net/kube-ipam/sub/pkg` fetches
//! `https://routerd.net/kube-ipam/sub/pkg?go-get=1`, a path that has no file
//! behind it. The redirect rules serve the module page for any path under
//! `/<module>/` when `go-get=1` is present, with status 200.
//!
//! ## HTML Generation
//!
//! Pages are built with [maud](https://maud.lambda.xyz/). The `go-source`
//! placeholders (`{dir}`, `{file}`, `{line}`) are ordinary string content to
//! maud and reach the page untouched.

use crate::config::SiteConfig;
use crate::types::{self, ImportMeta};
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CNAME_FILE: &str = "CNAME";
pub const INDEX_FILE: &str = "index.html";
pub const REDIRECTS_FILE: &str = "_redirects";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("could not remove output directory {}: {source}", .path.display())]
    RemoveOutputDir { path: PathBuf, source: io::Error },
    #[error("could not create output directory {}: {source}", .path.display())]
    CreateOutputDir { path: PathBuf, source: io::Error },
    #[error("could not create directory for module '{module}' at {}: {source}", .path.display())]
    CreateModuleDir {
        module: String,
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not write {}: {source}", .path.display())]
    WriteFile { path: PathBuf, source: io::Error },
}

/// What a successful run wrote, relative to the output directory, in write
/// order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub module_count: usize,
}

/// Files a run over `config` writes, relative to the output directory, in the
/// order [`generate`] writes them.
pub fn planned_files(config: &SiteConfig) -> Vec<PathBuf> {
    let mut files = vec![PathBuf::from(CNAME_FILE)];
    files.extend(
        config
            .modules
            .iter()
            .map(|module| Path::new(module).join(INDEX_FILE)),
    );
    files.push(PathBuf::from(INDEX_FILE));
    files.push(PathBuf::from(REDIRECTS_FILE));
    files
}

/// Wipe the output directory and render every page into it.
///
/// Stops at the first filesystem error. Whatever was written before the
/// failure stays on disk; the next run removes it.
pub fn generate(config: &SiteConfig) -> Result<GenerateReport, GenerateError> {
    let output_dir = config.output_dir.as_path();
    reset_output_dir(output_dir)?;

    let mut report = GenerateReport {
        output_dir: output_dir.to_path_buf(),
        ..GenerateReport::default()
    };

    write_file(
        output_dir,
        Path::new(CNAME_FILE),
        &render_cname(config),
        &mut report,
    )?;

    for module in &config.modules {
        let module_dir = output_dir.join(module);
        // Non-recursive: a repeated module name fails here.
        fs::create_dir(&module_dir).map_err(|source| GenerateError::CreateModuleDir {
            module: module.clone(),
            path: module_dir.clone(),
            source,
        })?;

        let meta = ImportMeta::for_module(config, module);
        let page = render_module_page(&meta).into_string();
        write_file(
            output_dir,
            &Path::new(module).join(INDEX_FILE),
            &page,
            &mut report,
        )?;
        report.module_count += 1;
    }

    let index = render_index(&types::org_url(config)).into_string();
    write_file(output_dir, Path::new(INDEX_FILE), &index, &mut report)?;

    write_file(
        output_dir,
        Path::new(REDIRECTS_FILE),
        &render_redirects(&config.modules),
        &mut report,
    )?;

    Ok(report)
}

/// Delete `dir` recursively if present, then create it again.
fn reset_output_dir(dir: &Path) -> Result<(), GenerateError> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(GenerateError::RemoveOutputDir {
                path: dir.to_path_buf(),
                source,
            });
        }
    }
    fs::create_dir_all(dir).map_err(|source| GenerateError::CreateOutputDir {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_file(
    output_dir: &Path,
    relative: &Path,
    contents: &str,
    report: &mut GenerateReport,
) -> Result<(), GenerateError> {
    let path = output_dir.join(relative);
    fs::write(&path, contents).map_err(|source| GenerateError::WriteFile {
        path: path.clone(),
        source,
    })?;
    report.files.push(relative.to_path_buf());
    Ok(())
}

// ============================================================================
// Renderers
// ============================================================================

/// `CNAME` body: the domain on a single line.
pub fn render_cname(config: &SiteConfig) -> String {
    format!("{}\n", config.domain)
}

/// Renders the page for one module.
///
/// Tooling reads the meta tags without running scripts; browsers follow the
/// refresh to the documentation.
pub fn render_module_page(meta: &ImportMeta) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta http-equiv="content-type" content="text/html; charset=utf-8";
                meta name="go-import" content=(meta.go_import);
                meta name="go-source" content=(meta.go_source);
                meta http-equiv="refresh" content={ "0; " (meta.redirect) };
            }
            body {}
        }
    }
}

/// Renders the site root page. The root is not an importable module, so it
/// carries no go-import metadata.
pub fn render_index(redirect: &str) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta http-equiv="content-type" content="text/html; charset=utf-8";
                meta http-equiv="refresh" content={ "0; " (redirect) };
            }
            body {}
        }
    }
}

/// Renders the `_redirects` rules: a leading blank line, then one
/// newline-terminated rule per module in list order.
pub fn render_redirects(modules: &[String]) -> String {
    let mut out = String::from("\n");
    for module in modules {
        out.push_str(&format!("/{module}/* go-get=1 /{module}/index.html 200\n"));
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
