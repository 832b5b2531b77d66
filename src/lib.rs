//! # vanity-pages
//!
//! Generates the static site behind Go vanity import paths such as
//! `routerd.net/kube-ipam`. For every hosted module it writes an HTML page
//! carrying `go-import` and `go-source` meta tags, so `go get` resolves the
//! custom domain to the GitHub repository, while browsers are refreshed to
//! the module's documentation.
//!
//! # Pipeline
//!
//! A single linear pass, fail-fast on the first filesystem error:
//!
//! ```text
//! 1. Reset     output dir removed and recreated
//! 2. CNAME     custom domain marker
//! 3. Modules   <module>/index.html for each module, in list order
//! 4. Index     root page refreshing to the GitHub organization
//! 5. Redirects _redirects rules so sub-package paths get the module page
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `SiteConfig`, stock defaults, optional `vanity.toml` overlay and validation |
//! | [`generate`] | Output reset and rendering of every page using Maud |
//! | [`types`] | URL and meta tag values substituted into the pages |
//! | [`naming`] | Module name rules (single path/URL segment) |
//! | [`output`] | CLI output formatting for `check` and `build` |
//!
//! # Design Decisions
//!
//! ## Explicit Configuration
//!
//! Domain, organization, output directory and module list live in one
//! [`config::SiteConfig`] value passed to [`generate::generate`]. Tests inject
//! their own config pointing at a temp dir.
//!
//! ## Disposable Output
//!
//! The output directory is always deleted and rebuilt, so two runs with the
//! same config produce byte-identical trees and nothing from an older module
//! list survives.

pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
