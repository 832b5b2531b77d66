//! Site configuration module.
//!
//! Everything the generator needs is carried by a single [`SiteConfig`]: the
//! public domain, the GitHub organization hosting the sources, the output
//! directory and the ordered module list. The config is built once in `main`
//! and passed by reference into [`crate::generate::generate`].
//!
//! ## Config File
//!
//! Stock defaults describe the routerd.net site and need no file at all. A
//! `vanity.toml` in the working directory overrides any subset of them:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! domain = "routerd.net"     # Public domain serving the pages
//! org = "routerd"            # GitHub organization owning the repositories
//! output_dir = "www/"        # Directory that is wiped and regenerated
//! branch = "main"            # Branch used in go-source browse links
//! modules = [                # One page per module, in this order
//!     "kube-ipam",
//!     "go-firewalld",
//! ]
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::naming;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILENAME: &str = "vanity.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration for the vanity import pages.
///
/// All fields have defaults. A config file need only specify the values it
/// wants to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Public domain, e.g. `routerd.net`. Written to `CNAME` and used as the
    /// import path prefix.
    pub domain: String,
    /// GitHub organization that owns every module repository.
    pub org: String,
    /// Output directory. Deleted and recreated on every run.
    pub output_dir: PathBuf,
    /// Branch referenced by the `go-source` tree/blob links.
    pub branch: String,
    /// Module names, one page each, rendered in list order.
    pub modules: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            domain: "routerd.net".to_string(),
            org: "routerd".to_string(),
            output_dir: PathBuf::from("www/"),
            branch: "main".to_string(),
            modules: vec!["kube-ipam".to_string(), "go-firewalld".to_string()],
        }
    }
}

impl SiteConfig {
    /// Validate that values can be turned into paths and URLs.
    ///
    /// Duplicate module names are deliberately not checked here; the
    /// generator fails on them when the second directory already exists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.domain.is_empty() {
            return Err(ConfigError::Validation("domain must not be empty".into()));
        }
        if self.domain.contains('/') || self.domain.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "domain '{}' must be a bare host name",
                self.domain
            )));
        }
        if self.org.is_empty() {
            return Err(ConfigError::Validation("org must not be empty".into()));
        }
        if self.org.contains('/') {
            return Err(ConfigError::Validation(format!(
                "org '{}' must not contain '/'",
                self.org
            )));
        }
        if self.branch.is_empty() {
            return Err(ConfigError::Validation("branch must not be empty".into()));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output_dir must not be empty".into(),
            ));
        }
        // The output dir is removed recursively before every run.
        if normal_depth(&self.output_dir) == 0 {
            return Err(ConfigError::Validation(format!(
                "output_dir '{}' must name a directory below the current or root directory",
                self.output_dir.display()
            )));
        }
        for module in &self.modules {
            naming::validate_module_name(module)
                .map_err(|e| ConfigError::Validation(e.to_string()))?;
        }
        Ok(())
    }
}

/// Number of named components left in `path` once `..` cancels the name
/// before it. Leading `..`, `.` and the root do not count.
fn normal_depth(path: &Path) -> usize {
    path.components().fold(0, |depth, c| match c {
        Component::Normal(_) => depth + 1,
        Component::ParentDir => depth.saturating_sub(1),
        _ => depth,
    })
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so an overlay
///   `modules` list replaces the stock list rather than extending it.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the file at `path`, falling back to stock defaults when
/// the file is absent.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Load config from a file the user named explicitly.
///
/// Unlike [`load_config`], a missing file is an error.
pub fn load_required_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let overlay: toml::Value = toml::from_str(&content)?;
    resolve_config(stock_defaults_value(), Some(overlay))
}

/// Resolve the config for a CLI run.
///
/// `config_path` is the `--config` flag: when given, the file must exist;
/// when absent, an optional `vanity.toml` in the working directory is used.
/// `output_override` (the `--output` flag) replaces `output_dir` and the
/// result is validated again.
pub fn load_site_config(
    config_path: Option<&Path>,
    output_override: Option<PathBuf>,
) -> Result<SiteConfig, ConfigError> {
    let mut config = match config_path {
        Some(path) => load_required_config(path)?,
        None => load_config(Path::new(CONFIG_FILENAME))?,
    };
    if let Some(output_dir) = output_override {
        config.output_dir = output_dir;
        config.validate()?;
    }
    Ok(config)
}

/// Returns a fully-commented stock `vanity.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# vanity-pages configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

# Public domain serving the pages. Written to CNAME and used as the
# import path prefix: <domain>/<module>.
domain = "routerd.net"

# GitHub organization owning the module repositories:
# https://github.com/<org>/<module>
org = "routerd"

# Output directory. It is deleted and recreated on every run.
output_dir = "www/"

# Branch used by the go-source tree and blob links.
branch = "main"

# Modules to publish, one page each, in this order.
# Add a new module here and re-run the generator.
modules = [
    "kube-ipam",
    "go-firewalld",
]
"##
}
