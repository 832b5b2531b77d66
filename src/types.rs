//! Values substituted into the generated pages.
//!
//! Every URL the site publishes is built here, so the page renderers in
//! [`crate::generate`] only place strings into markup.

use crate::config::SiteConfig;

/// Meta tag values for one module page.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportMeta {
    /// `go-import` content: `<domain>/<module> git <repo-url>`
    pub go_import: String,
    /// `go-source` content. The `{dir}`, `{file}` and `{line}` placeholders are
    /// expanded by the Go documentation tooling, never by us.
    pub go_source: String,
    /// Where browsers are sent: the module's documentation page.
    pub redirect: String,
}

impl ImportMeta {
    pub fn for_module(config: &SiteConfig, module: &str) -> Self {
        let import_path = import_path(config, module);
        let repo = repo_url(config, module);
        let branch = &config.branch;
        Self {
            go_import: format!("{import_path} git {repo}"),
            go_source: format!(
                "{import_path} _ {repo}/tree/{branch}{{/dir}} {repo}/blob/{branch}{{/dir}}/{{file}}#L{{line}}"
            ),
            redirect: format!("https://godoc.org/{import_path}"),
        }
    }
}

/// Vanity import path, e.g. `routerd.net/kube-ipam`.
pub fn import_path(config: &SiteConfig, module: &str) -> String {
    format!("{}/{}", config.domain, module)
}

/// Source repository of a module on GitHub.
pub fn repo_url(config: &SiteConfig, module: &str) -> String {
    format!("https://github.com/{}/{}", config.org, module)
}

/// Landing page for the site root.
pub fn org_url(config: &SiteConfig) -> String {
    format!("https://github.com/{}", config.org)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_import_points_at_github_repo() {
        let meta = ImportMeta::for_module(&SiteConfig::default(), "kube-ipam");
        assert_eq!(
            meta.go_import,
            "routerd.net/kube-ipam git https://github.com/routerd/kube-ipam"
        );
    }

    #[test]
    fn go_source_keeps_placeholders_literal() {
        let meta = ImportMeta::for_module(&SiteConfig::default(), "go-firewalld");
        assert_eq!(
            meta.go_source,
            "routerd.net/go-firewalld _ \
             https://github.com/routerd/go-firewalld/tree/main{/dir} \
             https://github.com/routerd/go-firewalld/blob/main{/dir}/{file}#L{line}"
        );
    }

    #[test]
    fn go_source_uses_configured_branch() {
        let config = SiteConfig {
            branch: "master".to_string(),
            ..SiteConfig::default()
        };
        let meta = ImportMeta::for_module(&config, "kube-ipam");
        assert!(meta.go_source.contains("/tree/master{/dir}"));
        assert!(meta.go_source.contains("/blob/master{/dir}/{file}#L{line}"));
    }

    #[test]
    fn redirect_goes_to_godoc() {
        let meta = ImportMeta::for_module(&SiteConfig::default(), "kube-ipam");
        assert_eq!(meta.redirect, "https://godoc.org/routerd.net/kube-ipam");
    }

    #[test]
    fn org_url_uses_org() {
        let config = SiteConfig {
            org: "acme".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(org_url(&config), "https://github.com/acme");
    }
}
