//! Module name rules.
//!
//! A module name is used twice by the generator: as a directory name under the
//! output root and as a path segment in every URL written into the pages. Both
//! uses need a single, plain segment:
//!
//! - `"kube-ipam"` → ok
//! - `"go-firewalld"` → ok
//! - `""` → rejected (empty)
//! - `".."` → rejected (would escape the output directory)
//! - `"a/b"` → rejected (nested path)
//! - `"kube ipam"` → rejected (whitespace breaks the `go-import` triple)
//!
//! Duplicates are not a naming concern. The generator reports them when the
//! second directory cannot be created.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum NameError {
    #[error("module name is empty")]
    Empty,
    #[error("module name '{0}' is a relative path component")]
    RelativeComponent(String),
    #[error("module name '{name}' contains forbidden character {ch:?}")]
    ForbiddenChar { name: String, ch: char },
}

/// Check that `name` can be used as a single directory and URL segment.
pub fn validate_module_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name == "." || name == ".." {
        return Err(NameError::RelativeComponent(name.to_string()));
    }
    if let Some(ch) = name
        .chars()
        .find(|c| matches!(c, '/' | '\\') || c.is_whitespace() || c.is_control())
    {
        return Err(NameError::ForbiddenChar {
            name: name.to_string(),
            ch,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_pass() {
        assert_eq!(validate_module_name("kube-ipam"), Ok(()));
        assert_eq!(validate_module_name("go-firewalld"), Ok(()));
        assert_eq!(validate_module_name("v2.api_client"), Ok(()));
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(validate_module_name(""), Err(NameError::Empty));
    }

    #[test]
    fn dot_components_rejected() {
        assert!(matches!(
            validate_module_name(".."),
            Err(NameError::RelativeComponent(_))
        ));
        assert!(matches!(
            validate_module_name("."),
            Err(NameError::RelativeComponent(_))
        ));
    }

    #[test]
    fn leading_dot_is_fine() {
        // Only the bare `.`/`..` components are special.
        assert_eq!(validate_module_name(".hidden"), Ok(()));
    }

    #[test]
    fn separators_rejected() {
        assert_eq!(
            validate_module_name("kube/ipam"),
            Err(NameError::ForbiddenChar {
                name: "kube/ipam".to_string(),
                ch: '/'
            })
        );
        assert!(matches!(
            validate_module_name("kube\\ipam"),
            Err(NameError::ForbiddenChar { ch: '\\', .. })
        ));
    }

    #[test]
    fn whitespace_and_control_rejected() {
        assert!(matches!(
            validate_module_name("kube ipam"),
            Err(NameError::ForbiddenChar { ch: ' ', .. })
        ));
        assert!(matches!(
            validate_module_name("kube\nipam"),
            Err(NameError::ForbiddenChar { ch: '\n', .. })
        ));
    }

    #[test]
    fn error_message_names_the_module() {
        let err = validate_module_name("a/b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "module name 'a/b' contains forbidden character '/'"
        );
    }
}
