//! Identifier parsing for templates and themes.
//!
//! Both template identifiers and theme selectors use the same
//! `"module:name"` syntax: an optional module qualifier, a colon, and the
//! name (which may itself contain path separators). Parsing splits on the
//! first colon only and never fails — any string, including the empty
//! string, is accepted. An empty name is a caller error that surfaces later
//! as [`TemplateError::NotFound`](crate::TemplateError::NotFound).

use std::fmt;

/// Sentinel module name meaning "default / no module".
///
/// A template identifier written `"default:login"` behaves identically to
/// the bare `"login"`: both resolve against the base template directory.
pub const DEFAULT_MODULE: &str = "default";

/// A parsed template identifier: optional module qualifier plus a name.
///
/// Immutable once parsed.
///
/// # Example
///
/// ```rust
/// use stagehand::TemplateRef;
///
/// let qualified = TemplateRef::parse("core:loginuserpass.tpl");
/// assert_eq!(qualified.module(), Some("core"));
/// assert_eq!(qualified.name(), "loginuserpass.tpl");
///
/// let bare = TemplateRef::parse("frontpage.tpl");
/// assert_eq!(bare.module(), None);
/// assert_eq!(bare.module_or_default(), "default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRef {
    module: Option<String>,
    name: String,
}

impl TemplateRef {
    /// Parses a raw identifier, splitting on the first colon only.
    pub fn parse(raw: &str) -> Self {
        let (module, name) = split_qualified(raw);
        Self { module, name }
    }

    /// The module qualifier, if one was given.
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    /// The module qualifier, or [`DEFAULT_MODULE`] when unqualified.
    pub fn module_or_default(&self) -> &str {
        self.module.as_deref().unwrap_or(DEFAULT_MODULE)
    }

    /// The bare template name (may contain path separators).
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.module {
            Some(module) => write!(f, "{}:{}", module, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// A parsed theme selector: optional theme module plus a theme name.
///
/// Same shape and parse rules as [`TemplateRef`], but the absent-module
/// semantics differ: no theme module means "use the base template
/// directory, no theme override layer".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRef {
    module: Option<String>,
    name: String,
}

impl ThemeRef {
    /// Parses a theme selector, splitting on the first colon only.
    pub fn parse(raw: &str) -> Self {
        let (module, name) = split_qualified(raw);
        Self { module, name }
    }

    /// The theme module, if one was configured.
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    /// The theme name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ThemeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.module {
            Some(module) => write!(f, "{}:{}", module, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Splits on the first colon. An empty module segment (leading colon) is
/// treated as unset, keeping the present-module-is-non-empty invariant.
fn split_qualified(raw: &str) -> (Option<String>, String) {
    match raw.split_once(':') {
        Some(("", name)) => (None, name.to_string()),
        Some((module, name)) => (Some(module.to_string()), name.to_string()),
        None => (None, raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_qualified() {
        let t = TemplateRef::parse("mod:path/to/x");
        assert_eq!(t.module(), Some("mod"));
        assert_eq!(t.name(), "path/to/x");
    }

    #[test]
    fn test_parse_bare() {
        let t = TemplateRef::parse("path/to/x");
        assert_eq!(t.module(), None);
        assert_eq!(t.name(), "path/to/x");
        assert_eq!(t.module_or_default(), DEFAULT_MODULE);
    }

    #[test]
    fn test_parse_empty() {
        let t = TemplateRef::parse("");
        assert_eq!(t.module(), None);
        assert_eq!(t.name(), "");
    }

    #[test]
    fn test_parse_splits_first_colon_only() {
        let t = TemplateRef::parse("mod:a:b");
        assert_eq!(t.module(), Some("mod"));
        assert_eq!(t.name(), "a:b");
    }

    #[test]
    fn test_parse_explicit_default_module() {
        let t = TemplateRef::parse("default:login.tpl");
        assert_eq!(t.module(), Some("default"));
        assert_eq!(t.module_or_default(), DEFAULT_MODULE);
    }

    #[test]
    fn test_parse_leading_colon_means_no_module() {
        let t = TemplateRef::parse(":login.tpl");
        assert_eq!(t.module(), None);
        assert_eq!(t.name(), "login.tpl");
    }

    #[test]
    fn test_theme_selector_parse() {
        let theme = ThemeRef::parse("fancytheme:winter");
        assert_eq!(theme.module(), Some("fancytheme"));
        assert_eq!(theme.name(), "winter");

        let plain = ThemeRef::parse("default");
        assert_eq!(plain.module(), None);
        assert_eq!(plain.name(), "default");
    }

    #[test]
    fn test_display_round_trip() {
        assert_eq!(TemplateRef::parse("mod:x").to_string(), "mod:x");
        assert_eq!(TemplateRef::parse("x").to_string(), "x");
        assert_eq!(ThemeRef::parse("art:winter").to_string(), "art:winter");
    }
}
