//! Explicit configuration for template resolution.
//!
//! The resolution core takes its configuration as a plain [`Settings`]
//! struct passed into constructors rather than consulting any process-wide
//! configuration store. The three values mirror what deployments configure:
//! the public base URL path, the base template directory, and the theme
//! selector.

/// Configuration for template resolution and rendering.
///
/// # Example
///
/// ```rust
/// use stagehand::Settings;
///
/// let settings = Settings::new()
///     .with_template_dir("/srv/app/templates/")
///     .with_theme("fancymodule:winter");
///
/// assert_eq!(settings.theme(), "fancymodule:winter");
/// assert_eq!(settings.base_url_path(), "/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    base_url_path: String,
    template_dir: String,
    theme: String,
}

impl Settings {
    /// Creates settings with the conventional defaults: base URL path `"/"`,
    /// template directory `"templates/"`, theme selector `"default"`.
    pub fn new() -> Self {
        Self {
            base_url_path: "/".to_string(),
            template_dir: "templates/".to_string(),
            theme: "default".to_string(),
        }
    }

    /// Sets the base URL path seeded into every render context.
    pub fn with_base_url_path(mut self, base_url_path: impl Into<String>) -> Self {
        self.base_url_path = base_url_path.into();
        self
    }

    /// Sets the base template directory.
    ///
    /// Kept as a string because candidate paths are built by concatenation:
    /// the trailing separator is significant and conventionally present
    /// (as in the default `"templates/"`).
    pub fn with_template_dir(mut self, template_dir: impl Into<String>) -> Self {
        self.template_dir = template_dir.into();
        self
    }

    /// Sets the theme selector (`"<module>:<name>"` or `"<name>"`).
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// The base URL path for rendered resources.
    pub fn base_url_path(&self) -> &str {
        &self.base_url_path
    }

    /// The base template directory, trailing separator included.
    pub fn template_dir(&self) -> &str {
        &self.template_dir
    }

    /// The configured theme selector string.
    pub fn theme(&self) -> &str {
        &self.theme
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
