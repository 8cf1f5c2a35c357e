//! Template location with layered theme fallback.
//!
//! This module implements the core path-construction and fallback search:
//! given a template identifier and the configured theme, produce an ordered
//! sequence of candidate paths and return the first that exists on disk.
//!
//! # Candidate order
//!
//! The primary candidate depends on what is qualified:
//!
//! 1. Theme module configured →
//!    `<moduleDir(theme.module)>/themes/<theme.name>/<template.module or "default">/<template.name>`.
//!    A theme module can override any other module's templates, including
//!    the default module's, under its own `themes/` directory.
//! 2. Else, template module set (and not `"default"`) →
//!    `<moduleDir(template.module)>/templates/<template.name>`
//! 3. Else → `<baseTemplateDir><template.name>`
//!
//! If the primary candidate is missing the locator falls back once:
//!
//! 4. Template module set → `<moduleDir(template.module)>/templates/<template.name>`
//! 5. Else → `<baseTemplateDir>/<template.name>`
//!
//! This layers three levels of customization — per-theme override,
//! per-module default, global default — using only filesystem presence as
//! the dispatch mechanism.
//!
//! Candidates are built by string concatenation, not [`Path::join`]. The
//! step-5 fallback therefore carries an extra separator relative to step 3
//! whenever the configured base directory already ends in one (the default
//! `"templates/"` does). That doubled separator is a long-standing
//! compatibility quirk of the path layout; downstream deployments may depend
//! on the exact candidate text, so it is preserved rather than collapsed.
//!
//! Paths are never cached: every call re-touches the filesystem, and only a
//! path verified to be an existing regular file is returned.

use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::error::TemplateError;
use crate::ident::{TemplateRef, ThemeRef, DEFAULT_MODULE};
use crate::modules::ModuleRegistry;

/// Resolves a template identifier to an existing file on disk.
///
/// `base_template_dir` is the configured base template directory,
/// conventionally carrying its trailing separator (see
/// [`Settings::template_dir`](crate::Settings::template_dir)).
///
/// # Errors
///
/// Returns [`TemplateError::NotFound`] (carrying both attempted paths) when
/// no candidate exists, or the module registry's own error for an unknown
/// module, unmodified.
pub fn resolve(
    template: &TemplateRef,
    theme: &ThemeRef,
    base_template_dir: &str,
    modules: &dyn ModuleRegistry,
) -> Result<PathBuf, TemplateError> {
    let template_module = template.module_or_default();

    // First check the current theme.
    let primary = if let Some(theme_module) = theme.module() {
        // .../<themeModule>/themes/<themeName>/<templateModule>/<templateName>
        let dir = modules.module_dir(theme_module)?;
        concat_path(&dir, &["/themes/", theme.name(), "/", template_module, "/", template.name()])
    } else if template_module != DEFAULT_MODULE {
        // .../<templateModule>/templates/<templateName>
        let dir = modules.module_dir(template_module)?;
        concat_path(&dir, &["/templates/", template.name()])
    } else {
        // <baseTemplateDir><templateName>
        PathBuf::from(format!("{}{}", base_template_dir, template.name()))
    };

    if primary.is_file() {
        return Ok(primary);
    }

    debug!(
        template = %template,
        candidate = %primary.display(),
        "template not found in current theme, trying the base template"
    );

    // Try the default theme.
    let fallback = if template_module != DEFAULT_MODULE {
        let dir = modules.module_dir(template_module)?;
        concat_path(&dir, &["/templates/", template.name()])
    } else {
        // Extra separator relative to the primary base candidate; preserved
        // verbatim (see module docs).
        PathBuf::from(format!("{}/{}", base_template_dir, template.name()))
    };

    if fallback.is_file() {
        return Ok(fallback);
    }

    error!(
        template = %template,
        primary = %primary.display(),
        fallback = %fallback.display(),
        "could not find template file"
    );

    Err(TemplateError::NotFound {
        template: template.to_string(),
        primary,
        fallback,
    })
}

/// Appends raw segments to a directory by string concatenation, keeping the
/// candidate text byte-for-byte identical to the documented layout.
fn concat_path(dir: &Path, segments: &[&str]) -> PathBuf {
    let mut s = dir.to_string_lossy().into_owned();
    for segment in segments {
        s.push_str(segment);
    }
    PathBuf::from(s)
}
