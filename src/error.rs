//! Error types for template resolution and rendering.
//!
//! This module provides [`TemplateError`], the single error surface for the
//! crate. Collaborator failures (unknown module, translation engine errors,
//! renderer errors) travel through dedicated variants that the collaborator
//! constructs itself; the resolution core never rewraps or rewords them.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for template resolution and rendering operations.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// No candidate path existed after the full fallback chain.
    ///
    /// Carries both attempted paths for diagnostics: `primary` is the
    /// theme/module/base candidate tried first, `fallback` is the base
    /// location tried second.
    #[error(
        "could not find template file [{template}] at [{}] (first tried [{}])",
        fallback.display(),
        primary.display()
    )]
    NotFound {
        /// The raw template identifier as given by the caller.
        template: String,
        /// The first candidate path checked.
        primary: PathBuf,
        /// The fallback candidate path checked.
        fallback: PathBuf,
    },

    /// The module registry does not know the requested module.
    #[error("unknown module: {0}")]
    UnknownModule(String),

    /// Failure raised by the external translation engine.
    #[error("translation error: {0}")]
    Translation(String),

    /// Failure raised by the resource renderer.
    #[error("render error: {0}")]
    Render(String),

    /// Data serialization error while building a render context.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error, e.g. reading a resolved resource from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for TemplateError {
    fn from(err: serde_json::Error) -> Self {
        TemplateError::Serialization(err.to_string())
    }
}

// Conversion from minijinja::Error for the default renderer backend.
impl From<minijinja::Error> for TemplateError {
    fn from(err: minijinja::Error) -> Self {
        TemplateError::Render(err.to_string())
    }
}
