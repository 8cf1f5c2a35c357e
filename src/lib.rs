//! # Stagehand - Themed Template Resolution
//!
//! `stagehand` resolves a logical template identifier (optionally qualified
//! by a module and a theme) into a concrete resource file, applying a
//! deterministic, layered fallback search when the preferred theme does not
//! provide the resource, and renders that resource against a data context
//! enriched with translated strings.
//!
//! ## Core Concepts
//!
//! - [`TemplateRef`] / [`ThemeRef`]: parsed `"module:name"` identifiers
//! - [`Settings`]: explicit configuration (base URL path, template
//!   directory, theme selector) passed into constructors
//! - [`ModuleRegistry`]: module name → module root directory
//! - [`resolve`]: the fallback state machine producing a verified path
//! - [`Translator`] / [`TranslationEngine`]: pass-through surface over the
//!   external translation engine
//! - [`Template`] + [`ResourceRenderer`]: orchestration and the pluggable
//!   render step ([`MiniJinjaRenderer`] by default)
//!
//! ## Fallback Chain
//!
//! A deployment layers three levels of customization using only filesystem
//! presence as the dispatch mechanism:
//!
//! 1. Per-theme override: `<themeModuleDir>/themes/<theme>/<module>/<name>`
//! 2. Per-module default: `<moduleDir>/templates/<name>`
//! 3. Global default: `<baseTemplateDir><name>`
//!
//! See [`locate`] for the exact candidate order and its preserved
//! path-construction quirks.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stagehand::{
//!     DirModuleRegistry, MiniJinjaRenderer, Settings, Template,
//! };
//!
//! let settings = Settings::new()
//!     .with_template_dir("/srv/app/templates/")
//!     .with_theme("fancymodule:winter");
//! let modules = DirModuleRegistry::new("/srv/app/modules");
//!
//! // `engine` implements stagehand::TranslationEngine.
//! let mut template = Template::new(settings, &modules, engine, "core:login.tpl");
//! template.context_mut().insert("username", "admin")?;
//!
//! let output = template.render(&MiniJinjaRenderer::new())?;
//! ```

pub mod config;
mod error;
pub mod ident;
pub mod locate;
pub mod modules;
pub mod render;
pub mod translate;

pub use config::Settings;
pub use error::TemplateError;
pub use ident::{TemplateRef, ThemeRef, DEFAULT_MODULE};
pub use locate::resolve;
pub use modules::{DirModuleRegistry, ModuleRegistry};
pub use render::{
    MiniJinjaRenderer, RenderContext, ResourceRenderer, Template, BASE_URL_KEY,
};
pub use translate::{
    merge_dictionaries, Dictionary, TranslateOptions, TranslationEngine, Translator,
};
#[allow(deprecated)]
pub use translate::lang_merge;
