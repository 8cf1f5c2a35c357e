//! Template rendering orchestration.
//!
//! [`Template`] ties the pieces together: it parses the template identifier
//! and the configured theme selector once, seeds a [`RenderContext`] with
//! `baseurlpath`, resolves the concrete resource file through
//! [`locate::resolve`](crate::locate::resolve), and hands the verified path
//! plus the context to a pluggable [`ResourceRenderer`].
//!
//! The renderer abstraction keeps the core independent of any resource
//! format or execution model: the default [`MiniJinjaRenderer`] treats the
//! resource as a MiniJinja template, but a deployment can substitute
//! anything that takes a path and a context.
//!
//! Resolution failures propagate to the caller unchanged — no retry, no
//! alternate template substitution — and errors raised by the render step
//! itself are the renderer's own.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use minijinja::Environment;
use serde::Serialize;

use crate::config::Settings;
use crate::error::TemplateError;
use crate::ident::{TemplateRef, ThemeRef};
use crate::locate;
use crate::modules::ModuleRegistry;
use crate::translate::{TranslateOptions, TranslationEngine, Translator};

/// Key the render context is seeded with on construction.
pub const BASE_URL_KEY: &str = "baseurlpath";

/// Data made available to a resource during rendering.
///
/// A string-keyed map of [`serde_json::Value`]s, seeded with at least a
/// `baseurlpath` entry. Callers may add fields freely before rendering; the
/// render step itself only reads.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    values: BTreeMap<String, serde_json::Value>,
}

impl RenderContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context seeded with `baseurlpath`.
    pub fn seeded(base_url_path: &str) -> Self {
        let mut ctx = Self::new();
        ctx.values
            .insert(BASE_URL_KEY.to_string(), base_url_path.into());
        ctx
    }

    /// Inserts a value under `key`, serializing it to JSON.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Serialize,
    ) -> Result<(), TemplateError> {
        self.values.insert(key.into(), serde_json::to_value(value)?);
        Ok(())
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    /// The full key → value map, for renderer backends.
    pub fn values(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.values
    }
}

/// Renders the resource at a resolved path against a context.
///
/// Implementations own the resource format; the resolution core only
/// guarantees that `path` referred to an existing regular file at the moment
/// it was resolved.
pub trait ResourceRenderer {
    /// Renders the file at `path` with `context`, producing the output text.
    fn render_path(&self, path: &Path, context: &RenderContext)
        -> Result<String, TemplateError>;
}

/// Default [`ResourceRenderer`] backed by MiniJinja.
///
/// The file content is read at render time (no caching) and rendered as a
/// template string against the context values.
///
/// # Example
///
/// ```rust
/// use stagehand::{MiniJinjaRenderer, RenderContext, ResourceRenderer};
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("hello.tpl");
/// std::fs::write(&path, "Hello from {{ baseurlpath }}").unwrap();
///
/// let renderer = MiniJinjaRenderer::new();
/// let context = RenderContext::seeded("/app/");
/// let output = renderer.render_path(&path, &context).unwrap();
/// assert_eq!(output, "Hello from /app/");
/// ```
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with a default MiniJinja environment.
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// The underlying environment, for registering filters or functions.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceRenderer for MiniJinjaRenderer {
    fn render_path(
        &self,
        path: &Path,
        context: &RenderContext,
    ) -> Result<String, TemplateError> {
        let source = std::fs::read_to_string(path)?;
        let value = minijinja::Value::from_serialize(context.values());
        Ok(self.env.render_str(&source, value)?)
    }
}

/// A template bound to its configuration, module registry, and translator.
///
/// Mirrors the lifecycle of one rendering request: construct, mutate the
/// context, render, discard.
///
/// # Example
///
/// ```rust,ignore
/// let settings = Settings::new().with_theme("art:winter");
/// let modules = DirModuleRegistry::new("/srv/app/modules");
/// let mut template = Template::new(settings, &modules, engine, "core:login.tpl");
///
/// template.context_mut().insert("username", "admin")?;
/// let output = template.render(&MiniJinjaRenderer::new())?;
/// ```
pub struct Template<'m, E> {
    template: TemplateRef,
    theme: ThemeRef,
    settings: Settings,
    modules: &'m dyn ModuleRegistry,
    translator: Translator<E>,
    context: RenderContext,
}

impl<'m, E: TranslationEngine> Template<'m, E> {
    /// Binds a raw template identifier to settings, a module registry, and a
    /// translation engine.
    ///
    /// The template identifier and the configured theme selector are parsed
    /// once, and the context is seeded with `baseurlpath` from the settings.
    pub fn new(
        settings: Settings,
        modules: &'m dyn ModuleRegistry,
        engine: E,
        template: &str,
    ) -> Self {
        let template = TemplateRef::parse(template);
        let theme = ThemeRef::parse(settings.theme());
        let context = RenderContext::seeded(settings.base_url_path());
        Self {
            template,
            theme,
            settings,
            modules,
            translator: Translator::new(engine),
            context,
        }
    }

    /// The parsed template identifier.
    pub fn template(&self) -> &TemplateRef {
        &self.template
    }

    /// The parsed theme selector.
    pub fn theme(&self) -> &ThemeRef {
        &self.theme
    }

    /// The render context, for inspection.
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// The render context, for caller mutation before rendering.
    pub fn context_mut(&mut self) -> &mut RenderContext {
        &mut self.context
    }

    /// The translator facade used with this template.
    pub fn translator(&self) -> &Translator<E> {
        &self.translator
    }

    /// Mutable access to the translator facade.
    pub fn translator_mut(&mut self) -> &mut Translator<E> {
        &mut self.translator
    }

    /// Translates `tag` through the bound engine.
    pub fn t(&self, tag: &str, options: &TranslateOptions) -> Result<String, TemplateError> {
        self.translator.translate(tag, options)
    }

    /// Registers an inline translation for this rendering session.
    pub fn include_inline_translation(&mut self, tag: &str, text: &str) {
        self.translator.register_inline_translation(tag, text);
    }

    /// Legacy helper picking the preferred translation out of a locale map.
    #[deprecated(note = "use `translator().preferred_translation` instead")]
    pub fn get_translation(
        &self,
        translations: &HashMap<String, String>,
    ) -> Result<String, TemplateError> {
        self.translator.preferred_translation(translations)
    }

    /// Resolves this template to an existing file via the fallback chain.
    ///
    /// Never cached: each call re-touches the filesystem.
    pub fn resolve_path(&self) -> Result<PathBuf, TemplateError> {
        locate::resolve(
            &self.template,
            &self.theme,
            self.settings.template_dir(),
            self.modules,
        )
    }

    /// Resolves the template and renders it with the given renderer.
    ///
    /// A resolution failure propagates unchanged; renderer failures are the
    /// renderer's own.
    pub fn render(&self, renderer: &dyn ResourceRenderer) -> Result<String, TemplateError> {
        let path = self.resolve_path()?;
        renderer.render_path(&path, &self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_seeded_with_base_url() {
        let ctx = RenderContext::seeded("/app/");
        assert_eq!(ctx.get(BASE_URL_KEY).unwrap(), "/app/");
    }

    #[test]
    fn test_context_insert_serializes() {
        #[derive(Serialize)]
        struct User {
            name: String,
        }

        let mut ctx = RenderContext::new();
        ctx.insert("user", User { name: "admin".into() }).unwrap();
        assert_eq!(ctx.get("user").unwrap()["name"], "admin");
    }

    #[test]
    fn test_minijinja_renderer_reads_at_render_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.tpl");
        std::fs::write(&path, "v1 {{ baseurlpath }}").unwrap();

        let renderer = MiniJinjaRenderer::new();
        let ctx = RenderContext::seeded("/");
        assert_eq!(renderer.render_path(&path, &ctx).unwrap(), "v1 /");

        // No caching: a rewritten file renders its new content.
        std::fs::write(&path, "v2 {{ baseurlpath }}").unwrap();
        assert_eq!(renderer.render_path(&path, &ctx).unwrap(), "v2 /");
    }

    #[test]
    fn test_minijinja_renderer_missing_file_is_io_error() {
        let renderer = MiniJinjaRenderer::new();
        let ctx = RenderContext::new();
        let err = renderer
            .render_path(Path::new("/nonexistent/x.tpl"), &ctx)
            .unwrap_err();
        assert!(matches!(err, TemplateError::Io(_)));
    }

    #[test]
    fn test_minijinja_renderer_syntax_error_is_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.tpl");
        std::fs::write(&path, "{{ unclosed").unwrap();

        let renderer = MiniJinjaRenderer::new();
        let err = renderer
            .render_path(&path, &RenderContext::new())
            .unwrap_err();
        assert!(matches!(err, TemplateError::Render(_)));
    }
}
