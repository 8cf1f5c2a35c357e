//! Translation facade.
//!
//! The resolution core does not implement locale selection or
//! pluralization; that lives in an external translation engine consumed
//! through the narrow [`TranslationEngine`] trait. [`Translator`] is the
//! thin, stateless pass-through surface templates use. The only logic owned
//! by this layer is [`merge_dictionaries`], the legacy defaults-shaped
//! dictionary merge.

use std::collections::HashMap;

use crate::error::TemplateError;

/// A translation dictionary: translation key → locale → string.
///
/// Used only by the legacy merge operation.
pub type Dictionary = HashMap<String, HashMap<String, String>>;

/// Options for a single string lookup.
///
/// `fallback_to_default` controls whether a default-locale string is
/// substituted when no translation exists for the active locale; the exact
/// fallback semantics belong to the engine, not this crate.
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Placeholder replacements applied by the engine.
    pub replacements: HashMap<String, String>,
    /// Substitute a default-locale string on a missed lookup (default true).
    pub fallback_to_default: bool,
    /// Replacements in the legacy pre-lookup format.
    pub legacy_replacements: HashMap<String, String>,
    /// Strip markup tags from the result (default false).
    pub strip_tags: bool,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            replacements: HashMap::new(),
            fallback_to_default: true,
            legacy_replacements: HashMap::new(),
            strip_tags: false,
        }
    }
}

/// The external translation engine's narrow surface.
///
/// Engine failures are returned as [`TemplateError::Translation`] (or any
/// other variant the engine chooses) and pass through the facade unmodified.
pub trait TranslationEngine {
    /// Returns the best-available localized string for `tag`.
    fn translate(&self, tag: &str, options: &TranslateOptions) -> Result<String, TemplateError>;

    /// Makes `text` available as a translation for `tag` within the active
    /// rendering session.
    fn register_inline(&mut self, tag: &str, text: &str);

    /// Picks the preferred translation out of a locale → string map.
    fn preferred(&self, translations: &HashMap<String, String>) -> Result<String, TemplateError>;
}

/// Thin pass-through facade over a [`TranslationEngine`].
///
/// Stateless at this layer: every call delegates to the engine.
#[derive(Debug)]
pub struct Translator<E> {
    engine: E,
}

impl<E: TranslationEngine> Translator<E> {
    /// Wraps an engine.
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access to the wrapped engine.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Looks up the localized string for `tag`.
    pub fn translate(
        &self,
        tag: &str,
        options: &TranslateOptions,
    ) -> Result<String, TemplateError> {
        self.engine.translate(tag, options)
    }

    /// Registers an inline translation for the active session.
    pub fn register_inline_translation(&mut self, tag: &str, text: &str) {
        self.engine.register_inline(tag, text);
    }

    /// Picks the preferred translation out of a locale → string map.
    pub fn preferred_translation(
        &self,
        translations: &HashMap<String, String>,
    ) -> Result<String, TemplateError> {
        self.engine.preferred(translations)
    }

    /// Legacy short-hand lookup.
    #[deprecated(note = "use `translate` instead")]
    pub fn t(&self, tag: &str, options: &TranslateOptions) -> Result<String, TemplateError> {
        self.translate(tag, options)
    }
}

/// Merges two dictionaries, keeping the shape of `defaults`.
///
/// For every key present in both, the locale maps are merged with the
/// override's entries winning per locale. Keys only in `defaults` pass
/// through unchanged. Keys only in `overrides` are dropped — the merge is
/// defaults-shaped, and that asymmetry is intentional.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use stagehand::merge_dictionaries;
///
/// let defaults = HashMap::from([(
///     "greet".to_string(),
///     HashMap::from([("en".to_string(), "Hi".to_string())]),
/// )]);
/// let overrides = HashMap::from([(
///     "greet".to_string(),
///     HashMap::from([
///         ("en".to_string(), "Hello".to_string()),
///         ("fr".to_string(), "Bonjour".to_string()),
///     ]),
/// )]);
///
/// let merged = merge_dictionaries(&defaults, &overrides);
/// assert_eq!(merged["greet"]["en"], "Hello");
/// assert_eq!(merged["greet"]["fr"], "Bonjour");
/// ```
pub fn merge_dictionaries(defaults: &Dictionary, overrides: &Dictionary) -> Dictionary {
    let mut merged = defaults.clone();
    for (key, locales) in merged.iter_mut() {
        if let Some(extra) = overrides.get(key) {
            for (locale, text) in extra {
                locales.insert(locale.clone(), text.clone());
            }
        }
    }
    merged
}

/// Legacy name for [`merge_dictionaries`]; pure delegation.
#[deprecated(note = "use `merge_dictionaries` instead")]
pub fn lang_merge(def: &Dictionary, lang: &Dictionary) -> Dictionary {
    merge_dictionaries(def, lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(entries: &[(&str, &[(&str, &str)])]) -> Dictionary {
        entries
            .iter()
            .map(|(key, locales)| {
                (
                    key.to_string(),
                    locales
                        .iter()
                        .map(|(l, s)| (l.to_string(), s.to_string()))
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_merge_override_locales_win() {
        let defaults = dict(&[("greet", &[("en", "Hi")])]);
        let overrides = dict(&[("greet", &[("en", "Hello"), ("fr", "Bonjour")])]);

        let merged = merge_dictionaries(&defaults, &overrides);
        assert_eq!(merged["greet"]["en"], "Hello");
        assert_eq!(merged["greet"]["fr"], "Bonjour");
    }

    #[test]
    fn test_merge_defaults_only_key_passes_through() {
        let defaults = dict(&[("greet", &[("en", "Hi")])]);
        let overrides = dict(&[("bye", &[("en", "Bye")])]);

        let merged = merge_dictionaries(&defaults, &overrides);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged["greet"]["en"], "Hi");
        assert!(!merged.contains_key("bye"));
    }

    #[test]
    fn test_merge_keeps_unrelated_default_locales() {
        let defaults = dict(&[("greet", &[("en", "Hi"), ("no", "Hei")])]);
        let overrides = dict(&[("greet", &[("en", "Hello")])]);

        let merged = merge_dictionaries(&defaults, &overrides);
        assert_eq!(merged["greet"]["en"], "Hello");
        assert_eq!(merged["greet"]["no"], "Hei");
    }

    #[test]
    #[allow(deprecated)]
    fn test_lang_merge_delegates() {
        let defaults = dict(&[("greet", &[("en", "Hi")])]);
        let overrides = dict(&[("greet", &[("fr", "Bonjour")])]);

        assert_eq!(
            lang_merge(&defaults, &overrides),
            merge_dictionaries(&defaults, &overrides)
        );
    }

    // Facade delegation against a stub engine.

    struct StubEngine {
        inline: HashMap<String, String>,
    }

    impl TranslationEngine for StubEngine {
        fn translate(
            &self,
            tag: &str,
            _options: &TranslateOptions,
        ) -> Result<String, TemplateError> {
            self.inline
                .get(tag)
                .cloned()
                .ok_or_else(|| TemplateError::Translation(format!("no translation for {tag}")))
        }

        fn register_inline(&mut self, tag: &str, text: &str) {
            self.inline.insert(tag.to_string(), text.to_string());
        }

        fn preferred(
            &self,
            translations: &HashMap<String, String>,
        ) -> Result<String, TemplateError> {
            translations
                .get("en")
                .cloned()
                .ok_or_else(|| TemplateError::Translation("no preferred translation".into()))
        }
    }

    #[test]
    fn test_facade_translate_and_inline_registration() {
        let mut translator = Translator::new(StubEngine {
            inline: HashMap::new(),
        });

        let err = translator
            .translate("{greeting}", &TranslateOptions::default())
            .unwrap_err();
        assert!(matches!(err, TemplateError::Translation(_)));

        translator.register_inline_translation("{greeting}", "Hello");
        let text = translator
            .translate("{greeting}", &TranslateOptions::default())
            .unwrap();
        assert_eq!(text, "Hello");
    }

    #[test]
    fn test_facade_preferred_translation() {
        let translator = Translator::new(StubEngine {
            inline: HashMap::new(),
        });
        let candidates = HashMap::from([
            ("en".to_string(), "Hello".to_string()),
            ("no".to_string(), "Hei".to_string()),
        ]);
        assert_eq!(
            translator.preferred_translation(&candidates).unwrap(),
            "Hello"
        );
    }

    #[test]
    #[allow(deprecated)]
    fn test_deprecated_t_delegates() {
        let mut translator = Translator::new(StubEngine {
            inline: HashMap::new(),
        });
        translator.register_inline_translation("{title}", "Title");
        assert_eq!(
            translator.t("{title}", &TranslateOptions::default()).unwrap(),
            "Title"
        );
    }
}
