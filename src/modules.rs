//! Module directory lookup.
//!
//! Modules are self-contained units owning their own resource directories.
//! The resolution core only needs one accessor from the module system: given
//! a module name, return that module's root directory. [`ModuleRegistry`]
//! abstracts that accessor; [`DirModuleRegistry`] is the conventional
//! directory-backed implementation.

use std::path::{Path, PathBuf};

use crate::error::TemplateError;

/// Lookup from module name to module root directory.
///
/// An unknown module is the registry's own failure
/// ([`TemplateError::UnknownModule`]) and propagates through the locator
/// unmodified.
pub trait ModuleRegistry {
    /// Returns the absolute root directory of the named module.
    fn module_dir(&self, module: &str) -> Result<PathBuf, TemplateError>;
}

/// Module registry backed by a single parent directory.
///
/// Module `m` resolves to `<root>/m`; the directory must exist.
///
/// # Example
///
/// ```rust,ignore
/// let modules = DirModuleRegistry::new("/srv/app/modules");
/// let dir = modules.module_dir("core")?; // /srv/app/modules/core
/// ```
#[derive(Debug, Clone)]
pub struct DirModuleRegistry {
    root: PathBuf,
}

impl DirModuleRegistry {
    /// Creates a registry rooted at the given modules directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The parent directory holding all modules.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ModuleRegistry for DirModuleRegistry {
    fn module_dir(&self, module: &str) -> Result<PathBuf, TemplateError> {
        let dir = self.root.join(module);
        if dir.is_dir() {
            Ok(dir)
        } else {
            Err(TemplateError::UnknownModule(module.to_string()))
        }
    }
}
