//! Entry-point resolution for the user's application
//!
//! The application lives in a manifest at the project root (`app.toml`)
//! and is identified by its well-known top-level `app` table. Manifests are
//! located through an explicit [`ResolutionContext`], an ordered list of
//! search roots owned by whoever owns the [`ApplicationLoader`].
//!
//! Only syntax failures are translated into a user-facing message; every
//! other failure is surfaced as-is.

use crate::application::providers::FileSystemProvider;
use crate::primitives::{FactoryError, FactoryResult};
use crate::project::app::ApplicationModule;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument};

/// Well-known entry-point module name
pub const ENTRY_MODULE: &str = "app";
/// Well-known symbol inside the entry-point module
pub const APP_SYMBOL: &str = "app";
/// Bundled dependencies for the deployment target
pub const VENDOR_DIR: &str = "vendor";

/// Ordered search roots used to locate entry-point manifests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionContext {
    search_path: Vec<PathBuf>,
}

impl ResolutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            search_path: entries.into_iter().collect(),
        }
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.search_path
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.search_path.iter().any(|entry| entry == path)
    }

    /// Insert `path` at the front unless it is already present anywhere.
    /// Returns whether the search path changed.
    pub fn prepend_unique(&mut self, path: PathBuf) -> bool {
        if self.contains(&path) {
            return false;
        }
        self.search_path.insert(0, path);
        true
    }

    /// Append `path` at the end unless it is already present anywhere.
    /// Returns whether the search path changed.
    pub fn append_unique(&mut self, path: PathBuf) -> bool {
        if self.contains(&path) {
            return false;
        }
        self.search_path.push(path);
        true
    }

    /// First search root, in order, that contains `file_name`
    pub fn locate(&self, fs: &dyn FileSystemProvider, file_name: &str) -> Option<PathBuf> {
        self.search_path
            .iter()
            .map(|root| root.join(file_name))
            .find(|candidate| fs.exists(candidate) && !fs.is_directory(candidate))
    }
}

/// Location and description of a manifest syntax error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorReport {
    pub file: PathBuf,
    /// 1-based line number
    pub line: usize,
    /// Verbatim text of the offending line
    pub text: String,
    pub description: String,
}

impl SyntaxErrorReport {
    /// Build a report from a TOML parse failure over `source`
    pub fn from_toml(file: PathBuf, source: &str, error: &toml::de::Error) -> Self {
        // Errors without a span are reported at end of input
        let offset = error.span().map_or(source.len(), |span| span.start);
        let (line, text) = line_at(source, offset);

        Self {
            file,
            line,
            text: text.to_string(),
            description: error.message().trim().to_string(),
        }
    }
}

impl fmt::Display for SyntaxErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_name = self
            .file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{ENTRY_MODULE}.toml"));

        write!(
            f,
            "Unable to import your {} file:\n\nFile \"{}\", line {}\n  {}\nSyntaxError: {}",
            file_name,
            self.file.display(),
            self.line,
            self.text,
            self.description
        )
    }
}

/// 1-based line number and text of the line containing byte `offset`
fn line_at(source: &str, offset: usize) -> (usize, &str) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }

    let before = &source[..offset];
    let line_number = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[line_start..]
        .find('\n')
        .map_or(source.len(), |i| line_start + i);

    (line_number, source[line_start..line_end].trim_end_matches('\r'))
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failures while resolving the entry point
#[derive(Debug, Error)]
pub enum EntryPointError {
    #[error("syntax error in {} at line {}: {}", .0.file.display(), .0.line, .0.description)]
    Syntax(SyntaxErrorReport),

    #[error("No module named '{module}' (searched: {})", display_paths(search_path))]
    ModuleNotFound {
        module: String,
        search_path: Vec<PathBuf>,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("module '{module}' has no attribute '{symbol}'")]
    MissingSymbol { module: String, symbol: String },

    #[error("'{module}.{symbol}' is not a valid application: {source}")]
    InvalidApplication {
        module: String,
        symbol: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Resolves the well-known application symbol from a set of search roots
pub trait EntryPointResolver {
    fn resolve(
        &self,
        fs: &dyn FileSystemProvider,
        context: &ResolutionContext,
    ) -> Result<ApplicationModule, EntryPointError>;
}

/// Resolver for TOML manifests (`<module>.toml` exposing a `<symbol>` table)
#[derive(Debug, Clone)]
pub struct ManifestEntryPointResolver {
    module: String,
    symbol: String,
}

impl Default for ManifestEntryPointResolver {
    fn default() -> Self {
        Self::new(ENTRY_MODULE, APP_SYMBOL)
    }
}

impl ManifestEntryPointResolver {
    pub fn new(module: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbol: symbol.into(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.toml", self.module)
    }
}

impl EntryPointResolver for ManifestEntryPointResolver {
    fn resolve(
        &self,
        fs: &dyn FileSystemProvider,
        context: &ResolutionContext,
    ) -> Result<ApplicationModule, EntryPointError> {
        let path = context.locate(fs, &self.file_name()).ok_or_else(|| {
            EntryPointError::ModuleNotFound {
                module: self.module.clone(),
                search_path: context.entries().to_vec(),
            }
        })?;

        let source = fs
            .read_to_string(&path)
            .map_err(|source| EntryPointError::Read {
                path: path.clone(),
                source,
            })?;

        let mut table: toml::Table = toml::from_str(&source).map_err(|e| {
            EntryPointError::Syntax(SyntaxErrorReport::from_toml(path.clone(), &source, &e))
        })?;

        let symbol = table
            .remove(&self.symbol)
            .ok_or_else(|| EntryPointError::MissingSymbol {
                module: self.module.clone(),
                symbol: self.symbol.clone(),
            })?;

        let app: ApplicationModule =
            symbol
                .try_into()
                .map_err(|source| EntryPointError::InvalidApplication {
                    module: self.module.clone(),
                    symbol: self.symbol.clone(),
                    source,
                })?;

        Ok(app.with_source(path))
    }
}

/// Loads the application once and keeps it for the owner's lifetime
pub struct ApplicationLoader {
    resolver: Box<dyn EntryPointResolver>,
    context: ResolutionContext,
    loaded: Option<Arc<ApplicationModule>>,
}

impl Default for ApplicationLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationLoader {
    pub fn new() -> Self {
        Self::with_resolver(
            Box::new(ManifestEntryPointResolver::default()),
            ResolutionContext::new(),
        )
    }

    pub fn with_resolver(resolver: Box<dyn EntryPointResolver>, context: ResolutionContext) -> Self {
        Self {
            resolver,
            context,
            loaded: None,
        }
    }

    pub fn context(&self) -> &ResolutionContext {
        &self.context
    }

    /// Put the project root first and its vendor directory last.
    ///
    /// Vendored code is built for the deployment target, so anything
    /// installed locally has to shadow it.
    pub fn prepare_search_path(&mut self, fs: &dyn FileSystemProvider, project_root: &Path) {
        if self.context.prepend_unique(project_root.to_path_buf()) {
            debug!(root = %project_root.display(), "Added project root to search path");
        }

        let vendor_dir = project_root.join(VENDOR_DIR);
        if fs.is_directory(&vendor_dir) && self.context.append_unique(vendor_dir.clone()) {
            debug!(vendor = %vendor_dir.display(), "Added vendor directory to search path");
        }
    }

    /// Resolve the application under `project_root`, reusing an earlier load
    #[instrument(skip(self, fs), fields(root = %project_root.display()))]
    pub fn load(
        &mut self,
        fs: &dyn FileSystemProvider,
        project_root: &Path,
    ) -> FactoryResult<Arc<ApplicationModule>> {
        if let Some(app) = &self.loaded {
            debug!(app = %app.name, "Application already loaded");
            return Ok(Arc::clone(app));
        }

        self.prepare_search_path(fs, project_root);

        let app = match self.resolver.resolve(fs, &self.context) {
            Ok(app) => Arc::new(app),
            Err(EntryPointError::Syntax(report)) => {
                return Err(FactoryError::ApplicationLoad(report));
            }
            Err(other) => return Err(other.into()),
        };

        debug!(
            app = %app.name,
            routes = app.routes.len(),
            functions = app.functions.len(),
            "Loaded application"
        );

        self.loaded = Some(Arc::clone(&app));
        Ok(app)
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
