use super::assembler::ComponentAssembler;
use super::boundary::{BoundaryDetector, ComponentRoot};
use super::cancel::CancellationToken;
use super::classifier::LanguageClassifier;
use super::devfile::{select_devfile, DevfileType};
use super::recognizer::FrameworkRecognizer;
use super::types::{Component, LanguageMatch};
use crate::config::ScanConfig;
use crate::error::DetectError;
use crate::fs::{FileSystem, RealFileSystem};
use crate::scan::{DefaultIgnores, FileEnumerator, IgnoreRule};
use crate::stack::StackRegistry;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Configurable entry point for component detection
///
/// Every call re-reads the file system; nothing is cached between calls.
/// A detector can be shared across threads and used for concurrent scans.
///
/// ```no_run
/// use stackprobe::{ComponentDetector, ScanConfig};
///
/// let detector = ComponentDetector::new().with_config(ScanConfig::default().with_workers(2));
/// for component in detector.detect("./monorepo")? {
///     println!("{} -> {}", component.name, component.languages[0].name);
/// }
/// # Ok::<(), stackprobe::DetectError>(())
/// ```
#[derive(Clone)]
pub struct ComponentDetector {
    registry: Arc<StackRegistry>,
    config: ScanConfig,
    fs: Arc<dyn FileSystem>,
    defaults: Arc<DefaultIgnores>,
    cancel: CancellationToken,
}

impl ComponentDetector {
    pub fn new() -> Self {
        Self {
            registry: StackRegistry::shared(),
            config: ScanConfig::default(),
            fs: Arc::new(RealFileSystem::new()),
            defaults: DefaultIgnores::shared(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_registry(mut self, registry: Arc<StackRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// File system used for manifest and shebang reads
    pub fn with_file_system(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn with_default_ignores(mut self, defaults: Arc<DefaultIgnores>) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Non-ignored regular files under `root`, sorted
    pub fn enumerate(&self, root: impl AsRef<Path>) -> Result<Vec<PathBuf>, DetectError> {
        self.config.validate()?;
        let (_, files) = self.enumerator().enumerate(root.as_ref())?;
        Ok(files)
    }

    /// Components found under `root`, closest to the root first
    pub fn detect(&self, root: impl AsRef<Path>) -> Result<Vec<Component>, DetectError> {
        self.config.validate()?;
        let (root, files) = self.enumerator().enumerate(root.as_ref())?;
        self.detect_in(&root, &files)
    }

    /// Components among an explicit file list
    ///
    /// The scan root is the deepest directory containing every file.
    /// Relative paths are resolved against the current directory. Files
    /// inside always-excluded directories (such as `node_modules`) are
    /// dropped; `.gitignore` files are not consulted.
    pub fn detect_from_files(&self, files: &[PathBuf]) -> Result<Vec<Component>, DetectError> {
        self.config.validate()?;
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let cwd = env::current_dir().map_err(|e| DetectError::io(".", e))?;
        let mut absolute: Vec<PathBuf> = files
            .iter()
            .map(|f| if f.is_absolute() { f.clone() } else { cwd.join(f) })
            .collect();
        absolute.sort();
        absolute.dedup();

        let Some(root) = common_ancestor(&absolute) else {
            return Ok(Vec::new());
        };
        let kept: Vec<PathBuf> = absolute
            .into_iter()
            .filter(|f| !self.in_default_ignored_dir(&root, f))
            .collect();
        debug!(root = %root.display(), files = kept.len(), "Resolved scan root from file list");

        self.detect_in(&root, &kept)
    }

    /// Ranked language statistics for the whole tree under `root`
    pub fn classify(&self, root: impl AsRef<Path>) -> Result<Vec<LanguageMatch>, DetectError> {
        self.config.validate()?;
        let (root, files) = self.enumerator().enumerate(root.as_ref())?;
        let classifier = self.classifier();
        Ok(classifier.classify(&root, &files))
    }

    /// The component rooted exactly at `root`, if there is one
    ///
    /// Nested components are not searched for.
    pub fn detect_root(&self, root: impl AsRef<Path>) -> Result<Vec<Component>, DetectError> {
        self.config.validate()?;
        let (root, files) = self.enumerator().enumerate(root.as_ref())?;
        Ok(self.root_component(&root, &files)?.into_iter().collect())
    }

    /// The devfile from `types` that best fits the project at `root`
    ///
    /// A component at the root decides if there is one, else the first
    /// component found anywhere in the tree, else the language statistics
    /// of the whole tree. Frameworks and tools of the deciding component
    /// count towards the score.
    pub fn select_devfile<'t>(
        &self,
        root: impl AsRef<Path>,
        types: &'t [DevfileType],
    ) -> Result<Option<&'t DevfileType>, DetectError> {
        self.config.validate()?;
        let (root, files) = self.enumerator().enumerate(root.as_ref())?;

        let deciding = match self.root_component(&root, &files)? {
            Some(component) => Some(component),
            None => self.detect_in(&root, &files)?.into_iter().next(),
        };

        if let Some(component) = deciding {
            debug!(
                component = %component.name,
                root = %component.root_path.display(),
                "Selecting devfile from component"
            );
            let stack: Vec<String> = component
                .frameworks
                .iter()
                .chain(component.tools.iter())
                .cloned()
                .collect();
            return Ok(select_devfile(&component.languages, &stack, types));
        }

        debug!(root = %root.display(), "No component found, selecting devfile from tree languages");
        let languages = self.classifier().classify(&root, &files);
        Ok(select_devfile(&languages, &[], types))
    }

    /// The ignore rule deciding whether `path` is scanned under `root`
    pub fn explain(
        &self,
        root: impl AsRef<Path>,
        path: impl AsRef<Path>,
    ) -> Result<Option<IgnoreRule>, DetectError> {
        self.config.validate()?;
        self.enumerator().explain(root.as_ref(), path.as_ref())
    }

    fn root_component(&self, root: &Path, files: &[PathBuf]) -> Result<Option<Component>, DetectError> {
        let languages = self.classifier().classify_component(root, files);
        if languages.is_empty() {
            return Ok(None);
        }

        let pool = self.pool()?;
        let recognizer = FrameworkRecognizer::new(&self.registry, self.fs.as_ref());
        let accepted = ComponentRoot {
            root: root.to_path_buf(),
            languages,
            files: files.to_vec(),
        };
        let mut components =
            ComponentAssembler::new(&recognizer, &pool, &self.cancel).assemble(vec![accepted])?;
        Ok(components.pop())
    }

    fn detect_in(&self, root: &Path, files: &[PathBuf]) -> Result<Vec<Component>, DetectError> {
        let start = Instant::now();
        info!(root = %root.display(), files = files.len(), "Starting component detection");

        let pool = self.pool()?;
        let classifier = self.classifier();
        let roots = BoundaryDetector::new(&self.registry, &classifier, &pool, &self.cancel)
            .detect(root, files)?;

        let recognizer = FrameworkRecognizer::new(&self.registry, self.fs.as_ref());
        let components = ComponentAssembler::new(&recognizer, &pool, &self.cancel).assemble(roots)?;

        info!(
            components = components.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Component detection completed"
        );
        Ok(components)
    }

    fn enumerator(&self) -> FileEnumerator {
        FileEnumerator::new(self.config.clone())
            .with_default_ignores(self.defaults.clone())
            .with_cancellation(self.cancel.clone())
    }

    fn classifier(&self) -> LanguageClassifier<'_> {
        LanguageClassifier::new(
            &self.registry,
            self.fs.as_ref(),
            self.config.min_language_share,
        )
    }

    fn pool(&self) -> Result<ThreadPool, DetectError> {
        Ok(ThreadPoolBuilder::new()
            .num_threads(self.config.workers)
            .thread_name(|i| format!("stackprobe-worker-{}", i))
            .build()?)
    }

    fn in_default_ignored_dir(&self, root: &Path, file: &Path) -> bool {
        file.strip_prefix(root)
            .ok()
            .and_then(Path::parent)
            .map(|parent| {
                parent.components().any(|c| {
                    c.as_os_str()
                        .to_str()
                        .map_or(false, |name| self.defaults.contains(name))
                })
            })
            .unwrap_or(false)
    }
}

impl Default for ComponentDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Deepest directory that contains every file's parent
fn common_ancestor(files: &[PathBuf]) -> Option<PathBuf> {
    let mut parents = files.iter().filter_map(|f| f.parent());
    let mut common = parents.next()?.to_path_buf();
    for parent in parents {
        while !parent.starts_with(&common) {
            if !common.pop() {
                return None;
            }
        }
    }
    Some(common)
}
