use super::ignore::{DefaultIgnores, IgnoreRule, IgnoreRules};
use crate::config::ScanConfig;
use crate::detection::CancellationToken;
use crate::error::DetectError;
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, trace, warn};

/// Gitignore-aware depth-first file walker
///
/// Only `.gitignore` files inside the scanned tree are honored; global git
/// excludes and ignore files above the root are not. Directories excluded by
/// a rule or by the [`DefaultIgnores`] table are never read.
pub struct FileEnumerator {
    config: ScanConfig,
    defaults: Arc<DefaultIgnores>,
    cancel: CancellationToken,
}

impl FileEnumerator {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            defaults: DefaultIgnores::shared(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_default_ignores(mut self, defaults: Arc<DefaultIgnores>) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Returns the canonical root and every non-ignored regular file below it
    pub fn enumerate(&self, root: &Path) -> Result<(PathBuf, Vec<PathBuf>), DetectError> {
        let start = Instant::now();
        let root = self.resolve_root(root)?;

        info!(
            root = %root.display(),
            max_depth = ?self.config.max_depth,
            follow_links = self.config.follow_links,
            "Starting file enumeration"
        );

        let defaults = self.defaults.clone();
        let mut files = BTreeSet::new();
        let mut skipped = 0usize;

        for result in WalkBuilder::new(&root)
            // Depth 0 is the root itself
            .max_depth(self.config.max_depth.map(|depth| depth + 1))
            .follow_links(self.config.follow_links)
            .hidden(false)
            .parents(false)
            .ignore(false)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(false)
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().map_or(false, |t| t.is_dir());
                !(is_dir
                    && entry.depth() > 0
                    && entry
                        .file_name()
                        .to_str()
                        .map_or(false, |name| defaults.contains(name)))
            })
            .build()
        {
            self.cancel.check()?;

            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    // Unreadable directories and symlink loops
                    warn!(error = %err, "Failed to read directory entry");
                    skipped += 1;
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            trace!(path = %path.display(), "Enumerated file");
            files.insert(path.to_path_buf());
        }

        info!(
            files = files.len(),
            skipped,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "File enumeration completed"
        );

        Ok((root, files.into_iter().collect()))
    }

    /// The rule that decides whether `path` takes part in a scan of `root`
    ///
    /// An excluded ancestor directory decides for everything below it, since
    /// the walker never enters it. `None` means no rule applies and the path
    /// is kept. `path` may be relative to `root`.
    pub fn explain(&self, root: &Path, path: &Path) -> Result<Option<IgnoreRule>, DetectError> {
        let root = self.resolve_root(root)?;
        let target = root.join(path);
        let target = target.canonicalize().unwrap_or(target);
        let Ok(relative) = target.strip_prefix(&root) else {
            return Ok(None);
        };

        let parts: Vec<_> = relative.components().collect();
        let mut rules = IgnoreRules::compile(&root, self.defaults.clone());
        let mut current = root.clone();

        for (i, part) in parts.iter().enumerate() {
            current.push(part);
            let last = i + 1 == parts.len();
            let is_dir = !last || current.is_dir();
            let rule = rules.matched_rule(&current, is_dir);

            if last {
                return Ok(rule);
            }
            if let Some(rule) = rule.filter(|r| !r.negated) {
                return Ok(Some(rule));
            }
            rules = rules.descend(&current);
        }
        Ok(None)
    }

    /// Canonical form of `root`, which must be a readable directory
    fn resolve_root(&self, root: &Path) -> Result<PathBuf, DetectError> {
        let metadata = fs::metadata(root).map_err(|e| DetectError::io(root, e))?;
        if !metadata.is_dir() {
            return Err(DetectError::NotADirectory(root.to_path_buf()));
        }
        let root = root.canonicalize().map_err(|e| DetectError::io(root, e))?;
        // An unreadable root is fatal; unreadable subdirectories are skipped
        fs::read_dir(&root).map_err(|e| DetectError::io(&root, e))?;
        Ok(root)
    }
}
