//! Layered `.gitignore` evaluation
//!
//! Every directory that carries a `.gitignore` adds a layer scoped to itself.
//! Layers are consulted from the deepest scope upward and the first layer
//! with a matching pattern decides, so a nested file can re-include what a
//! parent file excluded. Within one file the last matching line wins.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::Match;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

/// Directory names excluded from every scan, before any `.gitignore`
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    ".idea",
    ".vscode",
    ".gradle",
    "node_modules",
    "bower_components",
    "jspm_packages",
    "vendor",
    "__pycache__",
    ".venv",
    "venv",
    ".tox",
];

/// Immutable set of always-excluded directory names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultIgnores {
    names: BTreeSet<String>,
}

impl DefaultIgnores {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in table, built once per process
    pub fn shared() -> Arc<DefaultIgnores> {
        static SHARED: OnceLock<Arc<DefaultIgnores>> = OnceLock::new();
        SHARED
            .get_or_init(|| Arc::new(DefaultIgnores::new(DEFAULT_IGNORED_DIRS.iter().copied())))
            .clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for DefaultIgnores {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED_DIRS.iter().copied())
    }
}

/// The rule that decided a path's fate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRule {
    /// Pattern text as written in the ignore file
    pub pattern: String,
    /// Directory the pattern is relative to
    pub scope: PathBuf,
    /// `!pattern`: re-includes instead of excluding
    pub negated: bool,
    /// `pattern/`: only matches directories
    pub directory_only: bool,
}

struct IgnoreLayer {
    scope: PathBuf,
    matcher: Gitignore,
}

/// Ignore state for one directory of a walk
///
/// Cheap to clone; layers are shared between a directory and its children.
#[derive(Clone)]
pub struct IgnoreRules {
    defaults: Arc<DefaultIgnores>,
    layers: Vec<Arc<IgnoreLayer>>,
}

impl IgnoreRules {
    /// Rules for the scan root: defaults plus `root/.gitignore` if present
    pub fn compile(root: &Path, defaults: Arc<DefaultIgnores>) -> Self {
        let rules = Self {
            defaults,
            layers: Vec::new(),
        };
        rules.descend(root)
    }

    /// Rules for `dir`, layering `dir/.gitignore` on top of `self`
    pub fn descend(&self, dir: &Path) -> Self {
        let mut rules = self.clone();
        if let Some(layer) = load_layer(dir) {
            rules.layers.push(Arc::new(layer));
        }
        rules
    }

    pub fn is_excluded(&self, path: &Path, is_dir: bool) -> bool {
        self.matched_rule(path, is_dir)
            .map(|rule| !rule.negated)
            .unwrap_or(false)
    }

    /// The deciding rule for `path`, or `None` if nothing matches
    ///
    /// A negated rule means the path is explicitly kept.
    pub fn matched_rule(&self, path: &Path, is_dir: bool) -> Option<IgnoreRule> {
        if is_dir {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if self.defaults.contains(name) {
                    return Some(IgnoreRule {
                        pattern: format!("{}/", name),
                        scope: path.parent().map(Path::to_path_buf).unwrap_or_default(),
                        negated: false,
                        directory_only: true,
                    });
                }
            }
        }

        for layer in self.layers.iter().rev() {
            if !path.starts_with(&layer.scope) {
                continue;
            }
            let glob = match layer.matcher.matched(path, is_dir) {
                Match::None => continue,
                Match::Ignore(glob) | Match::Whitelist(glob) => glob,
            };
            return Some(IgnoreRule {
                pattern: glob.original().to_string(),
                scope: layer.scope.clone(),
                negated: glob.is_whitelist(),
                directory_only: glob.is_only_dir(),
            });
        }
        None
    }

    pub fn depth(&self) -> usize {
        self.layers.len()
    }
}

fn load_layer(dir: &Path) -> Option<IgnoreLayer> {
    let file = dir.join(".gitignore");
    if !file.is_file() {
        return None;
    }

    let mut builder = GitignoreBuilder::new(dir);
    if let Some(err) = builder.add(&file) {
        // Partial errors: bad lines are dropped, the rest still applies
        warn!(file = %file.display(), error = %err, "Skipping malformed .gitignore lines");
    }

    match builder.build() {
        Ok(matcher) => {
            debug!(
                scope = %dir.display(),
                patterns = matcher.num_ignores() + matcher.num_whitelists(),
                "Loaded .gitignore"
            );
            Some(IgnoreLayer {
                scope: dir.to_path_buf(),
                matcher,
            })
        }
        Err(err) => {
            warn!(file = %file.display(), error = %err, "Failed to compile .gitignore");
            None
        }
    }
}
