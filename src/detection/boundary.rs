//! Component boundary detection
//!
//! The tree is walked top-down in name order. A directory whose files
//! classify as a component (see [`LanguageClassifier::classify_component`])
//! is accepted and its whole subtree is claimed; nothing below an accepted
//! root is examined again, so components never overlap.

use super::cancel::CancellationToken;
use super::classifier::LanguageClassifier;
use super::types::LanguageMatch;
use crate::error::DetectError;
use crate::stack::StackRegistry;
use rayon::prelude::*;
use rayon::ThreadPool;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// An accepted component root with its ranked languages and files
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRoot {
    pub root: PathBuf,
    pub languages: Vec<LanguageMatch>,
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Default)]
struct DirNode {
    files: Vec<PathBuf>,
    children: BTreeSet<PathBuf>,
}

/// Directory hierarchy implied by a file list, rooted at `root`
#[derive(Debug)]
pub(crate) struct DirTree {
    root: PathBuf,
    nodes: BTreeMap<PathBuf, DirNode>,
}

impl DirTree {
    pub(crate) fn build(root: &Path, files: &[PathBuf]) -> Self {
        let mut nodes: BTreeMap<PathBuf, DirNode> = BTreeMap::new();
        nodes.insert(root.to_path_buf(), DirNode::default());

        for file in files.iter().filter(|f| f.starts_with(root) && f.as_path() != root) {
            let Some(parent) = file.parent() else {
                continue;
            };
            nodes
                .entry(parent.to_path_buf())
                .or_default()
                .files
                .push(file.clone());

            let mut child = parent;
            while child != root {
                let Some(up) = child.parent() else {
                    break;
                };
                let inserted = nodes
                    .entry(up.to_path_buf())
                    .or_default()
                    .children
                    .insert(child.to_path_buf());
                if !inserted {
                    break;
                }
                child = up;
            }
        }

        for node in nodes.values_mut() {
            node.files.sort();
            node.files.dedup();
        }

        Self {
            root: root.to_path_buf(),
            nodes,
        }
    }

    fn direct_files(&self, dir: &Path) -> &[PathBuf] {
        self.nodes.get(dir).map(|n| n.files.as_slice()).unwrap_or(&[])
    }

    fn children(&self, dir: &Path) -> impl Iterator<Item = &PathBuf> {
        self.nodes.get(dir).into_iter().flat_map(|n| n.children.iter())
    }

    /// Every file at or below `dir`, sorted
    fn subtree_files(&self, dir: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = self
            .nodes
            .range(dir.to_path_buf()..)
            .take_while(|(path, _)| path.starts_with(dir))
            .flat_map(|(_, node)| node.files.iter().cloned())
            .collect();
        files.sort();
        files
    }

    fn dirs(&self) -> impl Iterator<Item = &PathBuf> {
        self.nodes.keys()
    }
}

/// Directory roots already attributed to an accepted component
#[derive(Debug, Default, Clone)]
pub struct ClaimSet {
    roots: Vec<PathBuf>,
}

impl ClaimSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, root: &Path) {
        self.roots.push(root.to_path_buf());
    }

    pub fn is_claimed(&self, path: &Path) -> bool {
        self.roots.iter().any(|r| path.starts_with(r))
    }

    pub fn unclaimed(&self, files: Vec<PathBuf>) -> Vec<PathBuf> {
        files.into_iter().filter(|f| !self.is_claimed(f)).collect()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

pub struct BoundaryDetector<'a> {
    registry: &'a StackRegistry,
    classifier: &'a LanguageClassifier<'a>,
    pool: &'a ThreadPool,
    cancel: &'a CancellationToken,
}

impl<'a> BoundaryDetector<'a> {
    pub fn new(
        registry: &'a StackRegistry,
        classifier: &'a LanguageClassifier<'a>,
        pool: &'a ThreadPool,
        cancel: &'a CancellationToken,
    ) -> Self {
        Self {
            registry,
            classifier,
            pool,
            cancel,
        }
    }

    /// Component roots under `root`, in depth-first name order
    pub fn detect(&self, root: &Path, files: &[PathBuf]) -> Result<Vec<ComponentRoot>, DetectError> {
        let tree = DirTree::build(root, files);
        let mut verdicts = self.classify_candidates(&tree)?;

        let mut claims = ClaimSet::new();
        let mut accepted = Vec::new();
        let mut stack = vec![tree.root.clone()];

        while let Some(dir) = stack.pop() {
            self.cancel.check()?;
            if claims.is_claimed(&dir) {
                continue;
            }

            let languages = verdicts.remove(&dir).unwrap_or_default();
            if languages.is_empty() {
                trace!(dir = %dir.display(), "Not a component root, descending");
                let children: Vec<&PathBuf> = tree.children(&dir).collect();
                stack.extend(children.into_iter().rev().cloned());
                continue;
            }

            let files = claims.unclaimed(tree.subtree_files(&dir));
            claims.claim(&dir);
            debug!(
                root = %dir.display(),
                language = %languages[0].name,
                files = files.len(),
                "Accepted component root"
            );
            accepted.push(ComponentRoot {
                root: dir,
                languages,
                files,
            });
        }

        Ok(accepted)
    }

    /// Acceptance verdicts for every directory holding a manifest, computed
    /// on the worker pool. Other directories can never be accepted.
    fn classify_candidates(
        &self,
        tree: &DirTree,
    ) -> Result<HashMap<PathBuf, Vec<LanguageMatch>>, DetectError> {
        let candidates: Vec<&PathBuf> = tree
            .dirs()
            .filter(|dir| {
                tree.direct_files(dir).iter().any(|f| {
                    f.file_name()
                        .and_then(|n| n.to_str())
                        .map_or(false, |n| self.registry.is_manifest(n))
                })
            })
            .collect();
        debug!(candidates = candidates.len(), "Classifying candidate directories");

        self.pool.install(|| {
            candidates
                .par_iter()
                .map(|dir| -> Result<(PathBuf, Vec<LanguageMatch>), DetectError> {
                    self.cancel.check()?;
                    let files = tree.subtree_files(dir);
                    Ok(((*dir).clone(), self.classifier.classify_component(dir, &files)))
                })
                .collect()
        })
    }
}
