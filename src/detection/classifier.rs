//! Language scoring for a directory subtree
//!
//! Each language scores one point per source file that maps to it (by
//! extension, or by the `#!` interpreter of an extension-less file) and
//! [`MANIFEST_BONUS`] when one of its manifests sits directly in the
//! directory. Files under a language's own excluded directories (build
//! output) score nothing for that language.
//!
//! Ranking puts manifest-backed languages first whatever the file counts,
//! so a large nested project cannot outrank the manifest of its parent.

use super::types::LanguageMatch;
use crate::fs::FileSystem;
use crate::stack::{LanguageDefinition, StackRegistry};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace};

/// Weight of a manifest in the scored directory
pub const MANIFEST_BONUS: f64 = 1000.0;

const SHEBANG_PROBE_BYTES: usize = 64;

/// Evidence gathered from one file during a classification pass
#[derive(Debug, Clone, PartialEq, Eq)]
struct FileEvidence<'a> {
    path: &'a Path,
    extension: Option<String>,
    interpreter: Option<String>,
    manifest: bool,
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    files: usize,
    has_manifest: bool,
}

pub struct LanguageClassifier<'a> {
    registry: &'a StackRegistry,
    fs: &'a dyn FileSystem,
    min_share: f64,
}

impl<'a> LanguageClassifier<'a> {
    pub fn new(registry: &'a StackRegistry, fs: &'a dyn FileSystem, min_share: f64) -> Self {
        Self {
            registry,
            fs,
            min_share,
        }
    }

    /// Ranked languages for the files of `dir`'s subtree
    ///
    /// Files outside `dir` are ignored. The result is independent of the
    /// order of `files`.
    pub fn classify(&self, dir: &Path, files: &[PathBuf]) -> Vec<LanguageMatch> {
        let languages = self.registry.languages();
        let mut tallies: BTreeMap<usize, Tally> = BTreeMap::new();
        let mut manifests: Vec<Vec<usize>> = Vec::new();

        for path in files.iter().filter(|f| f.starts_with(dir)) {
            let evidence = self.gather(dir, path);

            if evidence.manifest {
                if let Some(name) = evidence.path.file_name().and_then(|n| n.to_str()) {
                    let owners: Vec<usize> = languages
                        .iter()
                        .enumerate()
                        .filter(|(_, l)| l.is_manifest(name))
                        .map(|(i, _)| i)
                        .collect();
                    if !owners.is_empty() {
                        manifests.push(owners);
                    }
                }
            }

            for index in self.candidates(&evidence) {
                if in_excluded_dir(dir, evidence.path, languages[index].as_ref()) {
                    continue;
                }
                tallies.entry(index).or_default().files += 1;
            }
        }

        // A manifest shared by several languages goes to those with source
        // files here, or to the highest-priority owner if none has any
        for owners in manifests {
            let with_files: Vec<usize> = owners
                .iter()
                .copied()
                .filter(|i| tallies.get(i).map_or(false, |t| t.files > 0))
                .collect();
            let winners = if with_files.is_empty() {
                vec![owners[0]]
            } else {
                with_files
            };
            for index in winners {
                tallies.entry(index).or_default().has_manifest = true;
            }
        }

        let total_files: usize = tallies.values().map(|t| t.files).sum();
        let mut ranked: Vec<(usize, LanguageMatch)> = tallies
            .into_iter()
            .filter(|(_, tally)| {
                tally.has_manifest
                    || (total_files > 0
                        && tally.files as f64 / total_files as f64 > self.min_share)
            })
            .map(|(index, tally)| {
                let language = &languages[index];
                let id = language.id();
                let confidence = tally.files as f64
                    + if tally.has_manifest {
                        MANIFEST_BONUS
                    } else {
                        0.0
                    };
                (
                    index,
                    LanguageMatch {
                        name: id.name(),
                        aliases: language.aliases(),
                        id,
                        confidence,
                        has_manifest: tally.has_manifest,
                    },
                )
            })
            .collect();

        // Manifest-backed languages rank above any file count
        ranked.sort_by(|(ia, a), (ib, b)| {
            b.has_manifest
                .cmp(&a.has_manifest)
                .then_with(|| b.confidence.partial_cmp(&a.confidence).unwrap_or(Ordering::Equal))
                .then(ia.cmp(ib))
                .then_with(|| a.name.cmp(&b.name))
        });

        let ranked: Vec<LanguageMatch> = ranked.into_iter().map(|(_, m)| m).collect();
        trace!(
            dir = %dir.display(),
            languages = ?ranked.iter().map(|m| (m.name.as_str(), m.confidence)).collect::<Vec<_>>(),
            "Classified directory"
        );
        ranked
    }

    /// Like [`classify`](Self::classify), but empty unless the directory
    /// qualifies as a component root: its top language is anchored by a
    /// manifest here and may form a component.
    pub fn classify_component(&self, dir: &Path, files: &[PathBuf]) -> Vec<LanguageMatch> {
        let ranked = self.classify(dir, files);
        let accepted = ranked.first().map_or(false, |top| {
            top.has_manifest
                && self
                    .registry
                    .get_language(&top.id)
                    .map_or(false, |l| l.can_be_component())
        });
        if accepted {
            debug!(dir = %dir.display(), language = %ranked[0].name, "Component root candidate");
            ranked
        } else {
            Vec::new()
        }
    }

    fn gather<'p>(&self, dir: &Path, path: &'p Path) -> FileEvidence<'p> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let interpreter = if extension.is_none() {
            self.read_interpreter(path)
        } else {
            None
        };
        let manifest = path.parent() == Some(dir)
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .map_or(false, |n| self.registry.is_manifest(n));

        FileEvidence {
            path,
            extension,
            interpreter,
            manifest,
        }
    }

    fn candidates(&self, evidence: &FileEvidence<'_>) -> Vec<usize> {
        let matched: Vec<&Arc<dyn LanguageDefinition>> = match (&evidence.extension, &evidence.interpreter) {
            (Some(ext), _) => self.registry.languages_for_extension(ext),
            (None, Some(interpreter)) => self.registry.languages_for_interpreter(interpreter),
            (None, None) => Vec::new(),
        };
        matched
            .into_iter()
            .map(|l| self.registry.priority_of(&l.id()))
            .collect()
    }

    fn read_interpreter(&self, path: &Path) -> Option<String> {
        let head = self.fs.read_bytes(path, SHEBANG_PROBE_BYTES).ok()?;
        parse_shebang(&String::from_utf8_lossy(&head))
    }
}

/// Interpreter named by a `#!` line, without path or version
/// (`#!/usr/bin/env python3.11` -> `python`)
pub fn parse_shebang(head: &str) -> Option<String> {
    let line = head.lines().next()?.strip_prefix("#!")?;
    let mut parts = line.split_whitespace();
    let mut program = parts.next()?.rsplit('/').next()?;
    if program == "env" {
        program = parts.find(|p| !p.starts_with('-'))?;
    }
    let name = program.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn in_excluded_dir(dir: &Path, path: &Path, language: &dyn LanguageDefinition) -> bool {
    let excluded = language.excluded_dirs();
    if excluded.is_empty() {
        return false;
    }
    let Ok(relative) = path.strip_prefix(dir) else {
        return false;
    };
    relative
        .parent()
        .map(|parent| {
            parent.components().any(|c| {
                c.as_os_str()
                    .to_str()
                    .map_or(false, |name| excluded.contains(&name))
            })
        })
        .unwrap_or(false)
}
