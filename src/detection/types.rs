use crate::stack::LanguageId;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One candidate language for a directory, with its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageMatch {
    pub id: LanguageId,
    pub name: String,
    pub confidence: f64,
    /// Lowercase synonyms accepted by [`LanguageMatch::is`]
    pub aliases: Vec<String>,
    /// A manifest of this language sits directly in the classified directory
    pub has_manifest: bool,
}

impl LanguageMatch {
    /// Case-insensitive comparison against the display name and aliases
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

/// An independently buildable project found in the scanned tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    pub name: String,
    pub root_path: PathBuf,
    /// Manifest-backed languages first, then by confidence; never empty
    pub languages: Vec<LanguageMatch>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
}

impl Component {
    pub fn primary_language(&self) -> Option<&LanguageMatch> {
        self.languages.first()
    }

    pub fn root(&self) -> &Path {
        &self.root_path
    }
}
