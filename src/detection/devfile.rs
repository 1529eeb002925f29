//! Devfile selection
//!
//! A devfile registry entry names the language it targets, a project type
//! and free-form tags. Picking one for a project walks the project's
//! languages in rank order and takes the best-scoring entry for the first
//! language that any entry supports.

use super::types::LanguageMatch;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One selectable devfile, as listed by a devfile registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevfileType {
    pub name: String,
    pub language: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl DevfileType {
    pub fn new(name: impl Into<String>, language: impl Into<String>, project_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            project_type: project_type.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// How well this devfile fits `language` used with `stack`
    /// (frameworks and tools)
    ///
    /// Zero unless the devfile's language is the language's name or one of
    /// its aliases. Each stack entry matching the project type or a tag adds
    /// a point, as does a tag naming the language itself.
    pub fn score(&self, language: &LanguageMatch, stack: &[String]) -> usize {
        if !language.is(&self.language) {
            return 0;
        }

        let mut score = 1;
        if !self.project_type.is_empty()
            && stack.iter().any(|s| s.eq_ignore_ascii_case(&self.project_type))
        {
            score += 1;
        }
        for tag in &self.tags {
            if language.is(tag) || stack.iter().any(|s| s.eq_ignore_ascii_case(tag)) {
                score += 1;
            }
        }
        score
    }
}

/// Best devfile for the first supported language in `languages`
///
/// Ties go to the entry listed first in `types`.
pub fn select_devfile<'t>(
    languages: &[LanguageMatch],
    stack: &[String],
    types: &'t [DevfileType],
) -> Option<&'t DevfileType> {
    for language in languages {
        let mut best: Option<(usize, &DevfileType)> = None;
        for devfile in types {
            let score = devfile.score(language, stack);
            if score > best.map_or(0, |(s, _)| s) {
                best = Some((score, devfile));
            }
        }
        if let Some((score, devfile)) = best {
            debug!(
                language = %language.name,
                devfile = %devfile.name,
                score,
                "Selected devfile"
            );
            return Some(devfile);
        }
    }
    None
}
