//! JavaScript language definition (npm, Yarn, pnpm, Bun)

use super::{LanguageDefinition, ManifestPattern};
use crate::stack::LanguageId;

pub struct JavaScriptLanguage;

impl LanguageDefinition for JavaScriptLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::JavaScript
    }

    fn extensions(&self) -> &[&str] {
        &["js", "mjs", "cjs", "jsx"]
    }

    fn manifest_files(&self) -> &[ManifestPattern] {
        &[ManifestPattern {
            filename: "package.json",
        }]
    }

    fn excluded_dirs(&self) -> &[&str] {
        &["dist", ".next", "coverage"]
    }

    fn interpreters(&self) -> &[&str] {
        &["node", "nodejs", "bun", "deno"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id() {
        assert_eq!(JavaScriptLanguage.id(), LanguageId::JavaScript);
    }

    #[test]
    fn test_manifest() {
        assert!(JavaScriptLanguage.is_manifest("package.json"));
        assert!(!JavaScriptLanguage.is_manifest("package-lock.json"));
    }

    #[test]
    fn test_interpreters() {
        assert!(JavaScriptLanguage.interpreters().contains(&"node"));
    }
}
