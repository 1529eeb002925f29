//! Go language definition

use super::{LanguageDefinition, ManifestPattern};
use crate::stack::LanguageId;

pub struct GoLanguage;

impl LanguageDefinition for GoLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Go
    }

    fn extensions(&self) -> &[&str] {
        &["go"]
    }

    fn manifest_files(&self) -> &[ManifestPattern] {
        &[
            ManifestPattern { filename: "go.mod" },
            ManifestPattern {
                filename: "Gopkg.toml",
            },
            ManifestPattern {
                filename: "glide.yaml",
            },
        ]
    }

    fn excluded_dirs(&self) -> &[&str] {
        &["bin"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifests() {
        assert!(GoLanguage.is_manifest("go.mod"));
        assert!(!GoLanguage.is_manifest("go.sum"));
    }
}
