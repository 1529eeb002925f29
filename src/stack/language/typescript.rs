//! TypeScript language definition

use super::{LanguageDefinition, ManifestPattern};
use crate::stack::LanguageId;

pub struct TypeScriptLanguage;

impl LanguageDefinition for TypeScriptLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::TypeScript
    }

    fn extensions(&self) -> &[&str] {
        &["ts", "tsx", "mts", "cts"]
    }

    fn manifest_files(&self) -> &[ManifestPattern] {
        &[
            ManifestPattern {
                filename: "package.json",
            },
            ManifestPattern {
                filename: "tsconfig.json",
            },
        ]
    }

    fn excluded_dirs(&self) -> &[&str] {
        &["dist", ".next", "coverage"]
    }

    fn interpreters(&self) -> &[&str] {
        &["ts-node", "tsx"]
    }
}
