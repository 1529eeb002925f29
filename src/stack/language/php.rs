//! PHP language definition (Composer)

use super::{LanguageDefinition, ManifestPattern};
use crate::stack::LanguageId;

pub struct PhpLanguage;

impl LanguageDefinition for PhpLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Php
    }

    fn extensions(&self) -> &[&str] {
        &["php", "phtml"]
    }

    fn manifest_files(&self) -> &[ManifestPattern] {
        &[ManifestPattern {
            filename: "composer.json",
        }]
    }

    fn interpreters(&self) -> &[&str] {
        &["php"]
    }
}
