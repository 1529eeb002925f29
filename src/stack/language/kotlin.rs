//! Kotlin language definition
//!
//! Kotlin shares its build manifests with Java; the classifier awards them
//! to whichever of the two has source files in the directory.

use super::{LanguageDefinition, ManifestPattern};
use crate::stack::LanguageId;

pub struct KotlinLanguage;

impl LanguageDefinition for KotlinLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Kotlin
    }

    fn extensions(&self) -> &[&str] {
        &["kt", "kts", "ktm"]
    }

    fn manifest_files(&self) -> &[ManifestPattern] {
        &[
            ManifestPattern {
                filename: "pom.xml",
            },
            ManifestPattern {
                filename: "build.gradle",
            },
            ManifestPattern {
                filename: "build.gradle.kts",
            },
        ]
    }

    fn excluded_dirs(&self) -> &[&str] {
        &["target", "build"]
    }

    fn interpreters(&self) -> &[&str] {
        &["kotlin"]
    }
}
