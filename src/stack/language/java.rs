//! Java language definition (Maven, Gradle and Ant)

use super::{LanguageDefinition, ManifestPattern};
use crate::stack::LanguageId;

pub struct JavaLanguage;

impl LanguageDefinition for JavaLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Java
    }

    fn extensions(&self) -> &[&str] {
        &["java", "jav"]
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
            ManifestPattern {
                filename: "build.xml",
            },
        ]
    }

    fn excluded_dirs(&self) -> &[&str] {
        &["target", "build", ".m2"]
    }
}
