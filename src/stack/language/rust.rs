//! Rust language definition (Cargo)

use super::{LanguageDefinition, ManifestPattern};
use crate::stack::LanguageId;

pub struct RustLanguage;

impl LanguageDefinition for RustLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Rust
    }

    fn extensions(&self) -> &[&str] {
        &["rs"]
    }

    fn manifest_files(&self) -> &[ManifestPattern] {
        &[ManifestPattern {
            filename: "Cargo.toml",
        }]
    }

    fn excluded_dirs(&self) -> &[&str] {
        &["target"]
    }
}
