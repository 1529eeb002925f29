//! Elixir language definition (Mix)

use super::{LanguageDefinition, ManifestPattern};
use crate::stack::LanguageId;

pub struct ElixirLanguage;

impl LanguageDefinition for ElixirLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Elixir
    }

    fn extensions(&self) -> &[&str] {
        &["ex", "exs"]
    }

    fn manifest_files(&self) -> &[ManifestPattern] {
        &[ManifestPattern {
            filename: "mix.exs",
        }]
    }

    fn excluded_dirs(&self) -> &[&str] {
        &["_build", "deps"]
    }

    fn interpreters(&self) -> &[&str] {
        &["elixir"]
    }
}
