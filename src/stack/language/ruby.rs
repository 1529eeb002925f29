//! Ruby language definition (Bundler)

use super::{LanguageDefinition, ManifestPattern};
use crate::stack::LanguageId;

pub struct RubyLanguage;

impl LanguageDefinition for RubyLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Ruby
    }

    fn extensions(&self) -> &[&str] {
        &["rb", "rake", "gemspec"]
    }

    fn manifest_files(&self) -> &[ManifestPattern] {
        &[
            ManifestPattern {
                filename: "Gemfile",
            },
            ManifestPattern {
                filename: "*.gemspec",
            },
        ]
    }

    fn interpreters(&self) -> &[&str] {
        &["ruby", "jruby"]
    }
}
