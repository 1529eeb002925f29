//! Language descriptors
//!
//! A descriptor maps file extensions, `#!` interpreters and marker files
//! (manifests) to a language. Descriptors carry no scoring logic; the
//! classifier turns their data into evidence.

mod cpp;
mod dotnet;
mod elixir;
mod go;
mod java;
mod javascript;
mod kotlin;
mod php;
mod python;
mod ruby;
mod rust;
mod typescript;

pub use cpp::CppLanguage;
pub use dotnet::{CSharpLanguage, FSharpLanguage, VisualBasicLanguage};
pub use elixir::ElixirLanguage;
pub use go::GoLanguage;
pub use java::JavaLanguage;
pub use javascript::JavaScriptLanguage;
pub use kotlin::KotlinLanguage;
pub use php::PhpLanguage;
pub use python::PythonLanguage;
pub use ruby::RubyLanguage;
pub use rust::RustLanguage;
pub use typescript::TypeScriptLanguage;

use crate::stack::LanguageId;

/// Pattern for matching manifest files
///
/// A leading `*` matches by suffix (`*.csproj`), anything else must equal
/// the file name exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestPattern {
    pub filename: &'static str,
}

impl ManifestPattern {
    pub fn matches(&self, file_name: &str) -> bool {
        filename_matches(self.filename, file_name)
    }
}

pub(crate) fn filename_matches(pattern: &str, file_name: &str) -> bool {
    match pattern.strip_prefix('*') {
        Some(suffix) => file_name.len() > suffix.len() && file_name.ends_with(suffix),
        None => file_name == pattern,
    }
}

pub trait LanguageDefinition: Send + Sync {
    fn id(&self) -> LanguageId;

    /// File extensions without the leading dot
    fn extensions(&self) -> &[&str];

    /// Marker files whose presence anchors a component of this language
    fn manifest_files(&self) -> &[ManifestPattern];

    /// Directories whose files carry no weight for this language (build output)
    fn excluded_dirs(&self) -> &[&str] {
        &[]
    }

    /// Interpreter names recognised in `#!` lines of extension-less files
    fn interpreters(&self) -> &[&str] {
        &[]
    }

    fn can_be_component(&self) -> bool {
        true
    }

    fn aliases(&self) -> Vec<String> {
        self.id().aliases().iter().map(|a| a.to_lowercase()).collect()
    }

    fn is_manifest(&self, file_name: &str) -> bool {
        self.manifest_files().iter().any(|m| m.matches(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_pattern() {
        let pattern = ManifestPattern {
            filename: "pom.xml",
        };
        assert!(pattern.matches("pom.xml"));
        assert!(!pattern.matches("my-pom.xml"));
    }

    #[test]
    fn test_suffix_pattern() {
        let pattern = ManifestPattern {
            filename: "*.csproj",
        };
        assert!(pattern.matches("app.csproj"));
        assert!(!pattern.matches(".csproj"));
        assert!(!pattern.matches("app.fsproj"));
    }

    #[test]
    fn test_default_aliases_are_lowercase() {
        let aliases = JavaScriptLanguage.aliases();
        assert!(aliases.contains(&"node".to_string()));
        assert!(aliases.iter().all(|a| a.chars().all(|c| !c.is_uppercase())));
    }
}
