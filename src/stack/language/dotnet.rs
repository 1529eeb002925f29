//! .NET language definitions
//!
//! Each .NET language is anchored by its own project file type, so a C#
//! project never claims a sibling F# project's evidence.

use super::{LanguageDefinition, ManifestPattern};
use crate::stack::LanguageId;

const DOTNET_EXCLUDED: &[&str] = &["bin", "obj", "packages"];

pub struct CSharpLanguage;

impl LanguageDefinition for CSharpLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::CSharp
    }

    fn extensions(&self) -> &[&str] {
        &["cs", "csx"]
    }

    fn manifest_files(&self) -> &[ManifestPattern] {
        &[ManifestPattern {
            filename: "*.csproj",
        }]
    }

    fn excluded_dirs(&self) -> &[&str] {
        DOTNET_EXCLUDED
    }

    fn interpreters(&self) -> &[&str] {
        &["dotnet-script"]
    }
}

pub struct FSharpLanguage;

impl LanguageDefinition for FSharpLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::FSharp
    }

    fn extensions(&self) -> &[&str] {
        &["fs", "fsi", "fsx"]
    }

    fn manifest_files(&self) -> &[ManifestPattern] {
        &[ManifestPattern {
            filename: "*.fsproj",
        }]
    }

    fn excluded_dirs(&self) -> &[&str] {
        DOTNET_EXCLUDED
    }
}

pub struct VisualBasicLanguage;

impl LanguageDefinition for VisualBasicLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::VisualBasic
    }

    fn extensions(&self) -> &[&str] {
        &["vb", "vbs"]
    }

    fn manifest_files(&self) -> &[ManifestPattern] {
        &[ManifestPattern {
            filename: "*.vbproj",
        }]
    }

    fn excluded_dirs(&self) -> &[&str] {
        DOTNET_EXCLUDED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_files_are_language_specific() {
        assert!(CSharpLanguage.is_manifest("app.csproj"));
        assert!(!CSharpLanguage.is_manifest("app.fsproj"));
        assert!(FSharpLanguage.is_manifest("net-fsharp.fsproj"));
        assert!(VisualBasicLanguage.is_manifest("net-vb.vbproj"));
        assert!(!VisualBasicLanguage.is_manifest("solution.sln"));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CSharpLanguage.id().name(), "C#");
        assert_eq!(FSharpLanguage.id().name(), "F#");
        assert_eq!(VisualBasicLanguage.id().name(), "Visual Basic .NET");
    }

    #[test]
    fn test_build_output_excluded() {
        assert!(CSharpLanguage.excluded_dirs().contains(&"obj"));
        assert!(FSharpLanguage.excluded_dirs().contains(&"bin"));
    }
}
