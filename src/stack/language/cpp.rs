//! C/C++ language definition (CMake, Meson, Conan, vcpkg)

use super::{LanguageDefinition, ManifestPattern};
use crate::stack::LanguageId;

pub struct CppLanguage;

impl LanguageDefinition for CppLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Cpp
    }

    fn extensions(&self) -> &[&str] {
        &["c", "h", "cpp", "cc", "cxx", "hpp", "hh", "hxx"]
    }

    fn manifest_files(&self) -> &[ManifestPattern] {
        &[
            ManifestPattern {
                filename: "CMakeLists.txt",
            },
            ManifestPattern {
                filename: "meson.build",
            },
            ManifestPattern {
                filename: "conanfile.txt",
            },
            ManifestPattern {
                filename: "vcpkg.json",
            },
        ]
    }

    fn excluded_dirs(&self) -> &[&str] {
        &["build", "cmake-build-debug", "cmake-build-release"]
    }
}
