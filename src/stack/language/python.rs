//! Python language definition (pip, Poetry, Pipenv)

use super::{LanguageDefinition, ManifestPattern};
use crate::stack::LanguageId;

pub struct PythonLanguage;

impl LanguageDefinition for PythonLanguage {
    fn id(&self) -> LanguageId {
        LanguageId::Python
    }

    fn extensions(&self) -> &[&str] {
        &["py", "pyw", "pyi"]
    }

    fn manifest_files(&self) -> &[ManifestPattern] {
        &[
            ManifestPattern {
                filename: "requirements.txt",
            },
            ManifestPattern {
                filename: "setup.py",
            },
            ManifestPattern {
                filename: "setup.cfg",
            },
            ManifestPattern {
                filename: "pyproject.toml",
            },
            ManifestPattern {
                filename: "Pipfile",
            },
            ManifestPattern {
                filename: "manage.py",
            },
        ]
    }

    fn excluded_dirs(&self) -> &[&str] {
        &[".mypy_cache", ".pytest_cache", "dist", "build"]
    }

    fn interpreters(&self) -> &[&str] {
        &["python", "pypy"]
    }
}
