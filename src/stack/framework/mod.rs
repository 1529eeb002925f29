//! Framework and tool probes
//!
//! A probe inspects the manifests sitting directly in a component root and
//! reports a display name, frameworks and build tools. Probes are plain data
//! tables evaluated in registry order; adding an ecosystem means adding rows,
//! the recognizer never changes.

mod dependency;
mod naming;
mod tooling;

pub use dependency::{default_dependency_probes, DependencyTokenProbe};
pub use naming::{default_name_probes, ManifestNameProbe};
pub use tooling::{
    default_tool_probes, BuildToolProbe, DotNetTargetFrameworkProbe, GoVersionProbe,
    NodePackageManagerProbe,
};

use crate::fs::FileSystem;
use crate::stack::language::filename_matches;
use crate::stack::LanguageId;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// What a probe gets to look at
pub struct ProbeContext<'a> {
    pub dir: &'a Path,
    /// Every file of the component, including nested ones
    pub files: &'a [PathBuf],
    pub fs: &'a dyn FileSystem,
}

impl<'a> ProbeContext<'a> {
    pub fn new(dir: &'a Path, files: &'a [PathBuf], fs: &'a dyn FileSystem) -> Self {
        Self { dir, files, fs }
    }

    /// Files directly inside `dir` whose name matches `pattern` (`*` prefix = suffix match)
    pub fn direct_matches(&self, pattern: &str) -> Vec<&'a Path> {
        self.files
            .iter()
            .filter(|f| f.parent() == Some(self.dir))
            .filter(|f| {
                f.file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| filename_matches(pattern, n))
                    .unwrap_or(false)
            })
            .map(PathBuf::as_path)
            .collect()
    }

    pub fn has(&self, pattern: &str) -> bool {
        !self.direct_matches(pattern).is_empty()
    }

    pub fn read(&self, path: &Path) -> Result<String> {
        self.fs.read_to_string(path)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeMatch {
    pub name: Option<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
}

impl ProbeMatch {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn framework(framework: impl Into<String>) -> Self {
        Self {
            frameworks: vec![framework.into()],
            ..Self::default()
        }
    }

    pub fn tool(tool: impl Into<String>) -> Self {
        Self {
            tools: vec![tool.into()],
            ..Self::default()
        }
    }
}

pub trait FrameworkProbe: Send + Sync {
    /// Short identifier used in logs
    fn id(&self) -> &str;

    /// Primary languages this probe applies to
    fn languages(&self) -> &[LanguageId];

    /// `Ok(None)` means the probe found nothing; `Err` is a malformed or
    /// unreadable manifest, which callers treat the same way after logging it.
    fn evaluate(&self, ctx: &ProbeContext<'_>) -> Result<Option<ProbeMatch>>;

    fn applies_to(&self, language: &LanguageId) -> bool {
        self.languages().contains(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    #[test]
    fn test_direct_matches_ignores_nested_files() {
        let fs = MockFileSystem::new();
        let dir = PathBuf::from("/mock/app");
        let files = vec![
            dir.join("app.csproj"),
            dir.join("tests/tests.csproj"),
            dir.join("Program.cs"),
        ];
        let ctx = ProbeContext::new(&dir, &files, &fs);

        let project = dir.join("app.csproj");
        assert_eq!(ctx.direct_matches("*.csproj"), vec![project.as_path()]);
        assert!(ctx.has("Program.cs"));
        assert!(!ctx.has("tests.csproj"));
    }
}
