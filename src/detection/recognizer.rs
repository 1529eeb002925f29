use crate::fs::FileSystem;
use crate::stack::{LanguageId, ProbeContext, StackRegistry};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name, frameworks and build tools resolved for one component root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recognition {
    pub name: String,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
}

pub struct FrameworkRecognizer<'a> {
    registry: &'a StackRegistry,
    fs: &'a dyn FileSystem,
}

impl<'a> FrameworkRecognizer<'a> {
    pub fn new(registry: &'a StackRegistry, fs: &'a dyn FileSystem) -> Self {
        Self { registry, fs }
    }

    /// Runs every probe registered for `primary` against `dir`
    ///
    /// The first probe that yields a name wins; frameworks and tools from all
    /// matching probes are merged in probe order without duplicates. A probe
    /// that fails counts as no match.
    pub fn recognize(&self, dir: &Path, primary: &LanguageId, files: &[PathBuf]) -> Recognition {
        let ctx = ProbeContext::new(dir, files, self.fs);
        let mut name: Option<String> = None;
        let mut frameworks: Vec<String> = Vec::new();
        let mut tools: Vec<String> = Vec::new();

        for probe in self.registry.probes_for(primary) {
            let found = match probe.evaluate(&ctx) {
                Ok(Some(found)) => found,
                Ok(None) => continue,
                Err(e) => {
                    debug!(
                        probe = probe.id(),
                        dir = %dir.display(),
                        error = %e,
                        "Probe failed, treating as no match"
                    );
                    continue;
                }
            };
            debug!(probe = probe.id(), dir = %dir.display(), ?found, "Probe matched");

            if name.is_none() {
                name = found.name;
            }
            push_unique(&mut frameworks, found.frameworks);
            push_unique(&mut tools, found.tools);
        }

        Recognition {
            name: name.unwrap_or_else(|| directory_name(dir)),
            frameworks,
            tools,
        }
    }
}

fn push_unique(target: &mut Vec<String>, items: Vec<String>) {
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}

fn directory_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.to_string_lossy().into_owned())
}
