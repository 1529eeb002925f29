//! stackprobe - component and language recognition for source trees
//!
//! Given a directory, stackprobe finds the independently buildable projects
//! inside it and reports, for each one, its root, a display name, the
//! languages it is written in (ranked) and the frameworks and build tools it
//! uses. It copes with monorepos, components nested in plain directories,
//! vendored dependencies and project-supplied `.gitignore` rules.
//!
//! # Core Concepts
//!
//! - **Component**: an independently buildable project, anchored by a
//!   manifest (`pom.xml`, `package.json`, `go.mod`, ...) in its root
//! - **Language descriptor**: registry entry mapping extensions, `#!`
//!   interpreters and manifests to a language
//! - **Framework probe**: registry entry that reads manifests to attach a
//!   name, frameworks and build tools to a component
//!
//! # Example Usage
//!
//! ```no_run
//! use stackprobe::detect_components;
//!
//! # fn main() -> Result<(), stackprobe::DetectError> {
//! for component in detect_components("./my-monorepo")? {
//!     println!(
//!         "{} at {} ({})",
//!         component.name,
//!         component.root_path.display(),
//!         component.languages[0].name
//!     );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`scan`]: gitignore-aware file enumeration
//! - [`detection`]: classification, boundary detection and assembly
//! - [`stack`]: language descriptors, framework probes and their registry
//! - [`fs`]: file system abstraction used for manifest reads
//! - [`util`]: logging setup

pub mod config;
pub mod detection;
pub mod error;
pub mod fs;
pub mod scan;
pub mod stack;
pub mod util;

pub use config::{ConfigError, ScanConfig};
pub use detection::{CancellationToken, Component, ComponentDetector, DevfileType, LanguageMatch};
pub use error::DetectError;
pub use stack::{FrameworkId, LanguageId, StackRegistry};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

use std::path::{Path, PathBuf};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Detects the components under `root` with the default registry and configuration
pub fn detect_components(root: impl AsRef<Path>) -> Result<Vec<Component>, DetectError> {
    ComponentDetector::new().detect(root)
}

/// Detects the components among an explicit list of files
pub fn detect_components_from_files(files: &[PathBuf]) -> Result<Vec<Component>, DetectError> {
    ComponentDetector::new().detect_from_files(files)
}

/// Detects only a component rooted at `root` itself, not nested ones
pub fn detect_root_component(root: impl AsRef<Path>) -> Result<Vec<Component>, DetectError> {
    ComponentDetector::new().detect_root(root)
}

/// Picks the devfile from `types` that best fits the project at `root`
pub fn select_devfile<'t>(
    root: impl AsRef<Path>,
    types: &'t [DevfileType],
) -> Result<Option<&'t DevfileType>, DetectError> {
    ComponentDetector::new().select_devfile(root, types)
}

/// Lists the non-ignored regular files under `root`, sorted
pub fn enumerate_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>, DetectError> {
    ComponentDetector::new().enumerate(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_stackprobe() {
        assert_eq!(NAME, "stackprobe");
    }
}
