//! Stack registry for languages and framework probes.
//!
//! Type-safe registry with strongly-typed identifiers (`LanguageId`,
//! `FrameworkId`). Language descriptors and probes are data: the detection
//! core only ever talks to them through `StackRegistry`.
//!
//! # Custom Variants
//!
//! Both ID enums carry a `Custom(String)` variant so that descriptors
//! registered at runtime can name languages the defaults do not know.
//!
//! # Example
//!
//! ```no_run
//! use stackprobe::stack::{LanguageId, StackRegistry};
//!
//! let registry = StackRegistry::with_defaults();
//! let candidates = registry.languages_for_extension("kt");
//! assert_eq!(candidates[0].id(), LanguageId::Kotlin);
//! assert!(registry.is_manifest("pom.xml"));
//! ```

#[macro_use]
pub mod id_enum_macro;

pub mod framework;
pub mod framework_id;
pub mod language;
pub mod language_id;
pub mod registry;

pub use framework::{FrameworkProbe, ProbeContext, ProbeMatch};
pub use framework_id::FrameworkId;
pub use language::{LanguageDefinition, ManifestPattern};
pub use language_id::LanguageId;
pub use registry::StackRegistry;
