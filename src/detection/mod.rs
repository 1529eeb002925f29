//! Component and language recognition
//!
//! Pipeline: the enumerator's file list is partitioned into component roots
//! by [`BoundaryDetector`] using [`LanguageClassifier`] scores, each root is
//! named and tagged by [`FrameworkRecognizer`], and [`ComponentAssembler`]
//! produces the final ordered [`Component`] list.

mod assembler;
mod boundary;
mod cancel;
mod classifier;
mod detector;
mod devfile;
mod recognizer;
mod types;

pub use assembler::ComponentAssembler;
pub use boundary::{BoundaryDetector, ClaimSet, ComponentRoot};
pub use cancel::CancellationToken;
pub use classifier::{parse_shebang, LanguageClassifier, MANIFEST_BONUS};
pub use detector::ComponentDetector;
pub use devfile::{select_devfile, DevfileType};
pub use recognizer::{FrameworkRecognizer, Recognition};
pub use types::{Component, LanguageMatch};
