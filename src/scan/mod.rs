//! File enumeration
//!
//! [`FileEnumerator`] walks a tree with `ignore::WalkBuilder` and yields the
//! regular files that nested `.gitignore` files and [`DefaultIgnores`] leave
//! in. [`IgnoreRules`] evaluates the same layers one path at a time to name
//! the rule that hides a file.

pub mod ignore;
mod walker;

pub use self::ignore::{DefaultIgnores, IgnoreRule, IgnoreRules, DEFAULT_IGNORED_DIRS};
pub use walker::FileEnumerator;
