//! Condensed API summary tables for Python packages.
//!
//! apisum resolves the dotted names a documentation author writes
//! (`pkg.mod.Class.method`) against package source trees, compacts call
//! signatures to a display budget, and extracts one-sentence docstring
//! summaries — the raw material of an API summary table. The crate is
//! UI-agnostic; the bundled CLI is one thin consumer.
//!
//! The pipeline, per entry: [`resolver::resolve`] pins a dotted name to an
//! object under the first matching prefix, [`signature::compact_signature`]
//! shrinks its parameter list, and [`summary::extract_summary`] pulls the
//! first markup-safe sentence of its docstring. [`table::build_items`]
//! drives all three and degrades gracefully when a name doesn't resolve.

/// CLI command bodies.
pub mod commands;
/// Project configuration (`.apisum.toml`).
pub mod config;
/// Error types exposed by the crate.
pub mod error;
/// Budget-aware string joining.
pub mod join;
/// Module loading: dotted paths to parsed object trees.
pub mod loader;
/// Markup assessment seam for summary extraction.
pub mod markup;
/// The transient program-object model.
pub mod object;
/// Dotted-name resolution under candidate prefixes.
pub mod resolver;
/// Call-signature compaction.
pub mod signature;
/// First-sentence docstring summaries.
pub mod summary;
/// Summary-row assembly.
pub mod table;

pub use crate::error::Error;
pub use crate::join::join_bounded;
pub use crate::loader::{FsModuleLoader, ModuleLoader};
pub use crate::markup::{MarkdownAssessor, MarkupAssessment, MarkupParser};
pub use crate::object::{Object, ObjectKind, ResolvedName};
pub use crate::resolver::{import_prefixes, resolve};
pub use crate::signature::compact_signature;
pub use crate::summary::extract_summary;
pub use crate::table::{ItemRow, build_items};
