/// Crate-level error types for apisum diagnostics.
use std::path::PathBuf;

/// All errors in apisum carry enough context to produce a useful diagnostic
/// without a debugger. Each variant names the module, attribute, or file that
/// failed and why.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An attribute walk reached an object that has no such member.
    #[error("object `{object}` has no attribute `{attribute}`")]
    AttributeNotFound {
        /// Attribute name that was looked up.
        attribute: String,
        /// Dotted name of the object the lookup ran against.
        object: String,
    },

    /// Source file exceeds the configured size limit.
    #[error("file too large ({size_bytes} bytes, max {max_bytes}): {}", file.display())]
    FileTooLarge {
        /// File that exceeded the size limit.
        file: PathBuf,
        /// Maximum allowed file size in bytes.
        max_bytes: u64,
        /// Actual file size in bytes.
        size_bytes: u64,
    },

    /// A dotted name is empty or contains an ill-formed segment.
    #[error("invalid dotted name: `{name}`")]
    InvalidName {
        /// The offending name as given.
        name: String,
    },

    /// Underlying I/O error from the filesystem.
    #[error("io: {0}")]
    Io(
        /// The wrapped I/O error.
        #[from]
        std::io::Error,
    ),

    /// JSON serialization failed.
    #[error("json serialize: {0}")]
    Json(
        /// The wrapped JSON error.
        #[from]
        serde_json::Error,
    ),

    /// No search root contains a source file for this module path.
    #[error("no module named `{module}`")]
    ModuleNotFound {
        /// Dotted module path that could not be loaded.
        module: String,
    },

    /// Tree-sitter failed to parse a source file.
    #[error("parse failed: {}: {reason}", file.display())]
    ParseFailed {
        /// File that failed to parse.
        file: PathBuf,
        /// Description of the parse failure.
        reason: String,
    },

    /// A dotted name could not be resolved under any candidate prefix.
    /// Lists every attempted candidate, in prefix order, for diagnostics.
    #[error("cannot resolve `{name}`: no module or attribute named {}", tried.join(" or "))]
    ResolutionFailed {
        /// The name as requested by the author.
        name: String,
        /// Every prefixed candidate that was attempted, in order.
        tried: Vec<String>,
    },

    /// TOML deserialization failed.
    #[error("toml deserialize: {0}")]
    TomlDe(
        /// The wrapped TOML deserialization error.
        #[from]
        toml::de::Error,
    ),
}
