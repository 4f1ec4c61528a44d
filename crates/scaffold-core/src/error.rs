//! Error types for the derivation engine
//!
//! Every error here is a synchronous caller-input bug: nothing is retried
//! or suppressed, and the core never logs - it only returns.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaffoldError {
    /// A language value outside {coffeescript, javascript, typescript}
    #[error("Unsupported language: '{0}'")]
    UnsupportedLanguage(String),

    /// A bundler value outside {rollup, webpack}
    #[error("Unsupported bundler: '{0}'")]
    UnsupportedBundler(String),

    /// Any other enumerated answer field with an unknown value
    #[error("Unsupported {field}: '{value}'")]
    UnsupportedSelection {
        field: &'static str,
        value: String,
    },

    /// Neither a language-specific nor a shared template exists for a key
    #[error("No template found for '{0}'")]
    TemplateNotFound(String),

    /// Tracking id does not match the `UA-XXXX-X` pattern
    #[error("Invalid tracking id: '{0}' (expected the form UA-XXXX-X)")]
    InvalidTrackingId(String),
}
