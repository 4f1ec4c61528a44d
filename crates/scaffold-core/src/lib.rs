//! Scaffold Core - derivation engine for Pulsar/Atom package scaffolds
//!
//! This library turns one immutable answer record into a coherent set of
//! configuration documents: the package manifest, dependency lists, build
//! and lint scripts, formatter options, and the pre-commit task map.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Derivation** - Pure functions over an [`AnswerRecord`]
//!   (dependency resolution, script/manifest/lint-staged composition,
//!   formatter presets). No state, no I/O, no logging.
//! - **Layer 2: Templates** - Path resolution, placeholder rendering, and
//!   scaffold writing for the derived documents.
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated) that collect the answers interactively.
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt flow
//!
//! # Example Usage (without TUI)
//!
//! ```
//! use scaffold_core::{derive_bundle, AnswerRecord, DerivedFields, Feature, SpdxRegistry};
//!
//! let answers = AnswerRecord {
//!     name: "my-package".to_string(),
//!     license: "MIT".to_string(),
//!     features: vec![Feature::Keymaps],
//!     ..Default::default()
//! };
//! let derived = DerivedFields::from_answers(&answers, &SpdxRegistry);
//! let bundle = derive_bundle(&answers, &derived);
//! assert!(bundle.manifest.main.is_none());
//! ```

pub mod answers;
pub mod config;
pub mod error;
pub mod license;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{
    ActivationHook, AnswerRecord, Bundler, DerivedFields, Feature, Language, PackageManager,
};
pub use config::{derive_bundle, BabelConfig, DerivedConfigBundle, PackageManifest, PrettierOptions};
pub use error::ScaffoldError;
pub use license::{collapse_blank_lines, LicenseInfo, LicenseRegistry, SpdxRegistry};

#[cfg(feature = "tui")]
pub use tui::{run, CreateArgs};
