//! Snag - a code-smell detection engine for Ruby source.
//!
//! This is the main library crate that re-exports functionality from the
//! component crates in the workspace.

// Re-export core functionality
pub use snag_core as core;

// Re-export other major components
pub use snag_ast as ast;
pub use snag_config as config;
pub use snag_contexts as contexts;
pub use snag_detectors as detectors;
pub use snag_examine as examine;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
