//! Requirement detection.
//!
//! Locates the external tools the bootstrapper depends on.
//!
//! # Modules
//!
//! - [`probe`] - Executable lookup on PATH and well-known install prefixes

pub mod probe;

pub use probe::{resolve_tool_path, search_path};
