/// Handles argument parsing.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Shared constants.
pub mod constants;

/// Extension traits for std types.
pub mod ext;

/// Template environment, compiled template cache and template helpers.
pub mod renderer;

/// Sources configs and templates are read from.
pub mod loader;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Data file processing and output rendering.
pub mod template;

/// Config model and merge rules.
pub mod config;
