//! Extension traits for built-in Rust types.
//!
//! Each extension trait lives in its own file named after the type it extends.

pub mod path;

pub use path::PathExt;
