//! The two-stage render pipeline
//!
//! - `data`: stage A, data files rendered against the global config
//! - `processor`: stage B, directives rendered into output files
//! - `header`: the autogenerated header of every output
//! - `operation`: one planned output file
//! - `pipeline`: both stages, run in order

pub mod data;
pub mod header;
pub mod operation;
pub mod pipeline;
pub mod processor;

pub use pipeline::{Pipeline, PipelineOptions};
