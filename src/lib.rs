//! Space garbage (workspace facade crate).
//!
//! Re-exports the workspace crates under stable `space_garbage::{core,input,term,types}`
//! paths so the binary, integration tests and benches share one import root.

pub use space_garbage_core as core;
pub use space_garbage_input as input;
pub use space_garbage_term as term;
pub use space_garbage_types as types;
