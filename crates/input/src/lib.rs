//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::Controls`] and provides a
//! non-blocking poller that drains every pending event on each poll, which is
//! what the craft expects from an [`InputSource`].

pub mod accumulator;
pub mod map;
pub mod poller;

pub use space_garbage_core as core;
pub use space_garbage_core::InputSource;
pub use space_garbage_types as types;

pub use accumulator::ControlsAccumulator;
pub use map::{map_key_event, should_quit, KeyIntent};
pub use poller::TerminalInput;
