//! Terminal rendering layer.
//!
//! The simulation draws into a [`FrameBuffer`] through the core `Canvas`
//! capability; [`TerminalRenderer`] flushes it to the real terminal, writing
//! only the runs of cells that changed since the previous frame.

pub mod fb;
pub mod renderer;

pub use space_garbage_core as core;
pub use space_garbage_types as types;

pub use fb::{Cell, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
