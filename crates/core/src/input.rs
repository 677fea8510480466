//! Input capability consumed by the player craft.

use std::collections::VecDeque;

use crate::types::Controls;

/// Non-blocking source of player intent.
///
/// `poll` returns everything gathered since the previous poll and never waits.
pub trait InputSource {
    fn poll(&mut self) -> Controls;
}

/// Replays a fixed sequence of polls, then reports idle forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<Controls>,
    polls: u64,
}

impl ScriptedInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn new(script: impl IntoIterator<Item = Controls>) -> Self {
        Self {
            queue: script.into_iter().collect(),
            polls: 0,
        }
    }

    pub fn push(&mut self, controls: Controls) {
        self.queue.push_back(controls);
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Controls {
        self.polls += 1;
        self.queue.pop_front().unwrap_or_default()
    }
}
