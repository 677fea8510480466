//! Non-blocking terminal poller.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::accumulator::ControlsAccumulator;
use crate::map::{map_key_event, should_quit};
use crate::types::Controls;
use crate::InputSource;

/// Drains crossterm's event queue on every poll.
///
/// A quit key is remembered rather than reported through [`Controls`]; the
/// game loop drains between ticks too, so quitting still works once the
/// craft (the only task that polls) is gone.
#[derive(Debug, Default)]
pub struct TerminalInput {
    acc: ControlsAccumulator,
    quit: bool,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Pull every queued event without waiting.
    pub fn drain(&mut self) -> std::io::Result<()> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        self.quit = true;
                    } else if let Some(intent) = map_key_event(key) {
                        self.acc.apply(intent);
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Controls {
        // The game loop drains again after rendering and propagates the
        // error there; here the tick just runs with what was read so far.
        if let Err(e) = self.drain() {
            tracing::debug!(error = %e, "input drain failed mid-tick");
        }
        self.acc.take()
    }
}
