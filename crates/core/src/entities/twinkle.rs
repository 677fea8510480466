//! Background star that cycles through brightness phases forever.

use crate::config::TwinkleTiming;
use crate::scheduler::{Step, Task, TaskKind, TickContext};
use crate::types::Brightness;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Dim,
    NormalUp,
    Bright,
    NormalDown,
}

impl Phase {
    fn next(self) -> Self {
        match self {
            Phase::Dim => Phase::NormalUp,
            Phase::NormalUp => Phase::Bright,
            Phase::Bright => Phase::NormalDown,
            Phase::NormalDown => Phase::Dim,
        }
    }

    pub fn brightness(self) -> Brightness {
        match self {
            Phase::Dim => Brightness::Dim,
            Phase::NormalUp | Phase::NormalDown => Brightness::Normal,
            Phase::Bright => Brightness::Bold,
        }
    }

    fn hold(self, timing: &TwinkleTiming) -> u32 {
        let ticks = match self {
            Phase::Dim => timing.dim,
            Phase::NormalUp | Phase::NormalDown => timing.normal,
            Phase::Bright => timing.bright,
        };
        ticks.max(1)
    }
}

pub struct Twinkle {
    row: i32,
    column: i32,
    glyph: char,
    timing: TwinkleTiming,
    phase: Phase,
    remaining: u32,
    redraw: bool,
}

impl Twinkle {
    /// A star starting in its dim phase, held for `first_dim_ticks` instead
    /// of the configured dim length so neighbouring stars drift apart.
    pub fn new(
        row: i32,
        column: i32,
        glyph: char,
        timing: TwinkleTiming,
        first_dim_ticks: u32,
    ) -> Self {
        Self {
            row,
            column,
            glyph,
            timing,
            phase: Phase::Dim,
            remaining: first_dim_ticks.max(1),
            redraw: true,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn position(&self) -> (i32, i32) {
        (self.row, self.column)
    }
}

impl Task for Twinkle {
    fn kind(&self) -> TaskKind {
        TaskKind::Twinkle
    }

    fn resume(&mut self, ctx: &mut TickContext<'_>) -> Step {
        if self.remaining == 0 {
            self.phase = self.phase.next();
            self.remaining = self.phase.hold(&self.timing);
            self.redraw = true;
        }
        if self.redraw {
            ctx.canvas
                .draw(self.row, self.column, self.glyph, self.phase.brightness());
            self.redraw = false;
        }
        self.remaining -= 1;
        Step::Suspended
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::harness::Harness;

    #[test]
    fn phases_advance_in_order_and_never_finish() {
        let timing = TwinkleTiming {
            dim: 1,
            normal: 1,
            bright: 1,
        };
        let mut h = Harness::new(5, 5);
        let mut star = Twinkle::new(2, 3, '+', timing, 1);
        assert_eq!(star.position(), (2, 3));
        assert_eq!(star.phase(), Phase::Dim);

        let mut phases = Vec::new();
        for _ in 0..5 {
            assert_eq!(h.step(&mut star), Step::Suspended);
            phases.push(star.phase());
        }
        assert_eq!(
            phases,
            [
                Phase::Dim,
                Phase::NormalUp,
                Phase::Bright,
                Phase::NormalDown,
                Phase::Dim
            ]
        );
        assert_eq!(h.canvas.cell(2, 3), Some(('+', Brightness::Dim)));
    }
}
