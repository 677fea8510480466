//! Short fixed animation played where an obstacle was destroyed.

use crate::canvas::draw_frame;
use crate::frame::frame_size;
use crate::scheduler::{Step, Task, TaskKind, TickContext};

pub const EXPLOSION_FRAMES: [&str; 4] = [
    "           (_)\n       (  (   (  (\n      () (  (  )\n        ( )  ()\n",
    "           (_)\n       (  (   (\n         (  (  )\n          )  (\n",
    "            (\n          (   (\n         (     (\n          )  (\n",
    "            (\n              (\n            (\n",
];

pub struct Explosion {
    center_row: i32,
    center_column: i32,
    hold: u32,
    next: usize,
    shown: Option<usize>,
    remaining: u32,
}

impl Explosion {
    pub fn new(center_row: i32, center_column: i32, hold: u32) -> Self {
        Self {
            center_row,
            center_column,
            hold: hold.max(1),
            next: 0,
            shown: None,
            remaining: 0,
        }
    }

    pub fn center(&self) -> (i32, i32) {
        (self.center_row, self.center_column)
    }

    fn corner(&self, text: &str) -> (i32, i32) {
        let (rows, columns) = frame_size(text);
        (
            self.center_row - rows as i32 / 2,
            self.center_column - columns as i32 / 2,
        )
    }
}

impl Task for Explosion {
    fn kind(&self) -> TaskKind {
        TaskKind::Explosion
    }

    fn resume(&mut self, ctx: &mut TickContext<'_>) -> Step {
        if self.remaining == 0 {
            if let Some(index) = self.shown.take() {
                let text = EXPLOSION_FRAMES[index];
                let (row, column) = self.corner(text);
                draw_frame(ctx.canvas, row, column, text, true);
            }
            let Some(text) = EXPLOSION_FRAMES.get(self.next) else {
                return Step::Finished;
            };
            let (row, column) = self.corner(text);
            draw_frame(ctx.canvas, row, column, text, false);
            self.shown = Some(self.next);
            self.next += 1;
            self.remaining = self.hold;
        }
        self.remaining -= 1;
        Step::Suspended
    }
}
