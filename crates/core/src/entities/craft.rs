//! The player-controlled craft.

use std::rc::Rc;

use crate::canvas::draw_frame;
use crate::entities::{GameOverBanner, Projectile};
use crate::frame::Frame;
use crate::motion::{self, Bounds};
use crate::scheduler::{Step, Task, TaskKind, TickContext};
use crate::types::Velocity;

#[derive(Debug, Clone, Copy)]
struct Drawn {
    row: i32,
    column: i32,
    frame: usize,
}

pub struct Craft {
    frames: Rc<[Frame]>,
    repeat: u32,
    height: i32,
    width: i32,
    row: i32,
    column: i32,
    velocity: Velocity,
    shown: u64,
    drawn: Option<Drawn>,
}

impl Craft {
    /// `frames` must not be empty; each frame is held for `repeat` ticks.
    pub fn new(frames: Rc<[Frame]>, repeat: u32, row: i32, column: i32) -> Self {
        let height = frames.iter().map(Frame::rows).max().unwrap_or(0) as i32;
        let width = frames.iter().map(Frame::columns).max().unwrap_or(0) as i32;
        Self {
            frames,
            repeat: repeat.max(1),
            height,
            width,
            row,
            column,
            velocity: Velocity::ZERO,
            shown: 0,
            drawn: None,
        }
    }

    pub fn size(&self) -> (i32, i32) {
        (self.height, self.width)
    }

    pub fn position(&self) -> (i32, i32) {
        (self.row, self.column)
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    fn frame_index(&self) -> usize {
        (self.shown / u64::from(self.repeat)) as usize % self.frames.len()
    }

    fn muzzle(&self) -> (f64, f64) {
        (f64::from(self.row), f64::from(self.column + self.width / 2))
    }
}

impl Task for Craft {
    fn kind(&self) -> TaskKind {
        TaskKind::Craft
    }

    fn resume(&mut self, ctx: &mut TickContext<'_>) -> Step {
        if let Some(prev) = self.drawn.take() {
            let controls = ctx.input.poll();
            draw_frame(
                ctx.canvas,
                prev.row,
                prev.column,
                self.frames[prev.frame].text(),
                true,
            );

            let config = ctx.world.config();
            self.velocity = motion::advance(
                self.velocity,
                controls,
                config.acceleration,
                config.speed_limits,
            );
            let (rows, columns) = ctx.dimensions();
            let bounds = Bounds::interior(rows, columns, self.height, self.width);
            (self.row, self.column) = motion::integrate(self.row, self.column, self.velocity, bounds);

            if controls.fire && ctx.world.weapon_unlocked() {
                let (row, column) = self.muzzle();
                let config = ctx.world.config();
                let (row_speed, column_speed) =
                    (config.projectile_row_speed, config.projectile_column_speed);
                ctx.spawn(Projectile::new(row, column, row_speed, column_speed));
            }

            if ctx
                .world
                .collisions
                .overlaps(self.row, self.column, self.height, self.width)
            {
                tracing::debug!(row = self.row, column = self.column, "craft destroyed");
                if ctx.world.claim_banner() {
                    ctx.spawn(GameOverBanner);
                }
                return Step::Finished;
            }
        } else {
            let (rows, columns) = ctx.dimensions();
            let bounds = Bounds::interior(rows, columns, self.height, self.width);
            (self.row, self.column) = bounds.clamp(self.row, self.column);
        }

        let frame = self.frame_index();
        draw_frame(
            ctx.canvas,
            self.row,
            self.column,
            self.frames[frame].text(),
            false,
        );
        self.drawn = Some(Drawn {
            row: self.row,
            column: self.column,
            frame,
        });
        self.shown += 1;
        Step::Suspended
    }
}
