//! Space garbage falling from the top edge.
//!
//! While its frame is on screen the obstacle's footprint is registered in the
//! collision index; erasing the frame always removes it again. A projectile
//! that lands inside the footprint flags the obstacle, and the obstacle
//! resolves the flag on its first resume of a later tick: it clears itself,
//! hands off to an [`Explosion`] and finishes.

use std::rc::Rc;

use crate::canvas::draw_frame;
use crate::entities::Explosion;
use crate::frame::Frame;
use crate::scheduler::{Step, Task, TaskKind, TickContext};
use crate::types::{ObstacleId, Rect};

pub struct Obstacle {
    id: ObstacleId,
    frame: Rc<Frame>,
    row: f64,
    column: i32,
    speed: f64,
    drawn: Option<Rect>,
}

impl Obstacle {
    pub fn new(id: ObstacleId, frame: Rc<Frame>, column: i32, speed: f64) -> Self {
        Self {
            id,
            frame,
            row: 0.0,
            column,
            speed,
            drawn: None,
        }
    }

    pub fn id(&self) -> ObstacleId {
        self.id
    }

    fn erase(&mut self, ctx: &mut TickContext<'_>, rect: Rect) {
        draw_frame(ctx.canvas, rect.row, rect.column, self.frame.text(), true);
        ctx.world.collisions.remove(self.id);
        self.drawn = None;
    }
}

impl Task for Obstacle {
    fn kind(&self) -> TaskKind {
        TaskKind::Obstacle(self.id)
    }

    fn resume(&mut self, ctx: &mut TickContext<'_>) -> Step {
        if let Some(rect) = self.drawn {
            if ctx.world.is_flagged(self.id) {
                // Struck earlier in this same tick: stay put until the next one.
                if !ctx.world.take_hit(self.id) {
                    return Step::Suspended;
                }
                self.erase(ctx, rect);
                let (row, column) = rect.center();
                let hold = ctx.world.config().explosion_frame_ticks;
                tracing::debug!(obstacle = self.id.0, row, column, "obstacle destroyed");
                ctx.spawn(Explosion::new(row, column, hold));
                return Step::Finished;
            }
            self.erase(ctx, rect);
            self.row += self.speed;
        }

        let (rows, _) = ctx.dimensions();
        if self.row >= f64::from(rows) {
            return Step::Finished;
        }

        let row = self.row.round() as i32;
        draw_frame(ctx.canvas, row, self.column, self.frame.text(), false);
        let rect = Rect::new(
            row,
            self.column,
            self.frame.rows() as i32,
            self.frame.columns() as i32,
        );
        ctx.world.collisions.insert(self.id, rect);
        self.drawn = Some(rect);
        Step::Suspended
    }
}
