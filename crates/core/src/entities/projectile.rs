//! Shot fired by the player craft.
//!
//! Flashes at the muzzle for two ticks, beeps once, then flies at constant
//! speed until it leaves the interior or lands inside an obstacle footprint.
//! A hit only flags the obstacle; the obstacle plays its own explosion on its
//! next resume.

use crate::scheduler::{Step, Task, TaskKind, TickContext};
use crate::types::Brightness;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Spark,
    Flash,
    Flying,
}

pub struct Projectile {
    row: f64,
    column: f64,
    row_speed: f64,
    column_speed: f64,
    stage: Option<Stage>,
}

impl Projectile {
    pub fn new(row: f64, column: f64, row_speed: f64, column_speed: f64) -> Self {
        Self {
            row,
            column,
            row_speed,
            column_speed,
            stage: None,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    fn cell(&self) -> (i32, i32) {
        (self.row.round() as i32, self.column.round() as i32)
    }

    fn body(&self) -> char {
        if self.column_speed != 0.0 {
            '-'
        } else {
            '|'
        }
    }
}

impl Task for Projectile {
    fn kind(&self) -> TaskKind {
        TaskKind::Projectile
    }

    fn resume(&mut self, ctx: &mut TickContext<'_>) -> Step {
        let (row, column) = self.cell();
        match self.stage {
            None => {
                ctx.canvas.draw(row, column, '*', Brightness::Normal);
                self.stage = Some(Stage::Spark);
                return Step::Suspended;
            }
            Some(Stage::Spark) => {
                ctx.canvas.draw(row, column, 'O', Brightness::Normal);
                self.stage = Some(Stage::Flash);
                return Step::Suspended;
            }
            Some(Stage::Flash) | Some(Stage::Flying) => {
                if self.stage == Some(Stage::Flash) {
                    ctx.world.ring_bell();
                }
                ctx.canvas.erase(row, column);
                self.row += self.row_speed;
                self.column += self.column_speed;
                self.stage = Some(Stage::Flying);
            }
        }

        let (rows, columns) = ctx.dimensions();
        let inside = 0.0 < self.row
            && self.row < f64::from(rows - 1)
            && 0.0 < self.column
            && self.column < f64::from(columns - 1);
        if !inside {
            return Step::Finished;
        }

        let (row, column) = self.cell();
        if let Some(id) = ctx.world.collisions.obstacle_at(row, column) {
            ctx.world.flag_hit(id);
            return Step::Finished;
        }

        ctx.canvas.draw(row, column, self.body(), Brightness::Normal);
        Step::Suspended
    }
}
