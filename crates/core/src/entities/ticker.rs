//! Status line showing the current year and its headline.

use crate::scheduler::{Step, Task, TaskKind, TickContext};

const STATUS_COLUMN: i32 = 2;

#[derive(Debug, Default)]
pub struct YearTicker {
    last_len: usize,
}

impl YearTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_line(year: u32, phrase: Option<&str>) -> String {
        format!("Year {year} {}", phrase.unwrap_or(""))
    }
}

impl Task for YearTicker {
    fn kind(&self) -> TaskKind {
        TaskKind::YearTicker
    }

    fn resume(&mut self, ctx: &mut TickContext<'_>) -> Step {
        let year = ctx.world.year();
        let text = Self::status_line(year, ctx.world.config().scenario.phrase_for(year));

        // Last interior row, just above the bottom border.
        let (rows, _) = ctx.dimensions();
        let row = rows - 2;
        for offset in 0..self.last_len {
            ctx.canvas.erase(row, STATUS_COLUMN + offset as i32);
        }
        ctx.canvas.draw_text(row, STATUS_COLUMN, &text);
        self.last_len = text.chars().count();
        Step::Suspended
    }
}
