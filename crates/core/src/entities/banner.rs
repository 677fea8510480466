//! Game-over banner, redrawn in the middle of the screen every tick.

use crate::canvas::draw_frame;
use crate::frame::frame_size;
use crate::scheduler::{Step, Task, TaskKind, TickContext};

pub const GAME_OVER: &str = r"
  ____                         ___
 / ___| __ _ _ __ ___   ___   / _ \__   _____ _ __
| |  _ / _` | '_ ` _ \ / _ \ | | | \ \ / / _ \ '__|
| |_| | (_| | | | | | |  __/ | |_| |\ V /  __/ |
 \____|\__,_|_| |_| |_|\___|  \___/  \_/ \___|_|
";

#[derive(Debug, Default)]
pub struct GameOverBanner;

impl Task for GameOverBanner {
    fn kind(&self) -> TaskKind {
        TaskKind::GameOverBanner
    }

    fn resume(&mut self, ctx: &mut TickContext<'_>) -> Step {
        let (rows, columns) = ctx.dimensions();
        let (height, width) = frame_size(GAME_OVER);
        let row = (rows - height as i32) / 2;
        let column = (columns - width as i32) / 2;
        draw_frame(ctx.canvas, row, column, GAME_OVER, false);
        Step::Suspended
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::harness::Harness;

    /// `(top, bottom, left, right)` margins around everything drawn.
    fn margins(h: &Harness, rows: i32, columns: i32) -> (i32, i32, i32, i32) {
        let drawn: Vec<(i32, i32)> = (0..rows)
            .flat_map(|r| (0..columns).map(move |c| (r, c)))
            .filter(|&(r, c)| h.canvas.glyph(r, c) != Some(' '))
            .collect();
        let top = drawn.iter().map(|p| p.0).min().unwrap();
        let bottom = drawn.iter().map(|p| p.0).max().unwrap();
        let left = drawn.iter().map(|p| p.1).min().unwrap();
        let right = drawn.iter().map(|p| p.1).max().unwrap();
        (top, rows - 1 - bottom, left, columns - 1 - right)
    }

    #[test]
    fn centred_on_the_surface() {
        let mut h = Harness::new(24, 80);
        let mut banner = GameOverBanner;
        assert_eq!(h.step(&mut banner), Step::Suspended);

        let (top, bottom, left, right) = margins(&h, 24, 80);
        assert!((top - bottom).abs() <= 1, "{top} vs {bottom}");
        assert!((left - right).abs() <= 1, "{left} vs {right}");
    }

    #[test]
    fn redrawn_every_tick() {
        let mut h = Harness::new(24, 80);
        let mut banner = GameOverBanner;
        h.step(&mut banner);
        let first = h.canvas.contents();

        draw_frame(&mut h.canvas, 0, 0, &first, true);
        assert_eq!(h.canvas.contents().trim(), "");
        h.step(&mut banner);
        assert_eq!(h.canvas.contents(), first);
    }
}
