//! Rendering capability consumed by the simulation.
//!
//! The simulation never owns a terminal. It draws through [`Canvas`], which a
//! terminal framebuffer (or the in-memory [`MemoryCanvas`] in tests and
//! headless runs) implements.

use crate::types::Brightness;

/// A grid of monochrome character cells.
///
/// Implementors only provide [`Canvas::dimensions`] and [`Canvas::put_cell`];
/// the provided methods enforce the drawing contract:
///
/// - anything outside `[0, rows) x [0, columns)` is silently clipped
/// - the bottom-right cell is never written by [`Canvas::draw`]
pub trait Canvas {
    /// `(rows, columns)` of the surface.
    fn dimensions(&self) -> (i32, i32);

    /// Write one in-bounds cell. Callers guarantee the coordinates are valid.
    fn put_cell(&mut self, row: u16, column: u16, glyph: char, brightness: Brightness);

    fn draw(&mut self, row: i32, column: i32, glyph: char, brightness: Brightness) {
        let (rows, columns) = self.dimensions();
        if row < 0 || column < 0 || row >= rows || column >= columns {
            return;
        }
        if row == rows - 1 && column == columns - 1 {
            return;
        }
        self.put_cell(row as u16, column as u16, glyph, brightness);
    }

    fn erase(&mut self, row: i32, column: i32) {
        self.draw(row, column, ' ', Brightness::Normal);
    }

    /// Draw a single line of text starting at `(row, column)`.
    fn draw_text(&mut self, row: i32, column: i32, text: &str) {
        for (offset, ch) in text.chars().enumerate() {
            self.draw(row, column + offset as i32, ch, Brightness::Normal);
        }
    }

    /// Frame the whole surface with a box border.
    ///
    /// Unlike [`Canvas::draw`] this also writes the bottom-right corner.
    fn draw_border(&mut self) {
        let (rows, columns) = self.dimensions();
        if rows < 2 || columns < 2 {
            return;
        }
        let (last_row, last_column) = ((rows - 1) as u16, (columns - 1) as u16);
        for column in 1..last_column {
            self.put_cell(0, column, '─', Brightness::Normal);
            self.put_cell(last_row, column, '─', Brightness::Normal);
        }
        for row in 1..last_row {
            self.put_cell(row, 0, '│', Brightness::Normal);
            self.put_cell(row, last_column, '│', Brightness::Normal);
        }
        self.put_cell(0, 0, '┌', Brightness::Normal);
        self.put_cell(0, last_column, '┐', Brightness::Normal);
        self.put_cell(last_row, 0, '└', Brightness::Normal);
        self.put_cell(last_row, last_column, '┘', Brightness::Normal);
    }
}

/// Draw a multi-line text block with its top-left corner at `(row, column)`.
///
/// Spaces are transparent. With `negative` set every non-space glyph is
/// overwritten with a blank instead, erasing a frame drawn at the same spot.
pub fn draw_frame(canvas: &mut dyn Canvas, row: i32, column: i32, text: &str, negative: bool) {
    let (rows, columns) = canvas.dimensions();
    for (dy, line) in text.lines().enumerate() {
        let r = row + dy as i32;
        if r < 0 {
            continue;
        }
        if r >= rows {
            break;
        }
        for (dx, glyph) in line.chars().enumerate() {
            let c = column + dx as i32;
            if c < 0 {
                continue;
            }
            if c >= columns {
                break;
            }
            if glyph == ' ' {
                continue;
            }
            let glyph = if negative { ' ' } else { glyph };
            canvas.draw(r, c, glyph, Brightness::Normal);
        }
    }
}

/// Plain in-memory canvas.
///
/// Used by tests and by the headless runner; it also counts writes so callers
/// can tell whether anything was drawn during a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryCanvas {
    rows: u16,
    columns: u16,
    cells: Vec<(char, Brightness)>,
    writes: u64,
}

impl MemoryCanvas {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self {
            rows,
            columns,
            cells: vec![(' ', Brightness::Normal); rows as usize * columns as usize],
            writes: 0,
        }
    }

    pub fn cell(&self, row: i32, column: i32) -> Option<(char, Brightness)> {
        if row < 0 || column < 0 || row >= self.rows as i32 || column >= self.columns as i32 {
            return None;
        }
        Some(self.cells[row as usize * self.columns as usize + column as usize])
    }

    pub fn glyph(&self, row: i32, column: i32) -> Option<char> {
        self.cell(row, column).map(|(ch, _)| ch)
    }

    /// One row as a string, including border glyphs.
    pub fn line(&self, row: u16) -> String {
        let start = row as usize * self.columns as usize;
        self.cells[start..start + self.columns as usize]
            .iter()
            .map(|(ch, _)| *ch)
            .collect()
    }

    /// Every row joined with newlines.
    pub fn contents(&self) -> String {
        (0..self.rows)
            .map(|row| self.line(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl Canvas for MemoryCanvas {
    fn dimensions(&self) -> (i32, i32) {
        (self.rows as i32, self.columns as i32)
    }

    fn put_cell(&mut self, row: u16, column: u16, glyph: char, brightness: Brightness) {
        if row >= self.rows || column >= self.columns {
            return;
        }
        self.cells[row as usize * self.columns as usize + column as usize] = (glyph, brightness);
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_clips_out_of_bounds() {
        let mut canvas = MemoryCanvas::new(3, 4);
        canvas.draw(-1, 0, 'x', Brightness::Normal);
        canvas.draw(0, 4, 'x', Brightness::Normal);
        canvas.draw(3, 0, 'x', Brightness::Normal);
        assert_eq!(canvas.writes(), 0);
    }

    #[test]
    fn draw_skips_bottom_right_cell() {
        let mut canvas = MemoryCanvas::new(3, 4);
        canvas.draw(2, 3, 'x', Brightness::Normal);
        assert_eq!(canvas.glyph(2, 3), Some(' '));
        canvas.draw(2, 2, 'x', Brightness::Normal);
        assert_eq!(canvas.glyph(2, 2), Some('x'));
    }

    #[test]
    fn draw_frame_is_transparent_and_negative_erases() {
        let mut canvas = MemoryCanvas::new(5, 5);
        canvas.draw(1, 2, '#', Brightness::Normal);
        draw_frame(&mut canvas, 0, 0, "ab\n  c", false);
        assert_eq!(canvas.line(0), "ab   ");
        assert_eq!(canvas.line(1), "  c  ");

        draw_frame(&mut canvas, 0, 0, "ab\n  c", true);
        assert_eq!(canvas.contents().trim(), "");
    }

    #[test]
    fn draw_frame_clips_partially_visible_frames() {
        let mut canvas = MemoryCanvas::new(3, 3);
        draw_frame(&mut canvas, -1, -1, "abc\ndef\nghi", false);
        assert_eq!(canvas.line(0), "ef ");
        assert_eq!(canvas.line(1), "hi ");
    }

    #[test]
    fn border_covers_all_corners() {
        let mut canvas = MemoryCanvas::new(3, 4);
        canvas.draw_border();
        assert_eq!(canvas.line(0), "┌──┐");
        assert_eq!(canvas.line(1), "│  │");
        assert_eq!(canvas.line(2), "└──┘");
    }
}
