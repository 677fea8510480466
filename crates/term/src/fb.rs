//! Monochrome framebuffer for terminal rendering.
//!
//! The simulation draws into it incrementally through [`Canvas`]; nothing is
//! cleared between ticks, tasks erase what they drew themselves.

use crate::core::Canvas;
use crate::types::Brightness;

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub brightness: Brightness,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            brightness: Brightness::Normal,
        }
    }
}

/// 2D framebuffer of character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Row `y` as plain text.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .map(|x| self.get(x, y).unwrap_or_default().ch)
            .collect()
    }
}

impl Canvas for FrameBuffer {
    fn dimensions(&self) -> (i32, i32) {
        (self.height as i32, self.width as i32)
    }

    fn put_cell(&mut self, row: u16, column: u16, glyph: char, brightness: Brightness) {
        self.set(
            column,
            row,
            Cell {
                ch: glyph,
                brightness,
            },
        );
    }
}
