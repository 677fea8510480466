//! Shared types and constants for the space garbage arcade.
//!
//! Everything here is plain data with no behaviour beyond small geometry
//! helpers, so the simulation, input and terminal crates can all agree on the
//! same vocabulary without depending on each other.
//!
//! # Grid coordinates
//!
//! All positions are `(row, column)` pairs in terminal cells, with `(0, 0)` at
//! the top-left corner of the drawing surface. Row 0, column 0 and the last
//! row/column are occupied by the border; the playable interior is
//! `[1, rows - 2] x [1, columns - 2]`.
//!
//! # Timing and progression defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Wall-clock interval between scheduler ticks |
//! | `TICKS_PER_YEAR` | 15 | Ticks before the in-game year advances |
//! | `START_YEAR` | 1957 | Year shown when the game starts |
//! | `WEAPON_UNLOCK_YEAR` | 2020 | First year the craft may fire |
//! | `VARIANT_OBSTACLE_YEAR` | 1998 | First year the second obstacle flavor spawns |
//!
//! # Examples
//!
//! ```
//! use space_garbage_types::{FrameCategory, Rect};
//!
//! let rect = Rect::new(2, 3, 2, 4);
//! assert!(rect.contains_point(3, 6));
//! assert!(!rect.contains_point(4, 3));
//!
//! assert_eq!(FrameCategory::from_str("craft"), Some(FrameCategory::Craft));
//! ```

use serde::{Deserialize, Serialize};

/// Wall-clock interval between scheduler ticks (100ms).
pub const TICK_MS: u64 = 100;

/// Number of ticks per in-game year (1.5 seconds at the default tick).
pub const TICKS_PER_YEAR: u32 = 15;

/// Year displayed when the game starts.
pub const START_YEAR: u32 = 1957;

/// First year the player craft is allowed to fire.
pub const WEAPON_UNLOCK_YEAR: u32 = 2020;

/// First year the second obstacle flavor joins the spawn pool.
pub const VARIANT_OBSTACLE_YEAR: u32 = 1998;

/// Velocity gained per tick while a direction is held.
pub const ACCELERATION: f64 = 1.0;

/// Maximum craft speed along the row axis (cells per tick).
pub const ROW_SPEED_LIMIT: f64 = 1.0;

/// Maximum craft speed along the column axis (cells per tick).
pub const COLUMN_SPEED_LIMIT: f64 = 2.0;

/// Default projectile speed along the row axis; negative flies upwards.
pub const PROJECTILE_ROW_SPEED: f64 = -0.3;

/// Default obstacle fall speed (rows per tick).
pub const OBSTACLE_SPEED: f64 = 0.5;

/// Share of interior cells covered by stars, lower bound.
pub const MIN_STAR_DENSITY: f64 = 0.02;

/// Share of interior cells covered by stars, upper bound.
pub const MAX_STAR_DENSITY: f64 = 0.04;

/// Glyphs a star can be drawn with.
pub const STAR_GLYPHS: &str = "+*.:";

/// Ticks a star stays dim (the first dim phase is randomly shortened).
pub const TWINKLE_DIM_TICKS: u32 = 20;

/// Ticks a star spends at normal brightness between dim and bright.
pub const TWINKLE_NORMAL_TICKS: u32 = 3;

/// Ticks a star stays bright.
pub const TWINKLE_BRIGHT_TICKS: u32 = 5;

/// Ticks each explosion frame stays on screen.
pub const EXPLOSION_FRAME_TICKS: u32 = 2;

/// Consecutive ticks each craft animation frame is shown.
pub const CRAFT_FRAME_REPEAT: u32 = 2;


/// Directional intent and fire flag gathered from one input poll.
///
/// Each axis is one of `-1`, `0` or `+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub rows: i8,
    pub columns: i8,
    pub fire: bool,
}

impl Controls {
    pub const IDLE: Controls = Controls {
        rows: 0,
        columns: 0,
        fire: false,
    };

    pub fn new(rows: i8, columns: i8, fire: bool) -> Self {
        Self {
            rows: rows.signum(),
            columns: columns.signum(),
            fire,
        }
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}

/// Craft velocity in cells per tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub row_speed: f64,
    pub column_speed: f64,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity {
        row_speed: 0.0,
        column_speed: 0.0,
    };

    pub fn new(row_speed: f64, column_speed: f64) -> Self {
        Self {
            row_speed,
            column_speed,
        }
    }
}

/// Per-axis speed caps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub rows: f64,
    pub columns: f64,
}

impl Default for AxisLimits {
    fn default() -> Self {
        Self {
            rows: ROW_SPEED_LIMIT,
            columns: COLUMN_SPEED_LIMIT,
        }
    }
}

/// Axis-aligned rectangle in grid cells, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub row: i32,
    pub column: i32,
    pub height: i32,
    pub width: i32,
}

impl Rect {
    pub const fn new(row: i32, column: i32, height: i32, width: i32) -> Self {
        Self {
            row,
            column,
            height,
            width,
        }
    }

    pub fn contains_point(&self, row: i32, column: i32) -> bool {
        row >= self.row
            && row < self.row + self.height
            && column >= self.column
            && column < self.column + self.width
    }

    /// True when the two rectangles share at least one cell.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.row < other.row + other.height
            && other.row < self.row + self.height
            && self.column < other.column + other.width
            && other.column < self.column + self.width
    }

    /// Centre cell, rounded towards the top-left.
    pub fn center(&self) -> (i32, i32) {
        (self.row + self.height / 2, self.column + self.width / 2)
    }
}

/// Cell intensity. The surface is monochrome; brightness is the only attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Brightness {
    Dim,
    #[default]
    Normal,
    Bold,
}

/// Identity of one obstacle instance. Never reused within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObstacleId(pub u64);

/// Asset categories loaded once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameCategory {
    Craft,
    Obstacle,
    ObstacleVariant2,
}

impl FrameCategory {
    /// Directory name the category's frames are stored under.
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameCategory::Craft => "craft",
            FrameCategory::Obstacle => "obstacle",
            FrameCategory::ObstacleVariant2 => "obstacle-variant-2",
        }
    }

    /// Parse a category from its directory name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use space_garbage_types::FrameCategory;
    ///
    /// assert_eq!(FrameCategory::from_str("OBSTACLE"), Some(FrameCategory::Obstacle));
    /// assert_eq!(
    ///     FrameCategory::from_str("obstacle-variant-2"),
    ///     Some(FrameCategory::ObstacleVariant2)
    /// );
    /// assert_eq!(FrameCategory::from_str("rocket"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "craft" => Some(FrameCategory::Craft),
            "obstacle" => Some(FrameCategory::Obstacle),
            "obstacle-variant-2" => Some(FrameCategory::ObstacleVariant2),
            _ => None,
        }
    }
}

#[cfg(test)]
mod geometry_tests {
    use super::*;

    #[test]
    fn rect_overlap_is_symmetric_and_edge_exclusive() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(1, 1, 2, 2);
        let c = Rect::new(2, 0, 1, 5);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn controls_new_normalises_axes() {
        let c = Controls::new(-5, 3, true);
        assert_eq!(c, Controls::new(-1, 1, true));
        assert!(Controls::default().is_idle());
    }

    #[test]
    fn rect_center() {
        assert_eq!(Rect::new(10, 20, 3, 5).center(), (11, 22));
    }
}
