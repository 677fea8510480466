//! Bounded-acceleration motion model for the player craft.
//!
//! Speed only changes while a direction is held: each tick adds the pressed
//! sign times the acceleration, then clamps to the axis limit. With no input
//! the craft keeps whatever speed it already has; the opposite direction is
//! needed to cancel it.

use crate::types::{AxisLimits, Controls, Velocity};

/// One tick of the velocity integrator.
pub fn advance(
    velocity: Velocity,
    controls: Controls,
    acceleration: f64,
    limits: AxisLimits,
) -> Velocity {
    Velocity {
        row_speed: step_axis(velocity.row_speed, controls.rows, acceleration, limits.rows),
        column_speed: step_axis(
            velocity.column_speed,
            controls.columns,
            acceleration,
            limits.columns,
        ),
    }
}

fn step_axis(speed: f64, intent: i8, acceleration: f64, limit: f64) -> f64 {
    let limit = limit.abs();
    (speed + f64::from(intent.signum()) * acceleration).clamp(-limit, limit)
}

/// Playable area for a footprint of `frame_rows x frame_columns` on a surface
/// of `rows x columns`: the smallest and largest legal top-left corner.
///
/// The footprint never touches the border. If the surface is too small to fit
/// it, the bounds collapse onto the first interior cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_row: i32,
    pub max_row: i32,
    pub min_column: i32,
    pub max_column: i32,
}

impl Bounds {
    pub fn interior(rows: i32, columns: i32, frame_rows: i32, frame_columns: i32) -> Self {
        Self {
            min_row: 1,
            max_row: (rows - 1 - frame_rows).max(1),
            min_column: 1,
            max_column: (columns - 1 - frame_columns).max(1),
        }
    }

    pub fn clamp(&self, row: i32, column: i32) -> (i32, i32) {
        (
            row.max(self.min_row).min(self.max_row),
            column.max(self.min_column).min(self.max_column),
        )
    }
}

/// Integrate one tick of movement and clamp into `bounds`.
pub fn integrate(row: i32, column: i32, velocity: Velocity, bounds: Bounds) -> (i32, i32) {
    let next_row = (f64::from(row) + velocity.row_speed).round() as i32;
    let next_column = (f64::from(column) + velocity.column_speed).round() as i32;
    bounds.clamp(next_row, next_column)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> AxisLimits {
        AxisLimits {
            rows: 1.0,
            columns: 2.0,
        }
    }

    #[test]
    fn accelerates_toward_pressed_direction() {
        let v = advance(Velocity::ZERO, Controls::new(1, -1, false), 1.0, limits());
        assert_eq!(v, Velocity::new(1.0, -1.0));
    }

    #[test]
    fn speed_persists_without_input() {
        let v = Velocity::new(1.0, -2.0);
        assert_eq!(advance(v, Controls::IDLE, 1.0, limits()), v);
    }

    #[test]
    fn opposite_direction_cancels() {
        let v = advance(Velocity::new(0.0, 2.0), Controls::new(0, -1, false), 1.0, limits());
        assert_eq!(v.column_speed, 1.0);
    }

    #[test]
    fn clamps_to_axis_limit() {
        let mut v = Velocity::ZERO;
        for _ in 0..10 {
            v = advance(v, Controls::new(-1, 1, false), 1.0, limits());
        }
        assert_eq!(v, Velocity::new(-1.0, 2.0));
    }

    #[test]
    fn integrate_rounds_and_clamps() {
        let bounds = Bounds::interior(20, 40, 3, 5);
        assert_eq!(bounds.max_row, 16);
        assert_eq!(bounds.max_column, 34);

        assert_eq!(integrate(5, 5, Velocity::new(0.6, -0.4), bounds), (6, 5));
        assert_eq!(integrate(1, 1, Velocity::new(-1.0, -2.0), bounds), (1, 1));
        assert_eq!(integrate(16, 34, Velocity::new(1.0, 2.0), bounds), (16, 34));
    }

    #[test]
    fn tiny_surface_collapses_bounds() {
        let bounds = Bounds::interior(3, 3, 5, 5);
        assert_eq!(bounds.clamp(10, -10), (1, 1));
    }
}
