//! Craft motion stays bounded for arbitrary input sequences.

use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use space_garbage::core::entities::Craft;
use space_garbage::core::motion::{self, Bounds};
use space_garbage::core::{Canvas, Frame, Game, GameConfig, MemoryCanvas, ScriptedInput};
use space_garbage::types::{AxisLimits, Controls, Velocity};

fn random_controls(rng: &mut Pcg32) -> Controls {
    Controls::new(
        rng.random_range(-1..=1),
        rng.random_range(-1..=1),
        rng.random_bool(0.2),
    )
}

#[test]
fn speed_and_position_stay_within_limits() {
    let limits = AxisLimits {
        rows: 1.0,
        columns: 2.0,
    };
    for seed in 0..20 {
        let mut rng = Pcg32::seed_from_u64(seed);
        let rows = rng.random_range(3..60);
        let columns = rng.random_range(3..120);
        let bounds = Bounds::interior(rows, columns, 3, 5);
        let (mut row, mut column) = bounds.clamp(rows / 2, columns / 2);
        let mut velocity = Velocity::ZERO;

        for _ in 0..500 {
            velocity = motion::advance(velocity, random_controls(&mut rng), 1.0, limits);
            assert!(velocity.row_speed.abs() <= limits.rows);
            assert!(velocity.column_speed.abs() <= limits.columns);

            (row, column) = motion::integrate(row, column, velocity, bounds);
            assert!((bounds.min_row..=bounds.max_row).contains(&row), "seed {seed}");
            assert!(
                (bounds.min_column..=bounds.max_column).contains(&column),
                "seed {seed}"
            );
        }
    }
}

#[test]
fn speed_persists_without_input() {
    let limits = AxisLimits::default();
    let moving = motion::advance(Velocity::ZERO, Controls::new(1, -1, false), 1.0, limits);
    let coasting = motion::advance(moving, Controls::IDLE, 1.0, limits);
    assert_eq!(coasting, moving);
}

fn border_intact(canvas: &MemoryCanvas) -> bool {
    let (rows, columns) = canvas.dimensions();
    let horizontal = |row: i32| (1..columns - 1).all(|c| canvas.glyph(row, c) == Some('─'));
    let vertical = |column: i32| (1..rows - 1).all(|r| canvas.glyph(r, column) == Some('│'));
    horizontal(0) && horizontal(rows - 1) && vertical(0) && vertical(columns - 1)
}

#[test]
fn craft_never_draws_over_the_border() {
    let frames: Rc<[Frame]> = vec![Frame::new("#@#\n@#@\n#@#")].into();
    for seed in 0..5 {
        let mut rng = Pcg32::seed_from_u64(seed);
        let script: Vec<_> = (0..400).map(|_| random_controls(&mut rng)).collect();
        let mut input = ScriptedInput::new(script);

        let mut canvas = MemoryCanvas::new(16, 30);
        canvas.draw_border();
        let mut game = Game::empty(GameConfig::default(), seed);
        game.spawn(Craft::new(Rc::clone(&frames), 1, 7, 14));

        for tick in 0..400 {
            game.tick(&mut canvas, &mut input);
            assert!(border_intact(&canvas), "seed {seed} tick {tick}");
        }
        assert!(game.craft_alive());
    }
}
