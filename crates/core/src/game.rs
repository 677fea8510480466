//! Scene assembly and the per-tick driver.
//!
//! [`Game`] owns the scheduler and the world. The binary calls
//! [`Game::tick`] at a fixed wall-clock interval and renders the canvas after
//! each call; tests call it directly against a [`crate::MemoryCanvas`].

use std::rc::Rc;

use rand::Rng;

use crate::canvas::Canvas;
use crate::config::GameConfig;
use crate::entities::{Craft, GarbageSpawner, Twinkle, YearTicker};
use crate::frame::{Frame, FrameLibrary};
use crate::input::InputSource;
use crate::scheduler::{Scheduler, Task, TaskKind, TickReport};
use crate::world::World;

pub struct Game {
    scheduler: Scheduler,
    world: World,
}

impl Game {
    /// A game with no tasks yet.
    pub fn empty(config: GameConfig, seed: u64) -> Self {
        Self {
            scheduler: Scheduler::new(),
            world: World::new(config, seed),
        }
    }

    /// Full scene: border, stars, craft in the centre, garbage spawner and the
    /// year ticker.
    pub fn new(
        config: GameConfig,
        frames: &FrameLibrary,
        canvas: &mut dyn Canvas,
        seed: u64,
    ) -> Self {
        let mut game = Self::empty(config, seed);
        canvas.draw_border();
        let (rows, columns) = canvas.dimensions();

        let stars = game.seed_stars(rows, columns);

        let repeat = game.world.config().craft_frame_repeat;
        let height = frames.craft.iter().map(Frame::rows).max().unwrap_or(0) as i32;
        let width = frames.craft.iter().map(Frame::columns).max().unwrap_or(0) as i32;
        game.spawn(Craft::new(
            Rc::clone(&frames.craft),
            repeat,
            (rows - height) / 2,
            (columns - width) / 2,
        ));
        game.spawn(GarbageSpawner::new(
            Rc::clone(&frames.obstacles),
            Rc::clone(&frames.obstacle_variants),
        ));
        game.spawn(YearTicker::new());

        tracing::info!(rows, columns, stars, seed, "scene seeded");
        game
    }

    /// Scatter twinkling stars over the interior. Returns how many were added.
    pub fn seed_stars(&mut self, rows: i32, columns: i32) -> usize {
        if rows < 3 || columns < 3 {
            return 0;
        }
        let config = self.world.config();
        let cells = f64::from((rows - 2) * (columns - 2));
        let min = (cells * config.min_star_density) as usize;
        let max = (cells * config.max_star_density) as usize;
        let glyphs: Vec<char> = config.star_glyphs.chars().collect();
        let timing = config.twinkle;

        let rng = self.world.rng();
        let count = rng.random_range(min..=max);
        let mut stars = Vec::with_capacity(count);
        for _ in 0..count {
            let row = rng.random_range(1..=rows - 2);
            let column = rng.random_range(1..=columns - 2);
            let glyph = glyphs[rng.random_range(0..glyphs.len())];
            let offset = rng.random_range(1..=timing.dim.max(1));
            stars.push(Twinkle::new(row, column, glyph, timing, offset));
        }
        for star in stars {
            self.spawn(star);
        }
        count
    }

    pub fn spawn(&mut self, task: impl Task + 'static) {
        self.scheduler.spawn(task);
    }

    /// Resume every task once, then close the tick (advancing the year when due).
    pub fn tick(&mut self, canvas: &mut dyn Canvas, input: &mut dyn InputSource) -> TickReport {
        let report = self.scheduler.tick(canvas, input, &mut self.world);
        if let Some(year) = self.world.advance_tick() {
            if let Some(phrase) = self.world.config().scenario.phrase_for(year) {
                tracing::info!(year, phrase, "new year");
            }
        }
        report
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn task_count(&self) -> usize {
        self.scheduler.len()
    }

    pub fn count(&self, kind: TaskKind) -> usize {
        self.scheduler.count(kind)
    }

    pub fn craft_alive(&self) -> bool {
        self.count(TaskKind::Craft) > 0
    }

    pub fn is_game_over(&self) -> bool {
        self.world.is_game_over()
    }
}
