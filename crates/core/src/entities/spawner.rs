//! Drops new obstacles at a year-dependent pace.

use std::rc::Rc;

use rand::Rng;

use crate::entities::Obstacle;
use crate::frame::Frame;
use crate::scheduler::{Step, Task, TaskKind, TickContext};

pub struct GarbageSpawner {
    obstacles: Rc<[Rc<Frame>]>,
    variants: Rc<[Rc<Frame>]>,
    wait: u32,
}

impl GarbageSpawner {
    pub fn new(obstacles: Rc<[Rc<Frame>]>, variants: Rc<[Rc<Frame>]>) -> Self {
        Self {
            obstacles,
            variants,
            wait: 0,
        }
    }

    fn pick(&self, index: usize) -> Rc<Frame> {
        match self.obstacles.get(index) {
            Some(frame) => Rc::clone(frame),
            None => Rc::clone(&self.variants[index - self.obstacles.len()]),
        }
    }
}

impl Task for GarbageSpawner {
    fn kind(&self) -> TaskKind {
        TaskKind::GarbageSpawner
    }

    fn resume(&mut self, ctx: &mut TickContext<'_>) -> Step {
        if self.wait > 0 {
            self.wait -= 1;
            return Step::Suspended;
        }

        let year = ctx.world.year();
        let Some(delay) = ctx.world.config().scenario.spawn_delay_for(year) else {
            return Step::Suspended;
        };

        let eligible = if ctx.world.variant_obstacles_unlocked() {
            self.obstacles.len() + self.variants.len()
        } else {
            self.obstacles.len()
        };
        if eligible == 0 {
            return Step::Suspended;
        }

        let index = ctx.world.rng().random_range(0..eligible);
        let frame = self.pick(index);
        let (_, columns) = ctx.dimensions();
        let max_column = (columns - 1 - frame.columns() as i32).max(1);
        let column = ctx.world.rng().random_range(1..=max_column);
        let id = ctx.world.next_obstacle_id();
        let speed = ctx.world.config().obstacle_speed;
        ctx.spawn(Obstacle::new(id, frame, column, speed));

        self.wait = delay.saturating_sub(1);
        Step::Suspended
    }
}
