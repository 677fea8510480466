//! Cooperative task scheduler.
//!
//! Every animated behaviour is a [`Task`]: a state machine resumed once per
//! tick that either suspends until the next tick or reports it has finished.
//! Nothing runs concurrently, so tasks share the canvas and the [`World`]
//! through a plain `&mut` context.
//!
//! # Tick ordering
//!
//! [`Scheduler::tick`] takes the live task list as the snapshot for this pass
//! and resumes its tasks in creation order. Tasks spawned during the pass land
//! in a side buffer and are appended after the pass, so they first run on the
//! next tick. Finished tasks are dropped at the end of the pass.
//!
//! A panicking task aborts the whole loop; there is no per-task isolation.

use std::fmt;

use crate::canvas::Canvas;
use crate::input::InputSource;
use crate::types::ObstacleId;
use crate::world::World;

/// Result of resuming a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Suspended,
    Finished,
}

/// What a task is, for logging and introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Twinkle,
    Craft,
    Projectile,
    Obstacle(ObstacleId),
    Explosion,
    GarbageSpawner,
    YearTicker,
    GameOverBanner,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::Twinkle => f.write_str("twinkle"),
            TaskKind::Craft => f.write_str("craft"),
            TaskKind::Projectile => f.write_str("projectile"),
            TaskKind::Obstacle(id) => write!(f, "obstacle#{}", id.0),
            TaskKind::Explosion => f.write_str("explosion"),
            TaskKind::GarbageSpawner => f.write_str("garbage-spawner"),
            TaskKind::YearTicker => f.write_str("year-ticker"),
            TaskKind::GameOverBanner => f.write_str("game-over-banner"),
        }
    }
}

/// A suspendable behaviour.
///
/// Tasks never hold a handle to themselves; the only way to stop is to
/// return [`Step::Finished`].
pub trait Task {
    fn kind(&self) -> TaskKind;

    fn resume(&mut self, ctx: &mut TickContext<'_>) -> Step;
}

/// Everything a task may touch while it runs.
pub struct TickContext<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub input: &'a mut dyn InputSource,
    pub world: &'a mut World,
    spawned: &'a mut Vec<Box<dyn Task>>,
}

impl<'a> TickContext<'a> {
    pub(crate) fn new(
        canvas: &'a mut dyn Canvas,
        input: &'a mut dyn InputSource,
        world: &'a mut World,
        spawned: &'a mut Vec<Box<dyn Task>>,
    ) -> Self {
        Self {
            canvas,
            input,
            world,
            spawned,
        }
    }

    /// Queue a task to start on the next tick.
    pub fn spawn(&mut self, task: impl Task + 'static) {
        tracing::debug!(kind = %task.kind(), tick = self.world.tick(), "task spawned");
        self.spawned.push(Box::new(task));
    }

    pub fn dimensions(&self) -> (i32, i32) {
        self.canvas.dimensions()
    }
}

/// Counters for one scheduler pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub resumed: usize,
    pub finished: usize,
    pub spawned: usize,
}

#[derive(Default)]
pub struct Scheduler {
    tasks: Vec<Box<dyn Task>>,
    spawned: Vec<Box<dyn Task>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task from outside a tick (e.g. while seeding the scene).
    pub fn spawn(&mut self, task: impl Task + 'static) {
        self.tasks.push(Box::new(task));
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Kinds of the live tasks, in resume order.
    pub fn kinds(&self) -> impl Iterator<Item = TaskKind> + '_ {
        self.tasks.iter().map(|task| task.kind())
    }

    pub fn count(&self, kind: TaskKind) -> usize {
        self.kinds().filter(|k| *k == kind).count()
    }

    /// Resume every task once.
    pub fn tick(
        &mut self,
        canvas: &mut dyn Canvas,
        input: &mut dyn InputSource,
        world: &mut World,
    ) -> TickReport {
        let snapshot = std::mem::take(&mut self.tasks);
        let mut report = TickReport {
            resumed: snapshot.len(),
            ..TickReport::default()
        };

        let mut ctx = TickContext::new(canvas, input, world, &mut self.spawned);

        let mut live = Vec::with_capacity(snapshot.len());
        for mut task in snapshot {
            match task.resume(&mut ctx) {
                Step::Suspended => live.push(task),
                Step::Finished => {
                    tracing::debug!(kind = %task.kind(), tick = ctx.world.tick(), "task finished");
                    report.finished += 1;
                }
            }
        }

        report.spawned = self.spawned.len();
        live.append(&mut self.spawned);
        self.tasks = live;

        tracing::trace!(
            resumed = report.resumed,
            finished = report.finished,
            spawned = report.spawned,
            "scheduler tick"
        );
        report
    }
}
