//! Simulation core for the space garbage arcade - deterministic and I/O-free.
//!
//! The scene is a set of cooperative tasks advanced in lock-step by a
//! single-threaded [`Scheduler`]. Each tick resumes every live task exactly
//! once; tasks draw on a [`Canvas`], read player intent from an
//! [`InputSource`], and share obstacle footprints through the
//! [`CollisionIndex`] held in the [`World`].
//!
//! # Module Structure
//!
//! - [`frame`]: ASCII-art frame geometry and asset loading
//! - [`canvas`]: rendering capability, frame drawing, in-memory canvas
//! - [`motion`]: bounded-acceleration velocity integrator and position clamp
//! - [`collision`]: live obstacle footprints with point/rectangle queries
//! - [`scenario`]: year to headline and spawn delay lookup
//! - [`config`]: JSON-loadable tuning
//! - [`world`]: state shared by tasks (year, hits, RNG, collision index)
//! - [`scheduler`]: task trait, tick context and the scheduler itself
//! - [`entities`]: stars, craft, projectiles, obstacles, explosions, spawner,
//!   status ticker and game-over banner
//! - [`game`]: scene seeding and the per-tick driver
//!
//! # Hit protocol
//!
//! A projectile that lands inside a footprint only flags the obstacle. The
//! obstacle consumes the flag on its first resume of a *later* tick, erases
//! itself, drops its footprint and spawns an explosion. Nothing ever removes
//! another task's footprint or task.
//!
//! # Example
//!
//! ```
//! use space_garbage_core::{Game, GameConfig, MemoryCanvas, ScriptedInput, TaskKind};
//! use space_garbage_core::entities::Twinkle;
//!
//! let mut canvas = MemoryCanvas::new(10, 20);
//! let mut input = ScriptedInput::idle();
//! let mut game = Game::empty(GameConfig::default(), 1);
//! game.spawn(Twinkle::new(3, 4, '*', Default::default(), 1));
//!
//! game.tick(&mut canvas, &mut input);
//! assert_eq!(canvas.glyph(3, 4), Some('*'));
//! assert_eq!(game.count(TaskKind::Twinkle), 1);
//! ```

pub mod canvas;
pub mod collision;
pub mod config;
pub mod entities;
pub mod frame;
pub mod game;
pub mod input;
pub mod motion;
pub mod scenario;
pub mod scheduler;
pub mod world;

pub use space_garbage_types as types;

pub use canvas::{draw_frame, Canvas, MemoryCanvas};
pub use collision::CollisionIndex;
pub use config::{ConfigError, GameConfig, TwinkleTiming};
pub use frame::{frame_size, load_frames, AssetError, Frame, FrameLibrary};
pub use game::Game;
pub use input::{InputSource, ScriptedInput};
pub use scenario::{DelayStep, ScenarioTable};
pub use scheduler::{Scheduler, Step, Task, TaskKind, TickContext, TickReport};
pub use world::World;
