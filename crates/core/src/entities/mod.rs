//! Task flavours that make up the scene.

pub mod banner;
pub mod craft;
pub mod explosion;
pub mod obstacle;
pub mod projectile;
pub mod spawner;
pub mod ticker;
pub mod twinkle;

pub use banner::GameOverBanner;
pub use craft::Craft;
pub use explosion::Explosion;
pub use obstacle::Obstacle;
pub use projectile::Projectile;
pub use spawner::GarbageSpawner;
pub use ticker::YearTicker;
pub use twinkle::{Phase, Twinkle};
