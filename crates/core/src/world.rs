//! Shared game state handed to every task on resume.
//!
//! Owned by [`crate::Game`] and lent to the scheduler for the duration of a
//! tick, so tasks reach the year, the collision index and the RNG through
//! their context instead of through globals.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::collision::CollisionIndex;
use crate::config::GameConfig;
use crate::types::ObstacleId;

pub struct World {
    pub collisions: CollisionIndex,
    config: GameConfig,
    /// Struck obstacles and the tick each was flagged on.
    hits: BTreeMap<ObstacleId, u64>,
    year: u32,
    tick: u64,
    next_obstacle: u64,
    banner_live: bool,
    bells: u32,
    rng: Pcg32,
}

impl World {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            collisions: CollisionIndex::new(),
            year: config.start_year,
            config,
            hits: BTreeMap::new(),
            tick: 0,
            next_obstacle: 0,
            banner_live: false,
            bells: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    /// Ticks completed so far; during a scheduler pass this is the index of
    /// the tick being processed.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Close the current tick. Returns the new year when it just advanced.
    pub fn advance_tick(&mut self) -> Option<u32> {
        self.tick += 1;
        if self.tick % u64::from(self.config.ticks_per_year) == 0 {
            self.year += 1;
            tracing::debug!(year = self.year, "year advanced");
            return Some(self.year);
        }
        None
    }

    pub fn set_year(&mut self, year: u32) {
        self.year = year;
    }

    pub fn weapon_unlocked(&self) -> bool {
        self.year >= self.config.weapon_unlock_year
    }

    pub fn variant_obstacles_unlocked(&self) -> bool {
        self.year >= self.config.variant_obstacle_year
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn next_obstacle_id(&mut self) -> ObstacleId {
        self.next_obstacle += 1;
        ObstacleId(self.next_obstacle)
    }

    /// Mark `id` as struck during the current tick.
    ///
    /// Returns false if it was already flagged; the first flag wins.
    pub fn flag_hit(&mut self, id: ObstacleId) -> bool {
        if self.hits.contains_key(&id) {
            return false;
        }
        self.hits.insert(id, self.tick);
        tracing::debug!(obstacle = id.0, tick = self.tick, "obstacle hit");
        true
    }

    pub fn is_flagged(&self, id: ObstacleId) -> bool {
        self.hits.contains_key(&id)
    }

    /// Consume `id`'s hit flag if it was set on an earlier tick.
    ///
    /// A flag raised during the current tick stays pending until the next one.
    pub fn take_hit(&mut self, id: ObstacleId) -> bool {
        match self.hits.get(&id) {
            Some(&flagged) if flagged < self.tick => {
                self.hits.remove(&id);
                true
            }
            _ => false,
        }
    }

    pub fn pending_hits(&self) -> usize {
        self.hits.len()
    }

    /// Reserve the single game-over banner. Only the first call succeeds.
    pub fn claim_banner(&mut self) -> bool {
        if self.banner_live {
            return false;
        }
        self.banner_live = true;
        true
    }

    pub fn is_game_over(&self) -> bool {
        self.banner_live
    }

    /// Ask the front end to beep once.
    pub fn ring_bell(&mut self) {
        self.bells += 1;
    }

    /// Bells rung since the last call.
    pub fn take_bells(&mut self) -> u32 {
        std::mem::take(&mut self.bells)
    }
}
