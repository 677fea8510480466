//! Live set of obstacle footprints.
//!
//! An obstacle inserts its footprint right after drawing a frame and removes
//! it right after erasing that frame, so the index always mirrors what is on
//! screen. Entries are keyed by obstacle so a point query can tell which
//! obstacle was struck.

use std::collections::BTreeMap;

use crate::types::{ObstacleId, Rect};

#[derive(Debug, Clone, Default)]
pub struct CollisionIndex {
    footprints: BTreeMap<ObstacleId, Rect>,
    insertions: u64,
    removals: u64,
}

impl CollisionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id`'s footprint.
    ///
    /// An obstacle owns at most one footprint; inserting twice without a
    /// removal in between is a pairing bug.
    pub fn insert(&mut self, id: ObstacleId, rect: Rect) {
        let previous = self.footprints.insert(id, rect);
        debug_assert!(previous.is_none(), "footprint for {id:?} inserted twice");
        self.insertions += 1;
    }

    /// Drop `id`'s footprint, returning it if it was registered.
    pub fn remove(&mut self, id: ObstacleId) -> Option<Rect> {
        let rect = self.footprints.remove(&id);
        if rect.is_some() {
            self.removals += 1;
        }
        rect
    }

    pub fn get(&self, id: ObstacleId) -> Option<Rect> {
        self.footprints.get(&id).copied()
    }

    /// First obstacle (lowest id) whose footprint covers the cell.
    pub fn obstacle_at(&self, row: i32, column: i32) -> Option<ObstacleId> {
        self.footprints
            .iter()
            .find(|(_, rect)| rect.contains_point(row, column))
            .map(|(id, _)| *id)
    }

    pub fn contains_point(&self, row: i32, column: i32) -> bool {
        self.obstacle_at(row, column).is_some()
    }

    pub fn overlaps(&self, row: i32, column: i32, height: i32, width: i32) -> bool {
        let probe = Rect::new(row, column, height, width);
        self.footprints.values().any(|rect| rect.overlaps(&probe))
    }

    pub fn len(&self) -> usize {
        self.footprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.footprints.is_empty()
    }

    /// Total footprints inserted over the index's lifetime.
    pub fn insertions(&self) -> u64 {
        self.insertions
    }

    /// Total footprints removed over the index's lifetime.
    pub fn removals(&self) -> u64 {
        self.removals
    }
}
