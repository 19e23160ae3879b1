//! Organism state and management.

use petri_core::{Color, OrganismId, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An organism in the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organism {
    pub id: OrganismId,
    pub position: Position,
    pub color: Color,
    pub birth_tick: u64,
    /// Per-peer collision counts. Entries exist only for peers this
    /// organism has overlapped with while both were alive; the world
    /// prunes an entry when its peer dies.
    pub encounters: HashMap<OrganismId, u32>,
}

impl Organism {
    pub fn new(id: OrganismId, position: Position, color: Color, birth_tick: u64) -> Self {
        Self {
            id,
            position,
            color,
            birth_tick,
            encounters: HashMap::new(),
        }
    }

    /// Ticks elapsed since birth.
    pub fn age(&self, tick: u64) -> u64 {
        tick.saturating_sub(self.birth_tick)
    }

    /// Past the lifespan, strictly greater. An organism whose age
    /// equals the lifespan survives that tick.
    pub fn is_expired(&self, tick: u64, lifespan_ticks: u64) -> bool {
        self.age(tick) > lifespan_ticks
    }

    /// Bump the encounter count for `peer`, returning the new count.
    pub fn record_encounter(&mut self, peer: OrganismId) -> u32 {
        let count = self.encounters.entry(peer).or_insert(0);
        *count += 1;
        *count
    }

    /// Drop the encounter entry for a dead peer.
    pub fn forget(&mut self, peer: OrganismId) {
        self.encounters.remove(&peer);
    }

    /// Box-overlap proximity test: both axis deltas strictly below the
    /// entity footprint. Not a circle intersection.
    pub fn collides_with(&self, other: &Organism, entity_size: i32) -> bool {
        self.id != other.id && self.position.within(&other.position, entity_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn organism(id: u64, x: i32, y: i32) -> Organism {
        Organism::new(
            OrganismId(id),
            Position::new(x, y),
            Color::new(200, 40, 40),
            0,
        )
    }

    #[test]
    fn test_encounter_counting() {
        let mut org = organism(1, 0, 0);
        let peer = OrganismId(2);

        assert_eq!(org.record_encounter(peer), 1);
        assert_eq!(org.record_encounter(peer), 2);
        assert_eq!(org.encounters.get(&peer), Some(&2));

        org.forget(peer);
        assert!(org.encounters.is_empty());
    }

    #[test]
    fn test_collision_is_strict_box_overlap() {
        let a = organism(1, 100, 100);

        // 9 apart on one axis overlaps, 10 does not.
        assert!(a.collides_with(&organism(2, 109, 100), 10));
        assert!(a.collides_with(&organism(2, 109, 109), 10));
        assert!(!a.collides_with(&organism(2, 110, 100), 10));
        assert!(!a.collides_with(&organism(2, 100, 110), 10));
    }

    #[test]
    fn test_no_self_collision() {
        let a = organism(1, 100, 100);
        assert!(!a.collides_with(&a.clone(), 10));
    }

    #[test]
    fn test_expiry_is_strictly_greater() {
        let org = organism(1, 0, 0);
        assert_eq!(org.age(320), 320);
        assert!(!org.is_expired(320, 320));
        assert!(org.is_expired(321, 320));
    }
}
