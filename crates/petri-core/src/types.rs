//! Core type definitions for the simulation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an organism.
///
/// Ids are allocated from a monotonic counter owned by the world, so
/// equality and hashing never depend on reference identity. Encounter
/// maps key on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrganismId(pub u64);

impl fmt::Display for OrganismId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "organism-{}", self.0)
    }
}

/// 2D position in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn add(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Clamp both axes into `[0, max]`.
    pub fn clamp(&self, max: i32) -> Self {
        Self {
            x: self.x.clamp(0, max),
            y: self.y.clamp(0, max),
        }
    }

    /// True when both axis deltas are strictly below `threshold`.
    ///
    /// This is the independent-axis (Chebyshev-style) test used for
    /// both the broad proximity pre-filter and the narrow collision
    /// box, with different thresholds.
    pub fn within(&self, other: &Position, threshold: i32) -> bool {
        (self.x - other.x).abs() < threshold && (self.y - other.y).abs() < threshold
    }
}

/// An organism's color pattern, immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniform random color for parentless spawns.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            r: rng.gen(),
            g: rng.gen(),
            b: rng.gen(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
