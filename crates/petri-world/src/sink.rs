//! Rendering sink notifications.
//!
//! The world publishes lifecycle events through this trait so the
//! simulation runs headlessly; a frontend attaches here to mirror the
//! arena visually. Every method has a no-op default, so a sink only
//! implements the events it cares about.

use petri_core::{Color, OrganismId, Position};

pub trait RenderSink {
    fn on_organism_created(&mut self, _id: OrganismId, _position: Position, _color: Color) {}

    fn on_organism_moved(&mut self, _id: OrganismId, _position: Position) {}

    fn on_organism_removed(&mut self, _id: OrganismId) {}

    fn on_stats_changed(&mut self, _alive: usize, _dead: u64) {}

    /// `None` means no organisms are alive.
    fn on_dominant_color_changed(&mut self, _color: Option<Color>) {}
}

/// Sink that discards every event, for headless runs and tests.
pub struct NullSink;

impl RenderSink for NullSink {}
