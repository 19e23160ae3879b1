//! Console sink: mirrors world events into the log stream.

use petri_core::{Color, OrganismId, Position};
use petri_world::RenderSink;
use tracing::{debug, info, trace};

#[derive(Default)]
pub struct ConsoleSink {
    last_dominant: Option<Color>,
}

impl RenderSink for ConsoleSink {
    fn on_organism_created(&mut self, id: OrganismId, position: Position, color: Color) {
        debug!(%id, x = position.x, y = position.y, color = %color, "created");
    }

    fn on_organism_moved(&mut self, id: OrganismId, position: Position) {
        trace!(%id, x = position.x, y = position.y, "moved");
    }

    fn on_organism_removed(&mut self, id: OrganismId) {
        debug!(%id, "removed");
    }

    fn on_stats_changed(&mut self, alive: usize, dead: u64) {
        debug!(alive, dead, "stats updated");
    }

    fn on_dominant_color_changed(&mut self, color: Option<Color>) {
        // Republished on every recompute; only log actual changes.
        if color != self.last_dominant {
            info!(dominant = ?color.map(|c| c.to_string()), "dominant color changed");
            self.last_dominant = color;
        }
    }
}
