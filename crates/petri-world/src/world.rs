//! World engine: tick loop, proximity queries, mating, lifecycle.

use crate::organism::Organism;
use crate::sink::RenderSink;
use petri_core::{Color, OrganismId, Position, Result, WorldConfig};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, trace};

/// The authoritative simulation state.
///
/// Owns the live organism collection and all aggregate bookkeeping.
/// `organisms` keeps insertion order; that order is the documented
/// deterministic iteration order, and it decides dominant-color ties
/// (first color found during the scan wins).
pub struct World {
    config: WorldConfig,
    organisms: Vec<Organism>,
    next_id: u64,
    tick: u64,
    dead_count: u64,
    color_count: HashMap<Color, usize>,
    rng: ChaCha8Rng,
    sink: Box<dyn RenderSink>,
}

impl World {
    pub fn new(config: WorldConfig, sink: Box<dyn RenderSink>) -> Result<Self> {
        config.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        let mut world = Self {
            config,
            organisms: Vec::new(),
            next_id: 0,
            tick: 0,
            dead_count: 0,
            color_count: HashMap::new(),
            rng,
            sink,
        };

        for _ in 0..world.config.initial_population {
            world.spawn_random();
        }
        world.update_stats();

        info!(
            arena_size = world.config.arena_size,
            initial_population = world.config.initial_population,
            max_population = world.config.max_population,
            seed = world.config.seed,
            "world initialized"
        );

        Ok(world)
    }

    /// Advance the simulation by one tick.
    ///
    /// Iterates a snapshot of the ids alive at tick start: organisms
    /// born mid-tick are not moved until the next tick, and organisms
    /// that expire mid-tick are skipped when their id comes up.
    pub fn tick(&mut self) {
        self.tick += 1;

        let snapshot: Vec<OrganismId> = self.organisms.iter().map(|o| o.id).collect();
        // Pairs already credited with an encounter this tick. One
        // colliding pair yields exactly one encounter per tick no
        // matter which side detects it.
        let mut paired: HashSet<(OrganismId, OrganismId)> = HashSet::new();

        for id in snapshot {
            self.step_organism(id, &mut paired);
        }
    }

    /// Drive `tick()` in a loop, with periodic population snapshots.
    pub fn run_for(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();

            if self.tick % 100 == 0 {
                info!(
                    tick = self.tick,
                    alive = self.organisms.len(),
                    dead = self.dead_count,
                    dominant = ?self.dominant_color().map(|c| c.to_string()),
                    "population snapshot"
                );
            }
        }
    }

    /// All organisms within the proximity radius of `id` on both axes,
    /// including `id` itself. A broad pre-filter; the collision box is
    /// narrower.
    pub fn nearby(&self, id: OrganismId) -> Vec<OrganismId> {
        let Some(origin) = self.get(id) else {
            return Vec::new();
        };
        self.organisms
            .iter()
            .filter(|o| o.position.within(&origin.position, self.config.proximity_radius))
            .map(|o| o.id)
            .collect()
    }

    /// Spawn a parentless organism at a random position with a random
    /// color.
    pub fn spawn_random(&mut self) -> OrganismId {
        let position = self.random_position();
        let color = Color::random(&mut self.rng);
        self.register(position, color)
    }

    /// Current color with the strictly greatest live count, `None`
    /// when the arena is empty. Ties keep whichever color appears
    /// first in insertion order.
    pub fn dominant_color(&self) -> Option<Color> {
        let mut best: Option<(Color, usize)> = None;
        for organism in &self.organisms {
            let count = self
                .color_count
                .get(&organism.color)
                .copied()
                .unwrap_or(0);
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((organism.color, count));
            }
        }
        best.map(|(color, _)| color)
    }

    pub fn get(&self, id: OrganismId) -> Option<&Organism> {
        self.organisms.iter().find(|o| o.id == id)
    }

    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    pub fn alive_count(&self) -> usize {
        self.organisms.len()
    }

    pub fn dead_count(&self) -> u64 {
        self.dead_count
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Live organisms currently wearing `color`.
    pub fn color_population(&self, color: Color) -> usize {
        self.color_count.get(&color).copied().unwrap_or(0)
    }

    pub fn color_counts(&self) -> &HashMap<Color, usize> {
        &self.color_count
    }

    /// Move one organism, handle its collisions, then check its age.
    /// Collisions come first, matching the original ordering, so an
    /// organism can still mate on the tick it expires.
    fn step_organism(&mut self, id: OrganismId, paired: &mut HashSet<(OrganismId, OrganismId)>) {
        let Some(idx) = self.index_of(id) else {
            return; // expired earlier this tick
        };

        // Random displacement, clamped into the arena.
        let step = self.config.move_step;
        let dx = self.rng.gen_range(-step..=step);
        let dy = self.rng.gen_range(-step..=step);
        let max = self.config.position_max();
        let new_position = {
            let organism = &mut self.organisms[idx];
            organism.position = organism.position.add(dx, dy).clamp(max);
            organism.position
        };
        self.sink.on_organism_moved(id, new_position);

        // Collision handling: broad proximity pass, then the strict
        // box-overlap check against each candidate.
        let entity_size = self.config.entity_size;
        for other_id in self.nearby(id) {
            if other_id == id {
                continue;
            }
            let Some(other_idx) = self.index_of(other_id) else {
                continue;
            };
            if !self.organisms[idx].collides_with(&self.organisms[other_idx], entity_size) {
                continue;
            }
            if !paired.insert(pair_key(id, other_id)) {
                continue; // this pair already met this tick
            }

            // Mirror the count into both maps so either side observes
            // the same pair total.
            let count = self.organisms[idx].record_encounter(other_id);
            self.organisms[other_idx].record_encounter(id);

            // Equality-based firing: the count advances by one per
            // encounter, so the threshold is crossed exactly once per
            // pair and later collisions never re-fire.
            if count == self.config.mating_threshold {
                self.mate(id, other_id);
            }
        }

        if let Some(organism) = self.get(id) {
            if organism.is_expired(self.tick, self.config.lifespan_ticks) {
                self.kill(id);
            }
        }
    }

    /// Produce an offspring of the pair, unless the population is at
    /// the cap — then the mating is silently dropped.
    fn mate(&mut self, a: OrganismId, b: OrganismId) {
        if self.organisms.len() >= self.config.max_population {
            trace!(
                parent_a = %a,
                parent_b = %b,
                population = self.organisms.len(),
                "mating dropped: population at cap"
            );
            return;
        }
        let (Some(ia), Some(ib)) = (self.index_of(a), self.index_of(b)) else {
            return;
        };

        // 50/50 color inheritance; offspring materialize at a fresh
        // random position, not next to the parents.
        let color = if self.rng.gen_bool(0.5) {
            self.organisms[ia].color
        } else {
            self.organisms[ib].color
        };
        let position = self.random_position();
        let offspring = self.register(position, color);

        debug!(
            parent_a = %a,
            parent_b = %b,
            offspring = %offspring,
            tick = self.tick,
            "mating produced offspring"
        );
    }

    /// Remove an organism from the live set and fix up all aggregates.
    fn kill(&mut self, id: OrganismId) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        let organism = self.organisms.remove(idx);

        for survivor in &mut self.organisms {
            survivor.forget(id);
        }

        self.dead_count += 1;
        if let Some(count) = self.color_count.get_mut(&organism.color) {
            *count -= 1;
            if *count == 0 {
                self.color_count.remove(&organism.color);
            }
        }

        self.sink.on_organism_removed(id);
        debug!(
            organism_id = %id,
            color = %organism.color,
            age = organism.age(self.tick),
            tick = self.tick,
            "organism died"
        );
        self.update_stats();
    }

    /// Republish alive/dead counts and the dominant color.
    fn update_stats(&mut self) {
        let alive = self.organisms.len();
        let dead = self.dead_count;
        self.sink.on_stats_changed(alive, dead);
        self.update_dominant_color();
    }

    fn update_dominant_color(&mut self) {
        let dominant = self.dominant_color();
        self.sink.on_dominant_color_changed(dominant);
    }

    /// Insert a new organism into the live set and notify the sink.
    fn register(&mut self, position: Position, color: Color) -> OrganismId {
        let id = self.allocate_id();
        self.organisms
            .push(Organism::new(id, position, color, self.tick));
        *self.color_count.entry(color).or_insert(0) += 1;

        self.sink.on_organism_created(id, position, color);
        self.update_dominant_color();
        debug!(
            organism_id = %id,
            color = %color,
            tick = self.tick,
            "organism born"
        );
        id
    }

    fn allocate_id(&mut self) -> OrganismId {
        let id = OrganismId(self.next_id);
        self.next_id += 1;
        id
    }

    fn index_of(&self, id: OrganismId) -> Option<usize> {
        self.organisms.iter().position(|o| o.id == id)
    }

    fn random_position(&mut self) -> Position {
        let max = self.config.position_max();
        Position::new(self.rng.gen_range(0..=max), self.rng.gen_range(0..=max))
    }
}

/// Order-independent key for a colliding pair.
fn pair_key(a: OrganismId, b: OrganismId) -> (OrganismId, OrganismId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
