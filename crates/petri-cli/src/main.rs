//! Headless driver: ticks the world at a fixed cadence.
//!
//! Usage: `petri [config.json] [ticks]`
//!
//! With a tick count the world is fast-forwarded headlessly and the
//! final stats printed; without one it runs on the wall clock at
//! `tick_interval_ms` until Ctrl-C.

mod sink;

use anyhow::Result;
use petri_core::WorldConfig;
use petri_world::World;
use std::path::Path;
use tokio::signal;
use tokio::time::{interval, Duration};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,petri_world=debug".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => WorldConfig::from_file(Path::new(&path))?,
        None => WorldConfig::default(),
    };
    let fast_forward: Option<u64> = match args.next() {
        Some(ticks) => Some(ticks.parse()?),
        None => None,
    };

    let tick_interval_ms = config.tick_interval_ms;
    let mut world = World::new(config, Box::new(sink::ConsoleSink::default()))?;

    if let Some(ticks) = fast_forward {
        world.run_for(ticks);
        report(&world);
        return Ok(());
    }

    info!(tick_interval_ms, "running on the wall clock, Ctrl-C to stop");

    let mut clock = interval(Duration::from_millis(tick_interval_ms));
    let shutdown = signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = clock.tick() => {
                world.tick();
                if world.ticks() % 100 == 0 {
                    report(&world);
                }
            }
            _ = &mut shutdown => {
                info!("shutdown signal received");
                break;
            }
        }
    }

    report(&world);
    Ok(())
}

fn report(world: &World) {
    info!(
        tick = world.ticks(),
        alive = world.alive_count(),
        dead = world.dead_count(),
        dominant = ?world.dominant_color().map(|c| c.to_string()),
        "world stats"
    );
}
