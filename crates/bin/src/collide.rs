//! Collide - Blob collision simulation binary

use sim::{config::CONFIG_FILE, Config, World};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Collide - Blob Collision Simulation v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let path = std::env::var("CONFIG").unwrap_or_else(|_| CONFIG_FILE.to_string());
    let config = Config::load_from(&path)?;
    info!("Loaded configuration from {}", path);
    info!("  World: {}x{}", config.world.width, config.world.height);
    info!("  Blobs: {} (radius {})", config.blobs.count, config.blobs.radius);
    info!("  Mode: {:?}", config.simulation.mode);

    let mut world = World::from_config(&config)?;
    let summary = world.run(config.simulation.steps);

    info!("Ran {} steps (tick {})", summary.steps, world.tick());
    info!("  Survivors: {}/{}", summary.survivors, summary.initial);
    info!("  Collisions: {} total, {} peak", summary.total_collisions, summary.peak_colliding);

    Ok(())
}
