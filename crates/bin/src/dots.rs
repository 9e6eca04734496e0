//! Dots - Random dot survey binary

use sim::{config::CONFIG_FILE, rng_from_seed, run_survey, Config};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Dots - Quadtree Survey v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let path = std::env::var("CONFIG").unwrap_or_else(|_| CONFIG_FILE.to_string());
    let config = Config::load_from(&path)?;
    info!("Loaded configuration from {}", path);
    info!("  Dots: {}", config.survey.dots);
    info!("  Queries: {} (radius {})", config.survey.queries, config.survey.radius);

    let mut rng = rng_from_seed(config.simulation.seed);
    let report = run_survey(&config, &mut rng)?;

    info!("Tree: {} nodes, depth {}", report.tree_size, report.tree_depth);
    info!("  Hits: {}", report.total_hits);
    info!(
        "  Nodes reached: {} ({} visited, {} pruned)",
        report.total_stats.nodes_reached(),
        report.total_stats.nodes_visited,
        report.total_stats.nodes_pruned
    );
    if report.mismatches > 0 {
        warn!("{} queries disagreed with a linear scan", report.mismatches);
        anyhow::bail!("survey found {} mismatching queries", report.mismatches);
    }

    Ok(())
}
