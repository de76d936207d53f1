//! wrapkit demo - runs each adapter on a small example function

mod scenarios;

use std::num::NonZeroUsize;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use wrapkit::{CachePolicy, DelayConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seconds the delayed example waits when it is wrapped
    #[arg(short, long, default_value_t = 5.0)]
    wait: f64,

    /// Bound the memoized example with an LRU cache of this many entries
    #[arg(short, long)]
    capacity: Option<NonZeroUsize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let delay = DelayConfig::from_secs_f64(cli.wait)?;
    let policy = cli.capacity.map_or(CachePolicy::Unbounded, CachePolicy::Lru);

    info!("Starting wrapdemo v{}", env!("CARGO_PKG_VERSION"));

    let a = scenarios::debugged_sum()?;
    println!("a = {}", a);

    info!("Wrapping another_sum with a {:?} delay", delay.wait);
    let b = scenarios::delayed_sum(delay)?;
    println!("b = {}", b);

    let stats = scenarios::cached_sum(policy)?;
    info!(
        "usual_sum cache: {} hits, {} misses, {} evictions",
        stats.hits, stats.misses, stats.evictions
    );

    Ok(())
}
