//! Weave - Demonstration entry point
//!
//! Wraps a factorial calculator in a proxy built from configuration and
//! computes factorials through it. With the default aspects every call is
//! timed and repeated inputs are answered from the result cache.
//!
//! ```text
//! weave --impl iter --repeat 2 5 10 20
//! WEAVE__ASPECTS__CACHING__ENABLED=false weave 15
//! ```

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use weave::calculator::{Calculator, CalculatorProxy, ImpeCalculator, RecCalculator};
use weave::domain::ports::Invocable;
use weave::infrastructure::logging::init_logging;
use weave::infrastructure::{AspectCatalog, ConfigLoader};

/// Calculator implementation to proxy
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Implementation {
    /// Recursive
    Rec,
    /// Iterative
    Iter,
}

/// Command line interface for the Weave demo
#[derive(Parser, Debug)]
#[command(name = "weave")]
#[command(about = "Weave - factorials through a caching, timing proxy")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Calculator implementation
    #[arg(long = "impl", value_enum, default_value_t = Implementation::Rec)]
    implementation: Implementation,

    /// How many times each number is computed
    #[arg(long, default_value_t = 2)]
    repeat: usize,

    /// Numbers to compute factorials of
    #[arg(default_values_t = [5_i64, 10], allow_negative_numbers = true)]
    numbers: Vec<i64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let catalog =
        AspectCatalog::with_tracing(&config.aspects).context("Failed to build aspect catalog")?;
    let target: Arc<dyn Invocable> = match cli.implementation {
        Implementation::Rec => Arc::new(RecCalculator),
        Implementation::Iter => Arc::new(ImpeCalculator),
    };
    let calculator = CalculatorProxy::new(
        catalog
            .proxy(target)
            .context("Failed to proxy the calculator")?,
    );

    for round in 1..=cli.repeat {
        for &num in &cli.numbers {
            match calculator.factorial(num) {
                Ok(result) => println!("[round {}] {}! = {}", round, num, result),
                Err(e) => println!("[round {}] {}! failed: {}", round, num, e),
            }
        }
    }

    let stats = catalog.cache_stats();
    println!(
        "cache: {} hits, {} misses, {} entries, hit rate {:.2}",
        stats.hits, stats.misses, stats.entries, stats.hit_rate
    );
    Ok(())
}
