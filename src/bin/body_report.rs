//! Body Report
//!
//! Spawns a body from the catalog, applies wounds and prints the resulting
//! property values.

use anatomy::catalog::CatalogRegistry;
use anatomy::core::calendar::Time;
use anatomy::core::config::{config, set_config, AnatomyConfig};
use anatomy::core::error::{AnatomyError, Result};
use anatomy::entity::{Body, Identity, Wound};
use anatomy::simulation::report::BodyReport;
use anatomy::simulation::skirmish::inflict_random_wounds;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// Apply wounds to a body and report its properties
#[derive(Parser, Debug)]
#[command(name = "body_report")]
#[command(about = "Apply wounds to a catalog body and report its properties")]
struct Args {
    /// Extra catalog file (TOML) loaded on top of the built-in humanoid
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Aggregation config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Body type to spawn
    #[arg(long, default_value = "humanoid")]
    body: String,

    /// Character name
    #[arg(long, default_value = "Subject")]
    name: String,

    /// Wound to apply, as <part name>=<hit points>; repeatable
    #[arg(long = "wound", value_parser = parse_wound)]
    wounds: Vec<(String, f64)>,

    /// Number of random wounds to apply after the explicit ones
    #[arg(long, default_value_t = 0)]
    random_wounds: usize,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

fn parse_wound(s: &str) -> std::result::Result<(String, f64), String> {
    let (part, hit_points) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected <part>=<hit points>, got '{}'", s))?;
    let hit_points = hit_points
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad hit points in '{}': {}", s, e))?;
    Ok((part.trim().to_string(), hit_points))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("anatomy=info")
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Some(path) = &args.config {
        let loaded = AnatomyConfig::from_toml_str(&std::fs::read_to_string(path)?)?;
        if set_config(loaded).is_err() {
            tracing::warn!("Config already initialised, ignoring {}", path.display());
        }
    }

    let mut registry = CatalogRegistry::with_builtins()?;
    if let Some(path) = &args.catalog {
        registry.load_file(path)?;
    }

    let body_type = registry.require_body(&args.body)?;
    let mut body = Body::new(body_type, Identity::named(&args.name));

    for (part, hit_points) in &args.wounds {
        body.record_wound_by_name(part, Wound::new(*hit_points))?;
    }

    if args.random_wounds > 0 {
        let seed = args.seed.unwrap_or_else(rand::random);
        tracing::info!(seed, count = args.random_wounds, "Inflicting random wounds");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        inflict_random_wounds(&mut body, args.random_wounds, None, Time::zero(), &mut rng)?;
    }

    let report = BodyReport::new(&body, config());
    match args.format.as_str() {
        "json" => println!("{}", report.to_json()?),
        "text" => print!("{}", report.summary()),
        other => {
            return Err(AnatomyError::InvalidConfig(format!(
                "unknown output format '{}'",
                other
            )))
        }
    }

    Ok(())
}
