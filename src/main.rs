use std::path::PathBuf;

use carpark::config::{Algorithm, ConfigError, DemoConfig};
use carpark::{Arrangement, DetailedMove, Item, Move, Slot};
use crossterm::style::Stylize;
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn load_config() -> Result<DemoConfig, ConfigError> {
    let path = std::env::var_os("PARKING_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("parking.toml"));

    match DemoConfig::load(&path) {
        Err(ConfigError::Io(_)) if !path.exists() => Ok(DemoConfig::default()),
        other => other,
    }
}

fn render(lot: &Arrangement, filled: Option<Slot>) -> String {
    let mut out = String::new();
    for slot in lot.slots() {
        let cell = match lot.item_at(slot) {
            Some(Item::Car(car)) if Some(slot) == filled => {
                format!("[{:>3}]", car.0).green().bold().to_string()
            }
            Some(Item::Car(car)) => format!("[{:>3}]", car.0),
            _ => "[   ]".dark_grey().to_string(),
        };
        out.push_str(&cell);
        out.push(' ');
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("carpark=info")),
        )
        .init();

    let config = load_config()?;
    info!(slots = config.slots, algorithm = ?config.algorithm, "loaded config");

    let source = Arrangement::parked_in_order(config.slots)?;
    let goal = match config.seed {
        Some(seed) => source.shuffled(&mut StdRng::seed_from_u64(seed)),
        None => source.shuffled(&mut thread_rng()),
    };

    println!("Initial lot:\n{}\n", render(&source, None));
    println!("Goal lot:\n{}\n", render(&goal, None));

    let moves: Vec<Move> = match config.algorithm {
        Algorithm::Linear => source.compute_moves(&goal)?,
        Algorithm::Minimal => source.compute_minimal_moves(&goal)?,
        Algorithm::Enumerate => {
            let solutions = source.enumerate_move_sequences(&goal);
            info!(solutions = solutions.len(), "enumerated move sequences");
            let Some(shortest) = solutions.into_iter().min_by_key(Vec::len) else {
                warn!("goal is unreachable");
                return Ok(());
            };
            shortest.into_iter().map(Move::from).collect()
        }
    };
    println!("Found solution with {} moves\n", moves.len());

    let mut lot = source.clone();
    for mv in &moves {
        let DetailedMove { to, .. } = lot.apply(mv)?;
        println!("{}\n{}\n", mv, render(&lot, Some(to)));
    }

    Ok(())
}
