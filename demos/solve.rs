//! Generate one maze and solve it with a chosen strategy.
//!
//! Run: cargo run --bin solve -- --size 15 --strategy manhattan

use std::error::Error;

use clap::Parser;
use labyrinth_core::Cell;
use labyrinth_demos::{Strategy, render};
use labyrinth_gen::generate;
use labyrinth_paths::SearchEngine;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Solve a generated perfect maze from (1, 1) to the far corner
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze side length
    #[arg(long, default_value_t = 15)]
    size: i32,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Search strategy
    #[arg(long, value_enum, default_value_t = Strategy::Manhattan)]
    strategy: Strategy,
}

fn main() -> Result<(), Box<dyn Error>> {
    labyrinth_demos::init_logging()?;

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut grid = generate(args.size, StdRng::seed_from_u64(seed))?;

    let start = Cell::new(1, 1);
    let goal = Cell::new(args.size - 2, args.size - 2);
    let engine = SearchEngine::prepare(&mut grid, start, goal)?;
    let outcome = args.strategy.run(engine, start, goal)?;

    print!("{}", render(engine.grid(), outcome.path.as_deref()));
    match outcome.length() {
        Some(len) => println!(
            "{}: path of {len} steps, {} cells explored (seed {seed})",
            args.strategy, outcome.explored
        ),
        None => println!(
            "{}: no path from {start} to {goal}, {} cells explored (seed {seed})",
            args.strategy, outcome.explored
        ),
    }
    Ok(())
}
