//! Compare BFS and A* over freshly generated mazes.
//!
//! Run: cargo run --bin compare -- --size 25 --runs 3
//! Sweep: cargo run --bin compare -- --sizes 15,25,35,45

use std::error::Error;

use clap::Parser;
use labyrinth_core::Cell;
use labyrinth_demos::{CompareConfig, SWEEP_SIZES, Summary, scalability};

/// Explored-node comparison of BFS, A* Manhattan and A* Euclidean
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze side length
    #[arg(long, default_value_t = 25)]
    size: i32,

    /// Number of mazes to generate per size
    #[arg(long, default_value_t = 3)]
    runs: usize,

    /// Base random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Sweep these sizes instead of a single one (comma separated)
    #[arg(long, value_delimiter = ',')]
    sizes: Vec<i32>,

    /// Sweep the default sizes 15, 25, 35, 45
    #[arg(long, conflicts_with = "sizes")]
    sweep: bool,
}

fn print_summaries(summaries: &[Summary]) {
    println!(
        "{:<14} {:>18} {:>7} {:>24}",
        "strategy", "explored", "length", "time"
    );
    for s in summaries {
        let length = s.mean_length.map_or_else(|| "-".to_string(), |l| format!("{l:.1}"));
        println!(
            "{:<14} {:>18} {:>7} {:>24}",
            s.strategy.name(),
            format!("{:.1} ± {:.1}", s.mean_explored, s.std_explored),
            length,
            format!("{:?} ± {:?}", s.mean_elapsed, s.std_elapsed)
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    labyrinth_demos::init_logging()?;

    let args = Args::parse();
    let sizes = if args.sweep { SWEEP_SIZES.to_vec() } else { args.sizes };

    if !sizes.is_empty() {
        let sweep = scalability(&sizes, args.runs, args.seed)?;
        for report in &sweep.reports {
            println!("\n{0}x{0}, {1} run(s)", report.size, args.runs);
            print_summaries(&report.summaries);
        }
        println!("\nGrowth of explored nodes, first to last size");
        for (strategy, k) in &sweep.exponents {
            println!("{:<14} O(n^{k:.2})", strategy.name());
        }
        return Ok(());
    }

    let config = CompareConfig {
        size: args.size,
        runs: args.runs,
        seed: args.seed,
        start: Cell::new(1, 1),
        goal: None,
    };

    println!(
        "{}x{} mazes, {} -> {}",
        config.size,
        config.size,
        config.start,
        config.goal()
    );
    let runs = config.run()?;
    for (i, records) in runs.iter().enumerate() {
        println!("\nRun {}", i + 1);
        println!("{:<14} {:>9} {:>7} {:>12}", "strategy", "explored", "length", "time");
        for r in records {
            let length = r.length.map_or_else(|| "-".to_string(), |l| l.to_string());
            println!(
                "{:<14} {:>9} {:>7} {:>12}",
                r.strategy.name(),
                r.explored,
                length,
                format!("{:?}", r.elapsed)
            );
        }
    }

    let all: Vec<_> = runs.into_iter().flatten().collect();
    println!("\nMeans over {} run(s)", config.runs);
    print_summaries(&Summary::from_records(&all));
    Ok(())
}
