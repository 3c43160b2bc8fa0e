//! Shared model for the maze demos.
//!
//! Runs BFS and both A* variants on the same generated maze, collects their
//! explored counts and timings, and renders grids as ASCII.

use std::fmt;
use std::time::{Duration, Instant};

use clap::ValueEnum;
use labyrinth_core::{Cell, Grid, Tile};
use labyrinth_gen::generate;
use labyrinth_paths::{
    Euclidean, Heuristic, Manhattan, SearchEngine, SearchError, SearchOutcome, unblock_endpoints,
};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A search strategy under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Strategy {
    Bfs,
    Manhattan,
    Euclidean,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Bfs, Strategy::Manhattan, Strategy::Euclidean];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::Manhattan => "A* Manhattan",
            Strategy::Euclidean => "A* Euclidean",
        }
    }

    /// The heuristic to hand the engine; `None` for BFS.
    pub fn heuristic(self) -> Option<&'static dyn Heuristic> {
        match self {
            Strategy::Bfs => None,
            Strategy::Manhattan => Some(&Manhattan),
            Strategy::Euclidean => Some(&Euclidean),
        }
    }

    pub fn run(
        self,
        engine: SearchEngine<'_>,
        start: Cell,
        goal: Cell,
    ) -> Result<SearchOutcome, SearchError> {
        engine.search(start, goal, self.heuristic())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One strategy's result on one maze.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub strategy: Strategy,
    pub explored: usize,
    /// Edge count of the path found, `None` when the goal is unreachable.
    pub length: Option<usize>,
    pub elapsed: Duration,
}

/// Run every strategy from `start` to `goal` on a copy of `grid`.
///
/// Walled endpoints are opened on the copy first, so all strategies see
/// the same grid. Records come back in [`Strategy::ALL`] order.
pub fn compare(grid: &Grid, start: Cell, goal: Cell) -> Result<Vec<RunRecord>, SearchError> {
    let mut grid = grid.clone();
    unblock_endpoints(&mut grid, start, goal)?;
    let engine = SearchEngine::new(&grid);

    Strategy::ALL
        .into_iter()
        .map(|strategy| {
            let t0 = Instant::now();
            let outcome = strategy.run(engine, start, goal)?;
            let elapsed = t0.elapsed();
            info!(
                "{strategy}: explored {}, length {:?}, {elapsed:?}",
                outcome.explored,
                outcome.length()
            );
            Ok(RunRecord {
                strategy,
                explored: outcome.explored,
                length: outcome.length(),
                elapsed,
            })
        })
        .collect()
}

/// Mean and spread for one strategy over repeated runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub strategy: Strategy,
    pub runs: usize,
    pub mean_explored: f64,
    /// Population standard deviation of the explored counts.
    pub std_explored: f64,
    /// Mean over the runs that found a path.
    pub mean_length: Option<f64>,
    pub mean_elapsed: Duration,
    pub std_elapsed: Duration,
}

impl Summary {
    /// Average `records` per strategy, in [`Strategy::ALL`] order. Strategies
    /// without records are left out.
    pub fn from_records(records: &[RunRecord]) -> Vec<Summary> {
        Strategy::ALL
            .into_iter()
            .filter_map(|strategy| {
                let mine: Vec<&RunRecord> =
                    records.iter().filter(|r| r.strategy == strategy).collect();
                if mine.is_empty() {
                    return None;
                }
                let runs = mine.len();
                let explored: Vec<f64> = mine.iter().map(|r| r.explored as f64).collect();
                let (mean_explored, std_explored) = mean_std(&explored);
                let lengths: Vec<usize> = mine.iter().filter_map(|r| r.length).collect();
                let mean_length = (!lengths.is_empty())
                    .then(|| lengths.iter().sum::<usize>() as f64 / lengths.len() as f64);
                let elapsed: Duration = mine.iter().map(|r| r.elapsed).sum();
                let secs: Vec<f64> = mine.iter().map(|r| r.elapsed.as_secs_f64()).collect();
                let (_, std_secs) = mean_std(&secs);
                Some(Summary {
                    strategy,
                    runs,
                    mean_explored,
                    std_explored,
                    mean_length,
                    mean_elapsed: elapsed / runs as u32,
                    std_elapsed: Duration::from_secs_f64(std_secs),
                })
            })
            .collect()
    }
}

/// Mean and population standard deviation; `(0, 0)` for no values.
fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

/// Settings for a batch of comparisons on fresh mazes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    pub size: i32,
    pub runs: usize,
    /// Base seed; run `i` uses `seed + i`. Drawn at random when `None`.
    pub seed: Option<u64>,
    pub start: Cell,
    /// Defaults to `(size - 2, size - 2)` when `None`.
    pub goal: Option<Cell>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            size: 25,
            runs: 3,
            seed: None,
            start: Cell::new(1, 1),
            goal: None,
        }
    }
}

impl CompareConfig {
    pub fn goal(&self) -> Cell {
        self.goal.unwrap_or(Cell::new(self.size - 2, self.size - 2))
    }

    /// Generate `runs` mazes and compare all strategies on each. Returns one
    /// record list per run.
    pub fn run(&self) -> Result<Vec<Vec<RunRecord>>, SearchError> {
        let base = self.seed.unwrap_or_else(|| rand::rng().random());
        let goal = self.goal();
        (0..self.runs)
            .map(|i| {
                let seed = base.wrapping_add(i as u64);
                let grid = generate(self.size, StdRng::seed_from_u64(seed))?;
                info!("run {}: {}x{} maze, seed {seed}", i + 1, self.size, self.size);
                compare(&grid, self.start, goal)
            })
            .collect()
    }
}

/// Maze sizes swept by [`scalability`] when none are given.
pub const SWEEP_SIZES: [i32; 4] = [15, 25, 35, 45];

/// Summaries for one maze size of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeReport {
    pub size: i32,
    pub summaries: Vec<Summary>,
}

/// Outcome of a size sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Scalability {
    pub reports: Vec<SizeReport>,
    /// Growth exponent of mean explored nodes between the first and last
    /// size, per strategy. See [`growth_exponent`].
    pub exponents: Vec<(Strategy, f64)>,
}

/// Estimate `k` in `explored ~ size^k` from two `(size, explored)` points:
/// `ln(n_last / n_first) / ln(size_last / size_first)`.
///
/// Returns `None` when the sizes are equal or any value is not positive.
pub fn growth_exponent(first: (i32, f64), last: (i32, f64)) -> Option<f64> {
    let ((s0, n0), (s1, n1)) = (first, last);
    if s0 <= 0 || s1 <= 0 || s0 == s1 || n0 <= 0.0 || n1 <= 0.0 {
        return None;
    }
    Some((n1 / n0).ln() / (f64::from(s1) / f64::from(s0)).ln())
}

/// Run `runs` comparisons at each of `sizes` from `(1, 1)` to the far corner
/// and estimate how explored counts grow with size.
pub fn scalability(
    sizes: &[i32],
    runs: usize,
    seed: Option<u64>,
) -> Result<Scalability, SearchError> {
    let reports = sizes
        .iter()
        .map(|&size| {
            let config = CompareConfig {
                size,
                runs,
                seed,
                ..CompareConfig::default()
            };
            let records: Vec<RunRecord> = config.run()?.into_iter().flatten().collect();
            let summaries = Summary::from_records(&records);
            for s in &summaries {
                info!(
                    "{size}x{size} {}: explored {:.1} ± {:.1}",
                    s.strategy, s.mean_explored, s.std_explored
                );
            }
            Ok(SizeReport { size, summaries })
        })
        .collect::<Result<Vec<_>, SearchError>>()?;

    let exponents = Strategy::ALL
        .into_iter()
        .filter_map(|strategy| {
            let point = |r: &SizeReport| {
                r.summaries
                    .iter()
                    .find(|s| s.strategy == strategy)
                    .map(|s| (r.size, s.mean_explored))
            };
            let first = reports.first().and_then(point)?;
            let last = reports.last().and_then(point)?;
            growth_exponent(first, last).map(|k| (strategy, k))
        })
        .collect();

    Ok(Scalability { reports, exponents })
}

/// Install an `env_logger` backend filtering at `info` unless `RUST_LOG`
/// says otherwise.
pub fn init_logging() -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init()
}

/// ASCII view of `grid`: `#` wall, space open, `*` path, `S` and `G` for the
/// path's first and last cells. Each row ends with a newline.
pub fn render(grid: &Grid, path: Option<&[Cell]>) -> String {
    let path = path.unwrap_or(&[]);
    let size = grid.size();
    let mut out = String::with_capacity(grid.len() + size.max(0) as usize);
    for row in 0..size {
        for col in 0..size {
            let c = Cell::new(row, col);
            let ch = if path.first() == Some(&c) {
                'S'
            } else if path.last() == Some(&c) {
                'G'
            } else if path.contains(&c) {
                '*'
            } else {
                match grid.at(c) {
                    Some(Tile::Open) => ' ',
                    _ => '#',
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze(size: i32, seed: u64) -> Grid {
        generate(size, StdRng::seed_from_u64(seed)).unwrap()
    }

    fn corners(size: i32) -> (Cell, Cell) {
        (Cell::new(1, 1), Cell::new(size - 2, size - 2))
    }

    #[test]
    fn strategy_names() {
        let names: Vec<String> = Strategy::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["BFS", "A* Manhattan", "A* Euclidean"]);
        assert!(Strategy::Bfs.heuristic().is_none());
        assert_eq!(Strategy::from_str("manhattan", true), Ok(Strategy::Manhattan));
    }

    #[test]
    fn strategies_agree_on_paths() {
        for size in [5, 9, 15, 25] {
            for seed in 0..8 {
                let g = maze(size, seed);
                let (start, goal) = corners(size);
                let records = compare(&g, start, goal).unwrap();
                let bfs = &records[0];
                assert_eq!(bfs.strategy, Strategy::Bfs);
                assert!(bfs.length.is_some());
                for r in &records[1..] {
                    assert_eq!(r.length, bfs.length, "size {size} seed {seed}");
                    assert!(r.explored <= bfs.explored, "{} size {size} seed {seed}", r.strategy);
                }
            }
        }
    }

    // Both heuristics are consistent, but cells with f equal to the path
    // length pop in insertion order, so on a single maze Manhattan can pop a
    // few more than Euclidean. Only the total over many mazes is compared.
    #[test]
    fn manhattan_explores_no_more_than_euclidean_overall() {
        let (start, goal) = corners(21);
        let (mut man, mut euc) = (0, 0);
        for seed in 0..20 {
            let records = compare(&maze(21, seed), start, goal).unwrap();
            man += records[1].explored;
            euc += records[2].explored;
        }
        assert!(man <= euc, "manhattan {man} euclidean {euc}");
    }

    #[test]
    fn small_maze_scenario() {
        let g = maze(5, 11);
        assert_eq!(g.open_count(), 7);
        let (start, goal) = corners(5);
        let records = compare(&g, start, goal).unwrap();
        assert!(records.iter().all(|r| r.length == Some(4)));
        assert!(records[1].explored <= records[0].explored);
    }

    #[test]
    fn even_size_goal_is_isolated() {
        let g = maze(6, 4);
        let (start, goal) = corners(6);
        assert!(!g.is_open(goal));
        let records = compare(&g, start, goal).unwrap();
        for r in &records {
            assert_eq!(r.length, None);
            assert_eq!(r.explored, g.open_count());
        }
        // The caller's grid is left as it was.
        assert!(!g.is_open(goal));
    }

    #[test]
    fn repeated_comparisons_are_stable() {
        let g = maze(17, 8);
        let (start, goal) = corners(17);
        let a = compare(&g, start, goal).unwrap();
        let b = compare(&g, start, goal).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!((x.strategy, x.explored, x.length), (y.strategy, y.explored, y.length));
        }
    }

    #[test]
    fn out_of_bounds_endpoint() {
        let g = maze(5, 0);
        assert_eq!(
            compare(&g, Cell::new(1, 1), Cell::new(5, 5)),
            Err(SearchError::OutOfBounds(Cell::new(5, 5)))
        );
    }

    #[test]
    fn summary_means() {
        let rec = |strategy, explored, length, ms| RunRecord {
            strategy,
            explored,
            length,
            elapsed: Duration::from_millis(ms),
        };
        let records = [
            rec(Strategy::Bfs, 10, Some(4), 2),
            rec(Strategy::Manhattan, 5, Some(4), 1),
            rec(Strategy::Bfs, 20, None, 4),
            rec(Strategy::Manhattan, 7, None, 3),
        ];
        let summary = Summary::from_records(&records);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].strategy, Strategy::Bfs);
        assert_eq!(summary[0].runs, 2);
        assert_eq!(summary[0].mean_explored, 15.0);
        assert_eq!(summary[0].mean_length, Some(4.0));
        assert_eq!(summary[0].mean_elapsed, Duration::from_millis(3));
        assert_eq!(summary[1].mean_explored, 6.0);
        assert_eq!(summary[1].mean_elapsed, Duration::from_millis(2));
        assert_eq!(summary[0].std_explored, 5.0);
        assert_eq!(summary[1].std_explored, 1.0);
        assert!((summary[0].std_elapsed.as_secs_f64() - 0.001).abs() < 1e-6);
        assert!((summary[1].std_elapsed.as_secs_f64() - 0.001).abs() < 1e-6);
        assert!(Summary::from_records(&[]).is_empty());
    }

    #[test]
    fn config_defaults_and_runs() {
        let cfg = CompareConfig::default();
        assert_eq!(cfg.size, 25);
        assert_eq!(cfg.runs, 3);
        assert_eq!(cfg.goal(), Cell::new(23, 23));

        let cfg = CompareConfig {
            size: 11,
            runs: 2,
            seed: Some(7),
            ..CompareConfig::default()
        };
        let first = cfg.run().unwrap();
        let again = cfg.run().unwrap();
        assert_eq!(first.len(), 2);
        assert!(first.iter().all(|run| run.len() == Strategy::ALL.len()));
        let lengths = |runs: &[Vec<RunRecord>]| -> Vec<Option<usize>> {
            runs.iter().flatten().map(|r| r.length).collect()
        };
        assert_eq!(lengths(&first), lengths(&again));
    }

    #[test]
    fn invalid_size_surfaces_grid_error() {
        let cfg = CompareConfig {
            size: 0,
            seed: Some(1),
            ..CompareConfig::default()
        };
        assert!(matches!(cfg.run(), Err(SearchError::Grid(_))));
    }

    #[test]
    fn single_run_has_no_spread() {
        let records = [RunRecord {
            strategy: Strategy::Euclidean,
            explored: 9,
            length: Some(4),
            elapsed: Duration::from_micros(40),
        }];
        let summary = Summary::from_records(&records);
        assert_eq!(summary[0].std_explored, 0.0);
        assert_eq!(summary[0].std_elapsed, Duration::ZERO);
    }

    #[test]
    fn growth_exponent_from_two_points() {
        let quadratic = growth_exponent((10, 100.0), (20, 400.0)).unwrap();
        assert!((quadratic - 2.0).abs() < 1e-12);
        let flat = growth_exponent((15, 50.0), (45, 50.0)).unwrap();
        assert_eq!(flat, 0.0);
        assert_eq!(growth_exponent((15, 50.0), (15, 80.0)), None);
        assert_eq!(growth_exponent((15, 0.0), (45, 80.0)), None);
    }

    #[test]
    fn size_sweep_reports_every_size() {
        let sweep = scalability(&[5, 9], 2, Some(3)).unwrap();
        let sizes: Vec<i32> = sweep.reports.iter().map(|r| r.size).collect();
        assert_eq!(sizes, [5, 9]);
        for report in &sweep.reports {
            assert_eq!(report.summaries.len(), Strategy::ALL.len());
            assert!(report.summaries.iter().all(|s| s.runs == 2));
        }
        // A 9x9 path needs at least 12 steps, a 5x5 maze has only 7 open cells.
        assert_eq!(sweep.exponents.len(), Strategy::ALL.len());
        assert!(sweep.exponents.iter().all(|&(_, k)| k > 0.0));
        assert!(scalability(&[], 2, Some(3)).unwrap().exponents.is_empty());
    }

    #[test]
    fn logging_can_be_installed() {
        let _ = init_logging();
        assert!(log::max_level() > log::LevelFilter::Off);
    }

    #[test]
    fn render_marks_path() {
        let g = Grid::from_ascii("...\n.#.\n...").unwrap();
        let path = [
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(1, 2),
        ];
        assert_eq!(render(&g, Some(&path)), "S**\n #G\n   \n");
        assert_eq!(render(&g, None), "   \n # \n   \n");
    }
}
