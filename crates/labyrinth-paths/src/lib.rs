//! Path search over labyrinth grids.
//!
//! This crate finds paths on a [`Grid`](labyrinth_core::Grid) with 4-way,
//! unit-cost moves:
//!
//! - **Uniform-cost / BFS** ([`SearchEngine::search`] with no heuristic)
//! - **A\*** ([`SearchEngine::search`] with a [`Heuristic`])
//! - **Queue BFS** and distance maps ([`SearchEngine::bfs`],
//!   [`SearchEngine::bfs_map`])
//! - **Connectivity checks** for perfect mazes ([`topology`])
//!
//! Every search reports its explored-node count, the number of frontier
//! pops, so strategies can be compared on the same grid.
//!
//! # Heuristics
//!
//! | Type | Estimate | Admissible |
//! |---|---|---|
//! | [`Zero`] | 0 | yes |
//! | [`Euclidean`] | straight-line | yes |
//! | [`Manhattan`] | `\|Δrow\| + \|Δcol\|` | yes, and tightest |
//! | [`Weighted`] | `w · inner` | only for `w ≤ 1` |

mod bfs;
mod distance;
mod error;
mod reconstruct;
mod search;
pub mod topology;
mod traits;

pub use bfs::PathNode;
pub use distance::{Euclidean, Manhattan, Weighted, Zero, euclidean, manhattan};
pub use error::SearchError;
pub use reconstruct::PredecessorMap;
pub use search::{SearchEngine, SearchOutcome, UNREACHABLE, search, unblock_endpoints};
pub use traits::Heuristic;
