//! Perfect-maze generation for labyrinth grids.
//!
//! [`MazeGen`] carves a [`Grid`](labyrinth_core::Grid) with randomized Prim
//! growth. The random source is passed in, so a seeded RNG reproduces the
//! same maze.

pub mod mapgen;

pub use mapgen::{FrontierWall, MazeGen, generate};
