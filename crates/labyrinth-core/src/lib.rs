//! **labyrinth-core**: square wall/open grids and cell coordinates.
//!
//! This crate provides the types shared by the *labyrinth* crates: the
//! [`Cell`] coordinate, the [`Grid`] of [`Tile`] values that maze
//! generators carve and searches read, and [`GridError`].

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Cell, DIRECTIONS_4};
pub use grid::{Grid, Tile};
