// Board model and word search

pub mod grid;
pub mod solver;

pub use grid::Grid;
pub use solver::{SolveStats, Solver};
