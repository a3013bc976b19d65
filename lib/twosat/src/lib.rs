pub mod assignment;
pub mod decide;
pub mod error;
pub mod graph;
pub mod scc;
pub mod solver;
pub mod walk;

pub use solver::{solve, Algorithm, Kosaraju, Solution, Solver};
