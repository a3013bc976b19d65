//! Satisfiability of 2-CNF formulas via strongly connected components of the implication graph.
//!
//! ```
//! use twosat_nexus::core::cnf::Cnf;
//! use twosat_nexus::solver::solve;
//!
//! let cnf: Cnf = "p cnf 2 2\n1 2 0\n-1 -2 0\n".parse().unwrap();
//! let solution = solve(&cnf).unwrap();
//! let model = solution.model().unwrap();
//! assert_ne!(model.as_slice()[0], model.as_slice()[1]);
//! ```

pub use twosat as solver;
pub use twosat_nexus_core as core;
