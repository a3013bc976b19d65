use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::{debug, info};

use twosat_nexus_core::cnf::Cnf;
use twosat_nexus_core::model::Model;
use twosat_nexus_core::response::SolveResponse;

use crate::assignment::extract_assignment;
use crate::decide::decide;
use crate::error::{Result, SolveError, UnknownAlgorithmSnafu};
use crate::graph::ImplicationGraph;
use crate::scc::Components;
use crate::walk::{Options, RandomWalk};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Solution {
    Sat { model: Model },
    Unsat,
    Unknown,
}

impl Solution {
    pub fn response(&self) -> SolveResponse {
        match self {
            Solution::Sat { .. } => SolveResponse::Sat,
            Solution::Unsat => SolveResponse::Unsat,
            Solution::Unknown => SolveResponse::Unknown,
        }
    }

    pub fn model(&self) -> Option<&Model> {
        match self {
            Solution::Sat { model } => Some(model),
            _ => None,
        }
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Solution::Sat { model } => write!(f, "SAT [{}]", model),
            other => write!(f, "{}", other.response()),
        }
    }
}

pub trait Solver {
    fn name(&self) -> &'static str;

    fn solve(&mut self, cnf: &Cnf) -> Result<Solution>;
}

/// Decides a 2-CNF formula and, when satisfiable, returns a model.
///
/// Formulas without clauses are satisfied by the all-`false` model and never reach graph
/// construction. All intermediate state lives in this call.
pub fn solve(cnf: &Cnf) -> Result<Solution> {
    if cnf.clauses.is_empty() {
        debug!("No clauses, trivially satisfiable");
        return Ok(Solution::Sat {
            model: Model::all_false(cnf.num_vars),
        });
    }

    let graph = ImplicationGraph::build(cnf)?;
    let components = Components::kosaraju(&graph);

    match decide(&components, cnf.num_vars) {
        SolveResponse::Sat => {
            let model = extract_assignment(&components, cnf.num_vars);
            Ok(Solution::Sat { model })
        }
        response => {
            debug_assert_eq!(response, SolveResponse::Unsat);
            Ok(Solution::Unsat)
        }
    }
}

/// Complete solver based on strongly connected components of the implication graph.
#[derive(Debug, Default, Copy, Clone)]
pub struct Kosaraju;

impl Solver for Kosaraju {
    fn name(&self) -> &'static str {
        "kosaraju"
    }

    fn solve(&mut self, cnf: &Cnf) -> Result<Solution> {
        info!("Solving {} clauses over {} vars via SCC", cnf.num_clauses(), cnf.num_vars);
        solve(cnf)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Algorithm {
    Kosaraju,
    Walk,
}

impl Algorithm {
    pub fn solver(self, options: Options) -> Box<dyn Solver> {
        match self {
            Algorithm::Kosaraju => Box::new(Kosaraju),
            Algorithm::Walk => Box::new(RandomWalk::new(options)),
        }
    }
}

impl FromStr for Algorithm {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "kosaraju" | "scc" => Ok(Algorithm::Kosaraju),
            "walk" | "papadimitriou" => Ok(Algorithm::Walk),
            _ => UnknownAlgorithmSnafu { name: s }.fail(),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Kosaraju => write!(f, "kosaraju"),
            Algorithm::Walk => write!(f, "walk"),
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;
    use test_log::test;

    use twosat_nexus_core::var::Var;
    use twosat_nexus_test_utils::{brute_force, check_model, ArbitraryCnf};

    use crate::walk::DEFAULT_OPTIONS;

    use super::*;

    #[test]
    fn test_no_clauses() {
        let solution = solve(&Cnf::new(3)).unwrap();
        assert_eq!(solution, Solution::Sat { model: Model::all_false(3) });

        let solution = solve(&Cnf::new(0)).unwrap();
        assert_eq!(solution.model().map(Model::len), Some(0));
    }

    #[test]
    fn test_exactly_one_of_two() {
        let cnf = Cnf::from_clauses(2, [(1, 2), (-1, -2)]);
        let solution = solve(&cnf).unwrap();
        let model = solution.model().unwrap();
        assert_ne!(model.value(Var::new(1)), model.value(Var::new(2)));
    }

    #[test]
    fn test_contradiction() {
        let cnf = Cnf::from_clauses(1, [1, -1]);
        assert_eq!(solve(&cnf).unwrap(), Solution::Unsat);
    }

    #[test]
    fn test_out_of_range() {
        let cnf = Cnf::from_clauses(1, [(1, 2)]);
        assert!(solve(&cnf).is_err());
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("kosaraju".parse::<Algorithm>().unwrap(), Algorithm::Kosaraju);
        assert_eq!("SCC".parse::<Algorithm>().unwrap(), Algorithm::Kosaraju);
        assert_eq!("walk".parse::<Algorithm>().unwrap(), Algorithm::Walk);
        assert!("dpll".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::Walk.to_string(), "walk");
    }

    #[test]
    fn test_dispatch() {
        let cnf = Cnf::from_clauses(3, [(1, 2), (-2, 3), (-3, -1)]);
        for algorithm in [Algorithm::Kosaraju, Algorithm::Walk] {
            let options = Options {
                max_flips: Some(10_000),
                ..DEFAULT_OPTIONS
            };
            let mut solver = algorithm.solver(options);
            assert_eq!(solver.name(), algorithm.to_string());
            let solution = solver.solve(&cnf).unwrap();
            assert!(check_model(&cnf, solution.model().unwrap()));
        }
    }

    #[quickcheck]
    fn agrees_with_brute_force(cnf: ArbitraryCnf) -> bool {
        let cnf = cnf.0;
        let solution = solve(&cnf).unwrap();
        match brute_force(&cnf) {
            Some(_) => solution.model().map_or(false, |model| check_model(&cnf, model)),
            None => solution == Solution::Unsat,
        }
    }

    #[quickcheck]
    fn deterministic(cnf: ArbitraryCnf) -> bool {
        solve(&cnf.0).unwrap() == solve(&cnf.0).unwrap()
    }
}
