use itertools::Itertools;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use twosat_nexus_core::cnf::Cnf;
use twosat_nexus_core::model::Model;

use crate::error::{check_lit, Result};
use crate::solver::{Solution, Solver};

#[derive(Debug, Copy, Clone)]
pub struct Options {
    pub seed: u64,
    /// Flip budget. `None` means `2 * n^2`.
    pub max_flips: Option<usize>,
}

pub const DEFAULT_OPTIONS: Options = Options {
    seed: 42,
    max_flips: None,
};

impl Default for Options {
    fn default() -> Self {
        DEFAULT_OPTIONS
    }
}

/// Papadimitriou's randomized local search for 2-SAT.
///
/// Starting from a random assignment, repeatedly picks a random falsified clause and flips one
/// of its two variables at random. Finding no model within the flip budget yields
/// [`Solution::Unknown`]: the walk can never prove unsatisfiability.
#[derive(Debug)]
pub struct RandomWalk {
    options: Options,
    rng: StdRng,
    flips: usize,
}

impl RandomWalk {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            rng: StdRng::seed_from_u64(options.seed),
            flips: 0,
        }
    }

    /// Number of flips made by the last call to `solve`.
    pub fn num_flips(&self) -> usize {
        self.flips
    }

    fn budget(&self, num_vars: usize) -> usize {
        self.options.max_flips.unwrap_or(2 * num_vars * num_vars)
    }
}

impl Solver for RandomWalk {
    fn name(&self) -> &'static str {
        "walk"
    }

    fn solve(&mut self, cnf: &Cnf) -> Result<Solution> {
        for clause in cnf.iter() {
            check_lit(clause.a, cnf.num_vars)?;
            check_lit(clause.b, cnf.num_vars)?;
        }
        self.flips = 0;
        if cnf.clauses.is_empty() {
            return Ok(Solution::Sat {
                model: Model::all_false(cnf.num_vars),
            });
        }

        let budget = self.budget(cnf.num_vars);
        info!("Random walk over {} vars with seed {} and budget {}", cnf.num_vars, self.options.seed, budget);

        let mut model = Model::new((0..cnf.num_vars).map(|_| self.rng.gen()).collect());
        loop {
            let falsified = cnf.iter().positions(|clause| !clause.eval(&model)).collect_vec();
            if falsified.is_empty() {
                debug!("Found a model after {} flips", self.flips);
                return Ok(Solution::Sat { model });
            }
            if self.flips >= budget {
                debug!("Gave up after {} flips, {} clauses still falsified", self.flips, falsified.len());
                return Ok(Solution::Unknown);
            }

            let clause = &cnf.clauses[falsified[self.rng.gen_range(0..falsified.len())]];
            let lit = if self.rng.gen() { clause.a } else { clause.b };
            model.flip(lit.var());
            self.flips += 1;
        }
    }
}
