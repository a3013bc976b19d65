use itertools::Itertools;
use quickcheck::{Arbitrary, Gen};
use rand::Rng;

use twosat_nexus_core::cnf::{Clause, Cnf};
use twosat_nexus_core::lit::Lit;
use twosat_nexus_core::model::Model;

/// Largest formula handed out by [`ArbitraryCnf`]; keeps [`brute_force`] cheap.
pub const MAX_ARBITRARY_VARS: usize = 12;

pub fn check_model(cnf: &Cnf, model: &Model) -> bool {
    model.len() == cnf.num_vars && cnf.iter().all(|clause| clause.eval(model))
}

/// Exhaustive truth-table search. Returns the first model in binary counting order.
pub fn brute_force(cnf: &Cnf) -> Option<Model> {
    let n = cnf.num_vars;
    assert!(n <= 20, "brute force over {} vars is too expensive", n);
    (0u32..1 << n)
        .map(|bits| Model::new((0..n).map(|i| (bits >> i) & 1 == 1).collect()))
        .find(|model| check_model(cnf, model))
}

fn random_lit<R: Rng>(rng: &mut R, num_vars: usize) -> Lit {
    let var = rng.gen_range(1..=num_vars as i32);
    if rng.gen() {
        Lit::new(var)
    } else {
        Lit::new(-var)
    }
}

pub fn random_cnf<R: Rng>(rng: &mut R, num_vars: usize, num_clauses: usize) -> Cnf {
    let clauses = (0..num_clauses)
        .map(|_| Clause::new(random_lit(rng, num_vars), random_lit(rng, num_vars)))
        .collect_vec();
    Cnf { num_vars, clauses }
}

/// Random formula satisfied by a hidden random model, which is returned alongside.
pub fn planted_cnf<R: Rng>(rng: &mut R, num_vars: usize, num_clauses: usize) -> (Cnf, Model) {
    let model = Model::new((0..num_vars).map(|_| rng.gen()).collect());
    let mut cnf = Cnf::new(num_vars);
    while cnf.num_clauses() < num_clauses {
        let clause = Clause::new(random_lit(rng, num_vars), random_lit(rng, num_vars));
        if clause.eval(&model) {
            cnf.add_clause(clause);
        }
    }
    (cnf, model)
}

/// `x1` together with the chain `x1 -> x2 -> ... -> xn`.
pub fn chain_cnf(num_vars: usize) -> Cnf {
    let mut cnf = Cnf::new(num_vars);
    cnf.add_clause(1);
    for i in 1..num_vars as i32 {
        cnf.add_clause((-i, i + 1));
    }
    cnf
}

#[derive(Debug, Clone)]
pub struct ArbitraryCnf(pub Cnf);

impl Arbitrary for ArbitraryCnf {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vars = usize::arbitrary(g) % MAX_ARBITRARY_VARS + 1;
        let num_clauses = usize::arbitrary(g) % (3 * num_vars + 1);
        let lit = |g: &mut Gen| {
            let var = (u32::arbitrary(g) as usize % num_vars + 1) as i32;
            if bool::arbitrary(g) {
                var
            } else {
                -var
            }
        };
        let clauses = (0..num_clauses)
            .map(|_| {
                if u8::arbitrary(g) % 8 == 0 {
                    Clause::unit(lit(g))
                } else {
                    Clause::new(lit(g), lit(g))
                }
            })
            .collect_vec();
        ArbitraryCnf(Cnf { num_vars, clauses })
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_brute_force() {
        let cnf = Cnf::from_clauses(2, [(1, 2), (-1, -2), (1, 1)]);
        assert_eq!(brute_force(&cnf), Some(Model::new(vec![true, false])));

        let cnf = Cnf::from_clauses(1, [1, -1]);
        assert_eq!(brute_force(&cnf), None);
    }

    #[test]
    fn test_planted_is_satisfied() {
        let mut rng = StdRng::seed_from_u64(42);
        let (cnf, model) = planted_cnf(&mut rng, 10, 40);
        assert_eq!(cnf.num_clauses(), 40);
        assert!(check_model(&cnf, &model));
    }

    #[test]
    fn test_chain() {
        let cnf = chain_cnf(4);
        assert_eq!(cnf.num_clauses(), 4);
        assert!(check_model(&cnf, &Model::new(vec![true; 4])));
        assert!(!check_model(&cnf, &Model::new(vec![true, true, false, true])));
    }
}
