use log::debug;

use twosat_nexus_core::lit::Lit;
use twosat_nexus_core::response::SolveResponse;
use twosat_nexus_core::var::Var;

use crate::scc::Components;

/// First variable whose two literals share a component, if any.
pub fn find_conflict(components: &Components, num_vars: usize) -> Option<Var> {
    (1..=num_vars as u32).map(Var::new).find(|&var| {
        let x = Lit::from(var);
        components.comp_id(x) == components.comp_id(-x)
    })
}

/// A 2-CNF formula is satisfiable iff no variable shares a component with its negation.
pub fn decide(components: &Components, num_vars: usize) -> SolveResponse {
    match find_conflict(components, num_vars) {
        Some(var) => {
            debug!("{} and its negation are both in component {}", var, components.comp_id(Lit::from(var)));
            SolveResponse::Unsat
        }
        None => SolveResponse::Sat,
    }
}
