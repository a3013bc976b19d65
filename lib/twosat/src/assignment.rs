use log::debug;

use twosat_nexus_core::model::Model;

use crate::scc::Components;

/// Derives a satisfying assignment from the components of a satisfiable formula.
///
/// Components are visited sink-first (highest id first). Each literal whose variable is
/// still undecided is made true, which also settles its negation. Once a component is
/// processed, the component holding the negations of its literals needs no further work.
///
/// # Panics
///
/// Panics if some variable ends up undecided, which only happens when the formula is
/// unsatisfiable, i.e. when [`decide`](crate::decide::decide) would have returned `Unsat`.
pub fn extract_assignment(components: &Components, num_vars: usize) -> Model {
    let mut values: Vec<Option<bool>> = vec![None; num_vars];
    let mut settled = vec![false; components.len()];

    for id in (0..components.len()).rev() {
        if settled[id] {
            continue;
        }
        for &lit in components.comp(id) {
            let value = &mut values[lit.var().index()];
            if value.is_none() {
                *value = Some(!lit.is_negated());
            }
            settled[components.comp_id(-lit)] = true;
        }
        settled[id] = true;
    }

    let data = values
        .into_iter()
        .enumerate()
        .map(|(i, value)| value.unwrap_or_else(|| panic!("variable x{} left unassigned", i + 1)))
        .collect();
    let model = Model::new(data);
    debug!("Extracted model: {}", model);
    model
}
