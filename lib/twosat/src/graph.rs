use ahash::AHashSet;
use log::debug;

use twosat_nexus_core::cnf::{Clause, Cnf};
use twosat_nexus_core::lit::Lit;

use crate::error::{check_lit, Result};

/// Implication graph over the `2n` literals of a 2-CNF formula, together with its transpose.
///
/// Nodes are indexed by [`Lit::node`]. Every clause `a ∨ b` contributes the edges `¬a → b`
/// and `¬b → a`; parallel edges are stored once.
#[derive(Debug, Clone)]
pub struct ImplicationGraph {
    num_vars: usize,
    forward: Vec<Vec<usize>>,
    transpose: Vec<Vec<usize>>,
    edges: AHashSet<(usize, usize)>,
}

impl ImplicationGraph {
    /// Graph with all `2 * num_vars` literal nodes and no edges.
    pub fn new(num_vars: usize) -> Self {
        Self {
            num_vars,
            forward: vec![Vec::new(); 2 * num_vars],
            transpose: vec![Vec::new(); 2 * num_vars],
            edges: AHashSet::new(),
        }
    }

    pub fn build(cnf: &Cnf) -> Result<Self> {
        let mut graph = Self::new(cnf.num_vars);
        for clause in cnf.iter() {
            graph.add_clause(clause)?;
        }
        debug!(
            "Built implication graph with {} nodes and {} edges from {} clauses",
            graph.num_nodes(),
            graph.num_edges(),
            cnf.num_clauses()
        );
        Ok(graph)
    }

    pub fn add_clause(&mut self, clause: &Clause) -> Result<()> {
        check_lit(clause.a, self.num_vars)?;
        check_lit(clause.b, self.num_vars)?;
        self.add_edge(-clause.a, clause.b);
        self.add_edge(-clause.b, clause.a);
        Ok(())
    }

    /// Adds `from → to` (and `to → from` to the transpose). Returns `false` if the edge was
    /// already present.
    fn add_edge(&mut self, from: Lit, to: Lit) -> bool {
        let (u, v) = (from.node(), to.node());
        if !self.edges.insert((u, v)) {
            return false;
        }
        self.forward[u].push(v);
        self.transpose[v].push(u);
        true
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn num_nodes(&self) -> usize {
        self.forward.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn has_edge(&self, from: Lit, to: Lit) -> bool {
        self.edges.contains(&(from.node(), to.node()))
    }

    pub fn successors(&self, lit: Lit) -> impl Iterator<Item = Lit> + '_ {
        self.forward[lit.node()].iter().map(|&v| Lit::from_node(v))
    }

    pub fn predecessors(&self, lit: Lit) -> impl Iterator<Item = Lit> + '_ {
        self.transpose[lit.node()].iter().map(|&u| Lit::from_node(u))
    }

    /// All edges `u → v`, grouped by source node in node order.
    pub fn edges(&self) -> impl Iterator<Item = (Lit, Lit)> + '_ {
        self.forward
            .iter()
            .enumerate()
            .flat_map(|(u, vs)| vs.iter().map(move |&v| (Lit::from_node(u), Lit::from_node(v))))
    }

    pub(crate) fn forward_nodes(&self, node: usize) -> &[usize] {
        &self.forward[node]
    }

    pub(crate) fn transpose_nodes(&self, node: usize) -> &[usize] {
        &self.transpose[node]
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::error::SolveError;

    use super::*;

    fn lit(val: i32) -> Lit {
        Lit::new(val)
    }

    #[test]
    fn test_clause_edges() {
        let cnf = Cnf::from_clauses(2, [(1, 2)]);
        let graph = ImplicationGraph::build(&cnf).unwrap();
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.num_edges(), 2);
        assert!(graph.has_edge(lit(-1), lit(2)));
        assert!(graph.has_edge(lit(-2), lit(1)));
        assert!(!graph.has_edge(lit(1), lit(2)));
        assert_eq!(graph.predecessors(lit(2)).collect_vec(), vec![lit(-1)]);
        assert_eq!(graph.predecessors(lit(1)).collect_vec(), vec![lit(-2)]);
    }

    #[test]
    fn test_isolated_nodes_are_present() {
        let cnf = Cnf::from_clauses(5, [(1, 2)]);
        let graph = ImplicationGraph::build(&cnf).unwrap();
        assert_eq!(graph.num_nodes(), 10);
        assert_eq!(graph.successors(lit(5)).count(), 0);
        assert_eq!(graph.successors(lit(-5)).count(), 0);
    }

    #[test]
    fn test_duplicate_edges() {
        let cnf = Cnf::from_clauses(2, [(1, 2), (2, 1), (1, 2)]);
        let graph = ImplicationGraph::build(&cnf).unwrap();
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.successors(lit(-1)).collect_vec(), vec![lit(2)]);
    }

    #[test]
    fn test_unit_clause_self_loop() {
        let cnf = Cnf::from_clauses(1, [1]);
        let graph = ImplicationGraph::build(&cnf).unwrap();
        assert_eq!(graph.num_edges(), 1);
        assert!(graph.has_edge(lit(-1), lit(1)));
        assert_eq!(graph.edges().collect_vec(), vec![(lit(-1), lit(1))]);
    }

    #[test]
    fn test_transpose_mirrors_forward() {
        let cnf = Cnf::from_clauses(3, [(1, -2), (2, 3), (-3, -1), (2, 2)]);
        let graph = ImplicationGraph::build(&cnf).unwrap();
        for (u, v) in graph.edges() {
            assert!(graph.predecessors(v).contains(&u));
        }
        let num_reversed: usize = (1..=3).flat_map(|x| [lit(x), lit(-x)]).map(|l| graph.predecessors(l).count()).sum();
        assert_eq!(num_reversed, graph.num_edges());
    }

    #[test]
    fn test_out_of_range_literal() {
        let cnf = Cnf::from_clauses(2, [(1, 3)]);
        let res = ImplicationGraph::build(&cnf);
        assert!(matches!(res, Err(SolveError::LiteralOutOfRange { num_vars: 2, .. })));
    }
}
