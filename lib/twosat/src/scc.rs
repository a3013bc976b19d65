use std::slice::Iter;

use log::debug;

use twosat_nexus_core::lit::Lit;

use crate::graph::ImplicationGraph;

const UNASSIGNED: usize = usize::MAX;

/// Strongly connected components of an implication graph.
///
/// Component ids follow the discovery order of the second Kosaraju pass, which is a
/// topological order of the condensation: for every edge `u → v`, `comp_id(u) <= comp_id(v)`.
/// The last component is therefore a sink.
#[derive(Debug, Clone)]
pub struct Components {
    comp_id: Vec<usize>,
    comps: Vec<Vec<Lit>>,
}

impl Components {
    /// Runs Kosaraju's algorithm with explicit stacks.
    ///
    /// The first pass starts DFS roots in node order (`1, -1, 2, -2, ...`) and explores
    /// successors in edge insertion order, so the result is fully determined by the input.
    pub fn kosaraju(graph: &ImplicationGraph) -> Self {
        let order = finishing_order(graph);
        debug_assert_eq!(order.len(), graph.num_nodes());

        let mut comp_id = vec![UNASSIGNED; graph.num_nodes()];
        let mut comps: Vec<Vec<Lit>> = Vec::new();
        let mut stack = Vec::new();

        for &root in order.iter().rev() {
            if comp_id[root] != UNASSIGNED {
                continue;
            }
            let id = comps.len();
            let mut members = Vec::new();
            comp_id[root] = id;
            stack.push(root);
            while let Some(node) = stack.pop() {
                members.push(Lit::from_node(node));
                for &pred in graph.transpose_nodes(node) {
                    if comp_id[pred] == UNASSIGNED {
                        comp_id[pred] = id;
                        stack.push(pred);
                    }
                }
            }
            comps.push(members);
        }

        if let Some(node) = comp_id.iter().position(|&id| id == UNASSIGNED) {
            panic!("literal {} was not assigned to any component", Lit::from_node(node));
        }
        debug!("Found {} components over {} nodes", comps.len(), comp_id.len());

        Self { comp_id, comps }
    }

    pub fn comp_id(&self, lit: Lit) -> usize {
        let id = self.comp_id[lit.node()];
        assert_ne!(id, UNASSIGNED, "literal {} is missing from the component map", lit);
        id
    }

    /// Members of component `id`, in the order they were reached.
    pub fn comp(&self, id: usize) -> &[Lit] {
        &self.comps[id]
    }

    pub fn len(&self) -> usize {
        self.comps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comps.is_empty()
    }

    /// Components in discovery order (sources first).
    pub fn iter(&self) -> Iter<'_, Vec<Lit>> {
        self.comps.iter()
    }
}

/// First pass: nodes in increasing order of DFS finishing time on the forward graph.
fn finishing_order(graph: &ImplicationGraph) -> Vec<usize> {
    let num_nodes = graph.num_nodes();
    let mut visited = vec![false; num_nodes];
    let mut order = Vec::with_capacity(num_nodes);
    // (node, index of the next successor to explore)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..num_nodes {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (node, next) = *top;
            match graph.forward_nodes(node).get(next) {
                Some(&succ) => {
                    top.1 += 1;
                    if !visited[succ] {
                        visited[succ] = true;
                        stack.push((succ, 0));
                    }
                }
                None => {
                    order.push(node);
                    stack.pop();
                }
            }
        }
    }

    order
}
