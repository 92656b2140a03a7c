//! Ephemeral dependency graph and cycle detection using petgraph.
//!
//! A [`DependencyGraph`] is built for a single validation call from the
//! pending task snapshots plus the candidate's proposed edges, queried once,
//! and dropped.

use crate::TaskDependencyData;
use petgraph::Direction::Outgoing;
use petgraph::graphmap::DiGraphMap;
use std::collections::HashMap;
use tracing::debug;

/// Traversal state of a node during cycle detection.
///
/// Unvisited nodes have no entry in the state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    /// On the active traversal path.
    InProgress,
    /// Fully explored without finding a cycle.
    Finished,
}

/// Directed graph of task identifiers, edges pointing from a task to its dependencies.
///
/// Identifiers that are only ever named as dependency targets are sinks with
/// no outgoing edges.
#[derive(Debug, Clone)]
pub struct DependencyGraph<'a> {
    graph: DiGraphMap<&'a str, ()>,
}

impl<'a> DependencyGraph<'a> {
    /// Build the graph as it would look after the candidate's edit is applied.
    ///
    /// Every snapshot whose status is exactly `"pending"` contributes its
    /// dependency list; when several pending snapshots share an identifier
    /// the last one wins. The candidate's proposed list then replaces
    /// whatever the candidate had before. Non-pending snapshots are ignored
    /// entirely.
    #[must_use]
    pub fn build<T: TaskDependencyData>(
        task_id: &'a str,
        dependencies: &'a [String],
        existing: &'a [T],
    ) -> Self {
        let mut pending: HashMap<&'a str, &'a T> = HashMap::new();
        for task in existing.iter().filter(|task| task.is_pending()) {
            pending.insert(task.task_id(), task);
        }

        let mut graph = DiGraphMap::new();
        for (&id, &task) in &pending {
            if id == task_id {
                continue;
            }
            graph.add_node(id);
            for dep in task.dependency_ids() {
                graph.add_edge(id, dep, ());
            }
        }

        graph.add_node(task_id);
        for dep in dependencies {
            graph.add_edge(task_id, dep.as_str(), ());
        }

        debug!(
            "Built dependency graph for '{}' from {} pending tasks ({} nodes, {} edges)",
            task_id,
            pending.len(),
            graph.node_count(),
            graph.edge_count()
        );

        Self { graph }
    }

    /// Dependencies of a task in first-seen order.
    ///
    /// Unlike the stored lists, repeated identifiers are yielded once: the
    /// graph keeps a single edge per pair, which leaves reachability
    /// unchanged. Unknown identifiers have no dependencies.
    pub fn dependencies_of(&self, task_id: &'a str) -> impl Iterator<Item = &'a str> + '_ {
        self.graph.neighbors_directed(task_id, Outgoing)
    }

    /// Check whether a cycle is reachable from `start`.
    ///
    /// Depth-first search with three-state coloring. Uses an explicit stack of
    /// `(node, remaining edges)` frames, so long dependency chains cannot
    /// exhaust the call stack. Returns as soon as an edge reaches a node that
    /// is still on the active path.
    #[must_use]
    pub fn has_cycle_from(&self, start: &'a str) -> bool {
        let mut states: HashMap<&'a str, VisitState> = HashMap::new();
        states.insert(start, VisitState::InProgress);
        let mut stack = vec![(start, self.dependencies_of(start))];

        while let Some((node, edges)) = stack.last_mut() {
            let node = *node;
            match edges.next() {
                Some(dep) => match states.get(dep) {
                    Some(VisitState::InProgress) => {
                        debug!("Dependency '{}' -> '{}' closes a cycle", node, dep);
                        return true;
                    }
                    Some(VisitState::Finished) => {}
                    None => {
                        states.insert(dep, VisitState::InProgress);
                        stack.push((dep, self.dependencies_of(dep)));
                    }
                },
                None => {
                    states.insert(node, VisitState::Finished);
                    stack.pop();
                }
            }
        }

        false
    }

    /// Get the number of distinct dependency edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
