use crate::task::Task;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Dependency edges of a task list as a petgraph DAG, used to reject cyclic
/// input before the scheduling scans run.
pub struct DependencyDag {
    pub graph: DiGraph<i32, ()>,
    pub id_to_index: HashMap<i32, NodeIndex>,
}

impl DependencyDag {
    pub fn build(tasks: &[Task]) -> Self {
        let mut graph: DiGraph<i32, ()> = DiGraph::new();
        let mut id_to_index: HashMap<i32, NodeIndex> = HashMap::new();

        for task in tasks {
            let node_ix = graph.add_node(task.id);
            id_to_index.insert(task.id, node_ix);
        }

        // Edges run task -> dependency, exactly as declared on each task.
        for task in tasks {
            for dep_id in &task.dependencies {
                if let (Some(&u), Some(&v)) = (id_to_index.get(&task.id), id_to_index.get(dep_id)) {
                    graph.add_edge(u, v, ());
                }
            }
        }

        Self { graph, id_to_index }
    }

    /// Returns the id of a task sitting on a cycle, if any.
    pub fn find_cycle(&self) -> Option<i32> {
        match toposort(&self.graph, None) {
            Ok(_) => None,
            Err(cycle) => Some(self.graph[cycle.node_id()]),
        }
    }
}
