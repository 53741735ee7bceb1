//! Handler fuer Graph-Editing-Commands.

use crate::app::history::EditHistory;
use crate::app::{use_cases, AppState};
use crate::core::WorkflowGraph;
use crate::shared::HISTORY_DEPTH;
use std::sync::Arc;

/// Ersetzt den Graphen vollstaendig und beginnt den Verlauf neu.
pub fn replace_graph(state: &mut AppState, graph: WorkflowGraph) -> bool {
    log::info!(
        "Graph ersetzt: {} Nodes, {} Kanten",
        graph.node_count(),
        graph.edge_count()
    );
    state.graph = Some(Arc::new(graph));
    state.selection.clear();
    state.history = EditHistory::new_with_capacity(HISTORY_DEPTH);
    true
}

/// Fuegt einen Node hinter dem Quell-Node ein.
pub fn insert_after(state: &mut AppState, source_id: &str, kind: &str) -> bool {
    use_cases::editing::insert_after(state, source_id, kind)
}

/// Fuegt einen Node vor dem Ziel-Node ein.
pub fn insert_before(state: &mut AppState, target_id: &str, kind: &str) -> bool {
    use_cases::editing::insert_before(state, target_id, kind)
}

/// Loescht einen einzelnen Node.
pub fn delete_node(state: &mut AppState, node_id: &str) -> bool {
    use_cases::editing::delete_node(state, node_id)
}

/// Loescht alle selektierten Nodes.
pub fn delete_selected(state: &mut AppState) -> bool {
    use_cases::editing::delete_selected(state)
}
