//! Selektionszustand mit deterministischer Reihenfolge.

use crate::core::WorkflowGraph;
use indexmap::IndexSet;

/// Aktuell selektierte Nodes.
///
/// IndexSet haelt die Einfuege-Reihenfolge — Operationen ueber die Selektion
/// laufen damit deterministisch ab.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Geordnete Menge selektierter Node-IDs
    pub selected_node_ids: IndexSet<String>,
    /// Anker der Selektion (zuletzt primaer selektierter Node)
    pub selection_anchor_node_id: Option<String>,
}

impl SelectionState {
    /// Erstellt eine leere Selektion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leert die Selektion vollstaendig.
    pub fn clear(&mut self) {
        self.selected_node_ids.clear();
        self.selection_anchor_node_id = None;
    }

    /// Selektiert genau einen Node (ersetzt die bisherige Selektion).
    pub fn select_only(&mut self, node_id: String) {
        self.selected_node_ids.clear();
        self.selected_node_ids.insert(node_id.clone());
        self.selection_anchor_node_id = Some(node_id);
    }

    /// Entfernt einen Node aus der Selektion.
    pub fn remove(&mut self, node_id: &str) {
        self.selected_node_ids.shift_remove(node_id);
        if self.selection_anchor_node_id.as_deref() == Some(node_id) {
            self.selection_anchor_node_id = None;
        }
    }

    /// Wirft IDs aus der Selektion, die im Graphen nicht (mehr) existieren.
    pub fn retain_existing(&mut self, graph: &WorkflowGraph) {
        self.selected_node_ids.retain(|id| graph.contains_node(id));
        if let Some(anchor) = &self.selection_anchor_node_id {
            if !graph.contains_node(anchor) {
                self.selection_anchor_node_id = None;
            }
        }
    }
}
