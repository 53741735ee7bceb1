//! ConnectorHost-Implementierung auf dem AppState: Placeholder-Lebenszyklus.
//!
//! Der Adapter ist der "Kollaborateur" fuer die in-Prozess-Verdrahtung:
//! Placeholder entstehen als echte Nodes vom Kind `Placeholder` im Graphen
//! und werden bei der Finalisierung in ihren endgueltigen Kind umgewandelt.
//! Waehrend der Session laeuft nichts durch die History — erst die
//! Finalisierung committet (siehe Controller).

use crate::app::tools::ConnectorHost;
use crate::app::AppState;
use crate::core::{compute_grid_rect, FlowEdge, GridRect, NodeKind, WorkflowNode};
use glam::Vec2;
use std::sync::Arc;

/// Host-Adapter: leitet Connector-Seiteneffekte auf den AppState um.
pub struct StateHost<'a> {
    pub state: &'a mut AppState,
}

impl ConnectorHost for StateHost<'_> {
    fn create_placeholder(&mut self, source_id: Option<&str>, anchor: Vec2) -> Option<String> {
        let state = &mut *self.state;
        let graph_arc = state.graph.as_mut()?;
        if let Some(sid) = source_id {
            if !graph_arc.contains_node(sid) {
                log::warn!("Placeholder nicht moeglich: Quell-Node {} fehlt", sid);
                return None;
            }
        }

        let placeholder_id = state.editor.next_placeholder_id();
        // Initial-Rechteck: Cursor auf dem Anker ergibt die Minimal-Groesse,
        // vertikal auf dem Anker zentriert.
        let rect = compute_grid_rect(anchor, anchor, &state.options.grid);

        let graph = Arc::make_mut(graph_arc);
        graph.add_node(WorkflowNode::new(
            placeholder_id.clone(),
            NodeKind::Placeholder,
            rect.position(),
            rect.size(),
        ));
        if let Some(sid) = source_id {
            let edge_id = graph.next_edge_id();
            graph.add_edge(FlowEdge::new(edge_id, sid, &placeholder_id));
        }

        log::info!("Placeholder {} erstellt", placeholder_id);
        Some(placeholder_id)
    }

    fn resize_placeholder(&mut self, placeholder_id: &str, rect: GridRect) {
        let Some(graph_arc) = self.state.graph.as_mut() else {
            return;
        };
        let graph = Arc::make_mut(graph_arc);
        if let Some(node) = graph.nodes.get_mut(placeholder_id) {
            node.position = rect.position();
            node.size = rect.size();
        }
    }

    fn sizing_finalized(&mut self, placeholder_id: &str) {
        log::debug!("Sizing abgeschlossen fuer {}", placeholder_id);
    }

    fn finalize(
        &mut self,
        placeholder_id: &str,
        kind: &str,
        template: &str,
        grid_cols: u32,
        grid_rows: u32,
    ) {
        let state = &mut *self.state;
        let Some(graph_arc) = state.graph.as_mut() else {
            return;
        };
        let graph = Arc::make_mut(graph_arc);
        let Some(node) = graph.nodes.get_mut(placeholder_id) else {
            log::warn!("Finalize: Placeholder {} fehlt", placeholder_id);
            return;
        };

        node.kind = NodeKind::from_name(kind);
        node.payload = serde_json::json!({
            "template": template,
            "grid": { "cols": grid_cols, "rows": grid_rows },
        });
        state.selection.select_only(placeholder_id.to_owned());

        log::info!(
            "Placeholder {} finalisiert als '{}' ({}×{})",
            placeholder_id,
            kind,
            grid_cols,
            grid_rows
        );
    }

    fn cancel(&mut self, placeholder_id: &str) {
        let state = &mut *self.state;
        let Some(graph_arc) = state.graph.as_mut() else {
            return;
        };
        let graph = Arc::make_mut(graph_arc);
        graph.remove_node(placeholder_id);
        state.selection.remove(placeholder_id);

        log::info!("Placeholder {} verworfen", placeholder_id);
    }
}
