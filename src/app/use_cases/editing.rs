//! Use-Cases: Nodes einfuegen und loeschen ueber die pure Mutations-Engine.
//!
//! Jede Funktion gibt `true` zurueck, wenn der Graph tatsaechlich veraendert
//! wurde — der Controller committet dann einen History-Eintrag. No-ops
//! (fehlende IDs, leere Selektion, kein Graph) liefern `false` und landen
//! nicht im Verlauf.

use crate::app::AppState;
use crate::core::{mutations, NodeKind, WorkflowGraph, WorkflowNode};
use crate::shared::EditorOptions;
use glam::Vec2;
use std::sync::Arc;

/// Baut einen frischen Node in Minimal-Groesse; die Position setzt die Engine.
fn build_node(graph: &WorkflowGraph, kind: &str, options: &EditorOptions) -> WorkflowNode {
    let grid = options.grid;
    let size = Vec2::new(
        grid.min_units as f32 * grid.cell_size,
        (grid.min_units * 2) as f32 * grid.cell_size,
    );
    WorkflowNode::new(graph.next_node_id(), NodeKind::from_name(kind), Vec2::ZERO, size)
}

/// Fuegt einen neuen Node hinter `source_id` ein und selektiert ihn.
pub fn insert_after(state: &mut AppState, source_id: &str, kind: &str) -> bool {
    let Some(graph_arc) = state.graph.as_ref() else {
        log::warn!("Insert nicht moeglich: kein Graph geladen");
        return false;
    };
    if !graph_arc.contains_node(source_id) {
        log::warn!("insert_after: Node {} existiert nicht", source_id);
        return false;
    }

    let node = build_node(graph_arc, kind, &state.options);
    let new_id = node.id.clone();
    let next = mutations::insert_after(graph_arc, source_id, node);
    state.graph = Some(Arc::new(next));
    state.selection.select_only(new_id.clone());

    log::info!("Node {} hinter {} eingefuegt", new_id, source_id);
    true
}

/// Fuegt einen neuen Node vor `target_id` ein und selektiert ihn.
pub fn insert_before(state: &mut AppState, target_id: &str, kind: &str) -> bool {
    let Some(graph_arc) = state.graph.as_ref() else {
        log::warn!("Insert nicht moeglich: kein Graph geladen");
        return false;
    };
    if !graph_arc.contains_node(target_id) {
        log::warn!("insert_before: Node {} existiert nicht", target_id);
        return false;
    }

    let node = build_node(graph_arc, kind, &state.options);
    let new_id = node.id.clone();
    let next = mutations::insert_before(graph_arc, target_id, node);
    state.graph = Some(Arc::new(next));
    state.selection.select_only(new_id.clone());

    log::info!("Node {} vor {} eingefuegt", new_id, target_id);
    true
}

/// Loescht einen einzelnen Node.
///
/// Mit `options.bridge_on_delete` bleiben Pfade durch den geloeschten Node
/// als Bruecken-Kanten erhalten; ohne die Option fallen sie ersatzlos weg.
pub fn delete_node(state: &mut AppState, node_id: &str) -> bool {
    let Some(graph_arc) = state.graph.as_ref() else {
        return false;
    };
    if !graph_arc.contains_node(node_id) {
        log::debug!("Loeschen: Node {} existiert nicht", node_id);
        return false;
    }

    let next = if state.options.bridge_on_delete {
        mutations::delete_with_reconnect(graph_arc, node_id)
    } else {
        let mut g = (**graph_arc).clone();
        g.remove_node(node_id);
        g
    };
    state.graph = Some(Arc::new(next));
    state.selection.remove(node_id);

    log::info!("Node {} geloescht", node_id);
    true
}

/// Loescht alle selektierten Nodes (in deterministischer Selektionsreihenfolge).
pub fn delete_selected(state: &mut AppState) -> bool {
    if state.selection.selected_node_ids.is_empty() {
        log::debug!("Nichts zum Loeschen selektiert");
        return false;
    }
    let Some(graph_arc) = state.graph.as_ref() else {
        return false;
    };

    let ids: Vec<String> = state.selection.selected_node_ids.iter().cloned().collect();
    let mut next = (**graph_arc).clone();
    for id in &ids {
        next = if state.options.bridge_on_delete {
            mutations::delete_with_reconnect(&next, id)
        } else {
            let mut g = next;
            g.remove_node(id);
            g
        };
    }
    state.graph = Some(Arc::new(next));
    state.selection.clear();

    log::info!("{} Node(s) geloescht", ids.len());
    true
}
