//! Pure Mutations-Engine: Snapshot rein, neuer Snapshot raus.
//!
//! Keine der Operationen veraendert ihre Eingabe. Fehlende IDs sind weiche
//! Fehler: die Operation gibt einen unveraenderten Klon des Eingabe-Snapshots
//! zurueck, da der Aufrufer legitim mit einem vorangegangenen Undo-Schritt
//! um die Wette laufen kann.

use super::{FlowEdge, WorkflowGraph, WorkflowNode};
use crate::shared::NODE_INSERT_GAP;
use glam::Vec2;

/// Fuegt `new_node` hinter `source_id` ein und verbindet source → neu.
///
/// Die Position wird von der Engine gesetzt: fester horizontaler Abstand
/// rechts vom Quell-Node, gleiche Hoehe.
pub fn insert_after(
    graph: &WorkflowGraph,
    source_id: &str,
    mut new_node: WorkflowNode,
) -> WorkflowGraph {
    let Some(source) = graph.nodes.get(source_id) else {
        log::warn!("insert_after: Node {} existiert nicht", source_id);
        return graph.clone();
    };
    if graph.contains_node(&new_node.id) {
        log::warn!("insert_after: ID {} bereits vergeben", new_node.id);
        return graph.clone();
    }

    new_node.position = source.position + Vec2::new(NODE_INSERT_GAP, 0.0);
    let new_id = new_node.id.clone();

    let mut out = graph.clone();
    out.add_node(new_node);
    let edge_id = out.next_edge_id();
    out.add_edge(FlowEdge::new(edge_id, source_id, &new_id));
    out
}

/// Fuegt `new_node` vor `target_id` ein.
///
/// Existiert ein Vorgaenger, wird dessen Kante auf den neuen Node umgehaengt
/// (pred → neu) und eine frische Kante neu → target ergaenzt; der neue Node
/// landet auf dem horizontalen Mittelpunkt zwischen Vorgaenger und Ziel.
/// Ohne Vorgaenger landet er mit festem Abstand links vom Ziel.
///
/// Bei mehreren eingehenden Kanten entscheidet die lexikographisch kleinste
/// Kanten-ID — deterministischer Tie-Break, siehe DESIGN.md.
pub fn insert_before(
    graph: &WorkflowGraph,
    target_id: &str,
    mut new_node: WorkflowNode,
) -> WorkflowGraph {
    let Some(target) = graph.nodes.get(target_id) else {
        log::warn!("insert_before: Node {} existiert nicht", target_id);
        return graph.clone();
    };
    if graph.contains_node(&new_node.id) {
        log::warn!("insert_before: ID {} bereits vergeben", new_node.id);
        return graph.clone();
    }

    let incoming = graph
        .incoming_edges(target_id)
        .min_by(|a, b| a.id.cmp(&b.id))
        .cloned();
    let target_pos = target.position;
    let new_id = new_node.id.clone();

    let mut out = graph.clone();
    match incoming {
        Some(edge) => {
            let pred_pos = out
                .nodes
                .get(&edge.source_id)
                .map(|n| n.position)
                .unwrap_or(target_pos);
            new_node.position = Vec2::new((pred_pos.x + target_pos.x) / 2.0, target_pos.y);
            out.add_node(new_node);
            out.retarget_edge(&edge.id, &new_id);
            // Der Ziel-Port der alten Kante gehoert zum Ziel-Node und wandert
            // mit auf die neue Kante neu → target.
            let edge_id = out.next_edge_id();
            out.add_edge(
                FlowEdge::new(edge_id, &new_id, target_id).with_ports(None, edge.target_port),
            );
        }
        None => {
            new_node.position = target_pos - Vec2::new(NODE_INSERT_GAP, 0.0);
            out.add_node(new_node);
            let edge_id = out.next_edge_id();
            out.add_edge(FlowEdge::new(edge_id, &new_id, target_id));
        }
    }
    out
}

/// Entfernt einen Node und ueberbrueckt alle Pfade, die durch ihn liefen.
///
/// Fuer jedes Paar (eingehende Quelle × ausgehendes Ziel) entsteht eine
/// Bruecken-Kante, sodass A → C → B nach dem Loeschen von C zu A → B wird.
/// Self-Loops und bereits vorhandene Kanten werden uebersprungen.
pub fn delete_with_reconnect(graph: &WorkflowGraph, node_id: &str) -> WorkflowGraph {
    if !graph.contains_node(node_id) {
        log::debug!("delete_with_reconnect: Node {} existiert nicht", node_id);
        return graph.clone();
    }

    let predecessors: Vec<String> = graph
        .incoming_edges(node_id)
        .map(|e| e.source_id.clone())
        .collect();
    let successors: Vec<String> = graph
        .outgoing_edges(node_id)
        .map(|e| e.target_id.clone())
        .collect();

    let mut out = graph.clone();
    out.remove_node(node_id);

    for pred in &predecessors {
        for succ in &successors {
            if pred == succ || out.has_edge_between(pred, succ) {
                continue;
            }
            let edge_id = out.next_edge_id();
            out.add_edge(FlowEdge::new(edge_id, pred, succ));
        }
    }
    out
}

#[cfg(test)]
mod tests;
