//! Die zentrale WorkflowGraph-Datenstruktur mit Nodes und gerichteten Kanten.

use glam::Vec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Art eines Workflow-Nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Agent-Schritt (LLM-gestuetzt)
    Agent,
    /// Script-Schritt (deterministische Ausfuehrung)
    Script,
    /// Manueller Review-Schritt
    UserReview,
    /// Provisorischer Node waehrend einer Connector-Session
    Placeholder,
    /// Beliebige weitere Art aus der Widget-Registry des Kollaborateurs
    Custom(String),
}

impl NodeKind {
    /// Ordnet einen Namen aus der Widget-Auswahl einer Node-Art zu.
    /// Unbekannte Namen landen unveraendert in `Custom`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "agent" => NodeKind::Agent,
            "script" => NodeKind::Script,
            "user_review" => NodeKind::UserReview,
            "placeholder" => NodeKind::Placeholder,
            other => NodeKind::Custom(other.to_owned()),
        }
    }

    /// Anzeigename der Node-Art.
    pub fn name(&self) -> &str {
        match self {
            NodeKind::Agent => "agent",
            NodeKind::Script => "script",
            NodeKind::UserReview => "user_review",
            NodeKind::Placeholder => "placeholder",
            NodeKind::Custom(name) => name,
        }
    }
}

/// Ein Node auf dem Canvas. `position` ist die linke obere Ecke in
/// Canvas-Koordinaten, `size` die Ausdehnung in Pixeln.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    pub id: String,
    pub kind: NodeKind,
    pub position: Vec2,
    pub size: Vec2,
    /// Opaque Nutzdaten (Template, Konfiguration) — gehoeren dem Kollaborateur
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl WorkflowNode {
    /// Erstellt einen Node ohne Nutzdaten.
    pub fn new(id: impl Into<String>, kind: NodeKind, position: Vec2, size: Vec2) -> Self {
        Self {
            id: id.into(),
            kind,
            position,
            size,
            payload: serde_json::Value::Null,
        }
    }

    /// Setzt die Nutzdaten (Builder-Stil).
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

/// Gerichtete Kante zwischen zwei Nodes desselben Snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_port: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_port: Option<String>,
}

impl FlowEdge {
    /// Erstellt eine Kante ohne Port-Angaben.
    pub fn new(
        id: impl Into<String>,
        source_id: impl Into<String>,
        target_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            source_port: None,
            target_port: None,
        }
    }

    /// Setzt die Port-Angaben (Builder-Stil).
    pub fn with_ports(mut self, source_port: Option<String>, target_port: Option<String>) -> Self {
        self.source_port = source_port;
        self.target_port = target_port;
        self
    }

    /// Prueft ob die Kante den Node beruehrt (als Quelle oder Ziel).
    pub fn touches(&self, node_id: &str) -> bool {
        self.source_id == node_id || self.target_id == node_id
    }
}

/// Snapshot eines Workflow-Graphen.
///
/// Nodes sind nach ID indexiert (IndexMap fuer deterministische
/// Iterationsreihenfolge). Jede Mutation der Engine erzeugt einen neuen
/// Snapshot; bestehende Snapshots werden nie in-place veraendert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowGraph {
    /// Alle Nodes, indexiert nach ihrer ID
    pub nodes: IndexMap<String, WorkflowNode>,
    /// Alle gerichteten Kanten
    edges: Vec<FlowEdge>,
}

impl WorkflowGraph {
    /// Erstellt einen leeren Graphen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fuegt einen Node hinzu. Eine bereits vorhandene ID wird ersetzt.
    pub fn add_node(&mut self, node: WorkflowNode) {
        self.nodes.insert(node.id.clone(), node);
    }

    /// Entfernt einen Node inklusive aller beruehrenden Kanten.
    pub fn remove_node(&mut self, node_id: &str) -> Option<WorkflowNode> {
        let removed = self.nodes.shift_remove(node_id);
        if removed.is_some() {
            self.edges.retain(|e| !e.touches(node_id));
        }
        removed
    }

    /// Prueft ob ein Node existiert.
    pub fn contains_node(&self, node_id: &str) -> bool {
        self.nodes.contains_key(node_id)
    }

    /// Fuegt eine Kante hinzu. Self-Loops, Duplikate (gleiche Richtung) und
    /// Kanten mit fehlenden Endpunkten werden abgelehnt.
    pub fn add_edge(&mut self, edge: FlowEdge) -> bool {
        if edge.source_id == edge.target_id {
            log::warn!("Self-Loop nicht erlaubt (Node {})", edge.source_id);
            return false;
        }
        if !self.contains_node(&edge.source_id) || !self.contains_node(&edge.target_id) {
            log::warn!(
                "Kante nicht moeglich: Node {} oder {} existiert nicht",
                edge.source_id,
                edge.target_id
            );
            return false;
        }
        if self.has_edge_between(&edge.source_id, &edge.target_id) {
            log::warn!(
                "Kante {}→{} existiert bereits",
                edge.source_id,
                edge.target_id
            );
            return false;
        }
        self.edges.push(edge);
        true
    }

    /// Entfernt eine Kante nach ID.
    pub fn remove_edge(&mut self, edge_id: &str) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != edge_id);
        self.edges.len() < before
    }

    /// Haengt eine bestehende Kante an ein neues Ziel um (ID und Quelle
    /// bleiben erhalten, der Ziel-Port wird verworfen).
    pub fn retarget_edge(&mut self, edge_id: &str, new_target_id: &str) -> bool {
        if !self.contains_node(new_target_id) {
            return false;
        }
        let Some(edge) = self.edges.iter_mut().find(|e| e.id == edge_id) else {
            return false;
        };
        edge.target_id = new_target_id.to_owned();
        edge.target_port = None;
        true
    }

    /// Prueft ob eine Kante source→target existiert (exakte Richtung).
    pub fn has_edge_between(&self, source_id: &str, target_id: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.source_id == source_id && e.target_id == target_id)
    }

    /// Findet eine Kante nach ID.
    pub fn find_edge(&self, edge_id: &str) -> Option<&FlowEdge> {
        self.edges.iter().find(|e| e.id == edge_id)
    }

    /// Alle eingehenden Kanten eines Nodes.
    pub fn incoming_edges<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a FlowEdge> + 'a {
        self.edges.iter().filter(move |e| e.target_id == node_id)
    }

    /// Alle ausgehenden Kanten eines Nodes.
    pub fn outgoing_edges<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a FlowEdge> + 'a {
        self.edges.iter().filter(move |e| e.source_id == node_id)
    }

    /// Iterator ueber alle Kanten (read-only).
    pub fn edges_iter(&self) -> impl Iterator<Item = &FlowEdge> {
        self.edges.iter()
    }

    /// Berechnet die naechste freie Node-ID (Schema `n<laufende Nummer>`).
    pub fn next_node_id(&self) -> String {
        let max = self
            .nodes
            .keys()
            .filter_map(|id| id.strip_prefix('n')?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        format!("n{}", max + 1)
    }

    /// Berechnet die naechste freie Kanten-ID (Schema `e<laufende Nummer>`).
    pub fn next_edge_id(&self) -> String {
        let max = self
            .edges
            .iter()
            .filter_map(|e| e.id.strip_prefix('e')?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        format!("e{}", max + 1)
    }

    /// Gibt die Anzahl der Nodes zurueck.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt die Anzahl der Kanten zurueck.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Prueft die Kern-Invariante: jede Kante referenziert zwei Nodes
    /// desselben Snapshots.
    pub fn has_dangling_edges(&self) -> bool {
        self.edges
            .iter()
            .any(|e| !self.contains_node(&e.source_id) || !self.contains_node(&e.target_id))
    }
}

#[cfg(test)]
mod tests;
