use super::*;
use glam::Vec2;

fn node(id: &str, x: f32) -> WorkflowNode {
    WorkflowNode::new(id, NodeKind::Script, Vec2::new(x, 0.0), Vec2::new(40.0, 80.0))
}

fn graph_a_b() -> WorkflowGraph {
    let mut g = WorkflowGraph::new();
    g.add_node(node("a", 0.0));
    g.add_node(node("b", 200.0));
    g
}

#[test]
fn add_and_remove_node_drops_touching_edges() {
    let mut g = graph_a_b();
    assert!(g.add_edge(FlowEdge::new("e1", "a", "b")));
    assert_eq!(g.edge_count(), 1);

    let removed = g.remove_node("b");
    assert!(removed.is_some());
    assert_eq!(g.edge_count(), 0);
    assert!(!g.has_dangling_edges());
}

#[test]
fn add_edge_rejects_self_loop() {
    let mut g = graph_a_b();
    assert!(!g.add_edge(FlowEdge::new("e1", "a", "a")));
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn add_edge_rejects_missing_endpoint() {
    let mut g = graph_a_b();
    assert!(!g.add_edge(FlowEdge::new("e1", "a", "fehlt")));
    assert!(!g.add_edge(FlowEdge::new("e2", "fehlt", "b")));
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn add_edge_rejects_duplicate_same_direction() {
    let mut g = graph_a_b();
    assert!(g.add_edge(FlowEdge::new("e1", "a", "b")));
    assert!(!g.add_edge(FlowEdge::new("e2", "a", "b")));
    // Gegenrichtung ist erlaubt
    assert!(g.add_edge(FlowEdge::new("e3", "b", "a")));
}

#[test]
fn incoming_and_outgoing_edges_filter_by_direction() {
    let mut g = graph_a_b();
    g.add_node(node("c", 400.0));
    g.add_edge(FlowEdge::new("e1", "a", "b"));
    g.add_edge(FlowEdge::new("e2", "b", "c"));

    let incoming: Vec<_> = g.incoming_edges("b").map(|e| e.id.as_str()).collect();
    let outgoing: Vec<_> = g.outgoing_edges("b").map(|e| e.id.as_str()).collect();
    assert_eq!(incoming, vec!["e1"]);
    assert_eq!(outgoing, vec!["e2"]);

    // Auch mit lokal besessener ID lebt der Iterator nur so lange wie beide
    // Borrows zusammen
    let id = String::from("b");
    assert_eq!(g.incoming_edges(&id).count(), 1);
    assert_eq!(g.outgoing_edges(&id).count(), 1);
}

#[test]
fn retarget_edge_keeps_id_and_source() {
    let mut g = graph_a_b();
    g.add_node(node("c", 400.0));
    g.add_edge(FlowEdge::new("e1", "a", "b").with_ports(Some("out".into()), Some("in".into())));

    assert!(g.retarget_edge("e1", "c"));
    let edge = g.find_edge("e1").unwrap();
    assert_eq!(edge.source_id, "a");
    assert_eq!(edge.target_id, "c");
    assert_eq!(edge.source_port.as_deref(), Some("out"));
    assert!(edge.target_port.is_none(), "Ziel-Port gehoert zum alten Ziel");
}

#[test]
fn retarget_edge_rejects_missing_target() {
    let mut g = graph_a_b();
    g.add_edge(FlowEdge::new("e1", "a", "b"));
    assert!(!g.retarget_edge("e1", "fehlt"));
    assert_eq!(g.find_edge("e1").unwrap().target_id, "b");
}

#[test]
fn next_ids_skip_over_existing_numeric_suffixes() {
    let mut g = WorkflowGraph::new();
    g.add_node(node("n7", 0.0));
    g.add_node(node("start", 100.0));
    assert_eq!(g.next_node_id(), "n8");

    g.add_edge(FlowEdge::new("e3", "n7", "start"));
    assert_eq!(g.next_edge_id(), "e4");
}

#[test]
fn next_ids_on_empty_graph_start_at_one() {
    let g = WorkflowGraph::new();
    assert_eq!(g.next_node_id(), "n1");
    assert_eq!(g.next_edge_id(), "e1");
}

#[test]
fn node_kind_from_name_roundtrip() {
    assert_eq!(NodeKind::from_name("agent"), NodeKind::Agent);
    assert_eq!(NodeKind::from_name("user_review"), NodeKind::UserReview);
    assert_eq!(
        NodeKind::from_name("http_call"),
        NodeKind::Custom("http_call".into())
    );
    assert_eq!(NodeKind::Custom("http_call".into()).name(), "http_call");
}
