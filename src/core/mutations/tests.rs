use super::*;
use crate::core::NodeKind;
use approx::assert_abs_diff_eq;

fn node(id: &str, x: f32, y: f32) -> WorkflowNode {
    WorkflowNode::new(id, NodeKind::Script, Vec2::new(x, y), Vec2::new(40.0, 80.0))
}

/// A(0,0) → C(200,0) → B(400,0)
fn chain_a_c_b() -> WorkflowGraph {
    let mut g = WorkflowGraph::new();
    g.add_node(node("a", 0.0, 0.0));
    g.add_node(node("c", 200.0, 0.0));
    g.add_node(node("b", 400.0, 0.0));
    g.add_edge(FlowEdge::new("e1", "a", "c"));
    g.add_edge(FlowEdge::new("e2", "c", "b"));
    g
}

// ─── insert_after ────────────────────────────────────────────────────────────

#[test]
fn insert_after_adds_node_and_edge_with_gap() {
    let g = chain_a_c_b();
    let out = insert_after(&g, "b", node("n1", 0.0, 0.0));

    assert!(out.contains_node("n1"));
    assert!(out.has_edge_between("b", "n1"));
    let n = &out.nodes["n1"];
    assert_abs_diff_eq!(n.position.x, 400.0 + NODE_INSERT_GAP);
    assert_abs_diff_eq!(n.position.y, 0.0);
    assert!(!out.has_dangling_edges());
}

#[test]
fn insert_after_missing_source_is_noop() {
    let g = chain_a_c_b();
    let out = insert_after(&g, "fehlt", node("n1", 0.0, 0.0));
    assert_eq!(out, g);
}

#[test]
fn insert_after_does_not_mutate_input() {
    let g = chain_a_c_b();
    let _out = insert_after(&g, "a", node("n1", 0.0, 0.0));
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn insert_after_duplicate_id_is_noop() {
    let g = chain_a_c_b();
    let out = insert_after(&g, "a", node("b", 0.0, 0.0));
    assert_eq!(out, g);
}

// ─── insert_before ───────────────────────────────────────────────────────────

#[test]
fn insert_before_rewires_incoming_edge_and_centers_node() {
    let g = chain_a_c_b();
    let out = insert_before(&g, "b", node("n1", 0.0, 0.0));

    // c → n1 → b, keine direkte c → b Kante mehr
    assert!(out.has_edge_between("c", "n1"));
    assert!(out.has_edge_between("n1", "b"));
    assert!(!out.has_edge_between("c", "b"));
    // Umgehaengte Kante behaelt ihre ID
    assert_eq!(out.find_edge("e2").unwrap().target_id, "n1");
    // Horizontaler Mittelpunkt zwischen c (200) und b (400)
    assert_abs_diff_eq!(out.nodes["n1"].position.x, 300.0);
    assert!(!out.has_dangling_edges());
}

#[test]
fn insert_before_without_predecessor_places_left_of_target() {
    let g = chain_a_c_b();
    let out = insert_before(&g, "a", node("n1", 0.0, 0.0));

    assert!(out.has_edge_between("n1", "a"));
    assert_abs_diff_eq!(out.nodes["n1"].position.x, -NODE_INSERT_GAP);
    assert!(!out.has_dangling_edges());
}

#[test]
fn insert_before_multi_fan_in_picks_smallest_edge_id() {
    let mut g = chain_a_c_b();
    // Zweite eingehende Kante an b mit lexikographisch groesserer ID
    g.add_edge(FlowEdge::new("e9", "a", "b"));

    let out = insert_before(&g, "b", node("n1", 0.0, 0.0));

    // e2 (c → b) ist die kleinste ID und wird umgehaengt; e9 bleibt unberuehrt
    assert_eq!(out.find_edge("e2").unwrap().target_id, "n1");
    assert_eq!(out.find_edge("e9").unwrap().target_id, "b");
    assert!(out.has_edge_between("n1", "b"));
}

#[test]
fn insert_before_carries_target_port_to_new_edge() {
    let mut g = WorkflowGraph::new();
    g.add_node(node("a", 0.0, 0.0));
    g.add_node(node("b", 200.0, 0.0));
    g.add_edge(FlowEdge::new("e1", "a", "b").with_ports(Some("out".into()), Some("in".into())));

    let out = insert_before(&g, "b", node("n1", 0.0, 0.0));

    let rewired = out.find_edge("e1").unwrap();
    assert_eq!(rewired.target_id, "n1");
    assert_eq!(rewired.source_port.as_deref(), Some("out"));
    assert!(rewired.target_port.is_none());

    let fresh = out
        .edges_iter()
        .find(|e| e.source_id == "n1" && e.target_id == "b")
        .unwrap();
    assert_eq!(fresh.target_port.as_deref(), Some("in"));
}

#[test]
fn insert_before_missing_target_is_noop() {
    let g = chain_a_c_b();
    let out = insert_before(&g, "fehlt", node("n1", 0.0, 0.0));
    assert_eq!(out, g);
}

// ─── delete_with_reconnect ───────────────────────────────────────────────────

#[test]
fn delete_middle_node_bridges_a_to_b() {
    let g = chain_a_c_b();
    let out = delete_with_reconnect(&g, "c");

    assert!(!out.contains_node("c"));
    assert!(out.has_edge_between("a", "b"));
    assert!(out.edges_iter().all(|e| !e.touches("c")));
    assert!(!out.has_dangling_edges());
}

#[test]
fn delete_with_multi_fan_in_and_out_bridges_cross_product() {
    let mut g = WorkflowGraph::new();
    for (id, x) in [("p1", 0.0), ("p2", 0.0), ("c", 200.0), ("s1", 400.0), ("s2", 400.0)] {
        g.add_node(node(id, x, 0.0));
    }
    g.add_edge(FlowEdge::new("e1", "p1", "c"));
    g.add_edge(FlowEdge::new("e2", "p2", "c"));
    g.add_edge(FlowEdge::new("e3", "c", "s1"));
    g.add_edge(FlowEdge::new("e4", "c", "s2"));

    let out = delete_with_reconnect(&g, "c");

    for pred in ["p1", "p2"] {
        for succ in ["s1", "s2"] {
            assert!(out.has_edge_between(pred, succ), "{pred}→{succ} fehlt");
        }
    }
    assert_eq!(out.edge_count(), 4);
    assert!(!out.has_dangling_edges());
}

#[test]
fn delete_skips_already_present_bridge_edges() {
    let mut g = chain_a_c_b();
    g.add_edge(FlowEdge::new("e3", "a", "b"));

    let out = delete_with_reconnect(&g, "c");
    // a → b existierte schon, kein Duplikat
    assert_eq!(out.edge_count(), 1);
}

#[test]
fn delete_endpoint_creates_no_bridges() {
    let g = chain_a_c_b();
    let out = delete_with_reconnect(&g, "a");

    assert!(!out.contains_node("a"));
    assert_eq!(out.edge_count(), 1);
    assert!(out.has_edge_between("c", "b"));
}

#[test]
fn delete_missing_node_is_noop() {
    let g = chain_a_c_b();
    let out = delete_with_reconnect(&g, "fehlt");
    assert_eq!(out, g);
}

// ─── Invarianten ueber Operationsfolgen ──────────────────────────────────────

#[test]
fn no_dangling_edges_across_operation_sequences() {
    let mut snapshot = chain_a_c_b();
    let ops: Vec<Box<dyn Fn(&WorkflowGraph) -> WorkflowGraph>> = vec![
        Box::new(|g| insert_after(g, "a", node("n1", 0.0, 0.0))),
        Box::new(|g| insert_before(g, "b", node("n2", 0.0, 0.0))),
        Box::new(|g| delete_with_reconnect(g, "c")),
        Box::new(|g| insert_after(g, "n2", node("n3", 0.0, 0.0))),
        Box::new(|g| delete_with_reconnect(g, "n2")),
        Box::new(|g| insert_before(g, "fehlt", node("n4", 0.0, 0.0))),
        Box::new(|g| delete_with_reconnect(g, "n1")),
    ];

    for (i, op) in ops.iter().enumerate() {
        snapshot = op(&snapshot);
        assert!(
            !snapshot.has_dangling_edges(),
            "Dangling Edge nach Operation {}",
            i
        );
    }
}
