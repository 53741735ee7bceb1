//! Handler fuer Selektions-Commands.

use crate::app::AppState;

/// Selektiert einen Node; `additive` ergaenzt die bestehende Selektion.
pub fn select_node(state: &mut AppState, node_id: &str, additive: bool) -> bool {
    let exists = state
        .graph
        .as_ref()
        .is_some_and(|g| g.contains_node(node_id));
    if !exists {
        log::debug!("Selektion: Node {} existiert nicht", node_id);
        return false;
    }

    if additive {
        state.selection.selected_node_ids.insert(node_id.to_owned());
        state.selection.selection_anchor_node_id = Some(node_id.to_owned());
    } else {
        state.selection.select_only(node_id.to_owned());
    }
    false
}

/// Leert die Selektion.
pub fn clear(state: &mut AppState) -> bool {
    state.selection.clear();
    false
}
