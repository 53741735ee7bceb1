//! Handler fuer Connector-Session-Commands.
//!
//! Die Maschine wird fuer jeden Aufruf kurz aus dem State genommen, damit
//! der State selbst als `ConnectorHost` dienen kann (Borrow-Trennung).

use crate::app::tools::{ClickTarget, ConnectorTool};
use crate::app::use_cases::placeholder::StateHost;
use crate::app::AppState;
use glam::Vec2;

fn with_connector<R>(
    state: &mut AppState,
    f: impl FnOnce(&mut ConnectorTool, &mut StateHost) -> R,
) -> R {
    let mut connector = std::mem::take(&mut state.editor.connector);
    let result = f(&mut connector, &mut StateHost { state });
    state.editor.connector = connector;
    result
}

/// Pointer-Down auf der Affordance: startet eine Session (falls Idle).
pub fn pointer_down(state: &mut AppState, node_id: &str, canvas_pos: Vec2, now: f64) -> bool {
    state
        .editor
        .connector
        .on_affordance_pointer_down(node_id, canvas_pos, now);
    false
}

/// Pointer-Move: Vorschau bzw. Placeholder-Resize.
pub fn pointer_move(state: &mut AppState, canvas_pos: Vec2) -> bool {
    with_connector(state, |c, host| c.on_pointer_move(canvas_pos, host));
    false
}

/// Primaer-Klick waehrend einer Session.
pub fn click(state: &mut AppState, target: &ClickTarget, canvas_pos: Vec2, now: f64) -> bool {
    with_connector(state, |c, host| c.on_click(target, canvas_pos, now, host));
    false
}

/// Abbruch via Escape oder Sekundaer-Klick.
pub fn cancel(state: &mut AppState) -> bool {
    with_connector(state, |c, host| c.on_cancel(host));
    false
}

/// Typ-Auswahl: finalisiert eine Placed-Session.
/// Nur die Finalisierung mutiert den Graphen dauerhaft → History-Commit.
///
/// Der Placeholder kann zwischenzeitlich aus dem Graphen verschwunden sein
/// (Undo waehrend die Session in `Placed` wartet) — dann laeuft die
/// Finalisierung ins Leere und es darf kein History-Eintrag entstehen.
pub fn select_kind(state: &mut AppState, kind: &str, template: &str) -> bool {
    use crate::app::tools::ConnectorPhase;
    let placeholder_id = match state.editor.connector.phase() {
        ConnectorPhase::Placed { placeholder_id, .. } => Some(placeholder_id.clone()),
        _ => None,
    };
    with_connector(state, |c, host| c.on_kind_selected(kind, template, host));

    placeholder_id.is_some_and(|id| {
        state
            .graph
            .as_ref()
            .is_some_and(|g| g.contains_node(&id))
    })
}

/// Startet eine Sizing-Session ohne Quell-Node (Paletten-Drop).
pub fn start_sizing(state: &mut AppState, canvas_pos: Vec2, now: f64) -> bool {
    with_connector(state, |c, host| c.start_sizing_at(canvas_pos, now, host));
    false
}
