use super::map_intent_to_commands;
use crate::app::tools::ClickTarget;
use crate::app::{AppCommand, AppIntent, AppState};
use glam::Vec2;

#[test]
fn undo_requested_maps_to_undo_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::UndoRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::Undo));
}

#[test]
fn escape_and_secondary_click_both_map_to_cancel() {
    let state = AppState::new();

    for intent in [AppIntent::EscapePressed, AppIntent::SecondaryClicked] {
        let commands = map_intent_to_commands(&state, intent);
        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], AppCommand::ConnectorCancel));
    }
}

#[test]
fn canvas_click_without_session_maps_to_selection() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasClicked {
            target: ClickTarget::NodeBody {
                node_id: "a".into(),
            },
            canvas_pos: Vec2::ZERO,
            now: 0.0,
        },
    );
    assert!(matches!(
        &commands[..],
        [AppCommand::SelectNode { node_id, additive: false }] if node_id == "a"
    ));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasClicked {
            target: ClickTarget::EmptyCanvas,
            canvas_pos: Vec2::ZERO,
            now: 0.0,
        },
    );
    assert!(matches!(&commands[..], [AppCommand::ClearSelection]));
}

#[test]
fn canvas_click_with_active_session_maps_to_connector_click() {
    let mut state = AppState::new();
    state
        .editor
        .connector
        .on_affordance_pointer_down("a", Vec2::ZERO, 0.0);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CanvasClicked {
            target: ClickTarget::EmptyCanvas,
            canvas_pos: Vec2::new(200.0, 0.0),
            now: 0.5,
        },
    );
    assert!(matches!(&commands[..], [AppCommand::ConnectorClick { .. }]));
}

#[test]
fn insert_after_requested_maps_to_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::InsertAfterRequested {
            source_id: "a".into(),
            kind: "script".into(),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        &commands[0],
        AppCommand::InsertNodeAfter { source_id, kind }
            if source_id == "a" && kind == "script"
    ));
}
