//! Mapping von UI-Intents auf mutierende App-Commands.

use super::tools::ClickTarget;
use super::{AppCommand, AppIntent, AppState};

/// Uebersetzt einen `AppIntent` in eine Sequenz ausfuehrbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::GraphReplaced { graph } => vec![AppCommand::ReplaceGraph { graph }],
        AppIntent::ConnectorHandlePressed {
            node_id,
            canvas_pos,
            now,
        } => vec![AppCommand::ConnectorPointerDown {
            node_id,
            canvas_pos,
            now,
        }],
        AppIntent::PointerMoved { canvas_pos } => {
            vec![AppCommand::ConnectorPointerMove { canvas_pos }]
        }
        AppIntent::CanvasClicked {
            target,
            canvas_pos,
            now,
        } => {
            // Ohne aktive Session ist ein Klick Selektion; mit Session
            // gehoert er der Connector-Maschine.
            if state.editor.connector.is_idle() {
                match target {
                    ClickTarget::NodeBody { node_id } => vec![AppCommand::SelectNode {
                        node_id,
                        additive: false,
                    }],
                    ClickTarget::EmptyCanvas => vec![AppCommand::ClearSelection],
                    // Der Pointer-Down-Pfad startet die Session; der
                    // zugehoerige Klick hat hier nichts mehr zu tun.
                    ClickTarget::Affordance { .. } => vec![],
                }
            } else {
                vec![AppCommand::ConnectorClick {
                    target,
                    canvas_pos,
                    now,
                }]
            }
        }
        AppIntent::SecondaryClicked | AppIntent::EscapePressed => {
            vec![AppCommand::ConnectorCancel]
        }
        AppIntent::NodeKindChosen { kind, template } => {
            vec![AppCommand::ConnectorSelectKind { kind, template }]
        }
        AppIntent::SizingStartRequested { canvas_pos, now } => {
            vec![AppCommand::StartSizingSession { canvas_pos, now }]
        }
        AppIntent::InsertAfterRequested { source_id, kind } => {
            vec![AppCommand::InsertNodeAfter { source_id, kind }]
        }
        AppIntent::InsertBeforeRequested { target_id, kind } => {
            vec![AppCommand::InsertNodeBefore { target_id, kind }]
        }
        AppIntent::DeleteNodeRequested { node_id } => vec![AppCommand::DeleteNode { node_id }],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelectedNodes],
        AppIntent::NodePickRequested { node_id, additive } => {
            vec![AppCommand::SelectNode { node_id, additive }]
        }
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
    }
}

#[cfg(test)]
mod tests;
