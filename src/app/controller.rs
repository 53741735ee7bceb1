//! Application Controller fuer zentrale Event-Verarbeitung.

use super::{handlers, intent_mapping, AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent ueber Intent→Command-Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Fuehrt mutierende Commands auf dem AppState aus.
    ///
    /// Dispatcht an Feature-Handler in `handlers/`. Meldet ein Handler eine
    /// Graph-Mutation, wird danach ein History-Eintrag committet — nach
    /// undo/redo ist dieser Commit unterdrueckt und zaehlt nicht als neuer
    /// Schritt.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);

        let mutated = match command {
            // === Graph ===
            AppCommand::ReplaceGraph { graph } => handlers::editing::replace_graph(state, graph),

            // === Connector-Session ===
            AppCommand::ConnectorPointerDown {
                node_id,
                canvas_pos,
                now,
            } => handlers::connector::pointer_down(state, &node_id, canvas_pos, now),
            AppCommand::ConnectorPointerMove { canvas_pos } => {
                handlers::connector::pointer_move(state, canvas_pos)
            }
            AppCommand::ConnectorClick {
                target,
                canvas_pos,
                now,
            } => handlers::connector::click(state, &target, canvas_pos, now),
            AppCommand::ConnectorCancel => handlers::connector::cancel(state),
            AppCommand::ConnectorSelectKind { kind, template } => {
                handlers::connector::select_kind(state, &kind, &template)
            }
            AppCommand::StartSizingSession { canvas_pos, now } => {
                handlers::connector::start_sizing(state, canvas_pos, now)
            }

            // === Editing ===
            AppCommand::InsertNodeAfter { source_id, kind } => {
                handlers::editing::insert_after(state, &source_id, &kind)
            }
            AppCommand::InsertNodeBefore { target_id, kind } => {
                handlers::editing::insert_before(state, &target_id, &kind)
            }
            AppCommand::DeleteNode { node_id } => handlers::editing::delete_node(state, &node_id),
            AppCommand::DeleteSelectedNodes => handlers::editing::delete_selected(state),

            // === Selektion ===
            AppCommand::SelectNode { node_id, additive } => {
                handlers::selection::select_node(state, &node_id, additive)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        };

        if mutated {
            state.commit_history();
        }

        Ok(())
    }
}
