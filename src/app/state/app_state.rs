//! Hauptzustand der Anwendung.

use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::WorkflowGraph;
use crate::shared::{EditorOptions, HISTORY_DEPTH};
use std::sync::Arc;

use super::{EditorToolState, SelectionState};

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Aktueller Graph-Snapshot (None = kein Graph geladen)
    pub graph: Option<Arc<WorkflowGraph>>,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-Werkzeug-State (Connector-Session)
    pub editor: EditorToolState,
    /// Verlauf ausgefuehrter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State.
    pub fn new() -> Self {
        let options = EditorOptions::default();
        Self {
            graph: None,
            selection: SelectionState::new(),
            editor: EditorToolState::new(options.grid),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(HISTORY_DEPTH),
            options,
        }
    }

    /// Gibt die Anzahl der Nodes zurueck (fuer UI-Anzeige).
    pub fn node_count(&self) -> usize {
        self.graph.as_ref().map_or(0, |g| g.node_count())
    }

    /// Gibt die Anzahl der Kanten zurueck (fuer UI-Anzeige).
    pub fn edge_count(&self) -> usize {
        self.graph.as_ref().map_or(0, |g| g.edge_count())
    }

    /// Gibt zurueck, ob ein Undo-Schritt verfuegbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurueck, ob ein Redo-Schritt verfuegbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Committet den aktuellen Zustand als neuen History-Eintrag.
    /// Der Controller ruft das nach jedem graph-mutierenden Command auf;
    /// nach undo/redo ist der Aufruf unterdrueckt.
    pub fn commit_history(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
