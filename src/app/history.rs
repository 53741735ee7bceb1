//! Linearer Undo/Redo-Verlauf ueber Snapshots (Eintraege + Cursor).

use super::SelectionState;
use crate::core::WorkflowGraph;
use std::sync::Arc;

/// Snapshot reduziert auf die fuer Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1) —
/// der teure Graph-Klon findet erst bei der naechsten Mutation statt. Ein
/// Node/Edge lebt so lange, wie noch irgendein Eintrag im Verlauf seinen
/// Snapshot referenziert.
#[derive(Clone)]
pub struct Snapshot {
    /// Optionaler Graph (Arc-Klon fuer O(1)-Snapshot)
    pub graph: Option<Arc<WorkflowGraph>>,
    /// Selektionszustand zum Zeitpunkt des Snapshots
    pub selection: SelectionState,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            graph: state.graph.clone(),
            selection: state.selection.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.graph = self.graph;
        state.selection = self.selection;
    }
}

/// Linearer Undo/Redo-Manager.
///
/// `entries[0..=cursor]` ist die rueckgaengig machbare Vergangenheit,
/// `entries[cursor + 1..]` die Redo-Zukunft. Jede frische Mutation verwirft
/// die Zukunft — das uebliche "neuer Input leert den Redo-Stack"-Verhalten.
#[derive(Default)]
pub struct EditHistory {
    entries: Vec<Snapshot>,
    cursor: usize,
    /// Gesetzt von undo/redo: der naechste `record_snapshot`-Aufruf (der
    /// Commit der Konsumenten-Pipeline) darf nicht als neuer Schritt zaehlen.
    suppress_next_record: bool,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            entries: Vec::with_capacity(max_depth),
            cursor: 0,
            suppress_next_record: false,
            max_depth,
        }
    }

    /// Haengt einen Snapshot als neuen aktiven Eintrag an.
    ///
    /// Verwirft vorhandene Redo-Eintraege hinter dem Cursor. Nach undo/redo
    /// unterdrueckt (siehe `suppress_next_record`).
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.suppress_next_record {
            self.suppress_next_record = false;
            return;
        }
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(snap);
        if self.entries.len() > self.max_depth {
            self.entries.remove(0);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Prueft ob Undo moeglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Prueft ob Redo moeglich ist.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Bewegt den Cursor einen Schritt zurueck und liefert den dann aktiven
    /// Snapshot (der Aufrufer wendet ihn an). An der Untergrenze ein No-op.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.suppress_next_record = true;
        Some(self.entries[self.cursor].clone())
    }

    /// Bewegt den Cursor einen Schritt vor und liefert den dann aktiven
    /// Snapshot. An der Obergrenze ein No-op.
    pub fn redo(&mut self) -> Option<Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.suppress_next_record = true;
        Some(self.entries[self.cursor].clone())
    }

    /// Anzahl der Eintraege im Verlauf.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurueck, wenn der Verlauf leer ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
