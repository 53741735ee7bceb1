//! Zustand des Editor-Werkzeugs: Connector-Maschine und Defaults.

use crate::app::tools::ConnectorTool;
use crate::core::GridConfig;

/// Werkzeugzustand des Editors.
pub struct EditorToolState {
    /// Connector-Platzierungs-Maschine (`Idle` = keine aktive Session)
    pub connector: ConnectorTool,
    /// Laufende Nummer fuer Placeholder-IDs (ph-1, ph-2, …)
    placeholder_seq: u64,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand.
    pub fn new(grid: GridConfig) -> Self {
        Self {
            connector: ConnectorTool::with_grid(grid),
            placeholder_seq: 0,
        }
    }

    /// Vergibt die naechste eindeutige Placeholder-ID.
    pub fn next_placeholder_id(&mut self) -> String {
        self.placeholder_seq += 1;
        format!("ph-{}", self.placeholder_seq)
    }
}

impl Default for EditorToolState {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
