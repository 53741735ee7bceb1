//! Laufzeit-Optionen des Editors.

use crate::core::GridConfig;

/// Vom Kollaborateur konfigurierbare Optionen.
#[derive(Debug, Clone)]
pub struct EditorOptions {
    /// Grid-Konfiguration fuer die Sizing-Phase und Placeholder-Groessen
    pub grid: GridConfig,
    /// Beim Loeschen Bruecken-Kanten zwischen Vorgaengern und Nachfolgern
    /// erzeugen (Erreichbarkeit durch den geloeschten Node bleibt erhalten)
    pub bridge_on_delete: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            bridge_on_delete: true,
        }
    }
}
