//! Phasen-Definitionen der Connector-Platzierungs-Maschine.

use crate::core::GridConfig;
use glam::Vec2;

/// Phase der Connector-Session als Summen-Typ.
///
/// Illegale Kombinationen (z.B. "sizing und placed gleichzeitig") sind damit
/// nicht darstellbar. `Idle` heisst: keine Session. Prozessweit existiert so
/// immer genau null oder eine Session.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectorPhase {
    /// Keine aktive Session
    Idle,
    /// Verbindung wird gezogen: Vorschau-Linie von `source_pos` zu `cursor_pos`
    Positioning {
        source_id: String,
        source_pos: Vec2,
        cursor_pos: Vec2,
        /// Zeitpunkt ab dem der Klick-Exit scharf ist
        armed_at: f64,
    },
    /// Placeholder wird per Cursor dimensioniert
    Sizing {
        placeholder_id: String,
        /// Quell-Node der einlaufenden Verbindung (None bei `start_sizing_at`)
        source_id: Option<String>,
        anchor: Vec2,
        /// Zuletzt berechnete Spalten (fuer den Uebergang nach `Placed`)
        last_cols: u32,
        /// Zuletzt berechnete Zeilen
        last_rows: u32,
        armed_at: f64,
    },
    /// Groesse eingefroren, wartet auf die Typ-Auswahl des Kollaborateurs
    Placed {
        placeholder_id: String,
        source_id: Option<String>,
        anchor: Vec2,
        grid_cols: u32,
        grid_rows: u32,
    },
}

/// Connector-Platzierungs-Maschine.
///
/// Haelt die Phase und die Grid-Konfiguration; alle Seiteneffekte laufen
/// ueber den `ConnectorHost` des Aufrufers. Die Maschine selbst rendert
/// nichts.
pub struct ConnectorTool {
    pub(crate) phase: ConnectorPhase,
    /// Grid-Konfiguration fuer die Sizing-Phase
    pub grid: GridConfig,
}

impl ConnectorTool {
    /// Erstellt eine Maschine im Zustand `Idle` mit Standard-Grid.
    pub fn new() -> Self {
        Self::with_grid(GridConfig::default())
    }

    /// Erstellt eine Maschine mit expliziter Grid-Konfiguration.
    pub fn with_grid(grid: GridConfig) -> Self {
        Self {
            phase: ConnectorPhase::Idle,
            grid,
        }
    }

    /// Aktuelle Phase (read-only).
    pub fn phase(&self) -> &ConnectorPhase {
        &self.phase
    }

    /// Keine Session aktiv?
    pub fn is_idle(&self) -> bool {
        matches!(self.phase, ConnectorPhase::Idle)
    }

    /// Session aktiv (irgendeine Phase ausser `Idle`)?
    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }

    /// Vorschau-Linie waehrend `Positioning`: (Quellposition, Cursorposition).
    /// Das Zeichnen uebernimmt die Canvas-Schicht des Kollaborateurs.
    pub fn preview_line(&self) -> Option<(Vec2, Vec2)> {
        match &self.phase {
            ConnectorPhase::Positioning {
                source_pos,
                cursor_pos,
                ..
            } => Some((*source_pos, *cursor_pos)),
            _ => None,
        }
    }
}

impl Default for ConnectorTool {
    fn default() -> Self {
        Self::new()
    }
}
