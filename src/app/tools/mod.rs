//! Werkzeug-Schicht: Connector-Platzierungs-Maschine und Host-Schnittstelle.

pub mod connector;

pub use connector::{ConnectorPhase, ConnectorTool};

use crate::core::GridRect;
use glam::Vec2;

/// Klassifikation des Klick-Ziels.
///
/// Die Input-Schicht des Kollaborateurs liefert pro Klick, was unter dem
/// Cursor lag — die Maschine selbst macht kein Hit-Testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// Ausgehende Verbindungs-Affordance eines Nodes
    Affordance { node_id: String },
    /// Node-Koerper
    NodeBody { node_id: String },
    /// Leere Canvas-Flaeche
    EmptyCanvas,
}

/// Synchrone Host-Schnittstelle fuer die Seiteneffekte der Connector-Maschine.
///
/// Pro effektbehaftetem Uebergang feuert genau ein Hook, und zwar bevor die
/// Maschine die neue Phase festschreibt — es sind keine Teilzustaende
/// beobachtbar.
pub trait ConnectorHost {
    /// Erzeugt einen Placeholder-Node am Anker und gibt dessen ID zurueck.
    /// `None` bricht den Uebergang ab (Session endet in `Idle`).
    fn create_placeholder(&mut self, source_id: Option<&str>, anchor: Vec2) -> Option<String>;

    /// Bringt den Placeholder auf die neue Grid-Groesse.
    fn resize_placeholder(&mut self, placeholder_id: &str, rect: GridRect);

    /// Sizing abgeschlossen — die Groesse ist eingefroren.
    fn sizing_finalized(&mut self, placeholder_id: &str);

    /// Wandelt den Placeholder in einen echten Node um.
    fn finalize(
        &mut self,
        placeholder_id: &str,
        kind: &str,
        template: &str,
        grid_cols: u32,
        grid_rows: u32,
    );

    /// Verwirft den Placeholder vollstaendig (Abbruch der Session).
    fn cancel(&mut self, placeholder_id: &str);
}
