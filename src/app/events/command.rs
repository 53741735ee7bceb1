//! Commands sind mutierende Schritte, die zentral ausgefuehrt werden.

use crate::app::tools::ClickTarget;
use crate::core::WorkflowGraph;
use glam::Vec2;

/// Vom Controller ausgefuehrte Schritte.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Graph ersetzen und Verlauf neu beginnen
    ReplaceGraph { graph: WorkflowGraph },
    /// Connector: Pointer-Down auf Affordance
    ConnectorPointerDown {
        node_id: String,
        canvas_pos: Vec2,
        now: f64,
    },
    /// Connector: Pointer-Move
    ConnectorPointerMove { canvas_pos: Vec2 },
    /// Connector: Primaer-Klick
    ConnectorClick {
        target: ClickTarget,
        canvas_pos: Vec2,
        now: f64,
    },
    /// Connector: Session abbrechen (Escape / Sekundaer-Klick)
    ConnectorCancel,
    /// Connector: Typ-Auswahl anwenden
    ConnectorSelectKind { kind: String, template: String },
    /// Connector: Sizing-Session ohne Quell-Node starten
    StartSizingSession { canvas_pos: Vec2, now: f64 },
    /// Node hinter einem Quell-Node einfuegen
    InsertNodeAfter { source_id: String, kind: String },
    /// Node vor einem Ziel-Node einfuegen
    InsertNodeBefore { target_id: String, kind: String },
    /// Einzelnen Node loeschen
    DeleteNode { node_id: String },
    /// Alle selektierten Nodes loeschen
    DeleteSelectedNodes,
    /// Node selektieren
    SelectNode { node_id: String, additive: bool },
    /// Selektion leeren
    ClearSelection,
    /// Letzte Aktion rueckgaengig machen
    Undo,
    /// Rueckgaengig gemachte Aktion wiederherstellen
    Redo,
}
