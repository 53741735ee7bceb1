//! Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.

use crate::app::tools::ClickTarget;
use crate::core::WorkflowGraph;
use glam::Vec2;

/// Eingabe-Events der Kollaborateur-Schicht.
///
/// Pointer- und Klick-Intents tragen einen Zeitstempel `now` (Sekunden),
/// damit die Connector-Maschine ihre Schonfristen pruefen kann.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Graph ersetzen (vom Persistenz-Kollaborateur geliefert)
    GraphReplaced { graph: WorkflowGraph },
    /// Pointer-Down auf der ausgehenden Verbindungs-Affordance eines Nodes
    ConnectorHandlePressed {
        node_id: String,
        canvas_pos: Vec2,
        now: f64,
    },
    /// Pointer-Move auf dem Canvas
    PointerMoved { canvas_pos: Vec2 },
    /// Primaer-Klick mit Ziel-Klassifikation
    CanvasClicked {
        target: ClickTarget,
        canvas_pos: Vec2,
        now: f64,
    },
    /// Sekundaer-Klick (bricht eine aktive Session ab)
    SecondaryClicked,
    /// Escape gedrueckt (bricht eine aktive Session ab)
    EscapePressed,
    /// Widget-/Typ-Auswahl abgeschlossen (finalisiert eine Placed-Session)
    NodeKindChosen { kind: String, template: String },
    /// Sizing-Session ohne Quell-Node starten (z.B. Paletten-Drop)
    SizingStartRequested { canvas_pos: Vec2, now: f64 },
    /// Node hinter einem Quell-Node einfuegen
    InsertAfterRequested { source_id: String, kind: String },
    /// Node vor einem Ziel-Node einfuegen
    InsertBeforeRequested { target_id: String, kind: String },
    /// Einzelnen Node loeschen (mit Bruecken-Kanten)
    DeleteNodeRequested { node_id: String },
    /// Alle selektierten Nodes loeschen
    DeleteSelectedRequested,
    /// Node selektieren
    NodePickRequested { node_id: String, additive: bool },
    /// Selektion leeren
    ClearSelectionRequested,
    /// Letzte Aktion rueckgaengig machen
    UndoRequested,
    /// Rueckgaengig gemachte Aktion wiederherstellen
    RedoRequested,
}
