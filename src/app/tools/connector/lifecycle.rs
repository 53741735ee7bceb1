//! Uebergaenge der Connector-Maschine: Pointer-, Klick-, Tastatur- und
//! Auswahl-Events.
//!
//! Zeit kommt als explizites `now` (Sekunden) mit jedem Eingabe-Event herein.
//! Die Schonfristen sind Daten (`armed_at`), keine Listener-Registrierung:
//! Klicks vor dem Scharfschalt-Zeitpunkt werden verschluckt.

use super::state::{ConnectorPhase, ConnectorTool};
use crate::app::tools::{ClickTarget, ConnectorHost};
use crate::core::compute_grid_rect;
use crate::shared::{POSITIONING_ARM_DELAY, SIZING_ARM_DELAY};
use glam::Vec2;

impl ConnectorTool {
    /// Idle → Positioning: Pointer-Down auf der ausgehenden Affordance eines
    /// Nodes. Laeuft bereits eine Session, wird der Down verworfen
    /// (Single-Session-Garantie).
    pub fn on_affordance_pointer_down(&mut self, node_id: &str, canvas_pos: Vec2, now: f64) {
        if self.is_active() {
            log::debug!(
                "Pointer-Down auf Affordance von {} ignoriert: Session aktiv",
                node_id
            );
            return;
        }
        self.phase = ConnectorPhase::Positioning {
            source_id: node_id.to_owned(),
            source_pos: canvas_pos,
            cursor_pos: canvas_pos,
            armed_at: now + POSITIONING_ARM_DELAY,
        };
        log::info!("Connector-Session gestartet an Node {}", node_id);
    }

    /// Pointer-Move: aktualisiert in `Positioning` die Vorschau-Linie und
    /// berechnet in `Sizing` das Grid-Rechteck neu (Hook: `resize_placeholder`).
    pub fn on_pointer_move(&mut self, canvas_pos: Vec2, host: &mut dyn ConnectorHost) {
        match &mut self.phase {
            ConnectorPhase::Positioning { cursor_pos, .. } => {
                *cursor_pos = canvas_pos;
            }
            ConnectorPhase::Sizing {
                placeholder_id,
                anchor,
                last_cols,
                last_rows,
                ..
            } => {
                let rect = compute_grid_rect(*anchor, canvas_pos, &self.grid);
                *last_cols = rect.cols;
                *last_rows = rect.rows;
                host.resize_placeholder(placeholder_id, rect);
            }
            _ => {}
        }
    }

    /// Primaer-Klick: Positioning → Sizing (auf leerem Canvas) bzw.
    /// Sizing → Placed. Klicks vor `armed_at` werden verschluckt, Klicks auf
    /// Affordance oder Node-Koerper schalten `Positioning` nicht weiter.
    pub fn on_click(
        &mut self,
        target: &ClickTarget,
        canvas_pos: Vec2,
        now: f64,
        host: &mut dyn ConnectorHost,
    ) {
        match &self.phase {
            ConnectorPhase::Positioning {
                source_id,
                armed_at,
                ..
            } => {
                if now < *armed_at {
                    log::debug!("Klick vor Schonfrist verworfen (Positioning)");
                    return;
                }
                if !matches!(target, ClickTarget::EmptyCanvas) {
                    return;
                }
                let source_id = source_id.clone();
                let Some(placeholder_id) = host.create_placeholder(Some(&source_id), canvas_pos)
                else {
                    log::warn!("Host lieferte keinen Placeholder — Session beendet");
                    self.phase = ConnectorPhase::Idle;
                    return;
                };
                self.enter_sizing(placeholder_id, Some(source_id), canvas_pos, now);
            }
            ConnectorPhase::Sizing {
                placeholder_id,
                source_id,
                anchor,
                last_cols,
                last_rows,
                armed_at,
            } => {
                if now < *armed_at {
                    log::debug!("Klick vor Schonfrist verworfen (Sizing)");
                    return;
                }
                let placeholder_id = placeholder_id.clone();
                let source_id = source_id.clone();
                let anchor = *anchor;
                let grid_cols = *last_cols;
                let grid_rows = *last_rows;
                host.sizing_finalized(&placeholder_id);
                log::info!(
                    "Placeholder {} dimensioniert: {}×{} Zellen",
                    placeholder_id,
                    grid_cols,
                    grid_rows
                );
                self.phase = ConnectorPhase::Placed {
                    placeholder_id,
                    source_id,
                    anchor,
                    grid_cols,
                    grid_rows,
                };
            }
            _ => {}
        }
    }

    /// Idle → Sizing ohne Quell-Node, z.B. fuer einen Paletten-Drop.
    /// Ausserhalb von `Idle` ein No-op.
    pub fn start_sizing_at(&mut self, canvas_pos: Vec2, now: f64, host: &mut dyn ConnectorHost) {
        if self.is_active() {
            log::debug!("start_sizing_at abgelehnt: Session aktiv");
            return;
        }
        let Some(placeholder_id) = host.create_placeholder(None, canvas_pos) else {
            return;
        };
        self.enter_sizing(placeholder_id, None, canvas_pos, now);
    }

    /// Abbruch via Escape oder Sekundaer-Klick.
    ///
    /// Ab `Sizing` existiert ein Placeholder, der ueber den `cancel`-Hook
    /// verworfen wird; in `Positioning` ist noch nichts entstanden.
    pub fn on_cancel(&mut self, host: &mut dyn ConnectorHost) {
        match &self.phase {
            ConnectorPhase::Idle => return,
            ConnectorPhase::Positioning { source_id, .. } => {
                log::info!("Connector-Session von Node {} abgebrochen", source_id);
            }
            ConnectorPhase::Sizing { placeholder_id, .. }
            | ConnectorPhase::Placed { placeholder_id, .. } => {
                let placeholder_id = placeholder_id.clone();
                host.cancel(&placeholder_id);
                log::info!("Placeholder {} verworfen", placeholder_id);
            }
        }
        self.phase = ConnectorPhase::Idle;
    }

    /// Placed → Idle: der Kollaborateur meldet die Widget-/Typ-Auswahl.
    /// Der `finalize`-Hook wandelt den Placeholder in einen echten Node um.
    pub fn on_kind_selected(&mut self, kind: &str, template: &str, host: &mut dyn ConnectorHost) {
        let ConnectorPhase::Placed {
            placeholder_id,
            grid_cols,
            grid_rows,
            ..
        } = &self.phase
        else {
            log::debug!("Typ-Auswahl ohne Placed-Session ignoriert");
            return;
        };
        let placeholder_id = placeholder_id.clone();
        let (grid_cols, grid_rows) = (*grid_cols, *grid_rows);
        host.finalize(&placeholder_id, kind, template, grid_cols, grid_rows);
        log::info!(
            "Placeholder {} finalisiert als '{}' ({}×{})",
            placeholder_id,
            kind,
            grid_cols,
            grid_rows
        );
        self.phase = ConnectorPhase::Idle;
    }

    fn enter_sizing(
        &mut self,
        placeholder_id: String,
        source_id: Option<String>,
        anchor: Vec2,
        now: f64,
    ) {
        self.phase = ConnectorPhase::Sizing {
            placeholder_id,
            source_id,
            anchor,
            last_cols: self.grid.min_units,
            last_rows: self.grid.min_units * 2,
            armed_at: now + SIZING_ARM_DELAY,
        };
    }
}
