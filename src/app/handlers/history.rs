//! Handler fuer Undo/Redo-Operationen.

use crate::app::AppState;

/// Fuehrt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) -> bool {
    if let Some(prev) = state.history.undo() {
        prev.apply_to(state);
        log::info!("Undo ausgefuehrt");
        true
    } else {
        log::debug!("Undo: nichts zu tun");
        false
    }
}

/// Fuehrt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) -> bool {
    if let Some(next) = state.history.redo() {
        next.apply_to(state);
        log::info!("Redo ausgefuehrt");
        true
    } else {
        log::debug!("Redo: nichts zu tun");
        false
    }
}
