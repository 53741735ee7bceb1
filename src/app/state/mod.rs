//! Application State: Graph, Selektion, Editor-Werkzeug und Verlauf.

pub mod app_state;
pub mod editor;
pub mod selection;

pub use app_state::AppState;
pub use editor::EditorToolState;
pub use selection::SelectionState;
