//! Geteilte Typen und Konstanten fuer layer-uebergreifende Vertraege.

pub mod options;

pub use options::EditorOptions;

/// Horizontaler Abstand fuer insert_after/insert_before (Canvas-Pixel).
/// Konstant ueber die gesamte Mutations-Engine.
pub const NODE_INSERT_GAP: f32 = 180.0;

/// Schonfrist bis der Klick-Exit aus `Positioning` scharf ist (Sekunden).
/// Der Pointer-Down, der die Session startet, und der Klick, der sie
/// weiterschaltet, duerfen nicht dasselbe physische Eingabe-Event sein.
pub const POSITIONING_ARM_DELAY: f64 = 0.1;

/// Schonfrist bis der Klick-Exit aus `Sizing` scharf ist (Sekunden).
pub const SIZING_ARM_DELAY: f64 = 0.2;

/// Maximale Undo-Tiefe des History-Managers.
pub const HISTORY_DEPTH: usize = 200;

/// Obergrenze des Command-Logs; bei Ueberlauf wird die aeltere Haelfte
/// verworfen.
pub const COMMAND_LOG_CAP: usize = 1000;
