//! Workflow Canvas Editor Library.
//! Interaktive Graph-Editing-Engine als Library exportiert fuer Tests und
//! Einbettung: Connector-Platzierungs-Maschine, Grid-Snapping, pure
//! Graph-Mutationen und linearer Undo/Redo-Verlauf.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, ClickTarget, ConnectorHost, ConnectorPhase,
    ConnectorTool, EditorToolState, SelectionState,
};
pub use core::{
    compute_grid_rect, FlowEdge, GridConfig, GridRect, NodeKind, WorkflowGraph, WorkflowNode,
};
pub use shared::EditorOptions;
