//! Core-Schicht: Datenmodell, Grid-Berechnung und pure Mutations-Engine.

pub mod graph;
pub mod grid;
pub mod mutations;

pub use graph::{FlowEdge, NodeKind, WorkflowGraph, WorkflowNode};
pub use grid::{compute_grid_rect, GridConfig, GridRect};
