//! Application-Layer: Controller, State, Events, History und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod state;
pub mod tools;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::{EditHistory, Snapshot};
pub use state::{AppState, EditorToolState, SelectionState};
pub use tools::{ClickTarget, ConnectorHost, ConnectorPhase, ConnectorTool};
