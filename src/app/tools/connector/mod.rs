//! Connector-Platzierungs-Maschine: die Klick-Sequenz, mit der eine neue
//! Verbindung gezogen und der entstehende Node dimensioniert wird.
//!
//! Ablauf: Pointer-Down auf der Affordance (`Positioning`), Klick auf leeren
//! Canvas erzeugt den Placeholder (`Sizing`), Klick friert die Groesse ein
//! (`Placed`), Typ-Auswahl finalisiert. Escape oder Sekundaer-Klick brechen
//! jederzeit nach `Idle` ab.

mod lifecycle;
mod state;

pub use state::{ConnectorPhase, ConnectorTool};
