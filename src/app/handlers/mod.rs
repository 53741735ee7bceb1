//! Feature-Handler fuer AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausfuehrung eines Feature-Bereichs
//! und meldet zurueck, ob der Graph mutiert wurde (History-Commit noetig).

pub mod connector;
pub mod editing;
pub mod history;
pub mod selection;
