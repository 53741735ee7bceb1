//! Minimales Command-Log fuer Diagnose und Tests.

use super::AppCommand;
use crate::shared::COMMAND_LOG_CAP;

/// Speichert ausgefuehrte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fuegt einen ausgefuehrten Command hinzu.
    /// Begrenzt auf `COMMAND_LOG_CAP`; bei Ueberlauf wird die aeltere Haelfte
    /// verworfen, damit nicht jeder weitere Command einzeln verschiebt.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= COMMAND_LOG_CAP {
            self.entries.drain(..COMMAND_LOG_CAP / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurueck.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurueck, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Eintraege.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}
