//! Protokoll der Map-Commands, die der Controller ausgeführt hat.
//!
//! Re-entrant ausgelieferte Store-Signale landen hier in Ausführungsreihenfolge.
//! Damit lässt sich nachvollziehen, welcher Abgleich auf eine Bediener-Aktion
//! folgte, z.B. dass ein Marker-Drag genau ein `UpdateWaypoint` als Echo
//! auslöst.

use super::MapCommand;

/// Ringartig begrenzte Liste ausgeführter Commands.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<MapCommand>,
}

impl CommandLog {
    /// Obergrenze, ab der die ältere Hälfte verworfen wird
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Protokolliert einen Command vor seiner Ausführung.
    pub fn record(&mut self, command: MapCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command);
    }

    /// Anzahl protokollierter Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alle Einträge, älteste zuerst.
    pub fn entries(&self) -> &[MapCommand] {
        &self.entries
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&MapCommand> {
        self.entries.last()
    }
}
