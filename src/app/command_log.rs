//! Verlauf aller ausgeführten Commands.

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    /// Obergrenze, danach wird die ältere Hälfte verworfen.
    /// Zeigerbewegungen erzeugen pro Frame einen Eintrag.
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    pub fn record(&mut self, command: AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command);
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_order() {
        let mut log = CommandLog::new();
        log.record(AppCommand::ResetCamera);
        log.record(AppCommand::EndDrag);
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0], AppCommand::ResetCamera);
        assert_eq!(log.last(), Some(&AppCommand::EndDrag));
    }

    #[test]
    fn test_overflow_drops_older_half() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::MAX_ENTRIES {
            log.record(AppCommand::ResetCamera);
        }
        log.record(AppCommand::ResetCurve);
        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert_eq!(log.last(), Some(&AppCommand::ResetCurve));
    }
}
