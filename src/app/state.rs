//! Application State: zentrale Datenhaltung.

mod app_state;

pub use app_state::AppState;

use crate::store::RoomScripts;

/// Ausgaben für die Bearbeitungsoberfläche bzw. die Kommandozeile
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Temporäre Statusnachricht (z.B. Import-Ergebnis)
    pub status_message: Option<String>,
    /// Zuletzt erzeugter Text (Raum-Script, Dialog-Script oder Export)
    pub last_output: Option<String>,
    /// Lokalisierungsblock zum zuletzt erzeugten Dialog-Script
    pub last_localization: Option<String>,
    /// Letztes Harvest-Ergebnis (Vorschläge zum Anlegen)
    pub harvest: Vec<RoomScripts>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt eine neue Ausgabe und verwirft eine alte Lokalisierung.
    pub fn set_output(&mut self, text: String) {
        self.last_output = Some(text);
        self.last_localization = None;
    }
}
