use crate::app::CommandLog;
use crate::core::RoomGraph;
use crate::shared::EditorOptions;
use crate::store::{ContentStore, KeyValueStore, MemoryStore};

use super::UiState;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Einziger Besitzer aller Level- und Script-Records
    pub store: ContentStore<Box<dyn KeyValueStore>>,
    /// Geöffnete Raum-Karte (None = geschlossen)
    pub graph: Option<RoomGraph>,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Locale, Schema, Layout)
    pub options: EditorOptions,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den App-State über einem bestehenden Speicher.
    pub fn new(storage: Box<dyn KeyValueStore>, options: EditorOptions) -> Self {
        Self {
            store: ContentStore::load(storage),
            graph: None,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// App-State über einem leeren In-Memory-Speicher (Tests, Vorschau).
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()), EditorOptions::default())
    }

    /// Gibt die Anzahl der Räume zurück (für UI-Anzeige)
    pub fn level_count(&self) -> usize {
        self.store.levels().len()
    }

    /// Gibt die Anzahl der Scripts zurück (für UI-Anzeige)
    pub fn script_count(&self) -> usize {
        self.store.scripts().len()
    }

    /// Ob die Raum-Karte geöffnet ist
    pub fn is_graph_open(&self) -> bool {
        self.graph.is_some()
    }
}
