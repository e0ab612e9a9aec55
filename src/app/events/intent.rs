use super::command::ImportMode;
use crate::core::{BorderColor, LevelRecord, ScriptRecord};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// "New Level": Raum mit Standardwerten anlegen
    NewLevelRequested { name: String },
    /// Bearbeiteter Raum wird vollständig zurückgeschrieben
    LevelEdited { index: usize, level: LevelRecord },
    /// Mehrfachauswahl von Räumen löschen
    DeleteLevelsRequested { indices: Vec<usize> },
    /// Leeres Dialog-Script anlegen
    NewScriptRequested { name: String },
    /// Bearbeitetes Script wird vollständig zurückgeschrieben
    ScriptEdited { index: usize, script: ScriptRecord },
    /// Script löschen
    DeleteScriptRequested { index: usize },
    /// Dialogzeile an ein Script anhängen
    DialogLineSubmitted {
        script_index: usize,
        image: String,
        text: String,
    },
    /// Engine-Script eines Raums erzeugen
    RoomScriptRequested { index: usize },
    /// Engine-Scripts aller Räume erzeugen
    AllRoomScriptsRequested,
    /// Dialog-Script und Lokalisierung eines Scripts erzeugen
    DialogScriptRequested { index: usize },
    /// Alle Daten als Transport-Text exportieren
    ExportRequested,
    /// Transport-Text importieren
    ImportRequested { blob: String, mode: ImportMode },
    /// Fehlende Trigger-Scripts ermitteln
    HarvestRequested,
    /// Script aus einem Harvest-Vorschlag anlegen
    HarvestedScriptAccepted { name: String },
    /// Raum-Karte öffnen
    RoomGraphOpened,
    /// Raum-Karte schließen (Layout wird gespeichert)
    RoomGraphClosed,
    /// Raum-Node auf der Karte verschoben
    GraphNodeDragged { room: u32, position: glam::Vec2 },
    /// Rahmenfarbe eines Raum-Nodes gewählt
    GraphNodeRecolored { room: u32, border: BorderColor },
    /// Anwendung beenden
    ExitRequested,
}
