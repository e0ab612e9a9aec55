use crate::core::{BorderColor, LevelRecord, ScriptRecord};

/// Import-Modus für Transport-Texte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Bestand vollständig ersetzen
    #[default]
    Replace,
    /// Nur Records mit neuer ID anhängen
    Merge,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Raum anhängen
    AddLevel { level: LevelRecord },
    /// Raum an Index ersetzen
    UpdateLevel { index: usize, level: LevelRecord },
    /// Räume an den Indizes entfernen
    DeleteLevels { indices: Vec<usize> },
    /// Script anhängen
    AddScript { script: ScriptRecord },
    /// Script an Index ersetzen
    UpdateScript { index: usize, script: ScriptRecord },
    /// Script an Index entfernen
    DeleteScript { index: usize },
    /// Dialogzeile mit automatisch vergebenem Schlüssel anhängen
    AddDialog {
        script_index: usize,
        image: String,
        text: String,
    },
    /// Engine-Script eines Raums erzeugen
    GenerateRoomScript { index: usize },
    /// Engine-Scripts aller Räume erzeugen
    GenerateAllRoomScripts,
    /// Dialog-Script eines Scripts erzeugen
    GenerateDialogScript { index: usize },
    /// Transport-Text erzeugen
    ExportAll,
    /// Transport-Text importieren
    Import { blob: String, mode: ImportMode },
    /// Fehlende Trigger-Scripts ermitteln
    HarvestTriggerScripts,
    /// Raum-Karte aus dem Store aufbauen
    OpenRoomGraph,
    /// Raum-Karte schließen und Layout persistieren
    CloseRoomGraph,
    /// Node verschieben
    MoveGraphNode { room: u32, position: glam::Vec2 },
    /// Rahmenfarbe eines Nodes setzen
    SetGraphNodeBorder { room: u32, border: BorderColor },
    /// Anwendung beenden
    RequestExit,
}
