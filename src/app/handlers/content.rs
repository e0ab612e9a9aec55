//! Handler für Räume, Scripts und Script-Erzeugung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{LevelRecord, ScriptRecord};

/// Legt einen Raum an.
pub fn add_level(state: &mut AppState, level: LevelRecord) -> anyhow::Result<()> {
    use_cases::content::add_level(state, level)
}

/// Ersetzt einen Raum.
pub fn update_level(state: &mut AppState, index: usize, level: LevelRecord) -> anyhow::Result<()> {
    use_cases::content::update_level(state, index, level)
}

/// Löscht mehrere Räume.
pub fn delete_levels(state: &mut AppState, indices: &[usize]) -> anyhow::Result<()> {
    use_cases::content::delete_levels(state, indices)
}

/// Legt ein Script an.
pub fn add_script(state: &mut AppState, script: ScriptRecord) -> anyhow::Result<()> {
    use_cases::content::add_script(state, script)
}

/// Ersetzt ein Script.
pub fn update_script(
    state: &mut AppState,
    index: usize,
    script: ScriptRecord,
) -> anyhow::Result<()> {
    use_cases::content::update_script(state, index, script)
}

/// Löscht ein Script.
pub fn delete_script(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::content::delete_script(state, index)
}

/// Hängt eine Dialogzeile an.
pub fn add_dialog(
    state: &mut AppState,
    script_index: usize,
    image: String,
    text: String,
) -> anyhow::Result<()> {
    use_cases::content::add_dialog(state, script_index, image, text)
}

/// Erzeugt das Engine-Script eines Raums.
pub fn generate_room_script(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::content::generate_room_script(state, index)
}

/// Erzeugt die Engine-Scripts aller Räume.
pub fn generate_all_room_scripts(state: &mut AppState) {
    use_cases::content::generate_all_room_scripts(state);
}

/// Erzeugt ein Dialog-Script.
pub fn generate_dialog_script(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    use_cases::content::generate_dialog_script(state, index)
}
