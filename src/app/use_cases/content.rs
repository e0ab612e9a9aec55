//! Use-Case-Funktionen für Räume, Scripts und die Script-Erzeugung.

use crate::app::AppState;
use crate::core::{LevelRecord, ScriptRecord};
use crate::lua;
use anyhow::Context;

/// Legt einen Raum an.
pub fn add_level(state: &mut AppState, level: LevelRecord) -> anyhow::Result<()> {
    let name = level.name.clone();
    let index = state.store.add_level(level)?;
    log::info!("Raum '{}' angelegt (Index {})", name, index);
    state.ui.status_message = Some(format!("Raum '{name}' angelegt"));
    super::room_graph::refresh_if_open(state);
    Ok(())
}

/// Schreibt einen bearbeiteten Raum zurück.
pub fn update_level(state: &mut AppState, index: usize, level: LevelRecord) -> anyhow::Result<()> {
    state.store.update_level(index, level)?;
    super::room_graph::refresh_if_open(state);
    Ok(())
}

/// Löscht alle Räume der Auswahl.
pub fn delete_levels(state: &mut AppState, indices: &[usize]) -> anyhow::Result<()> {
    let removed = state.store.delete_levels(indices)?;
    log::info!("{} Räume gelöscht", removed);
    state.ui.status_message = Some(format!("{removed} Räume gelöscht"));
    super::room_graph::refresh_if_open(state);
    Ok(())
}

/// Legt ein Script an.
pub fn add_script(state: &mut AppState, script: ScriptRecord) -> anyhow::Result<()> {
    let name = script.name.clone();
    state.store.add_script(script)?;
    log::info!("Script '{}' angelegt", name);
    state.ui.status_message = Some(format!("Script '{name}' angelegt"));
    Ok(())
}

/// Schreibt ein bearbeitetes Script zurück.
pub fn update_script(
    state: &mut AppState,
    index: usize,
    script: ScriptRecord,
) -> anyhow::Result<()> {
    state.store.update_script(index, script)
}

/// Löscht ein Script. Ein ungültiger Index ist kein Fehler.
pub fn delete_script(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    match state.store.delete_script(index)? {
        Some(script) => log::info!("Script '{}' gelöscht", script.name),
        None => log::warn!("Kein Script an Index {} zum Löschen", index),
    }
    Ok(())
}

/// Hängt eine Dialogzeile an ein Script an und persistiert es.
pub fn add_dialog(
    state: &mut AppState,
    script_index: usize,
    image: String,
    text: String,
) -> anyhow::Result<()> {
    let mut script = state
        .store
        .script(script_index)
        .cloned()
        .with_context(|| format!("Kein Script an Index {script_index}"))?;
    let key = script.add_dialog(image, text)?.key.clone();
    state.store.update_script(script_index, script)?;
    state.ui.status_message = Some(format!("Dialog '{key}' hinzugefügt"));
    Ok(())
}

/// Erzeugt das Engine-Script eines Raums.
pub fn generate_room_script(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    let level = state
        .store
        .level(index)
        .with_context(|| format!("Kein Raum an Index {index}"))?;
    let outside = level.entities_outside_playable_area().len();
    if outside > 0 {
        log::warn!(
            "Raum '{}': {} Objekte außerhalb des bespielbaren Bereichs",
            level.name,
            outside
        );
    }
    let script = lua::write_room_script(level, state.options.script_schema);
    state.ui.set_output(script);
    Ok(())
}

/// Erzeugt die Engine-Scripts aller Räume.
pub fn generate_all_room_scripts(state: &mut AppState) {
    let scripts = lua::write_room_scripts(state.store.levels(), state.options.script_schema);
    log::info!(
        "{} Raum-Scripts erzeugt (Schema {})",
        state.store.levels().len(),
        state.options.script_schema.tag()
    );
    state.ui.set_output(scripts);
}

/// Erzeugt Dialog-Script und Lokalisierungsblock eines Scripts.
pub fn generate_dialog_script(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    let script = state
        .store
        .script(index)
        .with_context(|| format!("Kein Script an Index {index}"))?;
    let export = lua::export_dialog(script, &state.options.locale);
    state.ui.last_output = Some(export.script);
    state.ui.last_localization = Some(export.localization);
    Ok(())
}
