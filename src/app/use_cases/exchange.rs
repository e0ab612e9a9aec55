//! Use-Case-Funktionen für Export, Import und Trigger-Harvesting.

use crate::app::events::ImportMode;
use crate::app::AppState;

/// Erzeugt den Transport-Text aller Records.
pub fn export_all(state: &mut AppState) {
    let text = state.store.export_all();
    log::info!("Export erzeugt ({} Bytes)", text.len());
    state.ui.set_output(text);
}

/// Importiert einen Transport-Text.
///
/// Bei ungültigem Text bleibt der Store unverändert und der Fehler wird
/// an den Aufrufer weitergereicht.
pub fn import(state: &mut AppState, blob: &str, mode: ImportMode) -> anyhow::Result<()> {
    let result = match mode {
        ImportMode::Replace => state.store.import_replace(blob),
        ImportMode::Merge => state.store.import_merge(blob),
    };
    let summary = match result {
        Ok(summary) => summary,
        Err(e) => {
            state.ui.status_message = Some("Import fehlgeschlagen: ungültiges Datenformat".into());
            return Err(e);
        }
    };

    state.ui.status_message = Some(format!(
        "Import: {} Räume, {} Scripts übernommen, {} übersprungen",
        summary.levels_added, summary.scripts_added, summary.skipped
    ));
    super::room_graph::refresh_if_open(state);
    Ok(())
}

/// Ermittelt fehlende Trigger-Scripts (verändert den Store nicht).
pub fn harvest(state: &mut AppState) {
    let groups = state.store.harvest_trigger_scripts();
    let total: usize = groups.iter().map(|g| g.scripts.len()).sum();
    state.ui.status_message = Some(format!(
        "{} fehlende Scripts in {} Räumen",
        total,
        groups.len()
    ));
    state.ui.harvest = groups;
}
