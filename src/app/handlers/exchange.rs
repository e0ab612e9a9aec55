//! Handler für Export, Import und Harvesting.

use crate::app::events::ImportMode;
use crate::app::use_cases;
use crate::app::AppState;

/// Erzeugt den Transport-Text.
pub fn export_all(state: &mut AppState) {
    use_cases::exchange::export_all(state);
}

/// Importiert einen Transport-Text.
pub fn import(state: &mut AppState, blob: &str, mode: ImportMode) -> anyhow::Result<()> {
    use_cases::exchange::import(state, blob, mode)
}

/// Ermittelt fehlende Trigger-Scripts.
pub fn harvest(state: &mut AppState) {
    use_cases::exchange::harvest(state);
}
