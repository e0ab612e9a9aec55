//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::{LevelRecord, ScriptRecord};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::NewLevelRequested { name } => vec![AppCommand::AddLevel {
            level: LevelRecord::new(name),
        }],
        AppIntent::LevelEdited { index, level } => vec![AppCommand::UpdateLevel { index, level }],
        AppIntent::DeleteLevelsRequested { indices } => {
            if indices.is_empty() {
                vec![]
            } else {
                vec![AppCommand::DeleteLevels { indices }]
            }
        }
        AppIntent::NewScriptRequested { name } => vec![AppCommand::AddScript {
            script: ScriptRecord::new(name),
        }],
        AppIntent::ScriptEdited { index, script } => {
            vec![AppCommand::UpdateScript { index, script }]
        }
        AppIntent::DeleteScriptRequested { index } => vec![AppCommand::DeleteScript { index }],
        AppIntent::DialogLineSubmitted {
            script_index,
            image,
            text,
        } => vec![AppCommand::AddDialog {
            script_index,
            image,
            text,
        }],
        AppIntent::RoomScriptRequested { index } => {
            vec![AppCommand::GenerateRoomScript { index }]
        }
        AppIntent::AllRoomScriptsRequested => vec![AppCommand::GenerateAllRoomScripts],
        AppIntent::DialogScriptRequested { index } => {
            vec![AppCommand::GenerateDialogScript { index }]
        }
        AppIntent::ExportRequested => vec![AppCommand::ExportAll],
        AppIntent::ImportRequested { blob, mode } => vec![AppCommand::Import { blob, mode }],
        AppIntent::HarvestRequested => vec![AppCommand::HarvestTriggerScripts],
        // Nach dem Anlegen die Vorschlagsliste auffrischen
        AppIntent::HarvestedScriptAccepted { name } => vec![
            AppCommand::AddScript {
                script: ScriptRecord::new(name),
            },
            AppCommand::HarvestTriggerScripts,
        ],
        AppIntent::RoomGraphOpened => {
            if state.is_graph_open() {
                vec![]
            } else {
                vec![AppCommand::OpenRoomGraph]
            }
        }
        AppIntent::RoomGraphClosed => {
            if state.is_graph_open() {
                vec![AppCommand::CloseRoomGraph]
            } else {
                vec![]
            }
        }
        AppIntent::GraphNodeDragged { room, position } => {
            vec![AppCommand::MoveGraphNode { room, position }]
        }
        AppIntent::GraphNodeRecolored { room, border } => {
            vec![AppCommand::SetGraphNodeBorder { room, border }]
        }
        // Offene Karte vor dem Beenden schließen, damit das Layout gespeichert wird
        AppIntent::ExitRequested => {
            if state.is_graph_open() {
                vec![AppCommand::CloseRoomGraph, AppCommand::RequestExit]
            } else {
                vec![AppCommand::RequestExit]
            }
        }
    }
}
