//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Räume & Scripts ===
            AppCommand::AddLevel { level } => handlers::content::add_level(state, level)?,
            AppCommand::UpdateLevel { index, level } => {
                handlers::content::update_level(state, index, level)?
            }
            AppCommand::DeleteLevels { indices } => {
                handlers::content::delete_levels(state, &indices)?
            }
            AppCommand::AddScript { script } => handlers::content::add_script(state, script)?,
            AppCommand::UpdateScript { index, script } => {
                handlers::content::update_script(state, index, script)?
            }
            AppCommand::DeleteScript { index } => handlers::content::delete_script(state, index)?,
            AppCommand::AddDialog {
                script_index,
                image,
                text,
            } => handlers::content::add_dialog(state, script_index, image, text)?,

            // === Script-Erzeugung ===
            AppCommand::GenerateRoomScript { index } => {
                handlers::content::generate_room_script(state, index)?
            }
            AppCommand::GenerateAllRoomScripts => {
                handlers::content::generate_all_room_scripts(state)
            }
            AppCommand::GenerateDialogScript { index } => {
                handlers::content::generate_dialog_script(state, index)?
            }

            // === Austausch ===
            AppCommand::ExportAll => handlers::exchange::export_all(state),
            AppCommand::Import { blob, mode } => handlers::exchange::import(state, &blob, mode)?,
            AppCommand::HarvestTriggerScripts => handlers::exchange::harvest(state),

            // === Raum-Karte ===
            AppCommand::OpenRoomGraph => handlers::room_graph::open(state),
            AppCommand::CloseRoomGraph => handlers::room_graph::close(state)?,
            AppCommand::MoveGraphNode { room, position } => {
                handlers::room_graph::move_node(state, room, position)
            }
            AppCommand::SetGraphNodeBorder { room, border } => {
                handlers::room_graph::set_border(state, room, border)
            }

            // === Anwendung ===
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }
}
