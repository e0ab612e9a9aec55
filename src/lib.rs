//! Level Generator Library.
//! Datenschicht des Raum-Editors: Räume, Dialog-Scripts, Persistenz,
//! Script-Export und Raum-Karte. Als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod lua;
pub mod shared;
pub mod store;

pub use app::{AppCommand, AppController, AppIntent, AppState, ImportMode, UiState};
pub use core::{
    BorderColor, Dialog, DoorSide, EntityKind, LevelRecord, PlacedEntity, RoomGraph,
    ScriptRecord, ScriptRef,
};
pub use shared::{EditorOptions, ScriptSchema};
pub use store::{ContentStore, ExportBundle, FileStore, KeyValueStore, MemoryStore};
