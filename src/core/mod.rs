//! Core-Domänentypen: platzierte Objekte, Räume, Dialog-Scripts, Raum-Graph.

pub mod entity;
pub mod layout;
/// Raum-Datenmodell
///
/// - LevelRecord: vollständige Konfiguration eines Raums
/// - Doors/Door: vier Richtungs-Türen mit raumlokalem Ziel
pub mod level;
pub mod room_graph;
pub mod script;

pub use entity::{EntityCategory, EntityKind, PlacedEntity, ScriptRef, CUTSCENE_CATEGORY};
pub use layout::{BorderColor, NodePosition, NodeStyle};
pub use level::{Door, DoorSide, Doors, LevelRecord, ROOM_ID_LEVEL_FACTOR};
pub use room_graph::{EdgeCurve, RoomEdge, RoomGraph, RoomNode};
pub use script::{Dialog, ScriptRecord, MAX_DIALOG_TEXT_CHARS};
