//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen und Konstanten, die `core`, `lua`,
//! `store` und `app` gemeinsam nutzen.

pub mod options;

pub use options::{EditorOptions, GraphLayoutOptions, ScriptSchema};
pub use options::{DEFAULT_LOCALE, ROOM_HEIGHT, ROOM_WIDTH};
