//! Export in das Script-Format der Engine (Lua-Tabellen).
//!
//! Reine Funktionen ohne I/O: Raum → `floor`-Tabelle,
//! Dialog-Script → Script-Tabelle plus Lokalisierungsblock.
//! Die Ausgaben werden nie gecacht, sondern bei jeder Anfrage neu erzeugt.

pub mod dialog;
pub mod room;
pub mod value;

pub use dialog::{export_dialog, write_dialog_script, write_localization, DialogExport};
pub use room::{write_room_script, write_room_scripts};
pub use value::LuaValue;
