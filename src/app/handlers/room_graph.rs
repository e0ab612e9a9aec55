//! Handler für die Raum-Karte.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::BorderColor;

/// Öffnet die Raum-Karte.
pub fn open(state: &mut AppState) {
    use_cases::room_graph::open(state);
}

/// Schließt die Raum-Karte und speichert das Layout.
pub fn close(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::room_graph::close(state)
}

/// Verschiebt einen Node.
pub fn move_node(state: &mut AppState, room: u32, position: glam::Vec2) {
    use_cases::room_graph::move_node(state, room, position);
}

/// Setzt die Rahmenfarbe eines Nodes.
pub fn set_border(state: &mut AppState, room: u32, border: BorderColor) {
    use_cases::room_graph::set_border(state, room, border);
}
