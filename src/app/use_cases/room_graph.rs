//! Use-Case-Funktionen für die Raum-Karte.
//!
//! Layout-Änderungen bleiben bis zum Schließen nur im Speicher.

use crate::app::AppState;
use crate::core::{BorderColor, RoomGraph};

/// Baut die Raum-Karte aus dem Store und den gespeicherten Layout-Tabellen.
pub fn open(state: &mut AppState) {
    let positions = state.store.node_positions();
    let styles = state.store.node_styles();
    let graph = RoomGraph::build(state.store.levels(), &positions, &styles, &state.options.graph);
    log::info!(
        "Raum-Karte geöffnet: {} Räume, {} Verbindungen",
        graph.node_count(),
        graph.edge_count()
    );
    state.graph = Some(graph);
}

/// Schließt die Raum-Karte und persistiert Positionen und Stile.
///
/// Schreibt ausschließlich die Layout-Schlüssel und nur dann, wenn seit dem
/// Öffnen ein Node verschoben oder umgefärbt wurde.
pub fn close(state: &mut AppState) -> anyhow::Result<()> {
    let Some(graph) = state.graph.take() else {
        return Ok(());
    };
    if !graph.is_dirty() {
        log::info!("Raum-Karte geschlossen, Layout unverändert");
        return Ok(());
    }
    let (positions, styles) = graph.layout();
    state.store.save_node_layout(&positions, &styles)?;
    log::info!("Raum-Karte geschlossen, Layout gespeichert");
    Ok(())
}

/// Baut eine geöffnete Karte nach Änderungen an den Räumen neu auf.
///
/// Das aktuelle In-Memory-Layout dient dabei als Vorgabe.
pub fn refresh_if_open(state: &mut AppState) {
    let Some(graph) = state.graph.as_ref() else {
        return;
    };
    state.graph = Some(graph.rebuild(state.store.levels()));
}

/// Verschiebt einen Node der geöffneten Karte.
pub fn move_node(state: &mut AppState, room: u32, position: glam::Vec2) {
    let Some(graph) = state.graph.as_mut() else {
        log::warn!("Raum-Karte nicht geöffnet, Verschieben ignoriert");
        return;
    };
    if !graph.move_node(room, position) {
        log::warn!("Kein Node für Raum {}", room);
    }
}

/// Setzt die Rahmenfarbe eines Nodes der geöffneten Karte.
pub fn set_border(state: &mut AppState, room: u32, border: BorderColor) {
    let Some(graph) = state.graph.as_mut() else {
        log::warn!("Raum-Karte nicht geöffnet, Farbwahl ignoriert");
        return;
    };
    if !graph.set_node_border(room, border) {
        log::warn!("Kein Node für Raum {}", room);
    }
}
