//! Abgeleiteter Verbindungsgraph der Räume (Nodes = Räume, Kanten = offene Türen).
//!
//! Kanten werden bei jedem Aufbau neu aus den Level-Daten berechnet.
//! Positionen und Rahmenfarben kommen aus den persistierten Layout-Tabellen
//! und werden per Raumnummer auf die frisch berechneten Nodes gelegt.

use super::{BorderColor, DoorSide, LevelRecord, NodePosition, NodeStyle};
use crate::shared::options::GraphLayoutOptions;
use glam::Vec2;
use indexmap::IndexMap;
use std::collections::{BTreeSet, HashMap};

/// Ein Raum-Node der Karte
#[derive(Debug, Clone, PartialEq)]
pub struct RoomNode {
    /// Level-Nummer des Raums
    pub level: u32,
    /// Raumnummer (Schlüssel des Nodes)
    pub room: u32,
    /// Anzeigename des Raums
    pub name: String,
    /// Position auf der Karte
    pub position: Vec2,
    /// Ziele aller offenen Türen (Raumnummern, sortiert)
    pub connections: BTreeSet<u32>,
    /// Rahmenfarbe
    pub border: BorderColor,
}

impl RoomNode {
    /// Verbindungen als kommagetrennte Liste (Info-Overlay).
    pub fn connections_label(&self) -> String {
        self.connections
            .iter()
            .map(|room| room.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Kante zwischen zwei Räumen.
///
/// Inhaltlich ungerichtet, abgeleitet aus der Tür des Quellraums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomEdge {
    /// Raum mit der offenen Tür
    pub from_room: u32,
    /// Zielraum der Tür
    pub to_room: u32,
    /// Seite der Tür im Quellraum
    pub side: DoorSide,
}

/// Kubische Kurve einer Kante (Start, zwei Kontrollpunkte, Ende)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeCurve {
    pub start: Vec2,
    pub control1: Vec2,
    pub control2: Vec2,
    pub end: Vec2,
}

/// Verbindungsgraph aller Räume
#[derive(Debug, Clone)]
pub struct RoomGraph {
    nodes: IndexMap<u32, RoomNode>,
    edges: Vec<RoomEdge>,
    layout: GraphLayoutOptions,
    dirty: bool,
}

impl RoomGraph {
    /// Baut den Graph aus den Levels und den gespeicherten Layout-Tabellen.
    ///
    /// Pro Raumnummer entsteht genau ein Node (erster Level gewinnt). Ohne
    /// gespeicherte Position wird der N-te Node auf einem Kreis um das
    /// Zentrum platziert (Winkel `2π·N/Anzahl`).
    pub fn build(
        levels: &[LevelRecord],
        positions: &[NodePosition],
        styles: &[NodeStyle],
        layout: &GraphLayoutOptions,
    ) -> Self {
        let saved_positions: HashMap<u32, Vec2> = positions
            .iter()
            .map(|p| (p.room_number, Vec2::new(p.x, p.y)))
            .collect();
        let saved_styles: HashMap<u32, BorderColor> = styles
            .iter()
            .map(|s| (s.room_number, s.border_color))
            .collect();

        let mut sources: IndexMap<u32, &LevelRecord> = IndexMap::new();
        for level in levels {
            sources.entry(level.room_number).or_insert(level);
        }

        let total = sources.len().max(1) as f32;
        let center = Vec2::from(layout.center);

        let mut nodes = IndexMap::with_capacity(sources.len());
        for (index, (&room, level)) in sources.iter().enumerate() {
            let position = saved_positions.get(&room).copied().unwrap_or_else(|| {
                let angle = std::f32::consts::TAU * index as f32 / total;
                center + Vec2::new(angle.cos(), angle.sin()) * layout.radius
            });

            nodes.insert(
                room,
                RoomNode {
                    level: level.level_number,
                    room,
                    name: level.name.clone(),
                    position,
                    connections: level.doors.open().map(|(_, d)| d.leads_to_room).collect(),
                    border: saved_styles.get(&room).copied().unwrap_or_default(),
                },
            );
        }

        let mut edges = Vec::new();
        for (&room, level) in &sources {
            for (side, door) in level.doors.open() {
                if door.leads_to_room != room && nodes.contains_key(&door.leads_to_room) {
                    edges.push(RoomEdge {
                        from_room: room,
                        to_room: door.leads_to_room,
                        side,
                    });
                }
            }
        }

        log::debug!(
            "Raum-Graph aufgebaut: {} Nodes, {} Kanten",
            nodes.len(),
            edges.len()
        );

        Self {
            nodes,
            edges,
            layout: layout.clone(),
            dirty: false,
        }
    }

    /// Baut den Graph nach geänderten Levels neu auf.
    ///
    /// Das aktuelle Layout dient als Vorgabe, ungesicherte Änderungen
    /// bleiben als solche markiert.
    pub fn rebuild(&self, levels: &[LevelRecord]) -> Self {
        let (positions, styles) = self.layout();
        let mut graph = Self::build(levels, &positions, &styles, &self.layout);
        graph.dirty = self.dirty;
        graph
    }

    /// Anzahl der Nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Anzahl der Kanten
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Node zu einer Raumnummer
    pub fn node(&self, room: u32) -> Option<&RoomNode> {
        self.nodes.get(&room)
    }

    /// Alle Nodes in Aufbau-Reihenfolge
    pub fn nodes(&self) -> impl Iterator<Item = &RoomNode> {
        self.nodes.values()
    }

    /// Alle Kanten
    pub fn edges(&self) -> &[RoomEdge] {
        &self.edges
    }

    /// Prüft ob seit dem Aufbau Layout-Änderungen vorgenommen wurden.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Verschiebt einen Node (nur im Speicher).
    pub fn move_node(&mut self, room: u32, position: Vec2) -> bool {
        let Some(node) = self.nodes.get_mut(&room) else {
            return false;
        };
        if node.position != position {
            node.position = position;
            self.dirty = true;
        }
        true
    }

    /// Setzt die Rahmenfarbe eines Nodes (nur im Speicher).
    pub fn set_node_border(&mut self, room: u32, border: BorderColor) -> bool {
        let Some(node) = self.nodes.get_mut(&room) else {
            return false;
        };
        if node.border != border {
            node.border = border;
            self.dirty = true;
        }
        true
    }

    /// Aktuelle Positionen und Stile aller Nodes für die Persistenz.
    pub fn layout(&self) -> (Vec<NodePosition>, Vec<NodeStyle>) {
        self.nodes
            .values()
            .map(|node| {
                (
                    NodePosition {
                        room_number: node.room,
                        x: node.position.x,
                        y: node.position.y,
                    },
                    NodeStyle {
                        room_number: node.room,
                        border_color: node.border,
                    },
                )
            })
            .unzip()
    }

    /// Kurve einer Kante: vom Rand des Quell-Nodes an der Türseite zum Rand
    /// des Ziel-Nodes an der gespiegelten Seite.
    pub fn edge_curve(&self, edge: &RoomEdge) -> Option<EdgeCurve> {
        let from = self.nodes.get(&edge.from_room)?.position;
        let to = self.nodes.get(&edge.to_room)?.position;
        let half_node = self.layout.node_size * 0.5;
        let offset = self.layout.curve_control_offset;

        let out_dir = side_normal(edge.side);
        let in_dir = side_normal(edge.side.opposite());

        Some(EdgeCurve {
            start: from + out_dir * half_node,
            control1: from + out_dir * offset,
            control2: to + in_dir * offset,
            end: to + in_dir * half_node,
        })
    }
}

/// Normale einer Raumseite in Bildschirmkoordinaten (y wächst nach unten).
fn side_normal(side: DoorSide) -> Vec2 {
    match side {
        DoorSide::Top => Vec2::NEG_Y,
        DoorSide::Right => Vec2::X,
        DoorSide::Down => Vec2::Y,
        DoorSide::Left => Vec2::NEG_X,
    }
}
