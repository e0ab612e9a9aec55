//! Raum-Konfiguration mit vier Richtungs-Türen und platzierten Objekten.

use super::{EntityCategory, EntityKind, PlacedEntity};
use anyhow::bail;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Faktor, mit dem die Level-Nummer in die globale Raum-ID eingeht.
pub const ROOM_ID_LEVEL_FACTOR: i64 = 100;

/// Seite eines Raums, an der eine Tür sitzt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorSide {
    Top,
    Right,
    Down,
    Left,
}

impl DoorSide {
    /// Alle Seiten in Export-Reihenfolge.
    pub const ALL: [DoorSide; 4] = [DoorSide::Top, DoorSide::Right, DoorSide::Down, DoorSide::Left];

    /// Gegenüberliegende Seite (Zielseite einer Verbindung).
    pub fn opposite(self) -> Self {
        match self {
            DoorSide::Top => DoorSide::Down,
            DoorSide::Right => DoorSide::Left,
            DoorSide::Down => DoorSide::Top,
            DoorSide::Left => DoorSide::Right,
        }
    }

    /// Bezeichner im Engine-Script.
    pub fn as_str(self) -> &'static str {
        match self {
            DoorSide::Top => "top",
            DoorSide::Right => "right",
            DoorSide::Down => "down",
            DoorSide::Left => "left",
        }
    }
}

/// Eine einzelne Tür
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Door {
    /// Tür offen (nur offene Türen werden exportiert)
    pub open: bool,
    /// Raumnummer des Ziels, lokal zur Level-Nummer
    pub leads_to_room: u32,
}

impl Default for Door {
    fn default() -> Self {
        Self {
            open: true,
            leads_to_room: 1,
        }
    }
}

/// Die vier Türen eines Raums
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "StoredDoors")]
pub struct Doors {
    pub top: Door,
    pub right: Door,
    pub down: Door,
    pub left: Door,
}

impl Doors {
    /// Tür an einer Seite.
    pub fn get(&self, side: DoorSide) -> &Door {
        match side {
            DoorSide::Top => &self.top,
            DoorSide::Right => &self.right,
            DoorSide::Down => &self.down,
            DoorSide::Left => &self.left,
        }
    }

    /// Veränderbare Tür an einer Seite.
    pub fn get_mut(&mut self, side: DoorSide) -> &mut Door {
        match side {
            DoorSide::Top => &mut self.top,
            DoorSide::Right => &mut self.right,
            DoorSide::Down => &mut self.down,
            DoorSide::Left => &mut self.left,
        }
    }

    /// Iteriert über alle Türen in der Reihenfolge top, right, down, left.
    pub fn iter(&self) -> impl Iterator<Item = (DoorSide, &Door)> {
        DoorSide::ALL.into_iter().map(move |side| (side, self.get(side)))
    }

    /// Iteriert nur über offene Türen.
    pub fn open(&self) -> impl Iterator<Item = (DoorSide, &Door)> {
        self.iter().filter(|(_, door)| door.open)
    }
}

/// Türen im alten Format: Offen-Flags und Ziele als flache Felder
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyDoors {
    top: bool,
    right: bool,
    down: bool,
    left: bool,
    top_leads_to: u32,
    right_leads_to: u32,
    down_leads_to: u32,
    left_leads_to: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDoors {
    Current {
        top: Door,
        right: Door,
        down: Door,
        left: Door,
    },
    Legacy(LegacyDoors),
}

impl From<StoredDoors> for Doors {
    fn from(stored: StoredDoors) -> Self {
        match stored {
            StoredDoors::Current {
                top,
                right,
                down,
                left,
            } => Doors {
                top,
                right,
                down,
                left,
            },
            StoredDoors::Legacy(legacy) => {
                let door = |open, leads_to_room| Door {
                    open,
                    leads_to_room,
                };
                Doors {
                    top: door(legacy.top, legacy.top_leads_to),
                    right: door(legacy.right, legacy.right_leads_to),
                    down: door(legacy.down, legacy.down_leads_to),
                    left: door(legacy.left, legacy.left_leads_to),
                }
            }
        }
    }
}

/// Vollständige Konfiguration eines Raums.
///
/// Die Wertebereiche (Level 1–100, Raum 1–100, Tile 1–20) prüft nur die
/// Bearbeitungsoberfläche, nicht das Datenmodell.
///
/// Gelesen werden auch die Feldnamen älterer Datenbestände
/// (`level`, `tile`, `light`, `shadow`, `placedItems`, flache Türen).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(alias = "level")]
    pub level_number: u32,
    pub room_number: u32,
    #[serde(alias = "tile")]
    pub tile_index: u32,
    /// Lichtstärke im Bereich [0, 1]
    #[serde(alias = "light")]
    pub light_level: f64,
    #[serde(alias = "shadow")]
    pub shadow_enabled: bool,
    pub doors: Doors,
    /// Platzierte Objekte; Einfügereihenfolge = Anzeige- und Export-Reihenfolge
    #[serde(
        default,
        alias = "placedItems",
        deserialize_with = "super::entity::deserialize_entities"
    )]
    pub entities: Vec<PlacedEntity>,
}

impl LevelRecord {
    /// Erstellt einen neuen Raum mit Standardwerten ("New Level"-Aktion).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            level_number: 1,
            room_number: 1,
            tile_index: 1,
            light_level: 0.5,
            shadow_enabled: false,
            doors: Doors::default(),
            entities: Vec::new(),
        }
    }

    /// Globale Raum-ID für eine raumlokale Zielnummer: `level * 100 + room`.
    ///
    /// Als `i64` berechnet, damit auch Level-Nummern außerhalb des
    /// Editor-Bereichs nicht überlaufen.
    pub fn global_room_id(&self, leads_to_room: u32) -> i64 {
        i64::from(self.level_number) * ROOM_ID_LEVEL_FACTOR + i64::from(leads_to_room)
    }

    /// Globale Ziel-ID der Tür an `side`.
    pub fn door_target(&self, side: DoorSide) -> i64 {
        self.global_room_id(self.doors.get(side).leads_to_room)
    }

    /// Fügt ein Objekt am Ende der Liste hinzu.
    pub fn add_entity(&mut self, entity: PlacedEntity) {
        self.entities.push(entity);
    }

    /// Entfernt ein Objekt anhand seiner ID.
    pub fn remove_entity(&mut self, id: Uuid) -> Option<PlacedEntity> {
        let index = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(index))
    }

    /// Alle Objekte einer Kategorie in Einfügereihenfolge.
    pub fn entities_of(&self, category: EntityCategory) -> impl Iterator<Item = &PlacedEntity> {
        self.entities
            .iter()
            .filter(move |e| e.category() == category)
    }

    /// 1-basierte Nummer eines Triggers unter allen Triggern des Raums.
    pub fn trigger_number(&self, id: Uuid) -> Option<usize> {
        self.entities_of(EntityCategory::Trigger)
            .position(|e| e.id == id)
            .map(|index| index + 1)
    }

    /// Prüft alle Zahlenwerte auf endliche Werte.
    ///
    /// NaN und Unendlich haben in JSON keine Darstellung und würden einen
    /// Export erzeugen, den der eigene Import ablehnt.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.light_level.is_finite() {
            bail!("Raum '{}': ungültige Lichtstärke {}", self.name, self.light_level);
        }
        for entity in &self.entities {
            let mut values = vec![("x", entity.x), ("y", entity.y)];
            match entity.kind {
                EntityKind::Enemy { speed: Some(speed) } => values.push(("speed", speed)),
                EntityKind::Trigger { width, height, .. } => {
                    values.extend(width.map(|w| ("width", w)));
                    values.extend(height.map(|h| ("height", h)));
                }
                _ => {}
            }
            if let Some((field, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
                bail!(
                    "Raum '{}': Objekt '{}' hat ungültiges Feld {field} = {value}",
                    self.name,
                    entity.asset
                );
            }
        }
        Ok(())
    }

    /// Objekte außerhalb des bespielbaren Bereichs (Diagnose, kein Fehler).
    pub fn entities_outside_playable_area(&self) -> Vec<&PlacedEntity> {
        self.entities
            .iter()
            .filter(|e| !e.is_within_playable_area())
            .collect()
    }
}
