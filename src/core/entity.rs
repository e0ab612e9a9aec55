//! Platzierte Objekte eines Raums: Props, Gegner, Items und Trigger-Zonen.

use crate::shared::options::{
    DEFAULT_ENTITY_SIZE, PLAYABLE_INSET, ROOM_HEIGHT, ROOM_WIDTH, TRIGGER_DEFAULT_HEIGHT,
    TRIGGER_DEFAULT_WIDTH,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Kategorie-Marker für Trigger, die Zwischensequenzen starten.
/// Solche Trigger tauchen nicht beim Script-Harvesting auf.
pub const CUTSCENE_CATEGORY: &str = "cutscene";

/// Verweis eines Triggers auf ein Dialog-Script.
///
/// Ältere Daten speichern einen numerischen Script-Index, neuere den Script-Namen.
/// Die Variante wird einmalig beim Laden bestimmt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptRef {
    /// Numerischer Script-Index (Legacy)
    Numeric(i64),
    /// Script-Name
    Named(String),
}

impl ScriptRef {
    /// Name, unter dem das Script im Content-Store gesucht wird.
    pub fn name(&self) -> String {
        match self {
            ScriptRef::Numeric(index) => index.to_string(),
            ScriptRef::Named(name) => name.clone(),
        }
    }
}

impl Default for ScriptRef {
    fn default() -> Self {
        ScriptRef::Numeric(1)
    }
}

impl fmt::Display for ScriptRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptRef::Numeric(index) => write!(f, "#{index}"),
            ScriptRef::Named(name) => f.write_str(name),
        }
    }
}

/// Variantenspezifische Felder eines platzierten Objekts.
///
/// `no_collide` existiert nur bei Props; alle anderen Varianten liefern
/// über [`PlacedEntity::no_collide`] immer `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EntityKind {
    /// Einrichtungsgegenstand (Synonym: `furniture`)
    #[serde(alias = "furniture")]
    Prop {
        #[serde(default, rename = "noCollide")]
        no_collide: bool,
    },
    /// Gegner mit optionaler Geschwindigkeit
    Enemy {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        speed: Option<f64>,
    },
    /// Aufsammelbares Item
    Item,
    /// Rechteckige Zone, die im Spiel ein Dialog-Script auslöst
    Trigger {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f64>,
        #[serde(
            default,
            rename = "scriptRef",
            skip_serializing_if = "Option::is_none"
        )]
        script: Option<ScriptRef>,
        #[serde(
            default,
            rename = "triggerCategory",
            skip_serializing_if = "Option::is_none"
        )]
        category: Option<String>,
    },
}

/// Grobe Einteilung für das Aufteilen der Objekte beim Export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityCategory {
    Prop,
    Enemy,
    Item,
    Trigger,
}

impl EntityKind {
    /// Liefert die Kategorie der Variante.
    pub fn category(&self) -> EntityCategory {
        match self {
            EntityKind::Prop { .. } => EntityCategory::Prop,
            EntityKind::Enemy { .. } => EntityCategory::Enemy,
            EntityKind::Item => EntityCategory::Item,
            EntityKind::Trigger { .. } => EntityCategory::Trigger,
        }
    }
}

/// Ein in einem Raum platziertes Objekt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedEntity {
    /// Eindeutige ID, bei Erstellung vergeben
    pub id: Uuid,
    /// Sprite-/Asset-Name (bei Triggern meist `"trigger"`)
    #[serde(rename = "type")]
    pub asset: String,
    /// X-Position im Raum-Koordinatensystem
    pub x: f64,
    /// Y-Position im Raum-Koordinatensystem
    pub y: f64,
    /// Variante inklusive variantenspezifischer Felder
    #[serde(flatten)]
    pub kind: EntityKind,
}

impl PlacedEntity {
    /// Erstellt ein Objekt mit frischer ID.
    pub fn new(asset: impl Into<String>, x: f64, y: f64, kind: EntityKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            asset: asset.into(),
            x,
            y,
            kind,
        }
    }

    /// Erstellt ein Prop.
    pub fn prop(asset: impl Into<String>, x: f64, y: f64, no_collide: bool) -> Self {
        Self::new(asset, x, y, EntityKind::Prop { no_collide })
    }

    /// Erstellt einen Gegner.
    pub fn enemy(asset: impl Into<String>, x: f64, y: f64, speed: Option<f64>) -> Self {
        Self::new(asset, x, y, EntityKind::Enemy { speed })
    }

    /// Erstellt ein Item.
    pub fn item(asset: impl Into<String>, x: f64, y: f64) -> Self {
        Self::new(asset, x, y, EntityKind::Item)
    }

    /// Erstellt einen Trigger mit fester Größe und Script-Verweis.
    pub fn trigger(x: f64, y: f64, width: f64, height: f64, script: ScriptRef) -> Self {
        Self::new(
            "trigger",
            x,
            y,
            EntityKind::Trigger {
                width: Some(width),
                height: Some(height),
                script: Some(script),
                category: None,
            },
        )
    }

    /// Kategorie des Objekts.
    pub fn category(&self) -> EntityCategory {
        self.kind.category()
    }

    /// Kollisionsfreiheit; nur bei Props jemals `true`.
    pub fn no_collide(&self) -> bool {
        matches!(self.kind, EntityKind::Prop { no_collide: true })
    }

    /// Trigger-Größe mit Standardwerten (60×30), `None` bei anderen Varianten.
    pub fn trigger_size(&self) -> Option<(f64, f64)> {
        match self.kind {
            EntityKind::Trigger { width, height, .. } => Some((
                width.unwrap_or(TRIGGER_DEFAULT_WIDTH),
                height.unwrap_or(TRIGGER_DEFAULT_HEIGHT),
            )),
            _ => None,
        }
    }

    /// Script-Verweis eines Triggers.
    pub fn script_ref(&self) -> Option<&ScriptRef> {
        match &self.kind {
            EntityKind::Trigger { script, .. } => script.as_ref(),
            _ => None,
        }
    }

    /// Prüft ob es sich um einen Zwischensequenz-Trigger handelt.
    pub fn is_cutscene_trigger(&self) -> bool {
        matches!(
            &self.kind,
            EntityKind::Trigger { category: Some(c), .. } if c == CUTSCENE_CATEGORY
        )
    }

    /// Darstellungsgröße in Raum-Einheiten.
    ///
    /// Trigger nutzen ihre Breite, alle anderen die Größentabelle
    /// (Fallback: [`DEFAULT_ENTITY_SIZE`]).
    pub fn render_size(&self, sizes: &BTreeMap<String, f64>) -> f64 {
        if let Some((width, _)) = self.trigger_size() {
            return width;
        }
        sizes
            .get(&self.asset)
            .copied()
            .unwrap_or(DEFAULT_ENTITY_SIZE)
    }

    /// Prüft ob die Position innerhalb des bespielbaren Bereichs liegt.
    pub fn is_within_playable_area(&self) -> bool {
        (PLAYABLE_INSET..=ROOM_WIDTH - PLAYABLE_INSET).contains(&self.x)
            && (PLAYABLE_INSET..=ROOM_HEIGHT - PLAYABLE_INSET).contains(&self.y)
    }
}

// ── Ältere Datenbestände ────────────────────────────────────────────

/// Variante im alten Format: `{"furniture":{}}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum LegacyItemType {
    Furniture {},
    Enemy {},
    Trigger {},
}

/// Objekt im alten Format (`itemType` statt `kind`, Script-Verweis unter `script`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyPlacedItem {
    id: Uuid,
    #[serde(rename = "type")]
    asset: String,
    x: f64,
    y: f64,
    item_type: LegacyItemType,
    #[serde(default, rename = "nocollide")]
    no_collide: bool,
    #[serde(default)]
    speed: Option<f64>,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    script: Option<ScriptRef>,
}

impl From<LegacyPlacedItem> for PlacedEntity {
    fn from(item: LegacyPlacedItem) -> Self {
        let kind = match item.item_type {
            LegacyItemType::Furniture {} => EntityKind::Prop {
                no_collide: item.no_collide,
            },
            LegacyItemType::Enemy {} => EntityKind::Enemy { speed: item.speed },
            LegacyItemType::Trigger {} => EntityKind::Trigger {
                width: item.width,
                height: item.height,
                script: item.script,
                category: None,
            },
        };
        Self {
            id: item.id,
            asset: item.asset,
            x: item.x,
            y: item.y,
            kind,
        }
    }
}

/// Gespeichertes Objekt in aktuellem oder altem Format
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredEntity {
    Current(PlacedEntity),
    Legacy(LegacyPlacedItem),
}

/// Liest eine Objektliste; alte Einträge werden dabei einmalig umgewandelt.
pub(crate) fn deserialize_entities<'de, D>(deserializer: D) -> Result<Vec<PlacedEntity>, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = Vec::<StoredEntity>::deserialize(deserializer)?;
    Ok(stored
        .into_iter()
        .map(|entity| match entity {
            StoredEntity::Current(entity) => entity,
            StoredEntity::Legacy(item) => item.into(),
        })
        .collect())
}
