//! Zentrale Konfiguration für den Level-Generator.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

// ── Raum ────────────────────────────────────────────────────────────

/// Logische Breite eines Raums.
pub const ROOM_WIDTH: f64 = 400.0;
/// Logische Höhe eines Raums.
pub const ROOM_HEIGHT: f64 = 240.0;
/// Rand, innerhalb dessen Objekte nicht platziert werden.
pub const PLAYABLE_INSET: f64 = 16.0;

// ── Objekte ─────────────────────────────────────────────────────────

/// Standard-Darstellungsgröße eines Objekts.
pub const DEFAULT_ENTITY_SIZE: f64 = 32.0;
/// Standard-Breite eines Triggers.
pub const TRIGGER_DEFAULT_WIDTH: f64 = 60.0;
/// Standard-Höhe eines Triggers.
pub const TRIGGER_DEFAULT_HEIGHT: f64 = 30.0;
/// Standard-Geschwindigkeit eines Gegners im Export.
pub const ENEMY_DEFAULT_SPEED: f64 = 1.0;

// ── Export ──────────────────────────────────────────────────────────

/// Locale-Tag für Lokalisierungs-Lookups im Dialog-Script.
pub const DEFAULT_LOCALE: &str = "en";

// ── Raum-Karte ──────────────────────────────────────────────────────

/// Zentrum des Standard-Kreislayouts.
pub const GRAPH_CENTER: [f32; 2] = [500.0, 500.0];
/// Radius des Standard-Kreislayouts.
pub const GRAPH_RADIUS: f32 = 200.0;
/// Kantenlänge eines Raum-Nodes.
pub const GRAPH_NODE_SIZE: f32 = 60.0;
/// Abstand der Kurven-Kontrollpunkte vom Node-Zentrum.
pub const GRAPH_CURVE_CONTROL_OFFSET: f32 = 50.0;

/// Schema-Version des Raum-Scripts.
///
/// Die beobachteten Engine-Versionen unterscheiden sich nur beim
/// `nocollide`-Feld von Props.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptSchema {
    /// `nocollide` nur bei `true` schreiben (ältere Engine-Builds)
    #[default]
    Legacy,
    /// `nocollide` immer schreiben
    Explicit,
}

impl ScriptSchema {
    /// Versions-Tag des Schemas.
    pub fn tag(self) -> &'static str {
        match self {
            ScriptSchema::Legacy => "room-script/1",
            ScriptSchema::Explicit => "room-script/2",
        }
    }
}

/// Layout-Parameter der Raum-Karte
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLayoutOptions {
    /// Zentrum des Kreislayouts für Nodes ohne gespeicherte Position
    pub center: [f32; 2],
    /// Radius des Kreislayouts
    pub radius: f32,
    /// Kantenlänge eines Nodes
    pub node_size: f32,
    /// Abstand der Kontrollpunkte einer Verbindungskurve
    pub curve_control_offset: f32,
}

impl Default for GraphLayoutOptions {
    fn default() -> Self {
        Self {
            center: GRAPH_CENTER,
            radius: GRAPH_RADIUS,
            node_size: GRAPH_NODE_SIZE,
            curve_control_offset: GRAPH_CURVE_CONTROL_OFFSET,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `level_generator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Verzeichnis des lokalen Key-Value-Speichers
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
    /// Locale-Tag für `getLocalizedText`
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Schema des Raum-Scripts
    #[serde(default)]
    pub script_schema: ScriptSchema,
    /// Layout der Raum-Karte
    #[serde(default)]
    pub graph: GraphLayoutOptions,
    /// Darstellungsgrößen je Asset-Name (Fallback: 32)
    #[serde(default = "default_entity_sizes")]
    pub entity_sizes: BTreeMap<String, f64>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            locale: default_locale(),
            script_schema: ScriptSchema::default(),
            graph: GraphLayoutOptions::default(),
            entity_sizes: default_entity_sizes(),
        }
    }
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("level_generator_data")
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_entity_sizes() -> BTreeMap<String, f64> {
    BTreeMap::from([("frogcolli".to_string(), 40.0)])
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("level_generator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("level_generator.toml")
    }
}
