//! Transportformat für Export/Import aller Levels und Scripts.

use crate::core::{LevelRecord, ScriptRecord};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Versions-Tag des Transportformats.
pub const BUNDLE_VERSION: &str = "1.0";

/// `{ levels, scripts, version }` – exakt diese Form, sonst Parse-Fehler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportBundle {
    pub levels: Vec<LevelRecord>,
    pub scripts: Vec<ScriptRecord>,
    pub version: String,
}

impl ExportBundle {
    /// Erstellt ein Bundle mit der aktuellen Version.
    pub fn new(levels: Vec<LevelRecord>, scripts: Vec<ScriptRecord>) -> Self {
        Self {
            levels,
            scripts,
            version: BUNDLE_VERSION.to_string(),
        }
    }

    /// Parsed ein Bundle aus Text und prüft die Version.
    pub fn parse(text: &str) -> Result<Self> {
        let bundle: ExportBundle =
            serde_json::from_str(text).context("Ungültiges Datenformat für Import")?;
        if bundle.version != BUNDLE_VERSION {
            bail!(
                "Nicht unterstützte Bundle-Version '{}' (erwartet {})",
                bundle.version,
                BUNDLE_VERSION
            );
        }
        Ok(bundle)
    }

    /// Serialisiert das Bundle als eingerücktes JSON.
    pub fn to_text(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Bundle-Serialisierung fehlgeschlagen")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(ExportBundle::parse("not json").is_err());
        assert!(ExportBundle::parse("[]").is_err());
        assert!(ExportBundle::parse(r#"{"levels":[],"scripts":[]}"#).is_err());
        assert!(ExportBundle::parse(r#"{"levels":[],"version":"1.0"}"#).is_err());
        assert!(
            ExportBundle::parse(r#"{"levels":[],"scripts":[],"version":"1.0","extra":1}"#).is_err()
        );
        assert!(ExportBundle::parse(r#"{"levels":[],"scripts":[],"version":"2.0"}"#).is_err());
    }

    #[test]
    fn test_parse_accepts_empty_bundle() {
        let bundle = ExportBundle::parse(r#"{"levels":[],"scripts":[],"version":"1.0"}"#)
            .expect("Leeres Bundle sollte parsen");
        assert_eq!(bundle, ExportBundle::new(Vec::new(), Vec::new()));
    }
}
