//! Content-Store: einziger Besitzer aller Level- und Script-Records.
//!
//! Jede Mutation persistiert anschließend beide Sammlungen vollständig.
//! Layout-Tabellen des Raum-Graphen liegen unter eigenen Schlüsseln und
//! werden nur über `save_node_layout` geschrieben.

use super::bundle::ExportBundle;
use super::harvest::{harvest_trigger_scripts, RoomScripts};
use super::storage::{
    KeyValueStore, KEY_LEVELS, KEY_NODE_POSITIONS, KEY_NODE_STYLES, KEY_SCRIPTS,
};
use crate::core::{LevelRecord, NodePosition, NodeStyle, ScriptRecord};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;

/// Ergebnis eines Imports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    /// Übernommene Levels
    pub levels_added: usize,
    /// Übernommene Scripts
    pub scripts_added: usize,
    /// Wegen bereits vorhandener ID übersprungene Records
    pub skipped: usize,
}

/// Store über einem Key-Value-Speicher.
#[derive(Debug)]
pub struct ContentStore<S: KeyValueStore> {
    storage: S,
    levels: Vec<LevelRecord>,
    scripts: Vec<ScriptRecord>,
}

impl<S: KeyValueStore> ContentStore<S> {
    /// Lädt beide Sammlungen aus `storage`.
    ///
    /// Fehlende oder unlesbare Einträge ergeben eine leere Sammlung.
    pub fn load(storage: S) -> Self {
        let levels: Vec<LevelRecord> = decode_or_empty(&storage, KEY_LEVELS);
        let scripts: Vec<ScriptRecord> = decode_or_empty(&storage, KEY_SCRIPTS);
        log::info!(
            "Content-Store geladen: {} Levels, {} Scripts",
            levels.len(),
            scripts.len()
        );
        Self {
            storage,
            levels,
            scripts,
        }
    }

    pub fn levels(&self) -> &[LevelRecord] {
        &self.levels
    }

    pub fn scripts(&self) -> &[ScriptRecord] {
        &self.scripts
    }

    pub fn level(&self, index: usize) -> Option<&LevelRecord> {
        self.levels.get(index)
    }

    pub fn script(&self, index: usize) -> Option<&ScriptRecord> {
        self.scripts.get(index)
    }

    /// Sucht ein Level per ID.
    pub fn level_by_id(&self, id: Uuid) -> Option<&LevelRecord> {
        self.levels.iter().find(|level| level.id == id)
    }

    /// Sucht ein Script per ID.
    pub fn script_by_id(&self, id: Uuid) -> Option<&ScriptRecord> {
        self.scripts.iter().find(|script| script.id == id)
    }

    /// Zugriff auf den Speicher (z.B. für Diagnose)
    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ── Levels ──────────────────────────────────────────────────────

    /// Hängt ein Level an und persistiert. Gibt den neuen Index zurück.
    ///
    /// Levels mit nicht endlichen Zahlenwerten werden abgelehnt.
    pub fn add_level(&mut self, level: LevelRecord) -> Result<usize> {
        level.validate()?;
        self.levels.push(level);
        self.persist()?;
        Ok(self.levels.len() - 1)
    }

    /// Ersetzt das Level an `index` vollständig.
    pub fn update_level(&mut self, index: usize, level: LevelRecord) -> Result<()> {
        level.validate()?;
        let slot = self
            .levels
            .get_mut(index)
            .with_context(|| format!("Kein Level an Index {index}"))?;
        *slot = level;
        self.persist()
    }

    /// Entfernt das Level an `index`; `None` wenn der Index ungültig ist.
    pub fn delete_level(&mut self, index: usize) -> Result<Option<LevelRecord>> {
        if index >= self.levels.len() {
            return Ok(None);
        }
        let removed = self.levels.remove(index);
        self.persist()?;
        Ok(Some(removed))
    }

    /// Entfernt mehrere Levels auf einmal (Mehrfachauswahl).
    ///
    /// Ungültige und doppelte Indizes werden ignoriert. Gibt die Anzahl
    /// tatsächlich entfernter Levels zurück.
    pub fn delete_levels(&mut self, indices: &[usize]) -> Result<usize> {
        let targets: HashSet<usize> = indices
            .iter()
            .copied()
            .filter(|&index| index < self.levels.len())
            .collect();
        if targets.is_empty() {
            return Ok(0);
        }

        let mut index = 0;
        self.levels.retain(|_| {
            let keep = !targets.contains(&index);
            index += 1;
            keep
        });
        self.persist()?;
        Ok(targets.len())
    }

    // ── Scripts ─────────────────────────────────────────────────────

    /// Hängt ein Script an und persistiert. Gibt den neuen Index zurück.
    pub fn add_script(&mut self, script: ScriptRecord) -> Result<usize> {
        self.scripts.push(script);
        self.persist()?;
        Ok(self.scripts.len() - 1)
    }

    /// Ersetzt das Script an `index` vollständig.
    pub fn update_script(&mut self, index: usize, script: ScriptRecord) -> Result<()> {
        let slot = self
            .scripts
            .get_mut(index)
            .with_context(|| format!("Kein Script an Index {index}"))?;
        *slot = script;
        self.persist()
    }

    /// Entfernt das Script an `index`; `None` wenn der Index ungültig ist.
    pub fn delete_script(&mut self, index: usize) -> Result<Option<ScriptRecord>> {
        if index >= self.scripts.len() {
            return Ok(None);
        }
        let removed = self.scripts.remove(index);
        self.persist()?;
        Ok(Some(removed))
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Serialisiert alle Records als Transport-Text.
    ///
    /// Schlägt nie fehl: ein (praktisch unmöglicher) Serialisierungsfehler
    /// wird geloggt und ergibt einen leeren Text.
    pub fn export_all(&self) -> String {
        let bundle = ExportBundle::new(self.levels.clone(), self.scripts.clone());
        match bundle.to_text() {
            Ok(text) => text,
            Err(e) => {
                log::error!("Export fehlgeschlagen: {e:#}");
                String::new()
            }
        }
    }

    /// Ersetzt beide Sammlungen durch den Inhalt von `blob`.
    ///
    /// Bei Parse-Fehler bleibt der Store unverändert.
    pub fn import_replace(&mut self, blob: &str) -> Result<ImportSummary> {
        let bundle = ExportBundle::parse(blob)?;
        let summary = ImportSummary {
            levels_added: bundle.levels.len(),
            scripts_added: bundle.scripts.len(),
            skipped: 0,
        };
        self.levels = bundle.levels;
        self.scripts = bundle.scripts;
        self.persist()?;
        log::info!(
            "Import (ersetzen): {} Levels, {} Scripts",
            summary.levels_added,
            summary.scripts_added
        );
        Ok(summary)
    }

    /// Hängt alle Records aus `blob` an, deren ID noch nicht existiert.
    ///
    /// Vorhandene Einträge gewinnen; die Reihenfolge folgt dem Blob.
    pub fn import_merge(&mut self, blob: &str) -> Result<ImportSummary> {
        let bundle = ExportBundle::parse(blob)?;
        let mut summary = ImportSummary::default();

        let mut level_ids: HashSet<Uuid> = self.levels.iter().map(|l| l.id).collect();
        for level in bundle.levels {
            if level_ids.insert(level.id) {
                self.levels.push(level);
                summary.levels_added += 1;
            } else {
                summary.skipped += 1;
            }
        }

        let mut script_ids: HashSet<Uuid> = self.scripts.iter().map(|s| s.id).collect();
        for script in bundle.scripts {
            if script_ids.insert(script.id) {
                self.scripts.push(script);
                summary.scripts_added += 1;
            } else {
                summary.skipped += 1;
            }
        }

        self.persist()?;
        log::info!(
            "Import (zusammenführen): {} Levels, {} Scripts neu, {} übersprungen",
            summary.levels_added,
            summary.scripts_added,
            summary.skipped
        );
        Ok(summary)
    }

    /// Fehlende, von Triggern referenzierte Scripts (nur lesend).
    pub fn harvest_trigger_scripts(&self) -> Vec<RoomScripts> {
        harvest_trigger_scripts(&self.levels, &self.scripts)
    }

    // ── Graph-Layout ────────────────────────────────────────────────

    /// Gespeicherte Node-Positionen; leer bei fehlenden/ungültigen Daten.
    pub fn node_positions(&self) -> Vec<NodePosition> {
        decode_or_empty(&self.storage, KEY_NODE_POSITIONS)
    }

    /// Gespeicherte Node-Stile; leer bei fehlenden/ungültigen Daten.
    pub fn node_styles(&self) -> Vec<NodeStyle> {
        decode_or_empty(&self.storage, KEY_NODE_STYLES)
    }

    /// Schreibt beide Layout-Tabellen. Level- und Script-Schlüssel bleiben unberührt.
    pub fn save_node_layout(
        &mut self,
        positions: &[NodePosition],
        styles: &[NodeStyle],
    ) -> Result<()> {
        write_json(&mut self.storage, KEY_NODE_POSITIONS, positions)?;
        write_json(&mut self.storage, KEY_NODE_STYLES, styles)?;
        log::debug!(
            "Graph-Layout gespeichert: {} Positionen, {} Stile",
            positions.len(),
            styles.len()
        );
        Ok(())
    }

    fn persist(&mut self) -> Result<()> {
        write_json(&mut self.storage, KEY_LEVELS, &self.levels)?;
        write_json(&mut self.storage, KEY_SCRIPTS, &self.scripts)?;
        log::debug!(
            "Persistiert: {} Levels, {} Scripts",
            self.levels.len(),
            self.scripts.len()
        );
        Ok(())
    }
}

fn decode_or_empty<T: DeserializeOwned, S: KeyValueStore>(storage: &S, key: &str) -> Vec<T> {
    let Some(bytes) = storage.load(key) else {
        return Vec::new();
    };
    match serde_json::from_slice(&bytes) {
        Ok(values) => values,
        Err(e) => {
            log::warn!("Gespeicherte Daten unter '{key}' ungültig, starte leer: {e}");
            Vec::new()
        }
    }
}

fn write_json<T: Serialize + ?Sized, S: KeyValueStore>(
    storage: &mut S,
    key: &str,
    value: &T,
) -> Result<()> {
    let bytes = serde_json::to_vec(value)
        .with_context(|| format!("Serialisierung für '{key}' fehlgeschlagen"))?;
    storage
        .save(key, &bytes)
        .with_context(|| format!("Speichern von '{key}' fehlgeschlagen"))
}

#[cfg(test)]
mod tests;
