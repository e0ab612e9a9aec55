//! Key-Value-Speicher für die Persistenz des Content-Stores.
//!
//! Ein Schreibvorgang gilt pro Schlüssel als atomar; Transaktionen über
//! mehrere Schlüssel gibt es nicht.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

/// Schlüssel der gespeicherten Level-Liste
pub const KEY_LEVELS: &str = "savedLevels";
/// Schlüssel der gespeicherten Script-Liste
pub const KEY_SCRIPTS: &str = "savedScripts";
/// Schlüssel der gespeicherten Node-Positionen
pub const KEY_NODE_POSITIONS: &str = "nodePositions";
/// Schlüssel der gespeicherten Node-Stile
pub const KEY_NODE_STYLES: &str = "nodeStyles";

/// Minimale Schnittstelle eines lokalen Key-Value-Speichers.
pub trait KeyValueStore {
    /// Liest den Wert zu `key`; `None` wenn nicht vorhanden oder unlesbar.
    fn load(&self, key: &str) -> Option<Vec<u8>>;

    /// Schreibt den Wert zu `key` vollständig neu.
    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn load(&self, key: &str) -> Option<Vec<u8>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        (**self).save(key, bytes)
    }
}

/// Speicher im Arbeitsspeicher.
///
/// Klone teilen sich denselben Inhalt, damit Tests den Speicher nach der
/// Übergabe an den Store weiter inspizieren können.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Erstellt einen leeren Speicher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der belegten Schlüssel.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Gibt `true` zurück, wenn kein Schlüssel belegt ist.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Prüft ob ein Schlüssel belegt ist.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// Speicher als JSON-Dateien in einem Verzeichnis (`<key>.json`).
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Erstellt einen Speicher unter `base_dir` (wird beim ersten Schreiben angelegt).
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Basisverzeichnis des Speichers
    pub fn base_dir(&self) -> &std::path::Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Option<Vec<u8>> {
        let path = self.path_for(key);
        match std::fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Speicher-Eintrag {} nicht lesbar: {}", path.display(), e);
                None
            }
        }
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        std::fs::create_dir_all(&self.base_dir).with_context(|| {
            format!(
                "Speicherverzeichnis {} konnte nicht angelegt werden",
                self.base_dir.display()
            )
        })?;

        // Erst in Temp-Datei schreiben, dann umbenennen: ein Schlüssel bleibt atomar
        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, bytes)
            .with_context(|| format!("Schreiben nach {} fehlgeschlagen", tmp_path.display()))?;
        std::fs::rename(&tmp_path, &path)
            .with_context(|| format!("Umbenennen nach {} fehlgeschlagen", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_clones_share_content() {
        let store = MemoryStore::new();
        let mut handle = store.clone();
        handle.save(KEY_LEVELS, b"[]").expect("Speichern fehlgeschlagen");

        assert!(store.contains(KEY_LEVELS));
        assert_eq!(store.load(KEY_LEVELS), Some(b"[]".to_vec()));
        assert_eq!(store.load(KEY_SCRIPTS), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_file_store_roundtrip_and_missing_key() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let mut store = FileStore::new(dir.path().join("data"));

        assert_eq!(store.load(KEY_NODE_STYLES), None);

        store
            .save(KEY_NODE_STYLES, b"[{\"roomNumber\":1}]")
            .expect("Speichern fehlgeschlagen");
        assert_eq!(
            store.load(KEY_NODE_STYLES),
            Some(b"[{\"roomNumber\":1}]".to_vec())
        );
        assert!(dir.path().join("data").join("nodeStyles.json").exists());
        assert!(!dir.path().join("data").join("nodeStyles.json.tmp").exists());
    }
}
