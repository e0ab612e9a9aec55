//! Dialog-Scripts, die von Triggern ausgelöst werden.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximale Länge eines Dialogtexts in Zeichen.
pub const MAX_DIALOG_TEXT_CHARS: usize = 99;

/// Eine Dialogzeile eines Scripts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    /// Bild-/Video-ID des Sprechers
    pub image: String,
    /// Dialogtext (wird über den Lokalisierungsblock ausgeliefert)
    pub text: String,
    /// Lokalisierungsschlüssel
    pub key: String,
}

/// Ein benanntes Dialog-Script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub dialogs: Vec<Dialog>,
}

impl ScriptRecord {
    /// Erstellt ein leeres Script.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            dialogs: Vec::new(),
        }
    }

    /// Normalisierter Name als Schlüssel-Präfix (klein, Leerzeichen → `-`).
    pub fn key_prefix(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }

    /// Nächster automatisch vergebener Lokalisierungsschlüssel.
    ///
    /// Zählt die vorhandenen Dialoge, deren Schlüssel mit dem normalisierten
    /// Namen beginnt, und hängt die 1-basierte Folgenummer zweistellig an.
    pub fn next_dialog_key(&self) -> String {
        let prefix = self.key_prefix();
        let sequence = self
            .dialogs
            .iter()
            .filter(|d| d.key.starts_with(&prefix))
            .count()
            + 1;
        format!("{prefix}-{sequence:02}")
    }

    /// Hängt einen Dialog mit automatisch vergebenem Schlüssel an.
    pub fn add_dialog(&mut self, image: impl Into<String>, text: impl Into<String>) -> Result<&Dialog> {
        let text = text.into();
        if self.name.is_empty() {
            bail!("Script ohne Namen kann keine Dialoge aufnehmen");
        }
        if text.is_empty() {
            bail!("Leerer Dialogtext");
        }
        let chars = text.chars().count();
        if chars > MAX_DIALOG_TEXT_CHARS {
            bail!(
                "Dialogtext zu lang: {} Zeichen (max. {})",
                chars,
                MAX_DIALOG_TEXT_CHARS
            );
        }

        let key = self.next_dialog_key();
        self.dialogs.push(Dialog {
            image: image.into(),
            text,
            key,
        });
        let index = self.dialogs.len() - 1;
        Ok(&self.dialogs[index])
    }

    /// Entfernt einen Dialog. Bereits vergebene Schlüssel bleiben unverändert.
    pub fn remove_dialog(&mut self, index: usize) -> Option<Dialog> {
        (index < self.dialogs.len()).then(|| self.dialogs.remove(index))
    }

    /// Benennt das Script um; vorhandene Schlüssel werden nicht angepasst.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_generation_sequence() {
        let mut script = ScriptRecord::new("Guard Talk");
        assert_eq!(script.next_dialog_key(), "guard-talk-01");

        script.add_dialog("player", "Halt!").expect("Dialog erwartet");
        assert_eq!(script.dialogs[0].key, "guard-talk-01");

        let second = script
            .add_dialog("radio", "Wer da?")
            .expect("Dialog erwartet");
        assert_eq!(second.key, "guard-talk-02");
    }

    #[test]
    fn test_key_sequence_restarts_after_rename() {
        let mut script = ScriptRecord::new("Intro");
        script.add_dialog("player", "Hallo").expect("Dialog erwartet");
        script.rename("Second Act");

        assert_eq!(script.next_dialog_key(), "second-act-01");
        assert_eq!(script.dialogs[0].key, "intro-01");
    }

    #[test]
    fn test_add_dialog_rejects_invalid_input() {
        let mut unnamed = ScriptRecord::new("");
        assert!(unnamed.add_dialog("player", "Text").is_err());

        let mut script = ScriptRecord::new("Test");
        assert!(script.add_dialog("player", "").is_err());
        assert!(script.add_dialog("player", "x".repeat(100)).is_err());
        assert!(script.add_dialog("player", "x".repeat(99)).is_ok());
        assert_eq!(script.dialogs.len(), 1);
    }

    #[test]
    fn test_remove_dialog_out_of_range() {
        let mut script = ScriptRecord::new("Test");
        script.add_dialog("player", "Eins").expect("Dialog erwartet");
        assert!(script.remove_dialog(3).is_none());
        assert_eq!(script.remove_dialog(0).map(|d| d.text), Some("Eins".to_string()));
        assert!(script.dialogs.is_empty());
    }
}
