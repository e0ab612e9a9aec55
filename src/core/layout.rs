//! Persistierte Layout-Daten der Raum-Karte (Positionen und Rahmenfarben).
//!
//! Diese Tabellen liegen getrennt von den Level-Daten, damit
//! Layout-Änderungen nie die Räume selbst verändern.

use serde::{Deserialize, Serialize};

/// Gespeicherte Position eines Raum-Nodes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePosition {
    pub room_number: u32,
    pub x: f32,
    pub y: f32,
}

/// Rahmenfarbe eines Raum-Nodes (Hervorhebung)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderColor {
    /// Power-Item
    Red,
    /// Rätsel
    Blue,
    /// Story
    Green,
    /// Keine Hervorhebung; unbekannte Werte werden ebenfalls so gelesen
    #[default]
    #[serde(other)]
    None,
}

impl BorderColor {
    /// Liest einen Farbnamen; unbekannte Namen ergeben `None`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "red" => BorderColor::Red,
            "blue" => BorderColor::Blue,
            "green" => BorderColor::Green,
            _ => BorderColor::None,
        }
    }

    /// Farbname wie in der Persistenz.
    pub fn name(self) -> &'static str {
        match self {
            BorderColor::None => "none",
            BorderColor::Red => "red",
            BorderColor::Blue => "blue",
            BorderColor::Green => "green",
        }
    }
}

/// Gespeicherter Stil eines Raum-Nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub room_number: u32,
    #[serde(default)]
    pub border_color: BorderColor,
}
