//! Writer für Dialog-Scripts und den zugehörigen Lokalisierungsblock.

use super::value::{escape, push_field, push_line, push_records, LuaRecord, LuaValue};
use crate::core::ScriptRecord;

/// Dialog-Script und Lokalisierungstexte eines Scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogExport {
    /// Script-Tabelle für die Engine
    pub script: String,
    /// `"key" = "text"`-Zeilen
    pub localization: String,
}

/// Erzeugt beide Ausgaben aus dem aktuellen Stand des Scripts.
pub fn export_dialog(script: &ScriptRecord, locale: &str) -> DialogExport {
    DialogExport {
        script: write_dialog_script(script, locale),
        localization: write_localization(script),
    }
}

/// Schreibt die Dialog-Tabelle eines Scripts.
///
/// Jeder Dialog verweist per `getLocalizedText(key, locale)` auf seinen Text;
/// der Text selbst steht nur im Lokalisierungsblock.
pub fn write_dialog_script(script: &ScriptRecord, locale: &str) -> String {
    let dialogs: Vec<LuaRecord> = script
        .dialogs
        .iter()
        .map(|dialog| {
            vec![
                ("video", LuaValue::Single(dialog.image.clone())),
                (
                    "text",
                    LuaValue::Raw(format!(
                        "Graphics.getLocalizedText({}, {})",
                        LuaValue::Str(dialog.key.clone()),
                        LuaValue::Str(locale.to_string())
                    )),
                ),
            ]
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, 0, "{");
    push_field(&mut out, 1, "name", &LuaValue::Str(script.name.clone()), false);
    push_line(
        &mut out,
        1,
        &format!("-- trigger {}", script.name.replace(['\n', '\r'], " ")),
    );
    if dialogs.is_empty() {
        push_line(&mut out, 1, "dialog = {}");
    } else {
        push_line(&mut out, 1, "dialog = {");
        push_records(&mut out, 2, &dialogs);
        push_line(&mut out, 1, "}");
    }
    push_line(&mut out, 0, "},");
    out
}

/// Schreibt den Lokalisierungsblock: eine `"key" = "text"`-Zeile pro Dialog,
/// getrennt durch Leerzeilen.
pub fn write_localization(script: &ScriptRecord) -> String {
    script
        .dialogs
        .iter()
        .map(|dialog| {
            format!(
                "\"{}\" = \"{}\"",
                escape(&dialog.key, '"'),
                escape(&dialog.text, '"')
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
