//! Werte und Tabellen-Bausteine der Engine-Script-Syntax (`key = value`).

use std::fmt;

/// Einrückung pro Ebene.
const INDENT: &str = "    ";

/// Ein skalarer Wert im Engine-Script
#[derive(Debug, Clone, PartialEq)]
pub enum LuaValue {
    /// Ganzzahl
    Int(i64),
    /// Gleitkommazahl in natürlicher Form (`1.0`, `1.25`)
    Number(f64),
    /// Gleitkommazahl mit genau einer Nachkommastelle
    Fixed1(f64),
    /// Wahrheitswert
    Bool(bool),
    /// String in doppelten Anführungszeichen
    Str(String),
    /// String in einfachen Anführungszeichen
    Single(String),
    /// Unveränderter Ausdruck (z.B. Funktionsaufruf)
    Raw(String),
}

impl fmt::Display for LuaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LuaValue::Int(v) => write!(f, "{v}"),
            LuaValue::Number(v) => write!(f, "{}", format_number(*v)),
            LuaValue::Fixed1(v) => write!(f, "{v:.1}"),
            LuaValue::Bool(v) => write!(f, "{v}"),
            LuaValue::Str(v) => write!(f, "\"{}\"", escape(v, '"')),
            LuaValue::Single(v) => write!(f, "'{}'", escape(v, '\'')),
            LuaValue::Raw(v) => f.write_str(v),
        }
    }
}

/// Ein Eintrag einer Objektliste: geordnete Felder
pub type LuaRecord = Vec<(&'static str, LuaValue)>;

/// Rundet eine Position auf eine Ganzzahl.
pub fn round_coord(value: f64) -> i64 {
    value.round() as i64
}

/// Natürliche Zahlendarstellung: ganzzahlige Werte behalten `.0`.
pub fn format_number(value: f64) -> String {
    format!("{value:?}")
}

/// Escaped Backslash, Zeilenumbruch und das gewählte Anführungszeichen.
pub fn escape(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

/// Schreibt eine eingerückte Zeile.
pub(crate) fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(line);
    out.push('\n');
}

fn separator(last: bool) -> &'static str {
    if last {
        ""
    } else {
        ","
    }
}

/// Schreibt `key = value` mit Komma, falls nicht das letzte Feld.
pub(crate) fn push_field(out: &mut String, depth: usize, key: &str, value: &LuaValue, last: bool) {
    push_line(out, depth, &format!("{key} = {value}{}", separator(last)));
}

/// Schreibt `key = { {...}, {...} }`. Leere Listen werden zu `key = {}`.
pub(crate) fn push_record_list(
    out: &mut String,
    depth: usize,
    key: &str,
    records: &[LuaRecord],
    last: bool,
) {
    if records.is_empty() {
        push_line(out, depth, &format!("{key} = {{}}{}", separator(last)));
        return;
    }

    push_line(out, depth, &format!("{key} = {{"));
    push_records(out, depth + 1, records);
    push_line(out, depth, &format!("}}{}", separator(last)));
}

/// Schreibt die Einträge einer Liste ohne umschließende Klammern.
pub(crate) fn push_records(out: &mut String, depth: usize, records: &[LuaRecord]) {
    for (index, record) in records.iter().enumerate() {
        push_line(out, depth, "{");
        for (field_index, (key, value)) in record.iter().enumerate() {
            push_field(out, depth + 1, key, value, field_index + 1 == record.len());
        }
        push_line(out, depth, &format!("}}{}", separator(index + 1 == records.len())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_formats() {
        assert_eq!(LuaValue::Number(1.0).to_string(), "1.0");
        assert_eq!(LuaValue::Number(1.25).to_string(), "1.25");
        assert_eq!(LuaValue::Fixed1(0.55).to_string(), "0.6");
        assert_eq!(LuaValue::Fixed1(1.0).to_string(), "1.0");
        assert_eq!(round_coord(99.5), 100);
        assert_eq!(round_coord(99.49), 99);
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(LuaValue::Str("say \"hi\"".into()).to_string(), r#""say \"hi\"""#);
        assert_eq!(LuaValue::Single("it's".into()).to_string(), r"'it\'s'");
        assert_eq!(LuaValue::Str("a\nb".into()).to_string(), r#""a\nb""#);
    }

    #[test]
    fn test_empty_and_filled_record_lists() {
        let mut out = String::new();
        push_record_list(&mut out, 0, "items", &[], false);
        assert_eq!(out, "items = {},\n");

        let mut out = String::new();
        let records = vec![
            vec![("x", LuaValue::Int(1))],
            vec![("x", LuaValue::Int(2)), ("y", LuaValue::Bool(true))],
        ];
        push_record_list(&mut out, 0, "props", &records, true);
        assert_eq!(
            out,
            "props = {\n    {\n        x = 1\n    },\n    {\n        x = 2,\n        y = true\n    }\n}\n"
        );
    }
}
