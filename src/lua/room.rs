//! Writer für Raum-Scripts (`floor = { ... }`-Tabelle der Engine).

use super::value::{push_field, push_line, push_record_list, round_coord, LuaRecord, LuaValue};
use crate::core::{EntityKind, LevelRecord, PlacedEntity, ScriptRef};
use crate::shared::options::{
    ScriptSchema, ENEMY_DEFAULT_SPEED, TRIGGER_DEFAULT_HEIGHT, TRIGGER_DEFAULT_WIDTH,
};

/// Objekte eines Raums, aufgeteilt nach Export-Tabelle
#[derive(Debug, Default)]
struct Buckets {
    props: Vec<LuaRecord>,
    enemies: Vec<LuaRecord>,
    items: Vec<LuaRecord>,
    triggers: Vec<LuaRecord>,
}

/// Schreibt einen Raum als Engine-Script.
///
/// Die Ausgabe ist deterministisch: gleiche Eingabe ergibt byte-identischen Text.
/// Nur offene Türen werden geschrieben, ihr Ziel als `level * 100 + room`.
pub fn write_room_script(level: &LevelRecord, schema: ScriptSchema) -> String {
    let buckets = partition(&level.entities, schema);

    let doors: Vec<LuaRecord> = level
        .doors
        .open()
        .map(|(side, door)| {
            vec![
                ("direction", LuaValue::Single(side.as_str().to_string())),
                ("open", LuaValue::Single("open".to_string())),
                (
                    "leadsTo",
                    LuaValue::Int(level.global_room_id(door.leads_to_room)),
                ),
            ]
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, 0, &format!("--{}", level.room_number));
    push_line(&mut out, 0, "{");
    push_line(&mut out, 1, "floor = {");

    let header = [
        ("level", LuaValue::Int(level.level_number.into())),
        ("visited", LuaValue::Bool(false)),
        ("roomNumber", LuaValue::Int(level.room_number.into())),
        ("tile", LuaValue::Int(level.tile_index.into())),
        ("light", LuaValue::Fixed1(level.light_level)),
        ("shadow", LuaValue::Bool(level.shadow_enabled)),
    ];
    for (key, value) in &header {
        push_field(&mut out, 2, key, value, false);
    }

    push_record_list(&mut out, 2, "doors", &doors, false);
    push_line(&mut out, 2, "comic = {},");
    push_record_list(&mut out, 2, "items", &buckets.items, false);
    push_record_list(&mut out, 2, "triggers", &buckets.triggers, false);
    push_record_list(&mut out, 2, "enemies", &buckets.enemies, false);
    push_record_list(&mut out, 2, "props", &buckets.props, true);

    push_line(&mut out, 1, "}");
    push_line(&mut out, 0, "}");
    out
}

/// Schreibt alle Räume hintereinander, getrennt durch eine Leerzeile.
///
/// Die erste Zeile ist ein Lua-Kommentar mit dem Schema-Tag
/// (`-- schema: room-script/1`). Einzelne Raum-Scripts aus
/// [`write_room_script`] tragen kein Tag.
pub fn write_room_scripts(levels: &[LevelRecord], schema: ScriptSchema) -> String {
    let mut out = String::new();
    push_line(&mut out, 0, &format!("-- schema: {}", schema.tag()));
    let rooms = levels
        .iter()
        .map(|level| write_room_script(level, schema))
        .collect::<Vec<_>>()
        .join("\n");
    out.push_str(&rooms);
    out
}

fn partition(entities: &[PlacedEntity], schema: ScriptSchema) -> Buckets {
    let mut buckets = Buckets::default();

    for entity in entities {
        let x = ("x", LuaValue::Int(round_coord(entity.x)));
        let y = ("y", LuaValue::Int(round_coord(entity.y)));
        let asset = ("type", LuaValue::Str(entity.asset.clone()));

        match &entity.kind {
            EntityKind::Prop { no_collide } => {
                let mut record = vec![asset, x, y];
                if *no_collide || schema == ScriptSchema::Explicit {
                    record.push(("nocollide", LuaValue::Bool(*no_collide)));
                }
                buckets.props.push(record);
            }
            EntityKind::Enemy { speed } => {
                let speed = speed.unwrap_or(ENEMY_DEFAULT_SPEED);
                buckets
                    .enemies
                    .push(vec![asset, x, y, ("speed", LuaValue::Number(speed))]);
            }
            EntityKind::Item => buckets.items.push(vec![asset, x, y]),
            EntityKind::Trigger {
                width,
                height,
                script,
                ..
            } => {
                let width = width.unwrap_or(TRIGGER_DEFAULT_WIDTH);
                let height = height.unwrap_or(TRIGGER_DEFAULT_HEIGHT);
                let script = match script.clone().unwrap_or_default() {
                    ScriptRef::Numeric(index) => LuaValue::Int(index),
                    ScriptRef::Named(name) => LuaValue::Str(name),
                };
                buckets.triggers.push(vec![
                    ("usedTrigger", LuaValue::Bool(false)),
                    x,
                    y,
                    ("width", LuaValue::Int(round_coord(width))),
                    ("height", LuaValue::Int(round_coord(height))),
                    ("script", script),
                ]);
            }
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DoorSide, EntityKind};

    fn empty_room() -> LevelRecord {
        let mut level = LevelRecord::new("Leer");
        for side in DoorSide::ALL {
            level.doors.get_mut(side).open = false;
        }
        level
    }

    #[test]
    fn test_empty_room_layout() {
        let level = empty_room();
        let expected = "\
--1
{
    floor = {
        level = 1,
        visited = false,
        roomNumber = 1,
        tile = 1,
        light = 0.5,
        shadow = false,
        doors = {},
        comic = {},
        items = {},
        triggers = {},
        enemies = {},
        props = {}
    }
}
";
        assert_eq!(write_room_script(&level, ScriptSchema::Legacy), expected);
    }

    #[test]
    fn test_only_open_doors_with_global_target() {
        let mut level = empty_room();
        level.level_number = 3;
        level.doors.right.open = true;
        level.doors.right.leads_to_room = 5;

        let script = write_room_script(&level, ScriptSchema::Legacy);
        assert!(script.contains(
            "        doors = {\n            {\n                direction = 'right',\n                open = 'open',\n                leadsTo = 305\n            }\n        },\n"
        ));
        assert!(!script.contains("'top'"));
    }

    #[test]
    fn test_large_level_number_does_not_overflow() {
        let mut level = empty_room();
        level.level_number = 50_000_000;
        level.doors.top.open = true;
        level.doors.top.leads_to_room = 3;

        let script = write_room_script(&level, ScriptSchema::Legacy);
        assert!(script.contains("level = 50000000,"));
        assert!(script.contains("leadsTo = 5000000003"));
    }

    #[test]
    fn test_nocollide_presence_depends_on_schema() {
        let mut level = empty_room();
        level.add_entity(PlacedEntity::prop("chair", 40.4, 50.6, false));
        level.add_entity(PlacedEntity::prop("table", 80.0, 90.0, true));

        let legacy = write_room_script(&level, ScriptSchema::Legacy);
        assert_eq!(legacy.matches("nocollide").count(), 1);
        assert!(legacy.contains("nocollide = true"));
        assert!(legacy.contains("x = 40,"));
        assert!(legacy.contains("y = 51"));

        let explicit = write_room_script(&level, ScriptSchema::Explicit);
        assert!(explicit.contains("nocollide = false"));
        assert!(explicit.contains("nocollide = true"));
    }

    #[test]
    fn test_enemy_and_trigger_defaults() {
        let mut level = empty_room();
        level.add_entity(PlacedEntity::enemy("brocorat", 100.0, 100.0, None));
        level.add_entity(PlacedEntity::new(
            "trigger",
            200.0,
            120.0,
            EntityKind::Trigger {
                width: None,
                height: None,
                script: None,
                category: None,
            },
        ));

        let script = write_room_script(&level, ScriptSchema::Legacy);
        assert!(script.contains("speed = 1.0"));
        assert!(script.contains("usedTrigger = false,"));
        assert!(script.contains("width = 60,"));
        assert!(script.contains("height = 30,"));
        assert!(script.contains("script = 1\n"));
    }

    #[test]
    fn test_named_script_ref_is_quoted() {
        let mut level = empty_room();
        level.add_entity(PlacedEntity::trigger(
            100.0,
            100.0,
            80.4,
            40.0,
            ScriptRef::Named("guard talk".to_string()),
        ));

        let script = write_room_script(&level, ScriptSchema::Legacy);
        assert!(script.contains("script = \"guard talk\"\n"));
        assert!(script.contains("width = 80,"));
    }

    #[test]
    fn test_items_bucket_and_key_order() {
        let mut level = empty_room();
        level.add_entity(PlacedEntity::item("key", 30.0, 30.0));
        level.add_entity(PlacedEntity::prop("box", 60.0, 60.0, false));

        let script = write_room_script(&level, ScriptSchema::Legacy);
        let order: Vec<usize> = ["level =", "doors =", "comic =", "items =", "triggers =", "enemies =", "props ="]
            .iter()
            .map(|key| script.find(key).expect("Schlüssel erwartet"))
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
        assert!(script.contains("type = \"key\""));
    }

    #[test]
    fn test_room_collection_starts_with_schema_tag() {
        let rooms = vec![empty_room(), empty_room()];

        let legacy = write_room_scripts(&rooms, ScriptSchema::Legacy);
        assert!(legacy.starts_with("-- schema: room-script/1\n--1\n{\n"));
        assert_eq!(legacy.matches("floor = {").count(), 2);
        assert!(legacy.contains("}\n\n--1\n"));

        let explicit = write_room_scripts(&[], ScriptSchema::Explicit);
        assert_eq!(explicit, "-- schema: room-script/2\n");
    }

    #[test]
    fn test_output_is_deterministic() {
        let mut level = LevelRecord::new("Det");
        level.add_entity(PlacedEntity::prop("chair", 40.0, 40.0, true));
        level.add_entity(PlacedEntity::enemy("frogcolli", 140.0, 40.0, Some(1.5)));
        assert_eq!(
            write_room_script(&level, ScriptSchema::Legacy),
            write_room_script(&level, ScriptSchema::Legacy)
        );
    }
}
