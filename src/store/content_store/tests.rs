use super::*;
use crate::core::{BorderColor, PlacedEntity, ScriptRef};
use crate::store::MemoryStore;

fn sample_level(name: &str, room: u32) -> LevelRecord {
    let mut level = LevelRecord::new(name);
    level.room_number = room;
    level.add_entity(PlacedEntity::prop("chair", 40.0, 40.0, true));
    level.add_entity(PlacedEntity::trigger(
        120.0,
        80.0,
        60.0,
        30.0,
        ScriptRef::Named("guard talk".to_string()),
    ));
    level
}

fn sample_script(name: &str) -> ScriptRecord {
    let mut script = ScriptRecord::new(name);
    script
        .add_dialog("player", "Hallo")
        .expect("Dialog hinzufügen fehlgeschlagen");
    script
}

fn filled_store() -> (ContentStore<MemoryStore>, MemoryStore) {
    let memory = MemoryStore::new();
    let mut store = ContentStore::load(memory.clone());
    store
        .add_level(sample_level("Halle", 1))
        .expect("Level hinzufügen fehlgeschlagen");
    store
        .add_level(sample_level("Keller", 2))
        .expect("Level hinzufügen fehlgeschlagen");
    store
        .add_script(sample_script("intro"))
        .expect("Script hinzufügen fehlgeschlagen");
    (store, memory)
}

#[test]
fn test_empty_storage_loads_empty_collections() {
    let store = ContentStore::load(MemoryStore::new());
    assert!(store.levels().is_empty());
    assert!(store.scripts().is_empty());
    assert!(store.node_positions().is_empty());
}

#[test]
fn test_corrupt_persisted_data_yields_empty_collections() {
    let mut memory = MemoryStore::new();
    memory
        .save(KEY_LEVELS, b"{kaputt")
        .expect("Speichern fehlgeschlagen");
    memory
        .save(KEY_SCRIPTS, br#"[{"id":"kein-uuid"}]"#)
        .expect("Speichern fehlgeschlagen");
    memory
        .save(KEY_NODE_STYLES, b"42")
        .expect("Speichern fehlgeschlagen");

    let store = ContentStore::load(memory);
    assert!(store.levels().is_empty());
    assert!(store.scripts().is_empty());
    assert!(store.node_styles().is_empty());
}

#[test]
fn test_mutations_persist_both_collections() {
    let (mut store, memory) = filled_store();

    let reloaded = ContentStore::load(memory.clone());
    assert_eq!(reloaded.levels(), store.levels());
    assert_eq!(reloaded.scripts(), store.scripts());

    let mut changed = store.level(0).cloned().expect("Level erwartet");
    changed.name = "Große Halle".to_string();
    store
        .update_level(0, changed.clone())
        .expect("Update fehlgeschlagen");
    let removed = store.delete_script(0).expect("Löschen fehlgeschlagen");
    assert!(removed.is_some());

    let reloaded = ContentStore::load(memory);
    assert_eq!(reloaded.level(0), Some(&changed));
    assert!(reloaded.scripts().is_empty());
}

#[test]
fn test_invalid_indices() {
    let (mut store, _) = filled_store();
    assert!(store.update_level(9, LevelRecord::new("x")).is_err());
    assert!(store
        .update_script(9, ScriptRecord::new("x"))
        .is_err());
    assert_eq!(store.delete_level(9).expect("Löschen fehlgeschlagen"), None);
    assert_eq!(store.levels().len(), 2);
}

#[test]
fn test_delete_levels_ignores_duplicates_and_out_of_range() {
    let (mut store, _) = filled_store();
    let kept = store.level(1).map(|l| l.id);
    let removed = store
        .delete_levels(&[0, 0, 7])
        .expect("Löschen fehlgeschlagen");
    assert_eq!(removed, 1);
    assert_eq!(store.levels().len(), 1);
    assert_eq!(store.level(0).map(|l| l.id), kept);
}

#[test]
fn test_lookup_by_id() {
    let (store, _) = filled_store();
    let level_id = store.levels()[1].id;
    let script_id = store.scripts()[0].id;
    assert_eq!(
        store.level_by_id(level_id).map(|l| l.name.as_str()),
        Some("Keller")
    );
    assert_eq!(
        store.script_by_id(script_id).map(|s| s.name.as_str()),
        Some("intro")
    );
    assert!(store.level_by_id(Uuid::new_v4()).is_none());
}

#[test]
fn test_export_then_replace_roundtrip() {
    let (store, _) = filled_store();
    let blob = store.export_all();

    let mut target = ContentStore::load(MemoryStore::new());
    target
        .add_level(LevelRecord::new("wird ersetzt"))
        .expect("Level hinzufügen fehlgeschlagen");
    let summary = target.import_replace(&blob).expect("Import fehlgeschlagen");

    assert_eq!(summary.levels_added, 2);
    assert_eq!(summary.scripts_added, 1);
    assert_eq!(target.levels(), store.levels());
    assert_eq!(target.scripts(), store.scripts());
}

#[test]
fn test_export_roundtrip_keeps_fractional_coordinates() {
    let mut store = ContentStore::load(MemoryStore::new());
    let mut level = LevelRecord::new("Krumm");
    level.light_level = 2.0 / 7.0;
    // Einfacher LCG für reproduzierbare, nicht runde Werte
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..2000 {
        seed = seed
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let x = (seed >> 11) as f64 / (1u64 << 53) as f64 * 400.0;
        level.add_entity(PlacedEntity::prop("crate", x, x / 3.0, false));
    }
    store.add_level(level).expect("Level hinzufügen fehlgeschlagen");

    let mut target = ContentStore::load(MemoryStore::new());
    target
        .import_replace(&store.export_all())
        .expect("Import fehlgeschlagen");
    assert_eq!(target.levels(), store.levels());

    // Auch der persistierte Stand liest sich bitgenau zurück
    let reloaded = ContentStore::load(target.storage().clone());
    assert_eq!(reloaded.levels(), store.levels());
}

#[test]
fn test_non_finite_values_are_rejected() {
    let (mut store, memory) = filled_store();
    let levels_before = store.levels().to_vec();
    let bytes_before = memory.load(KEY_LEVELS);

    let mut dark = LevelRecord::new("Dunkel");
    dark.light_level = f64::NAN;
    assert!(store.add_level(dark).is_err());

    let mut moved = levels_before[0].clone();
    moved.entities[0].x = f64::INFINITY;
    assert!(store.update_level(0, moved).is_err());

    assert_eq!(store.levels(), levels_before.as_slice());
    assert_eq!(memory.load(KEY_LEVELS), bytes_before);

    let mut target = ContentStore::load(MemoryStore::new());
    target
        .import_replace(&store.export_all())
        .expect("Eigener Export muss importierbar bleiben");
    assert_eq!(target.levels().len(), 2);
}

#[test]
fn test_empty_store_roundtrip() {
    let store = ContentStore::load(MemoryStore::new());
    let blob = store.export_all();
    let mut target = ContentStore::load(MemoryStore::new());
    target.import_replace(&blob).expect("Import fehlgeschlagen");
    assert!(target.levels().is_empty());
    assert!(target.scripts().is_empty());
}

#[test]
fn test_merge_is_idempotent() {
    let (source, _) = filled_store();
    let blob = source.export_all();

    let mut target = ContentStore::load(MemoryStore::new());
    target
        .add_level(LevelRecord::new("Bestand"))
        .expect("Level hinzufügen fehlgeschlagen");

    let first = target.import_merge(&blob).expect("Merge fehlgeschlagen");
    assert_eq!(first.levels_added, 2);
    assert_eq!(first.skipped, 0);
    let after_first = target.levels().to_vec();

    let second = target.import_merge(&blob).expect("Merge fehlgeschlagen");
    assert_eq!(second.levels_added, 0);
    assert_eq!(second.scripts_added, 0);
    assert_eq!(second.skipped, 3);
    assert_eq!(target.levels(), after_first.as_slice());

    let names: Vec<&str> = target.levels().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Bestand", "Halle", "Keller"]);
}

#[test]
fn test_merge_existing_entry_wins() {
    let (mut store, _) = filled_store();
    let mut foreign = store.levels()[0].clone();
    foreign.name = "Fremd".to_string();
    let blob = ExportBundle::new(vec![foreign], Vec::new())
        .to_text()
        .expect("Bundle-Serialisierung fehlgeschlagen");

    store.import_merge(&blob).expect("Merge fehlgeschlagen");
    assert_eq!(store.levels().len(), 2);
    assert_eq!(store.levels()[0].name, "Halle");
}

#[test]
fn test_failed_import_leaves_state_unchanged() {
    let (mut store, memory) = filled_store();
    let levels_before = store.levels().to_vec();
    let bytes_before = memory.load(KEY_LEVELS);

    assert!(store.import_replace("{\"levels\": 3}").is_err());
    assert!(store.import_merge("garbage").is_err());

    assert_eq!(store.levels(), levels_before.as_slice());
    assert_eq!(memory.load(KEY_LEVELS), bytes_before);
}

#[test]
fn test_node_layout_does_not_touch_levels() {
    let (mut store, memory) = filled_store();
    let levels_before = memory.load(KEY_LEVELS);

    let positions = vec![NodePosition {
        room_number: 1,
        x: 120.0,
        y: 340.0,
    }];
    let styles = vec![NodeStyle {
        room_number: 2,
        border_color: BorderColor::Green,
    }];
    store
        .save_node_layout(&positions, &styles)
        .expect("Layout speichern fehlgeschlagen");

    assert_eq!(memory.load(KEY_LEVELS), levels_before);
    assert_eq!(store.node_positions(), positions);
    assert_eq!(store.node_styles(), styles);
}

#[test]
fn test_harvest_through_store() {
    let (store, _) = filled_store();
    let groups = store.harvest_trigger_scripts();
    assert_eq!(groups.len(), 2);
    assert!(groups
        .iter()
        .all(|g| g.scripts.len() == 1 && g.scripts[0].name == "guard talk"));
}
