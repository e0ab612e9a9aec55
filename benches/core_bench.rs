use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use level_generator::core::{DoorSide, RoomGraph};
use level_generator::lua::write_room_scripts;
use level_generator::shared::GraphLayoutOptions;
use level_generator::{ContentStore, LevelRecord, MemoryStore, PlacedEntity, ScriptRef, ScriptSchema};
use std::hint::black_box;

fn build_synthetic_levels(room_count: u32) -> Vec<LevelRecord> {
    (1..=room_count)
        .map(|room| {
            let mut level = LevelRecord::new(format!("Raum {room}"));
            level.level_number = 1 + room / 100;
            level.room_number = room;
            for (offset, side) in DoorSide::ALL.into_iter().enumerate() {
                level.doors.get_mut(side).leads_to_room = (room + offset as u32) % room_count + 1;
            }
            for i in 0..20 {
                let x = 20.0 + (i * 17 % 360) as f64;
                let y = 20.0 + (i * 29 % 200) as f64;
                match i % 4 {
                    0 => level.add_entity(PlacedEntity::prop("chair", x, y, i % 8 == 0)),
                    1 => level.add_entity(PlacedEntity::enemy("brocorat", x, y, Some(1.5))),
                    2 => level.add_entity(PlacedEntity::item("key", x, y)),
                    _ => level.add_entity(PlacedEntity::trigger(
                        x,
                        y,
                        60.0,
                        30.0,
                        ScriptRef::Named(format!("script-{i}")),
                    )),
                }
            }
            level
        })
        .collect()
}

fn bench_room_script_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("room_script_export");

    for &room_count in &[10u32, 100u32] {
        let levels = build_synthetic_levels(room_count);
        group.bench_with_input(
            BenchmarkId::new("write_room_scripts", room_count),
            &levels,
            |b, levels| b.iter(|| black_box(write_room_scripts(black_box(levels), ScriptSchema::Legacy))),
        );
    }

    group.finish();
}

fn bench_room_graph_build(c: &mut Criterion) {
    let levels = build_synthetic_levels(100);
    let layout = GraphLayoutOptions::default();

    c.bench_function("room_graph_build_100", |b| {
        b.iter(|| {
            let graph = RoomGraph::build(black_box(&levels), &[], &[], &layout);
            black_box(graph.edge_count())
        })
    });
}

fn bench_export_import(c: &mut Criterion) {
    let mut store = ContentStore::load(MemoryStore::new());
    for level in build_synthetic_levels(50) {
        store.add_level(level).expect("Level hinzufügen fehlgeschlagen");
    }
    let blob = store.export_all();

    c.bench_function("import_replace_50", |b| {
        b.iter(|| {
            let mut target = ContentStore::load(MemoryStore::new());
            let summary = target
                .import_replace(black_box(&blob))
                .expect("Import fehlgeschlagen");
            black_box(summary.levels_added)
        })
    });
}

criterion_group!(
    benches,
    bench_room_script_export,
    bench_room_graph_build,
    bench_export_import
);
criterion_main!(benches);
