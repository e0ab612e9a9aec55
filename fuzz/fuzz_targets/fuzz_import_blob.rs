#![no_main]

use level_generator::{ContentStore, MemoryStore};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Import darf nie paniken; nach Fehlschlag bleibt der Store leer
    let mut store = ContentStore::load(MemoryStore::new());
    if store.import_merge(text).is_err() {
        assert!(store.levels().is_empty());
        assert!(store.scripts().is_empty());
        return;
    }

    let _ = level_generator::lua::write_room_scripts(
        store.levels(),
        level_generator::ScriptSchema::Explicit,
    );
    let exported = store.export_all();
    let mut copy = ContentStore::load(MemoryStore::new());
    assert!(copy.import_replace(&exported).is_ok());
});
