//! Persistenz-Schicht: Key-Value-Speicher, Content-Store, Export-Bundle
//! und Trigger-Script-Harvesting.

pub mod bundle;
pub mod content_store;
pub mod harvest;
pub mod storage;

pub use bundle::{ExportBundle, BUNDLE_VERSION};
pub use content_store::{ContentStore, ImportSummary};
pub use harvest::{harvest_trigger_scripts, RoomScripts, TriggerScriptInfo};
pub use storage::{
    FileStore, KeyValueStore, MemoryStore, KEY_LEVELS, KEY_NODE_POSITIONS, KEY_NODE_STYLES,
    KEY_SCRIPTS,
};
