//! Ermittelt Dialog-Scripts, die von Triggern referenziert, aber noch nicht angelegt sind.

use crate::core::{EntityCategory, LevelRecord, ScriptRecord};
use std::collections::{BTreeMap, HashSet};

/// Ein referenziertes, noch fehlendes Script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerScriptInfo {
    /// Script-Name (aus dem Script-Verweis des Triggers)
    pub name: String,
    /// Level-Nummer des Raums mit dem Trigger
    pub level: u32,
    /// Raumnummer des Raums mit dem Trigger
    pub room: u32,
    /// Anzeigename des Raums
    pub room_name: String,
}

/// Fehlende Scripts eines Raums
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomScripts {
    pub level: u32,
    pub room: u32,
    pub room_name: String,
    /// Nach Namen sortiert, ohne Duplikate
    pub scripts: Vec<TriggerScriptInfo>,
}

impl RoomScripts {
    /// Überschrift der Gruppe (`Level 2 - Room 4`).
    pub fn title(&self) -> String {
        format!("Level {} - Room {}", self.level, self.room)
    }
}

/// Sammelt alle Trigger-Scripts ohne passendes Script.
///
/// Zwischensequenz-Trigger und Trigger ohne Script-Verweis werden übersprungen.
/// Gruppiert nach (Level, Raum) aufsteigend, innerhalb einer Gruppe nach Namen.
pub fn harvest_trigger_scripts(
    levels: &[LevelRecord],
    scripts: &[ScriptRecord],
) -> Vec<RoomScripts> {
    let existing: HashSet<&str> = scripts.iter().map(|s| s.name.as_str()).collect();
    let mut groups: BTreeMap<(u32, u32), RoomScripts> = BTreeMap::new();

    for level in levels {
        for trigger in level.entities_of(EntityCategory::Trigger) {
            if trigger.is_cutscene_trigger() {
                continue;
            }
            let Some(script_ref) = trigger.script_ref() else {
                continue;
            };
            let name = script_ref.name();
            if existing.contains(name.as_str()) {
                continue;
            }

            let group = groups
                .entry((level.level_number, level.room_number))
                .or_insert_with(|| RoomScripts {
                    level: level.level_number,
                    room: level.room_number,
                    room_name: level.name.clone(),
                    scripts: Vec::new(),
                });
            if group.scripts.iter().any(|info| info.name == name) {
                continue;
            }
            group.scripts.push(TriggerScriptInfo {
                name,
                level: level.level_number,
                room: level.room_number,
                room_name: level.name.clone(),
            });
        }
    }

    let mut result: Vec<RoomScripts> = groups.into_values().collect();
    for group in &mut result {
        group.scripts.sort_by(|a, b| a.name.cmp(&b.name));
    }
    log::debug!("Trigger-Harvest: {} Räume mit fehlenden Scripts", result.len());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EntityKind, PlacedEntity, ScriptRef, CUTSCENE_CATEGORY};

    fn level(name: &str, level_number: u32, room: u32, scripts: &[&str]) -> LevelRecord {
        let mut level = LevelRecord::new(name);
        level.level_number = level_number;
        level.room_number = room;
        for script in scripts {
            level.add_entity(PlacedEntity::trigger(
                50.0,
                50.0,
                60.0,
                30.0,
                ScriptRef::Named(script.to_string()),
            ));
        }
        level
    }

    #[test]
    fn test_groups_sorted_and_existing_scripts_excluded() {
        let levels = vec![
            level("Halle", 2, 1, &["zeta", "alpha", "known"]),
            level("Keller", 1, 3, &["beta"]),
            level("Dach", 1, 1, &["gamma", "gamma"]),
        ];
        let scripts = vec![ScriptRecord::new("known")];

        let groups = harvest_trigger_scripts(&levels, &scripts);

        let keys: Vec<(u32, u32)> = groups.iter().map(|g| (g.level, g.room)).collect();
        assert_eq!(keys, vec![(1, 1), (1, 3), (2, 1)]);

        let names: Vec<&str> = groups[2].scripts.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
        assert_eq!(groups[0].scripts.len(), 1);
        assert_eq!(groups[2].title(), "Level 2 - Room 1");
        assert_eq!(groups[1].scripts[0].room_name, "Keller");
    }

    #[test]
    fn test_cutscene_and_unreferenced_triggers_skipped() {
        let mut room = LevelRecord::new("Szene");
        room.add_entity(PlacedEntity::new(
            "trigger",
            10.0,
            10.0,
            EntityKind::Trigger {
                width: None,
                height: None,
                script: Some(ScriptRef::Named("intro".to_string())),
                category: Some(CUTSCENE_CATEGORY.to_string()),
            },
        ));
        room.add_entity(PlacedEntity::new(
            "trigger",
            10.0,
            10.0,
            EntityKind::Trigger {
                width: None,
                height: None,
                script: None,
                category: None,
            },
        ));
        room.add_entity(PlacedEntity::trigger(
            10.0,
            10.0,
            60.0,
            30.0,
            ScriptRef::Numeric(4),
        ));

        let groups = harvest_trigger_scripts(&[room], &[]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].scripts.len(), 1);
        assert_eq!(groups[0].scripts[0].name, "4");
    }
}
