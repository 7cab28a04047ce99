//! Content domain: unit tests for RON parsing and registry ordering.

use std::path::Path;

use super::data::{DataFile, HeroDef, LevelDef};
use super::loader::{load_all_content, ron_options};
use super::registry::ContentRegistry;

#[test]
fn parses_hero_data_file() {
    let source = r#"(
        schema_version: 1,
        items: [
            (
                id: "hero_blade",
                name: "Blade",
                epithet: "Balanced all-rounder",
                color: (0.85, 0.3, 0.3),
                move_speed: 150.0,
                dash_speed: 480.0,
                dash_duration: 0.2,
                dash_cooldown: 1.0,
            ),
        ],
    )"#;

    let data: DataFile<HeroDef> = ron_options().from_str(source).expect("hero file parses");
    assert_eq!(data.schema_version, 1);
    assert_eq!(data.items.len(), 1);

    let hero = &data.items[0];
    assert_eq!(hero.id, "hero_blade");
    assert_eq!(hero.dash_speed, 480.0);
    assert_eq!(hero.color, [0.85, 0.3, 0.3]);
}

#[test]
fn parses_level_data_file() {
    let source = r#"(
        schema_version: 1,
        items: [
            (
                id: "level_courtyard",
                name: "Courtyard",
                floor_color: (0.16, 0.2, 0.24),
                bounds: (left: -400.0, right: 400.0, bottom: -240.0, top: 240.0),
            ),
        ],
    )"#;

    let data: DataFile<LevelDef> = ron_options().from_str(source).expect("level file parses");
    let level = &data.items[0];
    assert_eq!(level.name, "Courtyard");
    assert_eq!(level.bounds.left, -400.0);
    assert_eq!(level.bounds.top, 240.0);
}

#[test]
fn ordered_accessors_sort_by_id() {
    let mut registry = ContentRegistry::default();
    for hero in [
        HeroDef {
            id: "hero_c".to_string(),
            ..sample_hero()
        },
        HeroDef {
            id: "hero_a".to_string(),
            ..sample_hero()
        },
        HeroDef {
            id: "hero_b".to_string(),
            ..sample_hero()
        },
    ] {
        registry.heroes.insert(hero.id.clone(), hero);
    }

    let ids: Vec<&str> = registry
        .heroes_ordered()
        .iter()
        .map(|h| h.id.as_str())
        .collect();
    assert_eq!(ids, vec!["hero_a", "hero_b", "hero_c"]);
}

#[test]
fn missing_files_leave_registry_empty_and_report_errors() {
    let (registry, errors) = load_all_content(Path::new("assets/no_such_dir"));

    // Both collections stay empty so the caller applies fallbacks.
    assert!(registry.heroes.is_empty());
    assert!(registry.levels.is_empty());

    assert_eq!(errors.len(), 2);
    for error in &errors {
        assert!(error.to_string().contains("Failed to load"));
    }
}

#[test]
fn fallbacks_are_non_empty() {
    assert!(!ContentRegistry::fallback_heroes().is_empty());
    assert!(!ContentRegistry::fallback_levels().is_empty());
}

fn sample_hero() -> HeroDef {
    HeroDef {
        id: String::new(),
        name: "Sample".to_string(),
        epithet: "Test hero".to_string(),
        color: [1.0, 1.0, 1.0],
        move_speed: 100.0,
        dash_speed: 300.0,
        dash_duration: 0.2,
        dash_cooldown: 1.0,
    }
}
