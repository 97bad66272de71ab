use std::io::Write;
use tempfile::NamedTempFile;

/// A small catalog with enough variants per entity to exercise every round window.
pub const CATALOG_JSON: &str = r#"{
    "Pikachu": {
        "hp": 35, "attack": 55, "defense": 40, "spAttack": 50, "spDefense": 50, "speed": 90,
        "variants": [
            {"moves": ["Thunderbolt", "Quick Attack", "Double Team", "Thunder Wave"], "item": "Light Ball", "nature": "Timid"},
            {"moves": ["Thunder", "Surf", "Agility", "Iron Tail"], "item": "Leftovers", "name": "Surfing Pikachu"},
            {"moves": ["Volt Tackle", "Quick Attack", "Iron Tail", "Brick Break"], "item": "Choice Band"},
            {"moves": ["Thunderbolt", "Grass Knot", "Hidden Power", "Nasty Plot"], "item": "Life Orb"},
            {"moves": ["Fake Out", "Volt Switch", "Encore", "Protect"], "item": "Focus Sash"}
        ]
    },
    "Raichu": {
        "hp": 60, "attack": 90, "defense": 55, "spAttack": 90, "spDefense": 80, "speed": 110,
        "variants": [
            {"moves": ["Thunderbolt", "Focus Blast", "Grass Knot", "Nasty Plot"], "item": "Life Orb"},
            {"moves": ["Thunder Punch", "Brick Break", "Quick Attack", "Swords Dance"], "item": "Choice Band"}
        ]
    },
    "Lapras": {
        "hp": 130, "attack": 85, "defense": 80, "spAttack": 85, "spDefense": 95, "speed": 60,
        "variants": [
            {"moves": ["Surf", "Ice Beam", "Thunderbolt", "Confuse Ray"], "item": "Leftovers"},
            {"moves": ["Hydro Pump", "Blizzard", "Psychic", "Sing"], "item": "Quick Claw"}
        ]
    }
}"#;

/// Writes `contents` to a temporary file that lives as long as the handle.
pub fn catalog_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp catalog");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp catalog");
    file.flush().expect("Failed to flush temp catalog");
    file
}

pub fn missing_catalog_path() -> std::path::PathBuf {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    dir.path().join(battle_factory::DEFAULT_CATALOG_FILE)
}
