//! Character class hit dice
//!
//! Fixed hit-die sizes for the twelve base classes. Lookup is a
//! case-sensitive exact match; anything else falls back to a d8.

/// Hit die used when the class name is not in the table
pub const DEFAULT_HIT_DIE: i32 = 8;

/// Hit die size per base class
const HIT_DICE: [(&str, i32); 12] = [
    ("Barbarian", 12),
    ("Fighter", 10),
    ("Paladin", 10),
    ("Ranger", 10),
    ("Cleric", 8),
    ("Druid", 8),
    ("Monk", 8),
    ("Rogue", 8),
    ("Bard", 8),
    ("Warlock", 8),
    ("Sorcerer", 6),
    ("Wizard", 6),
];

/// Hit die size for a class name
pub fn hit_die(class_name: &str) -> i32 {
    HIT_DICE
        .iter()
        .find(|(name, _)| *name == class_name)
        .map(|(_, die)| *die)
        .unwrap_or(DEFAULT_HIT_DIE)
}
