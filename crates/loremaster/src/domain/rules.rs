//! Rule derivation
//!
//! Pure functions that fill in missing or invalid numeric fields of a
//! character draft. No I/O; unknown class or armor names never fail and
//! fall back to default policies instead.

use crate::domain::entities::{CharacterDraft, CharacterRecord};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{armor, character_class, score_modifier};

/// Proficiency bonus for a level: +2 at level 1, +1 every four levels
pub fn proficiency_bonus(level: i32) -> i32 {
    2 + (level - 1).div_euclid(4)
}

/// Maximum hit points for a class, level, and constitution score.
///
/// First level takes the maximized hit die; each further level takes
/// the die's floor average plus one. Never below 1 hit point per level.
pub fn hit_points(class_name: &str, level: i32, constitution: i32) -> i32 {
    let die = character_class::hit_die(class_name);
    let con_modifier = score_modifier(constitution);

    if level == 1 {
        (die + con_modifier).max(1)
    } else {
        let first_level = die + con_modifier;
        let per_level = die / 2 + 1 + con_modifier;
        (first_level + per_level * (level - 1)).max(level)
    }
}

/// Armor class for a dexterity score and an optional armor description.
///
/// Unarmored or unrecognized armor is 10 plus the dexterity modifier.
/// Recognized armor applies the category's dexterity policy on top of
/// its base AC.
pub fn armor_class(dexterity: i32, armor_name: Option<&str>) -> i32 {
    let dex_modifier = score_modifier(dexterity);

    let Some(description) = armor_name else {
        return 10 + dex_modifier;
    };

    match armor::lookup(description) {
        Some(entry) => entry.base_ac + entry.category.dex_bonus(dex_modifier),
        None => 10 + dex_modifier,
    }
}

/// Derive a validated record from a draft.
///
/// The proficiency bonus is always recomputed from the level, replacing
/// whatever the generator supplied. Hit points and armor class are kept
/// when present and at or above their floors, derived otherwise. The
/// assembled record is range-checked before it is returned.
pub fn derive_record(draft: CharacterDraft) -> Result<CharacterRecord, DomainError> {
    let name = draft.name.ok_or_else(|| DomainError::missing_field("name"))?;
    let race = draft.race.ok_or_else(|| DomainError::missing_field("race"))?;
    let class_name = draft
        .class_name
        .ok_or_else(|| DomainError::missing_field("class"))?;

    let level = draft.level.unwrap_or(1);
    let ability_scores = draft.ability_scores;

    let hit_points = match draft.hit_points {
        Some(hp) if hp >= 1 => hp,
        _ => hit_points(&class_name, level, ability_scores.constitution),
    };
    let armor_class = match draft.armor_class {
        Some(ac) if ac >= 10 => ac,
        _ => armor_class(ability_scores.dexterity, draft.equipment.armor.as_deref()),
    };

    let record = CharacterRecord {
        name,
        race,
        class_name,
        level,
        background: draft.background,
        alignment: draft.alignment,
        ability_scores,
        skills: draft.skills,
        equipment: draft.equipment,
        hit_points,
        armor_class,
        proficiency_bonus: proficiency_bonus(level),
        features: draft.features,
        spells: draft.spells,
    };
    record.validate()?;
    Ok(record)
}
