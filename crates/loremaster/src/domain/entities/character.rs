//! Character record
//!
//! The structured character sheet assembled from generator output plus
//! deterministic rule derivation. The external JSON shape serializes the
//! class name under the key `class`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{score_modifier, Ability, Skill};

/// The six ability scores, each in [1, 30]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    #[serde(default = "default_score")]
    pub strength: i32,
    #[serde(default = "default_score")]
    pub dexterity: i32,
    #[serde(default = "default_score")]
    pub constitution: i32,
    #[serde(default = "default_score")]
    pub intelligence: i32,
    #[serde(default = "default_score")]
    pub wisdom: i32,
    #[serde(default = "default_score")]
    pub charisma: i32,
}

fn default_score() -> i32 {
    10
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self {
            strength: 10,
            dexterity: 10,
            constitution: 10,
            intelligence: 10,
            wisdom: 10,
            charisma: 10,
        }
    }
}

impl AbilityScores {
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, ability: Ability, score: i32) {
        match ability {
            Ability::Strength => self.strength = score,
            Ability::Dexterity => self.dexterity = score,
            Ability::Constitution => self.constitution = score,
            Ability::Intelligence => self.intelligence = score,
            Ability::Wisdom => self.wisdom = score,
            Ability::Charisma => self.charisma = score,
        }
    }

    /// Ability modifier, floored toward negative infinity
    pub fn modifier(&self, ability: Ability) -> i32 {
        score_modifier(self.get(ability))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        for ability in Ability::all() {
            let score = self.get(ability);
            if !(1..=30).contains(&score) {
                return Err(DomainError::Validation(format!(
                    "{} score {} out of range 1-30",
                    ability, score
                )));
            }
        }
        Ok(())
    }
}

/// Skill proficiency flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub acrobatics: bool,
    #[serde(default)]
    pub animal_handling: bool,
    #[serde(default)]
    pub arcana: bool,
    #[serde(default)]
    pub athletics: bool,
    #[serde(default)]
    pub deception: bool,
    #[serde(default)]
    pub history: bool,
    #[serde(default)]
    pub insight: bool,
    #[serde(default)]
    pub intimidation: bool,
    #[serde(default)]
    pub investigation: bool,
    #[serde(default)]
    pub medicine: bool,
    #[serde(default)]
    pub nature: bool,
    #[serde(default)]
    pub perception: bool,
    #[serde(default)]
    pub performance: bool,
    #[serde(default)]
    pub persuasion: bool,
    #[serde(default)]
    pub religion: bool,
    #[serde(default)]
    pub sleight_of_hand: bool,
    #[serde(default)]
    pub stealth: bool,
    #[serde(default)]
    pub survival: bool,
}

impl Skills {
    pub fn is_proficient(&self, skill: Skill) -> bool {
        match skill {
            Skill::Acrobatics => self.acrobatics,
            Skill::AnimalHandling => self.animal_handling,
            Skill::Arcana => self.arcana,
            Skill::Athletics => self.athletics,
            Skill::Deception => self.deception,
            Skill::History => self.history,
            Skill::Insight => self.insight,
            Skill::Intimidation => self.intimidation,
            Skill::Investigation => self.investigation,
            Skill::Medicine => self.medicine,
            Skill::Nature => self.nature,
            Skill::Perception => self.perception,
            Skill::Performance => self.performance,
            Skill::Persuasion => self.persuasion,
            Skill::Religion => self.religion,
            Skill::SleightOfHand => self.sleight_of_hand,
            Skill::Stealth => self.stealth,
            Skill::Survival => self.survival,
        }
    }

    pub fn set_proficient(&mut self, skill: Skill, proficient: bool) {
        match skill {
            Skill::Acrobatics => self.acrobatics = proficient,
            Skill::AnimalHandling => self.animal_handling = proficient,
            Skill::Arcana => self.arcana = proficient,
            Skill::Athletics => self.athletics = proficient,
            Skill::Deception => self.deception = proficient,
            Skill::History => self.history = proficient,
            Skill::Insight => self.insight = proficient,
            Skill::Intimidation => self.intimidation = proficient,
            Skill::Investigation => self.investigation = proficient,
            Skill::Medicine => self.medicine = proficient,
            Skill::Nature => self.nature = proficient,
            Skill::Perception => self.perception = proficient,
            Skill::Performance => self.performance = proficient,
            Skill::Persuasion => self.persuasion = proficient,
            Skill::Religion => self.religion = proficient,
            Skill::SleightOfHand => self.sleight_of_hand = proficient,
            Skill::Stealth => self.stealth = proficient,
            Skill::Survival => self.survival = proficient,
        }
    }

    /// Skills the character is proficient in, in fixed skill-list order
    pub fn proficient(&self) -> Vec<Skill> {
        Skill::ALL
            .iter()
            .copied()
            .filter(|skill| self.is_proficient(*skill))
            .collect()
    }
}

/// Carried equipment.
///
/// Generators sometimes emit a bare string where a list is expected;
/// the list fields accept either and normalize to a list. Null and
/// absent both normalize to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default, deserialize_with = "string_or_list")]
    pub weapons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor: Option<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub tools: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub gear: Vec<String>,
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        Single(String),
        Many(Vec<String>),
    }

    Ok(match Option::<StringOrList>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(StringOrList::Single(item)) => vec![item],
        Some(StringOrList::Many(items)) => items,
    })
}

/// A complete, validated character record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub race: String,
    #[serde(rename = "class")]
    pub class_name: String,
    #[serde(default = "default_level")]
    pub level: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
    #[serde(default)]
    pub ability_scores: AbilityScores,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub equipment: Equipment,
    pub hit_points: i32,
    pub armor_class: i32,
    pub proficiency_bonus: i32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub spells: Vec<String>,
}

fn default_level() -> i32 {
    1
}

impl CharacterRecord {
    /// Check the declared field constraints
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(1..=20).contains(&self.level) {
            return Err(DomainError::Validation(format!(
                "level {} out of range 1-20",
                self.level
            )));
        }
        self.ability_scores.validate()?;
        if self.hit_points < 1 {
            return Err(DomainError::Validation(format!(
                "hit points must be at least 1, got {}",
                self.hit_points
            )));
        }
        if self.armor_class < 10 {
            return Err(DomainError::Validation(format!(
                "armor class must be at least 10, got {}",
                self.armor_class
            )));
        }
        if self.proficiency_bonus < 2 {
            return Err(DomainError::Validation(format!(
                "proficiency bonus must be at least 2, got {}",
                self.proficiency_bonus
            )));
        }
        Ok(())
    }

    /// Skill check bonus: governing ability modifier, plus the
    /// proficiency bonus when trained
    pub fn skill_bonus(&self, skill: Skill) -> i32 {
        let base = self.ability_scores.modifier(skill.ability());
        if self.skills.is_proficient(skill) {
            base + self.proficiency_bonus
        } else {
            base
        }
    }
}

impl fmt::Display for CharacterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", self.name)?;
        writeln!(
            f,
            "Race: {} | Class: {} | Level: {}",
            self.race, self.class_name, self.level
        )?;
        writeln!(
            f,
            "Background: {} | Alignment: {}",
            self.background.as_deref().unwrap_or("None"),
            self.alignment.as_deref().unwrap_or("None")
        )?;
        writeln!(f)?;
        writeln!(f, "Ability Scores:")?;
        for ability in Ability::all() {
            writeln!(
                f,
                "  {}: {} ({:+})",
                ability.abbreviation(),
                self.ability_scores.get(ability),
                self.ability_scores.modifier(ability)
            )?;
        }
        writeln!(f)?;
        write!(
            f,
            "HP: {} | AC: {} | Proficiency: +{}",
            self.hit_points, self.armor_class, self.proficiency_bonus
        )?;

        let proficient = self.skills.proficient();
        if !proficient.is_empty() {
            let names: Vec<_> = proficient.iter().map(|s| s.key()).collect();
            write!(f, "\n\nProficient Skills: {}", names.join(", "))?;
        }

        if !self.equipment.weapons.is_empty() {
            write!(f, "\n\nWeapons: {}", self.equipment.weapons.join(", "))?;
        }
        if let Some(armor) = &self.equipment.armor {
            write!(f, "\nArmor: {}", armor)?;
        }
        if !self.equipment.tools.is_empty() {
            write!(f, "\nTools: {}", self.equipment.tools.join(", "))?;
        }
        if !self.equipment.gear.is_empty() {
            write!(f, "\nGear: {}", self.equipment.gear.join(", "))?;
        }

        if !self.features.is_empty() {
            write!(f, "\n\nFeatures: {}", self.features.join(", "))?;
        }
        if !self.spells.is_empty() {
            write!(f, "\n\nSpells: {}", self.spells.join(", "))?;
        }
        Ok(())
    }
}

/// Loosely structured character data as emitted by a generator.
///
/// All derived numeric fields are optional here; the rule derivation
/// engine fills or corrects them before a [`CharacterRecord`] is built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub race: Option<String>,
    #[serde(default, rename = "class")]
    pub class_name: Option<String>,
    #[serde(default)]
    pub level: Option<i32>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub alignment: Option<String>,
    #[serde(default)]
    pub ability_scores: AbilityScores,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub hit_points: Option<i32>,
    #[serde(default)]
    pub armor_class: Option<i32>,
    #[serde(default)]
    pub proficiency_bonus: Option<i32>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub spells: Vec<String>,
}
