//! Ability - The six core ability scores

use serde::{Deserialize, Serialize};

/// The six abilities of the ruleset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub fn all() -> [Ability; 6] {
        [
            Ability::Strength,
            Ability::Dexterity,
            Ability::Constitution,
            Ability::Intelligence,
            Ability::Wisdom,
            Ability::Charisma,
        ]
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Ability::Strength => "STR",
            Ability::Dexterity => "DEX",
            Ability::Constitution => "CON",
            Ability::Intelligence => "INT",
            Ability::Wisdom => "WIS",
            Ability::Charisma => "CHA",
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ability::Strength => write!(f, "strength"),
            Ability::Dexterity => write!(f, "dexterity"),
            Ability::Constitution => write!(f, "constitution"),
            Ability::Intelligence => write!(f, "intelligence"),
            Ability::Wisdom => write!(f, "wisdom"),
            Ability::Charisma => write!(f, "charisma"),
        }
    }
}

impl std::str::FromStr for Ability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strength" | "str" => Ok(Ability::Strength),
            "dexterity" | "dex" => Ok(Ability::Dexterity),
            "constitution" | "con" => Ok(Ability::Constitution),
            "intelligence" | "int" => Ok(Ability::Intelligence),
            "wisdom" | "wis" => Ok(Ability::Wisdom),
            "charisma" | "cha" => Ok(Ability::Charisma),
            _ => Err(format!("Unknown ability: {}", s)),
        }
    }
}

/// Modifier for an ability score.
///
/// Floor division, so a score of 9 yields -1 rather than 0.
pub fn score_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_floors_toward_negative_infinity() {
        assert_eq!(score_modifier(9), -1);
        assert_eq!(score_modifier(10), 0);
        assert_eq!(score_modifier(17), 3);
        assert_eq!(score_modifier(1), -5);
        assert_eq!(score_modifier(30), 10);
    }

    #[test]
    fn test_modifier_matches_table_for_full_range() {
        for score in 1..=30 {
            let expected = ((score - 10) as f64 / 2.0).floor() as i32;
            assert_eq!(score_modifier(score), expected, "score {}", score);
        }
    }

    #[test]
    fn test_ability_round_trip() {
        for ability in Ability::all() {
            let parsed: Ability = ability.to_string().parse().unwrap();
            assert_eq!(parsed, ability);
        }
    }
}
