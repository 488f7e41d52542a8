//! Armor table and category policies
//!
//! Fixed armor list with base AC and category. Matching is a
//! case-insensitive substring check against a supplied armor
//! description, in table declaration order; the first match wins.

use serde::{Deserialize, Serialize};

/// Armor weight category, which decides the dexterity policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmorCategory {
    Light,
    Medium,
    Heavy,
}

impl ArmorCategory {
    /// Dexterity bonus allowed on top of the base AC.
    ///
    /// Light armor takes the full modifier, medium caps it at +2,
    /// heavy ignores it.
    pub fn dex_bonus(&self, dex_modifier: i32) -> i32 {
        match self {
            ArmorCategory::Light => dex_modifier,
            ArmorCategory::Medium => dex_modifier.min(2),
            ArmorCategory::Heavy => 0,
        }
    }
}

impl std::fmt::Display for ArmorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArmorCategory::Light => write!(f, "light"),
            ArmorCategory::Medium => write!(f, "medium"),
            ArmorCategory::Heavy => write!(f, "heavy"),
        }
    }
}

/// A named armor with its base AC and category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmorEntry {
    pub name: &'static str,
    pub base_ac: i32,
    pub category: ArmorCategory,
}

/// Known armors, in match-priority order.
///
/// Declaration order is part of the contract: matching stops at the
/// first entry whose name is a substring of the supplied description.
const ARMOR_TABLE: [ArmorEntry; 11] = [
    ArmorEntry { name: "Leather Armor", base_ac: 11, category: ArmorCategory::Light },
    ArmorEntry { name: "Studded Leather", base_ac: 12, category: ArmorCategory::Light },
    ArmorEntry { name: "Hide Armor", base_ac: 12, category: ArmorCategory::Medium },
    ArmorEntry { name: "Chain Shirt", base_ac: 13, category: ArmorCategory::Medium },
    ArmorEntry { name: "Scale Mail", base_ac: 14, category: ArmorCategory::Medium },
    ArmorEntry { name: "Breastplate", base_ac: 14, category: ArmorCategory::Medium },
    ArmorEntry { name: "Half Plate", base_ac: 15, category: ArmorCategory::Medium },
    ArmorEntry { name: "Ring Mail", base_ac: 14, category: ArmorCategory::Heavy },
    ArmorEntry { name: "Chain Mail", base_ac: 16, category: ArmorCategory::Heavy },
    ArmorEntry { name: "Splint", base_ac: 17, category: ArmorCategory::Heavy },
    ArmorEntry { name: "Plate", base_ac: 18, category: ArmorCategory::Heavy },
];

/// Find the first table entry matching an armor description
pub fn lookup(description: &str) -> Option<&'static ArmorEntry> {
    let lowered = description.to_lowercase();
    ARMOR_TABLE
        .iter()
        .find(|entry| lowered.contains(&entry.name.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_is_case_insensitive() {
        let entry = lookup("chain mail").unwrap();
        assert_eq!(entry.name, "Chain Mail");
        assert_eq!(entry.base_ac, 16);
    }

    #[test]
    fn test_match_accepts_surrounding_text() {
        let entry = lookup("a well-worn suit of Scale Mail, slightly rusted").unwrap();
        assert_eq!(entry.name, "Scale Mail");
    }

    #[test]
    fn test_first_table_entry_wins() {
        // "Studded Leather Armor" contains both "Leather Armor" and
        // "Studded Leather"; declaration order picks Leather Armor.
        let entry = lookup("Studded Leather Armor").unwrap();
        assert_eq!(entry.name, "Leather Armor");
        assert_eq!(entry.base_ac, 11);
    }

    #[test]
    fn test_unknown_armor_has_no_entry() {
        assert!(lookup("Mithril Weave").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_category_dex_policies() {
        assert_eq!(ArmorCategory::Light.dex_bonus(3), 3);
        assert_eq!(ArmorCategory::Medium.dex_bonus(3), 2);
        assert_eq!(ArmorCategory::Medium.dex_bonus(1), 1);
        assert_eq!(ArmorCategory::Heavy.dex_bonus(3), 0);
        assert_eq!(ArmorCategory::Light.dex_bonus(-1), -1);
    }
}
