//! Journal entry
//!
//! A polished narrative record produced from rough session notes.

use serde::{Deserialize, Serialize};

/// A polished journal entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_number: Option<u32>,
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub key_events: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_fields_default_empty() {
        let entry: JournalEntry = serde_json::from_value(serde_json::json!({
            "title": "The Goblin Ambush",
            "content": "The party fought bravely.",
        }))
        .unwrap();
        assert_eq!(entry.session_number, None);
        assert!(entry.characters.is_empty());
        assert!(entry.locations.is_empty());
        assert!(entry.key_events.is_empty());
    }
}
