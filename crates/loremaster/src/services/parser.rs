//! Response line-classifier
//!
//! Segments one block of freeform generated text into the parts of a
//! journal entry: title, narrative body, and the character, location,
//! and event lists. A single pass over the non-empty trimmed lines
//! drives a five-state machine; labeled section markers switch the
//! state and are consumed, everything else is classified by the state
//! that is active when the line is seen.

use tracing::debug;

use crate::domain::entities::JournalEntry;

const BULLET_CHARS: [char; 3] = ['-', '•', '*'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Title,
    Content,
    Characters,
    Locations,
    Events,
}

/// Classify a generated response into a journal entry.
///
/// Section markers win over everything, including bullet-shaped lines
/// and lines seen mid-narrative. A response without a recognizable
/// title gets `Session {n}` or `Adventure Log`; a response with no
/// body lines keeps the whole response as content.
pub fn parse_entry(response: &str, session_number: Option<u32>) -> JournalEntry {
    let mut title = String::new();
    let mut content_lines: Vec<&str> = Vec::new();
    let mut characters: Vec<String> = Vec::new();
    let mut locations: Vec<String> = Vec::new();
    let mut key_events: Vec<String> = Vec::new();

    let mut section = Section::Title;

    for raw_line in response.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let lowered = line.to_lowercase();
        if let Some(next) = marker_section(&lowered, line) {
            section = next;
            continue;
        }

        match section {
            Section::Title => {
                title = strip_title_markers(line);
                section = Section::Content;
            }
            Section::Content => {
                content_lines.push(line);
            }
            Section::Characters => {
                if let Some(item) = strip_bullet(line) {
                    characters.push(item);
                } else if !lowered.contains("location") && !lowered.contains("event") {
                    characters.push(line.to_string());
                }
            }
            Section::Locations => {
                if let Some(item) = strip_bullet(line) {
                    locations.push(item);
                } else if !lowered.contains("event") {
                    locations.push(line.to_string());
                }
            }
            Section::Events => {
                if let Some(item) = strip_bullet(line) {
                    key_events.push(item);
                } else {
                    key_events.push(line.to_string());
                }
            }
        }
    }

    if title.is_empty() {
        title = match session_number {
            Some(number) => format!("Session {}", number),
            None => "Adventure Log".to_string(),
        };
    }

    let content = if content_lines.is_empty() {
        response.trim().to_string()
    } else {
        content_lines.join("\n\n").trim().to_string()
    };

    debug!(
        characters = characters.len(),
        locations = locations.len(),
        events = key_events.len(),
        "classified generated entry"
    );

    JournalEntry {
        title,
        content,
        session_number,
        characters,
        locations,
        key_events,
    }
}

/// Section switch for a labeled marker line, if the line is one
fn marker_section(lowered: &str, line: &str) -> Option<Section> {
    if !line.contains(':') {
        return None;
    }
    if lowered.contains("character") {
        Some(Section::Characters)
    } else if lowered.contains("location") {
        Some(Section::Locations)
    } else if lowered.contains("event") || lowered.contains("key moment") {
        Some(Section::Events)
    } else {
        None
    }
}

/// Title cleanup: drop markdown emphasis and heading characters and a
/// leading `Title:` label
fn strip_title_markers(line: &str) -> String {
    let without_markdown: String = line.chars().filter(|c| *c != '*' && *c != '#').collect();
    let trimmed = without_markdown.trim();
    trimmed
        .strip_prefix("Title:")
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// Strip a leading bullet marker, returning the item text, or None for
/// non-bullet lines
fn strip_bullet(line: &str) -> Option<String> {
    if !line.starts_with(BULLET_CHARS) {
        return None;
    }
    Some(
        line.trim_start_matches(|c: char| BULLET_CHARS.contains(&c) || c == ' ')
            .trim()
            .to_string(),
    )
}
