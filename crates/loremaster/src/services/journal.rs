//! Journal engine
//!
//! Transforms rough gameplay notes into polished narrative entries and
//! summarizes whole campaigns from their entries.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::JournalEntry;
use crate::domain::errors::DomainError;
use crate::ports::services::{CompletionProvider, CompletionRequest};
use crate::services::parser;

/// Most key events carried into a campaign summary prompt
const MAX_EVENTS_IN_SUMMARY: usize = 10;

const SYSTEM_PROMPT: &str = "\
You are a skilled fantasy chronicler and storyteller specializing in D&D campaign journals.
Your task is to transform rough gameplay notes into engaging, polished narrative entries.

Guidelines:
- Write in an immersive, narrative style that captures the adventure's atmosphere
- Maintain consistency with D&D fantasy settings and tone
- Include character names, locations, and key events clearly
- Use vivid descriptions while staying true to the events described
- Structure entries with clear beginning, middle, and end
- Keep the original facts and events intact while enhancing the narrative
- Write in past tense, as if recounting the adventure

Format the output as a polished journal entry with a title.";

/// Journaling orchestrator.
///
/// Takes the completion provider at construction; one provider round
/// trip per call, no retries.
pub struct JournalEngine {
    provider: Arc<dyn CompletionProvider>,
}

impl JournalEngine {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Transform rough gameplay notes into a polished narrative entry
    pub async fn polish_entry(
        &self,
        rough_notes: &str,
        session_number: Option<u32>,
        additional_context: Option<&str>,
    ) -> Result<JournalEntry, DomainError> {
        let prompt = build_polish_prompt(rough_notes, session_number, additional_context);
        debug!(
            provider = %self.provider.provider_name(),
            session = ?session_number,
            "polishing journal entry"
        );

        let request = CompletionRequest::new(prompt)
            .with_system(SYSTEM_PROMPT)
            .with_temperature(0.7)
            .with_max_tokens(1500);
        let response = self.provider.complete(&request).await?;

        Ok(parser::parse_entry(&response, session_number))
    }

    /// Generate a campaign summary from multiple journal entries.
    ///
    /// An empty entry list short-circuits without touching the
    /// provider.
    pub async fn summarize_campaign(
        &self,
        entries: &[JournalEntry],
    ) -> Result<String, DomainError> {
        if entries.is_empty() {
            return Ok("No entries to summarize.".to_string());
        }

        let mut session_lines = Vec::with_capacity(entries.len() + 1);
        session_lines.push(format!("Campaign spanning {} sessions:\n", entries.len()));

        let mut characters: HashSet<&str> = HashSet::new();
        let mut locations: HashSet<&str> = HashSet::new();
        let mut events: Vec<&str> = Vec::new();

        for entry in entries {
            characters.extend(entry.characters.iter().map(String::as_str));
            locations.extend(entry.locations.iter().map(String::as_str));
            events.extend(entry.key_events.iter().map(String::as_str));
            session_lines.push(match entry.session_number {
                Some(number) => format!("Session {}: {}", number, entry.title),
                None => entry.title.clone(),
            });
        }

        let event_lines: Vec<String> = events
            .iter()
            .take(MAX_EVENTS_IN_SUMMARY)
            .map(|event| format!("- {}", event))
            .collect();

        let prompt = format!(
            "Summarize this D&D campaign based on the following information:\n\n\
             {}\n\n\
             Main Characters: {}\n\
             Locations: {}\n\n\
             Major Events:\n{}\n\n\
             Provide a concise campaign summary (2-3 paragraphs) highlighting the main story arc.",
            session_lines.join("\n"),
            join_or_unknown(&characters),
            join_or_unknown(&locations),
            event_lines.join("\n"),
        );

        debug!(
            entries = entries.len(),
            events = events.len().min(MAX_EVENTS_IN_SUMMARY),
            "summarizing campaign"
        );

        let request = CompletionRequest::new(prompt)
            .with_system(SYSTEM_PROMPT)
            .with_temperature(0.7)
            .with_max_tokens(800);
        self.provider.complete(&request).await
    }
}

fn build_polish_prompt(
    rough_notes: &str,
    session_number: Option<u32>,
    additional_context: Option<&str>,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(number) = session_number {
        parts.push(format!("Session {}", number));
    }

    parts.push("Transform these gameplay notes into a polished journal entry:\n".to_string());
    parts.push(rough_notes.to_string());

    if let Some(context) = additional_context {
        parts.push(format!("\nAdditional context: {}", context));
    }

    parts.push("\nProvide:".to_string());
    parts.push("1. A compelling title for the entry".to_string());
    parts.push("2. A polished narrative that expands on the notes".to_string());
    parts.push("3. List key characters mentioned (after the narrative)".to_string());
    parts.push("4. List locations visited (after characters)".to_string());
    parts.push("5. List major events (after locations)".to_string());
    parts.push("\nFormat: Title, then narrative, then lists.".to_string());

    parts.join("\n")
}

fn join_or_unknown(items: &HashSet<&str>) -> String {
    if items.is_empty() {
        "Unknown".to_string()
    } else {
        items.iter().copied().collect::<Vec<_>>().join(", ")
    }
}
