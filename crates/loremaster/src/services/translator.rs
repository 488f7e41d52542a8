//! Narrative translator
//!
//! Converts natural-language character descriptions into structured,
//! rules-consistent character records.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{CharacterDraft, CharacterRecord};
use crate::domain::errors::DomainError;
use crate::domain::rules;
use crate::ports::services::{CompletionProvider, CompletionRequest};

const SYSTEM_PROMPT: &str = "\
You are an expert D&D 5e rules engine and character creation assistant.
Your task is to convert natural language character descriptions into valid D&D 5e character sheets.

Follow these D&D 5e rules strictly:
- Ability scores range from 1-30 (typically 3-18 for starting characters)
- Standard ability scores for starting characters use point buy or standard array
- Proficiency bonus is +2 at level 1, increasing by +1 every 4 levels
- Hit points start with class hit die + CON modifier at level 1
- Armor Class is 10 + DEX modifier + armor bonus
- Each class gets specific skill proficiencies (choose from class list)
- Starting equipment is based on class and background

Return ONLY a valid JSON object with the character sheet data. No additional text.";

/// Character translation orchestrator.
///
/// Requests strict JSON from the provider at low temperature, then
/// runs rule derivation over the parsed draft.
pub struct NarrativeTranslator {
    provider: Arc<dyn CompletionProvider>,
}

impl NarrativeTranslator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Translate a narrative character description into a character record
    pub async fn translate(&self, narrative: &str) -> Result<CharacterRecord, DomainError> {
        let prompt = build_prompt(narrative);
        debug!(
            provider = %self.provider.provider_name(),
            narrative_len = narrative.len(),
            "translating character description"
        );

        let request = CompletionRequest::new(prompt)
            .with_system(SYSTEM_PROMPT)
            .with_temperature(0.3)
            .with_json_object();
        let response = self.provider.complete(&request).await?;

        let draft: CharacterDraft = serde_json::from_str(&response)
            .map_err(|e| DomainError::Parse(format!("completion is not valid JSON: {}", e)))?;

        rules::derive_record(draft)
    }
}

fn build_prompt(narrative: &str) -> String {
    format!(
        "Convert this character description into a D&D 5e character sheet:\n\n\
         {}\n\n\
         Generate a complete character sheet with:\n\
         - name, race, class, level, background, alignment\n\
         - ability_scores (strength, dexterity, constitution, intelligence, wisdom, charisma)\n\
         - skills (object with skill names as keys and boolean proficiency as values)\n\
         - equipment (weapons array, armor string, tools array, gear array)\n\
         - hit_points, armor_class, proficiency_bonus\n\
         - features array (class and racial features)\n\
         - spells array (if applicable)\n\n\
         Apply D&D 5e rules for ability score generation, skill proficiencies, starting equipment, \
         hit points, and armor class calculations.\n\n\
         Return as JSON object.",
        narrative
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    struct FakeProvider {
        response: String,
        calls: AtomicUsize,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl FakeProvider {
        fn new(response: &str) -> Arc<Self> {
            Arc::new(Self {
                response: response.to_string(),
                calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn last_request(&self) -> CompletionRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl CompletionProvider for FakeProvider {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request.clone());
            Ok(self.response.clone())
        }

        fn provider_name(&self) -> &str {
            "fake"
        }
    }

    #[tokio::test]
    async fn test_translate_derives_missing_mechanics() {
        let provider = FakeProvider::new(
            r#"{
                "name": "Thorin",
                "race": "Human",
                "class": "Fighter",
                "level": 1,
                "ability_scores": {
                    "strength": 16,
                    "dexterity": 14,
                    "constitution": 15,
                    "intelligence": 10,
                    "wisdom": 12,
                    "charisma": 8
                },
                "equipment": {
                    "weapons": "Longsword",
                    "armor": "Chain Mail"
                }
            }"#,
        );
        let translator = NarrativeTranslator::new(provider.clone());

        let record = translator
            .translate("a brave human fighter named Thorin")
            .await
            .unwrap();

        assert_eq!(record.name, "Thorin");
        assert_eq!(record.class_name, "Fighter");
        // d10 + CON +2
        assert_eq!(record.hit_points, 12);
        // heavy armor, DEX ignored
        assert_eq!(record.armor_class, 16);
        assert_eq!(record.proficiency_bonus, 2);
        // scalar weapon string was coerced to a list
        assert_eq!(record.equipment.weapons, vec!["Longsword".to_string()]);
    }

    #[tokio::test]
    async fn test_translate_requests_strict_json_at_low_temperature() {
        let provider = FakeProvider::new(r#"{"name": "A", "race": "B", "class": "C"}"#);
        let translator = NarrativeTranslator::new(provider.clone());

        translator.translate("a wandering bard").await.unwrap();

        let request = provider.last_request();
        assert!(request.wants_json());
        assert_eq!(request.temperature, 0.3);
        assert!(request.prompt.contains("a wandering bard"));
        assert!(request
            .system_message
            .as_deref()
            .unwrap()
            .contains("rules engine"));
    }

    #[tokio::test]
    async fn test_translate_rejects_malformed_json() {
        let provider = FakeProvider::new("The character is a fighter named Thorin.");
        let translator = NarrativeTranslator::new(provider);

        let result = translator.translate("a fighter").await;
        assert!(matches!(result, Err(DomainError::Parse(_))));
    }

    #[tokio::test]
    async fn test_translate_rejects_out_of_range_record() {
        let provider =
            FakeProvider::new(r#"{"name": "A", "race": "B", "class": "Fighter", "level": 99}"#);
        let translator = NarrativeTranslator::new(provider);

        let result = translator.translate("an impossible hero").await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_translate_surfaces_provider_failure() {
        struct FailingProvider;

        #[async_trait]
        impl CompletionProvider for FailingProvider {
            async fn complete(&self, _request: &CompletionRequest) -> Result<String, DomainError> {
                Err(DomainError::ExternalService("connection refused".into()))
            }

            fn provider_name(&self) -> &str {
                "failing"
            }
        }

        let translator = NarrativeTranslator::new(Arc::new(FailingProvider));
        let result = translator.translate("a fighter").await;
        assert!(matches!(result, Err(DomainError::ExternalService(_))));
    }
}
