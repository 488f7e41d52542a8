//! Loremaster Domain Library
//!
//! Core domain types and interfaces for the Loremaster tabletop
//! campaign assistant: narrative-to-mechanics character translation and
//! AI-assisted session journaling.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture
//! principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (CharacterRecord, CharacterDraft,
//!     JournalEntry)
//!   - `value_objects/`: Immutable value types (Ability, Skill, armor
//!     and class tables)
//!   - `rules`: Deterministic derivation of proficiency bonus, hit
//!     points, and armor class
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: The completion-provider interface
//!
//! - **Services** (`services/`): Orchestrators and response parsing
//!   - `NarrativeTranslator`: character description -> CharacterRecord
//!   - `JournalEngine`: session notes -> JournalEntry, plus campaign
//!     summaries
//!   - `parser`: the line-classifier for generated entry text
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use loremaster::{JournalEngine, NarrativeTranslator};
//!
//! let provider = Arc::new(my_provider);
//! let translator = NarrativeTranslator::new(provider.clone());
//! let journal = JournalEngine::new(provider);
//! ```

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use domain::{
    score_modifier, Ability, AbilityScores, ArmorCategory, CharacterDraft, CharacterRecord,
    DomainError, Equipment, JournalEntry, Skill, Skills,
};
pub use ports::{CompletionProvider, CompletionRequest, ResponseFormat};
pub use services::{parser, JournalEngine, NarrativeTranslator};
