//! Silver, the Princess of Wordvile.
//!
//! This crate provides:
//! - The character model: identity, power table, dialogue and the
//!   corrupted/redeemed state machine with its derived appearance
//! - The four abilities (drain, create, teleport, absorb) as pure
//!   computations over the current state
//! - An enum-indexed ability dispatch that reports closed state gates
//!   explicitly
//!
//! # Quick Start
//!
//! ```
//! use silver_core::{AbilityOutcome, AbilityUse, Character};
//!
//! let mut silver = Character::new();
//! assert_eq!(silver.drain_words(100).map(|d| d.amount), Some(30));
//!
//! silver.update_state("redeemed");
//! assert!(silver.drain_words(100).is_none());
//! assert!(matches!(
//!     silver.use_ability(AbilityUse::WordCreation),
//!     AbilityOutcome::Created(_)
//! ));
//! ```

pub mod abilities;
pub mod character;

// Primary public API
pub use abilities::{
    Ability, AbilityOutcome, AbilityUse, AbsorbResult, CreateResult, DrainResult, TeleportResult,
    WordEffect, WordKind,
};
pub use character::{
    Appearance, Character, CharacterSnapshot, CharacterState, DialogueTable, PowerKind,
    PowerLevels, UnknownState,
};
