//! Silver's abilities.
//!
//! Each ability is a pure computation over the character's current state:
//! nothing here mutates the character, and applying a result to the wider
//! world (removing drained words from a target, spending energy) is up to
//! the caller.
//!
//! Abilities can be used two ways:
//! 1. Directly, through [`Character::drain_words`] and friends. Abilities
//!    gated on a state return `None` when the gate is closed.
//! 2. Through [`Character::use_ability`], which takes an [`AbilityUse`] and
//!    always returns an [`AbilityOutcome`], reporting a closed gate as
//!    [`AbilityOutcome::Unavailable`].

use crate::character::{Character, CharacterState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Most words a single drain can take.
pub const DRAIN_CAP: u32 = 30;
/// Words produced by one creation.
pub const CREATE_AMOUNT: u32 = 20;
/// Energy spent on every teleport.
pub const TELEPORT_ENERGY_COST: u32 = 15;
/// Most power a single absorption can restore.
pub const ABSORB_CAP: i64 = 50;
/// Power restored per emerald.
pub const POWER_PER_EMERALD: i64 = 2;

// ============================================================================
// Ability Kinds
// ============================================================================

/// The fixed set of abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    WordDrain,
    WordCreation,
    Teleport,
    EmeraldAbsorption,
}

impl Ability {
    pub fn name(&self) -> &'static str {
        match self {
            Ability::WordDrain => "word_drain",
            Ability::WordCreation => "word_creation",
            Ability::Teleport => "teleport",
            Ability::EmeraldAbsorption => "emerald_absorption",
        }
    }

    pub fn all() -> [Ability; 4] {
        [
            Ability::WordDrain,
            Ability::WordCreation,
            Ability::Teleport,
            Ability::EmeraldAbsorption,
        ]
    }

    /// The state the character must be in to use this ability, if any.
    pub fn required_state(&self) -> Option<CharacterState> {
        match self {
            Ability::WordDrain => Some(CharacterState::Corrupted),
            Ability::WordCreation => Some(CharacterState::Redeemed),
            Ability::Teleport | Ability::EmeraldAbsorption => None,
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Results
// ============================================================================

/// Which way a word ability moves words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordEffect {
    Drain,
    Create,
}

/// Flavour of created words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordKind {
    Positive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrainResult {
    pub effect: WordEffect,
    pub amount: u32,
    pub color_drain: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateResult {
    pub effect: WordEffect,
    pub amount: u32,
    #[serde(rename = "type")]
    pub kind: WordKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeleportResult {
    pub success: bool,
    pub location: String,
    pub energy_cost: u32,
}

/// `power_restored` is only clamped from above, so a negative emerald count
/// restores negative power.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsorbResult {
    pub power_restored: i64,
    pub emeralds_used: i64,
}

// ============================================================================
// Dispatch
// ============================================================================

/// A request to use one ability, carrying that ability's input.
///
/// Serialized with an `ability` tag, e.g.
/// `{"ability": "word_drain", "words": 12}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "ability", rename_all = "snake_case")]
pub enum AbilityUse {
    WordDrain {
        #[serde(default)]
        words: u32,
    },
    WordCreation,
    Teleport {
        #[serde(default)]
        location: String,
    },
    EmeraldAbsorption {
        #[serde(default)]
        emeralds: i64,
    },
}

impl AbilityUse {
    pub fn ability(&self) -> Ability {
        match self {
            AbilityUse::WordDrain { .. } => Ability::WordDrain,
            AbilityUse::WordCreation => Ability::WordCreation,
            AbilityUse::Teleport { .. } => Ability::Teleport,
            AbilityUse::EmeraldAbsorption { .. } => Ability::EmeraldAbsorption,
        }
    }
}

/// What happened when an ability was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AbilityOutcome {
    Drained(DrainResult),
    Created(CreateResult),
    Teleported(TeleportResult),
    Absorbed(AbsorbResult),
    /// The character is not in the state the ability requires.
    Unavailable {
        ability: Ability,
        required_state: CharacterState,
    },
}

impl AbilityOutcome {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, AbilityOutcome::Unavailable { .. })
    }

    fn unavailable(ability: Ability, required_state: CharacterState) -> Self {
        AbilityOutcome::Unavailable {
            ability,
            required_state,
        }
    }
}

impl Character {
    /// Drain up to [`DRAIN_CAP`] words from a target holding `current_words`.
    ///
    /// Only works while corrupted.
    pub fn drain_words(&self, current_words: u32) -> Option<DrainResult> {
        if !self.is_corrupted() {
            return None;
        }
        Some(DrainResult {
            effect: WordEffect::Drain,
            amount: current_words.min(DRAIN_CAP),
            color_drain: true,
        })
    }

    /// Create [`CREATE_AMOUNT`] positive words. Only works once redeemed.
    pub fn create_words(&self) -> Option<CreateResult> {
        if !self.is_redeemed() {
            return None;
        }
        Some(CreateResult {
            effect: WordEffect::Create,
            amount: CREATE_AMOUNT,
            kind: WordKind::Positive,
        })
    }

    /// Teleport anywhere in Wordvile. The location is not validated.
    pub fn teleport(&self, location: impl Into<String>) -> TeleportResult {
        TeleportResult {
            success: true,
            location: location.into(),
            energy_cost: TELEPORT_ENERGY_COST,
        }
    }

    pub fn absorb_emeralds(&self, emeralds: i64) -> AbsorbResult {
        AbsorbResult {
            power_restored: emeralds.saturating_mul(POWER_PER_EMERALD).min(ABSORB_CAP),
            emeralds_used: emeralds,
        }
    }

    /// Use any ability, reporting a closed state gate as
    /// [`AbilityOutcome::Unavailable`] instead of `None`.
    pub fn use_ability(&self, request: AbilityUse) -> AbilityOutcome {
        match request {
            AbilityUse::WordDrain { words } => match self.drain_words(words) {
                Some(result) => AbilityOutcome::Drained(result),
                None => AbilityOutcome::unavailable(Ability::WordDrain, CharacterState::Corrupted),
            },
            AbilityUse::WordCreation => match self.create_words() {
                Some(result) => AbilityOutcome::Created(result),
                None => {
                    AbilityOutcome::unavailable(Ability::WordCreation, CharacterState::Redeemed)
                }
            },
            AbilityUse::Teleport { location } => {
                AbilityOutcome::Teleported(self.teleport(location))
            }
            AbilityUse::EmeraldAbsorption { emeralds } => {
                AbilityOutcome::Absorbed(self.absorb_emeralds(emeralds))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_drain_caps_at_thirty() {
        let silver = Character::new();
        assert_eq!(silver.drain_words(0).unwrap().amount, 0);
        assert_eq!(silver.drain_words(12).unwrap().amount, 12);
        assert_eq!(silver.drain_words(30).unwrap().amount, 30);
        assert_eq!(silver.drain_words(31).unwrap().amount, 30);
        assert_eq!(silver.drain_words(u32::MAX).unwrap().amount, 30);
    }

    #[test]
    fn test_drain_requires_corruption() {
        let mut silver = Character::new();
        silver.set_state(CharacterState::Redeemed);
        assert_eq!(silver.drain_words(100), None);
    }

    #[test]
    fn test_create_requires_redemption() {
        let mut silver = Character::new();
        assert_eq!(silver.create_words(), None);

        silver.set_state(CharacterState::Redeemed);
        let created = silver.create_words().unwrap();
        assert_eq!(created.amount, 20);
        assert_eq!(created.kind, WordKind::Positive);
    }

    #[test]
    fn test_teleport_ignores_state() {
        let mut silver = Character::new();
        let expected = TeleportResult {
            success: true,
            location: "Wordvile Tower".to_string(),
            energy_cost: 15,
        };
        assert_eq!(silver.teleport("Wordvile Tower"), expected);

        silver.set_state(CharacterState::Redeemed);
        assert_eq!(silver.teleport("Wordvile Tower"), expected);
        assert_eq!(silver.teleport("").location, "");
    }

    #[test]
    fn test_absorb_emeralds() {
        let silver = Character::new();
        assert_eq!(silver.absorb_emeralds(0).power_restored, 0);
        assert_eq!(silver.absorb_emeralds(10).power_restored, 20);
        assert_eq!(silver.absorb_emeralds(25).power_restored, 50);
        assert_eq!(silver.absorb_emeralds(26).power_restored, 50);
        assert_eq!(silver.absorb_emeralds(26).emeralds_used, 26);

        // Only the upper side is clamped
        assert_eq!(silver.absorb_emeralds(-3).power_restored, -6);
        assert_eq!(silver.absorb_emeralds(i64::MAX).power_restored, 50);
        assert_eq!(silver.absorb_emeralds(i64::MIN).power_restored, i64::MIN);
    }

    #[test]
    fn test_abilities_do_not_mutate() {
        let silver = Character::new();
        let before = silver.snapshot();
        silver.drain_words(50);
        silver.create_words();
        silver.teleport("Lexicon Library");
        silver.absorb_emeralds(7);
        assert_eq!(silver.snapshot(), before);
    }

    #[test]
    fn test_required_state() {
        assert_eq!(
            Ability::WordDrain.required_state(),
            Some(CharacterState::Corrupted)
        );
        assert_eq!(
            Ability::WordCreation.required_state(),
            Some(CharacterState::Redeemed)
        );
        assert_eq!(Ability::Teleport.required_state(), None);
        assert_eq!(Ability::EmeraldAbsorption.required_state(), None);
    }

    #[test]
    fn test_use_ability_dispatch() {
        let mut silver = Character::new();

        assert_eq!(
            silver.use_ability(AbilityUse::WordDrain { words: 5 }),
            AbilityOutcome::Drained(silver.drain_words(5).unwrap())
        );
        assert_eq!(
            silver.use_ability(AbilityUse::WordCreation),
            AbilityOutcome::Unavailable {
                ability: Ability::WordCreation,
                required_state: CharacterState::Redeemed,
            }
        );

        silver.set_state(CharacterState::Redeemed);
        assert!(silver
            .use_ability(AbilityUse::WordDrain { words: 5 })
            .is_unavailable());
        assert!(matches!(
            silver.use_ability(AbilityUse::WordCreation),
            AbilityOutcome::Created(_)
        ));
        assert!(matches!(
            silver.use_ability(AbilityUse::EmeraldAbsorption { emeralds: 4 }),
            AbilityOutcome::Absorbed(AbsorbResult { power_restored: 8, .. })
        ));
    }

    #[test]
    fn test_result_field_names() {
        let mut silver = Character::new();
        assert_eq!(
            serde_json::to_value(silver.drain_words(100)).unwrap(),
            json!({"effect": "drain", "amount": 30, "colorDrain": true})
        );
        assert_eq!(
            serde_json::to_value(silver.teleport("Wordvile Tower")).unwrap(),
            json!({"success": true, "location": "Wordvile Tower", "energyCost": 15})
        );
        assert_eq!(
            serde_json::to_value(silver.absorb_emeralds(3)).unwrap(),
            json!({"powerRestored": 6, "emeraldsUsed": 3})
        );

        silver.set_state(CharacterState::Redeemed);
        assert_eq!(
            serde_json::to_value(silver.create_words()).unwrap(),
            json!({"effect": "create", "amount": 20, "type": "positive"})
        );
        assert_eq!(serde_json::to_value(silver.drain_words(1)).unwrap(), json!(null));
    }

    #[test]
    fn test_ability_use_from_json() {
        let parsed: AbilityUse =
            serde_json::from_value(json!({"ability": "word_drain", "words": 12})).unwrap();
        assert_eq!(parsed, AbilityUse::WordDrain { words: 12 });

        let parsed: AbilityUse = serde_json::from_value(json!({"ability": "teleport"})).unwrap();
        assert_eq!(
            parsed,
            AbilityUse::Teleport {
                location: String::new()
            }
        );

        let parsed: AbilityUse =
            serde_json::from_value(json!({"ability": "word_creation"})).unwrap();
        assert_eq!(parsed.ability(), Ability::WordCreation);

        assert!(serde_json::from_value::<AbilityUse>(json!({"ability": "fly"})).is_err());
    }

    #[test]
    fn test_unavailable_json() {
        let silver = Character::new();
        assert_eq!(
            serde_json::to_value(silver.use_ability(AbilityUse::WordCreation)).unwrap(),
            json!({
                "outcome": "unavailable",
                "ability": "word_creation",
                "required_state": "redeemed"
            })
        );
    }
}
