//! Silver's character model.
//!
//! Contains the corrupted/redeemed state machine, the appearance derived
//! from it, the fixed power table and the per-state dialogue lines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_NAME: &str = "Silver";
pub const DEFAULT_TITLE: &str = "Princess of Wordvile";

// ============================================================================
// State
// ============================================================================

/// Returned when a label is neither `corrupted` nor `redeemed`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown character state: {0:?}")]
pub struct UnknownState(pub String);

/// The two mutually exclusive states of the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterState {
    #[default]
    Corrupted,
    Redeemed,
}

impl CharacterState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterState::Corrupted => "corrupted",
            CharacterState::Redeemed => "redeemed",
        }
    }

    pub fn all() -> [CharacterState; 2] {
        [CharacterState::Corrupted, CharacterState::Redeemed]
    }

    /// The appearance the character takes on in this state.
    pub fn appearance(&self) -> Appearance {
        match self {
            CharacterState::Corrupted => Appearance {
                eyes: "purple",
                aura: "dangerous purple mist",
                form: "ethereal, floating",
            },
            CharacterState::Redeemed => Appearance {
                eyes: "silver",
                aura: "shimmering silver light",
                form: "regal, standing",
            },
        }
    }

    /// The fixed lines spoken in this state, in order.
    pub fn dialogue(&self) -> &'static [&'static str] {
        match self {
            CharacterState::Corrupted => &[
                "VISITORS IN MY DOMAIN. CURIOUS. DIFFERENT. FAMILIAR?",
                "SHHHHH...",
                "YOUR WORDS ARE MINE TO TAKE...",
            ],
            CharacterState::Redeemed => &[
                "I remember... the light of creation...",
                "Forgive me... I was lost...",
                "Together, we can restore Wordvile...",
            ],
        }
    }
}

impl fmt::Display for CharacterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Labels are matched exactly; `"Redeemed"` is not a valid state.
impl FromStr for CharacterState {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "corrupted" => Ok(CharacterState::Corrupted),
            "redeemed" => Ok(CharacterState::Redeemed),
            other => Err(UnknownState(other.to_string())),
        }
    }
}

// ============================================================================
// Derived Appearance
// ============================================================================

/// Eyes, aura and form. Always derived from the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Appearance {
    pub eyes: &'static str,
    pub aura: &'static str,
    pub form: &'static str,
}

// ============================================================================
// Powers
// ============================================================================

/// The named powers in the character's power table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerKind {
    WordCreation,
    WordDrain,
    ColorControl,
    Teleportation,
}

impl PowerKind {
    pub fn name(&self) -> &'static str {
        match self {
            PowerKind::WordCreation => "word_creation",
            PowerKind::WordDrain => "word_drain",
            PowerKind::ColorControl => "color_control",
            PowerKind::Teleportation => "teleportation",
        }
    }

    pub fn all() -> [PowerKind; 4] {
        [
            PowerKind::WordCreation,
            PowerKind::WordDrain,
            PowerKind::ColorControl,
            PowerKind::Teleportation,
        ]
    }
}

impl fmt::Display for PowerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Power magnitudes, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PowerLevels {
    pub word_creation: u32,
    pub word_drain: u32,
    pub color_control: u32,
    pub teleportation: u32,
}

impl PowerLevels {
    pub fn level(&self, kind: PowerKind) -> u32 {
        match kind {
            PowerKind::WordCreation => self.word_creation,
            PowerKind::WordDrain => self.word_drain,
            PowerKind::ColorControl => self.color_control,
            PowerKind::Teleportation => self.teleportation,
        }
    }
}

impl Default for PowerLevels {
    fn default() -> Self {
        Self {
            word_creation: 100,
            word_drain: 100,
            color_control: 90,
            teleportation: 85,
        }
    }
}

// ============================================================================
// Dialogue
// ============================================================================

/// Dialogue lines for both states, keyed by state label when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DialogueTable {
    pub corrupted: &'static [&'static str],
    pub redeemed: &'static [&'static str],
}

impl DialogueTable {
    pub fn lines(&self, state: CharacterState) -> &'static [&'static str] {
        match state {
            CharacterState::Corrupted => self.corrupted,
            CharacterState::Redeemed => self.redeemed,
        }
    }
}

impl Default for DialogueTable {
    fn default() -> Self {
        Self {
            corrupted: CharacterState::Corrupted.dialogue(),
            redeemed: CharacterState::Redeemed.dialogue(),
        }
    }
}

// ============================================================================
// Character
// ============================================================================

/// Silver, the Princess of Wordvile.
///
/// `state` is the only mutable part of the model. Every transition goes
/// through [`Character::set_state`], which recomputes `appearance` in the
/// same call, so the two can never disagree.
#[derive(Debug, Clone)]
pub struct Character {
    name: String,
    title: String,
    state: CharacterState,
    power: PowerLevels,
    appearance: Appearance,
    dialogue: DialogueTable,
}

impl Character {
    /// Create Silver in her initial, corrupted state.
    pub fn new() -> Self {
        Self::with_identity(DEFAULT_NAME, DEFAULT_TITLE)
    }

    /// Create the same model under a different name and title.
    pub fn with_identity(name: impl Into<String>, title: impl Into<String>) -> Self {
        let state = CharacterState::default();
        Self {
            name: name.into(),
            title: title.into(),
            state,
            power: PowerLevels::default(),
            appearance: state.appearance(),
            dialogue: DialogueTable::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> CharacterState {
        self.state
    }

    pub fn power(&self) -> &PowerLevels {
        &self.power
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn dialogue(&self) -> &DialogueTable {
        &self.dialogue
    }

    /// Lines for the current state.
    pub fn current_dialogue(&self) -> &'static [&'static str] {
        self.dialogue.lines(self.state)
    }

    pub fn is_corrupted(&self) -> bool {
        self.state == CharacterState::Corrupted
    }

    pub fn is_redeemed(&self) -> bool {
        self.state == CharacterState::Redeemed
    }

    /// Move to `state` and recompute the appearance.
    pub fn set_state(&mut self, state: CharacterState) {
        self.state = state;
        self.appearance = state.appearance();
    }

    /// Apply a state label.
    ///
    /// Unknown labels leave the character untouched. Returns whether the
    /// label was applied.
    pub fn update_state(&mut self, label: &str) -> bool {
        match label.parse::<CharacterState>() {
            Ok(state) => {
                self.set_state(state);
                true
            }
            Err(_) => false,
        }
    }

    pub fn description(&self) -> String {
        format!(
            "{}, the {}, appears as a {} figure with {} eyes, surrounded by {}.",
            self.name,
            self.title,
            self.appearance.form,
            self.appearance.eyes,
            self.appearance.aura
        )
    }

    /// Read-only projection of the whole character.
    pub fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            name: self.name.clone(),
            title: self.title.clone(),
            state: self.state,
            appearance: self.appearance,
            description: self.description(),
            dialogue: self.dialogue,
            power: self.power,
        }
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view of a [`Character`] at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterSnapshot {
    pub name: String,
    pub title: String,
    pub state: CharacterState,
    pub appearance: Appearance,
    pub description: String,
    pub dialogue: DialogueTable,
    pub power: PowerLevels,
}
