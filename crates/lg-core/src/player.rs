use serde::{Deserialize, Serialize};

/// Hit points the player starts with.
pub const STARTING_HP: u8 = 5;

/// The three lines shown when the player looks at themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    /// Who the player is.
    pub general: String,
    /// What the player wears.
    pub clothing: String,
    /// What shape the player is in.
    pub condition: String,
}

/// Appearance rewrites applied when the player is wounded down to a given
/// hit-point level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryStage {
    /// The hit-point value this stage describes.
    pub hp: u8,
    /// Replacement clothing line.
    pub clothing: String,
    /// Replacement condition line.
    pub condition: String,
}

/// The player's condition: a clamped hit-point counter plus the appearance
/// slots that degrade with it.
///
/// Each hit decrements hp by one, to a floor of zero, and rewrites the
/// clothing/condition slots from the injury table keyed by the resulting
/// value. Zero is terminal; the engine treats it as the death outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    /// Remaining hit points, `STARTING_HP` down to 0.
    pub hp: u8,
    /// Current appearance lines.
    pub appearance: Appearance,
    /// Injury rewrites keyed by resulting hp.
    pub injuries: Vec<InjuryStage>,
}

impl PlayerState {
    /// Create a player at full health with the given appearance.
    pub fn new(appearance: Appearance, injuries: Vec<InjuryStage>) -> Self {
        Self {
            hp: STARTING_HP,
            appearance,
            injuries,
        }
    }

    /// Whether the player is out of hit points.
    pub fn is_dead(&self) -> bool {
        self.hp == 0
    }

    /// Take one hit: decrement hp (never below zero) and rewrite the
    /// appearance slots for the resulting level. Returns the new hp.
    pub fn take_hit(&mut self) -> u8 {
        self.hp = self.hp.saturating_sub(1);
        if let Some(stage) = self.injuries.iter().find(|s| s.hp == self.hp) {
            self.appearance.clothing = stage.clothing.clone();
            self.appearance.condition = stage.condition.clone();
        }
        self.hp
    }
}
