use serde::{Deserialize, Serialize};

use crate::behavior::EntityUpdate;
use crate::entity::EntityId;

/// Hit points the antagonist starts with.
pub const STARTING_HP: u8 = 5;

/// One step of the antagonist's decline, keyed by the hit-point value that
/// remains after the strike that causes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatPhase {
    /// The hit-point value this phase describes.
    pub hp: u8,
    /// Narration for the strike that brought the antagonist here.
    pub strike_text: String,
    /// Replacement long description.
    pub description: String,
    /// Further self-rewrites (place text, dialogue, routine). Present on
    /// the phase that immobilizes the antagonist and on the terminal one.
    pub update: Option<EntityUpdate>,
    /// Replacement for the player's general appearance, on the terminal
    /// phase only.
    pub player_look: Option<String>,
}

/// Everything the combat state machine narrates with, authored as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatScript {
    /// Decline phases for hp 4 down to 0.
    pub phases: Vec<CombatPhase>,
    /// Attack narration, keyed by the player's hp after the blow lands.
    pub attack_lines: Vec<(u8, String)>,
    /// "Closing in" lines, one chosen uniformly when the antagonist steps
    /// into the player's room.
    pub pursuit_lines: Vec<String>,
    /// Shown when the weapon is used after the antagonist is already gone.
    pub exhausted: String,
}

/// Combat progression of the game's one hostile entity.
///
/// Hit points only move down, one per weapon strike, to a floor of zero.
/// Reaching zero marks the antagonist destroyed and commits the session to
/// the dark ending branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AntagonistState {
    /// The entity this state drives.
    pub entity: EntityId,
    /// Remaining hit points, `STARTING_HP` down to 0.
    pub hp: u8,
    /// Set once the antagonist is destroyed; selects the ending branch.
    pub dark_ending: bool,
    /// Authored narration tables.
    pub script: CombatScript,
}

impl AntagonistState {
    /// Create a fresh antagonist state for the given entity.
    pub fn new(entity: EntityId, script: CombatScript) -> Self {
        Self {
            entity,
            hp: STARTING_HP,
            dark_ending: false,
            script,
        }
    }

    /// Whether the antagonist has been destroyed.
    pub fn is_destroyed(&self) -> bool {
        self.hp == 0
    }

    /// Apply one weapon strike. Returns the phase entered, or `None` if
    /// the antagonist was already destroyed (hp never goes negative).
    pub fn advance(&mut self) -> Option<CombatPhase> {
        if self.hp == 0 {
            return None;
        }
        self.hp -= 1;
        if self.hp == 0 {
            self.dark_ending = true;
        }
        self.script.phases.iter().find(|p| p.hp == self.hp).cloned()
    }

    /// The attack line for the player's hp after a blow.
    pub fn attack_line(&self, player_hp: u8) -> Option<&str> {
        self.script
            .attack_lines
            .iter()
            .find(|(hp, _)| *hp == player_hp)
            .map(|(_, line)| line.as_str())
    }
}
