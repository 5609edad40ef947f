//! Behavior-as-data.
//!
//! Items and entities carry no executable code. What an item does when used,
//! how something reacts to another item, and what an entity does each turn
//! are all plain data interpreted by the engine. Entities that change over
//! the course of the game do so through [`EntityUpdate`] records that swap
//! out their own fields, including the routine itself.

use serde::{Deserialize, Serialize};

use crate::item::ItemId;
use crate::room::RoomId;

/// A world mutation performed by a use script or reaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Write a line of narration to the main channel.
    Print(String),
    /// Write mode-dependent narration to the main channel.
    PrintByMode {
        /// Text shown while the gallery is lit.
        light: String,
        /// Text shown in dark mode.
        dark: String,
    },
    /// Append a previously hidden item to a room's item list.
    RevealItem {
        /// The room that gains the item.
        room: RoomId,
        /// The item revealed.
        item: ItemId,
    },
    /// Replace an item's standalone use script.
    SetItemUse {
        /// The item whose script changes.
        item: ItemId,
        /// The replacement script.
        script: UseScript,
    },
    /// Replace one entry of an item's reaction table.
    SetReaction {
        /// The item whose table changes.
        item: ItemId,
        /// The canonical identifier of the triggering item.
        key: String,
        /// The replacement reaction.
        reaction: Reaction,
    },
}

/// What happens when an item is used on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseScript {
    /// Effects applied in order.
    pub effects: Vec<Effect>,
}

impl UseScript {
    /// A script that only prints a line.
    pub fn print(text: impl Into<String>) -> Self {
        Self {
            effects: vec![Effect::Print(text.into())],
        }
    }
}

/// How an item responds to another item being used on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// Effects applied in order.
    pub effects: Vec<Effect>,
}

impl Reaction {
    /// A reaction that only prints a line.
    pub fn print(text: impl Into<String>) -> Self {
        Self {
            effects: vec![Effect::Print(text.into())],
        }
    }
}

/// How an entity responds to an item being used on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityReaction {
    /// The item is a weapon; the strike feeds the antagonist combat
    /// state machine. Only effective in dark mode.
    WeaponStrike,
}

/// A bundle of field rewrites an entity applies to itself.
///
/// Firing one is a one-shot transition: whatever routine was running is
/// replaced by `routine`, or by [`Routine::Idle`] when `routine` is `None`,
/// so the same update can never fire twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityUpdate {
    /// New room, relocating the entity.
    pub move_to: Option<RoomId>,
    /// New in-room line.
    pub place_text: Option<String>,
    /// New dialogue.
    pub dialogue: Option<String>,
    /// New long description.
    pub description: Option<String>,
    /// New per-turn routine.
    pub routine: Option<Box<Routine>>,
}

impl EntityUpdate {
    /// An update that changes nothing (useful as a builder seed).
    pub fn new() -> Self {
        Self {
            move_to: None,
            place_text: None,
            dialogue: None,
            description: None,
            routine: None,
        }
    }

    /// Relocate the entity, builder-style.
    pub fn move_to(mut self, room: RoomId) -> Self {
        self.move_to = Some(room);
        self
    }

    /// Replace the in-room line, builder-style.
    pub fn place_text(mut self, text: impl Into<String>) -> Self {
        self.place_text = Some(text.into());
        self
    }

    /// Replace the dialogue, builder-style.
    pub fn dialogue(mut self, text: impl Into<String>) -> Self {
        self.dialogue = Some(text.into());
        self
    }

    /// Replace the long description, builder-style.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Replace the routine, builder-style.
    pub fn routine(mut self, routine: Routine) -> Self {
        self.routine = Some(Box::new(routine));
        self
    }
}

impl Default for EntityUpdate {
    fn default() -> Self {
        Self::new()
    }
}

/// An entity's per-turn behavior, run once per scheduler pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Routine {
    /// Does nothing.
    Idle,
    /// Appends `line` to the activity channel whenever the player shares
    /// the entity's room.
    Ambient {
        /// The activity line.
        line: String,
    },
    /// Like [`Routine::Ambient`], until the player's room id exceeds
    /// `threshold`; then applies `update` to this entity, once.
    AmbientUntil {
        /// The activity line shown before the update fires.
        line: String,
        /// Progress threshold, compared against the player's room id.
        threshold: RoomId,
        /// The one-shot self-rewrite.
        update: EntityUpdate,
    },
    /// Invisible controller that flips the world into dark mode the first
    /// time the player's room id exceeds `threshold`, then goes idle.
    DarknessTrigger {
        /// Progress threshold, compared against the player's room id.
        threshold: RoomId,
        /// Activity line announcing the blackout.
        announcement: String,
        /// Replacement for the player's general appearance text.
        player_look: String,
    },
    /// The antagonist brain. Dormant until dark mode; then attacks the
    /// player on contact and stalks them across rooms otherwise.
    Stalker {
        /// Whether the antagonist has woken to the dark.
        awake: bool,
    },
    /// Terminal gate: ends the session the turn the player stands in this
    /// entity's room.
    EndingGate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_builder() {
        let update = EntityUpdate::new()
            .move_to(RoomId::new(3))
            .dialogue("Hello again.")
            .routine(Routine::Idle);

        assert_eq!(update.move_to, Some(RoomId::new(3)));
        assert_eq!(update.dialogue.as_deref(), Some("Hello again."));
        assert_eq!(update.routine.as_deref(), Some(&Routine::Idle));
        assert!(update.place_text.is_none());
    }

    #[test]
    fn print_helpers() {
        let script = UseScript::print("It gleams.");
        assert_eq!(script.effects, vec![Effect::Print("It gleams.".into())]);

        let reaction = Reaction::print("Nothing happens.");
        assert_eq!(reaction.effects.len(), 1);
    }
}
