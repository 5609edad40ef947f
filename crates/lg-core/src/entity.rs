use serde::{Deserialize, Serialize};

use crate::behavior::{EntityReaction, Routine};
use crate::room::RoomId;

/// Stable integer identifier for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(u32);

impl EntityId {
    /// Create an entity id from its raw value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    pub const fn raw(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entity {}", self.0)
    }
}

/// A living (or at least moving) inhabitant of the gallery.
///
/// Entities are created once at world load and never destroyed; they change
/// by relocating between rooms and by having their texts and routine
/// rewritten at runtime, which is how character progression is modeled.
/// `location` is the single source of truth for where an entity stands; the
/// owning room's membership list must agree with it, and
/// [`crate::World::relocate_entity`] keeps both in step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// This entity's id.
    pub id: EntityId,
    /// Canonical name, as displayed and typed. Invisible bookkeeping
    /// entities use an empty name and can never be addressed.
    pub name: String,
    /// Alternate names that resolve to this entity.
    pub aliases: Vec<String>,
    /// Long description shown by LOOK.
    pub description: String,
    /// Short line woven into room descriptions; empty lines are omitted.
    pub place_text: String,
    /// Reactions to items, keyed by the item's canonical name.
    pub reactions: Vec<(String, EntityReaction)>,
    /// What the entity says to TALK.
    pub dialogue: String,
    /// Per-turn behavior.
    pub routine: Routine,
    /// The room this entity currently stands in.
    pub location: RoomId,
}

impl Entity {
    /// Create an entity with no aliases, no reactions, and an idle routine.
    pub fn new(id: EntityId, name: impl Into<String>, location: RoomId) -> Self {
        Self {
            id,
            name: name.into(),
            aliases: Vec::new(),
            description: String::new(),
            place_text: String::new(),
            reactions: Vec::new(),
            dialogue: String::new(),
            routine: Routine::Idle,
            location,
        }
    }

    /// Add aliases, builder-style.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Set the long description, builder-style.
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Set the in-room line, builder-style.
    pub fn with_place_text(mut self, text: impl Into<String>) -> Self {
        self.place_text = text.into();
        self
    }

    /// Set the dialogue, builder-style.
    pub fn with_dialogue(mut self, text: impl Into<String>) -> Self {
        self.dialogue = text.into();
        self
    }

    /// Set the routine, builder-style.
    pub fn with_routine(mut self, routine: Routine) -> Self {
        self.routine = routine;
        self
    }

    /// Register a reaction to an item, builder-style.
    pub fn with_reaction(mut self, key: impl Into<String>, reaction: EntityReaction) -> Self {
        self.reactions.push((key.into(), reaction));
        self
    }

    /// Whether a noun phrase names this entity (case-insensitive, exact).
    /// Unnamed entities never match.
    pub fn answers_to(&self, phrase: &str) -> bool {
        if self.name.is_empty() {
            return false;
        }
        self.name.eq_ignore_ascii_case(phrase)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(phrase))
    }

    /// Look up the reaction registered under an item's canonical name.
    pub fn reaction_to(&self, key: &str) -> Option<EntityReaction> {
        self.reactions
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, r)| *r)
    }
}
