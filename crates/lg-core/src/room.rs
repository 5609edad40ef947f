use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::entity::EntityId;
use crate::item::ItemId;

/// Stable integer identifier for a room.
///
/// Ids double as a coarse progress measure: routines that wait for the
/// player to get "deep enough" into the gallery compare against a threshold
/// id, so `RoomId` is ordered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RoomId(u32);

impl RoomId {
    /// Create a room id from its raw value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    pub const fn raw(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "room {}", self.0)
    }
}

/// A single chamber of the gallery.
///
/// Rooms are constructed once at world load; afterwards only their item and
/// entity membership lists change. Both lists and the exit table are kept in
/// authored order, which is also display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// This room's id.
    pub id: RoomId,
    /// Narrative description printed on entry and on LOOK.
    pub description: String,
    /// Items currently present, in display order.
    pub items: Vec<ItemId>,
    /// Entities currently present, in display order.
    pub entities: Vec<EntityId>,
    /// Exits, as (direction, destination) pairs in display order.
    pub exits: Vec<(Direction, RoomId)>,
}

impl Room {
    /// Create a room with empty membership lists and no exits.
    pub fn new(id: RoomId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            items: Vec::new(),
            entities: Vec::new(),
            exits: Vec::new(),
        }
    }

    /// Add an item to the room, builder-style.
    pub fn with_item(mut self, item: ItemId) -> Self {
        self.items.push(item);
        self
    }

    /// Add an entity to the room, builder-style.
    pub fn with_entity(mut self, entity: EntityId) -> Self {
        self.entities.push(entity);
        self
    }

    /// Add an exit to the room, builder-style.
    pub fn with_exit(mut self, direction: Direction, to: RoomId) -> Self {
        self.exits.push((direction, to));
        self
    }

    /// Look up the destination of an exit, if the room has one that way.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|(_, to)| *to)
    }
}
