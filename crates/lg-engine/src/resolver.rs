//! Noun-phrase resolution.
//!
//! Maps a free-text noun phrase to a concrete item or entity. Matching is
//! case-insensitive exact string match against canonical names and aliases;
//! no fuzzy or partial matching. The search order is fixed and significant:
//! items in the current room, then items in the inventory, then entities in
//! the current room, so a phrase naming both an item and an entity always
//! lands on the item. Within a category the first match wins.

use lg_core::{EntityId, ItemId, World};

/// What a noun phrase resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// An item lying in the current room.
    RoomItem(ItemId),
    /// An item in the inventory.
    CarriedItem(ItemId),
    /// An entity in the current room.
    Entity(EntityId),
}

/// Resolve a phrase against room items, then inventory, then room entities.
pub fn resolve(world: &World, phrase: &str) -> Option<Resolution> {
    if let Some(id) = find_room_item(world, phrase) {
        return Some(Resolution::RoomItem(id));
    }
    if let Some(id) = find_carried_item(world, phrase) {
        return Some(Resolution::CarriedItem(id));
    }
    find_room_entity(world, phrase).map(Resolution::Entity)
}

/// Find an item in the current room by name or alias.
pub fn find_room_item(world: &World, phrase: &str) -> Option<ItemId> {
    let here = world.here().ok()?;
    here.items
        .iter()
        .copied()
        .find(|id| world.item(*id).map(|i| i.answers_to(phrase)).unwrap_or(false))
}

/// Find an item in the inventory by name or alias.
pub fn find_carried_item(world: &World, phrase: &str) -> Option<ItemId> {
    world
        .inventory()
        .iter()
        .copied()
        .find(|id| world.item(*id).map(|i| i.answers_to(phrase)).unwrap_or(false))
}

/// Find an entity in the current room by name or alias.
pub fn find_room_entity(world: &World, phrase: &str) -> Option<EntityId> {
    let here = world.here().ok()?;
    here.entities
        .iter()
        .copied()
        .find(|id| {
            world
                .entity(*id)
                .map(|e| e.answers_to(phrase))
                .unwrap_or(false)
        })
}
