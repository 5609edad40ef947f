use serde::{Deserialize, Serialize};

use crate::antagonist::AntagonistState;
use crate::behavior::EntityUpdate;
use crate::direction::Direction;
use crate::entity::{Entity, EntityId};
use crate::error::{CoreError, CoreResult};
use crate::graph::RoomGraph;
use crate::item::{Item, ItemId};
use crate::player::PlayerState;
use crate::room::{Room, RoomId};

/// Metadata about the world itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldMeta {
    /// Title of the game.
    pub name: String,
    /// Short blurb.
    pub description: String,
    /// Credited authors.
    pub authors: Vec<String>,
}

impl WorldMeta {
    /// Create metadata with an empty blurb and author list.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            authors: Vec::new(),
        }
    }
}

/// Which face of the gallery the player is seeing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// The lit gallery.
    Light,
    /// The dark gallery. The switch is one-way.
    Dark,
}

/// The world aggregate: every room, item, and entity, the player's
/// location, inventory and condition, the antagonist state, and the two
/// adjacency maps.
///
/// All registries are ordered `Vec`s. Entity registration order is the
/// turn scheduler's iteration order; room membership lists are display
/// order. Construction happens once at world load, then [`World::validate`]
/// checks the cross-references before play begins.
#[derive(Debug, Clone)]
pub struct World {
    /// Metadata about the game.
    pub meta: WorldMeta,
    rooms: Vec<Room>,
    items: Vec<Item>,
    entities: Vec<Entity>,
    current_room: RoomId,
    inventory: Vec<ItemId>,
    /// The player's condition.
    pub player: PlayerState,
    /// The antagonist's combat state, if the world has one.
    pub antagonist: Option<AntagonistState>,
    mode: Mode,
    light_map: RoomGraph,
    dark_map: RoomGraph,
}

impl World {
    /// Create an empty world with the given metadata and player. The
    /// starting room defaults to id 0 until [`World::set_start`] is called.
    pub fn new(meta: WorldMeta, player: PlayerState) -> Self {
        Self {
            meta,
            rooms: Vec::new(),
            items: Vec::new(),
            entities: Vec::new(),
            current_room: RoomId::new(0),
            inventory: Vec::new(),
            player,
            antagonist: None,
            mode: Mode::Light,
            light_map: RoomGraph::new(),
            dark_map: RoomGraph::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Register a room.
    pub fn add_room(&mut self, room: Room) -> CoreResult<RoomId> {
        if self.rooms.iter().any(|r| r.id == room.id) {
            return Err(CoreError::DuplicateRoom(room.id));
        }
        let id = room.id;
        self.rooms.push(room);
        Ok(id)
    }

    /// Register an item.
    pub fn add_item(&mut self, item: Item) -> CoreResult<ItemId> {
        if self.items.iter().any(|i| i.id == item.id) {
            return Err(CoreError::DuplicateItem(item.id));
        }
        let id = item.id;
        self.items.push(item);
        Ok(id)
    }

    /// Register an entity. Registration order is scheduler order.
    pub fn add_entity(&mut self, entity: Entity) -> CoreResult<EntityId> {
        if self.entities.iter().any(|e| e.id == entity.id) {
            return Err(CoreError::DuplicateEntity(entity.id));
        }
        let id = entity.id;
        self.entities.push(entity);
        Ok(id)
    }

    /// Set the room the player starts in.
    pub fn set_start(&mut self, room: RoomId) {
        self.current_room = room;
    }

    /// Install the two adjacency maps.
    pub fn set_maps(&mut self, light: RoomGraph, dark: RoomGraph) {
        self.light_map = light;
        self.dark_map = dark;
    }

    /// Install the antagonist state.
    pub fn set_antagonist(&mut self, state: AntagonistState) {
        self.antagonist = Some(state);
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// The id of the room the player stands in.
    pub fn current_room(&self) -> RoomId {
        self.current_room
    }

    /// The room the player stands in.
    pub fn here(&self) -> CoreResult<&Room> {
        self.room(self.current_room)
    }

    /// Look up a room by id.
    pub fn room(&self, id: RoomId) -> CoreResult<&Room> {
        self.rooms
            .iter()
            .find(|r| r.id == id)
            .ok_or(CoreError::UnknownRoom(id))
    }

    fn room_mut(&mut self, id: RoomId) -> CoreResult<&mut Room> {
        self.rooms
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CoreError::UnknownRoom(id))
    }

    /// Look up an item by id.
    pub fn item(&self, id: ItemId) -> CoreResult<&Item> {
        self.items
            .iter()
            .find(|i| i.id == id)
            .ok_or(CoreError::UnknownItem(id))
    }

    /// Look up an item by id, mutably.
    pub fn item_mut(&mut self, id: ItemId) -> CoreResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(CoreError::UnknownItem(id))
    }

    /// Look up an entity by id.
    pub fn entity(&self, id: EntityId) -> CoreResult<&Entity> {
        self.entities
            .iter()
            .find(|e| e.id == id)
            .ok_or(CoreError::UnknownEntity(id))
    }

    /// Look up an entity by id, mutably.
    pub fn entity_mut(&mut self, id: EntityId) -> CoreResult<&mut Entity> {
        self.entities
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(CoreError::UnknownEntity(id))
    }

    /// Every entity id in registration order.
    pub fn entity_ids(&self) -> Vec<EntityId> {
        self.entities.iter().map(|e| e.id).collect()
    }

    /// Every room, in registration order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Every item, in registration order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Every entity, in registration order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// The player's inventory, in acquisition order.
    pub fn inventory(&self) -> &[ItemId] {
        &self.inventory
    }

    /// The current world mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the gallery has gone dark.
    pub fn in_dark_mode(&self) -> bool {
        self.mode == Mode::Dark
    }

    /// The lit gallery's adjacency map.
    pub fn light_map(&self) -> &RoomGraph {
        &self.light_map
    }

    /// The dark gallery's adjacency map; the one pursuit runs on.
    pub fn dark_map(&self) -> &RoomGraph {
        &self.dark_map
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Move the player through an exit of the current room. Fails with
    /// [`CoreError::NoExit`] if the room has no exit that way.
    pub fn move_player(&mut self, direction: Direction) -> CoreResult<RoomId> {
        let here = self.here()?;
        let dest = here.exit(direction).ok_or(CoreError::NoExit {
            from: self.current_room,
            direction,
        })?;
        self.room(dest)?;
        self.current_room = dest;
        Ok(dest)
    }

    /// Transfer an item from the current room to the inventory. Fails with
    /// [`CoreError::NotPortable`] when the item cannot be carried; the
    /// transfer happens exactly once or not at all.
    pub fn take_item(&mut self, id: ItemId) -> CoreResult<()> {
        let item = self.item(id)?;
        if !item.portable {
            return Err(CoreError::NotPortable {
                item: item.name.clone(),
            });
        }
        let here = self.current_room;
        let room = self.room_mut(here)?;
        let pos = room
            .items
            .iter()
            .position(|i| *i == id)
            .ok_or(CoreError::ItemNotInRoom {
                item: id,
                room: here,
            })?;
        room.items.remove(pos);
        self.inventory.push(id);
        Ok(())
    }

    /// Move an entity to another room: one atomic splice that removes it
    /// from its old room's list, appends it to the new one, and updates the
    /// entity's own location field, so the two can never drift apart.
    pub fn relocate_entity(&mut self, id: EntityId, to: RoomId) -> CoreResult<()> {
        self.room(to)?;
        let from = self.entity(id)?.location;
        let old = self.room_mut(from)?;
        let pos = old
            .entities
            .iter()
            .position(|e| *e == id)
            .ok_or(CoreError::EntityNotInRoom { entity: id, room: from })?;
        old.entities.remove(pos);
        self.room_mut(to)?.entities.push(id);
        self.entity_mut(id)?.location = to;
        Ok(())
    }

    /// Append a previously unplaced item to a room's list.
    pub fn reveal_item(&mut self, room: RoomId, item: ItemId) -> CoreResult<()> {
        self.item(item)?;
        self.room_mut(room)?.items.push(item);
        Ok(())
    }

    /// Apply a self-rewrite to an entity. The routine is always replaced:
    /// by the update's, or by idle when it carries none.
    pub fn apply_entity_update(&mut self, id: EntityId, update: EntityUpdate) -> CoreResult<()> {
        if let Some(to) = update.move_to {
            self.relocate_entity(id, to)?;
        }
        let entity = self.entity_mut(id)?;
        if let Some(text) = update.place_text {
            entity.place_text = text;
        }
        if let Some(text) = update.dialogue {
            entity.dialogue = text;
        }
        if let Some(text) = update.description {
            entity.description = text;
        }
        entity.routine = match update.routine {
            Some(routine) => *routine,
            None => crate::behavior::Routine::Idle,
        };
        Ok(())
    }

    /// Flip the world into dark mode. One-way; returns whether this call
    /// did the flipping.
    pub fn enter_dark(&mut self) -> bool {
        if self.mode == Mode::Light {
            self.mode = Mode::Dark;
            true
        } else {
            false
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Check every cross-reference in the authored world: exits land on
    /// registered rooms, membership lists name registered items/entities,
    /// no item is owned twice, every entity stands in exactly the room its
    /// location field claims, and every reaction key names a known item.
    pub fn validate(&self) -> CoreResult<()> {
        self.room(self.current_room)?;

        for room in &self.rooms {
            for (direction, target) in &room.exits {
                if !self.rooms.iter().any(|r| r.id == *target) {
                    return Err(CoreError::ExitToUnknownRoom {
                        room: room.id,
                        direction: *direction,
                        target: *target,
                    });
                }
            }
            for item in &room.items {
                if !self.items.iter().any(|i| i.id == *item) {
                    return Err(CoreError::RoomListsUnknownItem {
                        room: room.id,
                        item: *item,
                    });
                }
            }
            for entity in &room.entities {
                if !self.entities.iter().any(|e| e.id == *entity) {
                    return Err(CoreError::RoomListsUnknownEntity {
                        room: room.id,
                        entity: *entity,
                    });
                }
            }
        }

        for item in &self.items {
            let placements = self
                .rooms
                .iter()
                .flat_map(|r| r.items.iter())
                .chain(self.inventory.iter())
                .filter(|i| **i == item.id)
                .count();
            if placements > 1 {
                return Err(CoreError::ItemOwnedTwice { item: item.id });
            }
            for (key, _) in &item.reactions {
                self.require_item_name(&item.name, key)?;
            }
        }

        for entity in &self.entities {
            let listed: Vec<RoomId> = self
                .rooms
                .iter()
                .filter(|r| r.entities.contains(&entity.id))
                .map(|r| r.id)
                .collect();
            if listed != [entity.location] {
                return Err(CoreError::LocationDesync {
                    entity: entity.id,
                    recorded: entity.location,
                });
            }
            for (key, _) in &entity.reactions {
                self.require_item_name(&entity.name, key)?;
            }
        }

        if let Some(antagonist) = &self.antagonist {
            self.entity(antagonist.entity)?;
        }

        Ok(())
    }

    fn require_item_name(&self, owner: &str, key: &str) -> CoreResult<()> {
        if self.items.iter().any(|i| i.name.eq_ignore_ascii_case(key)) {
            Ok(())
        } else {
            Err(CoreError::ReactionKeyUnknown {
                owner: owner.to_string(),
                key: key.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::{Reaction, Routine};
    use crate::player::Appearance;

    fn test_player() -> PlayerState {
        PlayerState::new(
            Appearance {
                general: "Someone.".into(),
                clothing: "Something.".into(),
                condition: "Fine.".into(),
            },
            Vec::new(),
        )
    }

    fn two_room_world() -> World {
        let mut world = World::new(WorldMeta::new("Test"), test_player());
        world
            .add_item(
                Item::scenery(ItemId::new(0), "PEBBLE", "A pebble.", "A PEBBLE sits here.")
                    .portable(),
            )
            .unwrap();
        world
            .add_item(Item::scenery(
                ItemId::new(1),
                "STATUE",
                "A statue.",
                "A STATUE looms.",
            ))
            .unwrap();
        world
            .add_entity(
                Entity::new(EntityId::new(0), "CURATOR", RoomId::new(1))
                    .with_routine(Routine::Idle),
            )
            .unwrap();
        world
            .add_room(
                Room::new(RoomId::new(1), "The west hall.")
                    .with_item(ItemId::new(0))
                    .with_item(ItemId::new(1))
                    .with_entity(EntityId::new(0))
                    .with_exit(Direction::East, RoomId::new(2)),
            )
            .unwrap();
        world
            .add_room(Room::new(RoomId::new(2), "The east hall.").with_exit(
                Direction::West,
                RoomId::new(1),
            ))
            .unwrap();
        world.set_start(RoomId::new(1));
        world
    }

    #[test]
    fn validate_accepts_consistent_world() {
        two_room_world().validate().unwrap();
    }

    #[test]
    fn move_through_exit() {
        let mut world = two_room_world();
        let dest = world.move_player(Direction::East).unwrap();
        assert_eq!(dest, RoomId::new(2));
        assert_eq!(world.current_room(), RoomId::new(2));
    }

    #[test]
    fn move_without_exit_fails() {
        let mut world = two_room_world();
        let err = world.move_player(Direction::Up).unwrap_err();
        assert!(matches!(err, CoreError::NoExit { .. }));
        assert_eq!(world.current_room(), RoomId::new(1));
    }

    #[test]
    fn take_transfers_exactly_once() {
        let mut world = two_room_world();
        world.take_item(ItemId::new(0)).unwrap();
        assert_eq!(world.inventory(), &[ItemId::new(0)]);
        assert!(!world.here().unwrap().items.contains(&ItemId::new(0)));

        // A second take finds the item gone from the room.
        let err = world.take_item(ItemId::new(0)).unwrap_err();
        assert!(matches!(err, CoreError::ItemNotInRoom { .. }));
        assert_eq!(world.inventory().len(), 1);
    }

    #[test]
    fn take_refuses_fixed_items() {
        let mut world = two_room_world();
        let err = world.take_item(ItemId::new(1)).unwrap_err();
        assert!(matches!(err, CoreError::NotPortable { .. }));
        assert!(world.inventory().is_empty());
    }

    #[test]
    fn relocation_keeps_membership_and_location_in_step() {
        let mut world = two_room_world();
        world
            .relocate_entity(EntityId::new(0), RoomId::new(2))
            .unwrap();
        assert_eq!(world.entity(EntityId::new(0)).unwrap().location, RoomId::new(2));
        assert!(world.room(RoomId::new(2)).unwrap().entities.contains(&EntityId::new(0)));
        assert!(!world.room(RoomId::new(1)).unwrap().entities.contains(&EntityId::new(0)));
        world.validate().unwrap();
    }

    #[test]
    fn validate_catches_dangling_exit() {
        let mut world = two_room_world();
        world
            .add_room(Room::new(RoomId::new(3), "Nowhere.").with_exit(
                Direction::In,
                RoomId::new(99),
            ))
            .unwrap();
        let err = world.validate().unwrap_err();
        assert!(matches!(err, CoreError::ExitToUnknownRoom { .. }));
    }

    #[test]
    fn validate_catches_unknown_reaction_key() {
        let mut world = two_room_world();
        world
            .add_item(
                Item::scenery(ItemId::new(2), "DOOR", "A door.", "A DOOR.")
                    .with_reaction("CROWBAR", Reaction::print("It opens.")),
            )
            .unwrap();
        let err = world.validate().unwrap_err();
        assert!(matches!(err, CoreError::ReactionKeyUnknown { .. }));
    }

    #[test]
    fn validate_catches_location_desync() {
        let mut world = two_room_world();
        world.entity_mut(EntityId::new(0)).unwrap().location = RoomId::new(2);
        let err = world.validate().unwrap_err();
        assert!(matches!(err, CoreError::LocationDesync { .. }));
    }

    #[test]
    fn dark_mode_is_one_way() {
        let mut world = two_room_world();
        assert!(!world.in_dark_mode());
        assert!(world.enter_dark());
        assert!(!world.enter_dark());
        assert!(world.in_dark_mode());
    }

    #[test]
    fn entity_update_replaces_routine_and_texts() {
        let mut world = two_room_world();
        world
            .apply_entity_update(
                EntityId::new(0),
                EntityUpdate::new()
                    .move_to(RoomId::new(2))
                    .dialogue("New words.")
                    .routine(Routine::Ambient {
                        line: "They wait.".into(),
                    }),
            )
            .unwrap();
        let entity = world.entity(EntityId::new(0)).unwrap();
        assert_eq!(entity.location, RoomId::new(2));
        assert_eq!(entity.dialogue, "New words.");
        assert!(matches!(entity.routine, Routine::Ambient { .. }));
    }
}
