use crate::direction::Direction;
use crate::entity::EntityId;
use crate::item::ItemId;
use crate::room::RoomId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors from world construction, validation, and mutation.
///
/// `NoExit` and `NotPortable` are ordinary play outcomes the engine turns
/// into player-facing messages. Everything else means the world data or a
/// caller broke an invariant; a well-formed authored world never produces
/// them at play time.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested room id does not exist.
    #[error("unknown room: {0}")]
    UnknownRoom(RoomId),

    /// The requested item id does not exist.
    #[error("unknown item: {0}")]
    UnknownItem(ItemId),

    /// The requested entity id does not exist.
    #[error("unknown entity: {0}")]
    UnknownEntity(EntityId),

    /// A room with this id was already registered.
    #[error("duplicate room: {0}")]
    DuplicateRoom(RoomId),

    /// An item with this id was already registered.
    #[error("duplicate item: {0}")]
    DuplicateItem(ItemId),

    /// An entity with this id was already registered.
    #[error("duplicate entity: {0}")]
    DuplicateEntity(EntityId),

    /// The current room has no exit in that direction.
    #[error("no exit {direction} from {from}")]
    NoExit {
        /// The room the player stands in.
        from: RoomId,
        /// The direction that has no exit.
        direction: Direction,
    },

    /// GET on an item whose portable flag is false.
    #[error("item cannot be carried: {item}")]
    NotPortable {
        /// The item's canonical name.
        item: String,
    },

    /// An item expected in a room's list was not there.
    #[error("{item} is not in {room}")]
    ItemNotInRoom {
        /// The missing item.
        item: ItemId,
        /// The room searched.
        room: RoomId,
    },

    /// An entity expected in a room's list was not there.
    #[error("{entity} is not listed in {room}")]
    EntityNotInRoom {
        /// The missing entity.
        entity: EntityId,
        /// The room searched.
        room: RoomId,
    },

    /// An exit points at a room id that was never registered.
    #[error("{room} exit {direction} leads to unregistered {target}")]
    ExitToUnknownRoom {
        /// The room owning the exit.
        room: RoomId,
        /// The exit direction.
        direction: Direction,
        /// The dangling destination.
        target: RoomId,
    },

    /// A room's membership list names an unregistered item.
    #[error("{room} lists unregistered {item}")]
    RoomListsUnknownItem {
        /// The room with the bad list.
        room: RoomId,
        /// The dangling item id.
        item: ItemId,
    },

    /// A room's membership list names an unregistered entity.
    #[error("{room} lists unregistered {entity}")]
    RoomListsUnknownEntity {
        /// The room with the bad list.
        room: RoomId,
        /// The dangling entity id.
        entity: EntityId,
    },

    /// An item appears in more than one place at once.
    #[error("{item} is owned by more than one place")]
    ItemOwnedTwice {
        /// The doubly-owned item.
        item: ItemId,
    },

    /// A reaction table key names no registered item.
    #[error("reaction on \"{owner}\" keyed by unknown item \"{key}\"")]
    ReactionKeyUnknown {
        /// Name of the item or entity owning the table.
        owner: String,
        /// The unmatched key.
        key: String,
    },

    /// An entity's location field disagrees with room membership.
    #[error("{entity} records {recorded} but room membership disagrees")]
    LocationDesync {
        /// The inconsistent entity.
        entity: EntityId,
        /// The room its location field names.
        recorded: RoomId,
    },
}
