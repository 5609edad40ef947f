//! Error types for the engine.
//!
//! Two tiers. [`CommandError`] is the taxonomy of things a player can get
//! wrong: each is recoverable, renders to the error channel, and leaves
//! every bit of world state untouched. [`EngineFault`] is the other kind,
//! a malformed graph or a broken caller contract. Faults abort the session
//! and get logged; a well-formed authored world never raises one.

use thiserror::Error;

use lg_core::{CoreError, Direction, EntityId};

use crate::pathfind::PathError;

/// Alias for `Result<T, EngineFault>`.
pub type EngineResult<T> = Result<T, EngineFault>;

/// A player mistake. The display text is exactly what the error channel
/// shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Movement in a direction the current room has no exit toward.
    #[error("This room doesn't have an exit in the {0} direction.")]
    NoExit(Direction),

    /// A movement command with trailing tokens.
    #[error("Only input the direction in which you want to move.")]
    ExtraMovementInput,

    /// A noun phrase that resolves to nothing addressable.
    #[error("You can't see {0} here.")]
    NotVisible(String),

    /// GET on an item that cannot be carried.
    #[error("You can't carry {0} with you.")]
    NotCollectible(String),

    /// GET on an entity.
    #[error("You get the feeling that they wouldn't appreciate being picked up.")]
    EntityNotCollectible,

    /// USE on something with no standalone use.
    #[error("You don't see any way to use {0}.")]
    NoStandaloneUse(String),

    /// Single-target USE on an entity.
    #[error("Ah.  So you're one of those 'nihilists'.  How quaint.")]
    UseOnEntity,

    /// Two-target USE with no reaction registered between the items.
    #[error("You can't use those things together!")]
    NoItemReaction,

    /// Two-target USE on an entity with no matching reaction.
    #[error("You can't use that item on {0}.")]
    NoEntityReaction(String),

    /// First operand of a two-target USE that is not in the inventory.
    #[error("You aren't carrying {0} to use.")]
    NotCarried(String),

    /// TALK to an item.
    #[error("{0} doesn't seem to be much for conversation.")]
    NotConversational(String),

    /// TALK to yourself.
    #[error("You spend a bit talking to yourself, but quickly start feeling silly.")]
    TalkToSelf,

    /// Anything that is not a command.
    #[error("That's not a valid command.")]
    Invalid,
}

/// An engine-internal fault: a bug in the authored world or in a caller,
/// never a play outcome.
#[derive(Debug, Error)]
pub enum EngineFault {
    /// The world model rejected an operation that should always succeed.
    #[error("world fault: {0}")]
    World(#[from] CoreError),

    /// Pursuit pathfinding failed.
    #[error("pathfinding fault: {0}")]
    Path(#[from] PathError),

    /// A stalker routine ran in a world with no antagonist state.
    #[error("stalker routine with no antagonist state")]
    MissingAntagonist,

    /// A weapon reaction is registered on an entity that is not the
    /// antagonist.
    #[error("weapon reaction on {0}, which is not the antagonist")]
    StrayWeaponReaction(EntityId),
}
