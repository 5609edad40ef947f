//! Core world model for Lost Gallery.
//!
//! Owns the data a running game is made of: the room graph, the items and
//! entities placed in it, the player's inventory and condition, the
//! antagonist's combat state, and the light/dark adjacency maps. Behavior is
//! stored as data (see [`behavior`]) and interpreted by the engine crate;
//! nothing here executes on its own.

/// Antagonist combat state and its phase script.
pub mod antagonist;
/// Behavior-as-data types: routines, use scripts, reactions, effects.
pub mod behavior;
/// The fixed twelve-symbol direction set.
pub mod direction;
/// Living inhabitants of the gallery.
pub mod entity;
/// Error types for the core crate.
pub mod error;
/// Room adjacency graphs used by pathfinding.
pub mod graph;
/// Items and their interaction tables.
pub mod item;
/// Player condition and appearance.
pub mod player;
/// Rooms and their membership lists.
pub mod room;
/// The world aggregate and its mutation primitives.
pub mod world;

pub use antagonist::{AntagonistState, CombatPhase, CombatScript};
pub use behavior::{Effect, EntityReaction, EntityUpdate, Reaction, Routine, UseScript};
pub use direction::Direction;
pub use entity::{Entity, EntityId};
pub use error::{CoreError, CoreResult};
pub use graph::RoomGraph;
pub use item::{Item, ItemId};
pub use player::{Appearance, InjuryStage, PlayerState};
pub use room::{Room, RoomId};
pub use world::{Mode, World, WorldMeta};
