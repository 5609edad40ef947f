//! Engine mechanics for Lost Gallery.
//!
//! Turns player input into world mutations, one turn at a time: tokenize
//! and dispatch the command, resolve its noun phrases against what is in
//! reach, mutate the [`lg_core::World`], then give every entity one chance
//! to act. Pursuit runs Dijkstra over the dark-mode map; combat and the
//! light/dark switch are small one-way state machines driven by data the
//! content crate authors. Everything a command produced comes back in a
//! [`TurnReport`]; sound leaves through an [`AudioSink`].

/// Hit-point state machines for the player and the antagonist.
pub mod combat;
/// Command grammar: tokenizer, verbs, and the help text.
pub mod command;
/// The two-tier error taxonomy: player mistakes and engine faults.
pub mod error;
/// Output channels, endings, and audio-cue dispatch.
pub mod output;
/// Shortest-path next-hop search over room graphs.
pub mod pathfind;
/// The list-backed priority queue behind pathfinding.
pub mod queue;
/// Noun-phrase resolution against room, inventory, and entities.
pub mod resolver;
/// The per-turn entity scheduler and routine interpreter.
pub mod scheduler;
/// The game session driving it all.
pub mod session;

pub use command::{Command, HELP_TEXT, LookTarget, parse_command};
pub use error::{CommandError, EngineFault, EngineResult};
pub use output::{
    AudioChannel, AudioSink, Cue, Ending, NullAudio, RecordingAudio, TurnReport, dispatch_cue,
};
pub use pathfind::{PathError, PathStep, shortest_next_hop};
pub use queue::{PriorityQueue, QueueError};
pub use resolver::{Resolution, find_carried_item, find_room_entity, find_room_item, resolve};
pub use session::{GameConfig, GameSession};
