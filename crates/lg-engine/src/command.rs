//! Command grammar.
//!
//! One free-text line per turn, case-folded to uppercase and split on
//! whitespace. The first token picks the verb; filler words (`THE`, `AT`,
//! `TO`) are skipped where the verb allows them. Parsing never touches the
//! world; whether a noun phrase means anything is the session's business.

use lg_core::Direction;

use crate::error::CommandError;

/// What a LOOK command points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookTarget {
    /// The current room (bare LOOK, HERE, AROUND, ROOM).
    Room,
    /// The player (SELF, ME, MYSELF).
    Player,
    /// The inventory (ITEMS, INVENTORY, MY ITEMS, MY INVENTORY).
    Inventory,
    /// Something to resolve by name.
    Phrase(String),
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A bare direction token.
    Move(Direction),
    /// LOOK and its variants.
    Look(LookTarget),
    /// GET or TAKE.
    Get(String),
    /// Single-target USE.
    Use(String),
    /// Two-target USE, split at the first ON or WITH.
    UseOn {
        /// The item being used, from the inventory.
        item: String,
        /// What it is used on.
        target: String,
    },
    /// ITEMS or INVENTORY.
    Inventory,
    /// TALK.
    Talk(String),
    /// HELP.
    Help,
}

/// The command list, shown by HELP.
pub const HELP_TEXT: &str = "\
Commands:
DIRECTION: Move in that direction.  (For example: N means go North.)
LOOK X: Look at object X.  (For example: LOOK CHAIR to look at CHAIR.)  (This works on objects in your inventory.)
GET X: Get object X, if you can.  (For example: GET PEN to get a PEN.)
USE X: Use object X, if you can.  (For example: USE PEN to use a PEN.)  (This works on objects in your inventory.)
USE X ON Y: Use object X from your inventory on object Y in the environment.  (For example: USE PEN ON PAPER.)
ITEMS: Look at what you're currently carrying.
TALK X: Try to strike up a conversation with person X.
HELP: See the list of commands again.
Commands are case insensitive.

Type LOOK to see the room again.";

/// Parse one line of player input.
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let folded = input.to_uppercase();
    let tokens: Vec<&str> = folded.split_whitespace().collect();
    let Some(&verb) = tokens.first() else {
        return Err(CommandError::Invalid);
    };

    if let Some(direction) = Direction::parse(verb) {
        if tokens.len() > 1 {
            return Err(CommandError::ExtraMovementInput);
        }
        return Ok(Command::Move(direction));
    }

    let rest = &tokens[1..];
    match verb {
        "LOOK" => Ok(Command::Look(look_target(skip(rest, "AT")))),
        "GET" | "TAKE" => Ok(Command::Get(skip(rest, "THE").join(" "))),
        "USE" => Ok(parse_use(skip(rest, "THE"))),
        "ITEMS" | "INVENTORY" => Ok(Command::Inventory),
        "TALK" => Ok(Command::Talk(skip(skip(rest, "TO"), "THE").join(" "))),
        "HELP" => Ok(Command::Help),
        _ => Err(CommandError::Invalid),
    }
}

/// Drop the first token if it equals `filler`.
fn skip<'a>(tokens: &'a [&'a str], filler: &str) -> &'a [&'a str] {
    match tokens.first() {
        Some(&first) if first == filler => &tokens[1..],
        _ => tokens,
    }
}

fn look_target(tokens: &[&str]) -> LookTarget {
    let phrase = tokens.join(" ");
    match phrase.as_str() {
        "" | "HERE" | "AROUND" | "ROOM" => LookTarget::Room,
        "SELF" | "ME" | "MYSELF" => LookTarget::Player,
        "ITEMS" | "INVENTORY" | "MY ITEMS" | "MY INVENTORY" => LookTarget::Inventory,
        _ => LookTarget::Phrase(phrase),
    }
}

fn parse_use(tokens: &[&str]) -> Command {
    if let Some(split) = tokens.iter().position(|&t| t == "ON" || t == "WITH") {
        Command::UseOn {
            item: tokens[..split].join(" "),
            target: tokens[split + 1..].join(" "),
        }
    } else {
        Command::Use(tokens.join(" "))
    }
}
