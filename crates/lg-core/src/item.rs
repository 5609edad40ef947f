use serde::{Deserialize, Serialize};

use crate::behavior::{Reaction, UseScript};

/// Stable integer identifier for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(u32);

impl ItemId {
    /// Create an item id from its raw value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw integer value.
    pub const fn raw(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item {}", self.0)
    }
}

/// An inanimate thing the player can look at, and sometimes carry or use.
///
/// The `name` is the canonical identifier; it must be unique among the items
/// addressable from one spot (current room plus inventory) so noun-phrase
/// resolution stays unambiguous. Aliases resolve to the same item. The
/// reaction table is keyed by the canonical name of the item being used on
/// this one, and is validated against the item registry at world load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// This item's id.
    pub id: ItemId,
    /// Canonical name, as displayed and typed.
    pub name: String,
    /// Alternate names that resolve to this item.
    pub aliases: Vec<String>,
    /// Long description shown by LOOK.
    pub description: String,
    /// Short line woven into room descriptions.
    pub place_text: String,
    /// Whether GET may move this item into the inventory.
    pub portable: bool,
    /// Standalone use script, if the item has one.
    pub use_script: Option<UseScript>,
    /// Reactions to other items, keyed by their canonical names.
    pub reactions: Vec<(String, Reaction)>,
}

impl Item {
    /// Create a scenery item: not portable, no use, no reactions.
    pub fn scenery(
        id: ItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        place_text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            aliases: Vec::new(),
            description: description.into(),
            place_text: place_text.into(),
            portable: false,
            use_script: None,
            reactions: Vec::new(),
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

    /// Mark the item portable, builder-style.
    pub fn portable(mut self) -> Self {
        self.portable = true;
        self
    }

    /// Attach a standalone use script, builder-style.
    pub fn with_use(mut self, script: UseScript) -> Self {
        self.use_script = Some(script);
        self
    }

    /// Register a reaction to another item, builder-style.
    pub fn with_reaction(mut self, key: impl Into<String>, reaction: Reaction) -> Self {
        self.reactions.push((key.into(), reaction));
        self
    }

    /// Whether a noun phrase names this item (case-insensitive, exact).
    pub fn answers_to(&self, phrase: &str) -> bool {
        self.name.eq_ignore_ascii_case(phrase)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(phrase))
    }

    /// Look up the reaction registered under another item's canonical name.
    pub fn reaction_to(&self, key: &str) -> Option<&Reaction> {
        self.reactions
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, r)| r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_to_name_and_aliases() {
        let item = Item::scenery(ItemId::new(1), "PALETTE KNIFE", "A knife.", "A knife lies here.")
            .with_aliases(["KNIFE", "BLADE"]);

        assert!(item.answers_to("palette knife"));
        assert!(item.answers_to("KNIFE"));
        assert!(item.answers_to("blade"));
        assert!(!item.answers_to("KNIV"));
        assert!(!item.answers_to("PALETTE"));
    }

    #[test]
    fn reaction_lookup_is_case_insensitive() {
        let item = Item::scenery(ItemId::new(2), "TABLE", "A table.", "A table stands here.")
            .with_reaction("SELFIE STICK", Reaction::print("It works."));

        assert!(item.reaction_to("selfie stick").is_some());
        assert!(item.reaction_to("CROWBAR").is_none());
    }
}
