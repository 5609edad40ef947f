//! The game session: one owned value holding the world, the rng, the audio
//! sink, and the channel buffers, driven one command at a time.

use rand::SeedableRng;
use rand::rngs::StdRng;

use lg_core::{CoreError, Direction, Effect, EntityReaction, RoomId, World};

use crate::command::{Command, HELP_TEXT, LookTarget, parse_command};
use crate::error::{CommandError, EngineFault, EngineResult};
use crate::output::{AudioSink, Ending, NullAudio, TurnReport};
use crate::resolver::{Resolution, find_carried_item, find_room_entity, find_room_item, resolve};

/// Session construction parameters.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Seed for every random choice the engine makes.
    pub seed: u64,
}

impl GameConfig {
    /// Set the rng seed, builder-style.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// How a command turned out, before the scheduler runs.
#[derive(Debug)]
pub(crate) enum Step {
    /// The command succeeded and consumes a turn.
    Acted,
    /// The command succeeded but costs no time.
    Free,
    /// The command failed; nothing changed.
    Refused(CommandError),
}

/// A running game.
///
/// Owns all mutable state, so a process can hold as many independent
/// sessions as it likes. Submit one command per turn; the returned
/// [`TurnReport`] carries everything the three output channels received.
/// After a terminal outcome the session stops accepting commands.
pub struct GameSession {
    pub(crate) world: World,
    pub(crate) rng: StdRng,
    pub(crate) audio: Box<dyn AudioSink>,
    pub(crate) ending: Option<Ending>,
    pub(crate) main: Option<String>,
    pub(crate) activity: Vec<String>,
}

impl GameSession {
    /// Validate the world and start a session over it.
    pub fn new(world: World, config: GameConfig) -> EngineResult<Self> {
        world.validate()?;
        Ok(Self {
            world,
            rng: StdRng::seed_from_u64(config.seed),
            audio: Box::new(NullAudio),
            ending: None,
            main: None,
            activity: Vec::new(),
        })
    }

    /// Install an audio sink, builder-style.
    pub fn with_audio(mut self, sink: Box<dyn AudioSink>) -> Self {
        self.audio = sink;
        self
    }

    /// The world under play.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The world under play, mutably. Meant for tests and tools.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The terminal outcome, once one is reached.
    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    /// Whether the session has ended.
    pub fn is_over(&self) -> bool {
        self.ending.is_some()
    }

    /// The report for entering the starting room, before any command.
    pub fn opening(&mut self) -> EngineResult<TurnReport> {
        let mut report = TurnReport::empty();
        report.main = Some(self.describe_room(self.world.current_room())?);
        Ok(report)
    }

    /// Process one line of player input.
    pub fn submit(&mut self, input: &str) -> EngineResult<TurnReport> {
        match self.run(input) {
            Ok(report) => Ok(report),
            Err(fault) => {
                tracing::error!(%fault, "engine fault; session aborted");
                Err(fault)
            }
        }
    }

    fn run(&mut self, input: &str) -> EngineResult<TurnReport> {
        if self.ending.is_some() {
            let mut report = TurnReport::empty();
            report.ending = self.ending;
            return Ok(report);
        }

        self.main = None;
        self.activity.clear();

        let step = match parse_command(input) {
            Ok(command) => self.execute(command)?,
            Err(error) => Step::Refused(error),
        };

        let mut time_passed = false;
        let mut error = None;
        match step {
            Step::Acted => {
                time_passed = true;
                self.pass_time()?;
            }
            Step::Free => {}
            Step::Refused(e) => error = Some(e),
        }

        Ok(TurnReport {
            main: self.main.take(),
            activity: std::mem::take(&mut self.activity),
            error,
            ending: self.ending,
            time_passed,
        })
    }

    fn execute(&mut self, command: Command) -> EngineResult<Step> {
        match command {
            Command::Move(direction) => self.do_move(direction),
            Command::Look(target) => self.do_look(target),
            Command::Get(phrase) => self.do_get(&phrase),
            Command::Use(phrase) => self.do_use(&phrase),
            Command::UseOn { item, target } => self.do_use_on(&item, &target),
            Command::Inventory => {
                self.main = Some(self.describe_inventory()?);
                Ok(Step::Free)
            }
            Command::Talk(phrase) => self.do_talk(&phrase),
            Command::Help => {
                self.main = Some(HELP_TEXT.to_string());
                Ok(Step::Free)
            }
        }
    }

    fn do_move(&mut self, direction: Direction) -> EngineResult<Step> {
        match self.world.move_player(direction) {
            Ok(room) => {
                self.main = Some(self.describe_room(room)?);
                Ok(Step::Acted)
            }
            Err(CoreError::NoExit { .. }) => Ok(Step::Refused(CommandError::NoExit(direction))),
            Err(fault) => Err(fault.into()),
        }
    }

    fn do_look(&mut self, target: LookTarget) -> EngineResult<Step> {
        let text = match target {
            LookTarget::Room => self.describe_room(self.world.current_room())?,
            LookTarget::Player => self.describe_player(),
            LookTarget::Inventory => self.describe_inventory()?,
            LookTarget::Phrase(phrase) => match resolve(&self.world, &phrase) {
                Some(Resolution::RoomItem(id) | Resolution::CarriedItem(id)) => {
                    self.world.item(id)?.description.clone()
                }
                Some(Resolution::Entity(id)) => self.world.entity(id)?.description.clone(),
                None => return Ok(Step::Refused(CommandError::NotVisible(phrase))),
            },
        };
        self.main = Some(text);
        Ok(Step::Free)
    }

    fn do_get(&mut self, phrase: &str) -> EngineResult<Step> {
        let Some(id) = find_room_item(&self.world, phrase) else {
            if find_room_entity(&self.world, phrase).is_some() {
                return Ok(Step::Refused(CommandError::EntityNotCollectible));
            }
            return Ok(Step::Refused(CommandError::NotVisible(phrase.to_string())));
        };
        match self.world.take_item(id) {
            Ok(()) => {
                // The room lost an item; show it fresh.
                self.main = Some(self.describe_room(self.world.current_room())?);
                Ok(Step::Acted)
            }
            Err(CoreError::NotPortable { .. }) => {
                Ok(Step::Refused(CommandError::NotCollectible(phrase.to_string())))
            }
            Err(fault) => Err(fault.into()),
        }
    }

    fn do_use(&mut self, phrase: &str) -> EngineResult<Step> {
        let found =
            find_room_item(&self.world, phrase).or_else(|| find_carried_item(&self.world, phrase));
        if let Some(id) = found {
            let Some(script) = self.world.item(id)?.use_script.clone() else {
                return Ok(Step::Refused(CommandError::NoStandaloneUse(
                    phrase.to_string(),
                )));
            };
            self.apply_effects(script.effects)?;
            return Ok(Step::Acted);
        }
        if find_room_entity(&self.world, phrase).is_some() {
            return Ok(Step::Refused(CommandError::UseOnEntity));
        }
        Ok(Step::Refused(CommandError::NotVisible(phrase.to_string())))
    }

    fn do_use_on(&mut self, item_phrase: &str, target_phrase: &str) -> EngineResult<Step> {
        let Some(used) = find_carried_item(&self.world, item_phrase) else {
            return Ok(Step::Refused(CommandError::NotCarried(
                item_phrase.to_string(),
            )));
        };
        // Reactions are keyed by canonical names; the phrase may have been
        // an alias.
        let used_name = self.world.item(used)?.name.clone();

        let target_item = find_room_item(&self.world, target_phrase)
            .or_else(|| find_carried_item(&self.world, target_phrase));
        if let Some(target) = target_item {
            let Some(reaction) = self.world.item(target)?.reaction_to(&used_name).cloned() else {
                return Ok(Step::Refused(CommandError::NoItemReaction));
            };
            self.apply_effects(reaction.effects)?;
            return Ok(Step::Acted);
        }

        if let Some(target) = find_room_entity(&self.world, target_phrase) {
            return match self.world.entity(target)?.reaction_to(&used_name) {
                Some(EntityReaction::WeaponStrike) => self.weapon_strike(target, target_phrase),
                None => Ok(Step::Refused(CommandError::NoEntityReaction(
                    target_phrase.to_string(),
                ))),
            };
        }

        Ok(Step::Refused(CommandError::NotVisible(
            target_phrase.to_string(),
        )))
    }

    fn do_talk(&mut self, phrase: &str) -> EngineResult<Step> {
        if let Some(id) = find_room_entity(&self.world, phrase) {
            self.main = Some(self.world.entity(id)?.dialogue.clone());
            return Ok(Step::Acted);
        }
        if find_room_item(&self.world, phrase).is_some()
            || find_carried_item(&self.world, phrase).is_some()
        {
            return Ok(Step::Refused(CommandError::NotConversational(
                phrase.to_string(),
            )));
        }
        if matches!(phrase, "SELF" | "ME" | "MYSELF") {
            return Ok(Step::Refused(CommandError::TalkToSelf));
        }
        Ok(Step::Refused(CommandError::NotVisible(phrase.to_string())))
    }

    /// Run a use script or reaction.
    pub(crate) fn apply_effects(&mut self, effects: Vec<Effect>) -> EngineResult<()> {
        for effect in effects {
            match effect {
                Effect::Print(text) => self.main = Some(text),
                Effect::PrintByMode { light, dark } => {
                    self.main = Some(if self.world.in_dark_mode() { dark } else { light });
                }
                Effect::RevealItem { room, item } => self.world.reveal_item(room, item)?,
                Effect::SetItemUse { item, script } => {
                    self.world.item_mut(item)?.use_script = Some(script);
                }
                Effect::SetReaction {
                    item,
                    key,
                    reaction,
                } => {
                    let target = self.world.item_mut(item)?;
                    match target
                        .reactions
                        .iter_mut()
                        .find(|(k, _)| k.eq_ignore_ascii_case(&key))
                    {
                        Some((_, existing)) => *existing = reaction,
                        None => target.reactions.push((key, reaction)),
                    }
                }
            }
        }
        Ok(())
    }

    /// The room description: narrative text, item and entity place lines,
    /// and the exit list.
    pub(crate) fn describe_room(&self, id: RoomId) -> EngineResult<String> {
        let room = self.world.room(id)?;
        let mut text = room.description.clone();
        for item in &room.items {
            let place = &self.world.item(*item)?.place_text;
            if !place.is_empty() {
                text.push_str("\n\n");
                text.push_str(place);
            }
        }
        for entity in &room.entities {
            let place = &self.world.entity(*entity)?.place_text;
            if !place.is_empty() {
                text.push_str("\n\n");
                text.push_str(place);
            }
        }
        text.push_str("\n\nExits are |");
        for (direction, _) in &room.exits {
            text.push_str(&format!(" {direction} |"));
        }
        Ok(text)
    }

    fn describe_player(&self) -> String {
        let looks = &self.world.player.appearance;
        format!("{}\n{}\n{}", looks.general, looks.clothing, looks.condition)
    }

    fn describe_inventory(&self) -> EngineResult<String> {
        if self.world.inventory().is_empty() {
            return Ok("You're not carrying anything with you.".to_string());
        }
        let mut text = "You're carrying |".to_string();
        for id in self.world.inventory() {
            text.push_str(&format!(" {} |", self.world.item(*id)?.name));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lg_core::{
        Appearance, Entity, EntityId, Item, ItemId, PlayerState, Reaction, Room, Routine,
        UseScript, WorldMeta,
    };

    const TRINKET: ItemId = ItemId::new(0);
    const PLINTH: ItemId = ItemId::new(1);
    const LEVER: ItemId = ItemId::new(2);
    const CABINET: ItemId = ItemId::new(3);
    const GEM: ItemId = ItemId::new(4);
    const KEEPER: EntityId = EntityId::new(0);
    const HALL: RoomId = RoomId::new(1);
    const ANNEX: RoomId = RoomId::new(2);

    fn test_world() -> World {
        let player = PlayerState::new(
            Appearance {
                general: "A wanderer.".into(),
                clothing: "A long coat.".into(),
                condition: "Rested.".into(),
            },
            Vec::new(),
        );
        let mut world = World::new(WorldMeta::new("Test"), player);
        world
            .add_item(
                Item::scenery(TRINKET, "TRINKET", "A cheap trinket.", "A TRINKET glints here.")
                    .with_aliases(["CHARM"])
                    .portable(),
            )
            .unwrap();
        world
            .add_item(Item::scenery(
                PLINTH,
                "PLINTH",
                "A bare plinth.",
                "An empty PLINTH stands here.",
            ))
            .unwrap();
        world
            .add_item(
                Item::scenery(LEVER, "LEVER", "A rusted lever.", "A LEVER juts from the wall.")
                    .with_use(UseScript::print("You pull the lever.  Nothing happens.")),
            )
            .unwrap();
        world
            .add_item(
                Item::scenery(CABINET, "CABINET", "A locked cabinet.", "A CABINET sits shut.")
                    .with_reaction(
                        "TRINKET",
                        Reaction {
                            effects: vec![
                                lg_core::Effect::Print("The cabinet springs open.".into()),
                                lg_core::Effect::RevealItem {
                                    room: HALL,
                                    item: GEM,
                                },
                                lg_core::Effect::SetReaction {
                                    item: CABINET,
                                    key: "TRINKET".into(),
                                    reaction: Reaction::print("The cabinet is already open."),
                                },
                            ],
                        },
                    ),
            )
            .unwrap();
        world
            .add_item(Item::scenery(GEM, "GEM", "A dull gem.", "A GEM lies here.").portable())
            .unwrap();
        world
            .add_entity(
                Entity::new(KEEPER, "KEEPER", HALL)
                    .with_description("A stooped keeper of the hall.")
                    .with_dialogue("Mind the plinth.")
                    .with_routine(Routine::Ambient {
                        line: "The KEEPER sweeps the floor.".into(),
                    }),
            )
            .unwrap();
        world
            .add_room(
                Room::new(HALL, "A dusty hall.")
                    .with_item(TRINKET)
                    .with_item(PLINTH)
                    .with_item(LEVER)
                    .with_item(CABINET)
                    .with_entity(KEEPER)
                    .with_exit(Direction::East, ANNEX),
            )
            .unwrap();
        world
            .add_room(Room::new(ANNEX, "A cramped annex.").with_exit(Direction::West, HALL))
            .unwrap();
        world.set_start(HALL);
        world
    }

    fn session() -> GameSession {
        GameSession::new(test_world(), GameConfig::default()).unwrap()
    }

    #[test]
    fn moving_describes_the_new_room_and_passes_time() {
        let mut session = session();
        let report = session.submit("E").unwrap();
        assert!(report.error.is_none());
        assert!(report.time_passed);
        assert!(report.main.unwrap().contains("cramped annex"));
        // The keeper acted, but in another room, so no line was shown.
        assert!(report.activity.is_empty());
    }

    #[test]
    fn ambient_entities_speak_only_when_colocated() {
        let mut session = session();
        let report = session.submit("TALK KEEPER").unwrap();
        assert!(report.time_passed);
        assert_eq!(report.activity, vec!["The KEEPER sweeps the floor.".to_string()]);
    }

    #[test]
    fn blocked_movement_costs_no_turn() {
        let mut session = session();
        let report = session.submit("N").unwrap();
        assert_eq!(report.error, Some(CommandError::NoExit(Direction::North)));
        assert!(!report.time_passed);
        assert!(report.activity.is_empty());
        assert_eq!(session.world().current_room(), HALL);
    }

    #[test]
    fn get_then_look_by_alias_round_trips() {
        let mut session = session();
        let report = session.submit("GET THE CHARM").unwrap();
        assert!(report.error.is_none());
        assert!(report.time_passed);
        assert_eq!(session.world().inventory(), &[TRINKET]);

        let report = session.submit("LOOK CHARM").unwrap();
        assert_eq!(report.main.as_deref(), Some("A cheap trinket."));
        assert!(!report.time_passed);
    }

    #[test]
    fn get_refuses_scenery_without_a_turn() {
        let mut session = session();
        let report = session.submit("GET PLINTH").unwrap();
        assert_eq!(
            report.error,
            Some(CommandError::NotCollectible("PLINTH".into()))
        );
        assert!(!report.time_passed);
        assert!(session.world().inventory().is_empty());
    }

    #[test]
    fn get_on_an_entity_gets_its_own_message() {
        let mut session = session();
        let report = session.submit("GET KEEPER").unwrap();
        assert_eq!(report.error, Some(CommandError::EntityNotCollectible));
        assert!(!report.time_passed);
    }

    #[test]
    fn using_an_item_with_a_script_passes_a_turn() {
        let mut session = session();
        let report = session.submit("USE LEVER").unwrap();
        assert!(report.time_passed);
        assert_eq!(
            report.main.as_deref(),
            Some("You pull the lever.  Nothing happens.")
        );
    }

    #[test]
    fn using_an_inert_item_fails_without_a_turn() {
        let mut session = session();
        let report = session.submit("USE PLINTH").unwrap();
        assert_eq!(
            report.error,
            Some(CommandError::NoStandaloneUse("PLINTH".into()))
        );
        assert!(!report.time_passed);
    }

    #[test]
    fn using_an_entity_is_flavored() {
        let mut session = session();
        let report = session.submit("USE KEEPER").unwrap();
        assert_eq!(report.error, Some(CommandError::UseOnEntity));
    }

    #[test]
    fn two_target_use_requires_carrying_the_first() {
        let mut session = session();
        let report = session.submit("USE TRINKET ON CABINET").unwrap();
        assert_eq!(
            report.error,
            Some(CommandError::NotCarried("TRINKET".into()))
        );
        assert!(!report.time_passed);
    }

    #[test]
    fn reactions_fire_and_can_rewrite_their_owner() {
        let mut session = session();
        session.submit("GET TRINKET").unwrap();

        let report = session.submit("USE CHARM ON CABINET").unwrap();
        assert!(report.error.is_none());
        assert!(report.time_passed);
        assert_eq!(report.main.as_deref(), Some("The cabinet springs open."));
        assert!(session.world().room(HALL).unwrap().items.contains(&GEM));

        // The reaction replaced itself.
        let report = session.submit("USE CHARM ON CABINET").unwrap();
        assert_eq!(report.main.as_deref(), Some("The cabinet is already open."));
    }

    #[test]
    fn unmatched_reaction_pairs_are_refused() {
        let mut session = session();
        session.submit("GET TRINKET").unwrap();
        let report = session.submit("USE TRINKET ON PLINTH").unwrap();
        assert_eq!(report.error, Some(CommandError::NoItemReaction));
        assert!(!report.time_passed);
    }

    #[test]
    fn talking_to_entities_passes_a_turn() {
        let mut session = session();
        let report = session.submit("TALK TO THE KEEPER").unwrap();
        assert_eq!(report.main.as_deref(), Some("Mind the plinth."));
        assert!(report.time_passed);
    }

    #[test]
    fn talking_to_items_and_yourself_is_flavored() {
        let mut session = session();
        let report = session.submit("TALK PLINTH").unwrap();
        assert_eq!(
            report.error,
            Some(CommandError::NotConversational("PLINTH".into()))
        );

        let report = session.submit("TALK TO MYSELF").unwrap();
        assert_eq!(report.error, Some(CommandError::TalkToSelf));
    }

    #[test]
    fn inventory_and_help_are_free() {
        let mut session = session();
        let report = session.submit("ITEMS").unwrap();
        assert!(!report.time_passed);
        assert!(report.main.unwrap().contains("not carrying"));

        let report = session.submit("HELP").unwrap();
        assert!(!report.time_passed);
        assert!(report.main.unwrap().contains("Commands:"));
    }

    #[test]
    fn looking_at_yourself_reads_the_appearance_slots() {
        let mut session = session();
        let report = session.submit("LOOK SELF").unwrap();
        let text = report.main.unwrap();
        assert!(text.contains("A wanderer."));
        assert!(text.contains("A long coat."));
        assert!(text.contains("Rested."));
    }

    #[test]
    fn nonsense_is_invalid_without_side_effects() {
        let mut session = session();
        let report = session.submit("FROLIC WILDLY").unwrap();
        assert_eq!(report.error, Some(CommandError::Invalid));
        assert!(!report.time_passed);
        assert!(report.main.is_none());
    }

    #[test]
    fn unresolved_look_reports_not_visible() {
        let mut session = session();
        let report = session.submit("LOOK GHOST").unwrap();
        assert_eq!(report.error, Some(CommandError::NotVisible("GHOST".into())));
    }

    #[test]
    fn opening_describes_the_start_room() {
        let mut session = session();
        let report = session.opening().unwrap();
        assert!(report.main.unwrap().contains("dusty hall"));
        assert!(!report.time_passed);
    }
}
