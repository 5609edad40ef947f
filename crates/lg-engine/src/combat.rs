//! The two hit-point state machines: antagonist combat phases, driven by
//! weapon strikes, and player health, driven by antagonist attacks.

use lg_core::EntityId;

use crate::error::{CommandError, EngineFault, EngineResult};
use crate::output::{AudioChannel, Cue, Ending, dispatch_cue};
use crate::session::{GameSession, Step};

impl GameSession {
    /// The antagonist lands a blow on the player.
    pub(crate) fn antagonist_attack(&mut self) -> EngineResult<()> {
        dispatch_cue(
            self.audio.as_mut(),
            Cue::AntagonistStrikes,
            0,
            AudioChannel::Ambient,
        );
        let hp = self.world.player.take_hit();
        let line = self
            .world
            .antagonist
            .as_ref()
            .ok_or(EngineFault::MissingAntagonist)?
            .attack_line(hp)
            .map(str::to_string);
        if let Some(line) = line {
            self.activity.push(line);
        }
        if hp == 0 && self.ending.is_none() {
            self.ending = Some(Ending::Death);
        }
        Ok(())
    }

    /// The player uses the weapon on the antagonist.
    ///
    /// Only effective in dark mode. Each landed strike advances the combat
    /// machine one phase and applies that phase's rewrites; once the
    /// antagonist is destroyed, further strikes are flavored no-ops that
    /// still cost the turn.
    pub(crate) fn weapon_strike(
        &mut self,
        target: EntityId,
        target_phrase: &str,
    ) -> EngineResult<Step> {
        if !self.world.in_dark_mode() {
            return Ok(Step::Refused(CommandError::NoEntityReaction(
                target_phrase.to_string(),
            )));
        }

        let (exhausted, struck) = {
            let antagonist = self
                .world
                .antagonist
                .as_mut()
                .ok_or(EngineFault::MissingAntagonist)?;
            if antagonist.entity != target {
                return Err(EngineFault::StrayWeaponReaction(target));
            }
            (antagonist.script.exhausted.clone(), antagonist.advance())
        };

        match struck {
            None => self.main = Some(exhausted),
            Some(phase) => {
                dispatch_cue(
                    self.audio.as_mut(),
                    Cue::WeaponStrike,
                    0,
                    AudioChannel::Impact,
                );
                self.main = Some(phase.strike_text);
                self.world.entity_mut(target)?.description = phase.description;
                if let Some(update) = phase.update {
                    self.world.apply_entity_update(target, update)?;
                }
                if let Some(look) = phase.player_look {
                    self.world.player.appearance.general = look;
                }
            }
        }
        Ok(Step::Acted)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use lg_core::{
        AntagonistState, Appearance, CombatPhase, CombatScript, Direction, Entity, EntityId,
        EntityReaction, EntityUpdate, InjuryStage, Item, ItemId, PlayerState, Room, RoomGraph,
        RoomId, Routine, UseScript, World, WorldMeta,
    };

    use crate::error::CommandError;
    use crate::output::{AudioChannel, AudioSink, Cue, Ending};
    use crate::session::{GameConfig, GameSession};

    const KNIFE: ItemId = ItemId::new(0);
    const LADY: EntityId = EntityId::new(0);

    fn r(id: u32) -> RoomId {
        RoomId::new(id)
    }

    /// An audio sink whose log outlives the session.
    #[derive(Clone, Default)]
    struct SharedAudio(Rc<RefCell<Vec<(Cue, f32, AudioChannel)>>>);

    impl AudioSink for SharedAudio {
        fn play(&mut self, cue: Cue, volume: f32, channel: AudioChannel) {
            self.0.borrow_mut().push((cue, volume, channel));
        }
    }

    fn script() -> CombatScript {
        CombatScript {
            phases: vec![
                CombatPhase {
                    hp: 4,
                    strike_text: "You slash its arms.".into(),
                    description: "Slashed once.".into(),
                    update: None,
                    player_look: None,
                },
                CombatPhase {
                    hp: 3,
                    strike_text: "You slash its body.".into(),
                    description: "Slashed twice.".into(),
                    update: None,
                    player_look: None,
                },
                CombatPhase {
                    hp: 2,
                    strike_text: "You sever its claws.".into(),
                    description: "Crippled.".into(),
                    update: Some(
                        EntityUpdate::new()
                            .place_text("The LADY writhes on the ground.")
                            .dialogue("All she can do is scream.")
                            .routine(Routine::Ambient {
                                line: "The LADY writhes helplessly.".into(),
                            }),
                    ),
                    player_look: None,
                },
                CombatPhase {
                    hp: 1,
                    strike_text: "You hack at the helpless thing.".into(),
                    description: "Nearly destroyed.".into(),
                    update: None,
                    player_look: None,
                },
                CombatPhase {
                    hp: 0,
                    strike_text: "You obliterate it, smiling.".into(),
                    description: "A featureless lump.".into(),
                    update: Some(
                        EntityUpdate::new()
                            .place_text("The LADY is splattered onto the ground.")
                            .dialogue("Silence.")
                            .routine(Routine::Idle),
                    ),
                    player_look: Some("Smiling placidly.".into()),
                },
            ],
            attack_lines: vec![
                (4, "Claws rip your shoulder.".into()),
                (3, "Claws tear your side.".into()),
                (2, "Claws storm across your legs.".into()),
                (1, "You barely survive the flurry.".into()),
                (0, "A final, decisive blow.".into()),
            ],
            pursuit_lines: vec![
                "The LADY drags herself toward you.".into(),
                "The LADY chases you into the room.".into(),
                "The LADY claws her way in and closes.".into(),
            ],
            exhausted: "There's nothing left to slash.".into(),
        }
    }

    fn player() -> PlayerState {
        PlayerState::new(
            Appearance {
                general: "Bright-eyed.".into(),
                clothing: "A lacy dress.".into(),
                condition: "A plain bandage.".into(),
            },
            vec![
                InjuryStage {
                    hp: 4,
                    clothing: "A slashed dress.".into(),
                    condition: "A shoulder wound.".into(),
                },
                InjuryStage {
                    hp: 3,
                    clothing: "A gashed dress.".into(),
                    condition: "Several gashes.".into(),
                },
                InjuryStage {
                    hp: 2,
                    clothing: "A ruined dress.".into(),
                    condition: "Lacerated all over.".into(),
                },
                InjuryStage {
                    hp: 1,
                    clothing: "A shredded dress.".into(),
                    condition: "Past counting.".into(),
                },
            ],
        )
    }

    /// Rooms 1 -- 2 -- 3 in a line, already dark. The knife starts in room
    /// 1 with the player; the lady starts where the test wants her.
    fn dark_world(lady_room: RoomId, awake: bool) -> World {
        let mut world = World::new(WorldMeta::new("Test"), player());
        world
            .add_item(
                Item::scenery(KNIFE, "PALETTE KNIFE", "A sharp knife.", "A KNIFE lies here.")
                    .with_aliases(["KNIFE"])
                    .portable()
                    .with_use(UseScript::print("You brandish the knife.")),
            )
            .unwrap();
        world
            .add_entity(
                Entity::new(LADY, "LADY WITH RED NAILS", lady_room)
                    .with_aliases(["LADY"])
                    .with_description("She stares with animal excitement.")
                    .with_place_text("The LADY tenses to strike.")
                    .with_dialogue("Her mouth splits into a grin; she leaps.")
                    .with_reaction("PALETTE KNIFE", EntityReaction::WeaponStrike)
                    .with_routine(Routine::Stalker { awake }),
            )
            .unwrap();
        let mut rooms = vec![
            Room::new(r(1), "A dark corner.")
                .with_item(KNIFE)
                .with_exit(Direction::East, r(2)),
            Room::new(r(2), "A dark corridor.")
                .with_exit(Direction::West, r(1))
                .with_exit(Direction::East, r(3)),
            Room::new(r(3), "A dark hall.").with_exit(Direction::West, r(2)),
        ];
        for room in &mut rooms {
            if room.id == lady_room {
                room.entities.push(LADY);
            }
        }
        for room in rooms {
            world.add_room(room).unwrap();
        }
        world.set_maps(
            RoomGraph::new(),
            RoomGraph::new()
                .with_node(r(1), [r(2)])
                .with_node(r(2), [r(1), r(3)])
                .with_node(r(3), [r(2)]),
        );
        world.set_antagonist(AntagonistState::new(LADY, script()));
        world.set_start(r(1));
        world.enter_dark();
        world
    }

    fn session_with(lady_room: RoomId, awake: bool) -> (GameSession, SharedAudio) {
        let audio = SharedAudio::default();
        let session = GameSession::new(dark_world(lady_room, awake), GameConfig::default().with_seed(7))
            .unwrap()
            .with_audio(Box::new(audio.clone()));
        (session, audio)
    }

    #[test]
    fn the_stalker_wakes_then_closes_in() {
        let (mut session, audio) = session_with(r(3), false);

        // Turn 1: the dormant stalker notices the dark and wakes.
        session.submit("GET KNIFE").unwrap();
        assert!(matches!(
            session.world().entity(LADY).unwrap().routine,
            Routine::Stalker { awake: true }
        ));
        assert_eq!(
            audio.0.borrow().last(),
            Some(&(Cue::AntagonistAwakens, 1.0, AudioChannel::Ambient))
        );

        // Turn 2: she moves one hop, heard two rooms away.
        let report = session.submit("USE KNIFE").unwrap();
        assert_eq!(session.world().entity(LADY).unwrap().location, r(2));
        assert!(report.activity.is_empty());
        assert_eq!(
            audio.0.borrow().last(),
            Some(&(Cue::AntagonistMoves, 0.5, AudioChannel::Ambient))
        );

        // Turn 3: she steps into the player's room and announces herself.
        let report = session.submit("USE KNIFE").unwrap();
        assert_eq!(session.world().entity(LADY).unwrap().location, r(1));
        assert_eq!(report.activity.len(), 1);
        assert!(script().pursuit_lines.contains(&report.activity[0]));
        session.world().validate().unwrap();

        // Turn 4: colocated now, so she attacks instead of moving.
        let report = session.submit("USE KNIFE").unwrap();
        assert_eq!(session.world().player.hp, 4);
        assert_eq!(report.activity, vec!["Claws rip your shoulder.".to_string()]);
        assert_eq!(
            audio.0.borrow().last(),
            Some(&(Cue::AntagonistStrikes, 1.0, AudioChannel::Ambient))
        );
    }

    #[test]
    fn attacks_rewrite_the_player_appearance() {
        let (mut session, _) = session_with(r(1), true);
        session.submit("GET KNIFE").unwrap();
        assert_eq!(session.world().player.hp, 4);
        assert_eq!(session.world().player.appearance.clothing, "A slashed dress.");
        session.submit("LOOK SELF").unwrap();
        assert_eq!(session.world().player.hp, 4); // free commands cost nothing
        session.submit("TALK LADY").unwrap();
        assert_eq!(session.world().player.hp, 3);
        assert_eq!(session.world().player.appearance.condition, "Several gashes.");
    }

    #[test]
    fn five_attacks_kill_the_player() {
        let (mut session, _) = session_with(r(1), true);
        let mut last = None;
        for _ in 0..5 {
            last = Some(session.submit("TALK LADY").unwrap());
        }
        let report = last.unwrap();
        assert_eq!(report.ending, Some(Ending::Death));
        assert_eq!(session.world().player.hp, 0);
        assert!(report
            .activity
            .contains(&"A final, decisive blow.".to_string()));
        assert!(session.is_over());
    }

    #[test]
    fn five_strikes_destroy_the_antagonist() {
        let (mut session, audio) = session_with(r(1), true);
        session.submit("GET KNIFE").unwrap();

        let report = session.submit("USE KNIFE ON LADY").unwrap();
        assert_eq!(report.main.as_deref(), Some("You slash its arms."));
        assert_eq!(session.world().antagonist.as_ref().unwrap().hp, 4);
        assert!(
            audio
                .0
                .borrow()
                .contains(&(Cue::WeaponStrike, 1.0, AudioChannel::Impact))
        );
        // She retaliates on the same turn while still able.
        assert!(!report.activity.is_empty());

        session.submit("USE KNIFE ON LADY").unwrap();
        let report = session.submit("USE KNIFE ON LADY").unwrap();
        // hp 2: immobilized, stops retaliating.
        assert_eq!(report.main.as_deref(), Some("You sever its claws."));
        let lady = session.world().entity(LADY).unwrap();
        assert_eq!(lady.dialogue, "All she can do is scream.");
        assert!(matches!(lady.routine, Routine::Ambient { .. }));
        assert_eq!(
            report.activity,
            vec!["The LADY writhes helplessly.".to_string()]
        );

        session.submit("USE KNIFE ON LADY").unwrap();
        let report = session.submit("USE KNIFE ON LADY").unwrap();
        assert_eq!(report.main.as_deref(), Some("You obliterate it, smiling."));
        let state = session.world().antagonist.as_ref().unwrap();
        assert_eq!(state.hp, 0);
        assert!(state.dark_ending);
        assert_eq!(
            session.world().player.appearance.general,
            "Smiling placidly."
        );
        assert!(matches!(
            session.world().entity(LADY).unwrap().routine,
            Routine::Idle
        ));

        // A sixth strike is a no-op with its own line, but still a turn.
        let report = session.submit("USE KNIFE ON LADY").unwrap();
        assert_eq!(report.main.as_deref(), Some("There's nothing left to slash."));
        assert!(report.time_passed);
        assert_eq!(session.world().antagonist.as_ref().unwrap().hp, 0);
    }

    #[test]
    fn the_weapon_does_nothing_in_the_light() {
        // The same cast, but the gallery never went dark.
        let mut world = World::new(WorldMeta::new("Test"), player());
        world
            .add_item(
                Item::scenery(KNIFE, "PALETTE KNIFE", "A sharp knife.", "A KNIFE lies here.")
                    .with_aliases(["KNIFE"])
                    .portable(),
            )
            .unwrap();
        world
            .add_entity(
                Entity::new(LADY, "LADY WITH RED NAILS", r(1))
                    .with_aliases(["LADY"])
                    .with_reaction("PALETTE KNIFE", EntityReaction::WeaponStrike)
                    .with_routine(Routine::Stalker { awake: false }),
            )
            .unwrap();
        world
            .add_room(
                Room::new(r(1), "A lit corner.")
                    .with_item(KNIFE)
                    .with_entity(LADY),
            )
            .unwrap();
        world.set_antagonist(AntagonistState::new(LADY, script()));
        world.set_start(r(1));

        let mut session = GameSession::new(world, GameConfig::default()).unwrap();
        session.submit("GET KNIFE").unwrap();
        let report = session.submit("USE KNIFE ON LADY").unwrap();
        assert_eq!(
            report.error,
            Some(CommandError::NoEntityReaction("LADY".into()))
        );
        assert!(!report.time_passed);
        assert_eq!(session.world().antagonist.as_ref().unwrap().hp, 5);
    }
}
