//! The turn scheduler and the routine interpreter.
//!
//! After any time-consuming command succeeds, every entity's routine runs
//! exactly once, in registration order, whether or not the entity shares
//! the player's room. A routine may append activity text, relocate its
//! entity, flip global state, or rewrite the entity's own fields. Routines
//! never trigger another scheduler pass.

use rand::Rng;

use lg_core::{EntityId, Routine};

use crate::error::{EngineFault, EngineResult};
use crate::output::{AudioChannel, Cue, Ending, dispatch_cue};
use crate::pathfind::shortest_next_hop;
use crate::session::GameSession;

impl GameSession {
    /// Run one scheduler pass: clear the activity channel, then give every
    /// entity its turn.
    pub(crate) fn pass_time(&mut self) -> EngineResult<()> {
        self.activity.clear();
        tracing::debug!(room = %self.world.current_room(), "time passes");
        for id in self.world.entity_ids() {
            self.run_entity(id)?;
        }
        Ok(())
    }

    fn run_entity(&mut self, id: EntityId) -> EngineResult<()> {
        let routine = self.world.entity(id)?.routine.clone();
        let colocated = self.world.entity(id)?.location == self.world.current_room();

        match routine {
            Routine::Idle => {}

            Routine::Ambient { line } => {
                if colocated {
                    self.activity.push(line);
                }
            }

            Routine::AmbientUntil {
                line,
                threshold,
                update,
            } => {
                if colocated {
                    self.activity.push(line);
                }
                if self.world.current_room() > threshold {
                    self.world.apply_entity_update(id, update)?;
                }
            }

            Routine::DarknessTrigger {
                threshold,
                announcement,
                player_look,
            } => {
                if self.world.current_room() > threshold {
                    self.world.enter_dark();
                    self.activity.push(announcement);
                    self.world.player.appearance.general = player_look;
                    self.world.entity_mut(id)?.routine = Routine::Idle;
                }
            }

            Routine::Stalker { awake: false } => {
                if self.world.in_dark_mode() {
                    dispatch_cue(
                        self.audio.as_mut(),
                        Cue::AntagonistAwakens,
                        0,
                        AudioChannel::Ambient,
                    );
                    self.world.entity_mut(id)?.routine = Routine::Stalker { awake: true };
                }
            }

            Routine::Stalker { awake: true } => {
                if colocated {
                    self.antagonist_attack()?;
                } else {
                    self.pursue(id)?;
                }
            }

            Routine::EndingGate => {
                if colocated && self.ending.is_none() {
                    let dark = self
                        .world
                        .antagonist
                        .as_ref()
                        .is_some_and(|a| a.dark_ending);
                    self.ending = Some(if dark { Ending::Dark } else { Ending::Light });
                }
            }
        }
        Ok(())
    }

    /// Step the antagonist one hop toward the player on the dark map.
    fn pursue(&mut self, id: EntityId) -> EngineResult<()> {
        let from = self.world.entity(id)?.location;
        let target = self.world.current_room();
        let step = shortest_next_hop(from, target, self.world.dark_map())?;
        if step.distance == 0 {
            return Ok(());
        }

        self.world.relocate_entity(id, step.next_hop)?;
        dispatch_cue(
            self.audio.as_mut(),
            Cue::AntagonistMoves,
            step.distance,
            AudioChannel::Ambient,
        );

        if step.next_hop == target {
            let antagonist = self
                .world
                .antagonist
                .as_ref()
                .ok_or(EngineFault::MissingAntagonist)?;
            let lines = &antagonist.script.pursuit_lines;
            if !lines.is_empty() {
                let pick = self.rng.random_range(0..lines.len());
                let line = lines[pick].clone();
                self.activity.push(line);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lg_core::{
        AntagonistState, Appearance, CombatScript, Direction, Entity, EntityId, EntityUpdate,
        PlayerState, Room, RoomId, Routine, World, WorldMeta,
    };

    use crate::output::Ending;
    use crate::session::{GameConfig, GameSession};

    const WANDERER: EntityId = EntityId::new(0);
    const WARDEN: EntityId = EntityId::new(1);
    const GATE: EntityId = EntityId::new(2);

    fn r(id: u32) -> RoomId {
        RoomId::new(id)
    }

    fn blank_player() -> PlayerState {
        PlayerState::new(
            Appearance {
                general: "Bright-eyed.".into(),
                clothing: String::new(),
                condition: String::new(),
            },
            Vec::new(),
        )
    }

    /// Three rooms in a line; a staged wanderer in room 1, a darkness
    /// warden watching for progress past room 2, an ending gate in room 3.
    fn staged_world() -> World {
        let mut world = World::new(WorldMeta::new("Test"), blank_player());
        world
            .add_entity(
                Entity::new(WANDERER, "WANDERER", r(1))
                    .with_place_text("A WANDERER paces here.")
                    .with_dialogue("Soon.")
                    .with_routine(Routine::AmbientUntil {
                        line: "The WANDERER paces.".into(),
                        threshold: r(1),
                        update: EntityUpdate::new()
                            .move_to(r(2))
                            .dialogue("You made it.")
                            .routine(Routine::Ambient {
                                line: "The WANDERER waits calmly.".into(),
                            }),
                    }),
            )
            .unwrap();
        world
            .add_entity(
                Entity::new(WARDEN, "", r(1)).with_routine(Routine::DarknessTrigger {
                    threshold: r(1),
                    announcement: "The lights go out.".into(),
                    player_look: "Wide-eyed in the dark.".into(),
                }),
            )
            .unwrap();
        world
            .add_entity(Entity::new(GATE, "", r(3)).with_routine(Routine::EndingGate))
            .unwrap();
        world
            .add_room(
                Room::new(r(1), "First room.")
                    .with_entity(WANDERER)
                    .with_entity(WARDEN)
                    .with_exit(Direction::East, r(2)),
            )
            .unwrap();
        world
            .add_room(
                Room::new(r(2), "Second room.")
                    .with_exit(Direction::West, r(1))
                    .with_exit(Direction::East, r(3)),
            )
            .unwrap();
        world
            .add_room(
                Room::new(r(3), "Third room.")
                    .with_entity(GATE)
                    .with_exit(Direction::West, r(2)),
            )
            .unwrap();
        world.set_start(r(1));
        world
    }

    #[test]
    fn entities_act_once_per_turn_in_registration_order() {
        let mut session = GameSession::new(staged_world(), GameConfig::default()).unwrap();
        let report = session.submit("TALK WANDERER").unwrap();
        assert_eq!(report.activity, vec!["The WANDERER paces.".to_string()]);
    }

    #[test]
    fn staged_entities_rewrite_themselves_on_progress() {
        let mut session = GameSession::new(staged_world(), GameConfig::default()).unwrap();
        // Moving to room 2 crosses the wanderer's threshold.
        session.submit("E").unwrap();

        let entity = session.world().entity(WANDERER).unwrap();
        assert_eq!(entity.location, r(2));
        assert_eq!(entity.dialogue, "You made it.");
        assert!(matches!(entity.routine, Routine::Ambient { .. }));
        session.world().validate().unwrap();

        // The rewritten routine speaks from its new room.
        let report = session.submit("TALK WANDERER").unwrap();
        assert_eq!(report.activity, vec!["The WANDERER waits calmly.".to_string()]);
    }

    #[test]
    fn darkness_fires_exactly_once() {
        let mut session = GameSession::new(staged_world(), GameConfig::default()).unwrap();
        assert!(!session.world().in_dark_mode());

        let report = session.submit("E").unwrap();
        assert!(session.world().in_dark_mode());
        assert!(report
            .activity
            .contains(&"The lights go out.".to_string()));
        assert_eq!(
            session.world().player.appearance.general,
            "Wide-eyed in the dark."
        );

        // The trigger condition stays satisfied, but never fires again.
        let report = session.submit("W").unwrap();
        assert!(!report.activity.contains(&"The lights go out.".to_string()));
        let report = session.submit("E").unwrap();
        assert!(!report.activity.contains(&"The lights go out.".to_string()));
        assert!(session.world().in_dark_mode());
    }

    #[test]
    fn the_gate_ends_the_session() {
        let mut session = GameSession::new(staged_world(), GameConfig::default()).unwrap();
        session.submit("E").unwrap();
        let report = session.submit("E").unwrap();
        assert_eq!(report.ending, Some(Ending::Light));
        assert!(session.is_over());

        // No further input is accepted.
        let report = session.submit("W").unwrap();
        assert_eq!(report.ending, Some(Ending::Light));
        assert!(report.main.is_none());
        assert_eq!(session.world().current_room(), r(3));
    }

    #[test]
    fn a_destroyed_antagonist_turns_the_gate_dark() {
        let mut world = staged_world();
        let mut state = AntagonistState::new(
            GATE, // stands in for a slain antagonist entity
            CombatScript {
                phases: Vec::new(),
                attack_lines: Vec::new(),
                pursuit_lines: Vec::new(),
                exhausted: String::new(),
            },
        );
        state.hp = 0;
        state.dark_ending = true;
        world.set_antagonist(state);

        let mut session = GameSession::new(world, GameConfig::default()).unwrap();
        session.submit("E").unwrap();
        let report = session.submit("E").unwrap();
        assert_eq!(report.ending, Some(Ending::Dark));
    }
}
