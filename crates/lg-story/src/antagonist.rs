//! The Lady With Red Nails' combat script: what each strike does to her,
//! what each of her blows does to the player, and the lines she closes in
//! with.

use lg_core::{AntagonistState, CombatPhase, CombatScript, EntityUpdate, Routine};

use crate::entities;

/// The antagonist's combat state at world load.
pub fn antagonist_state() -> AntagonistState {
    AntagonistState::new(entities::LADY, script())
}

fn script() -> CombatScript {
    CombatScript {
        phases: vec![
            CombatPhase {
                hp: 4,
                strike_text: "Drawing your blade, you dash forwards and hack at the Lady with Red Nails' arms, your knuckles completely white\n\
                              as a mad strength you never knew you had drives you on.  The blade sinks straight through her semisolid body, slashing into\n\
                              her arms and shoulders with a violent spray of red paint; she claws at you as you retreat, but the damage is done."
                    .into(),
                description: "A frantic noblewoman with long hair cascading over her shoulders and a massive grin is halfway out of a painting frame,\n\
                              digging her lethal blood-red claws into the ground and dragging her body forwards.\n\
                              She's tightly arrayed in a fine, frilly dress, stained with red paint.\n\
                              Her body is completely made of thick paint, and slashed open from your attacks; red paint drools from the openings."
                    .into(),
                update: None,
                player_look: None,
            },
            CombatPhase {
                hp: 3,
                strike_text: "Drawing your blade, you dash forwards and slash through the Lady with Red Nails' body, a berserker fury\n\
                              driving your weapon across her chest, through her face - any surface your knife can reach, you cut through.\n\
                              Letting out an inhuman scream, she drives her claws through you in return, frantically trading blows."
                    .into(),
                description: "A frantic noblewoman with long hair cascading over her shoulders and a massive grin is halfway out of a painting frame,\n\
                              digging her lethal blood-red claws into the ground and dragging her body forwards.\n\
                              She's tightly arrayed in a fine, frilly dress, cut through and stained with red paint.\n\
                              Her body is completely made of thick paint, and slashed badly from your attacks; red paint drools from the openings."
                    .into(),
                update: None,
                player_look: None,
            },
            CombatPhase {
                hp: 2,
                strike_text: "Drawing your blade, you dash forwards and strike out with frightening speed, your body forced into responding.\n\
                              The Lady with Red Nails furiously claws at you, tearing through your body, but your knife raises and you cut straight through her claws.\n\
                              Stepping forwards, you sever her arms, completely immobilizing her."
                    .into(),
                description: "A frantic noblewoman with long hair cascading over her shoulders and a horrific maw is halfway out of a painting frame,\n\
                              struggling in place as she lets out cries of pain and rage, red paint streaming from her eyes and mixing with the white.\n\
                              Her fine, frilly dress is ruined, soaked a pure red and rended from the ferocity of your blows.\n\
                              Her body is completely made of thick paint, and slashed open from your attacks; red paint cascades from the stumps where arms once were."
                    .into(),
                update: Some(
                    EntityUpdate::new()
                        .place_text("The LADY WITH RED NAILS is splayed out helplessly upon the ground.")
                        .dialogue("All she can do is scream.")
                        .routine(Routine::Ambient {
                            line: "The LADY WITH RED NAILS writhes helplessly, screaming in pain.".into(),
                        }),
                ),
                player_look: None,
            },
            CombatPhase {
                hp: 1,
                strike_text: "Drawing your blade, you hack and slash at the helpless painting, tears flooding your eyes as you viciously rip into\n\
                              her body, driving your blade down into her head.  After what feels like hours, you realize what you've been doing and slowly back away."
                    .into(),
                description: "A frantic, mauled noblewoman is halfway out of a painting frame,\n\
                              struggling in place as she lets out unidentifiable noises, pinkish paint streaming down her body.\n\
                              Her body is completely made of thick paint, and nearly destroyed from your assault."
                    .into(),
                update: None,
                player_look: None,
            },
            CombatPhase {
                hp: 0,
                strike_text: "Drawing your blade, you drive it through what remains of the Lady with Red Nails' body, wielding edge and flat\n\
                              in tandem, obliterating your former assailant piece by piece.  You lose track of time, but eventually, you're finished.\n\
                              For some reason, you can't stop smiling."
                    .into(),
                description: "Judging from the stained frame, this featureless lump of paint must have been a painting at some point."
                    .into(),
                update: Some(
                    EntityUpdate::new()
                        .place_text("The LADY WITH RED NAILS is splattered onto the ground.")
                        .dialogue("Silence.")
                        .routine(Routine::Idle),
                ),
                player_look: Some(
                    "You're a young girl of about seven or eight, with bright eyes beneath long brown tresses and a constant placid smile."
                        .into(),
                ),
            },
        ],
        attack_lines: vec![
            (
                4,
                "The Lady with Red Nails lunges forwards and sinks her claws into your shoulder, ripping through meat and muscle.\n\
                 A momentary shock passes through your body, then a sudden unbearable pain; you blindly stumble backwards and away.\n\
                 Rearing back, she prepares to pounce again."
                    .into(),
            ),
            (
                3,
                "The Lady with Red Nails hurls herself towards you, her claws outstretched, reaching for vulnerable flesh.\n\
                 Before you can react, they sink into the soft meat of your abdomen and rip across, tearing a horrific gash through your form.\n\
                 You barely manage to leap away before she can strike a vital point."
                    .into(),
            ),
            (
                2,
                "The Lady with Red Nails propels herself low across the floor this time, aiming for your legs.\n\
                 Unprepared for the low attack, you stumble, her claws slashing in a storm of movement through any exposed parts they find.\n\
                 Hitting the ground hard, you roll away and force yourself back onto your feet."
                    .into(),
            ),
            (
                1,
                "The Lady with Red Nails takes a flying leap towards you, claws bared for a final attack.\n\
                 Somehow, you manage to make your body respond, arms raising protectively in front of you as you stagger backwards.\n\
                 A storm of claw-swipes blows across you, unimaginable pain striking through your form.\n\
                 But you just barely manage to keep the absolutely necessary parts of your body intact."
                    .into(),
            ),
            (0, "The Lady with Red Nails deals a final, decisive blow.".into()),
        ],
        pursuit_lines: vec![
            "The LADY WITH RED NAILS drags herself rapidly towards you, her claws inching closer and closer.".into(),
            "The LADY WITH RED NAILS chases you into the room, lips slightly parted in anticipation of blood.".into(),
            "The LADY WITH RED NAILS claws her way into the room; she catches sight of you and rapidly closes in.".into(),
        ],
        exhausted: "There's nothing left to slash.".into(),
    }
}
