//! The player as authored: a small girl visiting the gallery with her
//! parents, and the toll the dark gallery takes on her.

use lg_core::{Appearance, InjuryStage, PlayerState};

/// The player at the start of the visit.
pub fn starting_player() -> PlayerState {
    PlayerState::new(
        Appearance {
            general: "You're a young girl of about seven or eight, with bright eyes beneath long brown tresses that gleam cheerfully at passerby."
                .into(),
            clothing: "Your dress is lacy and black, about knee-length, with a neat white bow around your neck."
                .into(),
            condition: "You have a plain bandage on your left cheek, from a cut you got playing outside."
                .into(),
        },
        vec![
            InjuryStage {
                hp: 4,
                clothing: "Your dress is lacy and black, about knee-length, with a neat white bow around your neck.  There's a bloody slash through its shoulder."
                    .into(),
                condition: "A deep wound across your shoulder slowly drools blood.".into(),
            },
            InjuryStage {
                hp: 3,
                clothing: "Your dress is lacy and black, about knee-length, with a neat white bow around your neck.  There's multiple gashes through it."
                    .into(),
                condition: "There are several deep gashes across your body, slowly drooling blood.".into(),
            },
            InjuryStage {
                hp: 2,
                clothing: "Your dress is lacy and black, about knee-length, with a neat white bow around your neck.  There's many gashes through it."
                    .into(),
                condition: "Your form is completely lacerated with deep, bloody gashes.  You stumble every so often as you try to walk."
                    .into(),
            },
            InjuryStage {
                hp: 1,
                clothing: "Your dress is nearly shredded, drenched in your own blood.  The bow's white coloration is no longer obvious."
                    .into(),
                condition: "You've lost track of your own injuries.  All you can do is stumble forward and hope your body doesn't give out."
                    .into(),
            },
        ],
    )
}
