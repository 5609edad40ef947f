//! Everyone who lives in the gallery, visible or otherwise.

use lg_core::{Entity, EntityId, EntityReaction, EntityUpdate, Routine};

use crate::rooms;

/// The player's mother.
pub const MOTHER: EntityId = EntityId::new(0);
/// The player's father.
pub const FATHER: EntityId = EntityId::new(1);
/// The gallery receptionist.
pub const RECEPTIONIST: EntityId = EntityId::new(2);
/// The visitor in the ragged coat.
pub const VISITOR: EntityId = EntityId::new(3);
/// The bored man by the window.
pub const BORED_MAN: EntityId = EntityId::new(4);
/// The scholarly man among the sculptures.
pub const SCHOLAR: EntityId = EntityId::new(5);
/// The tall woman admiring the portrait.
pub const TALL_WOMAN: EntityId = EntityId::new(6);
/// The invisible controller that plunges the gallery into darkness.
pub const CONTROLLER: EntityId = EntityId::new(7);
/// The Lady With Red Nails, out of her frame.
pub const LADY: EntityId = EntityId::new(8);
/// The invisible gate that ends the game at the bottom of the stairs.
pub const ENDING: EntityId = EntityId::new(9);

/// Every entity, in registration (and therefore scheduling) order.
pub fn all() -> Vec<Entity> {
    vec![
        Entity::new(MOTHER, "MOTHER", rooms::RECEPTION)
            .with_aliases(["MOM", "MOMMY"])
            .with_description(
                "A beautiful woman with rich brown hair tightly done up into a bun, only the deep circles about her eyes betray her age.\n\
                 She's wearing the long, velvety black gown she keeps in a plastic bag in the closet,\n\
                 and rarely has brought out for very special occasions.\n\
                 Every now and again, she glances about the room with slight concern, making sure she knows where you are.",
            )
            .with_place_text(
                "Your MOTHER is standing at the reception desk, talking through some trivial matter with the gallery's receptionist.",
            )
            .with_dialogue(
                "Yes, a party of three...\n  Oh!  Just a moment, dear.  We'll be inside the gallery if you can wait just a bit longer!\n\
                 I'm sure you'll love it.  They have beautiful paintings and all sorts of wonderful things to look at...\n\
                 Hm?  You want to run on ahead?\n\
                 Oh, I suppose that's fine.  Just try not to make too much noise, or bother the other guests.",
            )
            .with_routine(Routine::AmbientUntil {
                line: "Your MOTHER is still carrying on a discussion with the receptionist.".into(),
                threshold: rooms::MAIN_CHAMBER,
                update: EntityUpdate::new()
                    .move_to(rooms::MAIN_CHAMBER)
                    .place_text(
                        "Your MOTHER is standing by the velvet ropes, gazing down at the painting on the floor.",
                    )
                    .dialogue(
                        "Hello again, dear.  Have you been enjoying the gallery?  Everything is just as lovely as I imagined.\n\
                         Alacandre always used such vivid colors!  The magazines really don't do his work any justice.\n\
                         Don't you just feel like you could fall into this painting on the floor here?",
                    )
                    .routine(Routine::Ambient {
                        line: "Your MOTHER stares into the depths of the floor painting.".into(),
                    }),
            }),
        Entity::new(FATHER, "FATHER", rooms::RECEPTION)
            .with_aliases(["DAD"])
            .with_description(
                "An awkwardly tall man with short-cropped hair and fingers worn from tireless years of administrative work.\n\
                 His eyes flicker about, always looking at anything and everything, yet afraid to settle on any single thing for too long.\n\
                 His suit is worn and tired, however much he might try to hide it through his poise.",
            )
            .with_place_text("Your FATHER is standing by the reception desk, flipping through pamphlets.")
            .with_dialogue(
                "Oh!  Hello there.  Isn't this gallery amazing?  ...Well, heh, I suppose we haven't actually gone in yet!\n\
                 I'm getting excited just from reading this material.  The man's got quite the history, you know.\n\
                 He was one of those 'mad artist' sorts.  Always the eccentric, led a terribly difficult life...\n\
                 And now that he's dead, they hype him up as a misunderstood genius to paste a few zeroes on his work.\n\
                 Sad story, isn't it?  But he really was an incredible artist.  Seeing his work like this is a once-in-a-lifetime opportunity.",
            )
            .with_routine(Routine::AmbientUntil {
                line: "Your FATHER takes a pamphlet from the table and tucks it into his pocket.".into(),
                threshold: rooms::MAIN_CHAMBER,
                update: EntityUpdate::new()
                    .move_to(rooms::MAIN_CHAMBER)
                    .place_text("Your FATHER is marveling at the large painting hung up on the wall.")
                    .dialogue(
                        "Hello there!  Isn't this gallery amazing?  Worth the trip, certainly.\n\
                         This painting on the wall...  The one called 'Quicksand'.  Do you understand what the painting means?\n\
                         ...That's okay.  Neither do I!",
                    )
                    .routine(Routine::Ambient {
                        line: "Your FATHER remarks on some trivial tidbit within one of his pamphlets.".into(),
                    }),
            }),
        Entity::new(RECEPTIONIST, "RECEPTIONIST", rooms::RECEPTION)
            .with_aliases(["SECRETARY"])
            .with_description(
                "A woman in a heavy jacket sits at the reception desk, occasionally brushing a strand of prematurely gray hair from their face.\n\
                 She gives an occasional, exhausted smile to passerby, seeming permanently stunned by the activity roaring through the gallery.",
            )
            .with_place_text("A RECEPTIONIST is seated at a desk to the side of the room.")
            .with_dialogue("Your mother shushes you as you attempt to get the receptionist's attention.")
            .with_routine(Routine::AmbientUntil {
                line: "The RECEPTIONIST nods once or twice, typing rapidly into their computer.".into(),
                threshold: rooms::MAIN_CHAMBER,
                update: EntityUpdate::new()
                    .dialogue(
                        "Oh.  Hey, kid.  Looking for your parents?\n\
                         They're in the room just to your right.\n\
                         ...Maybe you aren't?  I don't know how you'd have missed them.",
                    )
                    .routine(Routine::Ambient {
                        line: "The RECEPTIONIST types rapidly into their computer.".into(),
                    }),
            }),
        Entity::new(VISITOR, "RAGGED VISITOR", rooms::SOUTH_CORRIDOR)
            .with_aliases(["VISITOR"])
            .with_description(
                "Gazing upwards with worried eyes, a visitor dressed in a torn, raggedy coat stands idly, their hands in their pockets.\n\
                 Their hair's dyed a purplish blue, but it looks like they might have done it themselves and missed a few spots.",
            )
            .with_place_text("A RAGGED VISITOR is staring up at the doll hung from the ceiling.")
            .with_dialogue(
                "They don't notice you trying to get their attention.  It seems they're completely absorbed in the artwork.",
            )
            .with_routine(Routine::Ambient {
                line: "The RAGGED VISITOR just stares upwards, sadly.".into(),
            }),
        Entity::new(BORED_MAN, "BORED MAN", rooms::STAIR_TOP)
            .with_aliases(["BORED", "MAN"])
            .with_description(
                "A tired-looking man in a longcoat is leaning against a wall, staring wistfully out of one of the windows.\n\
                 They shift their gaze to follow the activity outside, yawning a bit.  They don't seem like they want to be here.",
            )
            .with_place_text("A BORED MAN leans against the wall by a window.")
            .with_dialogue(
                "They look over at you for a moment as you try to get their attention, but turn back to the window, ignoring you.",
            )
            .with_routine(Routine::Ambient {
                line: "The BORED MAN shuffles and makes tired noises.".into(),
            }),
        Entity::new(SCHOLAR, "SCHOLARLY MAN", rooms::SCULPTURE_HALL)
            .with_aliases(["SCHOLAR", "MAN"])
            .with_description(
                "A man with a short-cropped haircut, thick glasses, and a smart tweed jacket is walking happily around the room,\n\
                 carefully examining the various statues and writing absentmindedly in a tiny notepad with cute animal designs on\n\
                 the pages.  He's deeply absorbed in what seems to be his studies.",
            )
            .with_place_text("A SCHOLARLY MAN gazes at the statues in fascination, jotting down notes on a little pad.")
            .with_dialogue(
                "Why, hello there, little lady!  Let me guess.  You're fascinated by the great Gregor Alacandre's works too, hm?\n\
                 It's never too early to develop an appreciation for the fine arts, as far as I'm concerned.\n\
                 This work, the one called 'Misery Loves Company'...  it's beautiful, don't you agree?\n\
                 The detail in the statues' contorted faces is utterly terrifying, but I can't bring myself to look away.\n\
                 I've come to believe this sculpture must have been fashioned after businessmen with whom Alacandre was acquainted.\n\
                 The piece's meaning...  is that even when their situation is unimaginably banal and crushing, men would rather\n\
                 surround themselves with like-minded people and delude themselves into enjoying their own lives, than take a\n\
                 genuine effort to improve themselves.  Don't you think?",
            )
            .with_routine(Routine::Ambient {
                line: "The SCHOLARLY MAN paces around the room, admiring the statues' handiwork.".into(),
            }),
        Entity::new(TALL_WOMAN, "TALL WOMAN", rooms::PORTRAIT_CORNER)
            .with_aliases(["TALL", "WOMAN"])
            .with_description(
                "An exceptionally tall woman, with a brightly colored one-piece dress and skin nearly pitch black, is gazing at\n\
                 the paintings with a thoughtful expression on her face.  Every once in a while, she gracefully shifts her weight,\n\
                 body moving with a practiced ease.  Her curly hair's decorated with a lovely flower-like ornament.",
            )
            .with_place_text("There's a TALL WOMAN admiring the painting of the clawed lady.")
            .with_dialogue(
                "Hm.  Oh, hello down there!  It's a pleasure to meet you, young lady.\n\
                 Tell me, what do you think of this painting?  The one with the woman that has red claws?\n\
                 Alacandre was a true gynophobe.  He didn't hate women.  He just found women terrifying.\n\
                 This painting was meant to express that terror, and help the viewer understand his irrational paranoia.\n\
                 But, personally?  I think the monstrous features complement the figure's beauty.\n\
                 Hm.  Do you think the piece was based on a real person?",
            )
            .with_routine(Routine::Ambient {
                line: "The TALL WOMAN walks about the room, stretching her legs.".into(),
            }),
        Entity::new(CONTROLLER, "", rooms::CONTROL_ROOM).with_routine(Routine::DarknessTrigger {
            threshold: rooms::DIM_PASSAGE,
            announcement: "Suddenly, the lights flicker and go out, plunging the gallery into darkness."
                .into(),
            player_look: "You're a young girl of about seven or eight, with fearful but determined eyes beneath long brown tresses."
                .into(),
        }),
        Entity::new(LADY, "LADY WITH RED NAILS", rooms::DARK_PORTRAITS)
            .with_aliases([
                "LADY",
                "RED",
                "NAILS",
                "LADY PORTRAIT",
                "WOMAN PORTRAIT",
                "LADY PAINTING",
            ])
            .with_description(
                "A frantic noblewoman with long hair cascading over her shoulders and a massive grin is halfway out of a painting frame,\n\
                 digging her lethal blood-red claws into the ground and dragging her body forwards.\n\
                 She's tightly arrayed in a fine, frilly dress, almost Victorian in nature but with concessions to modern fashion.\n\
                 Her body is completely made of thick paint, and as you look at her, she stares into your eyes with pure animal excitement.",
            )
            .with_place_text("The LADY WITH RED NAILS digs her claws into the ground and tenses up, preparing to strike.")
            .with_dialogue(
                "As you try to talk to her, the Lady's mouth splits into a wicked grin; she leaps forward and attacks while you're vulnerable.",
            )
            .with_reaction("PALETTE KNIFE", EntityReaction::WeaponStrike)
            .with_routine(Routine::Stalker { awake: false }),
        Entity::new(ENDING, "", rooms::THE_BOTTOM).with_routine(Routine::EndingGate),
    ]
}
