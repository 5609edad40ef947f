//! Every item in the gallery.
//!
//! Several works hang in both the lit and dark galleries; the dark copies
//! get their own ids so every item is owned by exactly one room at a time.

use lg_core::{Effect, Item, ItemId, Reaction, UseScript};

use crate::rooms;

/// The reception's glass doors.
pub const GLASS_DOORS: ItemId = ItemId::new(0);
/// The exhibition poster above the reception desk.
pub const POSTER: ItemId = ItemId::new(1);
/// The wall painting of the drowning girl.
pub const QUICKSAND: ItemId = ItemId::new(2);
/// The floor painting of the endless staircase.
pub const VORTEX: ItemId = ItemId::new(3);
/// The painting of the melting planet.
pub const GALAXY: ItemId = ItemId::new(4);
/// The ragdoll hung from the ceiling.
pub const HANGED_DOLL: ItemId = ItemId::new(5);
/// The artificial rose garden.
pub const ROSE_GARDEN: ItemId = ItemId::new(6);
/// The selfie stick some litterer dropped.
pub const SELFIE_STICK: ItemId = ItemId::new(7);
/// The sculpture group with inverted faces.
pub const MISERY: ItemId = ItemId::new(8);
/// The portrait of the clawed lady, while it still hangs.
pub const LADY_PORTRAIT: ItemId = ItemId::new(9);
/// The askew display table hiding the knife.
pub const DISPLAY_TABLE: ItemId = ItemId::new(10);
/// The palette knife, once pulled free.
pub const PALETTE_KNIFE: ItemId = ItemId::new(11);
/// The placards on Alacandre's history.
pub const PLACARDS: ItemId = ItemId::new(12);
/// The enormous untitled painting.
pub const UNTITLED: ItemId = ItemId::new(13);
/// The placards, after dark.
pub const DARK_PLACARDS: ItemId = ItemId::new(14);
/// The sculpture group, after dark.
pub const DARK_MISERY: ItemId = ItemId::new(15);
/// The rose garden, after dark.
pub const DARK_ROSE_GARDEN: ItemId = ItemId::new(16);
/// The glass doors, after dark.
pub const DARK_DOORS: ItemId = ItemId::new(17);
/// The drowning-girl painting, hung again in the dark chamber.
pub const DARK_QUICKSAND: ItemId = ItemId::new(18);
/// The melting planet, hung again in the dark corridor.
pub const DARK_GALAXY: ItemId = ItemId::new(19);
/// The untitled painting, after dark.
pub const DARK_UNTITLED: ItemId = ItemId::new(20);

/// Every item, in id order.
pub fn all() -> Vec<Item> {
    vec![
        Item::scenery(
            GLASS_DOORS,
            "GLASS DOORS",
            "These bright, stylish glass doors lead out of the gallery.",
            "GLASS DOORS at the far end of the room lead outside.",
        )
        .with_aliases(["DOORS"])
        .with_use(UseScript::print(
            "You and your parents just got here.  You probably shouldn't run outside on your own...",
        )),
        Item::scenery(
            POSTER,
            "ALACANDRE POSTER",
            "The poster advertises a local exhibition featuring the work of an obscure artist named 'Gregor Alacandre'.\n\
             It features a reproduction of one of his works: a spiral staircase descending into an infinite darkness.",
            "A POSTER is affixed to the wall above the reception desk, featuring a somber illustration.",
        )
        .with_aliases(["POSTER"]),
        Item::scenery(
            QUICKSAND,
            "QUICKSAND",
            "In deathly hues of brown and red, the canvas depicts a young, muddy girl in tattered clothing being dragged\n\
             into an open void by innumerable hands, while passerby pointedly ignore the scene before them.",
            "A huge painting across one wall depicts a screaming girl dragged down by hands.  Its title is QUICKSAND.",
        )
        .with_aliases(["WALL PAINTING"]),
        Item::scenery(
            VORTEX,
            "VORTEX",
            "A somber work in blues and blacks, a spiral staircase made of worn stone descends infinitely.\n\
             It goes so far down, the end simply fades into darkness.  In fact, it's not clear that there is an end.\n\
             Even though it's just a painting, looking down at it makes you feel dizzy...",
            "The canvas on the floor depicts an infinite spiral staircase into darkness.  Its title is VORTEX.",
        )
        .with_aliases(["FLOOR PAINTING", "STAIRCASE PAINTING"]),
        Item::scenery(
            GALAXY,
            "GALAXY OF TERROR",
            "In the center of the canvas, a wracked and ruined planet Earth melts slowly, dripping into black space.\n\
             A few other planets are painted on the very edges, as though recoiling from the horrific sight.",
            "A striking painting on one wall depicts a melting planet Earth.  Its title is GALAXY OF TERROR.",
        )
        .with_aliases(["GALAXY", "TERROR", "PLANET PAINTING", "EARTH PAINTING"]),
        Item::scenery(
            HANGED_DOLL,
            "AN END",
            "A ragdoll fashioned in the likeness of a man hangs from the ceiling, suspended upside down by its ankle.\n\
             It's dressed in a slightly dated men's fashion, up to a little metal wristwatch about one hand.\n\
             Somehow, an utter terror has been expressed within the doll's desperate little button eyes.",
            "A crude doll hangs from the ceiling by a red rope.  A nearby placard reads AN END.",
        )
        .with_aliases(["END", "HANGED MAN"]),
        Item::scenery(
            ROSE_GARDEN,
            "ROSE GARDEN",
            "This small, makeshift garden is completely occupied with artificial roses, seemingly hand-crafted,\n\
             in every color of the rainbow.  Upon closer inspection, their centers are cutely curved into heart shapes.",
            "An array of huge artificial roses occupies the chamber.  Its placard reads ROSE GARDEN.",
        )
        .with_aliases(["ROSE", "GARDEN", "ROSES"]),
        Item::scenery(
            SELFIE_STICK,
            "SELFIE STICK",
            "A light handheld stick designed for holding a smartphone while taking a picture of oneself.\n\
             It's in a fashionable black and metallic finish, with a prong on the end for gripping things.",
            "Some litterer has carelessly left what looks like a SELFIE STICK on the ground here.",
        )
        .with_aliases(["STICK"])
        .portable()
        .with_use(UseScript {
            effects: vec![Effect::PrintByMode {
                light: "You pose with your selfie stick!\n\
                        With no phone on it.\n\
                        You promptly feel silly and put it away again."
                    .into(),
                dark: "You hold the stick nervously out in front of you.\n\
                       But it's far too flimsy to act as a weapon."
                    .into(),
            }],
        }),
        Item::scenery(
            MISERY,
            "MISERY LOVES COMPANY",
            "Within the center of this room cluster multiple statues of men in colored suits.  Their faces are turned inside out,\n\
             pressing into their heads; if you peer enough, you can see their eyes dilated, faces twisted into an expression of\n\
             utter pleasure at their shared condition.",
            "Behind the fence are sculptures with inverted faces, visages twisted in euphoria.  The placard reads MISERY LOVES COMPANY.",
        )
        .with_aliases([
            "MISERY",
            "COMPANY",
            "STATUES",
            "SCULPTURE",
            "OBSCENE SCULPTURE",
            "OBSCENE STATUE",
            "GHASTLY SCULPTURE",
        ]),
        Item::scenery(
            LADY_PORTRAIT,
            "LADY WITH RED NAILS",
            "Against a shadowy background, the painting depicts a demure, smiling noblewoman with long, cascading hair.\n\
             There's a knowing, mischievous look in her eyes, and one corner of her mouth turns up slightly into a little smirk.\n\
             She's tightly arrayed in a fine, frilly dress, almost Victorian in nature but with concessions to modern fashion.\n\
             If you look to the bottom of the painting, you can just see vicious blood-red claws hidden beneath her sleeves.",
            "In the center of one wall is a painting of a beautifully dressed woman with blood-red claws.  Its title is LADY WITH RED NAILS.",
        )
        .with_aliases([
            "LADY",
            "RED",
            "NAILS",
            "LADY PORTRAIT",
            "WOMAN PORTRAIT",
            "LADY PAINTING",
        ]),
        Item::scenery(
            DISPLAY_TABLE,
            "DISPLAY TABLE",
            "This display table exhibits a variety of sculptures designed with colored glass; a light shines through from beneath the table,\n\
             casting rainbow patterns in all sorts of shapes across the gallery's white ceiling.\n\
             Looking closer, you can see a gleaming, metallic object wedged between the display table and the wall.",
            "One DISPLAY TABLE isn't properly aligned with the wall, and sits very slightly askew.",
        )
        .with_aliases(["DISPLAY", "TABLE"])
        .with_use(UseScript::print(
            "You try to reach behind the display table and take the gleaming object, but it's just too far.\n\
             Your arms can't reach that far...",
        ))
        .with_reaction(
            "SELFIE STICK",
            Reaction {
                effects: vec![
                    Effect::Print(
                        "Sliding your selfie stick into the gap between the wall and the table, you manage to get the grip behind the gleaming object.\n\
                         Tugging forwards, you forcefully pull the object out from the wall, sending it skittering across the floor."
                            .into(),
                    ),
                    Effect::RevealItem {
                        room: rooms::EAST_CORRIDOR,
                        item: PALETTE_KNIFE,
                    },
                    Effect::SetItemUse {
                        item: DISPLAY_TABLE,
                        script: UseScript::print("There's no longer anything behind the table."),
                    },
                    Effect::SetReaction {
                        item: DISPLAY_TABLE,
                        key: "SELFIE STICK".into(),
                        reaction: Reaction::print(
                            "There's no longer anything behind the table to pull out.",
                        ),
                    },
                ],
            },
        ),
        Item::scenery(
            PALETTE_KNIFE,
            "PALETTE KNIFE",
            "A large palette knife with a blade just clear enough to gleam in a bright light.  Its wedge-like shape\n\
             is meant for spreading paint, but the edge feels a bit sharper than a tool like this ought to be.",
            "There's a PALETTE KNIFE lying on the floor, strangely ominous.",
        )
        .with_aliases(["KNIFE", "BLADE"])
        .portable()
        .with_use(UseScript {
            effects: vec![Effect::PrintByMode {
                light: "You shouldn't swing that around carelessly.  It's pretty blunt, but you could still hurt somebody..."
                    .into(),
                dark: "You brandish the palette knife!  The gallery seems to almost shrink back about you.".into(),
            }],
        }),
        Item::scenery(
            PLACARDS,
            "LARGE PLACARDS",
            "The placards describe Gregor Alacandre as a morose, macabre artist of Spanish origin, who spent much of his life\n\
             struggling with mental illness.  He had even spent time in an insane asylum in his early years, a traumatic\n\
             experience which gave him a lifelong fear of women.\n\
             He lived in poverty, working feverishly on his art and taking inspiration from anything he can,\n\
             believing wholeheartedly that if he put his spirit into his work, his efforts would one day be recognized.\n\
             He was ultimately proved correct, but tragically, many of his works' true value was only realized after his premature death.",
            "A number of LARGE PLACARDS are affixed to the walls, displaying information about the history of Alacandre.",
        )
        .with_aliases(["PLACARDS", "PLACARD"]),
        Item::scenery(
            UNTITLED,
            "UNTITLED",
            "This massive painting, in darkest blacks and nightmarish, striking red lines, seems to depict some kind of\n\
             dark art gallery.  Many of Alacandre's own works have been reproduced in miniature within, but there's no people about.\n\
             For whatever reason, some of the painting's details seem eerily familiar to you.",
            "There's an enormous painting across the entire wall.  Its title is UNTITLED.",
        )
        .with_aliases(["PAINTING", "GIANT PAINTING"]),
        Item::scenery(
            DARK_PLACARDS,
            "LARGE PLACARDS",
            "come down below\n\
             come down below\n\
             come down below\n\
             come down below\n\
             i want to show you something",
            "A number of LARGE PLACARDS are affixed to the walls, displaying information.",
        )
        .with_aliases(["PLACARDS", "PLACARD"]),
        Item::scenery(
            DARK_MISERY,
            "MISERY LOVES COMPANY",
            "Within the center of this room cluster multiple statues of men in colored suits.  Their faces are turned inside out,\n\
             pressing into their heads; if you peer enough, you can see their eyes dilated, faces twisted into an expression of\n\
             utter pleasure at their shared condition.  Every so often, they let out a mindless giggle.",
            "Behind the fence are sculptures with inverted faces, eyes tracking your movements.  The placard reads MISERY LOVES COMPANY.",
        )
        .with_aliases([
            "MISERY",
            "COMPANY",
            "STATUES",
            "SCULPTURE",
            "OBSCENE SCULPTURE",
            "OBSCENE STATUE",
            "GHASTLY SCULPTURE",
        ]),
        Item::scenery(
            DARK_ROSE_GARDEN,
            "ROSE GARDEN",
            "This small, makeshift garden is completely occupied with roses, too beautiful almost to be real,\n\
             in every color of the rainbow.  Upon closer inspection, their centers are cutely curved into heart shapes.",
            "An array of huge roses occupies the chamber.  Its placard reads ROSE GARDEN.",
        )
        .with_aliases(["ROSE", "GARDEN", "ROSES"]),
        Item::scenery(
            DARK_DOORS,
            "GLASS DOORS",
            "These glass doors lead towards an endless nothing.  Looking at it hurts your eyes.",
            "GLASS DOORS at the far end of the room lead to nothingness.",
        )
        .with_aliases(["DOORS"])
        .with_use(UseScript::print(
            "You grab the doors' handles and pull as hard as you can, but it doesn't even budge.",
        )),
        Item::scenery(
            DARK_QUICKSAND,
            "QUICKSAND",
            "In deathly hues of brown and red, the canvas depicts a young, muddy girl in tattered clothing being dragged\n\
             into an open void by innumerable hands, while passerby pointedly ignore the scene before them.",
            "A huge painting across one wall depicts a screaming girl dragged down by hands.  Its title is QUICKSAND.",
        )
        .with_aliases(["WALL PAINTING"]),
        Item::scenery(
            DARK_GALAXY,
            "GALAXY OF TERROR",
            "In the center of the canvas, a wracked and ruined planet Earth melts slowly, dripping into black space.\n\
             A few other planets are painted on the very edges, as though recoiling from the horrific sight.",
            "A striking painting on one wall depicts a melting planet Earth.  Its title is GALAXY OF TERROR.",
        )
        .with_aliases(["GALAXY", "TERROR", "PLANET PAINTING", "EARTH PAINTING"]),
        Item::scenery(
            DARK_UNTITLED,
            "UNTITLED",
            "This massive painting, in darkest blacks and nightmarish, striking red lines, seems to depict some kind of\n\
             dark art gallery.  Many of Alacandre's own works have been reproduced in miniature within, but there's no people about.\n\
             For whatever reason, some of the painting's details seem eerily familiar to you.",
            "There's an enormous painting across the entire wall.  Its title is UNTITLED.",
        )
        .with_aliases(["PAINTING", "GIANT PAINTING"]),
    ]
}
