//! Every room of the gallery, lit and dark.

use lg_core::Direction::{
    Down, East, In, North, Northeast, Northwest, South, Southeast, Southwest, Up, West,
};
use lg_core::{Room, RoomId};

use crate::entities;
use crate::items;

/// Backstage room holding the mode controller. The player never stands
/// here.
pub const CONTROL_ROOM: RoomId = RoomId::new(0);
/// The title screen, played as a room.
pub const TITLE: RoomId = RoomId::new(1);
/// The reception room.
pub const RECEPTION: RoomId = RoomId::new(2);
/// The main chamber with the floor painting.
pub const MAIN_CHAMBER: RoomId = RoomId::new(3);
/// The northeastern V-shaped corridor, with the staircase.
pub const NORTH_CORRIDOR: RoomId = RoomId::new(4);
/// The southeastern V-shaped corridor.
pub const SOUTH_CORRIDOR: RoomId = RoomId::new(5);
/// The sculpture room with the rose garden.
pub const ROSE_ROOM: RoomId = RoomId::new(6);
/// The top of the staircase.
pub const STAIR_TOP: RoomId = RoomId::new(7);
/// The fenced hall of sculptures.
pub const SCULPTURE_HALL: RoomId = RoomId::new(8);
/// The corner of portraits.
pub const PORTRAIT_CORNER: RoomId = RoomId::new(9);
/// The eastern L-shaped corridor, lined with display tables.
pub const EAST_CORRIDOR: RoomId = RoomId::new(10);
/// The western L-shaped corridor, lined with placards.
pub const WEST_CORRIDOR: RoomId = RoomId::new(11);
/// The hushed connecting passage with the huge painting.
pub const DIM_PASSAGE: RoomId = RoomId::new(12);
/// The passage, after dark.
pub const DARK_PASSAGE: RoomId = RoomId::new(13);
/// The placard corridor, after dark.
pub const DARK_PLACARDS: RoomId = RoomId::new(14);
/// The portrait corner, after dark. The antagonist starts here.
pub const DARK_PORTRAITS: RoomId = RoomId::new(15);
/// The sculpture hall, after dark.
pub const DARK_SCULPTURES: RoomId = RoomId::new(16);
/// The display-table corridor, after dark.
pub const DARK_TABLES: RoomId = RoomId::new(17);
/// The stair top, after dark.
pub const DARK_STAIR_TOP: RoomId = RoomId::new(18);
/// The northeastern corridor, after dark.
pub const DARK_NORTH_CORRIDOR: RoomId = RoomId::new(19);
/// The rose room, after dark.
pub const DARK_ROSES: RoomId = RoomId::new(20);
/// The southeastern corridor, after dark.
pub const DARK_SOUTH_CORRIDOR: RoomId = RoomId::new(21);
/// The main chamber, after dark, with the hole in the floor.
pub const DARK_CHAMBER: RoomId = RoomId::new(22);
/// The reception room, after dark.
pub const DARK_RECEPTION: RoomId = RoomId::new(23);
/// The spiral staircase down.
pub const THE_DESCENT: RoomId = RoomId::new(24);
/// The bottom of the stairs, where the game ends.
pub const THE_BOTTOM: RoomId = RoomId::new(25);

/// Every room, in id order.
pub fn all() -> Vec<Room> {
    vec![
        Room::new(CONTROL_ROOM, "Welcome to the control room.")
            .with_entity(entities::CONTROLLER),
        Room::new(
            TITLE,
            "LOST IN GALLERY\n\
             a game inspired by 'Ib'\n\
             \nNot intended for children or those of a nervous disposition\n\
             \nCommands:\n\
             DIRECTION: Move in that direction.  (For example: N means go North.)\n\
             LOOK X: Look at object X.  (For example: LOOK CHAIR to look at CHAIR.)  (This works on objects in your inventory.)\n\
             GET X: Get object X, if you can.  (For example: GET PEN to get a PEN.)\n\
             USE X: Use object X, if you can.  (For example: USE PEN to use a PEN.)  (This works on objects in your inventory.)\n\
             USE X ON Y: Use object X from your inventory on object Y in the environment.  (For example: USE PEN ON PAPER.)\n\
             ITEMS: Look at what you're currently carrying.\n\
             TALK X: Try to strike up a conversation with person X.\n\
             HELP: See the list of commands again.\n\
             Commands are case insensitive.\n\
             \nType IN to begin.",
        )
        .with_exit(In, RECEPTION),
        Room::new(
            RECEPTION,
            "The gallery's reception room is a spartan, white chamber with a hard wooden floor, every inch illuminated by glowing lights\n\
             that seem to fade into the ceiling.  Looking through the glass doors, you can see the city's constant activity rushing by;\n\
             on the other side of the threshold lies the gallery proper, an expertly arranged stream of rooms filled with\n\
             all manner of bizarre works.",
        )
        .with_item(items::GLASS_DOORS)
        .with_item(items::POSTER)
        .with_entity(entities::MOTHER)
        .with_entity(entities::FATHER)
        .with_entity(entities::RECEPTIONIST)
        .with_exit(East, MAIN_CHAMBER),
        Room::new(
            MAIN_CHAMBER,
            "This spacious chamber's floor is nearly consumed by a massive artwork laid out flat along its center, surrounded by ropes.\n\
             A pathway is laid out around it, allowing visitors to pass through the room and examine the only slightly smaller canvases\n\
             laid out along the walls.  A gentle murmur comes up from the mostly silent spectators crowded around the paintings.",
        )
        .with_item(items::QUICKSAND)
        .with_item(items::VORTEX)
        .with_exit(West, RECEPTION)
        .with_exit(Northeast, NORTH_CORRIDOR)
        .with_exit(Southeast, SOUTH_CORRIDOR),
        Room::new(
            NORTH_CORRIDOR,
            "A V-shaped corridor connects the main chamber with a smaller chamber to the east, split in two by a tall, even staircase\n\
             that twists upwards towards the gallery's second floor.  Various small paintings line the walls, and a visitor walks by\n\
             every now and again, marveling at some canvas or another.",
        )
        .with_item(items::GALAXY)
        .with_exit(Southwest, MAIN_CHAMBER)
        .with_exit(Southeast, ROSE_ROOM)
        .with_exit(Up, STAIR_TOP),
        Room::new(
            SOUTH_CORRIDOR,
            "A V-shaped corridor connects the main chamber with a smaller chamber to the east.\n\
             Several small paintings line the walls, along with hooks and similar fixtures on the ceiling, one of which holds a piece.",
        )
        .with_item(items::HANGED_DOLL)
        .with_entity(entities::VISITOR)
        .with_exit(Northwest, MAIN_CHAMBER)
        .with_exit(Northeast, ROSE_ROOM),
        Room::new(
            ROSE_ROOM,
            "This smaller chamber seems to be allocated for works of sculpture too heavy or cumbersome to move upstairs.\n\
             A few mannequins and ceramic bunnies line the walls, and in the center of the chamber is an artificial rose garden.\n\
             The management even scented this room with roses, to complement the illusion.",
        )
        .with_item(items::ROSE_GARDEN)
        .with_item(items::SELFIE_STICK)
        .with_exit(Northwest, NORTH_CORRIDOR)
        .with_exit(Southwest, SOUTH_CORRIDOR),
        Room::new(
            STAIR_TOP,
            "The top of the staircase contains no artworks; it's simply a transitory space between the two floors of the gallery.\n\
             Two windows at the top of the stairs allow natural light to stream into the room, giving a lovely view of the city below.",
        )
        .with_entity(entities::BORED_MAN)
        .with_exit(East, SCULPTURE_HALL)
        .with_exit(Down, NORTH_CORRIDOR),
        Room::new(
            SCULPTURE_HALL,
            "This chamber is split into walkways by a metal fencing, splitting off the visitors from several displays of abstract,\n\
             ghastly sculptures.  An occasional visitor gawks at the sight as they walk by.  You feel like your parents might have\n\
             objected to your going alone if they knew this was up here.",
        )
        .with_item(items::MISERY)
        .with_entity(entities::SCHOLAR)
        .with_exit(West, STAIR_TOP)
        .with_exit(South, EAST_CORRIDOR)
        .with_exit(East, PORTRAIT_CORNER),
        Room::new(
            PORTRAIT_CORNER,
            "Paintings in ornamental frames line the walls in this corner of the gallery, depicting a variety of life-like scenes;\n\
             you can make out a still life in one corner, and just a few paintings to the right, a woman shushing her child as they\n\
             enthusiastically admire a painting of a cat.  The floor is bare, and the chamber comfortably airy.",
        )
        .with_item(items::LADY_PORTRAIT)
        .with_entity(entities::TALL_WOMAN)
        .with_exit(West, SCULPTURE_HALL)
        .with_exit(South, WEST_CORRIDOR),
        Room::new(
            EAST_CORRIDOR,
            "This L-shaped corridor leads around to the eastern side of the gallery's second floor.\n\
             The walls are lined with display tables, upon which rest a variety of small abstract sculptures.",
        )
        .with_item(items::DISPLAY_TABLE)
        .with_exit(North, SCULPTURE_HALL)
        .with_exit(East, DIM_PASSAGE),
        Room::new(
            WEST_CORRIDOR,
            "This L-shaped corridor leads around to the western side of the gallery's second floor.\n\
             This room's seemingly dedicated to Alacandre's history; there's numerous paintings with drastically differing\n\
             styles, separated by huge placards.",
        )
        .with_item(items::PLACARDS)
        .with_exit(North, PORTRAIT_CORNER)
        .with_exit(West, DIM_PASSAGE),
        Room::new(
            DIM_PASSAGE,
            "This connecting corridor is completely empty except for a single, huge painting.\n\
             As you enter, the gentle sounds of visitors moving about fade completely.",
        )
        .with_item(items::UNTITLED)
        .with_exit(West, DARK_TABLES)
        .with_exit(East, DARK_PLACARDS),
        Room::new(
            DARK_PASSAGE,
            "This connecting corridor is completely empty except for a single, huge painting.\n\
             Paint slowly but steadily drips from behind the painting.",
        )
        .with_item(items::DARK_UNTITLED)
        .with_exit(West, DARK_TABLES)
        .with_exit(East, DARK_PLACARDS),
        Room::new(
            DARK_PLACARDS,
            "This L-shaped corridor leads around to the western side of the gallery's second floor.\n\
             This room's seemingly dedicated to Alacandre's history; there's numerous paintings with drastically differing\n\
             styles, separated by huge placards.",
        )
        .with_item(items::DARK_PLACARDS)
        .with_exit(North, DARK_PORTRAITS)
        .with_exit(West, DARK_PASSAGE),
        Room::new(
            DARK_PORTRAITS,
            "Paintings in ornamental frames line the walls in this corner of the gallery, depicting a variety of life-like scenes;\n\
             you can make out a still life in one corner, and a few paintings to the right, a painting of a cat, meowing plaintively.\n\
             The floor is bare, the air still and cold.\n\
             The painting of the woman with claws is missing from the wall.",
        )
        .with_entity(entities::LADY)
        .with_exit(West, DARK_SCULPTURES)
        .with_exit(South, DARK_PLACARDS),
        Room::new(
            DARK_SCULPTURES,
            "This chamber is split into walkways by a metal fencing, splitting off the visitors from several displays of abstract,\n\
             ghastly sculptures.",
        )
        .with_item(items::DARK_MISERY)
        .with_exit(West, DARK_STAIR_TOP)
        .with_exit(South, DARK_TABLES)
        .with_exit(East, DARK_PORTRAITS),
        Room::new(
            DARK_TABLES,
            "This L-shaped corridor leads around to the eastern side of the gallery's second floor.\n\
             The walls are lined with display tables, upon which rest a variety of small abstract sculptures.",
        )
        .with_exit(North, DARK_SCULPTURES)
        .with_exit(East, DARK_PASSAGE),
        Room::new(
            DARK_STAIR_TOP,
            "The top of the staircase contains no artworks; it's simply a transitory space between the two floors of the gallery.\n\
             Two windows at the top of the stairs open onto nothingness, their outsides dripping with a thick liquid.",
        )
        .with_exit(East, DARK_SCULPTURES)
        .with_exit(Down, DARK_NORTH_CORRIDOR),
        Room::new(
            DARK_NORTH_CORRIDOR,
            "A V-shaped corridor connects the main chamber with a smaller chamber to the east, split in two by a tall, even staircase\n\
             that twists upwards towards the gallery's second floor.  Various small paintings line the walls.",
        )
        .with_item(items::DARK_GALAXY)
        .with_exit(Southwest, DARK_CHAMBER)
        .with_exit(Southeast, DARK_ROSES)
        .with_exit(Up, DARK_STAIR_TOP),
        Room::new(
            DARK_ROSES,
            "This smaller chamber seems to be allocated for works of sculpture too heavy or cumbersome to move upstairs.\n\
             A few mannequins and ceramic bunnies line the walls, and in the center of the chamber is a rose garden.\n\
             The scent of roses emanates from the garden.",
        )
        .with_item(items::DARK_ROSE_GARDEN)
        .with_exit(Northwest, DARK_NORTH_CORRIDOR)
        .with_exit(Southwest, DARK_SOUTH_CORRIDOR),
        Room::new(
            DARK_SOUTH_CORRIDOR,
            "A V-shaped corridor connects the main chamber with a smaller chamber to the east.\n\
             Several small paintings line the walls, along with hooks and similar fixtures on the ceiling.\n\
             Innumerable sickeningly lifelike dolls hang from the ceiling, bodies pierced through hooks.",
        )
        .with_exit(Northwest, DARK_CHAMBER)
        .with_exit(Northeast, DARK_ROSES),
        Room::new(
            DARK_CHAMBER,
            "This spacious chamber's floor has a massive hole in it, an abyss seemingly without end.  You can't see the bottom of it.\n\
             A spiral staircase twirls away into infinity, its ragged stone steps leading down towards an unknown destination.\n\
             There's enough room around the hole to walk around it and traverse the chamber.",
        )
        .with_item(items::DARK_QUICKSAND)
        .with_exit(West, DARK_RECEPTION)
        .with_exit(Northeast, DARK_NORTH_CORRIDOR)
        .with_exit(Southeast, DARK_SOUTH_CORRIDOR)
        .with_exit(Down, THE_DESCENT),
        Room::new(
            DARK_RECEPTION,
            "The gallery's reception room is a spartan, white chamber with a hard wooden floor, cast into shadow.\n\
             There's nothing in the room but a poster and an empty desk.\n\
             Looking through the glass doors, you can't see anything at all.",
        )
        .with_item(items::DARK_DOORS)
        .with_exit(East, DARK_CHAMBER),
        Room::new(
            THE_DESCENT,
            "A dizzying abyss spirals out below you, cold blue stone leading towards a still unseeable destination.\n\
             There's nothing here but a stone spiral stair, lacking anything that could be described as a safety railing.",
        )
        .with_exit(Up, DARK_RECEPTION)
        .with_exit(Down, THE_BOTTOM),
        Room::new(THE_BOTTOM, "The stairs go on and on...").with_entity(entities::ENDING),
    ]
}
