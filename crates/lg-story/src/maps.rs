//! The two adjacency maps pursuit can run on.
//!
//! Only rooms an entity could stand in appear; the control room, the title
//! screen, and the descent are not part of either map. The dark map is the
//! one the antagonist actually hunts on.

use lg_core::RoomGraph;

use crate::rooms;

/// The lit gallery. Unused by the current cast, kept for symmetry with the
/// dark map.
pub fn light_map() -> RoomGraph {
    RoomGraph::new()
        .with_node(rooms::RECEPTION, [rooms::MAIN_CHAMBER])
        .with_node(
            rooms::MAIN_CHAMBER,
            [rooms::RECEPTION, rooms::NORTH_CORRIDOR, rooms::SOUTH_CORRIDOR],
        )
        .with_node(
            rooms::NORTH_CORRIDOR,
            [rooms::MAIN_CHAMBER, rooms::ROSE_ROOM, rooms::STAIR_TOP],
        )
        .with_node(
            rooms::SOUTH_CORRIDOR,
            [rooms::MAIN_CHAMBER, rooms::ROSE_ROOM],
        )
        .with_node(
            rooms::ROSE_ROOM,
            [rooms::NORTH_CORRIDOR, rooms::SOUTH_CORRIDOR],
        )
        .with_node(
            rooms::STAIR_TOP,
            [rooms::NORTH_CORRIDOR, rooms::SCULPTURE_HALL],
        )
        .with_node(
            rooms::SCULPTURE_HALL,
            [
                rooms::STAIR_TOP,
                rooms::PORTRAIT_CORNER,
                rooms::EAST_CORRIDOR,
            ],
        )
        .with_node(
            rooms::PORTRAIT_CORNER,
            [rooms::SCULPTURE_HALL, rooms::WEST_CORRIDOR],
        )
        .with_node(
            rooms::EAST_CORRIDOR,
            [rooms::SCULPTURE_HALL, rooms::DIM_PASSAGE],
        )
        .with_node(
            rooms::WEST_CORRIDOR,
            [rooms::PORTRAIT_CORNER, rooms::DIM_PASSAGE],
        )
        .with_node(
            rooms::DIM_PASSAGE,
            [rooms::EAST_CORRIDOR, rooms::WEST_CORRIDOR],
        )
}

/// The dark gallery, thirteen rooms from the passage down to the bottom of
/// the stairs.
pub fn dark_map() -> RoomGraph {
    RoomGraph::new()
        .with_node(
            rooms::DARK_PASSAGE,
            [rooms::DARK_PLACARDS, rooms::DARK_TABLES],
        )
        .with_node(
            rooms::DARK_PLACARDS,
            [rooms::DARK_PASSAGE, rooms::DARK_PORTRAITS],
        )
        .with_node(
            rooms::DARK_PORTRAITS,
            [rooms::DARK_PLACARDS, rooms::DARK_SCULPTURES],
        )
        .with_node(
            rooms::DARK_SCULPTURES,
            [
                rooms::DARK_PORTRAITS,
                rooms::DARK_TABLES,
                rooms::DARK_STAIR_TOP,
            ],
        )
        .with_node(
            rooms::DARK_TABLES,
            [rooms::DARK_PASSAGE, rooms::DARK_SCULPTURES],
        )
        .with_node(
            rooms::DARK_STAIR_TOP,
            [rooms::DARK_SCULPTURES, rooms::DARK_NORTH_CORRIDOR],
        )
        .with_node(
            rooms::DARK_NORTH_CORRIDOR,
            [
                rooms::DARK_STAIR_TOP,
                rooms::DARK_ROSES,
                rooms::DARK_CHAMBER,
            ],
        )
        .with_node(
            rooms::DARK_ROSES,
            [rooms::DARK_NORTH_CORRIDOR, rooms::DARK_SOUTH_CORRIDOR],
        )
        .with_node(
            rooms::DARK_SOUTH_CORRIDOR,
            [rooms::DARK_ROSES, rooms::DARK_CHAMBER],
        )
        .with_node(
            rooms::DARK_CHAMBER,
            [
                rooms::DARK_NORTH_CORRIDOR,
                rooms::DARK_SOUTH_CORRIDOR,
                rooms::DARK_RECEPTION,
                rooms::THE_DESCENT,
            ],
        )
        .with_node(rooms::DARK_RECEPTION, [rooms::DARK_CHAMBER])
        .with_node(
            rooms::THE_DESCENT,
            [rooms::DARK_CHAMBER, rooms::THE_BOTTOM],
        )
        .with_node(rooms::THE_BOTTOM, [rooms::THE_DESCENT])
}
