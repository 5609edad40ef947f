//! The authored Lost Gallery world.
//!
//! A small girl visits an exhibition of the painter Gregor Alacandre with
//! her parents; past the connecting passage the gallery goes dark, and one
//! of the paintings climbs out of her frame. This crate carries only data:
//! rooms, items, entities, the two adjacency maps, and the combat and
//! injury narration tables. Everything that moves lives in the engine.

/// The antagonist's combat script.
pub mod antagonist;
/// The cast of entities.
pub mod entities;
/// The items on display (and in hiding).
pub mod items;
/// The light- and dark-mode adjacency maps.
pub mod maps;
/// The player as authored.
pub mod player;
/// The rooms of the gallery.
pub mod rooms;

use lg_core::{CoreResult, World, WorldMeta};

/// Assemble the complete gallery, validated and ready for a session.
pub fn gallery() -> CoreResult<World> {
    let mut meta = WorldMeta::new("Lost in Gallery");
    meta.description = "A turn-based interactive fiction inspired by 'Ib'.".into();
    meta.authors = vec!["Colin Mart".into()];

    let mut world = World::new(meta, player::starting_player());
    for item in items::all() {
        world.add_item(item)?;
    }
    for entity in entities::all() {
        world.add_entity(entity)?;
    }
    for room in rooms::all() {
        world.add_room(room)?;
    }
    world.set_maps(maps::light_map(), maps::dark_map());
    world.set_antagonist(antagonist::antagonist_state());
    world.set_start(rooms::TITLE);
    world.validate()?;
    Ok(world)
}
