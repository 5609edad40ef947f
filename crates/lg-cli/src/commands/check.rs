//! Validate the authored world and summarize it.

use colored::Colorize;

pub fn run() -> Result<(), String> {
    let world = super::load_world()?;
    println!(
        "  {} \"{}\": {} rooms, {} items, {} entities",
        "Validated".bold(),
        world.meta.name,
        world.rooms().len(),
        world.items().len(),
        world.entities().len(),
    );
    println!(
        "  Maps: {} lit rooms, {} dark rooms",
        world.light_map().len(),
        world.dark_map().len()
    );
    Ok(())
}
