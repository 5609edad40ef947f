pub mod check;
pub mod info;
pub mod play;

use lg_core::World;

/// Load and validate the authored gallery.
pub fn load_world() -> Result<World, String> {
    lg_story::gallery().map_err(|e| format!("the gallery failed to load: {e}"))
}
