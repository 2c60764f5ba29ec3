use crate::{Bounds, HumanControlled, Paddle};
use hecs::World;

/// Top edge for a paddle of `height` following a pointer at `pointer_y`,
/// kept so the whole paddle stays between the walls
pub fn clamp_pointer(pointer_y: f32, height: f32, bounds: &Bounds) -> f32 {
    if pointer_y < bounds.upper {
        bounds.upper
    } else if pointer_y + height > bounds.lower {
        bounds.lower - height
    } else {
        pointer_y
    }
}

/// Move human-controlled paddles to follow the pointer
pub fn apply_pointer(world: &mut World, pointer_y: f32, bounds: &Bounds) {
    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &HumanControlled)>() {
        paddle.pos.y = clamp_pointer(pointer_y, paddle.height(), bounds);
    }
}
