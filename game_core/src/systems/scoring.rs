use crate::{Ball, Bounds, Events, Player};
use hecs::World;

/// Check if the ball left the court sideways. Returns the player awarded the point.
pub fn check_scoring(world: &World, bounds: &Bounds, events: &mut Events) -> Option<Player> {
    let mut scorer = None;
    for (_entity, ball) in world.query::<&Ball>().iter() {
        if ball.pos.x < bounds.left {
            scorer = Some(Player::Two);
        } else if ball.pos.x > bounds.right {
            scorer = Some(Player::One);
        }
    }

    if let Some(player) = scorer {
        events.scored = Some(player);
    }
    scorer
}
