use crate::{Ball, Time};
use hecs::World;

/// Integrate the ball's vertical position
pub fn move_ball_vertical(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos.y += ball.effective_vel().y * time.dt;
    }
}

/// Integrate the ball's horizontal position.
///
/// Runs after paddle collisions are resolved, so the paddle test always
/// sees the position from before this step's horizontal move.
pub fn move_ball_horizontal(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos.x += ball.effective_vel().x * time.dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn spawn_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
        world.spawn((Ball::new(pos, vel, 10.0, 3.0),))
    }

    #[test]
    fn test_vertical_move_scales_by_acceleration() {
        let mut world = World::new();
        let entity = spawn_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(100.0, 100.0));

        move_ball_vertical(&mut world, &Time::new(0.5));

        let ball = *world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos.y, 450.0, "100 * 3 * 0.5 = 150 pixels");
        assert_eq!(ball.pos.x, 400.0, "Horizontal position untouched");
    }

    #[test]
    fn test_horizontal_move_scales_by_acceleration() {
        let mut world = World::new();
        let entity = spawn_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(-100.0, 100.0));

        move_ball_horizontal(&mut world, &Time::new(0.25));

        let ball = *world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos.x, 325.0);
        assert_eq!(ball.pos.y, 300.0, "Vertical position untouched");
    }

    #[test]
    fn test_zero_dt_does_not_move() {
        let mut world = World::new();
        let entity = spawn_ball(&mut world, Vec2::new(10.0, 20.0), Vec2::new(100.0, -100.0));

        move_ball_vertical(&mut world, &Time::new(0.0));
        move_ball_horizontal(&mut world, &Time::new(0.0));

        let ball = *world.get::<&Ball>(entity).unwrap();
        assert_eq!(ball.pos, Vec2::new(10.0, 20.0));
    }
}
