use crate::{Ball, Bounds, Events, Paddle, Player, Rect};
use hecs::World;

/// Bounce the ball off the upper and lower walls
pub fn check_wall_collisions(world: &mut World, bounds: &Bounds, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Upper wall
        if ball.pos.y - ball.radius <= bounds.upper {
            ball.vel.y = -ball.vel.y;
            ball.pos.y = bounds.upper + ball.radius + 1.0;
            events.wall_impacts += 1;
            tracing::trace!(y = ball.pos.y, "ball hit upper wall");
        }

        // Lower wall
        if ball.pos.y + ball.radius >= bounds.lower {
            ball.vel.y = -ball.vel.y;
            ball.pos.y = bounds.lower - ball.radius - 1.0;
            events.wall_impacts += 1;
            tracing::trace!(y = ball.pos.y, "ball hit lower wall");
        }
    }
}

/// Bounce the ball off a paddle. The left paddle wins when both overlap.
pub fn check_paddle_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle boxes without holding a borrow on the world
    let mut left: Option<Rect> = None;
    let mut right: Option<Rect> = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.owner {
            Player::One => left = Some(paddle.collision_box()),
            Player::Two => right = Some(paddle.collision_box()),
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let ball_box = ball.collision_box();

        if let Some(paddle_box) = left.filter(|p| ball_box.overlaps(p)) {
            ball.vel.x = -ball.vel.x;
            ball.pos.x = paddle_box.right() + ball.radius;
            events.paddle_impacts += 1;
            tracing::trace!(x = ball.pos.x, "ball hit left paddle");
        } else if let Some(paddle_box) = right.filter(|p| ball_box.overlaps(p)) {
            ball.vel.x = -ball.vel.x;
            ball.pos.x = paddle_box.left() - ball.radius;
            events.paddle_impacts += 1;
            tracing::trace!(x = ball.pos.x, "ball hit right paddle");
        }
    }
}
