use crate::{AiControlled, Ball, Bounds, Config, Paddle, Player};
use hecs::World;

/// Where the opponent expects the ball to arrive. No lead is applied.
pub fn predict_ball_y(ball: &Ball) -> f32 {
    ball.pos.y
}

/// Snap a paddle that reached a wall back inside the court.
/// Returns true if the paddle was moved.
pub fn correct_bounds(paddle: &mut Paddle, bounds: &Bounds) -> bool {
    let rect = paddle.collision_box();
    if rect.top() <= bounds.upper {
        paddle.pos.y = bounds.upper + 1.0;
        true
    } else if rect.bottom() >= bounds.lower {
        paddle.pos.y = bounds.lower - paddle.height() - 1.0;
        true
    } else {
        false
    }
}

/// True when the opponent should chase the ball this tick
pub fn should_track(paddle: &Paddle, ball: &Ball, bounds: &Bounds, config: &Config) -> bool {
    let rect = paddle.collision_box();
    let ball_box = ball.collision_box();

    // Near edge faces the court; the ball must be heading for it and not past it yet
    let (approaching, near_edge, before_edge) = match paddle.owner {
        Player::Two => (
            ball.vel.x > 0.0,
            rect.left(),
            ball_box.right() <= rect.left(),
        ),
        Player::One => (
            ball.vel.x < 0.0,
            rect.right(),
            ball_box.left() >= rect.right(),
        ),
    };

    let in_range = (ball.pos.x - near_edge).abs() < config.ai_reaction_distance;
    let aligned = (paddle.center_y() - predict_ball_y(ball)).abs() < config.ai_tolerance;

    approaching && in_range && bounds.holds_vertically(&rect) && before_edge && !aligned
}

/// Nudge the paddle centre one fixed step toward the predicted ball position
pub fn step_toward_ball(paddle: &mut Paddle, ball: &Ball, config: &Config) {
    let target = predict_ball_y(ball);
    let center = paddle.center_y();
    if center < target {
        paddle.pos.y += config.ai_step;
    } else if center > target {
        paddle.pos.y -= config.ai_step;
    }
}

/// Drive every AI paddle for one tick: bounds correction first, then tracking
pub fn ai_control(world: &mut World, bounds: &Bounds, config: &Config) {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_entity, ball)| *ball);

    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &AiControlled)>() {
        if correct_bounds(paddle, bounds) {
            tracing::trace!(y = paddle.pos.y, "opponent paddle snapped inside walls");
        }

        if let Some(ball) = ball {
            if should_track(paddle, &ball, bounds, config) {
                step_toward_ball(paddle, &ball, config);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (World, Config, Bounds) {
        let config = Config::new();
        let bounds = config.bounds();
        (World::new(), config, bounds)
    }

    fn spawn_ai(world: &mut World, owner: Player, x: f32, y: f32) -> hecs::Entity {
        let paddle = Paddle::new(owner, Vec2::new(x, y), Vec2::new(12.0, 48.0));
        world.spawn((paddle, AiControlled))
    }

    fn spawn_ball(world: &mut World, pos: Vec2, vel: Vec2) {
        world.spawn((Ball::new(pos, vel, 10.0, 3.0),));
    }

    fn paddle_y(world: &World, entity: hecs::Entity) -> f32 {
        world.get::<&Paddle>(entity).unwrap().pos.y
    }

    #[test]
    fn test_tracks_down_toward_approaching_ball() {
        let (mut world, config, bounds) = setup();
        let ai = spawn_ai(&mut world, Player::Two, 776.0, 276.0);
        spawn_ball(&mut world, Vec2::new(600.0, 400.0), Vec2::new(100.0, 100.0));

        ai_control(&mut world, &bounds, &config);

        assert_eq!(paddle_y(&world, ai), 281.0, "One 5px step down");
    }

    #[test]
    fn test_tracks_up_toward_approaching_ball() {
        let (mut world, config, bounds) = setup();
        let ai = spawn_ai(&mut world, Player::Two, 776.0, 276.0);
        spawn_ball(&mut world, Vec2::new(600.0, 100.0), Vec2::new(100.0, -100.0));

        ai_control(&mut world, &bounds, &config);

        assert_eq!(paddle_y(&world, ai), 271.0, "One 5px step up");
    }

    #[test]
    fn test_steps_are_discrete_across_ticks() {
        let (mut world, config, bounds) = setup();
        let ai = spawn_ai(&mut world, Player::Two, 776.0, 276.0);
        spawn_ball(&mut world, Vec2::new(600.0, 400.0), Vec2::new(100.0, 0.0));

        for _ in 0..3 {
            ai_control(&mut world, &bounds, &config);
        }

        assert_eq!(paddle_y(&world, ai), 291.0);
    }

    #[test]
    fn test_ignores_ball_moving_away() {
        let (mut world, config, bounds) = setup();
        let ai = spawn_ai(&mut world, Player::Two, 776.0, 276.0);
        spawn_ball(&mut world, Vec2::new(600.0, 400.0), Vec2::new(-100.0, 100.0));

        ai_control(&mut world, &bounds, &config);

        assert_eq!(paddle_y(&world, ai), 276.0);
    }

    #[test]
    fn test_ignores_ball_out_of_reaction_range() {
        let (mut world, config, bounds) = setup();
        let ai = spawn_ai(&mut world, Player::Two, 776.0, 276.0);
        // 776 - 526 = 250, not under the threshold
        spawn_ball(&mut world, Vec2::new(526.0, 400.0), Vec2::new(100.0, 100.0));

        ai_control(&mut world, &bounds, &config);

        assert_eq!(paddle_y(&world, ai), 276.0);
    }

    #[test]
    fn test_holds_still_within_tolerance() {
        let (mut world, config, bounds) = setup();
        let ai = spawn_ai(&mut world, Player::Two, 776.0, 276.0);
        // Paddle centre 300, ball 9.5px below
        spawn_ball(&mut world, Vec2::new(600.0, 309.5), Vec2::new(100.0, 100.0));

        ai_control(&mut world, &bounds, &config);

        assert_eq!(paddle_y(&world, ai), 276.0);
    }

    #[test]
    fn test_ignores_ball_past_near_edge() {
        let (mut world, config, bounds) = setup();
        let ai = spawn_ai(&mut world, Player::Two, 776.0, 276.0);
        // Ball box right edge at 780, beyond the paddle's left edge
        spawn_ball(&mut world, Vec2::new(770.0, 400.0), Vec2::new(100.0, 100.0));

        ai_control(&mut world, &bounds, &config);

        assert_eq!(paddle_y(&world, ai), 276.0);
    }

    #[test]
    fn test_snaps_back_below_upper_wall() {
        let (mut world, config, bounds) = setup();
        let ai = spawn_ai(&mut world, Player::Two, 776.0, 10.0);

        ai_control(&mut world, &bounds, &config);

        assert_eq!(paddle_y(&world, ai), 25.0, "upper + 1");
    }

    #[test]
    fn test_snaps_back_above_lower_wall() {
        let (mut world, config, bounds) = setup();
        let ai = spawn_ai(&mut world, Player::Two, 776.0, 540.0);

        ai_control(&mut world, &bounds, &config);

        assert_eq!(paddle_y(&world, ai), 527.0, "lower - height - 1");
    }

    #[test]
    fn test_paddle_touching_wall_is_snapped() {
        let (mut world, config, bounds) = setup();
        let ai = spawn_ai(&mut world, Player::Two, 776.0, 24.0);

        ai_control(&mut world, &bounds, &config);

        assert_eq!(paddle_y(&world, ai), 25.0);
    }

    #[test]
    fn test_left_side_opponent_mirrors_direction() {
        let (mut world, config, bounds) = setup();
        let ai = spawn_ai(&mut world, Player::One, 12.0, 276.0);
        spawn_ball(&mut world, Vec2::new(200.0, 400.0), Vec2::new(-100.0, 100.0));

        ai_control(&mut world, &bounds, &config);

        assert_eq!(paddle_y(&world, ai), 281.0);
    }

    #[test]
    fn test_no_ball_only_corrects_bounds() {
        let (mut world, config, bounds) = setup();
        let ai = spawn_ai(&mut world, Player::Two, 776.0, 276.0);

        ai_control(&mut world, &bounds, &config);

        assert_eq!(paddle_y(&world, ai), 276.0);
    }
}
