//! Match orchestration
//!
//! The [`Court`] owns the paddles and the ball, advances the simulation one
//! tick at a time, awards points and drives the match lifecycle.

use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{AiControlled, Ball, HumanControlled, Paddle, Player};
use crate::config::Config;
use crate::geometry::{Bounds, Rect};
use crate::resources::{EventSink, Events, GameRng, Scoreboard, Time};
use crate::systems::*;

/// Match lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// No match running. Scores of a finished match stay visible.
    Idle,
    /// Match in progress
    Running,
}

/// Read-only view of the court for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Left paddle first
    pub paddles: [(Player, Rect); 2],
    /// Ball centre and radius
    pub ball: (Vec2, f32),
    pub scoreboard: Scoreboard,
    pub running: bool,
    pub winner: Option<Player>,
    pub bounds: Bounds,
    pub start_button: Rect,
}

/// One game session: a human paddle on the left, the scripted opponent on the right
pub struct Court {
    world: World,
    left: Entity,
    right: Entity,
    ball: Entity,
    config: Config,
    time: Time,
    scoreboard: Scoreboard,
    events: Events,
    rng: GameRng,
    state: MatchState,
}

impl Court {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let paddle_size = Vec2::new(config.paddle_width, config.paddle_height);

        let left = world.spawn((
            Paddle::new(Player::One, config.paddle_spawn(Player::One), paddle_size),
            HumanControlled,
        ));
        let right = world.spawn((
            Paddle::new(Player::Two, config.paddle_spawn(Player::Two), paddle_size),
            AiControlled,
        ));

        // Parked at the centre until the first serve
        let pre_match_vel = Vec2::splat(config.ball_speed * config.ball_acceleration);
        let ball = world.spawn((Ball::new(
            config.ball_spawn(),
            pre_match_vel,
            config.ball_radius,
            config.ball_acceleration,
        ),));

        Self {
            world,
            left,
            right,
            ball,
            config,
            time: Time::default(),
            scoreboard: Scoreboard::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            state: MatchState::Idle,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.config.bounds()
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_match_running(&self) -> bool {
        self.state == MatchState::Running
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn winner(&self) -> Option<Player> {
        self.scoreboard.winner(self.config.win_score)
    }

    /// Signals raised by the most recent update
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn dispatch_events(&self, sink: &mut impl EventSink) {
        self.events.dispatch(sink);
    }

    fn paddle_entity(&self, player: Player) -> Entity {
        match player {
            Player::One => self.left,
            Player::Two => self.right,
        }
    }

    // The world is private and entities are never despawned, so the handles stay live.
    pub fn paddle(&self, player: Player) -> Paddle {
        *self
            .world
            .get::<&Paddle>(self.paddle_entity(player))
            .expect("court owns both paddles")
    }

    pub fn ball(&self) -> Ball {
        *self.world.get::<&Ball>(self.ball).expect("court owns its ball")
    }

    /// Move the ball, e.g. to set up a rally
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        if let Ok(ball) = self.world.query_one_mut::<&mut Ball>(self.ball) {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Move a paddle to height `y`, bypassing its controller
    pub fn place_paddle(&mut self, player: Player, y: f32) {
        let entity = self.paddle_entity(player);
        if let Ok(paddle) = self.world.query_one_mut::<&mut Paddle>(entity) {
            paddle.pos.y = y;
        }
    }

    pub fn start_button(&self) -> Rect {
        self.config.start_button()
    }

    pub fn snapshot(&self) -> Snapshot {
        let ball = self.ball();
        Snapshot {
            paddles: [Player::One, Player::Two].map(|p| (p, self.paddle(p).collision_box())),
            ball: (ball.pos, ball.radius),
            scoreboard: self.scoreboard,
            running: self.is_match_running(),
            winner: self.winner(),
            bounds: self.bounds(),
            start_button: self.start_button(),
        }
    }

    /// Begin a new match. Ignored while a match is running.
    pub fn start_match(&mut self) {
        if self.is_match_running() {
            tracing::debug!("start ignored, match already running");
            return;
        }

        self.state = MatchState::Running;
        self.spawn_ball();
        self.scoreboard.reset();
        for entity in [self.left, self.right] {
            if let Ok(paddle) = self.world.query_one_mut::<&mut Paddle>(entity) {
                paddle.reset();
            }
        }
        tracing::info!("match started");
    }

    /// Pointer click at canvas coordinates. Starts a match when the start
    /// button is hit while idle; returns whether a match was started.
    pub fn click(&mut self, x: f32, y: f32) -> bool {
        if self.start_button().contains(x, y) && !self.is_match_running() {
            self.start_match();
            true
        } else {
            false
        }
    }

    /// Pointer moved to canvas height `y`; the human paddle follows it.
    /// May be called at any time between ticks.
    pub fn pointer_moved(&mut self, y: f32) {
        let bounds = self.bounds();
        apply_pointer(&mut self.world, y, &bounds);
    }

    /// Advance the simulation by `dt` seconds. Does nothing while idle.
    pub fn update(&mut self, dt: f32) {
        self.events.clear();
        if !self.is_match_running() {
            return;
        }
        self.time.dt = dt;
        let bounds = self.bounds();

        // 1. Vertical move, then walls
        move_ball_vertical(&mut self.world, &self.time);
        check_wall_collisions(&mut self.world, &bounds, &mut self.events);

        // 2. Paddles, tested before the horizontal move
        check_paddle_collisions(&mut self.world, &mut self.events);
        move_ball_horizontal(&mut self.world, &self.time);

        // 3. Ball left the court
        if let Some(player) = check_scoring(&self.world, &bounds, &mut self.events) {
            self.score_point(player);
        }

        // 4. Opponent reacts to the ball
        ai_control(&mut self.world, &bounds, &self.config);
    }

    /// Award a point. Ends the match on a winner, otherwise serves the next round.
    pub fn score_point(&mut self, player: Player) {
        self.scoreboard.record_point(player);
        tracing::debug!(
            ?player,
            player_one = self.scoreboard.player_one,
            player_two = self.scoreboard.player_two,
            "point scored"
        );

        if let Some(winner) = self.winner() {
            self.state = MatchState::Idle;
            tracing::info!(
                ?winner,
                player_one = self.scoreboard.player_one,
                player_two = self.scoreboard.player_two,
                "match finished"
            );
        } else {
            self.scoreboard.round += 1;
            self.spawn_ball();
            tracing::debug!(round = self.scoreboard.round, "next round");
        }
    }

    /// Serve from the centre on a random diagonal
    fn spawn_ball(&mut self) {
        let speed = self.config.ball_speed;
        let vel = Vec2::new(self.rng.sign() * speed, self.rng.sign() * speed);
        let center = self.config.ball_spawn();
        self.place_ball(center, vel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn court() -> Court {
        Court::new(Config::new(), 42)
    }

    #[test]
    fn test_court_starts_idle() {
        let court = court();
        assert_eq!(court.state(), MatchState::Idle);
        assert_eq!(*court.scoreboard(), Scoreboard::new());
        assert_eq!(court.ball().pos, Vec2::new(400.0, 300.0));
        assert_eq!(court.paddle(Player::One).pos, Vec2::new(12.0, 276.0));
        assert_eq!(court.paddle(Player::Two).pos, Vec2::new(776.0, 276.0));
    }

    #[test]
    fn test_update_is_noop_while_idle() {
        let mut court = court();
        let before = court.snapshot();
        court.update(0.5);
        assert_eq!(court.snapshot(), before);
        assert!(court.events().is_empty());
    }

    #[test]
    fn test_start_match_serves_diagonally_from_center() {
        let mut court = court();
        court.start_match();

        assert!(court.is_match_running());
        let ball = court.ball();
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel.x.abs(), 100.0);
        assert_eq!(ball.vel.y.abs(), 100.0);
    }

    #[test]
    fn test_start_match_resets_scores_and_paddles() {
        let mut court = court();
        court.start_match();
        court.pointer_moved(100.0);
        // Finish the match so start is accepted again
        for _ in 0..7 {
            court.score_point(Player::One);
        }
        assert_eq!(court.state(), MatchState::Idle);

        court.start_match();
        assert_eq!(*court.scoreboard(), Scoreboard::new());
        assert_eq!(court.paddle(Player::One).pos.y, 276.0);
    }

    #[test]
    fn test_start_match_ignored_while_running() {
        let mut court = court();
        court.start_match();
        court.score_point(Player::Two);
        court.pointer_moved(50.0);
        let before = court.snapshot();
        let ball_before = court.ball();

        court.start_match();
        court.start_match();

        assert_eq!(court.snapshot(), before);
        assert_eq!(court.ball(), ball_before);
    }

    #[test]
    fn test_score_point_below_win_score_serves_next_round() {
        let mut court = court();
        court.start_match();
        court.place_ball(Vec2::new(-5.0, 100.0), Vec2::ZERO);

        court.score_point(Player::Two);

        assert_eq!(court.scoreboard().player_two, 1);
        assert_eq!(court.scoreboard().round, 2);
        assert!(court.is_match_running());
        let ball = court.ball();
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel.abs(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_winning_point_ends_match_and_leaves_ball() {
        let mut court = court();
        court.start_match();
        for _ in 0..6 {
            court.score_point(Player::One);
        }
        assert_eq!(court.scoreboard().round, 7);
        let parked = Vec2::new(805.0, 120.0);
        court.place_ball(parked, Vec2::ZERO);

        court.score_point(Player::One);

        assert_eq!(court.state(), MatchState::Idle);
        assert_eq!(court.winner(), Some(Player::One));
        assert_eq!(court.scoreboard().player_one, 7);
        assert_eq!(court.scoreboard().round, 7, "Round untouched on the winning point");
        assert_eq!(court.ball().pos, parked, "Ball stays where it ended");
    }

    #[test]
    fn test_click_on_start_button() {
        let mut court = court();
        assert!(!court.click(10.0, 10.0), "Outside the button");
        assert!(!court.is_match_running());

        assert!(court.click(400.0, 300.0));
        assert!(court.is_match_running());

        assert!(!court.click(400.0, 300.0), "Already running");
    }

    #[test]
    fn test_pointer_moves_only_human_paddle() {
        let mut court = court();
        court.pointer_moved(10.0);
        assert_eq!(court.paddle(Player::One).pos.y, 24.0);
        assert_eq!(court.paddle(Player::Two).pos.y, 276.0);
    }

    #[test]
    fn test_snapshot_orders_paddles_left_to_right() {
        let snapshot = court().snapshot();
        assert_eq!(snapshot.paddles.len(), 2);
        assert_eq!(snapshot.paddles[0].0, Player::One);
        assert_eq!(snapshot.paddles[1].0, Player::Two);
        assert_eq!(snapshot.ball, (Vec2::new(400.0, 300.0), 10.0));
        assert!(!snapshot.running);
        assert_eq!(snapshot.winner, None);
    }

    #[test]
    fn test_events_cleared_on_next_update() {
        let mut court = court();
        court.start_match();
        court.place_ball(Vec2::new(400.0, 30.0), Vec2::new(100.0, -100.0));

        court.update(1.0 / 60.0);
        assert_eq!(court.events().wall_impacts, 1);

        court.update(1.0 / 60.0);
        assert!(court.events().is_empty());
    }

    #[test]
    fn test_court_keeps_one_ball_and_two_paddles() {
        let mut court = court();
        court.start_match();
        for _ in 0..5 {
            court.score_point(Player::One);
            court.score_point(Player::Two);
        }
        court.place_ball(Vec2::new(50.0, 60.0), Vec2::new(-100.0, 0.0));
        court.place_paddle(Player::Two, 100.0);

        assert_eq!(court.world.query::<&Ball>().iter().count(), 1);
        assert_eq!(court.world.query::<&Paddle>().iter().count(), 2);
        assert_eq!(court.ball().pos, Vec2::new(50.0, 60.0));
        assert_eq!(court.paddle(Player::Two).pos.y, 100.0);
        assert_eq!(court.paddle(Player::One).pos.y, 276.0);
        assert_eq!(court.snapshot().ball.0, Vec2::new(50.0, 60.0));
    }
}
