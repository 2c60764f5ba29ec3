use crate::components::Player;

/// Length of the current simulation step
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,
}

impl Time {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }
}

/// Round and score tracking for one match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    pub player_one: u32,
    pub player_two: u32,
    pub round: u32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            player_one: 0,
            player_two: 0,
            round: 1,
        }
    }
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn record_point(&mut self, player: Player) {
        match player {
            Player::One => self.player_one += 1,
            Player::Two => self.player_two += 1,
        }
    }

    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    /// First player at or above `win_score`, checking player one first
    pub fn winner(&self, win_score: u32) -> Option<Player> {
        if self.player_one >= win_score {
            Some(Player::One)
        } else if self.player_two >= win_score {
            Some(Player::Two)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// +1.0 or -1.0 with equal probability
    pub fn sign(&mut self) -> f32 {
        use rand::Rng;
        if self.0.gen_bool(0.5) {
            1.0
        } else {
            -1.0
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl std::fmt::Debug for GameRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("GameRng")
    }
}

/// Receives the signals raised by one update, typically to play sounds
pub trait EventSink {
    fn on_wall_impact(&mut self) {}
    fn on_paddle_impact(&mut self) {}
    fn on_score(&mut self, _player: Player) {}
}

/// Signals raised during the current update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub wall_impacts: u32,
    pub paddle_impacts: u32,
    pub scored: Option<Player>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.wall_impacts == 0 && self.paddle_impacts == 0 && self.scored.is_none()
    }

    /// Replay the signals in order: walls, paddles, score
    pub fn dispatch(&self, sink: &mut impl EventSink) {
        for _ in 0..self.wall_impacts {
            sink.on_wall_impact();
        }
        for _ in 0..self.paddle_impacts {
            sink.on_paddle_impact();
        }
        if let Some(player) = self.scored {
            sink.on_score(player);
        }
    }
}
