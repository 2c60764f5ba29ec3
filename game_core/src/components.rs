use glam::Vec2;

use crate::geometry::Rect;

/// The two sides of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One, // left paddle
    Two, // right paddle
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Paddle component - position is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub owner: Player,
    pub start: Vec2,
}

impl Paddle {
    pub fn new(owner: Player, start: Vec2, size: Vec2) -> Self {
        Self {
            pos: start,
            size,
            owner,
            start,
        }
    }

    /// Move back to the start position
    pub fn reset(&mut self) {
        self.pos = self.start;
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Vertical centre of the paddle
    pub fn center_y(&self) -> f32 {
        self.pos.y + 0.5 * self.size.y
    }

    pub fn collision_box(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}

/// Ball component - position is the centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub acceleration: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, acceleration: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            acceleration,
        }
    }

    /// Distance covered per second along each axis
    pub fn effective_vel(&self) -> Vec2 {
        self.vel * self.acceleration
    }

    pub fn collision_box(&self) -> Rect {
        Rect::around(self.pos, self.radius)
    }
}

/// Marks the paddle driven by pointer input
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanControlled;

/// Marks the paddle driven by the scripted opponent
#[derive(Debug, Clone, Copy, Default)]
pub struct AiControlled;
