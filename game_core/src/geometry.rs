use glam::Vec2;

/// Axis-aligned rectangle in pixel space, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `2 * radius` centred on `center`
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Strict intersection test. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Strict containment test. Points on the border are outside.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.left() < x && x < self.right() && self.top() < y && y < self.bottom()
    }
}

/// Playable edges of the court
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub upper: f32,
    pub lower: f32,
    pub left: f32,
    pub right: f32,
}

impl Bounds {
    /// True when the rectangle lies between the upper and lower edges (inclusive)
    pub fn holds_vertically(&self, rect: &Rect) -> bool {
        rect.top() >= self.upper && rect.bottom() <= self.lower
    }
}
