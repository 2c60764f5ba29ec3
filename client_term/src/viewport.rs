//! Mapping between terminal cells and court pixels

/// Terminal area the court is stretched over
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub court_width: f32,
    pub court_height: f32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, court_width: f32, court_height: f32) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            court_width,
            court_height,
        }
    }

    fn cell_width(&self) -> f32 {
        self.court_width / f32::from(self.cols)
    }

    fn cell_height(&self) -> f32 {
        self.court_height / f32::from(self.rows)
    }

    /// Court position at the centre of a cell
    pub fn to_court(&self, col: u16, row: u16) -> (f32, f32) {
        (
            (f32::from(col) + 0.5) * self.cell_width(),
            (f32::from(row) + 0.5) * self.cell_height(),
        )
    }

    pub fn col(&self, x: f32) -> u16 {
        let col = (x / self.cell_width()).floor();
        col.clamp(0.0, f32::from(self.cols - 1)) as u16
    }

    pub fn row(&self, y: f32) -> u16 {
        let row = (y / self.cell_height()).floor();
        row.clamp(0.0, f32::from(self.rows - 1)) as u16
    }
}
