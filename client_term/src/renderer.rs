//! Draws court snapshots as terminal text

use std::io::{self, Write};

use crossterm::{cursor, queue, style::Print};
use game_core::{Config, Player, Rect, Snapshot};

use crate::viewport::Viewport;

const WALL: char = '█';
const PADDLE: char = '█';
const BALL: char = '●';
const NET: char = '¦';
const START_LABEL: &str = "[ Start Match ]";

/// One screen worth of characters
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub cols: u16,
    pub rows: u16,
    cells: Vec<char>,
}

impl Frame {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![' '; usize::from(cols) * usize::from(rows)],
        }
    }

    pub fn get(&self, col: u16, row: u16) -> Option<char> {
        if col < self.cols && row < self.rows {
            Some(self.cells[usize::from(row) * usize::from(self.cols) + usize::from(col)])
        } else {
            None
        }
    }

    pub fn set(&mut self, col: u16, row: u16, ch: char) {
        if col < self.cols && row < self.rows {
            self.cells[usize::from(row) * usize::from(self.cols) + usize::from(col)] = ch;
        }
    }

    /// Write text starting at `col`, clipped at the right edge
    pub fn put_str(&mut self, col: u16, row: u16, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            let Ok(offset) = u16::try_from(i) else {
                break;
            };
            self.set(col.saturating_add(offset), row, ch);
        }
    }

    /// Write text centred on `center_col`
    pub fn put_centered(&mut self, center_col: u16, row: u16, text: &str) {
        let half = u16::try_from(text.chars().count() / 2).unwrap_or(u16::MAX);
        self.put_str(center_col.saturating_sub(half), row, text);
    }

    pub fn line(&self, row: u16) -> String {
        (0..self.cols)
            .filter_map(|col| self.get(col, row))
            .collect()
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        for row in 0..self.rows {
            queue!(out, cursor::MoveTo(0, row), Print(self.line(row)))?;
        }
        Ok(())
    }
}

fn fill_rect(frame: &mut Frame, viewport: &Viewport, rect: &Rect, ch: char) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return;
    }
    // Skip shapes entirely off screen, e.g. a ball that just left the court
    if rect.right() <= 0.0
        || rect.left() >= viewport.court_width
        || rect.bottom() <= 0.0
        || rect.top() >= viewport.court_height
    {
        return;
    }
    let (c0, c1) = (viewport.col(rect.left()), viewport.col(rect.right() - 0.01));
    let (r0, r1) = (viewport.row(rect.top()), viewport.row(rect.bottom() - 0.01));
    for row in r0..=r1 {
        for col in c0..=c1 {
            frame.set(col, row, ch);
        }
    }
}

/// Cells covered by the start button label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLabel {
    pub row: u16,
    pub first_col: u16,
    pub last_col: u16,
}

impl ButtonLabel {
    /// Label centred on the button, one row high
    pub fn at(button: &Rect, viewport: &Viewport) -> Self {
        let center = button.center();
        let len = START_LABEL.len() as u16;
        let first_col = viewport.col(center.x).saturating_sub(len / 2);
        Self {
            row: viewport.row(center.y),
            first_col,
            last_col: first_col.saturating_add(len - 1),
        }
    }

    pub fn covers(&self, col: u16, row: u16) -> bool {
        row == self.row && (self.first_col..=self.last_col).contains(&col)
    }
}

/// Court point hit by a click on a cell. Any cell of the drawn start label
/// counts as the button, even where the label overhangs the button's area.
pub fn click_target(button: &Rect, viewport: &Viewport, col: u16, row: u16) -> (f32, f32) {
    if ButtonLabel::at(button, viewport).covers(col, row) {
        let center = button.center();
        (center.x, center.y)
    } else {
        viewport.to_court(col, row)
    }
}

fn player_label(player: Player) -> &'static str {
    match player {
        Player::One => "Player 1",
        Player::Two => "Player 2",
    }
}

/// Lay out the court, paddles, ball and overlays for one frame
pub fn draw(snapshot: &Snapshot, config: &Config, viewport: &Viewport) -> Frame {
    let mut frame = Frame::new(viewport.cols, viewport.rows);
    let width = viewport.court_width;

    // Walls
    let upper_wall = Rect::new(0.0, config.court_margin_y, width, config.wall_size);
    let lower_wall = Rect::new(0.0, snapshot.bounds.lower, width, config.wall_size);
    fill_rect(&mut frame, viewport, &upper_wall, WALL);
    fill_rect(&mut frame, viewport, &lower_wall, WALL);

    // Dashed centre line
    let net_col = viewport.col(width / 2.0);
    let first = viewport.row(snapshot.bounds.upper) + 1;
    let last = viewport.row(snapshot.bounds.lower - 0.01);
    for row in (first..last).step_by(2) {
        frame.set(net_col, row, NET);
    }

    for (_owner, rect) in &snapshot.paddles {
        fill_rect(&mut frame, viewport, rect, PADDLE);
    }

    let (center, radius) = snapshot.ball;
    fill_rect(&mut frame, viewport, &Rect::around(center, radius), BALL);

    // Scoreboard on the top line
    let board = &snapshot.scoreboard;
    frame.put_str(1, 0, &format!("{} | {}", player_label(Player::One), board.player_one));
    frame.put_centered(viewport.cols / 2, 0, &format!("Round: {}", board.round));
    let right = format!("{} | {}", player_label(Player::Two), board.player_two);
    let right_len = u16::try_from(right.chars().count()).unwrap_or(viewport.cols);
    frame.put_str(viewport.cols.saturating_sub(right_len + 1), 0, &right);

    if !snapshot.running {
        let label = ButtonLabel::at(&snapshot.start_button, viewport);
        if let Some(winner) = snapshot.winner {
            let col = viewport.col(snapshot.start_button.center().x);
            frame.put_centered(col, label.row.saturating_sub(2), &format!("{} wins!", player_label(winner)));
        }
        frame.put_str(label.first_col, label.row, START_LABEL);
    }

    frame
}
