//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Cell, Color, RunState};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const LIGHT_GREY: Rgb = Rgb::new(211, 211, 211);
const DARK_GREY: Rgb = Rgb::new(169, 169, 169);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const TEXT: Rgb = Rgb::new(230, 230, 230);

/// Terminal colour of a palette entry
pub fn palette_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(0, 255, 255),
        Color::Red => Rgb::new(255, 0, 0),
        Color::Blue => Rgb::new(0, 0, 255),
        Color::Green => Rgb::new(0, 128, 0),
        Color::Magenta => Rgb::new(255, 0, 255),
        Color::Yellow => Rgb::new(255, 255, 0),
        Color::Black => Rgb::new(0, 0, 0),
    }
}

/// Draws the board, the active piece, a status line and the pause / game-over overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for the usual glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

/// Where the board frame landed inside the viewport.
#[derive(Debug, Clone, Copy)]
struct FrameRect {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render a snapshot into a framebuffer of the viewport's size.
    pub fn render(&self, snapshot: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let columns = u16::try_from(snapshot.columns.max(0)).unwrap_or(u16::MAX);
        let rows = u16::try_from(snapshot.rows.max(0)).unwrap_or(u16::MAX);
        let w = columns.saturating_mul(self.cell_w).saturating_add(2);
        let h = rows.saturating_add(2);
        // The status line sits directly under the frame.
        let frame = FrameRect {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h.saturating_add(1)) / 2,
            w,
            h,
        };

        self.draw_border(&mut fb, frame);

        // Only the part of the board that lands inside the viewport is drawn.
        let visible_rows = (viewport.height as i32).min(snapshot.rows);
        let visible_cols = (viewport.width as i32 / self.cell_w as i32 + 1).min(snapshot.columns);
        for row in 0..visible_rows {
            for col in 0..visible_cols {
                let cell = match snapshot.active {
                    Some(active) if snapshot.is_active_cell(row, col) => {
                        Cell::Filled(active.color)
                    }
                    _ => snapshot.cell(row, col).unwrap_or_default(),
                };
                self.draw_cell(&mut fb, frame, row, col, cell);
            }
        }

        let status = format!("Score: {}  Lines: {}", snapshot.score, snapshot.lines);
        fb.put_str(frame.x, frame.y.saturating_add(h), &status, Style::new(TEXT, SCREEN_BG));

        match snapshot.state {
            RunState::Running => {}
            RunState::Paused => self.draw_banner(&mut fb, frame, &["PAUSED", "p: resume"]),
            RunState::GameOver => {
                let score = format!("Score: {}", snapshot.score);
                let lines = format!("Lines: {}", snapshot.lines);
                self.draw_banner(
                    &mut fb,
                    frame,
                    &["GAME OVER", &score, &lines, "Enter: new game"],
                );
            }
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: FrameRect) {
        if frame.w < 2 || frame.h < 2 {
            return;
        }
        let style = Style::new(DARK_GREY, SCREEN_BG);
        let right = frame.x.saturating_add(frame.w - 1);
        let bottom = frame.y.saturating_add(frame.h - 1);

        fb.put_char(frame.x, frame.y, '┌', style);
        fb.put_char(right, frame.y, '┐', style);
        fb.put_char(frame.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for x in frame.x.saturating_add(1)..right {
            fb.put_char(x, frame.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in frame.y.saturating_add(1)..bottom {
            fb.put_char(frame.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, frame: FrameRect, row: i32, col: i32, cell: Cell) {
        let x = frame.x as u32 + 1 + col as u32 * self.cell_w as u32;
        let y = frame.y as u32 + 1 + row as u32;
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return;
        };
        if x >= fb.width() || y >= fb.height() {
            return;
        }
        match cell {
            Cell::Empty => fb.fill_rect(x, y, self.cell_w, 1, '·', Style::new(DARK_GREY, LIGHT_GREY)),
            Cell::Filled(color) => {
                fb.fill_rect(x, y, self.cell_w, 1, ' ', Style::new(DARK_GREY, palette_rgb(color)))
            }
        }
    }

    /// Centered block of text lines over the board.
    fn draw_banner(&self, fb: &mut FrameBuffer, frame: FrameRect, lines: &[&str]) {
        let style = Style::new(TEXT, SCREEN_BG).bold();
        let inner = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
        let box_w = inner + 2;
        let box_h = lines.len() as u16 + 2;
        let x = frame.x + frame.w.saturating_sub(box_w) / 2;
        let y = frame.y + frame.h.saturating_sub(box_h) / 2;

        fb.fill_rect(x, y, box_w, box_h, ' ', style);
        for (i, line) in lines.iter().enumerate() {
            let pad = (inner - line.chars().count() as u16) / 2;
            fb.put_str(x + 1 + pad, y + 1 + i as u16, line, style);
        }
    }
}
