//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure, no I/O. Board geometry comes from the snapshot, so any supported
//! board size renders without configuration.

use crate::core::{GameSnapshot, PieceShape};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Color, GameStatus};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const PANEL_W: u16 = 14;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board rendering parameters.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Columns per board cell
    cell_w: u16,
    /// Rows per board cell
    cell_h: u16,
    anchor_y: AnchorY,
    show_ghost: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps cells roughly square.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
            show_ghost: true,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_ghost(mut self, show: bool) -> Self {
        self.show_ghost = show;
        self
    }

    /// Columns and rows needed for the framed board plus side panel
    pub fn required_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size(snap);
        (frame_w + 2 + PANEL_W, frame_h)
    }

    fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            snap.width as u16 * self.cell_w + 2,
            snap.height as u16 * self.cell_h + 2,
        )
    }

    /// Render into a reusable framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (need_w, need_h) = self.required_size(snap);
        if viewport.width < need_w || viewport.height < need_h {
            self.draw_too_small(fb, viewport, need_w, need_h);
            return;
        }

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(need_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let origin = (start_x + 1, start_y + 1);

        fb.fill_rect(
            origin.0,
            origin.1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            Style::new(BOARD_BG, BOARD_BG),
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h, Style::default());

        let dot = Style::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        for y in 0..snap.height as i8 {
            for x in 0..snap.width as i8 {
                match snap.cell(x, y) {
                    Some(color) => self.draw_block(fb, origin, x, y, color),
                    None => self.fill_cell(fb, origin, x, y, '·', dot),
                }
            }
        }

        if self.show_ghost && snap.status != GameStatus::GameOver {
            let style = Style::new(Rgb::from(snap.active.color).scaled(1, 2), BOARD_BG).dim();
            for &(x, y) in snap.ghost.iter() {
                if self.on_board(snap, x, y) && snap.cell(x, y).is_none() {
                    self.fill_cell(fb, origin, x, y, '░', style);
                }
            }
        }

        for &(x, y) in snap.active.cells.iter() {
            if self.on_board(snap, x, y) {
                self.draw_block(fb, origin, x, y, snap.active.color);
            }
        }

        self.draw_side_panel(fb, snap, start_x + frame_w + 2, start_y);

        match snap.status {
            GameStatus::Paused => {
                draw_overlay(fb, start_x, start_y, frame_w, frame_h, &["PAUSED", "P to resume"])
            }
            GameStatus::GameOver => draw_overlay(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["GAME OVER", "ENTER to restart"],
            ),
            GameStatus::InProgress => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn on_board(&self, snap: &GameSnapshot, x: i8, y: i8) -> bool {
        x >= 0 && y >= 0 && x < snap.width as i8 && y < snap.height as i8
    }

    fn draw_block(&self, fb: &mut FrameBuffer, origin: (u16, u16), x: i8, y: i8, color: Color) {
        let style = Style::new(Rgb::from(color), BOARD_BG).bold();
        self.fill_cell(fb, origin, x, y, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        x: i8,
        y: i8,
        ch: char,
        style: Style,
    ) {
        let px = origin.0 + x as u16 * self.cell_w;
        let py = origin.1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, top: u16) {
        let label = Style::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = top;
        for (name, number) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("SPEED", snap.velocity),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, number, value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        draw_preview(fb, x, y, &snap.next.cells, snap.next.color, self.cell_w);
        y += 5;

        let status = match snap.status {
            GameStatus::InProgress => "PLAYING",
            GameStatus::Paused => "PAUSED",
            GameStatus::GameOver => "OVER",
        };
        fb.put_str(x, y, status, value.dim());
    }

    fn draw_too_small(&self, fb: &mut FrameBuffer, viewport: Viewport, need_w: u16, need_h: u16) {
        let style = Style::default().bold();
        let y = viewport.height / 2;
        let end = fb.put_str(0, y, "Terminal too small, need ", style);
        let end = fb.put_u32(end, y, need_w as u32, style);
        let end = fb.put_str(end, y, "x", style);
        fb.put_u32(end, y, need_h as u32, style);
    }
}

/// Next piece drawn from its shape offsets, shifted so the top-left cell is at (x, y)
fn draw_preview(
    fb: &mut FrameBuffer,
    x: u16,
    y: u16,
    shape: &PieceShape,
    color: Color,
    cell_w: u16,
) {
    let min_x = shape.iter().map(|c| c.0).min().unwrap_or(0);
    let min_y = shape.iter().map(|c| c.1).min().unwrap_or(0);
    let style = Style::new(Rgb::from(color), PANEL_BG).bold();
    for &(dx, dy) in shape.iter() {
        let px = x + (dx - min_x) as u16 * cell_w;
        let py = y + (dy - min_y) as u16;
        fb.fill_rect(px, py, cell_w, 1, '█', style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
    if w < 2 || h < 2 {
        return;
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, lines: &[&str]) {
    let style = Style::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    let first = (y + h / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let tx = x + w.saturating_sub(text_w) / 2;
        fb.put_str(tx, first + i as u16, text, style);
    }
}
