//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, EMPTY};

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

const FRAME_BG: Rgb = Rgb::hex(0xbbada0);
const EMPTY_BG: Rgb = Rgb::hex(0xcdc1b4);
const DARK_TEXT: Rgb = Rgb::hex(0x776e65);
const LIGHT_TEXT: Rgb = Rgb::hex(0xf9f6f2);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const HINT: &str = "arrows/wasd move  r restart  q quit";

/// Background colour for a tile value (classic palette, dark past 2048).
pub fn tile_color(value: Cell) -> Rgb {
    match value {
        EMPTY => EMPTY_BG,
        2 => Rgb::hex(0xeee4da),
        4 => Rgb::hex(0xede0c8),
        8 => Rgb::hex(0xf2b179),
        16 => Rgb::hex(0xf59563),
        32 => Rgb::hex(0xf67c5f),
        64 => Rgb::hex(0xf65e3b),
        128 => Rgb::hex(0xedcf72),
        256 => Rgb::hex(0xedcc61),
        512 => Rgb::hex(0xedc850),
        1024 => Rgb::hex(0xedc53f),
        2048 => Rgb::hex(0xedc22e),
        _ => Rgb::hex(0x3c3a32),
    }
}

fn tile_style(value: Cell) -> CellStyle {
    let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    CellStyle::plain(fg, tile_color(value)).bold()
}

/// A lightweight terminal renderer for the 2048 board.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits a six-digit value with a margin and keeps tiles roughly square.
        Self::new(7, 3)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size (including border) of the board frame for an `n x n` board.
    pub fn frame_size(&self, n: usize) -> (u16, u16) {
        let n = u16::try_from(n).unwrap_or(u16::MAX);
        (
            n.saturating_mul(self.cell_w).saturating_add(2),
            n.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let (frame_w, frame_h) = self.frame_size(snap.size);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::plain(FRAME_BG, PANEL_BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            CellStyle::plain(FRAME_BG, FRAME_BG),
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (r, row) in snap.board.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, r, c, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.over {
            draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if snap.won {
            draw_overlay(fb, start_x, start_y, frame_w, frame_h, "YOU WIN!");
        }

        let hint_y = start_y.saturating_add(frame_h);
        if hint_y < viewport.height {
            let hint = CellStyle::plain(Rgb::new(150, 150, 150), PANEL_BG).dim();
            fb.put_centered(start_x, hint_y, frame_w, HINT, hint);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: usize,
        col: usize,
        value: Cell,
    ) {
        let (Ok(row), Ok(col)) = (u16::try_from(row), u16::try_from(col)) else {
            return;
        };
        let px = start_x
            .saturating_add(1)
            .saturating_add(col.saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add(row.saturating_mul(self.cell_h));
        let style = tile_style(value);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let mid = py.saturating_add(self.cell_h / 2);
        if value == EMPTY {
            fb.put_centered(px, mid, self.cell_w, "·", style.dim());
        } else {
            fb.put_centered(px, mid, self.cell_w, &value.to_string(), style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        let rows: [(&str, String); 4] = [
            ("SCORE", snap.score.to_string()),
            ("BEST TILE", snap.max_tile.to_string()),
            ("MOVES", snap.moves.to_string()),
            ("TARGET", snap.target.to_string()),
        ];

        let mut y = start_y;
        for (name, text) in rows.iter() {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y.saturating_add(1), text, value);
            y = y.saturating_add(3);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;

    fb.put_char(x, y, '╭', style);
    fb.put_char(right, y, '╮', style);
    fb.put_char(x, bottom, '╰', style);
    fb.put_char(right, bottom, '╯', style);
    for cx in x + 1..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
}

fn draw_overlay(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let style = CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG).bold();
    let banner = format!(" {} ", text);
    fb.put_centered(x, y.saturating_add(h / 2), w, &banner, style);
}
