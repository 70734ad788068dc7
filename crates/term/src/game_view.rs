//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The board is drawn as a diamond: screen column follows `x - y` and
//! screen row follows `x + y`, so the initially empty diagonal reads as
//! the horizontal band across the middle. Moving the cursor "up" in grid
//! terms therefore travels up-left on screen.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Coord, Phase};

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

/// Per-frame UI state owned by the event loop, not the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudState {
    /// The cell the cursor is on.
    pub cursor: Coord,
    /// Elapsed play time; frozen at the solve time once solved.
    pub elapsed_secs: u64,
}

/// Width of one drawn tile in terminal columns.
const TILE_W: u16 = 4;
/// Horizontal half-step between diagonally adjacent cells.
const HALF_W: u16 = 3;

/// Tile text colors, cycled by value like the reference palette.
const TILE_COLORS: [Rgb; 10] = [
    Rgb::new(255, 107, 107),
    Rgb::new(78, 205, 196),
    Rgb::new(69, 183, 209),
    Rgb::new(255, 160, 122),
    Rgb::new(152, 216, 200),
    Rgb::new(247, 220, 111),
    Rgb::new(233, 93, 114),
    Rgb::new(102, 185, 51),
    Rgb::new(165, 117, 245),
    Rgb::new(255, 157, 50),
];

/// A lightweight terminal view for the puzzle.
#[derive(Default)]
pub struct GameView;

impl GameView {
    /// Render the current snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to
    /// the viewport and cleared every call.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        match snap.phase {
            Phase::NotStarted => self.draw_menu(fb, viewport),
            Phase::InProgress | Phase::Solved => {
                self.draw_board(snap, hud, viewport, fb);
                self.draw_side_panel(snap, hud, viewport, fb);
                self.draw_help_line(snap, viewport, fb);
                if snap.phase == Phase::Solved {
                    self.draw_solved_overlay(hud, viewport, fb);
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &HudState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    /// Screen position of a cell's leftmost column, given the board origin.
    fn cell_origin(&self, origin: (u16, u16), n: u8, cell: Coord) -> (u16, u16) {
        let diag = (cell.x as i32 - cell.y as i32) + (n as i32 - 1);
        let col = origin.0 + (diag as u16) * HALF_W;
        let row = origin.1 + (cell.x as u16 + cell.y as u16);
        (col, row)
    }

    fn board_extent(&self, n: u8) -> (u16, u16) {
        let w = 2 * (n as u16 - 1) * HALF_W + TILE_W;
        let h = 2 * (n as u16) - 1;
        (w, h)
    }

    fn board_origin(&self, n: u8, viewport: Viewport) -> (u16, u16) {
        let (w, h) = self.board_extent(n);
        (
            viewport.width.saturating_sub(w) / 2,
            viewport.height.saturating_sub(h) / 2,
        )
    }

    fn draw_board(
        &self,
        snap: &GameSnapshot,
        hud: &HudState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let n = snap.size;
        if n == 0 {
            return;
        }
        let origin = self.board_origin(n, viewport);

        for y in 0..n {
            for x in 0..n {
                let cell = Coord::new(x, y);
                let (col, row) = self.cell_origin(origin, n, cell);
                let on_cursor = hud.cursor == cell;
                let is_held = snap.held.map(|h| h.source) == Some(cell);

                match snap.tile(x, y) {
                    Some(value) => {
                        let locked = snap.is_locked(x, y);
                        self.draw_tile(fb, col, row, value, locked, on_cursor, is_held);
                    }
                    None => self.draw_empty_slot(fb, col, row, on_cursor),
                }
            }
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        col: u16,
        row: u16,
        value: u8,
        locked: bool,
        on_cursor: bool,
        is_held: bool,
    ) {
        let fg = if locked {
            // Locked tiles go gold and stay that way.
            Rgb::new(255, 215, 0)
        } else {
            TILE_COLORS[(value as usize - 1) % TILE_COLORS.len()]
        };
        let bg = if on_cursor {
            Rgb::new(70, 70, 90)
        } else {
            Rgb::new(30, 30, 40)
        };
        let style = CellStyle {
            fg,
            bg,
            bold: locked || on_cursor,
            dim: is_held,
        };

        let (open, close) = if locked { ('⟨', '⟩') } else { ('[', ']') };
        fb.put_char(col, row, open, style);
        let digits = format!("{:>2}", value);
        fb.put_str(col + 1, row, &digits, style);
        fb.put_char(col + 3, row, close, style);
    }

    fn draw_empty_slot(&self, fb: &mut FrameBuffer, col: u16, row: u16, on_cursor: bool) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: if on_cursor {
                Rgb::new(70, 70, 90)
            } else {
                Rgb::new(0, 0, 0)
            },
            bold: on_cursor,
            dim: !on_cursor,
        };
        fb.put_str(col, row, " ·· ", style);
    }

    fn draw_side_panel(
        &self,
        snap: &GameSnapshot,
        hud: &HudState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let (board_w, _) = self.board_extent(snap.size);
        let origin = self.board_origin(snap.size, viewport);
        let panel_x = origin.0.saturating_add(board_w).saturating_add(3);
        if panel_x + 10 >= viewport.width {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle::default();

        let mut y = origin.1;
        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}s", hud.elapsed_secs), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LOCKED", label);
        y = y.saturating_add(1);
        fb.put_str(
            panel_x,
            y,
            &format!("{}/{}", snap.locked_count, snap.total_tiles),
            value,
        );
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HELD", label);
        y = y.saturating_add(1);
        match snap.held {
            Some(held) => fb.put_str(panel_x, y, &format!("{}", held.value), value),
            None => fb.put_str(panel_x, y, "-", value),
        }
    }

    fn draw_help_line(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        let style = CellStyle {
            fg: Rgb::new(140, 140, 140),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };
        let text = if snap.held.is_some() {
            "arrows: cursor | space: drop | esc: cancel | r: menu | q: quit"
        } else {
            "arrows: cursor | space: pick up | r: menu | q: quit"
        };
        let x = viewport.width.saturating_sub(text.len() as u16) / 2;
        fb.put_str(x, viewport.height.saturating_sub(1), text, style);
    }

    fn draw_solved_overlay(&self, hud: &HudState, viewport: Viewport, fb: &mut FrameBuffer) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 100, 0),
            bold: true,
            dim: false,
        };
        let text = format!(" SOLVED - Time: {}s ", hud.elapsed_secs);
        let x = viewport.width.saturating_sub(text.len() as u16) / 2;
        let y = viewport.height / 2;
        fb.put_str(x, y, &text, style);

        let hint = " r: play again | q: quit ";
        let hx = viewport.width.saturating_sub(hint.len() as u16) / 2;
        fb.put_str(hx, y.saturating_add(1), hint, style);
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let title = CellStyle {
            fg: Rgb::new(247, 220, 111),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let body = CellStyle::default();
        let dim = CellStyle {
            dim: true,
            ..CellStyle::default()
        };

        let lines: [(&str, CellStyle); 8] = [
            ("P A I R L O C K", title),
            ("", body),
            ("Slide tiles into adjacent empty cells.", body),
            ("When two equal tiles touch, both lock in place.", body),
            ("Lock every tile to solve the puzzle.", body),
            ("", body),
            ("Press 2-9 to choose a board size and start.", body),
            ("q: quit", dim),
        ];

        let start_y = viewport.height.saturating_sub(lines.len() as u16) / 2;
        for (i, (text, style)) in lines.iter().enumerate() {
            let x = viewport.width.saturating_sub(text.len() as u16) / 2;
            fb.put_str(x, start_y + i as u16, text, *style);
        }
    }
}
