//! GridView: maps a [`GridSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GridSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellState, Coord, GameKind, GameStatus, MazeItem, PlayerId};

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

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();

/// Lays out the board, side panel and overlays for any grid game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    show_hints: bool,
}

impl Default for GridView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            show_hints: true,
        }
    }
}

/// Board origin and frame size for one render pass.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GridView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    /// Cell width suited to `kind`: tic-tac-toe needs room for `[X]`.
    pub fn for_kind(kind: GameKind) -> Self {
        match kind {
            GameKind::TicTacToe => Self::new(3),
            GameKind::Snake | GameKind::Maze => Self::default(),
        }
    }

    pub fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }

    pub fn cell_width(&self) -> u16 {
        self.cell_w
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GridSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let frame_w = snap.width.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = snap.height.saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            w: frame_w,
            h: frame_h,
        };

        fb.draw_box(frame.x, frame.y, frame.w, frame.h, BORDER);
        for y in 0..snap.height as i16 {
            for x in 0..snap.width as i16 {
                self.draw_cell(fb, frame, snap, Coord::new(x, y));
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);
        if let Some(text) = overlay_text(snap) {
            let mid_y = frame.y.saturating_add(frame.h / 2);
            fb.put_centered(frame.x, mid_y, frame.w, text, OVERLAY);
            if snap.status.is_terminal() {
                fb.put_centered(frame.x, mid_y.saturating_add(1), frame.w, "r: again", VALUE);
            }
        }

        if self.show_hints {
            let hint_y = frame.y.saturating_add(frame.h);
            if hint_y < viewport.height {
                fb.put_centered(0, hint_y, viewport.width, key_hint(snap.kind), VALUE.dim());
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GridSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, frame: Frame, snap: &GridSnapshot, pos: Coord) {
        let px = frame.x + 1 + pos.x as u16 * self.cell_w;
        let py = frame.y + 1 + pos.y as u16;
        let cell = snap.cell(pos.x, pos.y).unwrap_or_default();
        let (glyph, fg) = glyph(snap, pos, cell);
        let style = CellStyle::new(fg, BOARD_BG);

        if cell == CellState::Wall {
            fb.fill_rect(px, py, self.cell_w, 1, glyph, style);
            return;
        }

        fb.fill_rect(px, py, self.cell_w, 1, ' ', style);
        let style = if glyph == '·' { style.dim() } else { style.bold() };
        fb.put_char(px + (self.cell_w - 1) / 2, py, glyph, style);

        if snap.cursor == Some(pos) && self.cell_w >= 3 {
            let bracket = CellStyle::new(Rgb::new(240, 220, 80), BOARD_BG).bold();
            fb.put_char(px, py, '[', bracket);
            fb.put_char(px + self.cell_w - 1, py, ']', bracket);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GridSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let mut y = frame.y;
        fb.put_str(panel_x, y, title(snap.kind), OVERLAY);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATUS", LABEL);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, status_label(snap.status), VALUE);
        y = y.saturating_add(2);

        match snap.kind {
            GameKind::Snake => {
                fb.put_str(panel_x, y, "LENGTH", LABEL);
                y = y.saturating_add(1);
                fb.put_u32(panel_x, y, snap.entity.len() as u32, VALUE);
            }
            GameKind::TicTacToe => {
                fb.put_str(panel_x, y, "PLAYER", LABEL);
                y = y.saturating_add(1);
                if let Some(player) = snap.current_player {
                    fb.put_char(panel_x, y, player.mark(), VALUE.bold());
                }
            }
            GameKind::Maze => {
                fb.put_str(panel_x, y, "HEALTH", LABEL);
                y = y.saturating_add(1);
                if let Some((current, max)) = snap.health {
                    let mut x = panel_x;
                    x += fb.put_u32(x, y, current, VALUE);
                    x += fb.put_str(x, y, "/", VALUE);
                    fb.put_u32(x, y, max, VALUE);
                }
            }
        }
    }
}

/// Glyph and foreground color for one board cell.
fn glyph(snap: &GridSnapshot, pos: Coord, cell: CellState) -> (char, Rgb) {
    match snap.kind {
        GameKind::Snake if snap.head() == Some(pos) => return ('@', Rgb::new(120, 240, 120)),
        GameKind::Maze if snap.head() == Some(pos) => return ('P', Rgb::new(120, 200, 255)),
        _ => {}
    }

    match cell {
        CellState::Empty => ('·', Rgb::new(90, 90, 100)),
        CellState::Wall => ('█', Rgb::new(150, 150, 160)),
        CellState::Food => ('*', Rgb::new(240, 90, 90)),
        CellState::Exit => ('E', Rgb::new(240, 220, 80)),
        CellState::Occupied(player) if snap.kind == GameKind::TicTacToe => match player {
            PlayerId::One => ('X', Rgb::new(80, 220, 220)),
            PlayerId::Two => ('O', Rgb::new(220, 120, 200)),
        },
        CellState::Occupied(_) => ('o', Rgb::new(100, 200, 100)),
        CellState::Item(MazeItem::Treasure { .. }) => ('T', Rgb::new(255, 200, 60)),
        CellState::Item(MazeItem::Trap { .. }) => ('^', Rgb::new(220, 80, 80)),
        CellState::Item(MazeItem::Potion { .. }) => ('+', Rgb::new(120, 220, 140)),
    }
}

fn overlay_text(snap: &GridSnapshot) -> Option<&'static str> {
    match (snap.status, snap.kind) {
        (GameStatus::Running, _) => None,
        (GameStatus::Paused, _) => Some("PAUSED"),
        (GameStatus::Draw, _) => Some("DRAW"),
        (GameStatus::Lost, _) => Some("GAME OVER"),
        (GameStatus::Won(PlayerId::One), GameKind::TicTacToe) => Some("X WINS"),
        (GameStatus::Won(PlayerId::Two), GameKind::TicTacToe) => Some("O WINS"),
        (GameStatus::Won(_), GameKind::Maze) => Some("ESCAPED"),
        (GameStatus::Won(_), GameKind::Snake) => Some("YOU WIN"),
    }
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Running => "PLAYING",
        GameStatus::Paused => "PAUSED",
        GameStatus::Won(_) => "WON",
        GameStatus::Lost => "LOST",
        GameStatus::Draw => "DRAW",
    }
}

fn title(kind: GameKind) -> &'static str {
    match kind {
        GameKind::Snake => "SNAKE",
        GameKind::TicTacToe => "TIC-TAC-TOE",
        GameKind::Maze => "MAZE",
    }
}

fn key_hint(kind: GameKind) -> &'static str {
    match kind {
        GameKind::Snake => "arrows/wasd steer  p pause  r restart  q quit",
        GameKind::TicTacToe => "arrows move  space mark  r restart  q quit",
        GameKind::Maze => "arrows/wasd walk  p pause  r restart  q quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridGame, MazeGame, SnakeGame, TicTacToe};
    use crate::types::{Direction, Intent};

    fn board_row(fb: &FrameBuffer, view: &GridView, snap: &GridSnapshot, vp: Viewport, y: u16) -> String {
        let frame_w = snap.width * view.cell_width() + 2;
        let frame_h = snap.height + 2;
        let x0 = vp.width.saturating_sub(frame_w) / 2;
        let y0 = vp.height.saturating_sub(frame_h) / 2;
        fb.row_text(y0 + 1 + y)
            .chars()
            .skip(x0 as usize + 1)
            .take((snap.width * view.cell_width()) as usize)
            .collect()
    }

    #[test]
    fn test_snake_glyphs() {
        let game = SnakeGame::new(10, 6, 1);
        let snap = game.snapshot();
        let view = GridView::default();
        let vp = Viewport::new(60, 20);
        let fb = view.render(&snap, vp);

        let row = board_row(&fb, &view, &snap, vp, 3);
        assert!(row.contains("o o @ "), "row was {:?}", row);
        let text: String = (0..vp.height).map(|y| fb.row_text(y)).collect();
        assert!(text.contains('*'), "food is drawn");
        assert!(text.contains("SNAKE"));
        assert!(text.contains("LENGTH"));
    }

    #[test]
    fn test_tictactoe_cursor_brackets() {
        let mut game = TicTacToe::new();
        game.set_intent(Intent::Commit);
        game.tick();
        let snap = game.snapshot();
        let view = GridView::for_kind(GameKind::TicTacToe);
        let vp = Viewport::new(50, 12);
        let fb = view.render(&snap, vp);

        assert_eq!(board_row(&fb, &view, &snap, vp, 0), "[X] ·  · ");
        let text: String = (0..vp.height).map(|y| fb.row_text(y)).collect();
        assert!(text.contains("PLAYER"));
    }

    #[test]
    fn test_maze_shows_walker_and_health() {
        let game = MazeGame::new(12, 8, 3);
        let snap = game.snapshot();
        let view = GridView::default();
        let vp = Viewport::new(60, 20);
        let fb = view.render(&snap, vp);

        assert!(board_row(&fb, &view, &snap, vp, 1).starts_with("██P "));
        let text: String = (0..vp.height).map(|y| fb.row_text(y)).collect();
        assert!(text.contains("100/100"));
        assert!(board_row(&fb, &view, &snap, vp, 6).ends_with("E ██"));
    }

    #[test]
    fn test_overlays() {
        let mut snap = TicTacToe::new().snapshot();
        assert_eq!(overlay_text(&snap), None);

        snap.status = GameStatus::Won(PlayerId::One);
        assert_eq!(overlay_text(&snap), Some("X WINS"));
        snap.status = GameStatus::Draw;
        assert_eq!(overlay_text(&snap), Some("DRAW"));

        let mut game = SnakeGame::new(10, 10, 1);
        game.set_intent(Intent::TogglePause);
        game.tick();
        let view = GridView::default();
        let fb = view.render(&game.snapshot(), Viewport::new(60, 20));
        let text: String = (0..20).map(|y| fb.row_text(y)).collect();
        assert!(text.contains("PAUSED"));
    }

    #[test]
    fn test_lost_snake_shows_game_over() {
        let mut game = SnakeGame::new(5, 5, 1);
        game.set_intent(Intent::Steer(Direction::Up));
        while !game.status().is_terminal() {
            game.tick();
        }
        let fb = GridView::default().render(&game.snapshot(), Viewport::new(40, 12));
        let text: String = (0..12).map(|y| fb.row_text(y)).collect();
        assert!(text.contains("GAME OVER"));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let snap = MazeGame::new(40, 30, 9).snapshot();
        let fb = GridView::default().render(&snap, Viewport::new(10, 4));
        assert_eq!((fb.width(), fb.height()), (10, 4));
    }
}
