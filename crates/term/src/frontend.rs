//! Terminal output for a session.

use std::io::{self, Write};

use anyhow::Result;
use grid_arcade_engine::FrameSink;

use crate::core::GridSnapshot;
use crate::fb::FrameBuffer;
use crate::game_view::{GridView, Viewport};
use crate::renderer::TerminalRenderer;
use crate::types::GameKind;

/// Fallback when the terminal size cannot be queried.
const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

/// Renders snapshots to the terminal, reusing one framebuffer.
pub struct TerminalFrontend<W: Write = io::Stdout> {
    view: GridView,
    renderer: TerminalRenderer<W>,
    fb: FrameBuffer,
    /// Fixed size instead of the live terminal size.
    viewport: Option<Viewport>,
}

impl TerminalFrontend {
    pub fn new(kind: GameKind) -> Self {
        Self {
            view: GridView::for_kind(kind),
            renderer: TerminalRenderer::new(),
            fb: FrameBuffer::new(0, 0),
            viewport: None,
        }
    }
}

impl<W: Write> TerminalFrontend<W> {
    /// Render to `out` at a fixed viewport size.
    pub fn with_writer(kind: GameKind, out: W, viewport: Viewport) -> Self {
        Self {
            view: GridView::for_kind(kind),
            renderer: TerminalRenderer::with_writer(out),
            fb: FrameBuffer::new(viewport.width, viewport.height),
            viewport: Some(viewport),
        }
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    fn viewport(&self) -> Viewport {
        self.viewport.unwrap_or_else(|| {
            crossterm::terminal::size()
                .map(|(w, h)| Viewport::new(w, h))
                .unwrap_or(DEFAULT_VIEWPORT)
        })
    }
}

impl<W: Write> FrameSink for TerminalFrontend<W> {
    fn present(&mut self, snap: &GridSnapshot) -> Result<()> {
        let viewport = self.viewport();
        self.view.render_into(snap, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridGame, TicTacToe};

    #[test]
    fn presents_into_writer() {
        let game = TicTacToe::new();
        let mut frontend =
            TerminalFrontend::with_writer(GameKind::TicTacToe, Vec::new(), Viewport::new(40, 10));
        frontend.present(&game.snapshot()).unwrap();

        let written = String::from_utf8_lossy(frontend.renderer().writer()).into_owned();
        assert!(written.contains("TIC-TAC-TOE"));
        assert!(written.contains("PLAYER"));
    }
}
