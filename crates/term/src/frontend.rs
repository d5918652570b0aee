//! TermFrontend: the engine's render hook and game-over alert on a real terminal.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::error;

use crate::core::{Frame, Frontend};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::input::should_quit;
use crate::renderer::TerminalRenderer;

/// How the player dismissed the game-over alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgment {
    /// Start the next round
    Continue,
    /// Leave the game (the quit chord was pressed)
    Quit,
}

/// Classify a key read while the game-over alert is up; `None` keeps waiting.
pub fn acknowledgment(key: &KeyEvent) -> Option<Acknowledgment> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(*key) {
        Some(Acknowledgment::Quit)
    } else {
        Some(Acknowledgment::Continue)
    }
}

/// Draws engine frames with a [`GameView`] and blocks on game over until a key is pressed.
///
/// [`Frontend`] methods cannot return errors, so the first terminal failure is kept
/// and later calls become no-ops; the event loop collects it with
/// [`TermFrontend::take_error`].
pub struct TermFrontend {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    error: Option<anyhow::Error>,
    quit_requested: bool,
}

impl TermFrontend {
    pub fn new(renderer: TerminalRenderer, view: GameView) -> Self {
        Self {
            renderer,
            view,
            fb: FrameBuffer::new(0, 0),
            error: None,
            quit_requested: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Force a full redraw on the next frame (after a resize).
    pub fn invalidate(&mut self) {
        self.renderer.invalidate();
    }

    /// The first terminal error hit by a draw or alert, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    /// True once the player quit from the game-over alert
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    fn viewport(&self) -> Viewport {
        let (w, h) = self.renderer.size();
        Viewport::new(w, h)
    }

    fn record(&mut self, result: Result<()>) {
        if let Err(e) = result {
            error!("terminal output failed: {:#}", e);
            if self.error.is_none() {
                self.error = Some(e);
            }
        }
    }

    fn show_game_over(&mut self, final_score: u32) -> Result<()> {
        self.view.draw_game_over(&mut self.fb, final_score);
        self.renderer.draw(&self.fb)?;

        // Keys already queued (held arrows) must not count as the acknowledgment.
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
        loop {
            if let Event::Key(key) = event::read()? {
                match acknowledgment(&key) {
                    Some(Acknowledgment::Quit) => {
                        self.quit_requested = true;
                        return Ok(());
                    }
                    Some(Acknowledgment::Continue) => return Ok(()),
                    None => {}
                }
            }
        }
    }
}

impl Frontend for TermFrontend {
    fn draw(&mut self, frame: &Frame<'_>) {
        if self.error.is_some() {
            return;
        }
        let viewport = self.viewport();
        self.view.render_into(frame, viewport, &mut self.fb);
        let result = self.renderer.draw(&self.fb);
        self.record(result);
    }

    fn game_over(&mut self, final_score: u32) {
        if self.error.is_some() {
            return;
        }
        let result = self.show_game_over(final_score);
        self.record(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn quit_chord_ends_the_alert_with_quit() {
        assert_eq!(
            acknowledgment(&KeyEvent::from(KeyCode::Char('q'))),
            Some(Acknowledgment::Quit)
        );
        assert_eq!(
            acknowledgment(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Acknowledgment::Quit)
        );
    }

    #[test]
    fn other_presses_continue() {
        assert_eq!(
            acknowledgment(&KeyEvent::from(KeyCode::Enter)),
            Some(Acknowledgment::Continue)
        );
        assert_eq!(
            acknowledgment(&KeyEvent::from(KeyCode::Esc)),
            Some(Acknowledgment::Continue)
        );
    }

    #[test]
    fn releases_and_repeats_keep_waiting() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(acknowledgment(&release), None);

        let repeat =
            KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(acknowledgment(&repeat), None);
    }
}
