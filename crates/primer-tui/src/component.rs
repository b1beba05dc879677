//! Component trait, the building block for every page and overlay.
//!
//! Components keep only terminal-local state (selection, text cursors).
//! Everything they draw comes from the `Screen` description the core
//! controller maintains.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use primer_core::view::Screen;

use crate::action::Action;
use crate::theme::Palette;

/// Lifecycle: `reset` when the component's view changes identity, then
/// (`handle_key_event` | `render`)*.
pub trait Component {
    /// Handle a keyboard event. Return an Action to dispatch, or None.
    fn handle_key_event(&mut self, _key: KeyEvent, _screen: &Screen) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Render into the provided frame area.
    fn render(&self, frame: &mut Frame, area: Rect, screen: &Screen, palette: &Palette);

    /// Called when the page is shown again or its sheet is replaced.
    fn reset(&mut self, _screen: &Screen) {}

    /// Whether a text field currently owns the keyboard.
    fn capturing_input(&self) -> bool {
        false
    }
}
