//! Terminal ownership for the session.
//!
//! [`Tui::enter`] takes the terminal over (raw mode, alternate screen,
//! window title) and dropping the guard gives it back. The panic hook does
//! the same before printing, so a crash never leaves the shell in raw mode.

use std::io::{Stdout, stdout};
use std::path::Path;

use color_eyre::eyre::Result;
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};

const WINDOW_TITLE: &str = "Primer Housing";

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let prepared = execute!(stdout(), EnterAlternateScreen, SetTitle(WINDOW_TITLE), cursor::Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(stdout())))
            .and_then(|mut terminal| terminal.clear().map(|()| terminal));
        match prepared {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                restore();
                Err(e.into())
            }
        }
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        restore();
    }
}

/// Best-effort: every step runs even if an earlier one fails.
fn restore() {
    let _ = execute!(stdout(), cursor::Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

/// Install panic and error hooks that restore the terminal before printing.
/// Reports point at `log_file`, which holds the session's trace.
///
/// Must be called before [`Tui::enter`].
pub fn install_hooks(log_file: &Path) -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .panic_section(format!("Session log: {}", log_file.display()))
        .into_hooks();

    eyre_hook.install()?;

    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        panic_hook(info);
    }));

    Ok(())
}
