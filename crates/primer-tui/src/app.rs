//! Application core: event loop, key routing, patch application.
//!
//! The core `Controller` owns all state. The app keeps a copy of the last
//! `Screen` it was told about and brings it up to date with the patches
//! each dispatch returns; rendering only ever reads that copy.

use std::collections::HashMap;
use std::mem::Discriminant;
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs},
};
use tracing::{debug, info};

use primer_core::reconcile::{self, Patch};
use primer_core::view::{ModalView, PageView, Screen};
use primer_core::{Command, Controller, Page, TimerDriver};

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screens::{create_screens, sheet::SheetOverlay};
use crate::theme::{self, Palette};
use crate::tui::Tui;

/// Top-level application state and event loop.
pub struct App<D> {
    controller: Controller<D>,
    /// What is on screen, kept current by applying patches.
    screen: Screen,
    /// Page components, keyed by Page.
    screens: HashMap<Page, Box<dyn Component>>,
    sheet: SheetOverlay,
    running: bool,
    help_visible: bool,
}

fn modal_kind(modal: Option<&ModalView>) -> Option<Discriminant<ModalView>> {
    modal.map(std::mem::discriminant)
}

impl<D: TimerDriver> App<D> {
    pub fn new(controller: Controller<D>) -> Self {
        let screen = controller.screen().clone();
        let mut app = Self {
            controller,
            screen,
            screens: create_screens().into_iter().collect(),
            sheet: SheetOverlay::default(),
            running: true,
            help_visible: false,
        };
        app.sheet.reset(&app.screen);
        app
    }

    /// Run the main event loop. `events` must be the queue the controller's
    /// banner driver posts into.
    pub async fn run(&mut self, mut events: EventReader) -> Result<()> {
        let mut tui = Tui::enter()?;
        events.listen();

        info!(page = %self.screen.chrome.page, "TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };
            if self.handle_event(event)? {
                tui.draw(|frame| self.render(frame))?;
            }
        }

        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Apply one queued event. Returns whether it is time to redraw.
    fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) => {
                if let Some(action) = self.handle_key_event(key)? {
                    self.process_action(action);
                }
            }
            Event::Resize(w, h) => debug!(w, h, "terminal resized"),
            Event::Expire => self.dispatch(Command::ExpireNotifications),
            Event::Banner(generation) => self.dispatch(Command::BannerTick(generation)),
            Event::Render => return Ok(true),
        }
        Ok(false)
    }

    // ── Input ────────────────────────────────────────────────────────

    /// Map a key event to an action. An open sheet or a focused text field
    /// sees keys first; global keys come next, then the active page.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
                _ => None,
            });
        }

        if self.screen.chrome.scroll_locked {
            return self.sheet.handle_key_event(key, &self.screen);
        }

        let page = self.screen.chrome.page;
        if let Some(component) = self.screens.get_mut(&page) {
            if component.capturing_input() {
                return component.handle_key_event(key, &self.screen);
            }
        }

        if let Some(action) = self.global_key(key) {
            return Ok(Some(action));
        }

        match self.screens.get_mut(&page) {
            Some(component) => component.handle_key_event(key, &self.screen),
            None => Ok(None),
        }
    }

    fn global_key(&self, key: KeyEvent) -> Option<Action> {
        let command = match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Some(Action::Quit),
            (_, KeyCode::Char('?')) => return Some(Action::ToggleHelp),

            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='4')) => {
                let n = c.to_digit(10).and_then(|d| u8::try_from(d).ok())?;
                Command::Navigate(Page::from_number(n)?)
            }
            (KeyModifiers::NONE, KeyCode::Tab) => Command::Navigate(self.screen.chrome.page.next()),
            (_, KeyCode::BackTab) => Command::Navigate(self.screen.chrome.page.prev()),

            (KeyModifiers::ALT, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('[') | KeyCode::Esc) => {
                Command::Back
            }
            (KeyModifiers::ALT, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char(']')) => {
                Command::Forward
            }

            (KeyModifiers::NONE, KeyCode::Char('t')) => Command::ToggleTheme,
            (KeyModifiers::NONE, KeyCode::Char('X')) | (KeyModifiers::SHIFT, KeyCode::Char('X')) => {
                let newest = self.screen.notifications.last()?;
                Command::DismissNotification(newest.id)
            }
            _ => return None,
        };
        Some(command.into())
    }

    // ── Actions ──────────────────────────────────────────────────────

    fn process_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::ToggleHelp => self.help_visible = !self.help_visible,
            Action::Dispatch(command) => self.dispatch(command),
        }
    }

    /// Hand `command` to the controller and patch the local screen.
    fn dispatch(&mut self, command: Command) {
        let patches = self.controller.dispatch(command);
        if patches.is_empty() {
            return;
        }

        let page_before = self.screen.chrome.page;
        let modal_before = modal_kind(self.screen.modal.as_ref());
        reconcile::apply(&mut self.screen, &patches);
        debug_assert_eq!(&self.screen, self.controller.screen());
        debug!(patches = patches.len(), "screen patched");

        let page_changed = patches
            .iter()
            .any(|p| matches!(p, Patch::SetChrome(c) if c.page != page_before));
        if page_changed {
            if let Some(component) = self.screens.get_mut(&self.screen.chrome.page) {
                component.reset(&self.screen);
            }
        }
        if modal_kind(self.screen.modal.as_ref()) != modal_before {
            self.sheet.reset(&self.screen);
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let palette = theme::palette(self.screen.chrome.theme);
        frame.render_widget(Block::default().style(palette.base()), area);

        let layout = Layout::vertical([
            Constraint::Length(1), // Tab bar
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        self.render_tab_bar(frame, layout[0], palette);

        match &self.screen.body {
            PageView::Error { message } => render_fault(frame, layout[1], message, palette),
            _ => {
                if let Some(component) = self.screens.get(&self.screen.chrome.page) {
                    component.render(frame, layout[1], &self.screen, palette);
                }
            }
        }

        if self.screen.modal.is_some() {
            self.sheet.render(frame, layout[1], &self.screen, palette);
        }

        self.render_status_bar(frame, layout[2], palette);
        self.render_notifications(frame, layout[1]);

        if self.help_visible {
            render_help_overlay(frame, area, palette);
        }
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let active = self.screen.chrome.page;
        let titles: Vec<Line> = Page::ALL
            .iter()
            .enumerate()
            .map(|(i, &page)| {
                let style = if page == active {
                    palette.tab_active()
                } else {
                    palette.tab_inactive()
                };
                Line::from(Span::styled(format!(" {} {} ", i + 1, page.label()), style))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled(" ", palette.key_hint()))
            .select(Page::ALL.iter().position(|&p| p == active).unwrap_or(0));
        frame.render_widget(tabs, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let chrome = &self.screen.chrome;
        let arrow = |enabled: bool, glyph: &'static str| {
            let style = if enabled {
                palette.key_hint_key()
            } else {
                palette.key_hint()
            };
            Span::styled(glyph, style)
        };
        let theme_icon = if chrome.theme.is_dark() { "☾" } else { "☀" };

        let line = Line::from(vec![
            Span::raw(" "),
            arrow(chrome.can_go_back, "◀"),
            Span::raw(" "),
            arrow(chrome.can_go_forward, "▶"),
            Span::styled(format!(" {} ", chrome.fragment), palette.title()),
            Span::styled(format!("{theme_icon} "), palette.muted()),
            Span::styled("│ ? help  [ ] history  t theme  q quit", palette.key_hint()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    /// Toasts stack upward from the bottom-right corner, newest lowest.
    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        let height = 3u16;
        let mut bottom = area.y + area.height;
        for note in self.screen.notifications.iter().rev() {
            if bottom < area.y + height {
                break;
            }
            let msg_len = u16::try_from(note.message.chars().count()).unwrap_or(u16::MAX);
            let width = msg_len.saturating_add(6).clamp(20, 60).min(area.width);
            let toast = Rect::new(area.x + area.width - width, bottom - height, width, height);
            bottom -= height;

            let (color, icon) = theme::notification(note.level);
            frame.render_widget(Clear, toast);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(theme::BG_DARK));
            let inner = block.inner(toast);
            frame.render_widget(block, toast);
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(format!(" {icon} "), Style::default().fg(color)),
                    Span::styled(note.message.as_str(), Style::default().fg(theme::DIM_WHITE)),
                ])),
                inner,
            );
        }
    }
}

fn render_fault(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let text = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), palette.error()),
        Line::from(""),
        Line::styled("  Press 1 for home or [ to go back.", palette.muted()),
    ];
    frame.render_widget(Paragraph::new(text), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, palette: &Palette) {
    let width = 56u16.min(area.width.saturating_sub(4));
    let height = 18u16.min(area.height.saturating_sub(2));
    let help_area = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );
    frame.render_widget(Clear, help_area);

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_focused())
        .style(palette.base());
    let inner = block.inner(help_area);
    frame.render_widget(block, help_area);

    let row = |key: &'static str, label: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), palette.key_hint_key()),
            Span::styled(label, palette.key_hint()),
        ])
    };
    let text = vec![
        Line::styled("  Navigation", palette.title()),
        row("1-4", "Home, Browse, Favorites, Profile"),
        row("Tab", "Next page"),
        row("[ / ]", "Back / forward"),
        row("j/k ↑/↓", "Move selection"),
        row("Enter", "Open listing"),
        row("f", "Save / unsave listing"),
        Line::from(""),
        Line::styled("  Global", palette.title()),
        row("t", "Toggle dark mode"),
        row("X", "Dismiss newest notification"),
        row("Esc", "Close sheet / back"),
        row("q", "Quit"),
        Line::from(""),
        Line::styled("                 Esc or ? to close", palette.key_hint()),
    ];
    frame.render_widget(Paragraph::new(text), inner);
}
