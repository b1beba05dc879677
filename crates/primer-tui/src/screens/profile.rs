//! Profile page: identity, contact details, bookings, preferences.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use primer_core::Command;
use primer_core::view::{PageView, ProfileView, Screen};

use super::{Cursor, hints, panel};
use crate::action::Action;
use crate::component::Component;
use crate::theme::Palette;

#[derive(Debug, Default)]
pub struct ProfileScreen {
    contact: Cursor,
}

fn view(screen: &Screen) -> Option<&ProfileView> {
    match &screen.body {
        PageView::Profile(v) => Some(v),
        _ => None,
    }
}

fn switch(on: bool) -> &'static str {
    if on { "[on ]" } else { "[off]" }
}

impl Component for ProfileScreen {
    fn handle_key_event(&mut self, key: KeyEvent, screen: &Screen) -> Result<Option<Action>> {
        let Some(view) = view(screen) else {
            return Ok(None);
        };
        if self.contact.handle(key, view.contacts.len()) {
            return Ok(None);
        }
        let action = match key.code {
            KeyCode::Enter | KeyCode::Char('e') => self
                .contact
                .get(view.contacts.len())
                .and_then(|i| view.contacts.get(i))
                .map(|row| Command::EditField(row.field).into()),
            KeyCode::Char('n') => Some(Command::SetNotifications(!view.notifications).into()),
            KeyCode::Char('d') => Some(Command::ToggleTheme.into()),
            KeyCode::Char('c') => Some(Command::CallCompany.into()),
            KeyCode::Char('L') => Some(Command::Logout.into()),
            _ => None,
        };
        Ok(action)
    }

    fn render(&self, frame: &mut Frame, area: Rect, screen: &Screen, palette: &Palette) {
        let Some(view) = view(screen) else {
            return;
        };

        let layout = Layout::vertical([
            Constraint::Length(5), // Identity + counts
            Constraint::Length(5), // Contacts
            Constraint::Length(5), // Bookings
            Constraint::Min(5),    // Preferences + support
            Constraint::Length(1), // Hints
        ])
        .split(area);

        let identity = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!(" ({}) ", view.initial), palette.chip(true)),
                Span::raw(" "),
                Span::styled(view.name.as_str(), palette.title()),
            ]),
            Line::styled(format!(" {}", view.member_since), palette.muted()),
            Line::from(vec![
                Span::styled(format!(" {} ", view.favorites), palette.title()),
                Span::styled("favorites   ", palette.muted()),
                Span::styled(format!("{} ", view.bookings), palette.title()),
                Span::styled("bookings   ", palette.muted()),
                Span::styled(format!("{} ", view.listings_label), palette.title()),
                Span::styled("listings", palette.muted()),
            ]),
        ])
        .block(panel("Profile", palette));
        frame.render_widget(identity, layout[0]);

        let selected = self.contact.get(view.contacts.len());
        let contacts: Vec<Line> = view
            .contacts
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let style = if Some(i) == selected {
                    palette.selected()
                } else {
                    palette.base()
                };
                Line::from(vec![
                    Span::styled(format!(" {:<8}", row.label), palette.muted()),
                    Span::styled(row.value.as_str(), style),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(contacts).block(panel("Contact Information", palette)),
            layout[1],
        );

        let bookings: Vec<Line> = if view.recent_bookings.is_empty() {
            vec![Line::styled(" No bookings yet", palette.muted())]
        } else {
            view.recent_bookings
                .iter()
                .map(|b| {
                    Line::from(vec![
                        Span::styled(format!(" {} ", b.service), palette.title()),
                        Span::raw(format!("{}  ", b.package)),
                        Span::styled(format!("{}  ", b.status), palette.muted()),
                        Span::styled(b.total.as_str(), palette.price()),
                    ])
                })
                .collect()
        };
        frame.render_widget(
            Paragraph::new(bookings).block(panel("Recent Bookings", palette)),
            layout[2],
        );

        let preferences = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!(" {} ", switch(view.dark_mode)), palette.chip(view.dark_mode)),
                Span::raw(" Dark mode"),
            ]),
            Line::from(vec![
                Span::styled(
                    format!(" {} ", switch(view.notifications)),
                    palette.chip(view.notifications),
                ),
                Span::raw(" Notifications"),
            ]),
            Line::styled(format!(" Location  {}", view.location), palette.muted()),
            Line::styled(
                format!(" Support   {}  ·  {}", view.support_phone, view.support_email),
                palette.muted(),
            ),
        ])
        .block(panel("Preferences", palette));
        frame.render_widget(preferences, layout[3]);

        frame.render_widget(
            Paragraph::new(hints(
                &[
                    ("j/k", "move"),
                    ("e", "edit"),
                    ("d", "dark mode"),
                    ("n", "notifications"),
                    ("c", "call support"),
                    ("L", "log out"),
                ],
                palette,
            )),
            layout[4],
        );
    }
}
