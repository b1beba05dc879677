//! Home page: hero, rotating banner, top campuses, featured listings.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use primer_core::view::{HomeView, PageView, Screen};
use primer_core::{Command, Page};

use super::{Cursor, hints, panel, render_cards, selected_card};
use crate::action::Action;
use crate::component::Component;
use crate::theme::Palette;

#[derive(Debug, Default)]
pub struct HomeScreen {
    featured: Cursor,
    campus: usize,
}

fn view(screen: &Screen) -> Option<&HomeView> {
    match &screen.body {
        PageView::Home(v) => Some(v),
        _ => None,
    }
}

impl Component for HomeScreen {
    fn handle_key_event(&mut self, key: KeyEvent, screen: &Screen) -> Result<Option<Action>> {
        let Some(view) = view(screen) else {
            return Ok(None);
        };
        if self.featured.handle(key, view.featured.len()) {
            return Ok(None);
        }

        let campuses = view.universities.len();
        let action = match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.campus = self.campus.saturating_sub(1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.campus = (self.campus + 1).min(campuses.saturating_sub(1));
                None
            }
            KeyCode::Char('s') => view
                .universities
                .get(self.campus)
                .map(|u| Command::SearchByUniversity(u.name.clone()).into()),
            KeyCode::Char('b') => Some(Command::Navigate(Page::Browse).into()),
            KeyCode::Enter => selected_card(&view.featured, self.featured)
                .map(|c| Command::OpenDetail(c.id.clone()).into()),
            KeyCode::Char('f') => selected_card(&view.featured, self.featured)
                .map(|c| Command::ToggleFavorite(c.id.clone()).into()),
            _ => None,
        };
        Ok(action)
    }

    fn render(&self, frame: &mut Frame, area: Rect, screen: &Screen, palette: &Palette) {
        let Some(view) = view(screen) else {
            return;
        };

        let layout = Layout::vertical([
            Constraint::Length(4), // Hero
            Constraint::Length(4), // Banner
            Constraint::Length(4), // Campuses
            Constraint::Min(4),    // Featured
            Constraint::Length(1), // Hints
        ])
        .split(area);

        let theme_label = if view.dark_mode { "☾ dark" } else { "☀ light" };
        let hero = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(view.hero.title.as_str(), palette.title().add_modifier(Modifier::UNDERLINED)),
                Span::styled(format!("   {theme_label}"), palette.muted()),
            ]),
            Line::from(Span::styled(view.hero.subtitle.as_str(), palette.muted())),
        ])
        .wrap(Wrap { trim: true })
        .block(panel("Primer", palette));
        frame.render_widget(hero, layout[0]);

        let banner = &view.banner;
        let counter = if banner.total == 0 {
            String::new()
        } else {
            format!("{} / {}", banner.position + 1, banner.total)
        };
        let banner_widget = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!("[{}] ", banner.icon), palette.muted()),
                Span::styled(banner.title.as_str(), palette.title()),
            ]),
            Line::from(banner.description.as_str()),
        ])
        .wrap(Wrap { trim: true })
        .block(panel(&counter, palette).border_style(palette.border_focused()));
        frame.render_widget(banner_widget, layout[1]);

        let mut campus_spans = Vec::new();
        for (i, uni) in view.universities.iter().enumerate() {
            campus_spans.push(Span::styled(
                format!(" {} ", uni.name),
                palette.chip(i == self.campus),
            ));
            campus_spans.push(Span::styled(format!(" {}   ", uni.count_label), palette.muted()));
        }
        let campuses = Paragraph::new(Line::from(campus_spans))
            .wrap(Wrap { trim: true })
            .block(panel("Top Universities", palette));
        frame.render_widget(campuses, layout[2]);

        render_cards(
            frame,
            layout[3],
            panel("Featured Properties", palette),
            &view.featured,
            self.featured,
            palette,
        );

        frame.render_widget(
            Paragraph::new(hints(
                &[
                    ("j/k", "move"),
                    ("enter", "details"),
                    ("f", "favorite"),
                    ("h/l", "campus"),
                    ("s", "search campus"),
                    ("b", "browse"),
                ],
                palette,
            )),
            layout[4],
        );
    }
}
