//! Saved listings.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use primer_core::view::{FavoritesView, PageView, Screen};
use primer_core::{Command, Page};

use super::{Cursor, hints, panel, render_cards, selected_card};
use crate::action::Action;
use crate::component::Component;
use crate::theme::Palette;

#[derive(Debug, Default)]
pub struct FavoritesScreen {
    cursor: Cursor,
}

fn view(screen: &Screen) -> Option<&FavoritesView> {
    match &screen.body {
        PageView::Favorites(v) => Some(v),
        _ => None,
    }
}

impl Component for FavoritesScreen {
    fn handle_key_event(&mut self, key: KeyEvent, screen: &Screen) -> Result<Option<Action>> {
        let Some(view) = view(screen) else {
            return Ok(None);
        };
        if self.cursor.handle(key, view.cards.len()) {
            return Ok(None);
        }
        let action = match key.code {
            KeyCode::Enter => selected_card(&view.cards, self.cursor)
                .map(|c| Command::OpenDetail(c.id.clone()).into()),
            KeyCode::Char('f' | 'd') => selected_card(&view.cards, self.cursor)
                .map(|c| Command::ToggleFavorite(c.id.clone()).into()),
            KeyCode::Char('b') => Some(Command::Navigate(Page::Browse).into()),
            _ => None,
        };
        Ok(action)
    }

    fn render(&self, frame: &mut Frame, area: Rect, screen: &Screen, palette: &Palette) {
        let Some(view) = view(screen) else {
            return;
        };
        let layout = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);

        if view.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::styled("  No favorites yet", palette.title()),
                Line::styled("  Save properties you like and they will show up here.", palette.muted()),
            ])
            .block(panel(&view.count_label, palette));
            frame.render_widget(empty, layout[0]);
            frame.render_widget(
                Paragraph::new(hints(&[("b", "browse properties")], palette)),
                layout[1],
            );
            return;
        }

        render_cards(
            frame,
            layout[0],
            panel(&view.count_label, palette),
            &view.cards,
            self.cursor,
            palette,
        );
        frame.render_widget(
            Paragraph::new(hints(
                &[("j/k", "move"), ("enter", "details"), ("f", "remove"), ("b", "browse")],
                palette,
            )),
            layout[1],
        );
    }
}
