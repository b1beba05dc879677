//! Browse page: search box, filter chips, result list.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use tui_input::Input;

use primer_core::Command;
use primer_core::view::{BrowseView, Chip, PageView, Screen};

use super::{Cursor, hints, panel, render_cards, selected_card};
use crate::action::Action;
use crate::component::Component;
use crate::input;
use crate::theme::Palette;

#[derive(Debug, Default)]
pub struct BrowseScreen {
    cursor: Cursor,
    search: Input,
    searching: bool,
}

fn view(screen: &Screen) -> Option<&BrowseView> {
    match &screen.body {
        PageView::Browse(v) => Some(v),
        _ => None,
    }
}

/// Next chip after the active one; past the last chip goes back to "all".
fn next_university(view: &BrowseView) -> Command {
    let next = view
        .universities
        .iter()
        .position(|c| c.active)
        .map_or(0, |i| i + 1);
    match view.universities.get(next) {
        Some(chip) => Command::ToggleUniversity(chip.label.clone()),
        None => Command::ClearUniversity,
    }
}

impl BrowseScreen {
    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
                self.searching = false;
                None
            }
            _ => input::edit(&mut self.search, key).map(|q| Command::SetQuery(q).into()),
        }
    }
}

impl Component for BrowseScreen {
    fn handle_key_event(&mut self, key: KeyEvent, screen: &Screen) -> Result<Option<Action>> {
        let Some(view) = view(screen) else {
            return Ok(None);
        };
        if self.searching {
            return Ok(self.handle_search_key(key));
        }
        if self.cursor.handle(key, view.cards.len()) {
            return Ok(None);
        }

        let action = match key.code {
            KeyCode::Char('/') => {
                self.search = Input::default().with_value(view.query.clone());
                self.searching = true;
                None
            }
            KeyCode::Char('x') => Some(Command::ClearQuery.into()),
            KeyCode::Char('b') => Some(Command::CycleBedrooms.into()),
            KeyCode::Char('p') => Some(Command::OpenPriceFilter.into()),
            KeyCode::Char('o') => Some(Command::OpenFilterPanel.into()),
            KeyCode::Char('u') => Some(next_university(view).into()),
            KeyCode::Char('a') => Some(Command::ClearUniversity.into()),
            KeyCode::Char('c') => Some(Command::ClearFilters.into()),
            KeyCode::Char('m') => Some(Command::ShowMap.into()),
            KeyCode::Enter => selected_card(&view.cards, self.cursor)
                .map(|c| Command::OpenDetail(c.id.clone()).into()),
            KeyCode::Char('f') => selected_card(&view.cards, self.cursor)
                .map(|c| Command::ToggleFavorite(c.id.clone()).into()),
            _ => None,
        };
        Ok(action)
    }

    fn reset(&mut self, _screen: &Screen) {
        self.searching = false;
    }

    fn capturing_input(&self) -> bool {
        self.searching
    }

    fn render(&self, frame: &mut Frame, area: Rect, screen: &Screen, palette: &Palette) {
        let Some(view) = view(screen) else {
            return;
        };

        let layout = Layout::vertical([
            Constraint::Length(3), // Search
            Constraint::Length(3), // Chips
            Constraint::Length(1), // Count
            Constraint::Min(3),    // Results
            Constraint::Length(1), // Hints
        ])
        .split(area);

        // Search box
        let search_block = panel("Search", palette).border_style(if self.searching {
            palette.border_focused()
        } else {
            palette.border()
        });
        let text = if self.searching {
            self.search.value()
        } else {
            view.query.as_str()
        };
        let placeholder = text.is_empty() && !self.searching;
        let search = Paragraph::new(if placeholder {
            Line::styled("Search by title, location or university", palette.muted())
        } else {
            Line::from(text)
        })
        .block(search_block);
        frame.render_widget(search, layout[0]);
        if self.searching {
            let width = layout[0].width.saturating_sub(2);
            let offset = u16::try_from(self.search.visual_cursor()).unwrap_or(u16::MAX);
            frame.set_cursor_position(Position::new(
                layout[0].x + 1 + offset.min(width.saturating_sub(1)),
                layout[0].y + 1,
            ));
        }

        // Chips
        let mut chips = vec![
            chip(&view.bedrooms, palette),
            Span::raw(" "),
            chip(&view.price, palette),
            Span::raw("   "),
            chip(&view.all_universities, palette),
        ];
        for uni in &view.universities {
            chips.push(Span::raw(" "));
            chips.push(chip(uni, palette));
        }
        frame.render_widget(
            Paragraph::new(Line::from(chips))
                .wrap(Wrap { trim: true })
                .block(panel("Filters", palette)),
            layout[1],
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!(" {}", view.count_label), palette.title()),
                Span::styled(
                    format!("   {} campuses   {}", view.campus_count, view.map_notice),
                    palette.muted(),
                ),
            ])),
            layout[2],
        );

        if view.empty {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::styled("  No properties found", palette.title()),
                Line::styled("  Try adjusting your filters or search.", palette.muted()),
                Line::from(""),
                hints(&[("c", "clear all filters")], palette),
            ])
            .block(panel("Results", palette));
            frame.render_widget(empty, layout[3]);
        } else {
            render_cards(
                frame,
                layout[3],
                panel("Results", palette),
                &view.cards,
                self.cursor,
                palette,
            );
        }

        let pairs: &[(&str, &str)] = if self.searching {
            &[("enter/esc", "done"), ("ctrl+u", "clear")]
        } else {
            &[
                ("/", "search"),
                ("b", "beds"),
                ("p", "price"),
                ("o", "filters"),
                ("u", "university"),
                ("c", "clear"),
                ("f", "favorite"),
                ("m", "map"),
            ]
        };
        frame.render_widget(Paragraph::new(hints(pairs, palette)), layout[4]);
    }
}

fn chip<'a>(chip: &'a Chip, palette: &Palette) -> Span<'a> {
    Span::styled(format!(" {} ", chip.label), palette.chip(chip.active))
}
