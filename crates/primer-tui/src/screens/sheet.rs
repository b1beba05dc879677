//! Bottom sheet overlay: listing detail, price picker, filter panel and the
//! profile field editor. While a sheet is open it owns the keyboard.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};
use tui_input::Input;

use primer_core::view::{
    Choice, DetailView, EditFieldView, FilterPanelView, ModalView, PriceFilterView, Screen,
};
use primer_core::{Command, GalleryStep};

use super::{Cursor, hints, panel};
use crate::action::Action;
use crate::component::Component;
use crate::input;
use crate::theme::{self, Palette};

#[derive(Debug, Default)]
pub struct SheetOverlay {
    cursor: Cursor,
    draft: Input,
}

fn selected_index<T>(choices: &[Choice<T>]) -> usize {
    choices.iter().position(|c| c.selected).unwrap_or(0)
}

impl SheetOverlay {
    fn detail_key(view: &DetailView, key: KeyEvent) -> Option<Action> {
        let id = view.id.clone();
        let command = match key.code {
            KeyCode::Left | KeyCode::Char('h') => Command::Gallery(GalleryStep::Previous),
            KeyCode::Right | KeyCode::Char('l') => Command::Gallery(GalleryStep::Next),
            KeyCode::Char('f') => Command::ToggleFavorite(id),
            KeyCode::Char('c') => Command::CallLandlord(id),
            KeyCode::Char('m') => Command::ViewOnMap(id),
            _ => return None,
        };
        Some(command.into())
    }

    fn price_key(&mut self, view: &PriceFilterView, key: KeyEvent) -> Option<Action> {
        if self.cursor.handle(key, view.options.len()) {
            return None;
        }
        match key.code {
            KeyCode::Enter => self
                .cursor
                .get(view.options.len())
                .and_then(|i| view.options.get(i))
                .map(|c| Command::SetMaxPrice(c.value).into()),
            _ => None,
        }
    }

    fn panel_key(&mut self, view: &FilterPanelView, key: KeyEvent) -> Option<Action> {
        let len = view.prices.len() + view.bedrooms.len();
        if self.cursor.handle(key, len) {
            return None;
        }
        match key.code {
            KeyCode::Enter => {
                let i = self.cursor.get(len)?;
                match view.prices.get(i) {
                    Some(price) => Some(Command::SetMaxPrice(price.value).into()),
                    None => view
                        .bedrooms
                        .get(i - view.prices.len())
                        .map(|b| Command::SetBedrooms(b.value).into()),
                }
            }
            KeyCode::Char('c') => Some(Command::ClearFilters.into()),
            _ => None,
        }
    }

    fn edit_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter => Some(Command::SaveDraft.into()),
            _ => input::edit(&mut self.draft, key).map(|v| Command::SetDraft(v).into()),
        }
    }
}

impl Component for SheetOverlay {
    fn handle_key_event(&mut self, key: KeyEvent, screen: &Screen) -> Result<Option<Action>> {
        let Some(modal) = &screen.modal else {
            return Ok(None);
        };
        if key.code == KeyCode::Esc {
            return Ok(Some(Command::CloseModal.into()));
        }
        let action = match modal {
            ModalView::Detail(view) => Self::detail_key(view, key),
            ModalView::PriceFilter(view) => self.price_key(view, key),
            ModalView::FilterPanel(view) => self.panel_key(view, key),
            ModalView::EditField(_) => self.edit_key(key),
        };
        Ok(action)
    }

    fn reset(&mut self, screen: &Screen) {
        match &screen.modal {
            Some(ModalView::PriceFilter(view)) => self.cursor.set(selected_index(&view.options)),
            Some(ModalView::FilterPanel(view)) => self.cursor.set(selected_index(&view.prices)),
            Some(ModalView::EditField(view)) => {
                self.draft = Input::default().with_value(view.draft.clone());
            }
            Some(ModalView::Detail(_)) | None => self.cursor.set(0),
        }
    }

    fn capturing_input(&self) -> bool {
        true
    }

    fn render(&self, frame: &mut Frame, area: Rect, screen: &Screen, palette: &Palette) {
        let Some(modal) = &screen.modal else {
            return;
        };

        let height = match modal {
            ModalView::Detail(_) => area.height.saturating_mul(4) / 5,
            ModalView::PriceFilter(v) => u16::try_from(v.options.len()).unwrap_or(8) + 4,
            ModalView::FilterPanel(v) => {
                u16::try_from(v.prices.len() + v.bedrooms.len()).unwrap_or(12) + 7
            }
            ModalView::EditField(_) => 6,
        }
        .min(area.height);
        let width = area.width.saturating_sub(4).min(90);
        let sheet = Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + area.height.saturating_sub(height),
            width,
            height,
        );

        frame.render_widget(Clear, sheet);
        match modal {
            ModalView::Detail(view) => render_detail(frame, sheet, view, palette),
            ModalView::PriceFilter(view) => self.render_price(frame, sheet, view, palette),
            ModalView::FilterPanel(view) => self.render_panel(frame, sheet, view, palette),
            ModalView::EditField(view) => self.render_editor(frame, sheet, view, palette),
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────────

fn render_detail(frame: &mut Frame, area: Rect, view: &DetailView, palette: &Palette) {
    let (heart, heart_style) = theme::heart(view.favorite);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(view.title.as_str(), palette.title()),
            Span::raw("  "),
            Span::styled(heart, heart_style),
            Span::styled(if view.is_new { "  NEW" } else { "" }, palette.chip(true)),
        ]),
        Line::styled(view.price.as_str(), palette.price()),
    ];
    if let Some(image) = &view.image {
        let position = view.gallery_position.as_deref().unwrap_or("");
        lines.push(Line::from(vec![
            Span::styled(format!("◀ {image} ▶"), palette.muted()),
            Span::styled(format!("  {position}"), palette.key_hint_key()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!("{}  ·  {}", view.location, view.school)));
    lines.push(Line::styled(view.distance.as_str(), palette.muted()));
    if let Some(added) = &view.added {
        lines.push(Line::styled(format!("Listed {added}"), palette.muted()));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled("Features", palette.title()));
    lines.push(Line::from(view.features.join("  ·  ")));
    lines.push(Line::styled("Amenities", palette.title()));
    lines.push(Line::from(view.amenities.join("  ·  ")));
    lines.push(Line::from(""));
    lines.push(Line::from(view.description.as_str()));
    lines.push(Line::from(""));

    let landlord = &view.landlord;
    let rating = landlord
        .rating
        .map(|r| format!("  ★ {r:.1}"))
        .unwrap_or_default();
    lines.push(Line::from(vec![
        Span::styled(format!(" {} ", landlord.initial), palette.chip(true)),
        Span::raw(format!(" {}  {}", landlord.name, landlord.phone)),
        Span::styled(rating, palette.price()),
    ]));
    lines.push(Line::from(""));
    lines.push(hints(
        &[
            ("h/l", "photos"),
            ("f", "favorite"),
            ("c", "call"),
            ("m", "map"),
            ("esc", "close"),
        ],
        palette,
    ));

    frame.render_widget(
        Paragraph::new(lines)
            .style(palette.base())
            .wrap(Wrap { trim: true })
            .block(panel("Property Details", palette).border_style(palette.border_focused())),
        area,
    );
}

fn choice_line<'a, T>(choice: &'a Choice<T>, under_cursor: bool, palette: &Palette) -> Line<'a> {
    let mark = if choice.selected { "●" } else { "○" };
    let style = if under_cursor {
        palette.selected()
    } else {
        palette.base()
    };
    Line::from(Span::styled(format!(" {mark} {}", choice.label), style))
}

impl SheetOverlay {
    fn render_price(&self, frame: &mut Frame, area: Rect, view: &PriceFilterView, palette: &Palette) {
        let cursor = self.cursor.get(view.options.len());
        let mut lines: Vec<Line> = view
            .options
            .iter()
            .enumerate()
            .map(|(i, c)| choice_line(c, cursor == Some(i), palette))
            .collect();
        lines.push(hints(&[("enter", "apply"), ("esc", "close")], palette));
        frame.render_widget(
            Paragraph::new(lines)
                .style(palette.base())
                .block(panel("Max Price", palette).border_style(palette.border_focused())),
            area,
        );
    }

    fn render_panel(&self, frame: &mut Frame, area: Rect, view: &FilterPanelView, palette: &Palette) {
        let cursor = self.cursor.get(view.prices.len() + view.bedrooms.len());
        let mut lines = vec![Line::styled("Price", palette.title())];
        for (i, c) in view.prices.iter().enumerate() {
            lines.push(choice_line(c, cursor == Some(i), palette));
        }
        lines.push(Line::styled("Bedrooms", palette.title()));
        for (i, c) in view.bedrooms.iter().enumerate() {
            lines.push(choice_line(c, cursor == Some(view.prices.len() + i), palette));
        }
        lines.push(Line::from(""));
        lines.push(hints(&[("enter", "apply"), ("c", "clear all"), ("esc", "close")], palette));
        frame.render_widget(
            Paragraph::new(lines)
                .style(palette.base())
                .block(panel("Filters", palette).border_style(palette.border_focused())),
            area,
        );
    }

    fn render_editor(&self, frame: &mut Frame, area: Rect, view: &EditFieldView, palette: &Palette) {
        let block = panel(&view.title, palette).border_style(palette.border_focused());
        let inner = block.inner(area);
        let lines = vec![
            Line::from(self.draft.value()),
            Line::from(""),
            hints(&[("enter", "save"), ("esc", "cancel")], palette),
        ];
        frame.render_widget(Paragraph::new(lines).style(palette.base()).block(block), area);

        let offset = u16::try_from(self.draft.visual_cursor()).unwrap_or(u16::MAX);
        frame.set_cursor_position(Position::new(
            inner.x + offset.min(inner.width.saturating_sub(1)),
            inner.y,
        ));
    }
}
