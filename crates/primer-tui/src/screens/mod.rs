//! Page implementations. Each page is a top-level Component; the sheet
//! overlay draws whatever modal is open on top of them.

pub mod browse;
pub mod favorites;
pub mod home;
pub mod profile;
pub mod sheet;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState};

use primer_core::Page;
use primer_core::view::PropertyCard;

use crate::component::Component;
use crate::theme::{self, Palette};

/// Create page components in tab-bar order.
pub fn create_screens() -> Vec<(Page, Box<dyn Component>)> {
    vec![
        (Page::Home, Box::new(home::HomeScreen::default())),
        (Page::Browse, Box::new(browse::BrowseScreen::default())),
        (Page::Favorites, Box::new(favorites::FavoritesScreen::default())),
        (Page::Profile, Box::new(profile::ProfileScreen::default())),
    ]
}

// ── Shared list behaviour ────────────────────────────────────────────

/// Cursor over a list whose length may change underneath it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cursor(usize);

impl Cursor {
    pub fn get(self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.min(len - 1))
    }

    /// Move for j/k/↑/↓. Returns `true` when the key was a movement key.
    pub fn handle(&mut self, key: KeyEvent, len: usize) -> bool {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.0 = (self.0 + 1).min(len.saturating_sub(1));
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.0 = self.0.min(len.saturating_sub(1)).saturating_sub(1);
                true
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.0 = 0;
                true
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.0 = len.saturating_sub(1);
                true
            }
            _ => false,
        }
    }

    pub fn set(&mut self, index: usize) {
        self.0 = index;
    }
}

/// The card under the cursor.
pub fn selected_card(cards: &[PropertyCard], cursor: Cursor) -> Option<&PropertyCard> {
    cursor.get(cards.len()).and_then(|i| cards.get(i))
}

// ── Shared rendering ─────────────────────────────────────────────────

pub fn panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border())
}

fn card_item<'a>(card: &'a PropertyCard, palette: &Palette) -> ListItem<'a> {
    let (heart, heart_style) = theme::heart(card.favorite);
    let mut title = vec![
        Span::styled(format!("{heart} "), heart_style),
        Span::styled(card.title.as_str(), palette.title()),
        Span::raw("  "),
        Span::styled(card.price.as_str(), palette.price()),
    ];
    if card.is_new {
        title.push(Span::styled("  NEW", palette.chip(true)));
    }
    if card.is_popular {
        title.push(Span::styled("  POPULAR", palette.chip(false)));
    }

    let place = Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{} · {}", card.location, card.school), palette.muted()),
    ]);
    let tags = Line::from(vec![
        Span::raw("  "),
        Span::styled(card.tags.join("  ·  "), Style::default().fg(palette.text)),
    ]);

    ListItem::new(vec![Line::from(title), place, tags, Line::from("")])
}

/// Render cards as a selectable list.
pub fn render_cards(
    frame: &mut Frame,
    area: Rect,
    block: Block<'_>,
    cards: &[PropertyCard],
    cursor: Cursor,
    palette: &Palette,
) {
    let items: Vec<ListItem> = cards.iter().map(|c| card_item(c, palette)).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(palette.selected())
        .highlight_symbol("▌");
    let mut state = ListState::default().with_selected(cursor.get(cards.len()));
    frame.render_stateful_widget(list, area, &mut state);
}

/// `key label` pairs for a hint line.
pub fn hints<'a>(pairs: &[(&'a str, &'a str)], palette: &Palette) -> Line<'a> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, label) in pairs {
        spans.push(Span::styled(format!(" {key} "), palette.key_hint_key()));
        spans.push(Span::styled(format!("{label} "), palette.key_hint()));
    }
    Line::from(spans)
}
