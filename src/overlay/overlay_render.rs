//! Suggestion overlay rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::overlay_state::SuggestionOverlay;
use crate::widgets::popup;

const MIN_POPUP_WIDTH: u16 = 20;
const POPUP_BORDER_HEIGHT: u16 = 2;
// Borders plus the two-column highlight marker
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;
const EMPTY_LABEL: &str = "No results";

/// Where the overlay goes under `anchor`, or None if it is hidden or there
/// is no room for a single row
pub fn overlay_area(overlay: &SuggestionOverlay, anchor: Rect, bounds: Rect) -> Option<Rect> {
    if !overlay.is_visible() {
        return None;
    }

    let rows = overlay.suggestions().len().max(1) as u16;
    let text_width = overlay
        .suggestions()
        .iter()
        .map(|s| s.width())
        .max()
        .unwrap_or(0) as u16;
    let width = (text_width + POPUP_PADDING).max(MIN_POPUP_WIDTH);

    let area = popup::popup_below_anchor(
        anchor,
        bounds,
        width,
        rows + POPUP_BORDER_HEIGHT,
        POPUP_OFFSET_X,
    );
    (area.height > POPUP_BORDER_HEIGHT).then_some(area)
}

/// Render the overlay into `area`
pub fn render_overlay(frame: &mut Frame, overlay: &SuggestionOverlay, area: Rect) {
    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if overlay.suggestions().is_empty() {
        let empty = Paragraph::new(format!("  {EMPTY_LABEL}"))
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = overlay
        .suggestions()
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            if overlay.active_index() == Some(i) {
                let style = Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD);
                ListItem::new(Line::from(Span::styled(format!("› {suggestion}"), style)))
            } else {
                ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(suggestion.as_str(), Style::default().fg(Color::White)),
                ]))
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
