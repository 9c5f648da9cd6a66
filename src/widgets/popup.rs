use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect directly under `anchor`, shifted right by `x_offset` and clamped to
/// stay inside `bounds`
pub fn popup_below_anchor(
    anchor: Rect,
    bounds: Rect,
    width: u16,
    height: u16,
    x_offset: u16,
) -> Rect {
    let popup_x = (anchor.x + x_offset).min(bounds.right());
    let popup_y = (anchor.y + anchor.height).min(bounds.bottom());

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(bounds.right().saturating_sub(popup_x)),
        height: height.min(bounds.bottom().saturating_sub(popup_y)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
