//! Screen area math.

use ratatui::layout::Rect;

pub struct AppAreas {
    pub header: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Header (title + subtitle), tab bar, body, one-line footer.
pub fn split_screen(area: Rect) -> AppAreas {
    let header_height = 3.min(area.height);
    let tabs_height = if area.height > 4 { 1 } else { 0 };
    let footer_height = if area.height > 6 { 1 } else { 0 };
    let body_height = area
        .height
        .saturating_sub(header_height + tabs_height + footer_height);

    let header = Rect::new(area.x, area.y, area.width, header_height);
    let tabs = Rect::new(area.x, header.bottom(), area.width, tabs_height);
    let body = Rect::new(area.x, tabs.bottom(), area.width, body_height);
    let footer = Rect::new(area.x, body.bottom(), area.width, footer_height);
    AppAreas {
        header,
        tabs,
        body,
        footer,
    }
}

/// Centered rect of at most `width` x `height` inside `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
