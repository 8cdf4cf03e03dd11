//! Acknowledgment overlay for the "submit project" placeholder
//!
//! There is no submission workflow behind this; the overlay is the whole
//! feature.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::styles;

/// Centered acknowledgment overlay
pub struct NoticeOverlay;

impl Widget for NoticeOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = center_rect(44.min(area.width), 6.min(area.height), area);

        Clear.render(modal_area, buf);

        let block = styles::glass_block(true).title(Span::styled(
            " Submit Project ",
            styles::accent_bold(),
        ));
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Submissions are coming soon!",
                styles::text_primary(),
            )),
            Line::from(vec![
                Span::styled("[Esc]", styles::keybinding()),
                Span::styled(" Dismiss", styles::text_muted()),
            ]),
        ];
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

/// Center a rectangle within another rectangle
fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
