//! Results grid widget
//!
//! Renders the filtered sites as fixed-size cards: name, host (favicon
//! source), and category tag. The grid follows the cursor vertically; the
//! column count is also what vertical cursor movement uses as its stride.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use safeplace_app::IconBook;
use safeplace_core::{site_host, Site};

use crate::theme::{palette, styles};

use super::truncate_to_width;

/// Card footprint including its own border
const CARD_WIDTH: u16 = 26;
const CARD_HEIGHT: u16 = 5;

/// Grid of site cards
pub struct SiteGrid<'a> {
    sites: &'a [&'a Site],
    icons: &'a IconBook,
    cursor: usize,
    focused: bool,
}

impl<'a> SiteGrid<'a> {
    pub fn new(sites: &'a [&'a Site], icons: &'a IconBook, cursor: usize, focused: bool) -> Self {
        Self {
            sites,
            icons,
            cursor,
            focused,
        }
    }

    /// Cards per row for a grid area. Never zero; this is the stride the
    /// update function uses for vertical cursor movement.
    pub fn columns_for_area(area: Rect) -> usize {
        let inner_width = area.width.saturating_sub(2);
        ((inner_width / CARD_WIDTH) as usize).max(1)
    }

    fn render_card(&self, index: usize, area: Rect, buf: &mut Buffer) {
        let site = self.sites[index];
        let is_cursor = self.focused && index == self.cursor;

        let card = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if is_cursor {
                styles::border_active()
            } else {
                styles::border_inactive()
            });
        let inner = card.inner(area);
        card.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }
        let text_width = inner.width.saturating_sub(1) as usize;

        // Row 1: site name
        let name_style = if is_cursor {
            styles::accent_bold()
        } else {
            styles::text_primary()
        };
        let name = Line::from(vec![
            Span::raw(" "),
            Span::styled(truncate_to_width(&site.name, text_width), name_style),
        ]);
        buf.set_line(inner.x, inner.y, &name, inner.width);

        // Row 2: host when the URL parses, the raw URL otherwise
        if inner.height >= 2 {
            let (text, style) = match site_host(&site.url) {
                Some(host) => (host, styles::text_secondary()),
                None => (site.url.clone(), styles::text_muted()),
            };
            let host = Line::from(vec![
                Span::raw(" "),
                Span::styled(truncate_to_width(&text, text_width), style),
            ]);
            buf.set_line(inner.x, inner.y + 1, &host, inner.width);
        }

        // Row 3: category tag + icon state marker
        if inner.height >= 3 {
            let icon_span = if self.icons.fell_back(&site.name) {
                Span::styled("□", styles::text_muted())
            } else {
                Span::styled("◉", Style::default().fg(palette::STATUS_GREEN))
            };
            let tag = Line::from(vec![
                Span::raw(" "),
                icon_span,
                Span::raw(" "),
                Span::styled(site.category.label(), Style::default().fg(palette::TAG_FG)),
            ]);
            buf.set_line(inner.x, inner.y + 2, &tag, inner.width);
        }
    }
}

impl Widget for SiteGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(format!(" Protocols ({}) ", self.sites.len()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.sites.is_empty() {
            let empty = Line::from(Span::styled(
                " No protocols match the current filters",
                styles::text_muted(),
            ));
            buf.set_line(inner.x, inner.y + inner.height / 2, &empty, inner.width);
            return;
        }

        let columns = Self::columns_for_area(area);
        let visible_rows = ((inner.height / CARD_HEIGHT) as usize).max(1);

        // Keep the cursor's row on screen
        let cursor_row = self.cursor / columns;
        let first_row = cursor_row.saturating_sub(visible_rows.saturating_sub(1));

        for (index, _) in self.sites.iter().enumerate() {
            let row = index / columns;
            let col = index % columns;
            if row < first_row || row >= first_row + visible_rows {
                continue;
            }

            let card_area = Rect {
                x: inner.x + col as u16 * CARD_WIDTH,
                y: inner.y + (row - first_row) as u16 * CARD_HEIGHT,
                width: CARD_WIDTH.min(inner.width.saturating_sub(col as u16 * CARD_WIDTH)),
                height: CARD_HEIGHT.min(inner.height.saturating_sub(
                    (row - first_row) as u16 * CARD_HEIGHT,
                )),
            };
            if card_area.width < 4 || card_area.height < 3 {
                continue;
            }
            self.render_card(index, card_area, buf);
        }
    }
}
