//! Protocol search input widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Free-text protocol search box
pub struct SearchBar<'a> {
    term: &'a str,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(term: &'a str, focused: bool) -> Self {
        Self { term, focused }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Search ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = if self.term.is_empty() && !self.focused {
            Line::from(Span::styled(
                " Search protocol (Uniswap, Aave...)",
                styles::text_muted(),
            ))
        } else {
            let mut spans = vec![
                Span::raw(" "),
                Span::styled("/", styles::keybinding()),
                Span::styled(self.term, styles::text_primary()),
            ];
            if self.focused {
                spans.push(Span::styled("_", styles::keybinding()));
            }
            Line::from(spans)
        };

        buf.set_line(inner.x, inner.y, &line, inner.width);
    }
}
