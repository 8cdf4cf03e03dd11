//! Chain filter zone: search input plus the selectable pill row
//!
//! The pill row is the *filtered* subset of the chain dataset, but the
//! selected pill is a plain chain id on the selection state -- a chain stays
//! selected even when the filter currently hides its pill.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use safeplace_core::{Chain, ChainFilter};

use crate::theme::styles;

/// Chain filter input and pill row
pub struct ChainBar<'a> {
    term: &'a str,
    chains: &'a [&'a Chain],
    selected: &'a ChainFilter,
    cursor: usize,
    input_focused: bool,
    pills_focused: bool,
}

impl<'a> ChainBar<'a> {
    pub fn new(
        term: &'a str,
        chains: &'a [&'a Chain],
        selected: &'a ChainFilter,
        cursor: usize,
        input_focused: bool,
        pills_focused: bool,
    ) -> Self {
        Self {
            term,
            chains,
            selected,
            cursor,
            input_focused,
            pills_focused,
        }
    }

    fn pill_is_selected(&self, index: usize) -> bool {
        match self.selected {
            ChainFilter::All => index == 0,
            ChainFilter::Only(id) => {
                index > 0 && self.chains.get(index - 1).map(|c| c.id.as_str()) == Some(id)
            }
        }
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let line = if self.term.is_empty() && !self.input_focused {
            Line::from(Span::styled(" Filter chains...", styles::text_muted()))
        } else {
            let mut spans = vec![
                Span::raw(" "),
                Span::styled("/", styles::keybinding()),
                Span::styled(self.term, styles::text_primary()),
            ];
            if self.input_focused {
                spans.push(Span::styled("_", styles::keybinding()));
            }
            Line::from(spans)
        };
        buf.set_line(area.x, area.y, &line, area.width);
    }

    fn render_pills(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for index in 0..=self.chains.len() {
            let label = if index == 0 {
                "All"
            } else {
                self.chains[index - 1].name.as_str()
            };

            let style = if self.pill_is_selected(index) {
                styles::focused_selected()
            } else if self.pills_focused && index == self.cursor {
                styles::cursor_highlight()
            } else {
                styles::text_secondary()
            };

            spans.push(Span::styled(format!(" {label} "), style));
            spans.push(Span::raw(" "));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

impl Widget for ChainBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.input_focused || self.pills_focused)
            .title(" Chains ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let input_area = Rect {
            height: 1,
            ..inner
        };
        self.render_input(input_area, buf);

        if inner.height >= 2 {
            let pills_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            self.render_pills(pills_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn chains() -> Vec<Chain> {
        vec![
            Chain {
                id: "eth".into(),
                name: "Ethereum".into(),
            },
            Chain {
                id: "polygon".into(),
                name: "Polygon".into(),
            },
        ]
    }

    #[test]
    fn test_chain_bar_renders_pills() {
        let chains = chains();
        let refs: Vec<&Chain> = chains.iter().collect();
        let mut term = TestTerminal::new();
        let widget = ChainBar::new("", &refs, &ChainFilter::All, 0, false, false);
        term.render_widget(widget, term.area());

        assert!(term.buffer_contains("All"));
        assert!(term.buffer_contains("Ethereum"));
        assert!(term.buffer_contains("Polygon"));
    }

    #[test]
    fn test_chain_bar_placeholder() {
        let chains = chains();
        let refs: Vec<&Chain> = chains.iter().collect();
        let mut term = TestTerminal::new();
        let widget = ChainBar::new("", &refs, &ChainFilter::All, 0, false, false);
        term.render_widget(widget, term.area());
        assert!(term.buffer_contains("Filter chains"));
    }

    #[test]
    fn test_pill_selection_mapping() {
        let chains = chains();
        let refs: Vec<&Chain> = chains.iter().collect();

        let all = ChainFilter::All;
        let widget = ChainBar::new("", &refs, &all, 0, false, true);
        assert!(widget.pill_is_selected(0));
        assert!(!widget.pill_is_selected(1));

        let eth = ChainFilter::Only("eth".into());
        let widget = ChainBar::new("", &refs, &eth, 0, false, true);
        assert!(!widget.pill_is_selected(0));
        assert!(widget.pill_is_selected(1));
        assert!(!widget.pill_is_selected(2));
    }

    #[test]
    fn test_hidden_selected_pill_does_not_panic() {
        // Selected chain filtered out of the pill row entirely
        let mut term = TestTerminal::new();
        let refs: Vec<&Chain> = Vec::new();
        let sel = ChainFilter::Only("eth".into());
        let widget = ChainBar::new("zzz", &refs, &sel, 0, true, false);
        term.render_widget(widget, term.area());
        assert!(term.buffer_contains("/zzz_"));
    }
}
