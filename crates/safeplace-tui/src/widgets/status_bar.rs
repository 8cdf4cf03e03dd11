//! Status bar widget: match counts, active filters, keybindings, notices

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use safeplace_core::{CategoryFilter, ChainFilter, Selection};

use crate::theme::styles;

/// One-row status bar under the grid
pub struct StatusBar<'a> {
    shown: usize,
    total: usize,
    selection: &'a Selection,
    notice: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(
        shown: usize,
        total: usize,
        selection: &'a Selection,
        notice: Option<&'a str>,
    ) -> Self {
        Self {
            shown,
            total,
            selection,
            notice,
        }
    }

    fn filter_summary(&self) -> String {
        let category = match &self.selection.category {
            CategoryFilter::All => "all".to_string(),
            CategoryFilter::Only(cat) => cat.as_str().to_string(),
        };
        let chain = match &self.selection.chain {
            ChainFilter::All => "all".to_string(),
            ChainFilter::Only(id) => id.clone(),
        };
        format!("{category}/{chain}")
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(
                format!("{}/{} protocols", self.shown, self.total),
                styles::accent(),
            ),
            Span::raw("  "),
            Span::styled(self.filter_summary(), styles::text_secondary()),
            Span::raw("  "),
            Span::styled("[Tab]", styles::keybinding()),
            Span::styled(" Panes  ", styles::text_muted()),
            Span::styled("[/]", styles::keybinding()),
            Span::styled(" Search  ", styles::text_muted()),
            Span::styled("[Enter]", styles::keybinding()),
            Span::styled(" Open  ", styles::text_muted()),
            Span::styled("[s]", styles::keybinding()),
            Span::styled(" Submit  ", styles::text_muted()),
            Span::styled("[q]", styles::keybinding()),
            Span::styled(" Quit", styles::text_muted()),
        ];

        if let Some(notice) = self.notice {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(notice, styles::keybinding()));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ratatui::layout::Rect;
    use safeplace_core::{Category, ChainFilter};

    #[test]
    fn test_status_bar_counts_and_hints() {
        let selection = Selection::default();
        let mut term = TestTerminal::new();
        let area = Rect::new(0, 0, 80, 1);
        term.render_widget(StatusBar::new(12, 45, &selection, None), area);

        assert!(term.buffer_contains("12/45 protocols"));
        assert!(term.buffer_contains("all/all"));
        assert!(term.buffer_contains("[q] Quit"));
    }

    #[test]
    fn test_status_bar_active_filters() {
        let selection = Selection {
            category: CategoryFilter::Only(Category::Swap),
            chain: ChainFilter::Only("eth".into()),
            ..Default::default()
        };
        let mut term = TestTerminal::new();
        let area = Rect::new(0, 0, 80, 1);
        term.render_widget(StatusBar::new(1, 45, &selection, None), area);
        assert!(term.buffer_contains("swap/eth"));
    }

    #[test]
    fn test_status_bar_notice() {
        let selection = Selection::default();
        let mut term = TestTerminal::with_size(120, 1);
        let area = Rect::new(0, 0, 120, 1);
        term.render_widget(
            StatusBar::new(1, 45, &selection, Some("Opening Uniswap")),
            area,
        );
        assert!(term.buffer_contains("Opening Uniswap"));
    }
}
