//! Category sidebar widget
//!
//! One button per category plus the leading "All" entry. The active filter
//! stays highlighted regardless of where the cursor sits.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use safeplace_core::{Category, CategoryFilter};

use crate::theme::styles;

use super::truncate_to_width;

/// Category navigation sidebar
pub struct Sidebar {
    selected: CategoryFilter,
    cursor: usize,
    focused: bool,
}

impl Sidebar {
    pub fn new(selected: CategoryFilter, cursor: usize, focused: bool) -> Self {
        Self {
            selected,
            cursor,
            focused,
        }
    }

    /// Label for entry `index`: 0 is the All button, then the fixed tags.
    fn entry_label(index: usize) -> &'static str {
        if index == 0 {
            "All"
        } else {
            Category::ALL[index - 1].label()
        }
    }

    fn entry_is_selected(&self, index: usize) -> bool {
        match self.selected {
            CategoryFilter::All => index == 0,
            CategoryFilter::Only(cat) => {
                index > 0 && Category::ALL.get(index - 1) == Some(&cat)
            }
        }
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(Span::styled(
            " SafePlace ",
            styles::accent_bold(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let entry_count = Category::ALL.len() + 1;
        for index in 0..entry_count {
            let y = inner.y + index as u16;
            if y >= inner.y + inner.height {
                break;
            }

            let label = truncate_to_width(
                Self::entry_label(index),
                inner.width.saturating_sub(2) as usize,
            );
            let style = if self.entry_is_selected(index) {
                styles::focused_selected()
            } else if self.focused && index == self.cursor {
                styles::cursor_highlight()
            } else {
                styles::text_secondary()
            };

            let line = Line::from(vec![Span::raw(" "), Span::styled(label, style)]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
