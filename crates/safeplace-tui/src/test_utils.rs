//! Test helpers for widget rendering against an in-memory buffer

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Terminal;

/// A terminal backed by an in-memory buffer for widget tests
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Default 80x24 terminal
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test backend never fails");
        Self { terminal }
    }

    /// Small terminal for degradation tests
    pub fn compact() -> Self {
        Self::with_size(40, 10)
    }

    pub fn area(&self) -> Rect {
        self.terminal.backend().buffer().area
    }

    /// Render a widget over the given area
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("draw never fails on the test backend");
    }

    /// Full buffer content as one string, rows joined by newlines
    pub fn content(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buffer.cell((x, y)) {
                    out.push_str(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }

    /// Whether the rendered buffer contains the given text on one row
    pub fn buffer_contains(&self, needle: &str) -> bool {
        self.content().lines().any(|line| line.contains(needle))
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
