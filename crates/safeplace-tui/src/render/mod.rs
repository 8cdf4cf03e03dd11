//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use safeplace_app::state::{AppState, Focus, UiMode};

use crate::layout;
use crate::theme::palette;
use crate::widgets::{ChainBar, NoticeOverlay, SearchBar, Sidebar, SiteGrid, StatusBar};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function except for `grid_columns`: the grid's
/// column count depends on the terminal width, and vertical cursor movement
/// needs it as a stride, so the view writes it back before building widgets.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    state.grid_columns = SiteGrid::columns_for_area(areas.grid);

    let sidebar = Sidebar::new(
        state.selection.category,
        state.category_cursor,
        state.focus == Focus::Categories,
    );
    frame.render_widget(sidebar, areas.sidebar);

    let search = SearchBar::new(&state.selection.search_term, state.focus == Focus::SiteSearch);
    frame.render_widget(search, areas.search);

    let chains = state.filtered_chains();
    let chain_bar = ChainBar::new(
        &state.selection.chain_search_term,
        &chains,
        &state.selection.chain,
        state.chain_cursor,
        state.focus == Focus::ChainSearch,
        state.focus == Focus::ChainPills,
    );
    frame.render_widget(chain_bar, areas.chains);

    let sites = state.filtered_sites();
    let grid = SiteGrid::new(
        &sites,
        &state.icons,
        state.grid_cursor,
        state.focus == Focus::Grid,
    );
    frame.render_widget(grid, areas.grid);

    let status = StatusBar::new(
        sites.len(),
        state.datasets.sites.len(),
        &state.selection,
        state.status_notice.as_deref(),
    );
    frame.render_widget(status, areas.status);

    // Overlay last so it sits on top of everything
    if state.ui_mode == UiMode::Notice {
        frame.render_widget(NoticeOverlay, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use safeplace_app::config::Settings;
    use safeplace_core::load_datasets;

    fn test_state() -> AppState {
        let datasets = load_datasets(None, None).unwrap();
        AppState::new(datasets, Settings::default())
    }

    fn draw(state: &mut AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| view(frame, state)).unwrap();

        let buffer = terminal.backend().buffer();
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

    #[test]
    fn test_view_renders_all_panes() {
        let mut state = test_state();
        let content = draw(&mut state, 120, 40);

        assert!(content.contains("SafePlace"));
        assert!(content.contains("Search"));
        assert!(content.contains("Chains"));
        assert!(content.contains("Protocols ("));
        assert!(content.contains("protocols")); // status bar counts
    }

    #[test]
    fn test_view_writes_grid_stride() {
        let mut state = test_state();
        state.grid_columns = 0;
        draw(&mut state, 120, 40);
        assert!(state.grid_columns >= 1);
    }

    #[test]
    fn test_view_notice_overlay() {
        let mut state = test_state();
        state.ui_mode = UiMode::Notice;
        let content = draw(&mut state, 120, 40);
        assert!(content.contains("Submissions are coming soon!"));
    }

    #[test]
    fn test_view_small_terminal_does_not_panic() {
        let mut state = test_state();
        let content = draw(&mut state, 30, 8);
        assert!(!content.is_empty());
    }
}
