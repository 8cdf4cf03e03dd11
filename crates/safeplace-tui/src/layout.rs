//! Screen layout definitions for the TUI
//!
//! One fixed screen: category sidebar on the left, search header, chain
//! filter zone, results grid, and a one-row status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the category sidebar (borders included)
const SIDEBAR_WIDTH: u16 = 20;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Category sidebar (All + the 13 fixed categories)
    pub sidebar: Rect,

    /// Protocol search box
    pub search: Rect,

    /// Chain filter zone (chain search input + pill row)
    pub chains: Rect,

    /// Results grid of site cards
    pub grid: Rect,

    /// Status bar (counts, keybindings, notices)
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let columns = Layout::horizontal([
        Constraint::Length(SIDEBAR_WIDTH), // Sidebar (glass container)
        Constraint::Min(20),               // Main column
    ])
    .split(area);

    let rows = Layout::vertical([
        Constraint::Length(3), // Search box (borders + input row)
        Constraint::Length(4), // Chain zone (borders + input row + pill row)
        Constraint::Min(3),    // Grid
        Constraint::Length(1), // Status bar
    ])
    .split(columns[1]);

    ScreenAreas {
        sidebar: columns[0],
        search: rows[0],
        chains: rows[1],
        grid: rows[2],
        status: rows[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_areas_partition_the_screen() {
        let area = Rect::new(0, 0, 100, 30);
        let areas = create(area);

        assert_eq!(areas.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(areas.sidebar.height, 30);

        // Main column rows stack without gaps
        assert_eq!(areas.search.y, 0);
        assert_eq!(areas.search.height, 3);
        assert_eq!(areas.chains.y, 3);
        assert_eq!(areas.chains.height, 4);
        assert_eq!(areas.grid.y, 7);
        assert_eq!(areas.status.y, 29);
        assert_eq!(
            areas.search.height + areas.chains.height + areas.grid.height + areas.status.height,
            30
        );
    }

    #[test]
    fn test_layout_main_column_starts_after_sidebar() {
        let area = Rect::new(0, 0, 100, 30);
        let areas = create(area);
        assert_eq!(areas.search.x, SIDEBAR_WIDTH);
        assert_eq!(areas.grid.x, SIDEBAR_WIDTH);
        assert_eq!(areas.grid.width, 100 - SIDEBAR_WIDTH);
    }

    #[test]
    fn test_layout_survives_tiny_terminal() {
        let area = Rect::new(0, 0, 10, 5);
        // Should not panic; constraints degrade gracefully
        let areas = create(area);
        assert!(areas.grid.height <= 5);
    }
}
