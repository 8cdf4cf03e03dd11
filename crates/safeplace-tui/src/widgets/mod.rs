//! Widgets for the SafePlace TUI
//!
//! - `sidebar`: category navigation (All + the 13 fixed tags)
//! - `search_bar`: protocol search input
//! - `chain_bar`: chain filter input + selectable pill row
//! - `site_grid`: the results grid of site cards
//! - `status_bar`: counts, keybinding hints, transient notices
//! - `notice`: the "submit project" acknowledgment overlay

pub mod chain_bar;
pub mod notice;
pub mod search_bar;
pub mod sidebar;
pub mod site_grid;
pub mod status_bar;

pub use chain_bar::ChainBar;
pub use notice::NoticeOverlay;
pub use search_bar::SearchBar;
pub use sidebar::Sidebar;
pub use site_grid::SiteGrid;
pub use status_bar::StatusBar;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to a display width, appending an ellipsis when cut.
pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
