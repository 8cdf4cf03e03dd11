//! Application state (Model in TEA pattern)

use safeplace_core::{filter_chains, filter_sites, Category, Chain, Datasets, Selection, Site};

use crate::config::Settings;
use crate::icons::IconBook;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Normal operation
    #[default]
    Browsing,
    /// Shutdown requested; the runner exits its loop
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Normal directory view
    #[default]
    Browse,

    /// Acknowledgment overlay ("submit project" placeholder)
    Notice,
}

/// Which pane keyboard input is directed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Protocol search box (free text)
    #[default]
    SiteSearch,
    /// Chain filter box (free text)
    ChainSearch,
    /// Chain pill row
    ChainPills,
    /// Category sidebar
    Categories,
    /// Results grid
    Grid,
}

impl Focus {
    /// Cycle order: search → chain search → pills → sidebar → grid.
    pub fn next(self) -> Self {
        match self {
            Focus::SiteSearch => Focus::ChainSearch,
            Focus::ChainSearch => Focus::ChainPills,
            Focus::ChainPills => Focus::Categories,
            Focus::Categories => Focus::Grid,
            Focus::Grid => Focus::SiteSearch,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::SiteSearch => Focus::Grid,
            Focus::ChainSearch => Focus::SiteSearch,
            Focus::ChainPills => Focus::ChainSearch,
            Focus::Categories => Focus::ChainPills,
            Focus::Grid => Focus::Categories,
        }
    }

    /// Whether this pane captures plain character keys as text input.
    pub fn is_text_input(self) -> bool {
        matches!(self, Focus::SiteSearch | Focus::ChainSearch)
    }
}

/// The application model.
///
/// The datasets are immutable after load; the selection state, cursors, and
/// icon book are the only mutable pieces, and every mutation flows through
/// `handler::update`.
#[derive(Debug)]
pub struct AppState {
    /// Immutable site and chain datasets
    pub datasets: Datasets,

    /// The four-field selection state driving both filters
    pub selection: Selection,

    /// Lifecycle phase
    pub phase: AppPhase,

    /// Current UI mode
    pub ui_mode: UiMode,

    /// Pane receiving keyboard input
    pub focus: Focus,

    /// Cursor in the category sidebar: 0 = All, then `Category::ALL` order
    pub category_cursor: usize,

    /// Cursor in the chain pill row: 0 = All, then the filtered chains
    pub chain_cursor: usize,

    /// Cursor into the filtered site list
    pub grid_cursor: usize,

    /// Cards per grid row, written by the grid widget at render time so
    /// vertical cursor movement knows the stride
    pub grid_columns: usize,

    /// Per-card icon addresses and fallback bookkeeping
    pub icons: IconBook,

    /// Transient status-bar notice (icon probe results, open errors)
    pub status_notice: Option<String>,

    /// Loaded settings
    pub settings: Settings,
}

impl AppState {
    pub fn new(datasets: Datasets, settings: Settings) -> Self {
        let icons = IconBook::new(&datasets.sites);
        Self {
            datasets,
            selection: Selection::default(),
            phase: AppPhase::default(),
            ui_mode: UiMode::default(),
            focus: Focus::default(),
            category_cursor: 0,
            chain_cursor: 0,
            grid_cursor: 0,
            grid_columns: 1,
            icons,
            status_notice: None,
            settings,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Derived views (recomputed from the selection every call)
    // ─────────────────────────────────────────────────────────

    /// Sites passing every active predicate, dataset order retained.
    pub fn filtered_sites(&self) -> Vec<&Site> {
        filter_sites(&self.datasets.sites, &self.selection)
    }

    /// Chains whose name matches the chain search term.
    pub fn filtered_chains(&self) -> Vec<&Chain> {
        filter_chains(&self.datasets.chains, &self.selection.chain_search_term)
    }

    /// Site under the grid cursor, if any survive the filters.
    pub fn selected_site(&self) -> Option<&Site> {
        self.filtered_sites().get(self.grid_cursor).copied()
    }

    /// Category under the sidebar cursor; None = the All button.
    pub fn category_at_cursor(&self) -> Option<Category> {
        if self.category_cursor == 0 {
            None
        } else {
            Category::ALL.get(self.category_cursor - 1).copied()
        }
    }

    /// Chain id under the pill cursor; None = the All pill.
    ///
    /// Indexes the *filtered* pill row -- the display subset -- but the
    /// selection it produces is a plain chain id, so an id can stay selected
    /// even when the chain search later hides its pill.
    pub fn chain_at_cursor(&self) -> Option<String> {
        if self.chain_cursor == 0 {
            None
        } else {
            self.filtered_chains()
                .get(self.chain_cursor - 1)
                .map(|c| c.id.clone())
        }
    }

    // ─────────────────────────────────────────────────────────
    // Cursor maintenance
    // ─────────────────────────────────────────────────────────

    /// Clamp every cursor to the view it indexes. Called after any
    /// transition that can shrink a filtered list.
    pub fn clamp_cursors(&mut self) {
        let site_count = self.filtered_sites().len();
        if site_count == 0 {
            self.grid_cursor = 0;
        } else if self.grid_cursor >= site_count {
            self.grid_cursor = site_count - 1;
        }

        // Pill row length includes the leading All pill
        let pill_count = self.filtered_chains().len() + 1;
        if self.chain_cursor >= pill_count {
            self.chain_cursor = pill_count - 1;
        }

        let category_count = Category::ALL.len() + 1;
        if self.category_cursor >= category_count {
            self.category_cursor = category_count - 1;
        }
    }

    /// Request shutdown.
    pub fn quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn is_quitting(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
