//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use safeplace_core::{CategoryFilter, ChainFilter};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Protocol Search Messages
    // ─────────────────────────────────────────────────────────
    /// Append a character to the protocol search term
    SearchInput { c: char },
    /// Remove the last character of the protocol search term
    SearchBackspace,
    /// Clear the protocol search term
    SearchClear,

    // ─────────────────────────────────────────────────────────
    // Chain Search Messages
    // ─────────────────────────────────────────────────────────
    /// Append a character to the chain filter term
    ChainSearchInput { c: char },
    /// Remove the last character of the chain filter term
    ChainSearchBackspace,
    /// Clear the chain filter term
    ChainSearchClear,

    // ─────────────────────────────────────────────────────────
    // Selection Messages
    // ─────────────────────────────────────────────────────────
    /// Replace the selected category (All or one fixed tag)
    SelectCategory(CategoryFilter),
    /// Replace the selected chain (All or one chain id)
    SelectChain(ChainFilter),
    /// Reset every selection field to the initial empty/All state
    ResetFilters,

    // ─────────────────────────────────────────────────────────
    // Focus & Cursor Messages
    // ─────────────────────────────────────────────────────────
    /// Cycle focus forward (search → chain search → pills → sidebar → grid)
    FocusNext,
    /// Cycle focus backward
    FocusPrev,
    /// Jump focus to the protocol search box
    FocusSearch,
    /// Jump focus to the chain filter box
    FocusChainSearch,
    /// Move the category cursor up one entry
    CategoryUp,
    /// Move the category cursor down one entry
    CategoryDown,
    /// Move the chain pill cursor left
    ChainPillLeft,
    /// Move the chain pill cursor right
    ChainPillRight,
    /// Move the grid cursor up one row
    GridUp,
    /// Move the grid cursor down one row
    GridDown,
    /// Move the grid cursor left one card
    GridLeft,
    /// Move the grid cursor right one card
    GridRight,

    // ─────────────────────────────────────────────────────────
    // Card Actions
    // ─────────────────────────────────────────────────────────
    /// Open the selected site's URL in the system browser
    OpenSelected,

    // ─────────────────────────────────────────────────────────
    // Submit Project (placeholder acknowledgment, no workflow)
    // ─────────────────────────────────────────────────────────
    /// Show the "submit coming soon" notice
    SubmitProject,
    /// Dismiss the notice overlay
    DismissNotice,

    // ─────────────────────────────────────────────────────────
    // Favicon Probe Messages
    // ─────────────────────────────────────────────────────────
    /// A card's icon address failed to load; substitute the placeholder
    /// (one-shot, applied at most once per card)
    IconUnavailable { site: String },
}
