//! Main update function - handles state transitions (TEA pattern)
//!
//! Every transition is total: there is no failure mode in the selection
//! state machine. Transitions that can shrink a filtered view re-clamp the
//! cursors that index into it.

use tracing::debug;

use crate::message::Message;
use crate::state::{AppState, Focus, UiMode};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            // Notices live until the next key press
            state.status_notice = None;
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Protocol Search
        // ─────────────────────────────────────────────────────────
        Message::SearchInput { c } => {
            state.selection.search_term.push(c);
            state.clamp_cursors();
            UpdateResult::none()
        }
        Message::SearchBackspace => {
            state.selection.search_term.pop();
            state.clamp_cursors();
            UpdateResult::none()
        }
        Message::SearchClear => {
            state.selection.search_term.clear();
            state.clamp_cursors();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Chain Search
        // ─────────────────────────────────────────────────────────
        Message::ChainSearchInput { c } => {
            state.selection.chain_search_term.push(c);
            state.clamp_cursors();
            UpdateResult::none()
        }
        Message::ChainSearchBackspace => {
            state.selection.chain_search_term.pop();
            state.clamp_cursors();
            UpdateResult::none()
        }
        Message::ChainSearchClear => {
            state.selection.chain_search_term.clear();
            state.clamp_cursors();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectCategory(filter) => {
            state.selection.category = filter;
            state.clamp_cursors();
            UpdateResult::none()
        }
        Message::SelectChain(filter) => {
            state.selection.chain = filter;
            state.clamp_cursors();
            UpdateResult::none()
        }
        Message::ResetFilters => {
            state.selection.clear();
            state.category_cursor = 0;
            state.chain_cursor = 0;
            state.grid_cursor = 0;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }
        Message::FocusPrev => {
            state.focus = state.focus.prev();
            UpdateResult::none()
        }
        Message::FocusSearch => {
            state.focus = Focus::SiteSearch;
            UpdateResult::none()
        }
        Message::FocusChainSearch => {
            state.focus = Focus::ChainSearch;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Cursors
        // ─────────────────────────────────────────────────────────
        Message::CategoryUp => {
            state.category_cursor = state.category_cursor.saturating_sub(1);
            UpdateResult::none()
        }
        Message::CategoryDown => {
            let max = safeplace_core::Category::ALL.len(); // 0 = All button
            if state.category_cursor < max {
                state.category_cursor += 1;
            }
            UpdateResult::none()
        }
        Message::ChainPillLeft => {
            state.chain_cursor = state.chain_cursor.saturating_sub(1);
            UpdateResult::none()
        }
        Message::ChainPillRight => {
            let max = state.filtered_chains().len(); // 0 = All pill
            if state.chain_cursor < max {
                state.chain_cursor += 1;
            }
            UpdateResult::none()
        }
        Message::GridLeft => {
            state.grid_cursor = state.grid_cursor.saturating_sub(1);
            UpdateResult::none()
        }
        Message::GridRight => {
            let count = state.filtered_sites().len();
            if count > 0 && state.grid_cursor + 1 < count {
                state.grid_cursor += 1;
            }
            UpdateResult::none()
        }
        Message::GridUp => {
            let stride = state.grid_columns.max(1);
            state.grid_cursor = state.grid_cursor.saturating_sub(stride);
            UpdateResult::none()
        }
        Message::GridDown => {
            let stride = state.grid_columns.max(1);
            let count = state.filtered_sites().len();
            if state.grid_cursor + stride < count {
                state.grid_cursor += stride;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Card Actions
        // ─────────────────────────────────────────────────────────
        Message::OpenSelected => match state.selected_site() {
            Some(site) => {
                let url = site.url.clone();
                state.status_notice = Some(format!("Opening {}", site.name));
                UpdateResult::action(UpdateAction::OpenUrl { url })
            }
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Submit Project (placeholder)
        // ─────────────────────────────────────────────────────────
        Message::SubmitProject => {
            state.ui_mode = UiMode::Notice;
            UpdateResult::none()
        }
        Message::DismissNotice => {
            state.ui_mode = UiMode::Browse;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Favicon Probe
        // ─────────────────────────────────────────────────────────
        Message::IconUnavailable { site } => {
            if state.icons.mark_unavailable(&site) {
                debug!(site = %site, "icon unavailable, placeholder substituted");
            }
            UpdateResult::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use crate::state::tests::test_state;
    use safeplace_core::{Category, CategoryFilter, ChainFilter, PLACEHOLDER_ICON};

    #[test]
    fn test_quit_sets_phase() {
        let mut state = test_state();
        update(&mut state, Message::Quit);
        assert!(state.is_quitting());
    }

    #[test]
    fn test_key_message_produces_followup() {
        let mut state = test_state();
        let result = update(&mut state, Message::Key(InputKey::Char('u')));
        assert!(matches!(
            result.message,
            Some(Message::SearchInput { c: 'u' })
        ));
    }

    #[test]
    fn test_search_input_builds_term() {
        let mut state = test_state();
        update(&mut state, Message::SearchInput { c: 'u' });
        update(&mut state, Message::SearchInput { c: 'n' });
        assert_eq!(state.selection.search_term, "un");

        update(&mut state, Message::SearchBackspace);
        assert_eq!(state.selection.search_term, "u");

        update(&mut state, Message::SearchClear);
        assert!(state.selection.search_term.is_empty());
    }

    #[test]
    fn test_search_narrows_and_clamps_grid_cursor() {
        let mut state = test_state();
        state.grid_cursor = 2; // Lido
        for c in "aave".chars() {
            update(&mut state, Message::SearchInput { c });
        }
        assert_eq!(state.grid_cursor, 0);
        assert_eq!(state.selected_site().unwrap().name, "Aave");
    }

    #[test]
    fn test_select_category_replaces_field() {
        let mut state = test_state();
        update(
            &mut state,
            Message::SelectCategory(CategoryFilter::Only(Category::Lending)),
        );
        assert_eq!(
            state.selection.category,
            CategoryFilter::Only(Category::Lending)
        );
        let names: Vec<_> = state
            .filtered_sites()
            .iter()
            .map(|s| s.name.clone())
            .collect();
        assert_eq!(names, ["Aave"]);

        update(&mut state, Message::SelectCategory(CategoryFilter::All));
        assert_eq!(state.filtered_sites().len(), 3);
    }

    #[test]
    fn test_select_chain_accepts_hidden_pill() {
        let mut state = test_state();
        // Hide every pill, then select a chain anyway: selection accepts any
        // id, the pill row is only a display subset
        state.selection.chain_search_term = "zzz".to_string();
        update(
            &mut state,
            Message::SelectChain(ChainFilter::Only("polygon".into())),
        );
        assert_eq!(state.selection.chain, ChainFilter::Only("polygon".into()));
        // Only Aave (all-chains sentinel) covers polygon
        let names: Vec<_> = state
            .filtered_sites()
            .iter()
            .map(|s| s.name.clone())
            .collect();
        assert_eq!(names, ["Aave"]);
    }

    #[test]
    fn test_reset_filters_restores_initial_selection() {
        let mut state = test_state();
        update(&mut state, Message::SearchInput { c: 'a' });
        update(
            &mut state,
            Message::SelectCategory(CategoryFilter::Only(Category::Swap)),
        );
        update(
            &mut state,
            Message::SelectChain(ChainFilter::Only("eth".into())),
        );
        update(&mut state, Message::ResetFilters);

        assert!(state.selection.search_term.is_empty());
        assert_eq!(state.selection.category, CategoryFilter::All);
        assert_eq!(state.selection.chain, ChainFilter::All);
        assert_eq!(state.grid_cursor, 0);
        assert_eq!(state.filtered_sites().len(), 3);
    }

    #[test]
    fn test_category_cursor_bounds() {
        let mut state = test_state();
        update(&mut state, Message::CategoryUp);
        assert_eq!(state.category_cursor, 0);

        for _ in 0..50 {
            update(&mut state, Message::CategoryDown);
        }
        assert_eq!(state.category_cursor, Category::ALL.len());
    }

    #[test]
    fn test_chain_pill_cursor_bounds() {
        let mut state = test_state();
        for _ in 0..10 {
            update(&mut state, Message::ChainPillRight);
        }
        // 2 chains + All pill -> max index 2
        assert_eq!(state.chain_cursor, 2);

        for _ in 0..10 {
            update(&mut state, Message::ChainPillLeft);
        }
        assert_eq!(state.chain_cursor, 0);
    }

    #[test]
    fn test_grid_movement_uses_column_stride() {
        let mut state = test_state();
        state.grid_columns = 2;
        update(&mut state, Message::GridDown);
        assert_eq!(state.grid_cursor, 2);
        update(&mut state, Message::GridDown); // would pass the end, stays
        assert_eq!(state.grid_cursor, 2);
        update(&mut state, Message::GridUp);
        assert_eq!(state.grid_cursor, 0);
        update(&mut state, Message::GridRight);
        assert_eq!(state.grid_cursor, 1);
        update(&mut state, Message::GridLeft);
        assert_eq!(state.grid_cursor, 0);
    }

    #[test]
    fn test_open_selected_emits_action() {
        let mut state = test_state();
        let result = update(&mut state, Message::OpenSelected);
        match result.action {
            Some(UpdateAction::OpenUrl { url }) => {
                assert_eq!(url, "https://app.uniswap.org");
            }
            other => panic!("unexpected action: {other:?}"),
        }
        assert!(state.status_notice.as_deref().unwrap().contains("Uniswap"));
    }

    #[test]
    fn test_open_selected_with_empty_grid_is_noop() {
        let mut state = test_state();
        state.selection.search_term = "zzz".to_string();
        state.clamp_cursors();
        let result = update(&mut state, Message::OpenSelected);
        assert!(result.action.is_none());
    }

    #[test]
    fn test_status_notice_clears_on_next_key() {
        let mut state = test_state();
        update(&mut state, Message::OpenSelected);
        assert!(state.status_notice.is_some());
        update(&mut state, Message::Key(InputKey::Tab));
        assert!(state.status_notice.is_none());
    }

    #[test]
    fn test_submit_project_shows_and_dismisses_notice() {
        let mut state = test_state();
        update(&mut state, Message::SubmitProject);
        assert_eq!(state.ui_mode, UiMode::Notice);
        update(&mut state, Message::DismissNotice);
        assert_eq!(state.ui_mode, UiMode::Browse);
    }

    #[test]
    fn test_icon_unavailable_substitutes_once() {
        let mut state = test_state();
        let original = state.icons.address("Uniswap").to_string();
        assert_ne!(original, PLACEHOLDER_ICON);

        update(
            &mut state,
            Message::IconUnavailable {
                site: "Uniswap".into(),
            },
        );
        assert_eq!(state.icons.address("Uniswap"), PLACEHOLDER_ICON);

        // A duplicate failure report must not cycle the address
        update(
            &mut state,
            Message::IconUnavailable {
                site: "Uniswap".into(),
            },
        );
        assert_eq!(state.icons.address("Uniswap"), PLACEHOLDER_ICON);
    }
}
