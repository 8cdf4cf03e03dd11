//! Key event handlers: translate an [`InputKey`] into a [`Message`] based on
//! the current UI mode and focused pane.

use safeplace_core::{CategoryFilter, ChainFilter};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, UiMode};

/// Map a key press to a message, given the current state.
///
/// Returns None for keys that mean nothing in the current context.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C quits from anywhere, including the notice overlay
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Notice => handle_notice_key(key),
        UiMode::Browse => handle_browse_key(state, key),
    }
}

/// The notice overlay swallows everything; any dismiss-ish key closes it.
fn handle_notice_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter | InputKey::Char(_) => Some(Message::DismissNotice),
        _ => None,
    }
}

fn handle_browse_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Focus cycling works from every pane
    match key {
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrev),
        _ => {}
    }

    if state.focus.is_text_input() {
        handle_text_input_key(state, key)
    } else {
        handle_pane_key(state, key)
    }
}

/// Keys while a search box has focus: plain characters are text.
fn handle_text_input_key(state: &AppState, key: InputKey) -> Option<Message> {
    let chain_box = state.focus == Focus::ChainSearch;
    match key {
        InputKey::Char(c) => Some(if chain_box {
            Message::ChainSearchInput { c }
        } else {
            Message::SearchInput { c }
        }),
        InputKey::Backspace => Some(if chain_box {
            Message::ChainSearchBackspace
        } else {
            Message::SearchBackspace
        }),
        InputKey::Delete => Some(if chain_box {
            Message::ChainSearchClear
        } else {
            Message::SearchClear
        }),
        // Context-aware Escape: clear a non-empty term, otherwise quit
        InputKey::Esc => {
            let term = if chain_box {
                &state.selection.chain_search_term
            } else {
                &state.selection.search_term
            };
            if term.is_empty() {
                Some(Message::Quit)
            } else if chain_box {
                Some(Message::ChainSearchClear)
            } else {
                Some(Message::SearchClear)
            }
        }
        _ => None,
    }
}

/// Keys in the pill row, sidebar, and grid: characters are shortcuts.
fn handle_pane_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Shared shortcuts
    match key {
        InputKey::Char('q') | InputKey::Esc => return Some(Message::Quit),
        InputKey::Char('/') => return Some(Message::FocusSearch),
        InputKey::Char('c') => return Some(Message::FocusChainSearch),
        InputKey::Char('s') => return Some(Message::SubmitProject),
        InputKey::Char('r') => return Some(Message::ResetFilters),
        _ => {}
    }

    match state.focus {
        Focus::ChainPills => match key {
            InputKey::Left => Some(Message::ChainPillLeft),
            InputKey::Right => Some(Message::ChainPillRight),
            InputKey::Home => Some(Message::SelectChain(ChainFilter::All)),
            InputKey::Enter | InputKey::Char(' ') => {
                Some(Message::SelectChain(match state.chain_at_cursor() {
                    None => ChainFilter::All,
                    Some(id) => ChainFilter::Only(id),
                }))
            }
            _ => None,
        },
        Focus::Categories => match key {
            InputKey::Up => Some(Message::CategoryUp),
            InputKey::Down => Some(Message::CategoryDown),
            InputKey::Home => Some(Message::SelectCategory(CategoryFilter::All)),
            InputKey::Enter | InputKey::Char(' ') => {
                Some(Message::SelectCategory(match state.category_at_cursor() {
                    None => CategoryFilter::All,
                    Some(cat) => CategoryFilter::Only(cat),
                }))
            }
            _ => None,
        },
        Focus::Grid => match key {
            InputKey::Up => Some(Message::GridUp),
            InputKey::Down => Some(Message::GridDown),
            InputKey::Left => Some(Message::GridLeft),
            InputKey::Right => Some(Message::GridRight),
            InputKey::Enter | InputKey::Char('o') => Some(Message::OpenSelected),
            _ => None,
        },
        // Text inputs are handled above
        Focus::SiteSearch | Focus::ChainSearch => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::test_state;

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut state = test_state();
        for focus in [
            Focus::SiteSearch,
            Focus::ChainSearch,
            Focus::ChainPills,
            Focus::Categories,
            Focus::Grid,
        ] {
            state.focus = focus;
            assert!(matches!(
                handle_key(&state, InputKey::CharCtrl('c')),
                Some(Message::Quit)
            ));
        }
        state.ui_mode = UiMode::Notice;
        assert!(matches!(
            handle_key(&state, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        ));
    }

    #[test]
    fn test_chars_are_text_in_search_focus() {
        let state = test_state();
        assert!(matches!(
            handle_key(&state, InputKey::Char('q')),
            Some(Message::SearchInput { c: 'q' })
        ));
    }

    #[test]
    fn test_chars_are_shortcuts_in_grid_focus() {
        let mut state = test_state();
        state.focus = Focus::Grid;
        assert!(matches!(
            handle_key(&state, InputKey::Char('q')),
            Some(Message::Quit)
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Char('/')),
            Some(Message::FocusSearch)
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Char('s')),
            Some(Message::SubmitProject)
        ));
    }

    #[test]
    fn test_escape_clears_nonempty_search_first() {
        let mut state = test_state();
        assert!(matches!(
            handle_key(&state, InputKey::Esc),
            Some(Message::Quit)
        ));
        state.selection.search_term = "uni".to_string();
        assert!(matches!(
            handle_key(&state, InputKey::Esc),
            Some(Message::SearchClear)
        ));
    }

    #[test]
    fn test_enter_on_category_cursor_selects() {
        let mut state = test_state();
        state.focus = Focus::Categories;
        state.category_cursor = 1; // Swap
        let msg = handle_key(&state, InputKey::Enter);
        assert!(matches!(
            msg,
            Some(Message::SelectCategory(CategoryFilter::Only(
                safeplace_core::Category::Swap
            )))
        ));

        state.category_cursor = 0;
        assert!(matches!(
            handle_key(&state, InputKey::Enter),
            Some(Message::SelectCategory(CategoryFilter::All))
        ));
    }

    #[test]
    fn test_enter_on_pill_cursor_selects_chain() {
        let mut state = test_state();
        state.focus = Focus::ChainPills;
        state.chain_cursor = 1; // eth
        match handle_key(&state, InputKey::Enter) {
            Some(Message::SelectChain(ChainFilter::Only(id))) => assert_eq!(id, "eth"),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_notice_swallows_navigation() {
        let mut state = test_state();
        state.ui_mode = UiMode::Notice;
        assert!(handle_key(&state, InputKey::Up).is_none());
        assert!(matches!(
            handle_key(&state, InputKey::Esc),
            Some(Message::DismissNotice)
        ));
        assert!(matches!(
            handle_key(&state, InputKey::Enter),
            Some(Message::DismissNotice)
        ));
    }

    #[test]
    fn test_tab_cycles_focus_from_any_pane() {
        let mut state = test_state();
        state.focus = Focus::Grid;
        assert!(matches!(
            handle_key(&state, InputKey::Tab),
            Some(Message::FocusNext)
        ));
        assert!(matches!(
            handle_key(&state, InputKey::BackTab),
            Some(Message::FocusPrev)
        ));
    }
}
