//! Color palette for the directory theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const POPUP_BG: Color = Color::DarkGray; // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent
pub const CONTRAST_FG: Color = Color::Black; // Foreground on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White; // Primary text
pub const TEXT_SECONDARY: Color = Color::Gray; // Secondary text
pub const TEXT_MUTED: Color = Color::DarkGray; // Muted text

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Resolved icons / success
pub const STATUS_RED: Color = Color::Red; // Errors
pub const STATUS_YELLOW: Color = Color::Yellow; // Keybinding hints, notices

// --- Category tag colors ---
pub const TAG_FG: Color = Color::Magenta;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_constants_are_valid() {
        // Verify a few representative constants compile and are the expected type
        let _: Color = ACCENT;
        let _: Color = DEEPEST_BG;
        let _: Color = STATUS_GREEN;
    }
}
