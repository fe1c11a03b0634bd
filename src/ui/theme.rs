use crossterm::style::Color;

/// Design tokens for the tzpick terminal UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const TITLE: &str = "🌐";
    pub const CURSOR: &str = "❯";
    pub const FOCUS: &str = "▌";

    // Selection states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const UP_DOWN: &str = "↑↓";
    pub const ELLIPSIS: &str = "…";
}

pub mod icons_ascii {
    pub const TITLE: &str = "[tz]";
    pub const CURSOR: &str = ">";
    pub const FOCUS: &str = "|";

    // Selection states.
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";

    // Tree expansion.
    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    pub const UP_DOWN: &str = "Up/Down";
    pub const ELLIPSIS: &str = "...";
}

/// One icon set, resolved once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub title: &'static str,
    pub cursor: &'static str,
    pub focus: &'static str,
    pub selected: &'static str,
    pub unselected: &'static str,
    pub partial: &'static str,
    pub expand: &'static str,
    pub collapse: &'static str,
    pub up_down: &'static str,
    pub ellipsis: &'static str,
}

impl Icons {
    pub const UNICODE: Icons = Icons {
        title: icons::TITLE,
        cursor: icons::CURSOR,
        focus: icons::FOCUS,
        selected: icons::SELECTED,
        unselected: icons::UNSELECTED,
        partial: icons::PARTIAL,
        expand: icons::EXPAND,
        collapse: icons::COLLAPSE,
        up_down: icons::UP_DOWN,
        ellipsis: icons::ELLIPSIS,
    };

    pub const ASCII: Icons = Icons {
        title: icons_ascii::TITLE,
        cursor: icons_ascii::CURSOR,
        focus: icons_ascii::FOCUS,
        selected: icons_ascii::SELECTED,
        unselected: icons_ascii::UNSELECTED,
        partial: icons_ascii::PARTIAL,
        expand: icons_ascii::EXPAND,
        collapse: icons_ascii::COLLAPSE,
        up_down: icons_ascii::UP_DOWN,
        ellipsis: icons_ascii::ELLIPSIS,
    };

    pub fn new(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self::UNICODE
        } else {
            Self::ASCII
        }
    }

    /// Checkbox for a single location
    pub fn check(&self, selected: bool) -> &'static str {
        if selected {
            self.selected
        } else {
            self.unselected
        }
    }
}
