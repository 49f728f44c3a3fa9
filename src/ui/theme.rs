use crate::roles::Role;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub number: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub title: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),       // Blue for pseudocode keywords
    number: Color::Rgb(250, 179, 135),        // Orange for counters
    border_normal: Color::Rgb(108, 112, 134), // Grey border
    current_line_bg: Color::Rgb(50, 50, 70),  // Status bar background
    title: Color::Rgb(249, 226, 175),         // Yellow pane titles
};

/// Bar colour for each role
pub fn role_color(role: Role) -> Color {
    match role {
        Role::Normal => Color::Rgb(100, 116, 139),
        Role::Comparing | Role::Digit => Color::Rgb(59, 130, 246),
        Role::Swapped | Role::Flipping => Color::Rgb(245, 158, 66),
        Role::Sorted => Color::Rgb(34, 197, 94),
        Role::Pivot => Color::Rgb(162, 28, 175),
        Role::Merging => Color::Rgb(167, 139, 250),
        Role::Current => Color::Rgb(251, 191, 36),
        Role::Found => Color::Rgb(22, 163, 74),
        Role::Path => Color::Rgb(14, 165, 233),
        Role::Minimum => Color::Rgb(225, 29, 72),
        Role::LeftBound => Color::Rgb(99, 102, 241),
        Role::RightBound => Color::Rgb(244, 114, 182),
    }
}
