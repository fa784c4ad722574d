//! Centralized colors for the TUI
//!
//! Single source of truth for the selection menu's palette; components use
//! these constants rather than hardcoding colors.

use ratatui::style::Color;

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Accent color for titles and borders
    pub const PRIMARY: Color = Color::Cyan;

    /// Highlight color for the cursor row
    pub const SECONDARY: Color = Color::Yellow;

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;
}
