//! Visual theme and styling.

use console::Style;

/// depgate's visual theme.
#[derive(Debug, Clone)]
pub struct GateTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
}

impl Default for GateTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GateTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a skipped message (icon + text in dim).
    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{} {}", self.header.apply_to("◆"), self.highlight.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_formats_success() {
        let theme = GateTheme::plain();
        assert_eq!(theme.format_success("gs installed"), "✓ gs installed");
    }

    #[test]
    fn plain_theme_formats_error() {
        let theme = GateTheme::plain();
        assert_eq!(theme.format_error("gs failed"), "✗ gs failed");
    }

    #[test]
    fn plain_theme_formats_skipped_and_warning() {
        let theme = GateTheme::plain();
        assert_eq!(theme.format_skipped("gs"), "○ gs");
        assert_eq!(theme.format_warning("gs"), "⚠ gs");
    }

    #[test]
    fn header_contains_title() {
        let theme = GateTheme::plain();
        assert!(theme.format_header("Optional dependencies").contains("Optional dependencies"));
    }
}
