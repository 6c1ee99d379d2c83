use crossterm::style::Color;
use dialoguer::theme::Theme;
use std::fmt;

/// Design tokens for the flockbook terminal UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
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
    pub const SUCCESS: &str = "✓";
    pub const WARNING: &str = "⚠";
    pub const PENDING: &str = "○";
    pub const ARROW: &str = "↳";

    // Command identifiers (used in headers).
    pub const FARM: &str = "🏠";
    pub const FLOCK: &str = "🐑";
    pub const PEN: &str = "▦";
    pub const BREEDING: &str = "♥";
    pub const HEALTH: &str = "✚";
    pub const FEED: &str = "🌾";
    pub const SALE: &str = "¥";
    pub const CHECK: &str = "🔍";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const WARNING: &str = "[WARN]";
    pub const PENDING: &str = "[ ]";
    pub const ARROW: &str = "[>]";

    pub const FARM: &str = "[FARM]";
    pub const FLOCK: &str = "[SHEEP]";
    pub const PEN: &str = "[PEN]";
    pub const BREEDING: &str = "[BREED]";
    pub const HEALTH: &str = "[HEALTH]";
    pub const FEED: &str = "[FEED]";
    pub const SALE: &str = "[SALE]";
    pub const CHECK: &str = "[CHECK]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

// ----------------------------------------------------------------------------
// FlockTheme - dialoguer theme for confirmation prompts
// ----------------------------------------------------------------------------

/// Prompt theme for destructive confirmations.
///
/// Wraps `ColorfulTheme` when color is on and `SimpleTheme` otherwise, and
/// prefixes the confirm prompt with the warning icon.
pub struct FlockTheme {
    unicode: bool,
    color: bool,
    colorful: dialoguer::theme::ColorfulTheme,
    simple: dialoguer::theme::SimpleTheme,
}

impl FlockTheme {
    pub fn new(color: bool, unicode: bool) -> Self {
        Self {
            unicode,
            color,
            colorful: dialoguer::theme::ColorfulTheme::default(),
            simple: dialoguer::theme::SimpleTheme,
        }
    }

    pub fn warning_icon(&self) -> &'static str {
        if self.unicode {
            icons::WARNING
        } else {
            icons_ascii::WARNING
        }
    }

    fn inner(&self) -> &dyn Theme {
        if self.color {
            &self.colorful
        } else {
            &self.simple
        }
    }
}

impl Theme for FlockTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.inner().format_prompt(f, prompt)
    }

    fn format_error(&self, f: &mut dyn fmt::Write, err: &str) -> fmt::Result {
        self.inner().format_error(f, err)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        let prompt = format!("{} {}", self.warning_icon(), prompt);
        self.inner().format_confirm_prompt(f, &prompt, default)
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        let prompt = format!("{} {}", self.warning_icon(), prompt);
        self.inner()
            .format_confirm_prompt_selection(f, &prompt, selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flock_theme_warning_icon() {
        assert_eq!(FlockTheme::new(false, true).warning_icon(), "⚠");
        assert_eq!(FlockTheme::new(false, false).warning_icon(), "[WARN]");
    }

    #[test]
    fn test_confirm_prompt_is_prefixed_without_color() {
        let theme = FlockTheme::new(false, false);
        let mut out = String::new();
        theme
            .format_confirm_prompt(&mut out, "Erase all farm data?", Some(false))
            .unwrap();
        assert!(out.starts_with("[WARN] Erase all farm data?"));
    }
}
