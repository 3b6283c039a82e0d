//! Color and icon mappings for terminal output.
//!
//! Every tag the scripts emit maps to a fixed icon and color here;
//! unknown tags are handled by the callers with a default rendering.

use deathstar_core::report::{CheckStatus, StatusTier};
use owo_colors::{OwoColorize, Stream, Style};

/// Styling tag for a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    /// Informational (blue)
    Info,
    /// Success (green)
    Success,
    /// Warning (yellow)
    Warning,
    /// Error (red)
    Error,
}

impl MessageStyle {
    /// Parse a style tag.
    ///
    /// Matching is exact; anything other than `info`, `success`,
    /// `warning` or `error` is `None` and renders unstyled.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "info" => Some(MessageStyle::Info),
            "success" => Some(MessageStyle::Success),
            "warning" => Some(MessageStyle::Warning),
            "error" => Some(MessageStyle::Error),
            _ => None,
        }
    }

    /// Color for messages in this style.
    #[must_use]
    pub fn style(self) -> Style {
        match self {
            MessageStyle::Info => Style::new().blue(),
            MessageStyle::Success => Style::new().green(),
            MessageStyle::Warning => Style::new().yellow(),
            MessageStyle::Error => Style::new().red(),
        }
    }
}

/// Apply `style` to `text` when the terminal supports color.
///
/// Support is resolved against stdout, the only stream these tools write
/// to. `owo_colors::set_override` (the `--no-color` flag) wins over
/// detection.
#[must_use]
pub fn paint(text: &str, style: Style) -> String {
    text.if_supports_color(Stream::Stdout, |text| text.style(style))
        .to_string()
}

/// Icon for a check status line.
pub(crate) fn check_icon(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "✅",
        CheckStatus::Fail => "❌",
        CheckStatus::Warn => "⚠️",
        CheckStatus::Info => "ℹ️",
    }
}

/// Color for a check status tag.
pub(crate) fn check_style(status: CheckStatus) -> Style {
    match status {
        CheckStatus::Pass => Style::new().green(),
        CheckStatus::Fail => Style::new().red(),
        CheckStatus::Warn => Style::new().yellow(),
        CheckStatus::Info => Style::new().blue(),
    }
}

/// Headline of the overall status panel.
pub(crate) fn tier_headline(tier: StatusTier) -> &'static str {
    match tier {
        StatusTier::Excellent => "🌟 EXCELLENT",
        StatusTier::Good => "⚠️  GOOD",
        StatusTier::NeedsAttention => "❌ NEEDS ATTENTION",
    }
}

/// Explanation line under the overall status headline.
pub(crate) fn tier_message(tier: StatusTier) -> &'static str {
    match tier {
        StatusTier::Excellent => "All critical checks passed! Scripts are well-synchronized.",
        StatusTier::Good => "Minor issues detected. Review failed checks below.",
        StatusTier::NeedsAttention => "Multiple issues detected. Immediate review recommended.",
    }
}

/// Border and headline color of the overall status panel.
pub(crate) fn tier_style(tier: StatusTier) -> Style {
    match tier {
        StatusTier::Excellent => Style::new().green(),
        StatusTier::Good => Style::new().yellow(),
        StatusTier::NeedsAttention => Style::new().red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_style_from_tag() {
        assert_eq!(MessageStyle::from_tag("info"), Some(MessageStyle::Info));
        assert_eq!(MessageStyle::from_tag("success"), Some(MessageStyle::Success));
        assert_eq!(MessageStyle::from_tag("warning"), Some(MessageStyle::Warning));
        assert_eq!(MessageStyle::from_tag("error"), Some(MessageStyle::Error));
    }

    #[test]
    fn test_message_style_tag_match_is_exact() {
        assert_eq!(MessageStyle::from_tag("INFO"), None);
        assert_eq!(MessageStyle::from_tag("loud"), None);
        assert_eq!(MessageStyle::from_tag(""), None);
    }

    #[test]
    fn test_check_icons() {
        assert_eq!(check_icon(CheckStatus::Pass), "✅");
        assert_eq!(check_icon(CheckStatus::Fail), "❌");
        assert_eq!(check_icon(CheckStatus::Warn), "⚠️");
        assert_eq!(check_icon(CheckStatus::Info), "ℹ️");
    }

    #[test]
    fn test_tier_headlines_distinct() {
        let tiers = [
            StatusTier::Excellent,
            StatusTier::Good,
            StatusTier::NeedsAttention,
        ];
        for tier in tiers {
            assert!(tier_headline(tier).len() > 1);
            assert!(!tier_message(tier).is_empty());
        }
        assert_ne!(tier_headline(tiers[0]), tier_headline(tiers[1]));
        assert_ne!(tier_headline(tiers[1]), tier_headline(tiers[2]));
    }

    #[test]
    fn test_paint_strips_back_to_plain_text() {
        let painted = paint("operational", Style::new().green().bold());
        assert_eq!(console::strip_ansi_codes(&painted), "operational");
    }
}
