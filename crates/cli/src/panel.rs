//! Bordered panel rendering.
//!
//! Panels are the bordered, padded blocks used for headers, disclaimers,
//! and the overall status call-out. Body lines may carry ANSI styling;
//! geometry is computed on printable width so escape codes and wide emoji
//! do not skew alignment.

use console::measure_text_width;
use owo_colors::Style;
use std::io::{self, Write};

use crate::theme;

/// Border character set for a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxStyle {
    /// Double-line borders (`╔═╗`)
    Double,
    /// Rounded single-line borders (`╭─╮`)
    Rounded,
}

struct BoxChars {
    top_left: &'static str,
    top_right: &'static str,
    bottom_left: &'static str,
    bottom_right: &'static str,
    horizontal: &'static str,
    vertical: &'static str,
}

impl BoxStyle {
    fn chars(self) -> BoxChars {
        match self {
            BoxStyle::Double => BoxChars {
                top_left: "╔",
                top_right: "╗",
                bottom_left: "╚",
                bottom_right: "╝",
                horizontal: "═",
                vertical: "║",
            },
            BoxStyle::Rounded => BoxChars {
                top_left: "╭",
                top_right: "╮",
                bottom_left: "╰",
                bottom_right: "╯",
                horizontal: "─",
                vertical: "│",
            },
        }
    }
}

/// A bordered, padded block of styled text.
pub struct Panel {
    lines: Vec<String>,
    title: Option<String>,
    box_style: BoxStyle,
    border: Style,
    width: usize,
    pad_y: usize,
    pad_x: usize,
    center: bool,
}

impl Panel {
    /// Create a panel around a block of (possibly styled) text.
    #[must_use]
    pub fn new(body: &str) -> Self {
        Self {
            lines: body.lines().map(String::from).collect(),
            title: None,
            box_style: BoxStyle::Rounded,
            border: Style::new(),
            width: 0,
            pad_y: 0,
            pad_x: 1,
            center: false,
        }
    }

    /// Title shown centered in the top border.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Border character set.
    #[must_use]
    pub fn box_style(mut self, box_style: BoxStyle) -> Self {
        self.box_style = box_style;
        self
    }

    /// Border color.
    #[must_use]
    pub fn border(mut self, style: Style) -> Self {
        self.border = style;
        self
    }

    /// Target outer width in columns; grows to fit content wider than this.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Blank lines above/below and spaces left/right of the body.
    #[must_use]
    pub fn padding(mut self, vertical: usize, horizontal: usize) -> Self {
        self.pad_y = vertical;
        self.pad_x = horizontal;
        self
    }

    /// Center body lines instead of left-aligning them.
    #[must_use]
    pub fn centered(mut self) -> Self {
        self.center = true;
        self
    }

    /// Write the panel to `out`, one line at a time.
    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        let chars = self.box_style.chars();
        let content_width = self
            .lines
            .iter()
            .map(|line| measure_text_width(line))
            .max()
            .unwrap_or(0);

        // Outer width: the requested width, grown so body and title
        // always fit.
        let mut width = self.width.max(content_width + 2 * self.pad_x + 2);
        if let Some(title) = &self.title {
            width = width.max(measure_text_width(title) + 6);
        }
        let inner = width - 2;

        match &self.title {
            Some(title) => {
                let dashes = inner - measure_text_width(title) - 2;
                let left = dashes / 2;
                let right = dashes - left;
                writeln!(
                    out,
                    "{}{}{}",
                    theme::paint(
                        &format!("{}{} ", chars.top_left, chars.horizontal.repeat(left)),
                        self.border
                    ),
                    title,
                    theme::paint(
                        &format!(" {}{}", chars.horizontal.repeat(right), chars.top_right),
                        self.border
                    ),
                )?;
            }
            None => writeln!(
                out,
                "{}",
                theme::paint(
                    &format!(
                        "{}{}{}",
                        chars.top_left,
                        chars.horizontal.repeat(inner),
                        chars.top_right
                    ),
                    self.border
                )
            )?,
        }

        let vertical = theme::paint(chars.vertical, self.border);
        for _ in 0..self.pad_y {
            writeln!(out, "{}{}{}", vertical, " ".repeat(inner), vertical)?;
        }

        let body_width = inner - 2 * self.pad_x;
        for line in &self.lines {
            let fill = body_width - measure_text_width(line);
            let (left, right) = if self.center {
                (fill / 2, fill - fill / 2)
            } else {
                (0, fill)
            };
            writeln!(
                out,
                "{}{}{}{}{}",
                vertical,
                " ".repeat(self.pad_x + left),
                line,
                " ".repeat(right + self.pad_x),
                vertical
            )?;
        }

        for _ in 0..self.pad_y {
            writeln!(out, "{}{}{}", vertical, " ".repeat(inner), vertical)?;
        }

        writeln!(
            out,
            "{}",
            theme::paint(
                &format!(
                    "{}{}{}",
                    chars.bottom_left,
                    chars.horizontal.repeat(inner),
                    chars.bottom_right
                ),
                self.border
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;

    fn render_to_string(panel: &Panel) -> String {
        let mut buf = Vec::new();
        panel.render(&mut buf).unwrap();
        let raw = String::from_utf8(buf).unwrap();
        strip_ansi_codes(&raw).to_string()
    }

    #[test]
    fn test_all_lines_share_the_outer_width() {
        let panel = Panel::new("one\na longer line here")
            .box_style(BoxStyle::Double)
            .width(40)
            .padding(1, 2);
        let rendered = render_to_string(&panel);
        for line in rendered.lines() {
            assert_eq!(measure_text_width(line), 40);
        }
    }

    #[test]
    fn test_double_borders() {
        let panel = Panel::new("body").box_style(BoxStyle::Double).width(20);
        let rendered = render_to_string(&panel);
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with('╔') && lines[0].ends_with('╗'));
        assert!(lines[1].starts_with('║') && lines[1].ends_with('║'));
        assert!(lines[2].starts_with('╚') && lines[2].ends_with('╝'));
    }

    #[test]
    fn test_rounded_borders() {
        let panel = Panel::new("body").width(20);
        let rendered = render_to_string(&panel);
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with('╭') && lines[0].ends_with('╮'));
        assert!(lines[2].starts_with('╰') && lines[2].ends_with('╯'));
    }

    #[test]
    fn test_title_centered_in_top_border() {
        let panel = Panel::new("body").title("WARNING").width(31);
        let rendered = render_to_string(&panel);
        let top = rendered.lines().next().unwrap();
        assert!(top.contains("─ WARNING ─"));
        assert_eq!(measure_text_width(top), 31);
    }

    #[test]
    fn test_grows_to_fit_wide_content() {
        let panel = Panel::new("a line wider than the requested width").width(10);
        let rendered = render_to_string(&panel);
        let top = rendered.lines().next().unwrap();
        assert!(measure_text_width(top) > 10);
        assert!(rendered.contains("a line wider than the requested width"));
    }

    #[test]
    fn test_centered_body() {
        let panel = Panel::new("hi").width(12).centered();
        let rendered = render_to_string(&panel);
        assert_eq!(rendered.lines().nth(1).unwrap(), "│    hi    │");
    }

    #[test]
    fn test_vertical_padding_rows() {
        let panel = Panel::new("x").width(10).padding(1, 1);
        let rendered = render_to_string(&panel);
        assert_eq!(rendered.lines().count(), 5);
        assert_eq!(rendered.lines().nth(1).unwrap(), "│        │");
    }

    #[test]
    fn test_emoji_body_stays_aligned() {
        let panel = Panel::new("🌟 EXCELLENT\nplain line").width(30);
        let rendered = render_to_string(&panel);
        for line in rendered.lines() {
            assert_eq!(measure_text_width(line), 30);
        }
    }
}
