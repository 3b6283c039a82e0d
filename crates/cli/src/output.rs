//! The rendering facade.
//!
//! [`Renderer`] owns an output sink and exposes one method per output
//! shape the setup scripts use. Rendering can only fail on sink IO, so
//! every operation returns `io::Result<()>`; bad display tags fall back
//! to an unstyled rendition instead of erroring.

use owo_colors::Style;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::time::Duration;
use tracing::debug;

use deathstar_core::report::{CheckStatus, RunSummary};

use crate::disclaimer::DisclaimerKind;
use crate::panel::{BoxStyle, Panel};
use crate::progress;
use crate::table;
use crate::theme::{self, paint, MessageStyle};

fn default_width() -> usize {
    72
}

fn default_step_delay_ms() -> u64 {
    20
}

fn default_true() -> bool {
    true
}

/// Rendering knobs.
///
/// `width` is the outer width of header, status, and disclaimer panels.
/// `step_delay_ms` is the pause between the 100 progress-bar increments.
/// `animation` controls whether progress bars draw to the terminal at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Outer panel width in columns.
    #[serde(default = "default_width")]
    pub width: usize,
    /// Milliseconds slept between progress increments.
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,
    /// Draw progress bars to the terminal.
    #[serde(default = "default_true")]
    pub animation: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: default_width(),
            step_delay_ms: default_step_delay_ms(),
            animation: default_true(),
        }
    }
}

/// Renders script output to an injected sink.
pub struct Renderer<W> {
    out: W,
    options: RenderOptions,
}

impl Renderer<io::StdoutLock<'static>> {
    /// Renderer over locked stdout with default options.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock(), RenderOptions::default())
    }
}

impl<W: Write> Renderer<W> {
    /// Renderer over an arbitrary sink.
    pub fn new(out: W, options: RenderOptions) -> Self {
        Self { out, options }
    }

    /// Recover the sink. Tests use this to inspect captured output.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Double-boxed header with the title in bold blue and an optional
    /// dimmed subtitle underneath, both centered.
    pub fn header(&mut self, title: &str, subtitle: &str) -> io::Result<()> {
        let mut body = paint(title, Style::new().blue().bold());
        if !subtitle.is_empty() {
            body.push('\n');
            body.push_str(&paint(subtitle, Style::new().dimmed()));
        }
        Panel::new(&body)
            .box_style(BoxStyle::Double)
            .border(Style::new().blue())
            .width(self.options.width)
            .padding(1, 2)
            .centered()
            .render(&mut self.out)
    }

    /// Section banner preceded by a blank line.
    pub fn section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            paint(&format!("═══ {title} ═══"), Style::new().cyan().bold())
        )
    }

    /// One-line status message colored by its style tag.
    pub fn status(&mut self, message: &str, style_tag: &str) -> io::Result<()> {
        match MessageStyle::from_tag(style_tag) {
            Some(style) => writeln!(self.out, "{}", paint(message, style.style())),
            None => {
                debug!(tag = style_tag, "unknown status style, rendering unstyled");
                writeln!(self.out, "{message}")
            }
        }
    }

    /// Check-result line, plus an indented detail line when `details` is
    /// non-empty.
    pub fn check(&mut self, name: &str, status_tag: &str, details: &str) -> io::Result<()> {
        match CheckStatus::from_tag(status_tag) {
            Some(status) => writeln!(
                self.out,
                "  {} {} - {}",
                theme::check_icon(status),
                paint(status_tag, theme::check_style(status)),
                name
            )?,
            None => {
                debug!(tag = status_tag, "unknown check status, rendering bullet");
                writeln!(self.out, "  • {status_tag} - {name}")?;
            }
        }
        if !details.is_empty() {
            writeln!(self.out, "       {details}")?;
        }
        Ok(())
    }

    /// Bordered table; rows are padded or truncated to the header count.
    pub fn table(
        &mut self,
        headers: &[String],
        rows: &[Vec<String>],
        title: &str,
    ) -> io::Result<()> {
        table::render(&mut self.out, headers, rows, title)
    }

    /// Cosmetic progress bar, run to completion.
    ///
    /// The bar draws to stdout (when animation is on) rather than the
    /// renderer sink; indicatif owns the terminal redraw cycle.
    pub fn progress(&mut self, description: &str) -> io::Result<()> {
        let bar = progress::cosmetic_bar(description, self.options.animation);
        progress::run_to_completion(&bar, Duration::from_millis(self.options.step_delay_ms));
        Ok(())
    }

    /// Statistics table followed by the overall status panel.
    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        let rate = summary.success_rate();
        let headers = vec!["Metric".to_string(), "Count".to_string()];
        let rows = vec![
            vec!["Total Categories".to_string(), summary.total.to_string()],
            vec![
                "✅ Passed".to_string(),
                paint(&summary.passed.to_string(), Style::new().green()),
            ],
            vec![
                "⚠️  Warnings".to_string(),
                paint(&summary.warnings.to_string(), Style::new().yellow()),
            ],
            vec![
                "❌ Failed".to_string(),
                paint(&summary.failed.to_string(), Style::new().red()),
            ],
            vec![
                "📈 Success Rate".to_string(),
                paint(&format!("{rate}%"), Style::new().bold()),
            ],
        ];
        table::render(&mut self.out, &headers, &rows, "📊 Summary Statistics")?;

        let tier = summary.tier();
        let body = format!(
            "{}\n{}",
            paint(theme::tier_headline(tier), theme::tier_style(tier).bold()),
            paint(theme::tier_message(tier), Style::new().dimmed())
        );
        Panel::new(&body)
            .border(theme::tier_style(tier))
            .width(self.options.width)
            .render(&mut self.out)
    }

    /// One of the fixed disclaimer panels, or the unknown-tag fallback.
    pub fn disclaimer(&mut self, kind_tag: &str) -> io::Result<()> {
        match DisclaimerKind::from_tag(kind_tag) {
            Some(kind) => Panel::new(&kind.body())
                .title(&paint(kind.title(), Style::new().red().bold()))
                .box_style(BoxStyle::Double)
                .border(Style::new().red())
                .width(self.options.width)
                .padding(1, 2)
                .render(&mut self.out),
            None => {
                debug!(tag = kind_tag, "unknown disclaimer type");
                Panel::new(&paint("Unknown disclaimer type", Style::new().yellow().bold()))
                    .border(Style::new().yellow())
                    .width(self.options.width)
                    .render(&mut self.out)
            }
        }
    }
}
