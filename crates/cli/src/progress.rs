//! Cosmetic progress bars.
//!
//! These bars track no real work. They exist so shell scripts can show a
//! short, uniform animation between phases. The bar draws to stdout so it
//! interleaves correctly with the rest of the rendered output.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Number of increments a cosmetic bar runs through.
pub const STEPS: u64 = 100;

/// Build a bar with the house template. A non-animated bar draws nowhere
/// but still advances, which keeps timing behavior testable.
#[must_use]
pub fn cosmetic_bar(description: &str, animate: bool) -> ProgressBar {
    let target = if animate {
        ProgressDrawTarget::stdout()
    } else {
        ProgressDrawTarget::hidden()
    };
    let bar = ProgressBar::with_draw_target(Some(STEPS), target);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.blue} {msg} [{bar:40.cyan/blue}] {percent:>3}% ({eta})",
        )
        .unwrap()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .progress_chars("█▓░"),
    );
    bar.set_message(description.to_string());
    bar
}

/// Step the bar from zero to [`STEPS`], sleeping `step_delay` between
/// increments. The finished bar stays on screen at 100%.
pub fn run_to_completion(bar: &ProgressBar, step_delay: Duration) {
    for _ in 0..STEPS {
        std::thread::sleep(step_delay);
        bar.inc(1);
    }
    bar.finish();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_animated_bar_is_hidden() {
        let bar = cosmetic_bar("Processing", false);
        assert!(bar.is_hidden());
    }

    #[test]
    fn test_runs_to_completion() {
        let bar = cosmetic_bar("Processing", false);
        run_to_completion(&bar, Duration::ZERO);
        assert_eq!(bar.position(), STEPS);
        assert!(bar.is_finished());
    }
}
