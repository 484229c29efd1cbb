//! Terminal progress helpers — spinners shown while probe batches run.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Braille dots — clean, modern feel.
const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Create an animated spinner with the given message.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars(TICK_CHARS)
            .template("{spinner:.cyan} {msg}")
            .expect("invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Spinner for a probe batch.
pub fn probe_spinner(total: usize) -> ProgressBar {
    spinner(&format!("Running {} probes...", total))
}
