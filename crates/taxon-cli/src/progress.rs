use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use taxon_batch::ProgressObserver;

/// Spinner on stderr reporting how many papers were classified.
///
/// Hidden when stderr is not a terminal or when running quiet; every method
/// is then a no-op.
#[derive(Clone)]
pub struct Progress {
    bar: Option<ProgressBar>,
}

fn to_u64(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

impl Progress {
    #[must_use]
    pub fn spinner(quiet: bool) -> Self {
        if quiet || !std::io::stderr().is_terminal() {
            return Self::hidden();
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {pos} papers classified {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        Self { bar: Some(bar) }
    }

    #[must_use]
    pub const fn hidden() -> Self {
        Self { bar: None }
    }

    pub fn finish_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    pub fn finish_err(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.abandon_with_message(message.to_string());
        }
    }
}

impl ProgressObserver for Progress {
    fn on_record(&self, included: usize) {
        if let Some(bar) = &self.bar {
            bar.set_position(to_u64(included));
        }
    }

    fn on_checkpoint(&self, _included: usize, written: usize) {
        if let Some(bar) = &self.bar
            && written > 0
        {
            bar.set_message(format!("({written} written)"));
        }
    }
}
