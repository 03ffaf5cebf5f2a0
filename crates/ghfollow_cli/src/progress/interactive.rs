use std::sync::Mutex;
use std::time::Duration;

use ghfollow::sync::BatchProgress;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

/// Consolidated progress state to avoid multiple mutex locks.
#[derive(Default)]
struct ProgressState {
    /// Spinner for the page walk; the page count is unknown up front.
    fetch_bar: Option<ProgressBar>,
    /// Bar for the batch, one tick per item.
    batch_bar: Option<ProgressBar>,
}

/// Interactive progress reporter using indicatif.
pub struct InteractiveReporter {
    multi: MultiProgress,
    state: Mutex<ProgressState>,
}

impl InteractiveReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            state: Mutex::new(ProgressState::default()),
        }
    }

    /// A reporter that draws nowhere.
    #[cfg(test)]
    pub fn hidden() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(indicatif::ProgressDrawTarget::hidden()),
            state: Mutex::new(ProgressState::default()),
        }
    }

    pub fn handle(&self, event: BatchProgress) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        match event {
            BatchProgress::FetchingPages { source } => {
                let pb = self.multi.add(ProgressBar::new_spinner());
                pb.set_style(Self::spinner_style());
                pb.enable_steady_tick(Duration::from_millis(100));
                pb.set_prefix(format!("{:12}", source));
                pb.set_message("Fetching users...");
                state.fetch_bar = Some(pb);
            }

            BatchProgress::FetchedPage {
                page, total_so_far, ..
            } => {
                if let Some(ref pb) = state.fetch_bar {
                    pb.set_message(format!("Page {} ({} users)", page, total_so_far));
                }
            }

            BatchProgress::FetchComplete {
                total, complete, ..
            } => {
                if let Some(pb) = state.fetch_bar.take() {
                    if complete {
                        pb.finish_with_message(format!("✓ {} users fetched", total));
                    } else {
                        pb.finish_with_message(format!(
                            "⚠ {} users fetched (stopped early)",
                            total
                        ));
                    }
                }
            }

            BatchProgress::MutatingUsers {
                relation,
                count,
                delay,
            } => {
                let pb = self.multi.add(ProgressBar::new(count as u64));
                pb.set_style(Self::bar_style());
                pb.set_prefix(format!("{:12}", relation.verb()));
                pb.set_message(format!("{:.1}s between requests", delay.as_secs_f64()));
                state.batch_bar = Some(pb);
            }

            BatchProgress::Mutated { login, .. } => {
                if let Some(ref pb) = state.batch_bar {
                    pb.inc(1);
                    pb.set_message(format!("✓ {}", login));
                }
            }

            BatchProgress::MutationFailed { login, error, .. } => {
                if let Some(ref pb) = state.batch_bar {
                    pb.inc(1);
                    pb.println(format!("  ✗ {}: {}", login, error));
                }
            }

            BatchProgress::Waiting { delay } => {
                if let Some(ref pb) = state.batch_bar {
                    pb.set_message(format!("waiting {:.1}s", delay.as_secs_f64()));
                }
            }

            BatchProgress::MutationComplete {
                relation,
                succeeded,
                failed,
                skipped,
            } => {
                if let Some(pb) = state.batch_bar.take() {
                    let mut msg = format!("✓ {} {}, {} failed", relation.past_tense(), succeeded, failed);
                    if skipped > 0 {
                        msg.push_str(&format!(", {} skipped", skipped));
                    }
                    pb.finish_with_message(msg);
                }
            }

            _ => {}
        }
    }

    pub fn finish(&self) {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        for pb in [&state.fetch_bar, &state.batch_bar].into_iter().flatten() {
            if !pb.is_finished() {
                pb.finish();
            }
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{prefix:.bold.cyan} {spinner:.green} {msg}")
            .expect("Invalid template")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos:>3}/{len:3} {msg}")
            .expect("Invalid template")
            .progress_chars("█▓░")
    }
}

impl Default for InteractiveReporter {
    fn default() -> Self {
        Self::new()
    }
}
