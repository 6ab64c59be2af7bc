//! Single line progress indicator for long running streams.
//!
//! The bar is drawn by [kdam] on stderr and redrawn in place, so it
//! never mixes with data written to stdout or a file.
use kdam::{tqdm, Animation, Bar, BarExt};
use std::io::{self, Write};

/// Number of items written between progress updates.
pub const PROGRESS_INTERVAL: u64 = 1_000;

/// Layout of the progress line.
pub const BAR_FORMAT: &str =
    "[{animation}] {percentage:.2}% {count}/{total} {rate:.0}/s";

/// Progress bar for a stream of a known length.
///
/// Nothing is drawn when the total is zero.
pub struct ProgressBar {
    bar: Option<Bar>,
    total: u128,
    done: u64,
}

impl ProgressBar {
    /// Create a progress bar for `total` items starting now.
    pub fn new(total: u128) -> Self {
        let bar = (total > 0).then(|| {
            tqdm!(
                total = usize::try_from(total).unwrap_or(usize::MAX),
                bar_format = BAR_FORMAT,
                animation = Animation::Arrow,
                force_refresh = true
            )
        });
        Self {
            bar,
            total,
            done: 0,
        }
    }

    /// Expected number of items.
    pub fn total(&self) -> u128 {
        self.total
    }

    /// Number of items reported by the last update.
    pub fn done(&self) -> u64 {
        self.done
    }

    /// Whether anything is drawn.
    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Redraw the bar for `done` items.
    pub fn update(&mut self, done: u64) -> io::Result<()> {
        self.done = done;
        if let Some(bar) = self.bar.as_mut() {
            bar.update_to(usize::try_from(done).unwrap_or(usize::MAX))?;
        }
        Ok(())
    }

    /// Draw the final state and end the line.
    pub fn finish(&mut self, done: u64) -> io::Result<()> {
        self.update(done)?;
        if let Some(bar) = self.bar.as_mut() {
            bar.refresh()?;
            let mut stderr = io::stderr();
            writeln!(stderr)?;
            stderr.flush()?;
        }
        Ok(())
    }
}
