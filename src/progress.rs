//! Progress bar display for artifact downloads

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for one download
///
/// Falls back to a spinner when the server does not report a length.
pub struct DownloadProgress {
    bar: ProgressBar,
}

impl DownloadProgress {
    pub fn new(total_bytes: Option<u64>, file_name: &str) -> Self {
        let bar = match total_bytes {
            Some(total) => {
                let style = ProgressStyle::with_template(
                    "[{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-");
                let bar = ProgressBar::new(total);
                bar.set_style(style);
                bar
            }
            None => {
                let style = ProgressStyle::with_template("{spinner} {bytes} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner());
                let bar = ProgressBar::new_spinner();
                bar.set_style(style);
                bar
            }
        };
        bar.set_message(file_name.to_string());

        Self { bar }
    }

    /// Wrap a reader so that reads advance the bar
    pub fn wrap_read<R: std::io::Read>(&self, reader: R) -> indicatif::ProgressBarIter<R> {
        self.bar.wrap_read(reader)
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}
