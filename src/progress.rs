use crate::models::ProgressSnapshot;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicBool, Ordering};

/// Sink for periodic download progress. The downloader calls `report` on
/// every tick and `finish` exactly once when the stream is drained, letting
/// tests capture snapshots instead of parsing console output.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, snapshot: &ProgressSnapshot);
    fn finish(&self, snapshot: &ProgressSnapshot);
}

/// Console reporter backed by indicatif. Starts as a spinner (bytes and
/// speed only) and switches to a percentage bar with ETA once a snapshot
/// carries a known total size.
pub struct ConsoleReporter {
    pb: ProgressBar,
    sized: AtomicBool,
}

impl ConsoleReporter {
    pub fn new(display_name: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{msg:30} {spinner} {bytes} ({bytes_per_sec})")
                .unwrap(),
        );
        pb.set_message(format!("Downloading {display_name}..."));

        Self {
            pb,
            sized: AtomicBool::new(false),
        }
    }
}

impl ProgressReporter for ConsoleReporter {
    fn report(&self, snapshot: &ProgressSnapshot) {
        if let Some(total) = snapshot.total_bytes {
            if !self.sized.swap(true, Ordering::Relaxed) {
                self.pb.set_length(total);
                self.pb.set_style(
                    ProgressStyle::default_bar()
                        .template(
                            "{msg:30} {bar:40} {percent:>3}% {bytes}/{total_bytes} ({bytes_per_sec}, eta {eta})",
                        )
                        .unwrap()
                        .progress_chars("=>-"),
                );
            }
        }
        self.pb.set_position(snapshot.bytes_transferred);
    }

    fn finish(&self, snapshot: &ProgressSnapshot) {
        self.pb.set_position(snapshot.bytes_transferred);
        self.pb.finish_and_clear();
    }
}
