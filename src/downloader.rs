use crate::error::{GamedlError, Result};
use crate::media_type;
use crate::models::ProgressSnapshot;
use crate::progress::ProgressReporter;
use anyhow::Context;
use log::debug;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tokio::time;

const PROGRESS_INTERVAL: Duration = Duration::from_secs(1);

pub struct Downloader {
    client: Client,
    output_dir: PathBuf,
}

impl Downloader {
    /// No request timeout is set: a large transfer may legitimately run
    /// for a long time.
    pub fn new(output_dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            output_dir: output_dir.into(),
        })
    }

    /// Streams `url` into `{display_name}{extension}` inside the output
    /// directory, where the extension comes from the response's declared
    /// media type. An existing file with the same name is truncated.
    ///
    /// Non-success statuses abort the download rather than saving an error
    /// page as the game file.
    pub async fn download(
        &self,
        url: &str,
        display_name: &str,
        reporter: Arc<dyn ProgressReporter>,
    ) -> Result<PathBuf> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|source| GamedlError::Network {
                url: url.to_string(),
                source,
            })?;

        let media_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let extension = media_type::extension_for(media_type.as_deref());
        let output_path = self.output_dir.join(format!("{display_name}{extension}"));

        let total_bytes = response.content_length();
        debug!(
            "GET {url}: media type {media_type:?}, content length {total_bytes:?}, writing {}",
            output_path.display()
        );

        let mut file = File::create(&output_path).map_err(|source| GamedlError::FileWrite {
            path: output_path.clone(),
            source,
        })?;

        // The download loop is the only writer of the shared snapshot; the
        // reporting task clones it once per tick. The oneshot stops the
        // ticker on success, and dropping the sender stops it on every
        // error path.
        let started = Instant::now();
        let progress = Arc::new(Mutex::new(ProgressSnapshot::new(total_bytes)));
        let (done_tx, done_rx) = oneshot::channel::<()>();
        let ticker = tokio::spawn(report_loop(
            Arc::clone(&progress),
            Arc::clone(&reporter),
            done_rx,
        ));

        let mut response = response;
        let mut bytes_transferred = 0u64;

        while let Some(chunk) =
            response
                .chunk()
                .await
                .map_err(|source| GamedlError::Network {
                    url: url.to_string(),
                    source,
                })?
        {
            file.write_all(&chunk)
                .map_err(|source| GamedlError::FileWrite {
                    path: output_path.clone(),
                    source,
                })?;
            bytes_transferred += chunk.len() as u64;

            let mut snapshot = progress.lock().unwrap();
            snapshot.bytes_transferred = bytes_transferred;
            snapshot.elapsed = started.elapsed();
        }

        let _ = done_tx.send(());
        ticker.await.ok();

        let final_snapshot = ProgressSnapshot {
            bytes_transferred,
            total_bytes,
            elapsed: started.elapsed(),
        };
        reporter.finish(&final_snapshot);

        debug!("finished {url}: {bytes_transferred} bytes");
        Ok(output_path)
    }
}

async fn report_loop(
    progress: Arc<Mutex<ProgressSnapshot>>,
    reporter: Arc<dyn ProgressReporter>,
    mut done: oneshot::Receiver<()>,
) {
    let mut interval = time::interval(PROGRESS_INTERVAL);
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let snapshot = progress.lock().unwrap().clone();
                reporter.report(&snapshot);
            }
            _ = &mut done => break,
        }
    }
}
