use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One game from the catalog file. Field names follow the on-disk format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "GameName")]
    pub name: String,
    #[serde(rename = "DownloadLink")]
    pub download_link: String,
}

/// Point-in-time view of a running transfer. `total_bytes` is `None` when
/// the server declared no content length.
#[derive(Debug, Clone, Default)]
pub struct ProgressSnapshot {
    pub bytes_transferred: u64,
    pub total_bytes: Option<u64>,
    pub elapsed: Duration,
}

impl ProgressSnapshot {
    pub fn new(total_bytes: Option<u64>) -> Self {
        Self {
            bytes_transferred: 0,
            total_bytes,
            elapsed: Duration::ZERO,
        }
    }

    /// Whole-number percentage, only when the total size is known.
    pub fn percentage(&self) -> Option<u64> {
        match self.total_bytes {
            Some(total) if total > 0 => Some(self.bytes_transferred * 100 / total),
            _ => None,
        }
    }

    pub fn bytes_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.bytes_transferred as f64 / secs
        } else {
            0.0
        }
    }

    /// Estimated seconds remaining, only when the total size and a nonzero
    /// speed are known.
    pub fn eta_seconds(&self) -> Option<f64> {
        let total = self.total_bytes?;
        let speed = self.bytes_per_sec();
        if speed > 0.0 {
            Some(total.saturating_sub(self.bytes_transferred) as f64 / speed)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_requires_known_total() {
        let snapshot = ProgressSnapshot {
            bytes_transferred: 512,
            total_bytes: None,
            elapsed: Duration::from_secs(1),
        };
        assert_eq!(snapshot.percentage(), None);
        assert_eq!(snapshot.eta_seconds(), None);
    }

    #[test]
    fn percentage_of_known_total() {
        let snapshot = ProgressSnapshot {
            bytes_transferred: 256,
            total_bytes: Some(1024),
            elapsed: Duration::from_secs(2),
        };
        assert_eq!(snapshot.percentage(), Some(25));
        assert_eq!(snapshot.bytes_per_sec(), 128.0);
        assert_eq!(snapshot.eta_seconds(), Some(6.0));
    }

    #[test]
    fn zero_elapsed_means_no_speed_and_no_eta() {
        let snapshot = ProgressSnapshot::new(Some(1024));
        assert_eq!(snapshot.bytes_per_sec(), 0.0);
        assert_eq!(snapshot.eta_seconds(), None);
    }

    #[test]
    fn catalog_entry_uses_on_disk_field_names() {
        let entry: CatalogEntry = serde_json::from_str(
            r#"{"GameName":"Example","DownloadLink":"https://example.com/file.zip"}"#,
        )
        .unwrap();
        assert_eq!(entry.name, "Example");
        assert_eq!(entry.download_link, "https://example.com/file.zip");
    }
}
