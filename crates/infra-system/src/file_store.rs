// File-backed ResultStore
// Writes `<output_dir>/<YYYYMMDDHHMMSSmmm>-<tool>.txt` with the verbatim output
use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use scanwrap_core::port::{ResultStore, TimeProvider};
use scanwrap_core::Result;

/// Millisecond-precision local timestamp (17 digits)
const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S%3f";

pub struct FileResultStore {
    output_dir: PathBuf,
    tool_name: String,
    time_provider: Arc<dyn TimeProvider>,
}

impl FileResultStore {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        tool_name: impl Into<String>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            tool_name: tool_name.into(),
            time_provider,
        }
    }

    /// File name for a result captured at `at`
    pub fn file_name(&self, at: DateTime<Local>) -> String {
        format!("{}-{}.txt", at.format(TIMESTAMP_FORMAT), self.tool_name)
    }
}

#[async_trait]
impl ResultStore for FileResultStore {
    async fn persist(&self, output: &str) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let path = self.output_dir.join(self.file_name(self.time_provider.now()));
        tokio::fs::write(&path, output).await?;

        info!(path = %path.display(), bytes = output.len(), "Result saved");

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use scanwrap_core::port::time_provider::FixedTimeProvider;

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 5, 7, 8, 9)
            .single()
            .unwrap()
            + chrono::Duration::milliseconds(42)
    }

    fn store_in(dir: impl Into<PathBuf>) -> FileResultStore {
        FileResultStore::new(dir, "naabu", Arc::new(FixedTimeProvider(fixed_time())))
    }

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("scanwrap-store-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_file_name_format() {
        let store = store_in("outputs");

        assert_eq!(store.file_name(fixed_time()), "20240305070809042-naabu.txt");
    }

    #[tokio::test]
    async fn test_persist_creates_dir_and_writes_verbatim() {
        let dir = temp_dir().join("nested");
        let store = store_in(&dir);

        let path = store.persist("example.com:80\nexample.com:443\n").await.unwrap();

        assert_eq!(path, dir.join("20240305070809042-naabu.txt"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "example.com:80\nexample.com:443\n");

        let _ = std::fs::remove_dir_all(dir.parent().unwrap());
    }

    #[tokio::test]
    async fn test_persist_empty_output() {
        let dir = temp_dir();
        let store = store_in(&dir);

        let path = store.persist("").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_persist_fails_when_dir_is_a_file() {
        let blocker = temp_dir();
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = store_in(&blocker);

        let result = store.persist("data").await;

        assert!(matches!(result, Err(scanwrap_core::AppError::Io(_))));
        let _ = std::fs::remove_file(&blocker);
    }
}
