use crate::core::navigation::format_calendar_date;
use crate::core::{Notification, Notifier, Storage};
use crate::utils::error::Result;
use chrono::NaiveDate;

pub fn export_filename(date: NaiveDate) -> String {
    format!("liturgia_{}.txt", format_calendar_date(date))
}

/// Saves `content` as `liturgia_{today}.txt`. Returns the file name, or `None`
/// when there was nothing to export.
pub async fn export_as_text<S, N>(
    storage: &S,
    content: &str,
    today: NaiveDate,
    notifier: &N,
) -> Result<Option<String>>
where
    S: Storage,
    N: Notifier + ?Sized,
{
    if content.trim().is_empty() {
        tracing::warn!("Nothing to export on {}", today);
        notifier.notify(Notification::warning("Nenhum conteúdo para exportar."));
        return Ok(None);
    }

    let filename = export_filename(today);
    tracing::debug!("Writing {} bytes to {}", content.len(), filename);
    storage.write_file(&filename, content.as_bytes()).await?;

    notifier.notify(Notification::success("Liturgia exportada com sucesso!"));
    Ok(Some(filename))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notifier::NotificationCenter;
    use crate::core::Severity;
    use crate::utils::error::LiturgiaError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                LiturgiaError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 6).unwrap()
    }

    #[tokio::test]
    async fn test_export_writes_file_and_notifies() {
        let storage = MockStorage::default();
        let center = NotificationCenter::new();

        let name = export_as_text(&storage, "EVANGELHO\nMt 2,1-12", day(), &center)
            .await
            .unwrap();

        assert_eq!(name.as_deref(), Some("liturgia_2026-01-06.txt"));
        let saved = storage.read_file("liturgia_2026-01-06.txt").await.unwrap();
        assert_eq!(saved, b"EVANGELHO\nMt 2,1-12");

        let active = center.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].severity, Severity::Success);
    }

    #[tokio::test]
    async fn test_export_empty_content_warns() {
        let storage = MockStorage::default();
        let center = NotificationCenter::new();

        let name = export_as_text(&storage, "  \n", day(), &center).await.unwrap();

        assert!(name.is_none());
        assert!(storage.files.lock().await.is_empty());
        let active = center.active();
        assert_eq!(active[0].severity, Severity::Warning);
        assert_eq!(active[0].message, "Nenhum conteúdo para exportar.");
    }
}
