use crate::core::display::{render, DisplayState};
use crate::core::{LiturgyApi, LiturgyRecord, Notification, Notifier, Surfaces};
use chrono::NaiveDate;
use std::sync::atomic::{AtomicU64, Ordering};

pub const GENERIC_LOAD_ERROR: &str = "Erro ao carregar liturgia.";

/// Result of one `load_liturgy` call.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded {
        record: LiturgyRecord,
        update: DisplayState,
    },
    /// The back end answered with `success: false`.
    ApplicationError(Notification),
    /// Network failure, unexpected status or unreadable body.
    TransportError(Notification),
    /// A newer request started before this one resolved.
    Superseded,
}

impl LoadOutcome {
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            LoadOutcome::ApplicationError(n) | LoadOutcome::TransportError(n) => Some(n),
            _ => None,
        }
    }
}

pub struct LiturgyLoader<A: LiturgyApi> {
    api: A,
    generation: AtomicU64,
}

impl<A: LiturgyApi> LiturgyLoader<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            generation: AtomicU64::new(0),
        }
    }

    pub async fn load_liturgy(&self, date: NaiveDate) -> LoadOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("Loading liturgy for {} (request #{})", date, generation);

        let result = self.api.fetch_liturgy(date).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("Discarding stale response for {} (request #{})", date, generation);
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(record) if record.success => {
                tracing::info!(
                    "Loaded liturgy for {}: {}",
                    date,
                    record.celebration.as_deref().unwrap_or("-")
                );
                let update = DisplayState::from_record(&record);
                LoadOutcome::Loaded { record, update }
            }
            Ok(record) => {
                let reason = record.error.as_deref().unwrap_or("erro desconhecido");
                tracing::warn!("Liturgy service rejected {}: {}", date, reason);
                LoadOutcome::ApplicationError(Notification::error(format!(
                    "Erro ao carregar liturgia: {}",
                    reason
                )))
            }
            Err(e) => {
                tracing::error!("Error loading liturgy for {}: {}", date, e);
                LoadOutcome::TransportError(Notification::error(GENERIC_LOAD_ERROR))
            }
        }
    }

    /// Loads `date` and applies the outcome: renders the update, or raises
    /// the notification. Stale responses leave everything untouched.
    pub async fn load_and_render<S, N>(
        &self,
        date: NaiveDate,
        surfaces: &mut S,
        notifier: &N,
    ) -> LoadOutcome
    where
        S: Surfaces + ?Sized,
        N: Notifier + ?Sized,
    {
        let outcome = self.load_liturgy(date).await;
        match &outcome {
            LoadOutcome::Loaded { update, .. } => render(update, surfaces),
            LoadOutcome::ApplicationError(n) | LoadOutcome::TransportError(n) => {
                notifier.notify(n.clone())
            }
            LoadOutcome::Superseded => {}
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notifier::NotificationCenter;
    use crate::adapters::surfaces::MemorySurfaces;
    use crate::core::{ReadingSlot, Severity, SurfaceId};
    use crate::utils::error::{LiturgiaError, Result};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;

    /// Canned responses per date, with an optional delay.
    struct FakeApi {
        responses: HashMap<NaiveDate, (Duration, serde_json::Value)>,
    }

    #[async_trait]
    impl LiturgyApi for FakeApi {
        async fn fetch_liturgy(&self, date: NaiveDate) -> Result<LiturgyRecord> {
            let (delay, body) = self
                .responses
                .get(&date)
                .cloned()
                .ok_or(LiturgiaError::HttpStatusError { status: 404 })?;
            tokio::time::sleep(delay).await;
            Ok(serde_json::from_value(body)?)
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn epiphany() -> serde_json::Value {
        serde_json::json!({
            "success": true,
            "date": "2026-01-06",
            "celebration": "Solenidade da Epifania do Senhor",
            "color": "branco",
            "season": "Tempo do Natal",
            "readings": {"first": "Is 60,1-6", "psalm": 71, "second": "Ef 3,2-3a.5-6", "gospel": "Mt 2,1-12"}
        })
    }

    fn loader(entries: Vec<(&str, u64, serde_json::Value)>) -> LiturgyLoader<FakeApi> {
        let responses = entries
            .into_iter()
            .map(|(d, ms, body)| (date(d), (Duration::from_millis(ms), body)))
            .collect();
        LiturgyLoader::new(FakeApi { responses })
    }

    #[tokio::test]
    async fn test_success_renders_update() {
        let loader = loader(vec![("2026-01-06", 0, epiphany())]);
        let mut surfaces = MemorySurfaces::with_all();
        let center = NotificationCenter::new();

        let outcome = loader
            .load_and_render(date("2026-01-06"), &mut surfaces, &center)
            .await;

        assert!(matches!(outcome, LoadOutcome::Loaded { .. }));
        assert_eq!(
            surfaces.text(SurfaceId::CelebrationName),
            Some("Solenidade da Epifania do Senhor")
        );
        assert_eq!(surfaces.text(SurfaceId::Reading(ReadingSlot::Psalm)), Some("71"));
        assert!(center.active().is_empty());
    }

    #[tokio::test]
    async fn test_application_error_notifies_without_mutation() {
        let loader = loader(vec![(
            "2026-02-28",
            0,
            serde_json::json!({"success": false, "error": "Data inválida"}),
        )]);
        let mut surfaces = MemorySurfaces::with_all();
        let before = surfaces.clone();
        let center = NotificationCenter::new();

        let outcome = loader
            .load_and_render(date("2026-02-28"), &mut surfaces, &center)
            .await;

        assert!(matches!(outcome, LoadOutcome::ApplicationError(_)));
        let notification = outcome.notification().unwrap();
        assert_eq!(notification.severity, Severity::Error);
        assert!(notification.message.contains("Data inválida"));
        assert_eq!(surfaces, before);
        assert_eq!(center.active().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_error_uses_generic_message() {
        let loader = loader(vec![]);
        let mut surfaces = MemorySurfaces::with_all();
        let before = surfaces.clone();
        let center = NotificationCenter::new();

        let outcome = loader
            .load_and_render(date("2026-03-01"), &mut surfaces, &center)
            .await;

        match outcome {
            LoadOutcome::TransportError(n) => {
                assert_eq!(n.message, GENERIC_LOAD_ERROR);
                assert!(!n.message.contains("404"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(surfaces, before);
    }

    #[tokio::test]
    async fn test_loading_twice_equals_loading_once() {
        let loader = loader(vec![("2026-01-06", 0, epiphany())]);
        let center = NotificationCenter::new();

        let mut once = MemorySurfaces::with_all();
        loader.load_and_render(date("2026-01-06"), &mut once, &center).await;

        let mut twice = MemorySurfaces::with_all();
        loader.load_and_render(date("2026-01-06"), &mut twice, &center).await;
        loader.load_and_render(date("2026-01-06"), &mut twice, &center).await;

        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let loader = Arc::new(loader(vec![
            ("2026-01-06", 200, epiphany()),
            (
                "2026-01-07",
                0,
                serde_json::json!({"success": true, "celebration": "Feria - 07/01/2026", "color": "verde"}),
            ),
        ]));

        let slow = {
            let loader = Arc::clone(&loader);
            tokio::spawn(async move { loader.load_liturgy(date("2026-01-06")).await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        let fast = loader.load_liturgy(date("2026-01-07")).await;

        assert_eq!(slow.await.unwrap(), LoadOutcome::Superseded);
        match fast {
            LoadOutcome::Loaded { update, .. } => {
                assert_eq!(update.celebration.as_deref(), Some("Feria - 07/01/2026"))
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
