use crate::core::navigation::format_calendar_date;
use crate::core::{ConfigProvider, LiturgyApi, LiturgyRecord};
use crate::utils::error::{LiturgiaError, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Liturgy API served over HTTP at `{base_url}/api/liturgy/{date}`.
#[derive(Debug, Clone)]
pub struct HttpLiturgyApi {
    base_url: Url,
    client: Client,
}

impl HttpLiturgyApi {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // Url::join drops the last segment unless the path ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            client: builder.build()?,
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::with_timeout(config.base_url(), config.request_timeout())
    }

    pub fn endpoint(&self, date: NaiveDate) -> Result<Url> {
        let path = format!("api/liturgy/{}", format_calendar_date(date));
        Ok(self.base_url.join(&path)?)
    }
}

#[async_trait]
impl LiturgyApi for HttpLiturgyApi {
    async fn fetch_liturgy(&self, date: NaiveDate) -> Result<LiturgyRecord> {
        let url = self.endpoint(date)?;
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.bytes().await?;

        // The server reports bad dates as 400 with a regular error body
        match serde_json::from_slice::<LiturgyRecord>(&body) {
            Ok(record) if status.is_success() || !record.success => Ok(record),
            Ok(_) => Err(LiturgiaError::HttpStatusError {
                status: status.as_u16(),
            }),
            Err(_) if !status.is_success() => Err(LiturgiaError::HttpStatusError {
                status: status.as_u16(),
            }),
            Err(e) => Err(LiturgiaError::SerializationError(e)),
        }
    }
}
