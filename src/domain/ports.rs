use crate::domain::model::{LiturgyRecord, Notification, ReadingSlot};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
    fn notification_ttl(&self) -> Duration;
    fn output_path(&self) -> &str;
}

/// Source of liturgy records, keyed by calendar date.
#[async_trait]
pub trait LiturgyApi: Send + Sync {
    async fn fetch_liturgy(&self, date: NaiveDate) -> Result<LiturgyRecord>;
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Named regions of the page the client reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SurfaceId {
    Preview,
    ColorIndicator,
    CelebrationName,
    LiturgicalColor,
    Reading(ReadingSlot),
}

impl SurfaceId {
    /// Element id used by the page template.
    pub fn element_id(self) -> &'static str {
        match self {
            SurfaceId::Preview => "pdf-preview",
            SurfaceId::ColorIndicator => "color-indicator",
            SurfaceId::CelebrationName => "celebration-name",
            SurfaceId::LiturgicalColor => "liturgical-color",
            SurfaceId::Reading(ReadingSlot::First) => "reading-first",
            SurfaceId::Reading(ReadingSlot::Psalm) => "reading-psalm",
            SurfaceId::Reading(ReadingSlot::Second) => "reading-second",
            SurfaceId::Reading(ReadingSlot::Gospel) => "reading-gospel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    FontSize,
    FontFamily,
    BackgroundColor,
}

impl StyleProperty {
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::FontSize => "font-size",
            StyleProperty::FontFamily => "font-family",
            StyleProperty::BackgroundColor => "background-color",
        }
    }
}

/// Display surfaces owned by the page. Implementations must treat writes to a
/// surface they do not have as a no-op.
pub trait Surfaces {
    fn set_text(&mut self, id: SurfaceId, text: &str);
    fn set_class(&mut self, id: SurfaceId, class: &str);
    fn set_style(&mut self, id: SurfaceId, property: StyleProperty, value: &str);
}
