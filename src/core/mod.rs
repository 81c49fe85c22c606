pub mod display;
pub mod export;
pub mod loader;
pub mod navigation;
pub mod preview;

pub use crate::domain::model::{
    CustomizationOptions, LiturgyRecord, Notification, PreviewStyle, ReadingSlot, Readings,
    Severity,
};
pub use crate::domain::ports::{
    ConfigProvider, LiturgyApi, Notifier, Storage, StyleProperty, SurfaceId, Surfaces,
};
pub use crate::utils::error::Result;
