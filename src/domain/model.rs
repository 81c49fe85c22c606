use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How long a notification stays on screen before it is dismissed.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

/// PDF customization choices, read fresh from the form on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationOptions {
    pub font_size_px: f64,
    pub font_family_id: String,
    pub liturgical_color_id: String,
}

impl Default for CustomizationOptions {
    fn default() -> Self {
        Self {
            font_size_px: 12.0,
            font_family_id: "Times-Roman".to_string(),
            liturgical_color_id: "verde".to_string(),
        }
    }
}

/// Presentation values derived from [`CustomizationOptions`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewStyle {
    pub font_size_px: f64,
    pub font_family_css: &'static str,
    pub color_hex: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingSlot {
    First,
    Psalm,
    Second,
    Gospel,
}

impl ReadingSlot {
    /// Display order of the slots.
    pub const ALL: [ReadingSlot; 4] = [
        ReadingSlot::First,
        ReadingSlot::Psalm,
        ReadingSlot::Second,
        ReadingSlot::Gospel,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ReadingSlot::First => "first",
            ReadingSlot::Psalm => "psalm",
            ReadingSlot::Second => "second",
            ReadingSlot::Gospel => "gospel",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            ReadingSlot::First => "PRIMEIRA LEITURA",
            ReadingSlot::Psalm => "SALMO RESPONSORIAL",
            ReadingSlot::Second => "SEGUNDA LEITURA",
            ReadingSlot::Gospel => "EVANGELHO",
        }
    }
}

/// A reading reference as the back end sends it. Psalms arrive as bare numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadingRef {
    Text(String),
    Number(serde_json::Number),
}

impl ReadingRef {
    /// `None` when the reference carries no displayable text.
    pub fn display_text(&self) -> Option<String> {
        match self {
            ReadingRef::Text(s) if s.is_empty() => None,
            // zero counts as not supplied, same as an empty string
            ReadingRef::Number(n) if n.as_f64() == Some(0.0) => None,
            ReadingRef::Text(s) => Some(s.clone()),
            ReadingRef::Number(n) => Some(n.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Readings {
    #[serde(default)]
    pub first: Option<ReadingRef>,
    #[serde(default)]
    pub psalm: Option<ReadingRef>,
    #[serde(default)]
    pub second: Option<ReadingRef>,
    #[serde(default)]
    pub gospel: Option<ReadingRef>,
}

impl Readings {
    pub fn get(&self, slot: ReadingSlot) -> Option<&ReadingRef> {
        match slot {
            ReadingSlot::First => self.first.as_ref(),
            ReadingSlot::Psalm => self.psalm.as_ref(),
            ReadingSlot::Second => self.second.as_ref(),
            ReadingSlot::Gospel => self.gospel.as_ref(),
        }
    }

    /// Supplied, non-empty text for a slot.
    pub fn text(&self, slot: ReadingSlot) -> Option<String> {
        self.get(slot).and_then(ReadingRef::display_text)
    }
}

/// Body of `GET /api/liturgy/{date}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiturgyRecord {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub celebration: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub readings: Option<Readings>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub ttl: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            ttl: NOTIFICATION_TTL,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}
