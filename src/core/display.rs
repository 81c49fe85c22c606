use crate::core::{LiturgyRecord, ReadingSlot, SurfaceId, Surfaces};
use std::collections::BTreeMap;

/// What the liturgy panel shows. Also used as a partial update: a `None`
/// field or a missing reading slot means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub celebration: Option<String>,
    pub color: Option<String>,
    pub readings: BTreeMap<ReadingSlot, String>,
}

impl DisplayState {
    /// Update carried by a successful record.
    pub fn from_record(record: &LiturgyRecord) -> Self {
        let readings = record
            .readings
            .as_ref()
            .map(|readings| {
                ReadingSlot::ALL
                    .iter()
                    .filter_map(|&slot| readings.text(slot).map(|text| (slot, text)))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            celebration: record.celebration.clone(),
            color: record.color.clone(),
            readings,
        }
    }

    /// Plain-text rendering used for export.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::new();
        if let Some(celebration) = &self.celebration {
            lines.push(celebration.to_uppercase());
        }
        if let Some(color) = &self.color {
            lines.push(format!("Cor Litúrgica: {}", color));
        }
        for slot in ReadingSlot::ALL {
            if let Some(text) = self.readings.get(&slot) {
                lines.push(String::new());
                lines.push(slot.heading().to_string());
                lines.push(text.clone());
            }
        }
        lines.join("\n")
    }
}

pub fn color_badge_class(color: &str) -> String {
    format!("color-badge {}", color)
}

/// Writes `state` to the page. Only fields present in `state` are touched.
pub fn render<S: Surfaces + ?Sized>(state: &DisplayState, surfaces: &mut S) {
    if let Some(celebration) = &state.celebration {
        surfaces.set_text(SurfaceId::CelebrationName, celebration);
    }

    if let Some(color) = &state.color {
        surfaces.set_class(SurfaceId::LiturgicalColor, &color_badge_class(color));
        surfaces.set_text(SurfaceId::LiturgicalColor, color);
    }

    for slot in ReadingSlot::ALL {
        if let Some(text) = state.readings.get(&slot) {
            surfaces.set_text(SurfaceId::Reading(slot), text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::surfaces::MemorySurfaces;
    use crate::domain::model::{ReadingRef, Readings};

    fn easter_record() -> LiturgyRecord {
        LiturgyRecord {
            success: true,
            error: None,
            date: None,
            celebration: Some("Domingo de Páscoa".to_string()),
            color: Some("branco".to_string()),
            season: None,
            readings: Some(Readings {
                first: Some(ReadingRef::Text("At 10,34a.37-43".to_string())),
                psalm: Some(ReadingRef::Text("Sl 117".to_string())),
                second: None,
                gospel: Some(ReadingRef::Text("Jo 20,1-9".to_string())),
            }),
        }
    }

    #[test]
    fn test_from_record_skips_missing_slots() {
        let state = DisplayState::from_record(&easter_record());
        assert_eq!(state.readings.len(), 3);
        assert!(!state.readings.contains_key(&ReadingSlot::Second));
    }

    #[test]
    fn test_render_partial_update_keeps_second_reading() {
        let mut surfaces = MemorySurfaces::with_all();
        surfaces.set_text(SurfaceId::Reading(ReadingSlot::Second), "Cl 3,1-4");

        render(&DisplayState::from_record(&easter_record()), &mut surfaces);

        assert_eq!(surfaces.text(SurfaceId::CelebrationName), Some("Domingo de Páscoa"));
        assert_eq!(surfaces.text(SurfaceId::LiturgicalColor), Some("branco"));
        assert_eq!(
            surfaces.class(SurfaceId::LiturgicalColor),
            Some("color-badge branco")
        );
        assert_eq!(
            surfaces.text(SurfaceId::Reading(ReadingSlot::First)),
            Some("At 10,34a.37-43")
        );
        assert_eq!(surfaces.text(SurfaceId::Reading(ReadingSlot::Psalm)), Some("Sl 117"));
        assert_eq!(
            surfaces.text(SurfaceId::Reading(ReadingSlot::Second)),
            Some("Cl 3,1-4")
        );
        assert_eq!(
            surfaces.text(SurfaceId::Reading(ReadingSlot::Gospel)),
            Some("Jo 20,1-9")
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let update = DisplayState::from_record(&easter_record());

        let mut once = MemorySurfaces::with_all();
        render(&update, &mut once);

        let mut twice = MemorySurfaces::with_all();
        render(&update, &mut twice);
        render(&update, &mut twice);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_to_text_lists_readings_in_order() {
        let text = DisplayState::from_record(&easter_record()).to_text();
        let first = text.find("PRIMEIRA LEITURA").unwrap();
        let psalm = text.find("SALMO RESPONSORIAL").unwrap();
        let gospel = text.find("EVANGELHO").unwrap();

        assert!(text.starts_with("DOMINGO DE PÁSCOA"));
        assert!(text.contains("Cor Litúrgica: branco"));
        assert!(first < psalm && psalm < gospel);
        assert!(!text.contains("SEGUNDA LEITURA"));
    }
}
