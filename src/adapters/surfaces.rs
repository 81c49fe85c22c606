use crate::core::{ReadingSlot, StyleProperty, SurfaceId, Surfaces};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SurfaceState {
    text: Option<String>,
    class: Option<String>,
    styles: BTreeMap<StyleProperty, String>,
}

/// In-memory page model. Only surfaces registered at construction exist;
/// writes to anything else are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurfaces {
    surfaces: BTreeMap<SurfaceId, SurfaceState>,
}

impl MemorySurfaces {
    pub fn new(ids: impl IntoIterator<Item = SurfaceId>) -> Self {
        Self {
            surfaces: ids
                .into_iter()
                .map(|id| (id, SurfaceState::default()))
                .collect(),
        }
    }

    /// Every surface the liturgy page template defines.
    pub fn with_all() -> Self {
        let mut ids = vec![
            SurfaceId::Preview,
            SurfaceId::ColorIndicator,
            SurfaceId::CelebrationName,
            SurfaceId::LiturgicalColor,
        ];
        ids.extend(ReadingSlot::ALL.iter().map(|&slot| SurfaceId::Reading(slot)));
        Self::new(ids)
    }

    pub fn text(&self, id: SurfaceId) -> Option<&str> {
        self.surfaces.get(&id)?.text.as_deref()
    }

    pub fn class(&self, id: SurfaceId) -> Option<&str> {
        self.surfaces.get(&id)?.class.as_deref()
    }

    pub fn style(&self, id: SurfaceId, property: StyleProperty) -> Option<&str> {
        self.surfaces.get(&id)?.styles.get(&property).map(String::as_str)
    }
}

impl Surfaces for MemorySurfaces {
    fn set_text(&mut self, id: SurfaceId, text: &str) {
        if let Some(surface) = self.surfaces.get_mut(&id) {
            surface.text = Some(text.to_string());
        }
    }

    fn set_class(&mut self, id: SurfaceId, class: &str) {
        if let Some(surface) = self.surfaces.get_mut(&id) {
            surface.class = Some(class.to_string());
        }
    }

    fn set_style(&mut self, id: SurfaceId, property: StyleProperty, value: &str) {
        if let Some(surface) = self.surfaces.get_mut(&id) {
            surface.styles.insert(property, value.to_string());
        }
    }
}

impl fmt::Display for MemorySurfaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, surface) in &self.surfaces {
            if surface.text.is_none() && surface.class.is_none() && surface.styles.is_empty() {
                continue;
            }
            write!(f, "#{}", id.element_id())?;
            if let Some(class) = &surface.class {
                write!(f, " .{}", class.replace(' ', "."))?;
            }
            for (property, value) in &surface.styles {
                write!(f, " {}: {};", property.css_name(), value)?;
            }
            if let Some(text) = &surface.text {
                write!(f, " {}", text)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
