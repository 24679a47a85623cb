use crate::layer::{Layer, LayerId};
use crate::symbology::Theme;

pub const OSM_TILE_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const MAPTILER_DARK_TEMPLATE: &str =
    "https://api.maptiler.com/maps/streets-v2-dark/{z}/{x}/{y}.png?key={key}";

pub const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";
pub const MAPTILER_ATTRIBUTION: &str = "© MapTiler © OpenStreetMap contributors";

/// Raster basemap beneath the parcel polygons.
///
/// Light mode uses the public OpenStreetMap tiles; dark mode needs a MapTiler key.
#[derive(Debug, Clone, PartialEq)]
pub struct BasemapLayer {
    id: LayerId,
    maptiler_key: String,
}

impl BasemapLayer {
    pub fn new(id: u64, maptiler_key: impl Into<String>) -> Self {
        Self {
            id: LayerId(id),
            maptiler_key: maptiler_key.into(),
        }
    }

    /// XYZ tile URL template for `theme`.
    pub fn tile_template(&self, theme: Theme) -> String {
        match theme {
            Theme::Light => OSM_TILE_TEMPLATE.to_string(),
            Theme::Dark => MAPTILER_DARK_TEMPLATE.replace("{key}", &self.maptiler_key),
        }
    }

    pub fn attribution(&self, theme: Theme) -> &'static str {
        match theme {
            Theme::Light => OSM_ATTRIBUTION,
            Theme::Dark => MAPTILER_ATTRIBUTION,
        }
    }
}

impl Layer for BasemapLayer {
    fn id(&self) -> LayerId {
        self.id
    }
}
