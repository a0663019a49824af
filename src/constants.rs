// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Search radius presets offered on the safety map
///
/// The radius drives the circle drawn on the map. It does not filter places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum SearchRadius {
    /// 2 km (default)
    #[default]
    Two,
    /// 5 km
    Five,
    /// 10 km
    Ten,
}

impl SearchRadius {
    /// All presets for UI iteration, smallest first
    pub const ALL: [SearchRadius; 3] = [SearchRadius::Two, SearchRadius::Five, SearchRadius::Ten];

    pub fn km(&self) -> u32 {
        match self {
            SearchRadius::Two => 2,
            SearchRadius::Five => 5,
            SearchRadius::Ten => 10,
        }
    }

    pub fn meters(&self) -> f64 {
        f64::from(self.km()) * 1000.0
    }

    /// Label shown in the radius picker
    pub fn display_name(&self) -> String {
        format!("{} km", self.km())
    }

    /// Position in [`SearchRadius::ALL`], for dropdown selection
    pub fn index(&self) -> usize {
        match self {
            SearchRadius::Two => 0,
            SearchRadius::Five => 1,
            SearchRadius::Ten => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The next larger preset, wrapping around to the smallest
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SearchRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.km())
    }
}

impl FromStr for SearchRadius {
    type Err = String;

    /// Accepts "5", "5km" and "5 km"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_end_matches("km").trim();
        let km: u32 = digits
            .parse()
            .map_err(|_| format!("Invalid radius '{}'", s))?;

        SearchRadius::ALL
            .into_iter()
            .find(|radius| radius.km() == km)
            .ok_or_else(|| format!("Unsupported radius {} km (expected 2, 5 or 10)", km))
    }
}

/// Map document defaults
pub mod map {
    use crate::geo::Coordinate;

    /// Lisbon city centre, used until a device location is known
    pub const DEFAULT_CENTER: Coordinate = Coordinate::new(38.7223, -9.1393);

    /// Initial zoom level of the map viewport
    pub const DEFAULT_ZOOM: u8 = 13;

    /// OpenStreetMap raster tiles
    pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

    pub const TILE_MAX_ZOOM: u8 = 19;

    pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

    /// Stroke colour of the radius circle
    pub const RADIUS_COLOR: &str = "#E32F45";

    /// Fill colour of the radius circle
    pub const RADIUS_FILL_COLOR: &str = "#E32F45";

    pub const RADIUS_FILL_OPACITY: f32 = 0.1;

    pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
    pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
    pub const MARKERCLUSTER_CSS: &str =
        "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css";
    pub const MARKERCLUSTER_DEFAULT_CSS: &str =
        "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css";
    pub const MARKERCLUSTER_JS: &str =
        "https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js";

    /// File name of the generated map document
    pub const DOCUMENT_FILE_NAME: &str = "safety-map.html";

    /// Base URL for turn-by-turn directions
    pub const DIRECTIONS_URL: &str = "https://www.openstreetmap.org/directions";
}

/// Location acquisition timing
pub mod location {
    use super::Duration;

    /// Upper bound for permission plus first fix
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    pub const fn default_timeout() -> Duration {
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    }

    /// GeoClue accuracy level requested (6 = street level)
    pub const GEOCLUE_ACCURACY_STREET: u32 = 6;
}

/// UI layout constants
pub mod ui {
    /// Spacing between home menu tiles
    pub const MENU_SPACING: u16 = 12;

    /// Width of a home menu tile
    pub const MENU_TILE_WIDTH: f32 = 180.0;

    /// Height of a home menu tile
    pub const MENU_TILE_HEIGHT: f32 = 72.0;

    pub const MENU_ICON_SIZE: u16 = 24;

    pub const FILTER_ICON_SIZE: u16 = 16;

    pub const LIST_ICON_SIZE: u16 = 24;

    pub const TITLE_TEXT_SIZE: u16 = 16;

    pub const DETAIL_TEXT_SIZE: u16 = 13;

    /// Default emergency number dialled from the home menu
    pub const DEFAULT_EMERGENCY_NUMBER: &str = "112";

    /// Terminal event poll interval
    pub const TERMINAL_POLL_MS: u64 = 100;
}

/// Application information utilities
pub mod app_info {
    use std::path::Path;

    /// Unique identifier in RDNN (reverse domain name notation) format
    pub const APP_ID: &str = "io.github.travelguardian.Guardian";

    pub const REPOSITORY: &str = "https://github.com/travel-guardian/guardian";

    /// Get the application version from build-time environment
    pub fn version() -> &'static str {
        env!("GIT_VERSION")
    }

    /// Check if the application is running inside a Flatpak sandbox
    pub fn is_flatpak() -> bool {
        Path::new("/.flatpak-info").exists()
    }
}

/// Format a distance in kilometers for display ("0.9 km")
pub fn format_distance(km: f64) -> String {
    format!("{:.1} km", km)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_index_round_trip() {
        for radius in SearchRadius::ALL {
            assert_eq!(SearchRadius::from_index(radius.index()), Some(radius));
        }
        assert_eq!(SearchRadius::from_index(3), None);
    }

    #[test]
    fn test_radius_next_wraps() {
        assert_eq!(SearchRadius::Two.next(), SearchRadius::Five);
        assert_eq!(SearchRadius::Ten.next(), SearchRadius::Two);
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.94), "0.9 km");
        assert_eq!(format_distance(12.0), "12.0 km");
    }
}
