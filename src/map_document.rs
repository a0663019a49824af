// SPDX-License-Identifier: GPL-3.0-only

//! Map description handed to the rendering surface
//!
//! The application never draws map tiles itself. It describes the viewport,
//! the markers and the radius circle, and renders that description into a
//! Leaflet page that a browser displays.

use crate::constants::{SearchRadius, map};
use crate::errors::MapError;
use crate::geo::Coordinate;
use crate::places::{Category, Place};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Raster tile source for the map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSource {
    /// URL template with `{s}`, `{z}`, `{x}` and `{y}` placeholders
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl TileSource {
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            ..Self::default()
        }
    }
}

impl Default for TileSource {
    fn default() -> Self {
        Self {
            url_template: map::TILE_URL_TEMPLATE.to_string(),
            attribution: map::TILE_ATTRIBUTION.to_string(),
            max_zoom: map::TILE_MAX_ZOOM,
        }
    }
}

/// One place on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: String,
    pub category: Category,
    pub lat: f64,
    pub lng: f64,
    /// Popup body, already escaped
    pub popup_html: String,
}

impl Marker {
    pub fn from_place(place: &Place) -> Self {
        Self {
            id: place.id.clone(),
            category: place.category,
            lat: place.lat,
            lng: place.lng,
            popup_html: popup_html(place),
        }
    }
}

/// Circle drawn around the map center
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadiusOverlay {
    pub center: Coordinate,
    pub radius_m: f64,
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f32,
}

impl RadiusOverlay {
    pub fn new(center: Coordinate, radius: SearchRadius) -> Self {
        Self {
            center,
            radius_m: radius.meters(),
            color: map::RADIUS_COLOR.to_string(),
            fill_color: map::RADIUS_FILL_COLOR.to_string(),
            fill_opacity: map::RADIUS_FILL_OPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapDocument {
    pub center: Coordinate,
    pub zoom: u8,
    pub tiles: TileSource,
    pub markers: Vec<Marker>,
    pub radius: RadiusOverlay,
}

impl MapDocument {
    pub fn new<'a>(
        center: Coordinate,
        tiles: TileSource,
        places: impl IntoIterator<Item = &'a Place>,
        radius: SearchRadius,
    ) -> Self {
        Self {
            center,
            zoom: map::DEFAULT_ZOOM,
            tiles,
            markers: places.into_iter().map(Marker::from_place).collect(),
            radius: RadiusOverlay::new(center, radius),
        }
    }

    /// Render the description as a standalone Leaflet page
    pub fn to_html(&self) -> Result<String, MapError> {
        let markers = script_safe_json(&self.markers)?;
        let tile_url = script_safe_json(&self.tiles.url_template)?;
        let attribution = script_safe_json(&self.tiles.attribution)?;
        let color = script_safe_json(&self.radius.color)?;
        let fill_color = script_safe_json(&self.radius.fill_color)?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no" />
    <title>Safety Map</title>
    <link rel="stylesheet" href="{leaflet_css}" />
    <link rel="stylesheet" href="{cluster_css}" />
    <link rel="stylesheet" href="{cluster_default_css}" />
    <script src="{leaflet_js}"></script>
    <script src="{cluster_js}"></script>
    <style>
      body {{ margin: 0; }}
      #map {{ height: 100vh; }}
    </style>
  </head>
  <body>
    <div id="map"></div>
    <script>
      const map = L.map('map').setView([{lat}, {lng}], {zoom});
      L.tileLayer({tile_url}, {{
        maxZoom: {max_zoom},
        attribution: {attribution}
      }}).addTo(map);

      const markers = L.markerClusterGroup();
      {markers}.forEach(place => {{
        markers.addLayer(L.marker([place.lat, place.lng]).bindPopup(place.popup_html));
      }});
      map.addLayer(markers);

      L.circle([{circle_lat}, {circle_lng}], {{
        color: {color},
        fillColor: {fill_color},
        fillOpacity: {fill_opacity},
        radius: {radius_m}
      }}).addTo(map);
    </script>
  </body>
</html>
"#,
            leaflet_css = map::LEAFLET_CSS,
            cluster_css = map::MARKERCLUSTER_CSS,
            cluster_default_css = map::MARKERCLUSTER_DEFAULT_CSS,
            leaflet_js = map::LEAFLET_JS,
            cluster_js = map::MARKERCLUSTER_JS,
            lat = self.center.latitude,
            lng = self.center.longitude,
            zoom = self.zoom,
            tile_url = tile_url,
            max_zoom = self.tiles.max_zoom,
            attribution = attribution,
            markers = markers,
            circle_lat = self.radius.center.latitude,
            circle_lng = self.radius.center.longitude,
            color = color,
            fill_color = fill_color,
            fill_opacity = self.radius.fill_opacity,
            radius_m = self.radius.radius_m,
        ))
    }

    /// Render and write the page into `dir`, returning the file path
    pub fn write_html(&self, dir: &Path) -> Result<PathBuf, MapError> {
        let path = dir.join(map::DOCUMENT_FILE_NAME);
        self.write_to(&path)?;
        Ok(path)
    }

    /// Render and write the page to `path`, creating parent directories
    pub fn write_to(&self, path: &Path) -> Result<(), MapError> {
        let html = self.to_html()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, html)?;
        info!(path = %path.display(), markers = self.markers.len(), "Map document written");
        Ok(())
    }
}

/// Directory the map page is written to (`~/.cache/guardian`)
pub fn default_output_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("guardian")
}

/// Popup body: bold name, address and an optional `tel:` link
pub fn popup_html(place: &Place) -> String {
    let mut html = format!(
        "<strong>{}</strong><br>{}<br>",
        escape_html(&place.name),
        escape_html(&place.address)
    );
    if let Some(phone) = &place.phone {
        html.push_str(&format!(
            "<a href=\"{}\">{}</a>",
            escape_html(&tel_url(phone)),
            escape_html(phone)
        ));
    }
    html
}

/// `tel:` link for a phone number as written on a place
pub fn tel_url(phone: &str) -> String {
    format!("tel:{}", dial_string(phone))
}

/// OpenStreetMap route from `from` to `to`
pub fn directions_url(from: Coordinate, to: Coordinate) -> String {
    format!(
        "{}?route={}%2C{}%3B{}%2C{}",
        map::DIRECTIONS_URL,
        from.latitude,
        from.longitude,
        to.latitude,
        to.longitude
    )
}

/// Phone number reduced to the characters a dialer accepts
pub fn dial_string(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '*' | '#'))
        .collect()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// JSON that can be inlined in a `<script>` element
fn script_safe_json<T: Serialize + ?Sized>(value: &T) -> Result<String, MapError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_dial_string() {
        assert_eq!(dial_string("+351 215 666 999"), "+351215666999");
    }

    #[test]
    fn test_tel_url() {
        assert_eq!(tel_url("+351 215 333 666"), "tel:+351215333666");
        assert_eq!(tel_url("112"), "tel:112");
    }

    #[test]
    fn test_directions_url() {
        let url = directions_url(Coordinate::new(38.7223, -9.1393), Coordinate::new(38.748, -9.161));
        assert_eq!(
            url,
            "https://www.openstreetmap.org/directions?route=38.7223%2C-9.1393%3B38.748%2C-9.161"
        );
    }

    #[test]
    fn test_script_safe_json_breaks_closing_tags() {
        let json = script_safe_json("</script>").unwrap();
        assert!(!json.contains("</"));
    }
}
