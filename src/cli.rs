// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for the safety map
//!
//! This module provides command-line functionality for:
//! - Listing the places a filter selects
//! - Exporting the map page

use guardian::Config;
use guardian::constants::{SearchRadius, format_distance};
use guardian::errors::{AppResult, MapError};
use guardian::geo::Coordinate;
use guardian::map_document::{MapDocument, default_output_dir};
use guardian::places::{Category, Place, seeded_places};
use guardian::safety_map::SafetyMapState;
use guardian::selection::Selection;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Filter and position options shared by the place commands
pub struct Query {
    pub categories: Vec<Category>,
    pub radius: Option<SearchRadius>,
    pub location: Option<Coordinate>,
}

impl Query {
    /// Screen state the command works on
    ///
    /// No categories means all of them. Without a position the configured
    /// fallback center is used.
    fn state(&self, config: &Config) -> SafetyMapState {
        let mut state = SafetyMapState::new(seeded_places())
            .with_selection(Selection::from_categories(self.categories.iter().copied()))
            .with_radius(self.radius.unwrap_or(config.default_radius))
            .with_fallback_center(config.fallback_center);
        if let Some(location) = self.location {
            state.resolve_location(location);
        }
        state
    }
}

#[derive(Serialize)]
struct PlaceOutput<'a> {
    #[serde(flatten)]
    place: &'a Place,
    distance_km: f64,
}

fn place_outputs(state: &SafetyMapState) -> Vec<PlaceOutput<'_>> {
    state
        .visible_places()
        .map(|place| PlaceOutput {
            place,
            distance_km: state.display_distance_km(place),
        })
        .collect()
}

/// List the places the query selects
pub fn list_places(query: Query, json: bool) -> AppResult<()> {
    let (_, config) = Config::load();
    let state = query.state(&config);

    info!(selection = %state.selection(), radius = %state.radius(), "Listing places");

    if json {
        let json = serde_json::to_string_pretty(&place_outputs(&state)).map_err(MapError::from)?;
        println!("{}", json);
        return Ok(());
    }

    let count = state.visible_count();
    if count == 0 {
        println!("No places match: {}", state.selection());
        return Ok(());
    }

    println!(
        "{} place(s) around {} ({} radius):",
        count,
        state.center(),
        state.radius()
    );
    println!();
    for place in state.visible_places() {
        println!(
            "  [{}] {} ({})",
            place.category.glyph(),
            place.name,
            format_distance(state.display_distance_km(place))
        );
        println!("      {}", place.address);
        if let Some(phone) = &place.phone {
            println!("      {}", phone);
        }
        println!();
    }

    Ok(())
}

/// Write the map page and optionally open it in the browser
pub fn export_map(
    query: Query,
    output: Option<PathBuf>,
    open_browser: bool,
) -> AppResult<()> {
    let (_, config) = Config::load();
    let state = query.state(&config);
    let (path, document) = write_map(&state, &config, output)?;

    println!("Map written to {}", path.display());
    println!(
        "  {} marker(s), {} circle around {}",
        document.markers.len(),
        state.radius(),
        document.center
    );

    if open_browser {
        open::that_detached(&path)?;
    }

    Ok(())
}

/// Render the page to `output`, or to the cache directory when none is given
fn write_map(
    state: &SafetyMapState,
    config: &Config,
    output: Option<PathBuf>,
) -> AppResult<(PathBuf, MapDocument)> {
    let document = state.map_document(&config.tile_source());
    let path = match output {
        Some(path) => {
            document.write_to(&path)?;
            path
        }
        None => document.write_html(&default_output_dir())?,
    };
    Ok((path, document))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(categories: Vec<Category>) -> Query {
        Query {
            categories,
            radius: None,
            location: None,
        }
    }

    #[test]
    fn test_query_without_categories_selects_all() {
        let state = query(Vec::new()).state(&Config::default());
        assert!(state.selection().is_all());
        assert_eq!(state.radius(), Config::default().default_radius);
        assert_eq!(state.center(), Config::default().fallback_center);
    }

    #[test]
    fn test_query_applies_radius_and_position() {
        let here = Coordinate::new(41.15, -8.61);
        let query = Query {
            categories: vec![Category::Police],
            radius: Some(SearchRadius::Ten),
            location: Some(here),
        };

        let state = query.state(&Config::default());

        assert_eq!(state.radius(), SearchRadius::Ten);
        assert_eq!(state.center(), here);
        assert_eq!(state.visible_count(), 0);
    }

    #[test]
    fn test_json_output_flattens_place_with_distance() {
        let state = query(vec![Category::Hospital]).state(&Config::default());

        let json = serde_json::to_value(place_outputs(&state)).unwrap();
        let entries = json.as_array().unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["id"], "1");
        assert_eq!(entries[0]["type"], "Hospital");
        assert_eq!(entries[0]["name"], "Hospital de Santa Maria");
        assert!(entries[0].get("place").is_none());
        let distance = entries[0]["distance_km"].as_f64().unwrap();
        assert!(distance > 2.0 && distance < 4.0, "got {distance}");
    }

    #[test]
    fn test_map_written_to_requested_output() {
        let dir = std::env::temp_dir().join(format!("guardian-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let output = dir.join("lisbon.html");
        let config = Config::default();
        let state = query(Vec::new()).state(&config);

        let (path, document) = write_map(&state, &config, Some(output.clone())).unwrap();

        assert_eq!(path, output);
        assert_eq!(document.markers.len(), 2);
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("Hospital de Santa Maria"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
