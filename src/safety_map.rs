// SPDX-License-Identifier: GPL-3.0-only

//! Safety map screen state
//!
//! Holds the place list together with everything the user can change on the
//! safety map screen, and derives the places to show from it. The state lives
//! as long as the screen is mounted.

use crate::constants::{SearchRadius, map};
use crate::geo::Coordinate;
use crate::map_document::{MapDocument, TileSource};
use crate::places::Place;
use crate::selection::{FilterTag, Selection};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// How places are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Interactive map with markers and the radius circle
    #[default]
    Map,
    /// Scrollable list of places
    List,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Map, ViewMode::List];

    pub fn display_name(&self) -> &'static str {
        match self {
            ViewMode::Map => "Map",
            ViewMode::List => "List",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ViewMode::Map => "mark-location-symbolic",
            ViewMode::List => "view-list-symbolic",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SafetyMapState {
    places: Arc<[Place]>,
    selection: Selection,
    radius: SearchRadius,
    view_mode: ViewMode,
    location: Option<Coordinate>,
    fallback_center: Coordinate,
}

impl SafetyMapState {
    /// Fresh screen state: all categories, 2 km, map view, no location yet
    pub fn new(places: impl Into<Arc<[Place]>>) -> Self {
        Self {
            places: places.into(),
            selection: Selection::All,
            radius: SearchRadius::default(),
            view_mode: ViewMode::default(),
            location: None,
            fallback_center: map::DEFAULT_CENTER,
        }
    }

    pub fn with_radius(mut self, radius: SearchRadius) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Center used while no device location is known
    pub fn with_fallback_center(mut self, center: Coordinate) -> Self {
        self.fallback_center = center;
        self
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn radius(&self) -> SearchRadius {
        self.radius
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn location(&self) -> Option<Coordinate> {
        self.location
    }

    pub fn toggle_category(&mut self, tag: FilterTag) {
        self.selection.toggle(tag);
        debug!(%tag, selection = %self.selection, "Category filter toggled");
    }

    /// Replace the active radius
    ///
    /// Only the map's circle overlay follows the radius; the visible places
    /// and their distances are unaffected.
    pub fn set_radius(&mut self, radius: SearchRadius) {
        self.radius = radius;
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    /// Store the device position once it is known
    pub fn resolve_location(&mut self, location: Coordinate) {
        self.location = Some(location);
    }

    /// Places passing the current selection, in their original order
    pub fn visible_places(&self) -> impl Iterator<Item = &Place> + '_ {
        self.places
            .iter()
            .filter(|place| self.selection.includes(place.category))
    }

    pub fn visible_count(&self) -> usize {
        self.visible_places().count()
    }

    /// Device location, or the fallback center while there is none
    pub fn center(&self) -> Coordinate {
        self.location.unwrap_or(self.fallback_center)
    }

    /// Distance shown next to a place
    ///
    /// Uses the place's precomputed distance when it has one.
    pub fn display_distance_km(&self, place: &Place) -> f64 {
        place
            .distance
            .unwrap_or_else(|| self.center().distance_km(&place.coordinate()))
    }

    /// Describe the map for the rendering surface
    pub fn map_document(&self, tiles: &TileSource) -> MapDocument {
        MapDocument::new(
            self.center(),
            tiles.clone(),
            self.visible_places(),
            self.radius,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::places::{Category, seeded_places};

    #[test]
    fn test_new_state_defaults() {
        let state = SafetyMapState::new(seeded_places());
        assert_eq!(state.selection(), &Selection::All);
        assert_eq!(state.radius(), SearchRadius::Two);
        assert_eq!(state.view_mode(), ViewMode::Map);
        assert_eq!(state.location(), None);
        assert_eq!(state.center(), map::DEFAULT_CENTER);
    }

    #[test]
    fn test_center_prefers_location() {
        let mut state = SafetyMapState::new(seeded_places());
        let here = Coordinate::new(40.0, -8.0);
        state.resolve_location(here);
        assert_eq!(state.center(), here);
    }

    #[test]
    fn test_display_distance_uses_precomputed_value() {
        let state = SafetyMapState::new(seeded_places());
        let mut place = seeded_places().remove(0);
        place.distance = Some(0.9);
        assert_eq!(state.display_distance_km(&place), 0.9);
    }

    #[test]
    fn test_display_distance_falls_back_to_center() {
        let state = SafetyMapState::new(seeded_places());
        let place = &state.places()[0];
        let distance = state.display_distance_km(place);
        // Santa Maria is roughly 3.4 km from the Lisbon fallback center
        assert!(distance > 2.0 && distance < 4.0, "got {distance}");
    }

    #[test]
    fn test_view_mode_leaves_places_alone() {
        let mut state = SafetyMapState::new(seeded_places());
        state.set_view_mode(ViewMode::List);
        assert_eq!(state.view_mode(), ViewMode::List);
        assert_eq!(state.visible_count(), state.places().len());
        state.set_view_mode(ViewMode::Map);
        assert_eq!(state.view_mode(), ViewMode::Map);
    }

    #[test]
    fn test_visible_count_follows_selection() {
        let mut state = SafetyMapState::new(seeded_places());
        state.toggle_category(FilterTag::Category(Category::Police));
        assert_eq!(state.visible_count(), 0);
        state.toggle_category(FilterTag::Category(Category::Hospital));
        assert_eq!(state.visible_count(), 2);
    }
}
