// SPDX-License-Identifier: MPL-2.0

//! Integration tests for the safety map screen state

use guardian::constants::{SearchRadius, map};
use guardian::geo::Coordinate;
use guardian::map_document::TileSource;
use guardian::places::{Category, Place, seeded_places};
use guardian::safety_map::{SafetyMapState, ViewMode};
use guardian::selection::FilterTag;

fn place(id: &str, category: Category) -> Place {
    Place {
        id: id.to_string(),
        category,
        name: format!("Place {}", id),
        address: "Somewhere".to_string(),
        phone: None,
        lat: 38.72,
        lng: -9.14,
        distance: None,
    }
}

fn mixed_places() -> Vec<Place> {
    vec![
        place("a", Category::Hospital),
        place("b", Category::Police),
        place("c", Category::Hospital),
        place("d", Category::Atm),
        place("e", Category::Pharmacy),
    ]
}

fn visible_ids(state: &SafetyMapState) -> Vec<String> {
    state.visible_places().map(|p| p.id.clone()).collect()
}

#[test]
fn test_all_shows_full_list_in_order() {
    let state = SafetyMapState::new(mixed_places());
    assert_eq!(visible_ids(&state), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_hospital_filter_keeps_relative_order() {
    let mut state = SafetyMapState::new(mixed_places());
    state.toggle_category(FilterTag::Category(Category::Hospital));
    assert_eq!(visible_ids(&state), vec!["a", "c"]);

    state.toggle_category(FilterTag::Category(Category::Atm));
    assert_eq!(visible_ids(&state), vec!["a", "c", "d"]);
}

#[test]
fn test_seeded_hospitals() {
    let mut state = SafetyMapState::new(seeded_places());
    state.toggle_category(FilterTag::Category(Category::Hospital));
    let names: Vec<&str> = state.visible_places().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Hospital de Santa Maria", "Hospital de São José"]);
}

#[test]
fn test_seeded_police_is_empty() {
    let mut state = SafetyMapState::new(seeded_places());
    state.toggle_category(FilterTag::Category(Category::Police));
    assert_eq!(state.visible_places().count(), 0);
}

#[test]
fn test_radius_does_not_filter() {
    let mut state = SafetyMapState::new(mixed_places());
    let before = visible_ids(&state);
    for radius in SearchRadius::ALL {
        state.set_radius(radius);
        assert_eq!(visible_ids(&state), before);
    }

    // A place far outside every radius is still listed
    let mut far = place("far", Category::Police);
    far.lat = 41.1579;
    far.lng = -8.6291;
    let state = SafetyMapState::new(vec![far]).with_radius(SearchRadius::Two);
    assert_eq!(state.visible_count(), 1);
}

#[test]
fn test_view_mode_switch() {
    let mut state = SafetyMapState::new(seeded_places());
    assert_eq!(state.view_mode(), ViewMode::Map);
    state.set_view_mode(ViewMode::List);
    assert_eq!(state.view_mode(), ViewMode::List);
    // Switching views leaves the selection alone
    assert!(state.selection().is_all());
}

#[test]
fn test_map_document_follows_state() {
    let mut state = SafetyMapState::new(seeded_places()).with_radius(SearchRadius::Five);
    let document = state.map_document(&TileSource::default());
    assert_eq!(document.center, map::DEFAULT_CENTER);
    assert_eq!(document.radius.center, map::DEFAULT_CENTER);
    assert_eq!(document.radius.radius_m, 5000.0);
    assert_eq!(document.markers.len(), 2);

    let here = Coordinate::new(38.75, -9.16);
    state.resolve_location(here);
    state.toggle_category(FilterTag::Category(Category::Police));
    let document = state.map_document(&TileSource::default());
    assert_eq!(document.center, here);
    assert!(document.markers.is_empty());
}

#[test]
fn test_fallback_center_is_configurable() {
    let porto = Coordinate::new(41.1579, -8.6291);
    let state = SafetyMapState::new(seeded_places()).with_fallback_center(porto);
    assert_eq!(state.center(), porto);
}
