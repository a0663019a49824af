// SPDX-License-Identifier: MPL-2.0

//! Integration tests for constants module

use guardian::constants::{SearchRadius, map};

#[test]
fn test_search_radius_values() {
    // Test that all presets exist (2, 5, 10 km)
    assert_eq!(SearchRadius::ALL.len(), 3);
    let km: Vec<u32> = SearchRadius::ALL.iter().map(SearchRadius::km).collect();
    assert_eq!(km, vec![2, 5, 10]);
}

#[test]
fn test_search_radius_ordering() {
    // Presets are ordered from smallest to largest
    let mut prev = 0;
    for radius in SearchRadius::ALL {
        assert!(radius.km() > prev, "Presets should be ordered smallest first");
        prev = radius.km();
    }
    assert!(SearchRadius::Two < SearchRadius::Ten);
}

#[test]
fn test_search_radius_meters() {
    for radius in SearchRadius::ALL {
        assert_eq!(radius.meters(), f64::from(radius.km()) * 1000.0);
    }
}

#[test]
fn test_search_radius_parsing() {
    assert_eq!("2".parse::<SearchRadius>(), Ok(SearchRadius::Two));
    assert_eq!("5km".parse::<SearchRadius>(), Ok(SearchRadius::Five));
    assert_eq!(" 10 km ".parse::<SearchRadius>(), Ok(SearchRadius::Ten));
    assert!("3".parse::<SearchRadius>().is_err());
    assert!("far".parse::<SearchRadius>().is_err());
}

#[test]
fn test_search_radius_display_names() {
    for radius in SearchRadius::ALL {
        let name = radius.display_name();
        assert!(name.ends_with(" km"), "Radius {:?} has display name {}", radius, name);
        assert_eq!(name, radius.to_string());
    }
}

#[test]
fn test_default_radius_is_two_km() {
    assert_eq!(SearchRadius::default(), SearchRadius::Two);
}

#[test]
fn test_radius_circle_style() {
    assert_eq!(map::RADIUS_COLOR, "#E32F45");
    assert_eq!(map::RADIUS_FILL_COLOR, "#E32F45");
    assert_eq!(map::RADIUS_FILL_OPACITY, 0.1);
    assert_eq!(map::DEFAULT_ZOOM, 13);
}
