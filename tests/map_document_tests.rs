// SPDX-License-Identifier: MPL-2.0

//! Integration tests for the map page

use guardian::constants::{SearchRadius, map};
use guardian::geo::Coordinate;
use guardian::map_document::{MapDocument, TileSource, popup_html};
use guardian::places::{Category, Place, seeded_places};

fn document(places: &[Place], radius: SearchRadius) -> MapDocument {
    MapDocument::new(map::DEFAULT_CENTER, TileSource::default(), places, radius)
}

#[test]
fn test_circle_radius_in_meters() {
    let places = seeded_places();
    for radius in SearchRadius::ALL {
        let doc = document(&places, radius);
        assert_eq!(doc.radius.radius_m, f64::from(radius.km()) * 1000.0);
        assert_eq!(doc.radius.color, "#E32F45");
        assert_eq!(doc.radius.fill_opacity, 0.1);
    }
}

#[test]
fn test_one_marker_per_place() {
    let places = seeded_places();
    let doc = document(&places, SearchRadius::Two);
    let ids: Vec<&str> = doc.markers.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(doc.zoom, 13);
}

#[test]
fn test_popup_html() {
    let place = &seeded_places()[0];
    assert_eq!(
        popup_html(place),
        "<strong>Hospital de Santa Maria</strong><br>Rua dos Girassóis, 6, Lisboa, 1500-123<br>\
         <a href=\"tel:+351215666999\">+351 215 666 999</a>"
    );
}

#[test]
fn test_popup_without_phone_has_no_link() {
    let mut place = seeded_places().remove(1);
    place.phone = None;
    assert!(!popup_html(&place).contains("tel:"));
}

#[test]
fn test_popup_escapes_text() {
    let place = Place {
        id: "x".to_string(),
        category: Category::Police,
        name: "<script>alert(1)</script>".to_string(),
        address: "A & B".to_string(),
        phone: None,
        lat: 0.0,
        lng: 0.0,
        distance: None,
    };
    let html = popup_html(&place);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("A &amp; B"));
}

#[test]
fn test_html_contains_viewport_tiles_and_circle() {
    let doc = MapDocument::new(
        Coordinate::new(38.75, -9.16),
        TileSource::default(),
        &seeded_places(),
        SearchRadius::Ten,
    );
    let html = doc.to_html().unwrap();

    assert!(html.contains("setView([38.75, -9.16], 13)"));
    assert!(html.contains("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"));
    assert!(html.contains("maxZoom: 19"));
    assert!(html.contains("© OpenStreetMap contributors"));
    assert!(html.contains("radius: 10000"));
    assert!(html.contains("leaflet@1.9.4"));
    assert!(html.contains("leaflet.markercluster@1.5.3"));
    assert!(html.contains("Hospital de São José"));
}

#[test]
fn test_write_html_creates_file() {
    let dir = std::env::temp_dir().join(format!("guardian-test-{}", std::process::id()));
    let doc = document(&seeded_places(), SearchRadius::Two);

    let path = doc.write_html(&dir).unwrap();
    assert_eq!(path, dir.join("safety-map.html"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, doc.to_html().unwrap());

    std::fs::remove_dir_all(&dir).unwrap();
}
