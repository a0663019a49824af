// SPDX-License-Identifier: MPL-2.0

//! Integration tests for configuration module

use guardian::Config;
use guardian::config::AppTheme;
use guardian::constants::{SearchRadius, map};
use guardian::safety_map::ViewMode;
use std::time::Duration;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.app_theme, AppTheme::System);
    assert_eq!(config.default_radius, SearchRadius::Two);
    assert_eq!(config.default_view_mode, ViewMode::Map);
    assert!(config.location_enabled, "Location should be enabled by default");
}

#[test]
fn test_config_fallback_center_is_lisbon() {
    let config = Config::default();
    assert_eq!(config.fallback_center, map::DEFAULT_CENTER);
}

#[test]
fn test_config_location_timeout() {
    let config = Config {
        location_timeout_secs: 5,
        ..Config::default()
    };
    assert_eq!(config.location_timeout(), Duration::from_secs(5));
    assert_eq!(Config::default().location_timeout(), Duration::from_secs(30));
}

#[test]
fn test_config_tile_source_uses_configured_url() {
    let config = Config {
        tile_url: "https://tiles.example.org/{z}/{x}/{y}.png".to_string(),
        ..Config::default()
    };
    let tiles = config.tile_source();
    assert_eq!(tiles.url_template, "https://tiles.example.org/{z}/{x}/{y}.png");
    assert_eq!(tiles.max_zoom, map::TILE_MAX_ZOOM);
}

#[test]
fn test_config_emergency_number() {
    let config = Config::default();
    assert_eq!(config.emergency_number, "112");
}

#[test]
fn test_app_theme_index_round_trip() {
    for theme in AppTheme::ALL {
        assert_eq!(AppTheme::from_index(theme.index()), Some(theme));
    }
    assert_eq!(AppTheme::from_index(3), None);
}
