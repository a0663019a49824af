// SPDX-License-Identifier: GPL-3.0-only

use crate::constants::{SearchRadius, app_info, location, map, ui};
use crate::geo::Coordinate;
use crate::map_document::TileSource;
use crate::safety_map::ViewMode;
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use cosmic::{Theme, theme};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::error;

/// Application theme preference
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum AppTheme {
    /// Follow system theme (dark or light based on system setting)
    #[default]
    System,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl AppTheme {
    pub const ALL: [AppTheme; 3] = [AppTheme::System, AppTheme::Dark, AppTheme::Light];

    /// Get the COSMIC theme for this app theme preference
    pub fn theme(&self) -> Theme {
        match self {
            Self::Dark => {
                let mut theme = theme::system_dark();
                theme.theme_type.prefer_dark(Some(true));
                theme
            }
            Self::Light => {
                let mut theme = theme::system_light();
                theme.theme_type.prefer_dark(Some(false));
                theme
            }
            Self::System => theme::system_preference(),
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::System => 0,
            Self::Dark => 1,
            Self::Light => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[derive(Debug, Clone, CosmicConfigEntry, PartialEq, Serialize, Deserialize)]
#[version = 1]
pub struct Config {
    /// Application theme preference (System, Dark, Light)
    pub app_theme: AppTheme,
    /// Radius preset selected when the safety map opens
    pub default_radius: SearchRadius,
    /// Map or list when the safety map opens
    pub default_view_mode: ViewMode,
    /// Map center used until the device location is known
    pub fallback_center: Coordinate,
    /// Ask the location service for the device position
    pub location_enabled: bool,
    /// Upper bound for permission plus first fix, in seconds
    pub location_timeout_secs: u64,
    /// Raster tile URL template for the map page
    pub tile_url: String,
    /// Number dialled by the "Local Emergencies" entry
    pub emergency_number: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::default(), // Default to System theme
            default_radius: SearchRadius::default(),
            default_view_mode: ViewMode::default(),
            fallback_center: map::DEFAULT_CENTER,
            location_enabled: true,
            location_timeout_secs: location::DEFAULT_TIMEOUT_SECS,
            tile_url: map::TILE_URL_TEMPLATE.to_string(),
            emergency_number: ui::DEFAULT_EMERGENCY_NUMBER.to_string(),
        }
    }
}

impl Config {
    /// Load the stored configuration, falling back to defaults
    ///
    /// The handler is `None` when the config store cannot be opened; the
    /// returned config is still usable but changes will not be saved.
    pub fn load() -> (Option<cosmic_config::Config>, Self) {
        match cosmic_config::Config::new(app_info::APP_ID, Self::VERSION) {
            Ok(handler) => {
                let config = match Self::get_entry(&handler) {
                    Ok(config) => config,
                    Err((errors, config)) => {
                        error!(?errors, "Errors loading config");
                        config
                    }
                };
                (Some(handler), config)
            }
            Err(err) => {
                error!(%err, "Failed to create config handler");
                (None, Self::default())
            }
        }
    }

    pub fn location_timeout(&self) -> Duration {
        Duration::from_secs(self.location_timeout_secs)
    }

    pub fn tile_source(&self) -> TileSource {
        TileSource::new(self.tile_url.clone())
    }
}
