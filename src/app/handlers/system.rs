// SPDX-License-Identifier: GPL-3.0-only

//! System handlers
//!
//! Handles configuration updates and the settings drawer.

use crate::app::state::{AppModel, Message};
use crate::config::{AppTheme, Config};
use crate::constants::SearchRadius;
use crate::safety_map::ViewMode;
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use tracing::{error, info};

impl AppModel {
    pub(crate) fn handle_update_config(&mut self, config: Config) -> Task<cosmic::Action<Message>> {
        info!("UpdateConfig received");
        self.config = config;
        Task::none()
    }

    pub(crate) fn handle_set_app_theme(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        let Some(app_theme) = AppTheme::from_index(index) else {
            return Task::none();
        };

        info!(?app_theme, "Setting application theme");
        self.config.app_theme = app_theme;
        self.save_config("app theme");

        cosmic::command::set_theme(app_theme.theme())
    }

    pub(crate) fn handle_set_default_radius(
        &mut self,
        index: usize,
    ) -> Task<cosmic::Action<Message>> {
        let Some(radius) = SearchRadius::from_index(index) else {
            return Task::none();
        };

        info!(%radius, "Setting default search radius");
        self.config.default_radius = radius;
        self.save_config("default radius");
        Task::none()
    }

    pub(crate) fn handle_set_default_view_mode(
        &mut self,
        index: usize,
    ) -> Task<cosmic::Action<Message>> {
        let Some(mode) = ViewMode::ALL.get(index).copied() else {
            return Task::none();
        };

        info!(?mode, "Setting default view mode");
        self.config.default_view_mode = mode;
        self.save_config("default view mode");
        Task::none()
    }

    /// Takes effect the next time the safety map opens
    pub(crate) fn handle_toggle_location_enabled(&mut self) -> Task<cosmic::Action<Message>> {
        self.config.location_enabled = !self.config.location_enabled;
        info!(enabled = self.config.location_enabled, "Toggled device location");
        self.save_config("location setting");
        Task::none()
    }

    fn save_config(&self, what: &str) {
        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, setting = what, "Failed to save setting");
        }
    }
}
