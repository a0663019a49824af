// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! The main `update()` function acts as a dispatcher; the handlers live in the
//! `handlers` submodules organized by functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::navigation`: screens, home menu, context drawer, external URLs
//! - `handlers::safety_map`: filters, radius, view mode, location, map page
//! - `handlers::system`: configuration and settings

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== UI Navigation =====
            Message::LaunchUrl(url) => self.handle_launch_url(url),
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),
            Message::Navigate(page) => self.handle_navigate(page),
            Message::MenuSelected(entry) => self.handle_menu_selected(entry),

            // ===== Safety Map =====
            Message::ToggleCategory(tag) => self.handle_toggle_category(tag),
            Message::SelectRadius(index) => self.handle_select_radius(index),
            Message::SetViewMode(mode) => self.handle_set_view_mode(mode),
            Message::LocationResolved { session, location } => {
                self.handle_location_resolved(session, location)
            }
            Message::OpenMap => self.handle_open_map(),
            Message::MapWritten(result) => self.handle_map_written(result),

            // ===== Settings =====
            Message::UpdateConfig(config) => self.handle_update_config(config),
            Message::SetAppTheme(index) => self.handle_set_app_theme(index),
            Message::SetDefaultRadius(index) => self.handle_set_default_radius(index),
            Message::SetDefaultViewMode(index) => self.handle_set_default_view_mode(index),
            Message::ToggleLocationEnabled => self.handle_toggle_location_enabled(),
        }
    }
}
