// SPDX-License-Identifier: GPL-3.0-only

//! Navigation handlers
//!
//! Handles screen changes, home menu entries, the context drawer and
//! external URLs.

use crate::app::state::{AppModel, ContextPage, MenuEntry, Message, Page};
use crate::map_document::tel_url;
use crate::safety_map::SafetyMapState;
use cosmic::Task;
use std::sync::Arc;
use tracing::{debug, error, info};

impl AppModel {
    pub(crate) fn handle_launch_url(&self, url: String) -> Task<cosmic::Action<Message>> {
        match open::that_detached(&url) {
            Ok(()) => {}
            Err(err) => {
                error!(url = %url, error = %err, "Failed to open URL");
            }
        }
        Task::none()
    }

    pub(crate) fn handle_toggle_context_page(
        &mut self,
        context_page: ContextPage,
    ) -> Task<cosmic::Action<Message>> {
        if self.context_page == context_page {
            self.core.window.show_context = !self.core.window.show_context;
        } else {
            self.context_page = context_page;
            self.core.window.show_context = true;
        }
        Task::none()
    }

    pub(crate) fn handle_navigate(&mut self, page: Page) -> Task<cosmic::Action<Message>> {
        if self.page == page {
            return Task::none();
        }

        info!(from = ?self.page, to = ?page, "Navigating");
        match page {
            Page::SafetyMap => self.mount_safety_map(),
            Page::Home => self.unmount_safety_map(),
        }
        self.page = page;
        Task::none()
    }

    pub(crate) fn handle_menu_selected(
        &mut self,
        entry: MenuEntry,
    ) -> Task<cosmic::Action<Message>> {
        match entry {
            MenuEntry::LocalEmergencies => {
                let url = tel_url(&self.config.emergency_number);
                info!(url = %url, "Dialling local emergencies");
                self.handle_launch_url(url)
            }
            MenuEntry::SafetyMap => self.handle_navigate(Page::SafetyMap),
            inert => {
                debug!(entry = ?inert, "Menu entry has no screen");
                Task::none()
            }
        }
    }

    /// Fresh screen state for a new safety map session
    ///
    /// Whether the device location is asked for is decided here, once per
    /// session.
    fn mount_safety_map(&mut self) {
        let state = SafetyMapState::new(Arc::clone(&self.places))
            .with_radius(self.config.default_radius)
            .with_view_mode(self.config.default_view_mode)
            .with_fallback_center(self.config.fallback_center);
        self.session.mount(state, self.config.location_enabled);
    }

    /// Discard the screen state; the location subscription goes with it
    fn unmount_safety_map(&mut self) {
        self.session.unmount();
    }
}
