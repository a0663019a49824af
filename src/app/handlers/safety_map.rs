// SPDX-License-Identifier: GPL-3.0-only

//! Safety map handlers
//!
//! Handles category filters, the radius picker, the map/list switch, device
//! location results and writing the map page.

use crate::app::state::{AppModel, Message};
use crate::constants::SearchRadius;
use crate::geo::Coordinate;
use crate::map_document::default_output_dir;
use crate::safety_map::ViewMode;
use crate::selection::FilterTag;
use cosmic::Task;
use std::path::PathBuf;
use tracing::{error, info, warn};

impl AppModel {
    pub(crate) fn handle_toggle_category(&mut self, tag: FilterTag) -> Task<cosmic::Action<Message>> {
        if let Some(state) = self.session.state_mut() {
            state.toggle_category(tag);
        }
        Task::none()
    }

    pub(crate) fn handle_select_radius(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        let Some(radius) = SearchRadius::from_index(index) else {
            warn!(index, "Radius index out of range");
            return Task::none();
        };

        if let Some(state) = self.session.state_mut() {
            info!(%radius, "Search radius selected");
            state.set_radius(radius);
        }
        Task::none()
    }

    pub(crate) fn handle_set_view_mode(&mut self, mode: ViewMode) -> Task<cosmic::Action<Message>> {
        if let Some(state) = self.session.state_mut() {
            state.set_view_mode(mode);
        }
        Task::none()
    }

    pub(crate) fn handle_location_resolved(
        &mut self,
        session: u64,
        location: Option<Coordinate>,
    ) -> Task<cosmic::Action<Message>> {
        if self.session.resolve_location(session, location) {
            info!(session, found = location.is_some(), "Location request finished");
        }
        Task::none()
    }

    pub(crate) fn handle_open_map(&self) -> Task<cosmic::Action<Message>> {
        let Some(state) = self.session.state() else {
            return Task::none();
        };

        let document = state.map_document(&self.config.tile_source());
        let dir = default_output_dir();

        Task::perform(
            async move { document.write_html(&dir).map_err(|e| e.to_string()) },
            |result| cosmic::Action::App(Message::MapWritten(result)),
        )
    }

    pub(crate) fn handle_map_written(
        &self,
        result: Result<PathBuf, String>,
    ) -> Task<cosmic::Action<Message>> {
        match result {
            Ok(path) => {
                if let Err(err) = open::that_detached(&path) {
                    error!(path = %path.display(), error = %err, "Failed to open map page");
                }
            }
            Err(err) => {
                error!(error = %err, "Failed to write map page");
            }
        }
        Task::none()
    }
}
