// SPDX-License-Identifier: GPL-3.0-only

//! Safety map mount sessions
//!
//! Every time the safety map opens it gets a new session id, a fresh
//! [`SafetyMapState`] and a decision, taken once, whether the device location
//! is asked for. The location subscription is keyed by the session id, so a
//! result tagged with an older id belongs to a screen that is already gone.

use crate::geo::Coordinate;
use crate::safety_map::SafetyMapState;
use tracing::debug;

#[derive(Debug, Default)]
pub struct MapSession {
    id: u64,
    state: Option<SafetyMapState>,
    location_requested: bool,
    locating: bool,
}

impl MapSession {
    /// Start a new session, replacing any previous screen state
    pub fn mount(&mut self, state: SafetyMapState, request_location: bool) -> u64 {
        self.id += 1;
        self.state = Some(state);
        self.location_requested = request_location;
        self.locating = request_location;
        debug!(session = self.id, request_location, "Safety map mounted");
        self.id
    }

    /// Drop the screen state; returns whether anything was mounted
    pub fn unmount(&mut self) -> bool {
        self.location_requested = false;
        self.locating = false;
        let was_mounted = self.state.take().is_some();
        if was_mounted {
            debug!(session = self.id, "Safety map unmounted");
        }
        was_mounted
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> Option<&SafetyMapState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut SafetyMapState> {
        self.state.as_mut()
    }

    /// A location request of the current session is still outstanding
    pub fn is_locating(&self) -> bool {
        self.locating
    }

    /// Session id the location subscription runs under, if any
    ///
    /// Fixed for the whole session: settings changed while the screen is
    /// open neither cancel nor restart the attempt.
    pub fn location_request(&self) -> Option<u64> {
        (self.state.is_some() && self.location_requested).then_some(self.id)
    }

    /// Apply a location result; returns false when it is stale
    pub fn resolve_location(&mut self, session: u64, location: Option<Coordinate>) -> bool {
        if session != self.id {
            debug!(session, current = self.id, "Ignoring location from an old session");
            return false;
        }
        let Some(state) = self.state.as_mut() else {
            debug!(session, "Ignoring location, safety map is not mounted");
            return false;
        };

        self.locating = false;
        if let Some(location) = location {
            state.resolve_location(location);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::map;
    use crate::places::{Category, seeded_places};
    use crate::selection::{FilterTag, Selection};

    fn fresh_state() -> SafetyMapState {
        SafetyMapState::new(seeded_places())
    }

    #[test]
    fn test_result_from_previous_mount_is_ignored() {
        let mut session = MapSession::default();
        assert_eq!(session.mount(fresh_state(), true), 1);
        assert!(session.unmount());
        assert_eq!(session.mount(fresh_state(), true), 2);

        let applied = session.resolve_location(1, Some(Coordinate::new(40.0, -8.0)));

        assert!(!applied);
        assert!(session.is_locating());
        let state = session.state().unwrap();
        assert_eq!(state.location(), None);
        assert_eq!(state.center(), map::DEFAULT_CENTER);
    }

    #[test]
    fn test_current_result_moves_the_center() {
        let mut session = MapSession::default();
        let id = session.mount(fresh_state(), true);
        let here = Coordinate::new(40.0, -8.0);

        assert!(session.resolve_location(id, Some(here)));

        assert!(!session.is_locating());
        assert_eq!(session.state().unwrap().center(), here);
    }

    #[test]
    fn test_failed_lookup_keeps_default_center() {
        let mut session = MapSession::default();
        let id = session.mount(fresh_state(), true);

        assert!(session.resolve_location(id, None));

        assert!(!session.is_locating());
        assert_eq!(session.state().unwrap().center(), map::DEFAULT_CENTER);
    }

    #[test]
    fn test_result_after_unmount_is_ignored() {
        let mut session = MapSession::default();
        let id = session.mount(fresh_state(), true);
        session.unmount();

        assert!(!session.resolve_location(id, Some(Coordinate::new(40.0, -8.0))));
        assert!(session.state().is_none());
        assert!(!session.is_locating());
    }

    #[test]
    fn test_remount_resets_selection() {
        let mut session = MapSession::default();
        session.mount(fresh_state(), false);
        session
            .state_mut()
            .unwrap()
            .toggle_category(FilterTag::Category(Category::Police));
        assert_ne!(session.state().unwrap().selection(), &Selection::All);

        session.unmount();
        session.mount(fresh_state(), false);

        assert_eq!(session.state().unwrap().selection(), &Selection::All);
    }

    #[test]
    fn test_location_request_is_fixed_at_mount() {
        let mut session = MapSession::default();
        let id = session.mount(fresh_state(), true);
        assert_eq!(session.location_request(), Some(id));

        // Still the same request after the fix arrives, so it is not rerun
        session.resolve_location(id, None);
        assert_eq!(session.location_request(), Some(id));

        session.unmount();
        assert_eq!(session.location_request(), None);
    }

    #[test]
    fn test_no_request_means_not_locating() {
        let mut session = MapSession::default();
        session.mount(fresh_state(), false);

        assert_eq!(session.location_request(), None);
        assert!(!session.is_locating());
    }
}
