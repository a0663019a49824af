// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::config::Config;
use crate::geo::Coordinate;
use crate::places::Place;
use crate::app::session::MapSession;
use crate::safety_map::ViewMode;
use crate::selection::FilterTag;
use cosmic::cosmic_config;
use cosmic::widget::about::About;
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Travel safety menu
    #[default]
    Home,
    /// Nearby emergency services on a map or in a list
    SafetyMap,
}

/// Entries of the home menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    /// Dial the configured emergency number
    LocalEmergencies,
    SafetyMap,
    EmergencyCard,
    CrisisWatch,
    LiveLink,
    QuickNotes,
    GuardianAi,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 7] = [
        MenuEntry::LocalEmergencies,
        MenuEntry::SafetyMap,
        MenuEntry::EmergencyCard,
        MenuEntry::CrisisWatch,
        MenuEntry::LiveLink,
        MenuEntry::QuickNotes,
        MenuEntry::GuardianAi,
    ];

    pub fn icon_name(&self) -> &'static str {
        match self {
            MenuEntry::LocalEmergencies => "call-start-symbolic",
            MenuEntry::SafetyMap => "mark-location-symbolic",
            MenuEntry::EmergencyCard => "contact-new-symbolic",
            MenuEntry::CrisisWatch => "dialog-warning-symbolic",
            MenuEntry::LiveLink => "network-wireless-symbolic",
            MenuEntry::QuickNotes => "accessories-text-editor-symbolic",
            MenuEntry::GuardianAi => "help-browser-symbolic",
        }
    }

    /// Entries with no screen behind them yet
    pub fn is_inert(&self) -> bool {
        !matches!(self, MenuEntry::LocalEmergencies | MenuEntry::SafetyMap)
    }
}

/// Context drawer pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextPage {
    #[default]
    About,
    Settings,
}

/// Main application state
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    pub context_page: ContextPage,
    /// The about page for this app.
    pub about: About,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Handler for writing configuration changes
    pub config_handler: Option<cosmic_config::Config>,

    pub page: Page,
    /// Loaded once at startup, shared with every safety map session
    pub places: Arc<[Place]>,
    /// Safety map screen state, present only while the screen is mounted
    pub session: MapSession,

    // Dropdown labels (borrowed by the view)
    pub radius_dropdown_options: Vec<String>,
    pub theme_dropdown_options: Vec<String>,
    pub view_mode_dropdown_options: Vec<String>,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    // ===== UI Navigation =====
    /// Open external URL (repository, `tel:` links, directions)
    LaunchUrl(String),
    /// Toggle context drawer page (About, Settings)
    ToggleContextPage(ContextPage),
    /// Switch the visible screen
    Navigate(Page),
    /// Home menu entry pressed
    MenuSelected(MenuEntry),

    // ===== Safety Map =====
    ToggleCategory(FilterTag),
    /// Select radius preset from dropdown by index
    SelectRadius(usize),
    SetViewMode(ViewMode),
    /// Location acquisition finished for a mount session
    LocationResolved {
        session: u64,
        location: Option<Coordinate>,
    },
    /// Render the map page and open it in the browser
    OpenMap,
    /// Map page written (or failed)
    MapWritten(Result<PathBuf, String>),

    // ===== Settings =====
    UpdateConfig(Config),
    SetAppTheme(usize),
    SetDefaultRadius(usize),
    SetDefaultViewMode(usize),
    ToggleLocationEnabled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_emergency_entries_are_active() {
        let active: Vec<MenuEntry> = MenuEntry::ALL
            .into_iter()
            .filter(|entry| !entry.is_inert())
            .collect();
        assert_eq!(active, vec![MenuEntry::LocalEmergencies, MenuEntry::SafetyMap]);
    }

    #[test]
    fn test_default_page_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }
}
