// SPDX-License-Identifier: MPL-2.0

//! Travel Guardian - travel safety companion for the COSMIC desktop
//!
//! This library provides the core of the Travel Guardian application: the
//! emergency-services place list, the safety map screen state, the map page
//! handed to the browser, and device location acquisition.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: Desktop application logic and UI
//! - [`terminal`]: Terminal rendition of the safety map
//! - [`safety_map`]: Place filter state shared by every frontend
//! - [`selection`]: Category selection and its toggle rule
//! - [`places`]: Place categories and the seeded place list
//! - [`map_document`]: Map description and its Leaflet rendering
//! - [`location`]: Permission and one-shot position acquisition
//! - [`config`]: User configuration handling
//!
//! # Example
//!
//! ```ignore
//! // This is a GUI application, typically run via:
//! // guardian
//! ```

pub mod app;
pub mod config;
pub mod constants;
pub mod errors;
pub mod geo;
pub mod i18n;
pub mod location;
pub mod map_document;
pub mod places;
pub mod safety_map;
pub mod selection;
pub mod terminal;

// Re-export commonly used types
pub use app::{AppModel, Message, Page};
pub use config::Config;
pub use constants::SearchRadius;
pub use geo::Coordinate;
pub use places::{Category, Place};
pub use safety_map::{SafetyMapState, ViewMode};
pub use selection::{FilterTag, Selection};
