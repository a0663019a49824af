// SPDX-License-Identifier: GPL-3.0-only

//! Points of interest shown on the safety map

use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of an emergency service
///
/// The set is closed: a place can only ever carry one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Hospital,
    Police,
    Pharmacy,
    Diplomatic,
    #[serde(rename = "ATM")]
    Atm,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 5] = [
        Category::Hospital,
        Category::Police,
        Category::Pharmacy,
        Category::Diplomatic,
        Category::Atm,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Hospital => "Hospital",
            Category::Police => "Police",
            Category::Pharmacy => "Pharmacy",
            Category::Diplomatic => "Diplomatic",
            Category::Atm => "ATM",
        }
    }

    /// Symbolic icon name used by the desktop frontend
    pub fn icon_name(&self) -> &'static str {
        match self {
            Category::Hospital => "emblem-important-symbolic",
            Category::Police => "security-high-symbolic",
            Category::Pharmacy => "applications-science-symbolic",
            Category::Diplomatic => "network-workgroup-symbolic",
            Category::Atm => "auth-smartcard-symbolic",
        }
    }

    /// Short glyph used by the terminal frontend
    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Hospital => "H",
            Category::Police => "P",
            Category::Pharmacy => "Rx",
            Category::Diplomatic => "D",
            Category::Atm => "$",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown category '{}' (expected one of: {})",
                    s,
                    Category::ALL.map(|c| c.display_name()).join(", ")
                )
            })
    }
}

/// A point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub lat: f64,
    pub lng: f64,
    /// Precomputed distance from the user in kilometers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl Place {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

/// The places shipped with the application
///
/// Loaded once at startup and never mutated afterwards.
pub fn seeded_places() -> Vec<Place> {
    vec![
        Place {
            id: "1".to_string(),
            category: Category::Hospital,
            name: "Hospital de Santa Maria".to_string(),
            address: "Rua dos Girassóis, 6, Lisboa, 1500-123".to_string(),
            phone: Some("+351 215 666 999".to_string()),
            lat: 38.748,
            lng: -9.161,
            distance: None,
        },
        Place {
            id: "2".to_string(),
            category: Category::Hospital,
            name: "Hospital de São José".to_string(),
            address: "Rua da Prata, 12, Lisboa, 1500-069".to_string(),
            phone: Some("+351 215 333 666".to_string()),
            lat: 38.745,
            lng: -9.159,
            distance: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_names() {
        for category in Category::ALL {
            assert_eq!(category.display_name().parse::<Category>(), Ok(category));
        }
        assert_eq!("atm".parse::<Category>(), Ok(Category::Atm));
        assert!("Embassy".parse::<Category>().is_err());
    }

    #[test]
    fn test_place_serializes_type_field() {
        let place = &seeded_places()[0];
        let json = serde_json::to_value(place).unwrap();
        assert_eq!(json["type"], "Hospital");
        assert!(json.get("distance").is_none());
    }

    #[test]
    fn test_seeded_ids_are_unique() {
        let places = seeded_places();
        let mut ids: Vec<_> = places.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), places.len());
    }
}
