use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Kind of trip the traveler is after.
///
/// Declaration order is the canonical order used when a set of preferences is
/// rendered into a prompt or a synthesized plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TravelPreference {
    Adventure,
    Beach,
    Cultural,
    Luxury,
    Budget,
    Family,
    Solo,
}

impl TravelPreference {
    pub const ALL: [TravelPreference; 7] = [
        TravelPreference::Adventure,
        TravelPreference::Beach,
        TravelPreference::Cultural,
        TravelPreference::Luxury,
        TravelPreference::Budget,
        TravelPreference::Family,
        TravelPreference::Solo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelPreference::Adventure => "adventure",
            TravelPreference::Beach => "beach",
            TravelPreference::Cultural => "cultural",
            TravelPreference::Luxury => "luxury",
            TravelPreference::Budget => "budget",
            TravelPreference::Family => "family",
            TravelPreference::Solo => "solo",
        }
    }

    /// Adjective used to describe a vacation of this kind ("a luxurious vacation").
    pub fn adjective(&self) -> &'static str {
        match self {
            TravelPreference::Adventure => "adventure-filled",
            TravelPreference::Beach => "beach",
            TravelPreference::Cultural => "culturally immersive",
            TravelPreference::Luxury => "luxurious",
            TravelPreference::Budget => "budget-friendly",
            TravelPreference::Family => "family",
            TravelPreference::Solo => "solo",
        }
    }
}

impl fmt::Display for TravelPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelPreference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_lowercase();
        TravelPreference::ALL
            .into_iter()
            .find(|p| p.as_str() == slug)
            .ok_or_else(|| DomainError::invalid_input(format!("unknown travel preference '{s}'")))
    }
}

/// Region of the Dominican Republic a traveler wants to visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    SantoDomingo,
    PuntaCana,
    Samana,
    PuertoPlata,
    LaRomana,
    All,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::SantoDomingo,
        Region::PuntaCana,
        Region::Samana,
        Region::PuertoPlata,
        Region::LaRomana,
        Region::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::SantoDomingo => "santo-domingo",
            Region::PuntaCana => "punta-cana",
            Region::Samana => "samana",
            Region::PuertoPlata => "puerto-plata",
            Region::LaRomana => "la-romana",
            Region::All => "all",
        }
    }

    /// Human-readable name. `None` for [`Region::All`], which has no single place name.
    pub fn display_name(&self) -> Option<&'static str> {
        match self {
            Region::SantoDomingo => Some("Santo Domingo"),
            Region::PuntaCana => Some("Punta Cana"),
            Region::Samana => Some("Samaná"),
            Region::PuertoPlata => Some("Puerto Plata"),
            Region::LaRomana => Some("La Romana"),
            Region::All => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_lowercase().replace([' ', '_'], "-");
        Region::ALL
            .into_iter()
            .find(|r| r.as_str() == slug)
            .ok_or_else(|| DomainError::invalid_input(format!("unknown region '{s}'")))
    }
}
