//! Hand-picked travel content used whenever the model leaves a field empty.
//!
//! Two sets exist: `DEFAULT_*` lists back-fill a single missing field of an
//! otherwise interpreted plan, `SYNTHESIZED_*` lists make up the body of a
//! fully synthesized plan.

pub const GENERIC_SUMMARY: &str = "Discover pristine beaches, vibrant culture and \
    adventurous activities across the Dominican Republic.";

pub const GENERIC_DETAILS: &str = "The Dominican Republic combines white-sand beaches, \
    colonial history and lush mountain scenery. Pick a region that matches your travel \
    style, book accommodations early in peak season and leave room for local food and \
    music along the way.";

pub const DEFAULT_PROS: &[&str] = &[
    "Exceptional beach quality and safety",
    "Wide range of all-inclusive family resorts",
    "Direct flights from many international destinations",
    "Generally safe environment for tourists",
];

pub const DEFAULT_CONS: &[&str] = &[
    "Limited authentic Dominican culture in resort areas",
    "Extra activities can add up beyond all-inclusive packages",
    "Beach vendors can be persistent in some areas",
    "Summer months can be very hot and humid",
];

pub const DEFAULT_PLACES: &[&str] = &[
    "Bávaro Beach",
    "Indigenous Eyes Ecological Park",
    "Isla Saona",
    "Hoyo Azul Cenote",
];

pub const DEFAULT_ACTIVITIES: &[&str] = &[
    "Catamaran sailing trip",
    "Dolphin Island excursion",
    "Chocolate making workshop",
    "Horseback riding on the beach",
];

pub const DEFAULT_ACCOMMODATIONS: &[&str] = &[
    "Barceló Bávaro Palace",
    "Dreams Punta Cana",
    "Grand Sirenis Punta Cana",
    "Nickelodeon Hotels & Resorts",
];

pub const DEFAULT_RESTAURANTS: &[&str] = &[
    "Jellyfish Restaurant",
    "Citrus Restaurant",
    "La Yola",
    "Chic Cabaret & Restaurant",
];

pub const DEFAULT_SAFETY_TIPS: &[&str] = &[
    "Stay within resort areas at night",
    "Use resort transportation for excursions",
    "Keep valuables in room safes",
    "Apply reef-safe sunscreen generously",
];

pub const SYNTHESIZED_PROS: &[&str] = &[
    "Perfect climate year-round with temperatures between 75-85°F",
    "Exceptional value across every budget level",
    "Wide variety of beach, culture and nature experiences",
    "Well-developed tourism infrastructure",
    "Rich cultural experiences and friendly locals",
];

pub const SYNTHESIZED_CONS: &[&str] = &[
    "Peak season (December-April) can be crowded and more expensive",
    "Some areas require extra safety precautions, especially at night",
    "Language barrier in less touristy areas (Spanish predominant)",
    "Occasional power outages in certain regions",
    "Persistent vendors at popular tourist spots",
];

pub const SYNTHESIZED_PLACES: &[&str] = &[
    "Colonial Zone in Santo Domingo (UNESCO World Heritage Site)",
    "Playa Rincón in Samaná (consistently rated among world's best beaches)",
    "Los Haitises National Park (unique limestone karst landscape)",
    "Isla Saona (pristine island paradise)",
    "27 Waterfalls of Damajagua (natural water slides and pools)",
];

pub const SYNTHESIZED_ACTIVITIES: &[&str] = &[
    "Whale watching in Samaná Bay (January-March)",
    "Ziplining through the jungle canopy in Puerto Plata",
    "Learning merengue and bachata dancing with locals",
    "Exploring underwater caves and coral reefs",
    "Sampling local rum and cigar production",
];

pub const SYNTHESIZED_ACCOMMODATIONS: &[&str] = &[
    "Casas del XVI (boutique hotel in restored colonial houses)",
    "Eden Roc Cap Cana (luxury seaside resort)",
    "Tubagua Eco Lodge (sustainable mountain retreat)",
    "Billini Hotel (historic luxury in Santo Domingo)",
    "Tortuga Bay Puntacana Resort (exclusive beachfront villas)",
];

pub const SYNTHESIZED_RESTAURANTS: &[&str] = &[
    "La Yola (seafood restaurant on stilts over the water)",
    "Mesón de Bari (authentic Dominican cuisine in colonial setting)",
    "Travesias (innovative fusion of local ingredients)",
    "El Conuco (traditional food with folklore show)",
    "Pat'e Palo (European Brasserie in America's first tavern)",
];

pub const SYNTHESIZED_SAFETY_TIPS: &[&str] = &[
    "Register with your embassy before traveling",
    "Use registered taxis or reputable ride-sharing services",
    "Keep valuables secured in hotel safes",
    "Stay hydrated and use reef-safe sunscreen",
    "Be cautious when withdrawing money from ATMs, especially at night",
    "Learn basic Spanish phrases for emergencies",
];

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lists_have_four_or_five_items() {
        for list in [
            DEFAULT_PROS,
            DEFAULT_CONS,
            DEFAULT_PLACES,
            DEFAULT_ACTIVITIES,
            DEFAULT_ACCOMMODATIONS,
            DEFAULT_RESTAURANTS,
            DEFAULT_SAFETY_TIPS,
        ] {
            assert!((4..=5).contains(&list.len()));
        }
    }
}
