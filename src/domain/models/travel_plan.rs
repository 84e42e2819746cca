use serde::{Deserialize, Serialize};

/// A single named recommendation with an optional web link.
///
/// `link` is empty when no URL is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub name: String,
    #[serde(default)]
    pub link: String,
}

impl RecommendationItem {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }

    pub fn has_link(&self) -> bool {
        !self.link.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProsAndCons {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Recommendations {
    pub places: Vec<RecommendationItem>,
    pub activities: Vec<RecommendationItem>,
    pub accommodations: Vec<RecommendationItem>,
    pub restaurants: Vec<RecommendationItem>,
}

impl Recommendations {
    pub fn total(&self) -> usize {
        self.places.len() + self.activities.len() + self.accommodations.len() + self.restaurants.len()
    }
}

/// Canonical structured travel recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TravelPlan {
    pub summary: String,
    pub details: String,
    #[serde(rename = "prosAndCons")]
    pub pros_and_cons: ProsAndCons,
    pub recommendations: Recommendations,
    #[serde(rename = "safetytips", alias = "safetyTips", alias = "safety_tips")]
    pub safety_tips: Vec<String>,
}

impl TravelPlan {
    /// True when no recommendation category and no safety tip list is empty.
    pub fn is_complete(&self) -> bool {
        !self.pros_and_cons.pros.is_empty()
            && !self.pros_and_cons.cons.is_empty()
            && !self.recommendations.places.is_empty()
            && !self.recommendations.activities.is_empty()
            && !self.recommendations.accommodations.is_empty()
            && !self.recommendations.restaurants.is_empty()
            && !self.safety_tips.is_empty()
    }
}
