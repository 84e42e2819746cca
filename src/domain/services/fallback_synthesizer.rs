use crate::domain::{
    ProsAndCons, QueryParams, RecommendationItem, Recommendations, TravelPlan, DESTINATION,
};

use super::curated_content::{self as curated, strings};

const DEFAULT_BUDGET: &str = "mid-range";
const DEFAULT_TRAVEL_TYPE: &str = "vacation";
const DEFAULT_COMPANIONS: &str = "travelers";

/// Builds a plan tailored to the request without any model output.
///
/// Pure and deterministic: equal params always give an equal plan.
pub struct FallbackSynthesizer;

impl FallbackSynthesizer {
    pub fn synthesize(params: &QueryParams) -> TravelPlan {
        let region = Self::region_descriptor(params);
        let budget = Self::budget_descriptor(params);
        let travel_type = Self::travel_type_descriptor(params);
        let companions = Self::companion_descriptor(params);

        TravelPlan {
            summary: format!(
                "Discover the perfect {travel_type} in {region} with a {budget} budget, \
                 ideal for {companions}."
            ),
            details: format!(
                "{region} offers an exceptional destination for a {travel_type}. With its \
                 stunning natural beauty, rich history, and vibrant culture, you'll find plenty \
                 to enjoy regardless of your travel style. The {budget} price point allows for \
                 comfortable accommodations and authentic experiences without breaking the \
                 bank. For {companions}, this destination provides the right balance of \
                 activities, relaxation, and local immersion."
            ),
            pros_and_cons: ProsAndCons {
                pros: strings(curated::SYNTHESIZED_PROS),
                cons: strings(curated::SYNTHESIZED_CONS),
            },
            recommendations: Recommendations {
                places: items(curated::SYNTHESIZED_PLACES),
                activities: items(curated::SYNTHESIZED_ACTIVITIES),
                accommodations: items(curated::SYNTHESIZED_ACCOMMODATIONS),
                restaurants: items(curated::SYNTHESIZED_RESTAURANTS),
            },
            safety_tips: strings(curated::SYNTHESIZED_SAFETY_TIPS),
        }
    }

    fn region_descriptor(params: &QueryParams) -> String {
        if params.covers_whole_country() {
            return DESTINATION.to_string();
        }
        params
            .regions()
            .iter()
            .map(|r| r.display_name().unwrap_or(r.as_str()))
            .collect::<Vec<_>>()
            .join(" and ")
    }

    fn budget_descriptor(params: &QueryParams) -> String {
        params
            .budget()
            .map(str::to_lowercase)
            .unwrap_or_else(|| DEFAULT_BUDGET.to_string())
    }

    fn travel_type_descriptor(params: &QueryParams) -> String {
        if params.preferences().is_empty() {
            return DEFAULT_TRAVEL_TYPE.to_string();
        }
        let adjectives: Vec<_> = params.preferences().iter().map(|p| p.adjective()).collect();
        format!("{} {DEFAULT_TRAVEL_TYPE}", adjectives.join(" and "))
    }

    fn companion_descriptor(params: &QueryParams) -> String {
        params
            .companions()
            .map(str::to_lowercase)
            .unwrap_or_else(|| DEFAULT_COMPANIONS.to_string())
    }
}

fn items(names: &[&str]) -> Vec<RecommendationItem> {
    names.iter().map(|n| RecommendationItem::named(*n)).collect()
}
