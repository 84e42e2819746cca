use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::{QueryParams, Section};

/// Destination every prompt is framed around.
pub const DESTINATION: &str = "the Dominican Republic";

/// Name attached to the structured-output schema.
pub const SCHEMA_NAME: &str = "travel_plan";

const SYSTEM_PROMPT: &str = "\
You are an expert travel advisor for the Dominican Republic. You give practical, \
specific and safety-conscious recommendations for real places, activities, \
accommodations and restaurants. Never invent links: leave a link empty when you \
do not know the official URL.";

/// Expected number of entries in every list field.
const LIST_CARDINALITY: &str = "4-6";

/// The system and user turns sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchPrompt {
    pub system: String,
    pub user: String,
}

pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(params: &QueryParams) -> ResearchPrompt {
        ResearchPrompt {
            system: SYSTEM_PROMPT.to_string(),
            user: Self::user_prompt(params),
        }
    }

    pub fn user_prompt(params: &QueryParams) -> String {
        let mut prompt = format!(
            "As an expert travel advisor for {DESTINATION}, I need a comprehensive travel plan \
             based on the following criteria:\n\n"
        );

        if !params.query().is_empty() {
            prompt.push_str(&format!("User query: {}\n\n", params.query()));
        }

        if !params.preferences().is_empty() {
            let prefs: Vec<_> = params.preferences().iter().map(|p| p.as_str()).collect();
            prompt.push_str(&format!("Travel preferences: {}\n", prefs.join(", ")));
        }

        if !params.regions().is_empty() {
            let regions: Vec<_> = params
                .regions()
                .iter()
                .map(|r| r.display_name().unwrap_or("All regions"))
                .collect();
            prompt.push_str(&format!("Regions of interest: {}\n", regions.join(", ")));
        }

        if let Some(budget) = params.budget() {
            prompt.push_str(&format!("Budget range: {budget}\n"));
        }

        if let Some(companions) = params.companions() {
            prompt.push_str(&format!("Traveling with: {companions}\n"));
        }

        prompt.push('\n');
        prompt.push_str(&Self::closing_directive());
        prompt
    }

    /// Fixed instructions naming every output section and the JSON shape.
    pub fn closing_directive() -> String {
        let mut out = String::from(
            "Please provide a comprehensive travel plan with the following sections, \
             in this exact order:\n",
        );
        for section in Section::ORDERED {
            out.push_str(&format!("{} {}\n", section.label(), Self::section_hint(section)));
        }

        out.push_str(
            "\nRespond with a single JSON object with these fields:\n\
             - summary: string\n\
             - details: string\n",
        );
        out.push_str(&format!(
            "- prosAndCons: object {{ pros: [string], cons: [string] }}, {LIST_CARDINALITY} items each\n\
             - recommendations: object {{ places, activities, accommodations, restaurants }}, \
             each an array of {LIST_CARDINALITY} objects {{ name: string, link: string (URI) }}\n\
             - safetytips: [string], {LIST_CARDINALITY} items\n"
        ));
        out.push_str(
            "\nIf you cannot produce JSON, answer in plain text instead and start every \
             section with its label exactly as written above, one list item per line.",
        );
        out
    }

    fn section_hint(section: Section) -> String {
        match section {
            Section::Summary => "a concise summary (2-3 sentences)".to_string(),
            Section::Details => "a detailed explanation of the recommendation".to_string(),
            Section::Pros => format!("{LIST_CARDINALITY} advantages of this travel plan"),
            Section::Cons => format!("{LIST_CARDINALITY} drawbacks of this travel plan"),
            Section::PlacesToVisit => format!("{LIST_CARDINALITY} specific places to visit"),
            Section::Activities => format!("{LIST_CARDINALITY} activities to do"),
            Section::Accommodations => format!("{LIST_CARDINALITY} places to stay"),
            Section::Restaurants => format!("{LIST_CARDINALITY} restaurants"),
            Section::SafetyTips => {
                format!("{LIST_CARDINALITY} safety tips relevant to this travel plan")
            }
        }
    }

    /// JSON schema for structured output, strict-mode compatible.
    pub fn response_schema() -> Value {
        let string_list = json!({ "type": "array", "items": { "type": "string" } });
        let item_list = json!({
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "link": { "type": "string", "format": "uri" }
                },
                "required": ["name", "link"],
                "additionalProperties": false
            }
        });

        json!({
            "type": "object",
            "properties": {
                "summary": { "type": "string" },
                "details": { "type": "string" },
                "prosAndCons": {
                    "type": "object",
                    "properties": {
                        "pros": string_list,
                        "cons": string_list
                    },
                    "required": ["pros", "cons"],
                    "additionalProperties": false
                },
                "recommendations": {
                    "type": "object",
                    "properties": {
                        "places": item_list,
                        "activities": item_list,
                        "accommodations": item_list,
                        "restaurants": item_list
                    },
                    "required": ["places", "activities", "accommodations", "restaurants"],
                    "additionalProperties": false
                },
                "safetytips": string_list
            },
            "required": ["summary", "details", "prosAndCons", "recommendations", "safetytips"],
            "additionalProperties": false
        })
    }
}
