use std::fmt;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::{
    CompletionStatus, DomainError, ProsAndCons, QueryParams, RawServiceOutput, RecommendationItem,
    Recommendations, Section, TravelPlan,
};

use super::curated_content::{self as curated, strings};
use super::section_extractor::{clean_free_text, extract_section, parse_recommendation, split_list_items};
use super::FallbackSynthesizer;

/// Which strategy produced a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpretationSource {
    Structured,
    SectionMarkers,
    Synthesized,
}

impl fmt::Display for InterpretationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InterpretationSource::Structured => "structured output",
            InterpretationSource::SectionMarkers => "section markers",
            InterpretationSource::Synthesized => "synthesized fallback",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    pub plan: TravelPlan,
    pub source: InterpretationSource,
}

/// Shape accepted from structured output. Unknown fields are ignored.
#[derive(Deserialize)]
struct WirePlan {
    summary: String,
    details: String,
    #[serde(rename = "prosAndCons", alias = "pros_and_cons")]
    pros_and_cons: WireProsAndCons,
    recommendations: WireRecommendations,
    #[serde(rename = "safetytips", alias = "safetyTips", alias = "safety_tips")]
    safety_tips: Vec<String>,
}

#[derive(Deserialize)]
struct WireProsAndCons {
    #[serde(default)]
    pros: Vec<String>,
    #[serde(default)]
    cons: Vec<String>,
}

#[derive(Deserialize)]
struct WireRecommendations {
    #[serde(default)]
    places: Vec<WireItem>,
    #[serde(default)]
    activities: Vec<WireItem>,
    #[serde(default)]
    accommodations: Vec<WireItem>,
    #[serde(default)]
    restaurants: Vec<WireItem>,
}

/// Recommendation entries arrive either as `{name, link}` objects or bare strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireItem {
    Named {
        name: String,
        #[serde(default)]
        link: Option<String>,
    },
    Plain(String),
}

impl From<WireItem> for RecommendationItem {
    fn from(item: WireItem) -> Self {
        match item {
            WireItem::Named { name, link } => RecommendationItem::new(name, link.unwrap_or_default()),
            WireItem::Plain(name) => RecommendationItem::named(name),
        }
    }
}

impl From<WirePlan> for TravelPlan {
    fn from(wire: WirePlan) -> Self {
        let convert = |items: Vec<WireItem>| -> Vec<RecommendationItem> {
            items.into_iter().map(RecommendationItem::from).collect()
        };
        TravelPlan {
            summary: wire.summary,
            details: wire.details,
            pros_and_cons: ProsAndCons {
                pros: wire.pros_and_cons.pros,
                cons: wire.pros_and_cons.cons,
            },
            recommendations: Recommendations {
                places: convert(wire.recommendations.places),
                activities: convert(wire.recommendations.activities),
                accommodations: convert(wire.recommendations.accommodations),
                restaurants: convert(wire.recommendations.restaurants),
            },
            safety_tips: wire.safety_tips,
        }
    }
}

/// Reduces raw completion output to a [`TravelPlan`].
///
/// Strategies are tried in order: structured JSON, then section markers, then
/// [`FallbackSynthesizer`]. The only error is [`DomainError::IncompleteOutput`],
/// returned when the service reports truncation and produced no text at all.
/// Whatever the path, no list field of the returned plan is empty.
pub struct ResponseInterpreter;

impl ResponseInterpreter {
    pub fn interpret(
        raw: &RawServiceOutput,
        params: &QueryParams,
    ) -> Result<Interpretation, DomainError> {
        if !raw.has_text() {
            return match raw.status() {
                CompletionStatus::Incomplete { reason } => {
                    warn!("Completion service returned no text (incomplete: {reason})");
                    Err(DomainError::incomplete_output(reason.clone()))
                }
                CompletionStatus::Refused { message } => {
                    warn!("Completion service declined the request: {message}");
                    Ok(Self::synthesized(params))
                }
                CompletionStatus::Complete => {
                    warn!("Completion service returned an empty answer");
                    Ok(Self::synthesized(params))
                }
            };
        }

        if raw.is_incomplete() {
            warn!("Completion output is truncated; interpreting the partial text");
        }

        let text = raw.content();
        debug!("Raw completion output: {text}");

        match Self::parse_structured(text) {
            Ok(mut plan) => {
                Self::fill_missing(&mut plan);
                info!("Interpreted response via {}", InterpretationSource::Structured);
                return Ok(Interpretation {
                    plan,
                    source: InterpretationSource::Structured,
                });
            }
            Err(e) => debug!("Structured parse failed, trying section markers: {e}"),
        }

        if let Some(plan) = Self::parse_sections(text) {
            info!("Interpreted response via {}", InterpretationSource::SectionMarkers);
            return Ok(Interpretation {
                plan,
                source: InterpretationSource::SectionMarkers,
            });
        }

        warn!("No interpretation strategy matched the response; synthesizing a plan");
        Ok(Self::synthesized(params))
    }

    /// Strategy 1: the text is, or contains, a JSON travel plan.
    pub fn parse_structured(text: &str) -> Result<TravelPlan, DomainError> {
        let mut last_error = DomainError::malformed_output("no JSON object in response");

        for candidate in json_candidates(text) {
            match serde_json::from_str::<WirePlan>(candidate) {
                Ok(wire) => return Ok(wire.into()),
                Err(e) => last_error = DomainError::malformed_output(e.to_string()),
            }
        }

        Err(last_error)
    }

    /// Strategy 2: labelled sections in prose. `None` when no section has content.
    pub fn parse_sections(text: &str) -> Option<TravelPlan> {
        let usable = Section::ORDERED
            .iter()
            .filter_map(|s| extract_section(text, *s))
            .any(|raw| !clean_free_text(raw).is_empty());
        if !usable {
            return None;
        }

        let free_text = |section: Section| {
            extract_section(text, section)
                .map(clean_free_text)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let list = |section: Section| {
            extract_section(text, section)
                .map(split_list_items)
                .unwrap_or_default()
        };
        let items = |section: Section| -> Vec<RecommendationItem> {
            list(section)
                .iter()
                .map(|line| parse_recommendation(line))
                .collect()
        };

        for section in Section::ORDERED {
            if extract_section(text, section).is_none() {
                debug!("Section '{}' not found in response", section.title());
            }
        }

        let mut plan = TravelPlan {
            summary: free_text(Section::Summary).unwrap_or_default(),
            details: free_text(Section::Details).unwrap_or_default(),
            pros_and_cons: ProsAndCons {
                pros: list(Section::Pros),
                cons: list(Section::Cons),
            },
            recommendations: Recommendations {
                places: items(Section::PlacesToVisit),
                activities: items(Section::Activities),
                accommodations: items(Section::Accommodations),
                restaurants: items(Section::Restaurants),
            },
            safety_tips: list(Section::SafetyTips),
        };
        Self::fill_missing(&mut plan);
        Some(plan)
    }

    /// Replaces every empty field with its curated default, independently.
    pub fn fill_missing(plan: &mut TravelPlan) {
        let mut filled = Vec::new();

        if plan.summary.trim().is_empty() {
            plan.summary = curated::GENERIC_SUMMARY.to_string();
            filled.push(Section::Summary);
        }
        if plan.details.trim().is_empty() {
            plan.details = curated::GENERIC_DETAILS.to_string();
            filled.push(Section::Details);
        }

        let string_fields = [
            (&mut plan.pros_and_cons.pros, curated::DEFAULT_PROS, Section::Pros),
            (&mut plan.pros_and_cons.cons, curated::DEFAULT_CONS, Section::Cons),
            (&mut plan.safety_tips, curated::DEFAULT_SAFETY_TIPS, Section::SafetyTips),
        ];
        for (field, defaults, section) in string_fields {
            field.retain(|s| !s.trim().is_empty());
            if field.is_empty() {
                *field = strings(defaults);
                filled.push(section);
            }
        }

        let item_fields = [
            (&mut plan.recommendations.places, curated::DEFAULT_PLACES, Section::PlacesToVisit),
            (&mut plan.recommendations.activities, curated::DEFAULT_ACTIVITIES, Section::Activities),
            (
                &mut plan.recommendations.accommodations,
                curated::DEFAULT_ACCOMMODATIONS,
                Section::Accommodations,
            ),
            (&mut plan.recommendations.restaurants, curated::DEFAULT_RESTAURANTS, Section::Restaurants),
        ];
        for (field, defaults, section) in item_fields {
            field.retain(|item| !item.name.trim().is_empty());
            if field.is_empty() {
                *field = defaults.iter().map(|n| RecommendationItem::named(*n)).collect();
                filled.push(section);
            }
        }

        if !filled.is_empty() {
            let names: Vec<_> = filled.iter().map(|s| s.title()).collect();
            debug!("Filled missing fields with defaults: {}", names.join(", "));
        }
    }

    fn synthesized(params: &QueryParams) -> Interpretation {
        Interpretation {
            plan: FallbackSynthesizer::synthesize(params),
            source: InterpretationSource::Synthesized,
        }
    }
}

/// Places a JSON object may hide in: the whole text, a fenced block, or the
/// outermost brace span.
fn json_candidates(text: &str) -> Vec<&str> {
    let trimmed = text.trim();
    let mut candidates = vec![trimmed];

    if let Some(fenced) = strip_code_fence(trimmed) {
        candidates.push(fenced);
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            let span = &trimmed[start..=end];
            if span != trimmed {
                candidates.push(span);
            }
        }
    }

    candidates
}

fn strip_code_fence(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let after_open = &text[start + 3..];
    let body_start = after_open.find('\n')? + 1;
    let body = &after_open[body_start..];
    let end = body.find("```")?;
    Some(body[..end].trim())
}
