use std::collections::BTreeSet;
use std::str::FromStr;

use tracing::warn;

use crate::domain::{QueryParams, Region, TravelPreference};

/// Values a UI sends when nothing was really picked.
const PLACEHOLDERS: &[&str] = &["null", "none", "undefined", "any"];

/// Raw selection state as collected from a form or command line.
#[derive(Debug, Clone, Default)]
pub struct RawSelections {
    pub query: Option<String>,
    pub preferences: Vec<Option<String>>,
    pub regions: Vec<Option<String>>,
    pub budget: Option<String>,
    pub companions: Option<String>,
}

impl RawSelections {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn with_preferences<I, S>(mut self, preferences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferences = preferences.into_iter().map(|p| Some(p.into())).collect();
        self
    }

    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = regions.into_iter().map(|r| Some(r.into())).collect();
        self
    }

    pub fn with_budget(mut self, budget: impl Into<String>) -> Self {
        self.budget = Some(budget.into());
        self
    }

    pub fn with_companions(mut self, companions: impl Into<String>) -> Self {
        self.companions = Some(companions.into());
        self
    }
}

/// Turns raw selections into canonical [`QueryParams`].
///
/// Never fails: blank, placeholder and unrecognised entries are dropped, and
/// unset optional fields stay `None` rather than becoming empty strings.
pub struct ParamNormalizer;

impl ParamNormalizer {
    pub fn normalize(raw: &RawSelections) -> QueryParams {
        let query = raw.query.as_deref().map(str::trim).unwrap_or_default();

        let preferences: BTreeSet<TravelPreference> =
            Self::parse_tags(&raw.preferences, "preference");
        let mut regions: BTreeSet<Region> = Self::parse_tags(&raw.regions, "region");
        if regions.contains(&Region::All) {
            regions = BTreeSet::from([Region::All]);
        }

        let mut params = QueryParams::new(query)
            .with_preferences(preferences)
            .with_regions(regions);

        if let Some(budget) = Self::clean(raw.budget.as_deref()) {
            params = params.with_budget(budget);
        }
        if let Some(companions) = Self::clean(raw.companions.as_deref()) {
            params = params.with_companions(companions);
        }

        params
    }

    fn parse_tags<T>(values: &[Option<String>], kind: &str) -> BTreeSet<T>
    where
        T: FromStr + Ord,
    {
        values
            .iter()
            .filter_map(|v| Self::clean(v.as_deref()))
            .filter_map(|v| match v.parse::<T>() {
                Ok(tag) => Some(tag),
                Err(_) => {
                    warn!("Ignoring unknown {kind} '{v}'");
                    None
                }
            })
            .collect()
    }

    fn clean(value: Option<&str>) -> Option<&str> {
        let trimmed = value?.trim();
        if trimmed.is_empty() || PLACEHOLDERS.contains(&trimmed.to_lowercase().as_str()) {
            None
        } else {
            Some(trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_placeholders_and_duplicates() {
        let raw = RawSelections {
            query: Some("  beaches with calm water ".to_string()),
            preferences: vec![
                Some("beach".to_string()),
                None,
                Some("null".to_string()),
                Some("Beach".to_string()),
                Some("family".to_string()),
            ],
            regions: vec![Some("punta-cana".to_string()), Some("".to_string())],
            budget: Some("   ".to_string()),
            companions: Some("none".to_string()),
        };

        let params = ParamNormalizer::normalize(&raw);

        assert_eq!(params.query(), "beaches with calm water");
        assert_eq!(
            params.preferences().iter().copied().collect::<Vec<_>>(),
            vec![TravelPreference::Beach, TravelPreference::Family]
        );
        assert_eq!(params.regions().len(), 1);
        assert_eq!(params.budget(), None);
        assert_eq!(params.companions(), None);
    }

    #[test]
    fn unknown_tags_are_dropped() {
        let raw = RawSelections::new("x")
            .with_preferences(["spa", "solo"])
            .with_regions(["atlantis"]);
        let params = ParamNormalizer::normalize(&raw);
        assert_eq!(params.preferences().len(), 1);
        assert!(params.regions().is_empty());
    }

    #[test]
    fn all_region_absorbs_specific_regions() {
        let raw = RawSelections::new("x").with_regions(["samana", "all", "la-romana"]);
        let params = ParamNormalizer::normalize(&raw);
        assert_eq!(
            params.regions().iter().copied().collect::<Vec<_>>(),
            vec![Region::All]
        );
    }

    #[test]
    fn optional_fields_are_trimmed_not_lowercased() {
        let raw = RawSelections::new("")
            .with_budget(" Luxury ")
            .with_companions("My Partner");
        let params = ParamNormalizer::normalize(&raw);
        assert_eq!(params.budget(), Some("Luxury"));
        assert_eq!(params.companions(), Some("My Partner"));
    }

    #[test]
    fn missing_query_becomes_empty_string() {
        let raw = RawSelections {
            budget: Some("budget".to_string()),
            ..RawSelections::default()
        };
        let params = ParamNormalizer::normalize(&raw);
        assert_eq!(params.query(), "");
        assert!(params.has_criteria());
    }
}
