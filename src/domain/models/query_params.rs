use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Region, TravelPreference};

/// Canonical parameters for one travel research request.
///
/// Preferences and regions are sets ordered by declaration, so two selections
/// that differ only in click order compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryParams {
    query: String,
    preferences: BTreeSet<TravelPreference>,
    regions: BTreeSet<Region>,
    budget: Option<String>,
    companions: Option<String>,
}

impl QueryParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_preferences(mut self, preferences: impl IntoIterator<Item = TravelPreference>) -> Self {
        self.preferences = preferences.into_iter().collect();
        self
    }

    pub fn with_regions(mut self, regions: impl IntoIterator<Item = Region>) -> Self {
        self.regions = regions.into_iter().collect();
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

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn preferences(&self) -> &BTreeSet<TravelPreference> {
        &self.preferences
    }

    pub fn regions(&self) -> &BTreeSet<Region> {
        &self.regions
    }

    pub fn budget(&self) -> Option<&str> {
        self.budget.as_deref()
    }

    pub fn companions(&self) -> Option<&str> {
        self.companions.as_deref()
    }

    /// True when at least one field would contribute to a prompt.
    pub fn has_criteria(&self) -> bool {
        !self.query.trim().is_empty()
            || !self.preferences.is_empty()
            || !self.regions.is_empty()
            || self.budget.is_some()
            || self.companions.is_some()
    }

    /// Whether the traveler left the region open (nothing picked, or "all").
    pub fn covers_whole_country(&self) -> bool {
        self.regions.is_empty() || self.regions.contains(&Region::All)
    }

    pub fn summary(&self) -> String {
        let mut parts = vec![format!("query=\"{}\"", self.query)];

        if !self.preferences.is_empty() {
            let prefs: Vec<_> = self.preferences.iter().map(|p| p.as_str()).collect();
            parts.push(format!("preferences={prefs:?}"));
        }
        if !self.regions.is_empty() {
            let regions: Vec<_> = self.regions.iter().map(|r| r.as_str()).collect();
            parts.push(format!("regions={regions:?}"));
        }
        if let Some(ref budget) = self.budget {
            parts.push(format!("budget={budget}"));
        }
        if let Some(ref companions) = self.companions {
            parts.push(format!("companions={companions}"));
        }

        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_order_does_not_matter() {
        let a = QueryParams::new("")
            .with_preferences([TravelPreference::Family, TravelPreference::Beach]);
        let b = QueryParams::new("")
            .with_preferences([TravelPreference::Beach, TravelPreference::Family]);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_params_have_no_criteria() {
        assert!(!QueryParams::new("   ").has_criteria());
        assert!(QueryParams::new("").with_budget("luxury").has_criteria());
        assert!(QueryParams::new("where to surf?").has_criteria());
    }

    #[test]
    fn whole_country_when_regions_open() {
        assert!(QueryParams::new("x").covers_whole_country());
        assert!(QueryParams::new("x")
            .with_regions([Region::All, Region::Samana])
            .covers_whole_country());
        assert!(!QueryParams::new("x")
            .with_regions([Region::Samana])
            .covers_whole_country());
    }

    #[test]
    fn summary_lists_set_fields_only() {
        let params = QueryParams::new("beaches")
            .with_regions([Region::PuntaCana])
            .with_companions("couple");
        let summary = params.summary();
        assert!(summary.contains("query=\"beaches\""));
        assert!(summary.contains("punta-cana"));
        assert!(summary.contains("companions=couple"));
        assert!(!summary.contains("budget"));
    }
}
