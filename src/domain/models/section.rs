/// Output sections requested from the model, in the order they must appear.
///
/// The labels are shared by the prompt builder and the section-marker
/// extractor; a label change here changes both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Summary,
    Details,
    Pros,
    Cons,
    PlacesToVisit,
    Activities,
    Accommodations,
    Restaurants,
    SafetyTips,
}

impl Section {
    pub const ORDERED: [Section; 9] = [
        Section::Summary,
        Section::Details,
        Section::Pros,
        Section::Cons,
        Section::PlacesToVisit,
        Section::Activities,
        Section::Accommodations,
        Section::Restaurants,
        Section::SafetyTips,
    ];

    /// Literal marker the model is asked to print, colon included.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Summary => "Summary:",
            Section::Details => "Details:",
            Section::Pros => "Pros:",
            Section::Cons => "Cons:",
            Section::PlacesToVisit => "Places to Visit:",
            Section::Activities => "Activities:",
            Section::Accommodations => "Accommodations:",
            Section::Restaurants => "Restaurants:",
            Section::SafetyTips => "Safety Tips:",
        }
    }

    /// Label without the trailing colon, for prose.
    pub fn title(&self) -> &'static str {
        self.label().trim_end_matches(':')
    }

    pub fn is_list(&self) -> bool {
        !matches!(self, Section::Summary | Section::Details)
    }

    pub fn position(&self) -> usize {
        Section::ORDERED
            .iter()
            .position(|s| s == self)
            .unwrap_or(Section::ORDERED.len())
    }

    /// Sections after this one, nearest first.
    pub fn following(&self) -> &'static [Section] {
        let start = (self.position() + 1).min(Section::ORDERED.len());
        &Section::ORDERED[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_end_with_colon() {
        for section in Section::ORDERED {
            assert!(section.label().ends_with(':'));
        }
    }

    #[test]
    fn following_starts_with_next_section() {
        assert_eq!(Section::Pros.following()[0], Section::Cons);
        assert_eq!(Section::Summary.following().len(), 8);
        assert!(Section::SafetyTips.following().is_empty());
    }

    #[test]
    fn only_summary_and_details_are_free_text() {
        let free: Vec<_> = Section::ORDERED.iter().filter(|s| !s.is_list()).collect();
        assert_eq!(free, vec![&Section::Summary, &Section::Details]);
    }
}
