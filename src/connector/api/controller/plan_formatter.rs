use crate::domain::{RecommendationItem, Section, TravelPlan};

pub fn format_plan(plan: &TravelPlan) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n{}\n", plan.summary, "=".repeat(plan.summary.chars().count().min(72))));
    if !plan.details.is_empty() {
        output.push_str(&format!("\n{}\n", plan.details));
    }

    push_list(&mut output, Section::Pros, &plan.pros_and_cons.pros);
    push_list(&mut output, Section::Cons, &plan.pros_and_cons.cons);

    let recs = &plan.recommendations;
    push_items(&mut output, Section::PlacesToVisit, &recs.places);
    push_items(&mut output, Section::Activities, &recs.activities);
    push_items(&mut output, Section::Accommodations, &recs.accommodations);
    push_items(&mut output, Section::Restaurants, &recs.restaurants);

    push_list(&mut output, Section::SafetyTips, &plan.safety_tips);

    output.trim_end().to_string()
}

fn push_list(output: &mut String, section: Section, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    output.push_str(&format!("\n{}\n", section.label()));
    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, entry));
    }
}

fn push_items(output: &mut String, section: Section, items: &[RecommendationItem]) {
    if items.is_empty() {
        return;
    }
    output.push_str(&format!("\n{}\n", section.label()));
    for (i, item) in items.iter().enumerate() {
        if item.has_link() {
            output.push_str(&format!("  {}. {} <{}>\n", i + 1, item.name, item.link));
        } else {
            output.push_str(&format!("  {}. {}\n", i + 1, item.name));
        }
    }
}
