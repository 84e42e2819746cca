//! Plain-text extraction of labelled sections from unstructured model output.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{RecommendationItem, Section};

/// One leading list marker: `1.`, `2)`, `[3]`, `(4)`, or a bullet glyph.
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+[.)](?:\s+|$)|\[\d+\]\s*|\(\d+\)\s*|[-•◦▪‣–—*+]\s*)")
        .expect("list marker pattern is valid")
});

static MARKDOWN_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\((https?://[^)\s]+)\)").expect("markdown link pattern is valid")
});

static BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s)\]>]+").expect("url pattern is valid"));

/// Characters left dangling around a name once its URL is cut out.
const NAME_SEPARATORS: &[char] = &[' ', '-', '–', '—', ':', '|', '(', ')', '<', '>', ','];

/// Raw text of `section`, or `None` when its label never appears.
///
/// The text runs from the end of the section's label to the label of the next
/// section in [`Section::ORDERED`]. When that label is missing the nearest later
/// label found is used instead; the last section runs to the end of the text.
pub fn extract_section(text: &str, section: Section) -> Option<&str> {
    let (_, start) = locate_label(text, section.label())?;
    let rest = &text[start..];

    let end = match section.following().split_first() {
        Some((next, later)) => locate_label(rest, next.label())
            .or_else(|| {
                later
                    .iter()
                    .filter_map(|s| locate_label(rest, s.label()))
                    .min()
            })
            .map(|(line_start, _)| line_start),
        None => None,
    };

    Some(rest[..end.unwrap_or(rest.len())].trim())
}

/// Where `label` sits in `text`, as (start of its line, end of the label).
///
/// A label opening a line, after optional whitespace, `*` or `#`, wins over
/// one buried in running text, so `Pros and Cons:` never reads as `Cons:`.
fn locate_label(text: &str, label: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let body = line.trim_start_matches(|c: char| c.is_whitespace() || c == '*' || c == '#');
        if body.starts_with(label) {
            let at = offset + (line.len() - body.len());
            return Some((offset, at + label.len()));
        }
        offset += line.len();
    }

    text.find(label).map(|at| (at, at + label.len()))
}

/// Splits a list section into items, in order.
///
/// Blank lines are skipped, markdown bold markers are dropped, one leading list
/// marker is removed, and lines without any letter or digit are discarded.
pub fn split_list_items(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let unbolded = line.replace("**", "");
            LIST_MARKER.replace(unbolded.trim(), "").trim().to_string()
        })
        .filter(|item| item.chars().any(char::is_alphanumeric))
        .collect()
}

/// Turns one list line into a named item, lifting out a URL if there is one.
pub fn parse_recommendation(line: &str) -> RecommendationItem {
    if let Some(caps) = MARKDOWN_LINK.captures(line) {
        let link = caps[2].to_string();
        let name = MARKDOWN_LINK.replace(line, "$1");
        return RecommendationItem::new(tidy_name(&name, &link), link);
    }

    if let Some(found) = BARE_URL.find(line) {
        let link = found.as_str().trim_end_matches(['.', ',']).to_string();
        let name = format!("{}{}", &line[..found.start()], &line[found.end()..]);
        return RecommendationItem::new(tidy_name(&name, &link), link);
    }

    RecommendationItem::named(line.trim())
}

/// Trims whitespace and markdown emphasis/heading residue from free text.
pub fn clean_free_text(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '*' || c == '#')
}

fn tidy_name(name: &str, link: &str) -> String {
    let name = name.replace("()", "");
    let name = name.trim_matches(NAME_SEPARATORS);
    if name.is_empty() {
        link.to_string()
    } else {
        name.to_string()
    }
}
