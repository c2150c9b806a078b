//! Recovers index metadata from a rendered recipe page.
//!
//! Every field is best-effort. When a pattern finds nothing the field takes its
//! default: `easy` difficulty, `30 mins`, 4 servings, `["other"]` categories.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::recipe::{self, Difficulty, DEFAULT_SERVINGS};

use super::IndexEntry;

pub const DEFAULT_TIME: &str = "30 mins";
pub const FALLBACK_CATEGORY: &str = "other";

/// Keyword lists used to guess categories for pages without category tags.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "breakfast",
        &["breakfast", "pancake", "waffle", "omelette", "egg", "muffin", "cereal"],
    ),
    ("lunch", &["lunch", "sandwich", "wrap", "salad"]),
    (
        "dinner",
        &["dinner", "supper", "entrée", "entree", "main course", "main dish"],
    ),
    ("dessert", &["dessert", "cake", "cookie", "pie", "ice cream", "sweet"]),
    ("snack", &["snack", "appetizer", "finger food"]),
    ("vegetarian", &["vegetarian", "veggie", "no meat"]),
    ("vegan", &["vegan", "plant-based", "no animal products"]),
];

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("Invalid selector")
}

static STATUS_META: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[name="recipe-status"]"#));
static DESCRIPTION_META: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[name="description"]"#));
static CATEGORY_META: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[name="recipe-category"]"#));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static CLASSED: LazyLock<Selector> = LazyLock::new(|| selector("[class]"));

static TIME_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:prep|cook|total)\b.*\btime\b").expect("regex for time labels")
});
static TIME_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\d+\s*(?:minute|min|hour|hr|second|sec)s?(?:\s+\d+\s*(?:minute|min|hour|hr|second|sec)s?)?",
    )
    .expect("regex for time values")
});
static SERVINGS_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:serves|servings)\b").expect("regex for servings labels")
});
static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("regex for integers"));

/// Knobs for reading pages back.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Stripped from the end of `<title>`, e.g. `" - My Recipes"`.
    pub title_suffix: Option<String>,
}

impl ExtractOptions {
    pub fn for_site(site_name: &str) -> Self {
        Self {
            title_suffix: Some(format!(" - {site_name}")),
        }
    }
}

/// Extract the index entry for the page stored as `<stem>.html`.
///
/// Returns `None` unless the page carries `<meta name="recipe-status"
/// content="live">` (case-insensitive).
pub fn extract_metadata(html: &str, stem: &str, opts: &ExtractOptions) -> Option<IndexEntry> {
    let doc = Html::parse_document(html);

    if !is_live(&doc) {
        return None;
    }

    let title = extract_title(&doc, stem, opts);
    let categories = extract_categories(&doc, &title, &visible_text(&doc));

    Some(IndexEntry {
        id: stem.to_string(),
        description: meta_content(&doc, &DESCRIPTION_META).unwrap_or_default(),
        difficulty: extract_difficulty(&doc).to_string(),
        time: labelled_value(&doc, &TIME_LABEL, &TIME_VALUE)
            .unwrap_or_else(|| DEFAULT_TIME.to_string()),
        servings: labelled_value(&doc, &SERVINGS_LABEL, &INTEGER)
            .and_then(|n| n.parse().ok())
            .unwrap_or(DEFAULT_SERVINGS),
        title,
        categories,
        display: true,
    })
}

fn is_live(doc: &Html) -> bool {
    doc.select(&STATUS_META)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .is_some_and(|status| status.trim().eq_ignore_ascii_case("live"))
}

fn meta_content(doc: &Html, sel: &Selector) -> Option<String> {
    doc.select(sel)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .map(String::from)
}

fn extract_title(doc: &Html, stem: &str, opts: &ExtractOptions) -> String {
    let from_page = doc.select(&TITLE).next().map(|el| {
        let text: String = el.text().collect();
        let text = text.trim();
        match opts.title_suffix.as_deref() {
            Some(suffix) => text.strip_suffix(suffix).unwrap_or(text).trim().to_string(),
            None => text.to_string(),
        }
    });
    match from_page {
        Some(title) if !title.is_empty() => title,
        _ => recipe::title_from_stem(stem),
    }
}

/// First `difficulty-<value>` class naming a known difficulty.
fn extract_difficulty(doc: &Html) -> Difficulty {
    doc.select(&CLASSED)
        .flat_map(|el| el.value().classes())
        .find_map(|class| class.strip_prefix("difficulty-")?.parse().ok())
        .unwrap_or_default()
}

fn extract_categories(doc: &Html, title: &str, texts: &[&str]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for meta in doc.select(&CATEGORY_META) {
        let category = meta
            .value()
            .attr("content")
            .unwrap_or("")
            .trim()
            .to_lowercase();
        if !category.is_empty() && !categories.contains(&category) {
            categories.push(category);
        }
    }

    if categories.is_empty() {
        let mut page_text = title.to_lowercase();
        for text in texts {
            page_text.push(' ');
            page_text.push_str(&text.to_lowercase());
        }
        categories = guess_categories(&page_text);
    }

    if categories.is_empty() {
        categories.push(FALLBACK_CATEGORY.to_string());
    }
    categories
}

/// Categories whose keywords occur anywhere in `text` (already lowercased).
pub fn guess_categories(text: &str) -> Vec<String> {
    CATEGORY_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(category, _)| category.to_string())
        .collect()
}

/// Elements whose text is never part of the page body.
const HIDDEN: [&str; 4] = ["head", "title", "script", "style"];

/// Body text nodes, skipping `<head>`, `<script>` and `<style>` content.
fn visible_text(doc: &Html) -> Vec<&str> {
    doc.root_element()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|el| HIDDEN.contains(&el.value().name()));
            (!hidden).then_some(&**text)
        })
        .collect()
}

/// Find a text node matching `label` and read `value` from what follows it:
/// first the rest of that node, then (when the label stands alone, as in
/// `<strong>Serves:</strong> 4`) its following siblings and those of its
/// parent element. Labels used inside a sentence with no value after them
/// are skipped and the search moves on to the next one.
fn labelled_value(doc: &Html, label: &Regex, value: &Regex) -> Option<String> {
    for node in doc.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|el| HIDDEN.contains(&el.value().name()));
        if hidden {
            continue;
        }
        let text: &str = text;
        let Some(found) = label.find(text) else {
            continue;
        };

        let rest = &text[found.end()..];
        if let Some(v) = value.find(rest) {
            return Some(v.as_str().to_string());
        }
        if !rest
            .chars()
            .all(|c| c.is_whitespace() || c.is_ascii_punctuation())
        {
            continue;
        }

        let mut following = String::new();
        let siblings = node
            .next_siblings()
            .chain(node.parent().into_iter().flat_map(|p| p.next_siblings()));
        for sibling in siblings {
            if let Some(t) = sibling.value().as_text() {
                following.push_str(t);
            } else if let Some(el) = ElementRef::wrap(sibling) {
                following.extend(el.text());
            }
            following.push(' ');
        }
        if let Some(v) = value.find(&following) {
            return Some(v.as_str().to_string());
        }
    }
    None
}
