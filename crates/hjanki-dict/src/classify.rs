use hjanki_types::HomographCandidate;
use percent_encoding::percent_decode_str;
use scraper::Html;

use crate::dom;

/// What a lookup page contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    NotFound,
    /// Spellings the site suggests instead
    Suggestions(Vec<String>),
    /// Several entries share the spelling and no pronunciation was chosen yet
    AmbiguousHomographs(Vec<HomographCandidate>),
    Resolved,
}

/// Classify a lookup page.
///
/// Checked in order: not-found marker, suggestion list, homograph header.
/// A supplied `pronunciation` means the caller already picked a homograph,
/// so the header is ignored.
pub fn classify(doc: &Html, pronunciation: Option<&str>) -> PageKind {
    if doc.select(&dom::NOT_FOUND).next().is_some() {
        return PageKind::NotFound;
    }

    let suggestions = suggestions(doc);
    if !suggestions.is_empty() {
        return PageKind::Suggestions(suggestions);
    }

    let homographs = homographs(doc);
    if !homographs.is_empty() && pronunciation.is_none() {
        return PageKind::AmbiguousHomographs(homographs);
    }

    PageKind::Resolved
}

fn suggestions(doc: &Html) -> Vec<String> {
    doc.select(&dom::SUGGESTIONS)
        .map(|link| suggestion_from_href(link.value().attr("href").unwrap_or_default()))
        .collect()
}

/// Last path segment of a form-encoded href
fn suggestion_from_href(href: &str) -> String {
    let href = href.replace('+', " ");
    let decoded = percent_decode_str(&href).decode_utf8_lossy();
    decoded.rsplit('/').next().unwrap_or_default().to_string()
}

fn homographs(doc: &Html) -> Vec<HomographCandidate> {
    doc.select(&dom::MULTI_WORD)
        .map(|item| HomographCandidate {
            expression: dom::text_or_empty(dom::first(item, &dom::H2)),
            pronunciation: dom::text_or_empty(dom::first(item, &dom::DIV_SPAN)),
        })
        .collect()
}
