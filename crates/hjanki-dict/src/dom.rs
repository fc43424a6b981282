//! Selectors for the lookup page layout and text extraction helpers.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

pub(crate) static NOT_FOUND: LazyLock<Selector> =
    LazyLock::new(|| selector("div.word-notfound-inner"));
pub(crate) static SUGGESTIONS: LazyLock<Selector> =
    LazyLock::new(|| selector("div.word-suggestions > ul > li > a"));
pub(crate) static MULTI_WORD: LazyLock<Selector> =
    LazyLock::new(|| selector("header.word-details-header > ul > li"));
pub(crate) static WORD_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| selector("section.word-details-content > div.word-details-pane"));

pub(crate) static WORD_INFO: LazyLock<Selector> =
    LazyLock::new(|| selector("header.word-details-pane-header > div.word-info"));
// Both below are relative to WORD_INFO
pub(crate) static WORD_INFO_TEXT: LazyLock<Selector> =
    LazyLock::new(|| selector("div.word-text > h2"));
pub(crate) static WORD_INFO_PRONOUNCE: LazyLock<Selector> =
    LazyLock::new(|| selector("div.pronounces > span"));

pub(crate) static WORD_SIMPLE: LazyLock<Selector> =
    LazyLock::new(|| selector("header.word-details-pane-header > div.simple"));
pub(crate) static WORD_DETAILS: LazyLock<Selector> = LazyLock::new(|| {
    selector("div.word-details-item-content > section.detail-groups > dl")
});

pub(crate) static H2: LazyLock<Selector> = LazyLock::new(|| selector("h2"));
pub(crate) static DIV_SPAN: LazyLock<Selector> = LazyLock::new(|| selector("div > span"));
pub(crate) static UL: LazyLock<Selector> = LazyLock::new(|| selector("ul"));
pub(crate) static LI: LazyLock<Selector> = LazyLock::new(|| selector("li"));
pub(crate) static DT: LazyLock<Selector> = LazyLock::new(|| selector("dt"));
pub(crate) static DD: LazyLock<Selector> = LazyLock::new(|| selector("dd"));
pub(crate) static H3_P: LazyLock<Selector> = LazyLock::new(|| selector("h3 > p"));
pub(crate) static UL_LI: LazyLock<Selector> = LazyLock::new(|| selector("ul > li"));
pub(crate) static P: LazyLock<Selector> = LazyLock::new(|| selector("p"));
pub(crate) static SPAN: LazyLock<Selector> = LazyLock::new(|| selector("span"));

/// Class on the pronunciation span holding the pitch accent
pub(crate) const TONE_CLASS: &str = "pronounce-value-jp";
/// Class on the pronunciation span holding the audio player
pub(crate) const AUDIO_CLASS: &str = "word-audio";
pub(crate) const AUDIO_ATTR: &str = "data-src";

/// Whitespace-normalized text of an element and its descendants
pub(crate) fn text(elem: ElementRef<'_>) -> String {
    let raw: String = elem.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text of an optional element; a missing element reads as empty
pub(crate) fn text_or_empty(elem: Option<ElementRef<'_>>) -> String {
    elem.map(text).unwrap_or_default()
}

pub(crate) fn first<'a>(elem: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    elem.select(selector).next()
}

pub(crate) fn has_class(elem: ElementRef<'_>, class: &str) -> bool {
    elem.value().classes().any(|c| c == class)
}

pub(crate) fn attr(elem: ElementRef<'_>, name: &str) -> String {
    elem.value().attr(name).unwrap_or_default().to_string()
}
