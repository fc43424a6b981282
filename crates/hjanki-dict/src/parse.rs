use std::sync::LazyLock;

use hjanki_types::{DetailedSense, ExampleSentence, SenseEntry, ShortSense, WordInfo};
use regex::Regex;
use scraper::ElementRef;

use crate::dom;
use crate::error::DictError;

static LIST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("valid regex"));

/// Parse one entry block into a `WordInfo`
pub fn parse_entry(block: ElementRef<'_>) -> Result<WordInfo, DictError> {
    let info = dom::first(block, &dom::WORD_INFO)
        .ok_or_else(|| DictError::format("missing word info"))?;
    let expression = dom::text_or_empty(dom::first(info, &dom::WORD_INFO_TEXT));

    let pronounces: Vec<_> = info.select(&dom::WORD_INFO_PRONOUNCE).collect();
    if pronounces.is_empty() {
        return Err(DictError::format("missing pronunciation"));
    }

    let mut pronunciation = String::new();
    let mut secondary_pronunciation = String::new();
    let mut tone_marker = String::new();
    let mut audio_ref = String::new();
    for (i, elem) in pronounces.into_iter().enumerate() {
        if i == 0 {
            pronunciation = dom::text(elem);
        } else if dom::has_class(elem, dom::TONE_CLASS) {
            tone_marker = dom::text(elem);
        } else if dom::has_class(elem, dom::AUDIO_CLASS) {
            audio_ref = dom::attr(elem, dom::AUDIO_ATTR);
        } else {
            secondary_pronunciation = dom::text(elem);
        }
    }

    let simple = dom::first(block, &dom::WORD_SIMPLE)
        .ok_or_else(|| DictError::format("missing short senses block"))?;

    let detailed_senses = block
        .select(&dom::WORD_DETAILS)
        .map(detailed_sense)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(WordInfo {
        expression,
        pronunciation,
        secondary_pronunciation,
        tone_marker,
        audio_ref,
        short_senses: short_senses(simple),
        detailed_senses,
    })
}

/// Headers and lists are paired by position; extra lists get no part of speech.
fn short_senses(simple: ElementRef<'_>) -> Vec<ShortSense> {
    let types: Vec<_> = simple.select(&dom::H2).map(dom::text).collect();

    simple
        .select(&dom::UL)
        .enumerate()
        .map(|(i, list)| ShortSense {
            part_of_speech: types.get(i).cloned().unwrap_or_default(),
            meanings: list
                .select(&dom::LI)
                .map(|li| strip_list_number(&dom::text(li)))
                .collect(),
        })
        .collect()
}

fn strip_list_number(text: &str) -> String {
    LIST_NUMBER.replace(text, "").into_owned()
}

fn detailed_sense(group: ElementRef<'_>) -> Result<DetailedSense, DictError> {
    let part_of_speech = dom::text_or_empty(dom::first(group, &dom::DT));

    let mut entries = Vec::new();
    for dd in group.select(&dom::DD) {
        let meanings: Vec<_> = dd.select(&dom::H3_P).collect();
        if meanings.len() < 2 {
            return Err(DictError::format(format!(
                "sense of '{}' has {} meaning paragraphs",
                part_of_speech,
                meanings.len()
            )));
        }

        let source_meaning = meaning_text(meanings[0]);
        let target_meaning = meaning_text(meanings[1]);
        if source_meaning.is_empty() && target_meaning.is_empty() {
            continue;
        }

        let examples = dd
            .select(&dom::UL_LI)
            .map(example_sentence)
            .collect::<Result<Vec<_>, _>>()?;

        entries.push(SenseEntry {
            source_meaning,
            target_meaning,
            examples,
        });
    }

    Ok(DetailedSense {
        part_of_speech,
        entries,
    })
}

/// Meaning text, or the child tag names when the site emitted unescaped
/// markup where text belongs.
fn meaning_text(paragraph: ElementRef<'_>) -> String {
    let text = dom::text(paragraph);
    if !text.is_empty() || !paragraph.has_children() {
        return text;
    }

    let tags = paragraph
        .children()
        .filter_map(ElementRef::wrap)
        .map(|child| child.value().name())
        .collect::<Vec<_>>()
        .join(", ");
    if !tags.is_empty() {
        tracing::warn!("Meaning text missing, using tag names '{}'", tags);
    }
    tags
}

fn example_sentence(item: ElementRef<'_>) -> Result<ExampleSentence, DictError> {
    let paragraphs: Vec<_> = item.select(&dom::P).collect();
    if paragraphs.len() != 2 {
        return Err(DictError::format(format!(
            "example has {} paragraphs",
            paragraphs.len()
        )));
    }

    let audio = dom::first(paragraphs[0], &dom::SPAN)
        .ok_or_else(|| DictError::format("example without audio span"))?;

    Ok(ExampleSentence {
        source_text: dom::text(paragraphs[0]),
        target_text: dom::text(paragraphs[1]),
        audio_ref: dom::attr(audio, dom::AUDIO_ATTR),
    })
}
