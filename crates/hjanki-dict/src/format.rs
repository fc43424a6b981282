//! Text encodings of a parsed entry: a plain-text preview for the terminal
//! and HTML fragments stored as note field values.

use std::fmt::Write;

use hjanki_types::{DetailedSense, ShortSense, WordInfo};

/// Multi-line human-readable preview
pub fn render_preview(word: &WordInfo) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", word.expression);
    let _ = writeln!(
        out,
        "{} {} {}",
        word.pronunciation, word.secondary_pronunciation, word.tone_marker
    );

    if word.short_senses.is_empty() {
        out.push_str("No short senses\n");
    } else {
        out.push_str("Short senses:\n");
        for sense in &word.short_senses {
            let _ = writeln!(out, "{}", sense.part_of_speech);
            for meaning in &sense.meanings {
                let _ = writeln!(out, "  - {meaning}");
            }
        }
    }

    out.push('\n');
    out.push_str("Detailed senses:\n");
    for sense in &word.detailed_senses {
        let _ = writeln!(out, "{}", sense.part_of_speech);
        for entry in &sense.entries {
            let _ = writeln!(out, "  - {}\t{}", entry.target_meaning, entry.source_meaning);
            for example in &entry.examples {
                let _ = writeln!(out, "    - {}\t{}", example.source_text, example.target_text);
            }
        }
    }

    out
}

/// Definition list: part of speech as term, meanings as a bullet list
pub fn short_senses_markup(senses: &[ShortSense]) -> String {
    let mut out = String::from("<dl>");
    for sense in senses {
        let _ = write!(out, "<dt>{}</dt><dd><ul>", escape(&sense.part_of_speech));
        for meaning in &sense.meanings {
            let _ = write!(out, "<li><span>{}</span></li>", escape(meaning));
        }
        out.push_str("</ul></dd>");
    }
    out.push_str("</dl>");
    out
}

/// Nested definition list: each sense entry carries both meanings and its examples
pub fn detailed_senses_markup(senses: &[DetailedSense]) -> String {
    let mut out = String::from("<dl>");
    for sense in senses {
        let _ = write!(out, "<dt>{}</dt><dd><ul>", escape(&sense.part_of_speech));
        for entry in &sense.entries {
            let _ = write!(
                out,
                "<li><span>{}</span><span>{}</span><ul>",
                escape(&entry.source_meaning),
                escape(&entry.target_meaning)
            );
            for example in &entry.examples {
                let _ = write!(
                    out,
                    "<li>{} \\ {} {}</li>",
                    escape(&example.source_text),
                    escape(&example.target_text),
                    sound_markup(&example.audio_ref)
                );
            }
            out.push_str("</ul></li>");
        }
        out.push_str("</ul></dd>");
    }
    out.push_str("</dl>");
    out
}

/// Anki audio tag for a resource reference
pub fn sound_markup(audio_ref: &str) -> String {
    format!("[sound:{audio_ref}]")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
