use std::time::Duration;

use async_trait::async_trait;
use hjanki_types::{ExampleSentence, HomographCandidate, SenseEntry, ShortSense};
use scraper::Html;

use super::fixtures::{self, FakeTransport};
use crate::classify::{PageKind, classify};
use crate::error::DictError;
use crate::key::LookupKey;
use crate::parse::parse_entry;
use crate::resolve::resolve;
use crate::service::{DictService, Lookup};
use crate::transport::Transport;

fn page(html: &str) -> Html {
    Html::parse_document(html)
}

#[test]
fn test_not_found_takes_precedence() {
    let doc = page(fixtures::NOT_FOUND_WITH_SUGGESTIONS);
    assert_eq!(classify(&doc, None), PageKind::NotFound);
    assert_eq!(classify(&doc, Some("はしる")), PageKind::NotFound);
}

#[test]
fn test_suggestions_are_decoded_in_order() {
    let doc = page(fixtures::SUGGESTIONS);
    assert_eq!(
        classify(&doc, None),
        PageKind::Suggestions(vec![
            "走る".to_string(),
            "走者".to_string(),
            "走".to_string()
        ])
    );
}

#[test]
fn test_homographs_need_a_choice() {
    let doc = page(&fixtures::homographs());
    assert_eq!(
        classify(&doc, None),
        PageKind::AmbiguousHomographs(vec![
            HomographCandidate {
                expression: "上手".to_string(),
                pronunciation: "じょうず".to_string(),
            },
            HomographCandidate {
                expression: "上手".to_string(),
                pronunciation: "うわて".to_string(),
            },
        ])
    );
    assert_eq!(classify(&doc, Some("うわて")), PageKind::Resolved);
}

#[test]
fn test_resolve_picks_matching_homograph() {
    let doc = page(&fixtures::homographs());

    let block = resolve(&doc, "上手", Some("うわて")).unwrap();
    let word = parse_entry(block).unwrap();
    assert_eq!(word.pronunciation, "うわて");
    assert_eq!(word.short_senses[0].meanings, vec!["上方"]);

    let block = resolve(&doc, "上手", Some("じょうず")).unwrap();
    assert_eq!(parse_entry(block).unwrap().pronunciation, "じょうず");

    let block = resolve(&doc, "上手", None).unwrap();
    assert_eq!(parse_entry(block).unwrap().pronunciation, "じょうず");
}

#[test]
fn test_resolve_unknown_pronunciation_is_not_found() {
    let doc = page(&fixtures::homographs());
    assert!(matches!(
        resolve(&doc, "上手", Some("かみて")),
        Err(DictError::NotFound)
    ));
    assert!(matches!(
        resolve(&doc, "下手", Some("うわて")),
        Err(DictError::NotFound)
    ));
}

#[test]
fn test_resolve_without_blocks_is_format_error() {
    let doc = page("<html><body><p>maintenance</p></body></html>");
    assert!(matches!(resolve(&doc, "走る", None), Err(DictError::Format(_))));
}

#[test]
fn test_resolve_block_without_word_info_is_format_error() {
    let doc = page(fixtures::MISSING_WORD_INFO);
    assert!(matches!(resolve(&doc, "走る", None), Err(DictError::Format(_))));
}

#[test]
fn test_parse_full_entry() {
    let doc = page(fixtures::ENTRY);
    let word = parse_entry(resolve(&doc, "走る", None).unwrap()).unwrap();

    assert_eq!(word.expression, "走る");
    assert_eq!(word.pronunciation, "[はしる]");
    assert_eq!(word.secondary_pronunciation, "[hashiru]");
    assert_eq!(word.tone_marker, "②");
    assert_eq!(word.audio_ref, "https://tts.example.com/hashiru.mp3");

    assert_eq!(
        word.short_senses,
        vec![
            ShortSense {
                part_of_speech: "【自五】".to_string(),
                meanings: vec!["run".to_string(), "jog".to_string()],
            },
            ShortSense {
                part_of_speech: "【名】".to_string(),
                meanings: vec!["跑步".to_string()],
            },
        ]
    );

    assert_eq!(word.detailed_senses.len(), 2);
    let verb = &word.detailed_senses[0];
    assert_eq!(verb.part_of_speech, "【自五】");
    assert_eq!(
        verb.entries,
        vec![
            SenseEntry {
                source_meaning: "速く移動する。".to_string(),
                target_meaning: "跑。".to_string(),
                examples: vec![
                    ExampleSentence {
                        source_text: "駅まで走る。".to_string(),
                        target_text: "跑到车站。".to_string(),
                        audio_ref: "https://tts.example.com/s1.mp3".to_string(),
                    },
                    ExampleSentence {
                        source_text: "廊下を走る。".to_string(),
                        target_text: "在走廊里跑。".to_string(),
                        audio_ref: "https://tts.example.com/s2.mp3".to_string(),
                    },
                ],
            },
            SenseEntry {
                source_meaning: "ruby".to_string(),
                target_meaning: "行驶。".to_string(),
                examples: vec![],
            },
        ]
    );

    let noun = &word.detailed_senses[1];
    assert_eq!(noun.entries.len(), 1);
    assert_eq!(noun.entries[0].target_meaning, "跑步。");
}

#[test]
fn test_parse_missing_word_info_is_format_error() {
    let doc = page(fixtures::MISSING_WORD_INFO);
    let block = doc.select(&crate::dom::WORD_BLOCK).next().unwrap();
    assert!(matches!(parse_entry(block), Err(DictError::Format(_))));
}

#[test]
fn test_parse_empty_pronunciation_is_format_error() {
    let doc = page(fixtures::MISSING_PRONUNCIATION);
    let block = resolve(&doc, "走る", None).unwrap();
    assert!(matches!(parse_entry(block), Err(DictError::Format(_))));
}

#[test]
fn test_parse_single_meaning_paragraph_is_format_error() {
    let doc = page(fixtures::SHORT_MEANING);
    let block = resolve(&doc, "走る", None).unwrap();
    assert!(matches!(parse_entry(block), Err(DictError::Format(_))));
}

#[tokio::test]
async fn test_get_dict_entry() {
    let service = DictService::new(FakeTransport::new(&[("走る", fixtures::ENTRY.to_string())]));

    match service.get_dict(" 走る\n", None).await.unwrap() {
        Lookup::Entry(word) => assert_eq!(word.expression, "走る"),
        other => panic!("Expected entry, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_dict_outcomes() {
    let service = DictService::new(FakeTransport::new(&[
        ("はしろ", fixtures::SUGGESTIONS.to_string()),
        ("上手", fixtures::homographs()),
        ("ない", fixtures::NOT_FOUND_WITH_SUGGESTIONS.to_string()),
    ]));

    assert!(matches!(
        service.get_dict("はしろ", None).await,
        Ok(Lookup::Suggestions(s)) if s.len() == 3
    ));
    assert!(matches!(
        service.get_dict("上手", None).await,
        Ok(Lookup::Homographs(c)) if c.len() == 2
    ));
    assert!(matches!(
        service.get_dict("上手", Some("うわて")).await,
        Ok(Lookup::Entry(w)) if w.pronunciation == "うわて"
    ));
    assert!(matches!(
        service.get_dict("ない", None).await,
        Err(DictError::NotFound)
    ));
}

#[tokio::test]
async fn test_repeated_fetch_reuses_page() {
    let service = DictService::new(FakeTransport::new(&[
        ("foo", fixtures::ENTRY.to_string()),
        ("bar", fixtures::SUGGESTIONS.to_string()),
    ]));
    let foo = LookupKey::new("foo").unwrap();
    let bar = LookupKey::new("bar").unwrap();

    let first = service.fetch(&foo).await.unwrap();
    let second = service.fetch(&foo).await.unwrap();
    assert_eq!(first.body(), second.body());
    assert_eq!(service.transport().calls(), 1);

    service.fetch(&bar).await.unwrap();
    assert_eq!(service.transport().calls(), 2);

    service.fetch(&foo).await.unwrap();
    assert_eq!(service.transport().calls(), 3);
}

#[tokio::test]
async fn test_homograph_choice_reuses_page() {
    let service = DictService::new(FakeTransport::new(&[("上手", fixtures::homographs())]));

    service.get_dict("上手", None).await.unwrap();
    service.get_dict("上手", Some("じょうず")).await.unwrap();
    assert_eq!(service.transport().calls(), 1);
}

#[tokio::test]
async fn test_homograph_choice_matches_unnormalized_headword() {
    // The page is addressed by the NFKC key, but its headwords keep the full-width tilde
    let service = DictService::new(FakeTransport::new(&[(
        "~さん",
        fixtures::homographs_of("～さん"),
    )]));

    let candidates = match service.get_dict("～さん", None).await.unwrap() {
        Lookup::Homographs(candidates) => candidates,
        other => panic!("Expected homographs, got {:?}", other),
    };
    assert_eq!(candidates[1].expression, "～さん");

    match service
        .get_dict(&candidates[1].expression, Some(&candidates[1].pronunciation))
        .await
        .unwrap()
    {
        Lookup::Entry(word) => {
            assert_eq!(word.expression, "～さん");
            assert_eq!(word.pronunciation, "うわて");
        }
        other => panic!("Expected entry, got {:?}", other),
    }
    assert_eq!(service.transport().calls(), 1);
}

#[tokio::test]
async fn test_failed_fetch_is_not_cached() {
    let service = DictService::new(FakeTransport::new(&[]));

    let err = service.get_dict("foo", None).await.unwrap_err();
    assert!(err.is_transport());
    service.get_dict("foo", None).await.unwrap_err();
    assert_eq!(service.transport().calls(), 2);
}

#[tokio::test]
async fn test_empty_expression_skips_network() {
    let service = DictService::new(FakeTransport::new(&[]));
    assert!(matches!(
        service.get_dict("  ", None).await,
        Err(DictError::EmptyKey)
    ));
    assert_eq!(service.transport().calls(), 0);
}

struct StalledTransport;

#[async_trait]
impl Transport for StalledTransport {
    async fn get(&self, _key: &LookupKey) -> Result<String, DictError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(String::new())
    }
}

#[tokio::test]
async fn test_fetch_timeout_is_transport_error() {
    let service = DictService::new(StalledTransport).with_timeout(Duration::from_millis(50));

    let err = service.get_dict("foo", None).await.unwrap_err();
    assert!(matches!(err, DictError::Timeout(d) if d == Duration::from_millis(50)));
    assert!(err.is_transport());
}
