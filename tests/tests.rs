use std::io::Cursor;

use lazy_static::lazy_static;
use quickcheck_macros::quickcheck;

use cascata::cascade::CascadeTagger;
use cascata::chain::ChainSpec;
use cascata::corpus::{normalize, Tagset};
use cascata::types::{Corpus, TaggedWord};
use cascata::Error;

const MACMORPHO_SAMPLE: &str = "\
O_ART gato_N preto_ADJ dorme_V ._.
A_ART casa_N caiu_V ontem_ADV ._.
O_ART menino_N viu_V o_ART gato_N ._.
Ela_PROPESS comprou_V 3_NUM casas_N ._.
";

lazy_static! {
    static ref TRAIN: Corpus = {
        let raw = Corpus::from_tagged_reader(Cursor::new(MACMORPHO_SAMPLE), '_').unwrap();
        normalize(&raw, Tagset::MacMorpho)
    };
    static ref TAGGER: CascadeTagger = {
        let spec: ChainSpec = "trigram,bigram,unigram,regex,default".parse().unwrap();
        CascadeTagger::train(&spec, &TRAIN).unwrap()
    };
}

#[test]
fn normalization_maps_the_sample_to_universal_tags() {
    let first = TRAIN.iter().next().unwrap();
    let tags: Vec<&str> = first.iter().map(TaggedWord::tag).collect();

    assert_eq!(tags, vec!["DET", "NOUN", "ADJ", "VERB", "."]);
}

#[test]
fn trained_cascade_reproduces_training_tags() {
    let tagged = TAGGER.tag_tokenized_sentence(&["O", "gato", "dorme", "."]);
    let tags: Vec<&str> = tagged.iter().map(TaggedWord::tag).collect();

    assert_eq!(tags, vec!["DET", "NOUN", "VERB", "."]);
}

#[test]
fn wholly_unseen_sentences_get_the_default_tag() {
    let tagged = TAGGER.tag_tokenized_sentence(&["palavras", "nunca", "vistas"]);

    assert_eq!(tagged.len(), 3);
    assert!(tagged.iter().all(|token| token.tag() == "NOUN"));
}

#[test]
fn numbers_are_caught_by_the_regex_level() {
    let tagged = TAGGER.tag_tokenized_sentence(&["1234", "-5.6"]);
    assert!(tagged.iter().all(|token| token.tag() == "NUM"));
}

#[quickcheck]
fn tagging_is_total_for_arbitrary_tokens(words: Vec<String>) -> bool {
    let words: Vec<String> = words.into_iter().filter(|word| !word.is_empty()).collect();
    let tagged = TAGGER.tag_tokenized_sentence(&words);

    tagged.len() == words.len() && tagged.iter().all(|token| !token.tag().is_empty())
}

#[quickcheck]
fn raw_text_tagging_never_panics(text: String) -> bool {
    TAGGER.tag_raw_text(&text);
    true
}

#[test]
fn round_trip_preserves_tagging_behavior() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tagger.bin");

    TAGGER.save(&path).unwrap();
    let restored = CascadeTagger::load(&path).unwrap();

    let sentences = vec![
        vec!["O".to_string(), "gato".to_string(), "caiu".to_string()],
        vec!["42".to_string(), "inedita".to_string()],
    ];
    assert_eq!(
        TAGGER.tag_sentences(&sentences),
        restored.tag_sentences(&sentences)
    );
}

#[test]
fn save_to_an_invalid_location_is_an_io_error() {
    let result = TAGGER.save("/nonexistent/directory/tagger.bin");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn evaluation_on_held_out_data_reports_all_pieces() {
    let held_out = "O_ART gato_N caiu_V ._.";
    let raw = Corpus::from_tagged_reader(Cursor::new(held_out), '_').unwrap();
    let test = normalize(&raw, Tagset::MacMorpho);

    let report = TAGGER.evaluate(&test).unwrap();

    assert!(report.accuracy > 0.0 && report.accuracy <= 1.0);
    assert_eq!(report.confusion.labels().len(), 12);
    assert_eq!(report.classes.len(), 12);

    let levels = TAGGER.evaluate_levels(&test).unwrap();
    assert_eq!(levels.len(), 5);
    assert!((levels.last().unwrap().accuracy - report.accuracy).abs() < 1e-12);
}

#[test]
fn corpora_from_different_tagsets_can_be_merged() {
    let floresta = "Ele_H+pron-pers canta_P+v-fin bem_adv ._.";
    let raw = Corpus::from_tagged_reader(Cursor::new(floresta), '_').unwrap();

    let mut merged = TRAIN.clone();
    merged.concat(normalize(&raw, Tagset::Floresta));

    assert_eq!(merged.len(), TRAIN.len() + 1);
    let last = merged.iter().last().unwrap();
    assert_eq!(last[0].tag(), "PRON");
    assert_eq!(last[1].tag(), "VERB");
}
