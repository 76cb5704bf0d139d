//! The user-facing tagger: a trained cascade plus tagging, evaluation and
//! persistence.

use std::io::{BufReader, Read, Write};
use std::path::Path;

use fs_err::File;
use log::info;
use unicode_segmentation::UnicodeSegmentation;

use crate::chain::{ChainSpec, TaggerChain};
use crate::eval::{self, EvaluationReport};
use crate::types::{Corpus, Sentence, UniversalTag};
use crate::Error;

/// Accuracy of one cascade level on a test corpus. Levels are ordered as
/// built, least-specific first, so later rows show the gain of each
/// additional backoff step.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelAccuracy {
    pub tagger: String,
    pub accuracy: f64,
}

/// A trained cascading part-of-speech tagger.
///
/// Tagging is total: every input token receives exactly one tag. The wrapped
/// chain is immutable, so a shared reference can tag from several threads at
/// once.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CascadeTagger {
    chain: TaggerChain,
}

impl CascadeTagger {
    /// Trains the cascade described by `spec` on a normalized corpus.
    pub fn train(spec: &ChainSpec, corpus: &Corpus) -> Result<Self, Error> {
        info!(
            "training cascade on {} sentences ({} tokens)",
            corpus.len(),
            corpus.token_count()
        );
        Ok(CascadeTagger {
            chain: TaggerChain::build(spec, corpus)?,
        })
    }

    pub fn chain(&self) -> &TaggerChain {
        &self.chain
    }

    /// Tags an already-tokenized sentence, one tag per token, order
    /// preserved.
    pub fn tag_tokenized_sentence<S: AsRef<str>>(&self, words: &[S]) -> Sentence {
        self.chain.tag_sentence(words)
    }

    /// Splits `text` on Unicode word boundaries and tags the resulting
    /// tokens. This is a convenience for quick inspection, not a linguistic
    /// tokenizer; punctuation handling in particular is crude.
    pub fn tag_raw_text(&self, text: &str) -> Sentence {
        let words: Vec<&str> = text.unicode_words().collect();
        self.chain.tag_sentence(&words)
    }

    /// Tags a batch of tokenized sentences, preserving input order and
    /// sentence boundaries.
    pub fn tag_sentences<S: AsRef<str>>(&self, sentences: &[Vec<S>]) -> Vec<Sentence> {
        sentences
            .iter()
            .map(|words| self.tag_tokenized_sentence(words))
            .collect()
    }

    fn predictions(&self, test: &Corpus) -> Vec<String> {
        test.iter()
            .flat_map(|sentence| {
                let words: Vec<&str> = sentence.iter().map(|token| token.word()).collect();
                self.chain
                    .tag_sentence(&words)
                    .into_iter()
                    .map(|token| token.tag().to_string())
            })
            .collect()
    }

    /// Tags the words of `test` and scores the predictions against its gold
    /// tags over the universal tagset.
    pub fn evaluate(&self, test: &Corpus) -> Result<EvaluationReport, Error> {
        let gold: Vec<&str> = test.tags().collect();
        let pred = self.predictions(test);

        eval::classification_report(&gold, &pred, &UniversalTag::labels())
    }

    /// Accuracy of every cascade level on `test`, least-specific level
    /// first. Each level is the sub-cascade up to and including that tagger,
    /// so the last row equals the full tagger's accuracy.
    pub fn evaluate_levels(&self, test: &Corpus) -> Result<Vec<LevelAccuracy>, Error> {
        let gold: Vec<&str> = test.tags().collect();

        self.chain
            .level_names()
            .into_iter()
            .enumerate()
            .map(|(level, tagger)| {
                let pred: Vec<String> = test
                    .iter()
                    .flat_map(|sentence| {
                        let words: Vec<String> = sentence
                            .iter()
                            .map(|token| token.word().to_string())
                            .collect();
                        self.chain.tag_words_at_level(&words, level)
                    })
                    .collect();

                Ok(LevelAccuracy {
                    tagger,
                    accuracy: eval::accuracy(&gold, &pred)?,
                })
            })
            .collect()
    }

    /// Serializes the trained cascade into `writer` as a bincode blob.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        Ok(bincode::serialize_into(writer, self)?)
    }

    /// Deserializes a cascade from `reader`. An undecodable blob is a
    /// serialization error; the caller's existing taggers are unaffected.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Ok(bincode::deserialize_from(reader)?)
    }

    /// Writes the trained cascade to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        self.to_writer(File::create(path.as_ref())?)
    }

    /// Reads a trained cascade back from `path`. Tagging behavior after a
    /// round trip is identical to the saved tagger's.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Self::from_reader(BufReader::new(File::open(path.as_ref())?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaggedWord;

    fn tagger() -> CascadeTagger {
        let corpus = Corpus::from(vec![
            vec![
                TaggedWord::new("o", "DET"),
                TaggedWord::new("gato", "NOUN"),
                TaggedWord::new("dorme", "VERB"),
            ],
            vec![
                TaggedWord::new("a", "DET"),
                TaggedWord::new("casa", "NOUN"),
            ],
        ]);
        let spec: ChainSpec = "bigram,unigram,default".parse().unwrap();
        CascadeTagger::train(&spec, &corpus).unwrap()
    }

    #[test]
    fn batch_tagging_preserves_order_and_boundaries() {
        let tagger = tagger();
        let sentences = vec![
            vec!["o".to_string(), "gato".to_string()],
            vec!["casa".to_string()],
        ];

        let tagged = tagger.tag_sentences(&sentences);

        assert_eq!(tagged.len(), 2);
        assert_eq!(tagged[0].len(), 2);
        assert_eq!(tagged[1].len(), 1);
        assert_eq!(tagged[0][0].word(), "o");
        assert_eq!(tagged[1][0].tag(), "NOUN");
    }

    #[test]
    fn raw_text_tagging_is_total() {
        let tagged = tagger().tag_raw_text("o gato dorme tranquilamente");
        assert_eq!(tagged.len(), 4);
        assert!(tagged.iter().all(|token| !token.tag().is_empty()));
    }

    #[test]
    fn evaluation_on_the_training_corpus_is_perfect() {
        let tagger = tagger();
        let test = Corpus::from(vec![vec![
            TaggedWord::new("o", "DET"),
            TaggedWord::new("gato", "NOUN"),
        ]]);

        let report = tagger.evaluate(&test).unwrap();
        assert!((report.accuracy - 1.0).abs() < 1e-12);
    }

    #[test]
    fn level_accuracies_never_decrease_up_the_cascade_here() {
        let tagger = tagger();
        let test = Corpus::from(vec![vec![
            TaggedWord::new("o", "DET"),
            TaggedWord::new("gato", "NOUN"),
            TaggedWord::new("dorme", "VERB"),
        ]]);

        let levels = tagger.evaluate_levels(&test).unwrap();
        assert_eq!(levels.len(), 3);
        assert_eq!(levels[0].tagger, "Default");
        // Full cascade is the last level and matches evaluate().
        let report = tagger.evaluate(&test).unwrap();
        assert!((levels.last().unwrap().accuracy - report.accuracy).abs() < 1e-12);
    }

    #[test]
    fn load_from_a_missing_path_is_an_io_error() {
        let result = CascadeTagger::load("/nonexistent/directory/tagger.bin");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn garbage_blobs_fail_to_deserialize() {
        let result = CascadeTagger::from_reader(&b"not a tagger"[..]);
        assert!(matches!(result, Err(Error::Serialization(_))));
    }
}
