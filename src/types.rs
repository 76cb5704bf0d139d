//! Fundamental types used by the tagset mappers, the tagger cascade and the
//! evaluator: tagged words, sentences, corpora and the universal tagset.

use std::fmt;
use std::io::BufRead;
use std::iter::FromIterator;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A word paired with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedWord {
    word: String,
    tag: String,
}

impl TaggedWord {
    pub fn new<W: Into<String>, T: Into<String>>(word: W, tag: T) -> Self {
        TaggedWord {
            word: word.into(),
            tag: tag.into(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns a copy of this word with the tag replaced.
    pub fn with_tag<T: Into<String>>(&self, tag: T) -> Self {
        TaggedWord {
            word: self.word.clone(),
            tag: tag.into(),
        }
    }
}

impl fmt::Display for TaggedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.word, self.tag)
    }
}

/// An ordered sequence of tagged words. Order is significant: it determines
/// the n-gram context seen by the taggers.
pub type Sentence = Vec<TaggedWord>;

/// An ordered collection of sentences.
///
/// Iteration order always equals insertion order so that evaluation runs are
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    sentences: Vec<Sentence>,
}

impl Corpus {
    pub fn new() -> Self {
        Corpus::default()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
        self.sentences.iter()
    }

    pub fn push(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    /// Appends all sentences of `other`, preserving their order. Used to merge
    /// normalized corpora from several sources into one training set.
    pub fn concat(&mut self, other: Corpus) {
        self.sentences.extend(other.sentences);
    }

    /// Total number of tokens across all sentences.
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(Vec::len).sum()
    }

    /// Flattened view of all words, sentence boundaries dropped.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.sentences
            .iter()
            .flat_map(|sentence| sentence.iter().map(TaggedWord::word))
    }

    /// Flattened view of all tags, sentence boundaries dropped.
    pub fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.sentences
            .iter()
            .flat_map(|sentence| sentence.iter().map(TaggedWord::tag))
    }

    /// Reads a corpus in the plain tagged format used by the NILC and
    /// Mac-Morpho distributions: one sentence per line, tokens separated by
    /// whitespace, each token of the form `word<sep>TAG`.
    ///
    /// A token without the separator yields an empty tag, which normalization
    /// later resolves to the mapping default. Empty lines are skipped.
    pub fn from_tagged_reader<R: BufRead>(reader: R, sep: char) -> Result<Self, Error> {
        let mut corpus = Corpus::new();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let sentence = line
                .split_whitespace()
                .map(|token| match token.rsplit_once(sep) {
                    Some((word, tag)) => TaggedWord::new(word, tag),
                    None => TaggedWord::new(token, ""),
                })
                .collect();
            corpus.push(sentence);
        }

        Ok(corpus)
    }
}

impl From<Vec<Sentence>> for Corpus {
    fn from(sentences: Vec<Sentence>) -> Self {
        Corpus { sentences }
    }
}

impl FromIterator<Sentence> for Corpus {
    fn from_iter<I: IntoIterator<Item = Sentence>>(iter: I) -> Self {
        Corpus {
            sentences: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Corpus {
    type Item = Sentence;
    type IntoIter = std::vec::IntoIter<Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.into_iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Sentence;
    type IntoIter = std::slice::Iter<'a, Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}

/// The fixed 12-symbol universal part-of-speech tagset of Petrov et al.,
/// the common target of every tagset mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UniversalTag {
    Verb,
    Noun,
    Pron,
    Adj,
    Adv,
    Adp,
    Conj,
    Det,
    Num,
    Prt,
    Punct,
    X,
}

impl UniversalTag {
    pub const ALL: [UniversalTag; 12] = [
        UniversalTag::Verb,
        UniversalTag::Noun,
        UniversalTag::Pron,
        UniversalTag::Adj,
        UniversalTag::Adv,
        UniversalTag::Adp,
        UniversalTag::Conj,
        UniversalTag::Det,
        UniversalTag::Num,
        UniversalTag::Prt,
        UniversalTag::Punct,
        UniversalTag::X,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UniversalTag::Verb => "VERB",
            UniversalTag::Noun => "NOUN",
            UniversalTag::Pron => "PRON",
            UniversalTag::Adj => "ADJ",
            UniversalTag::Adv => "ADV",
            UniversalTag::Adp => "ADP",
            UniversalTag::Conj => "CONJ",
            UniversalTag::Det => "DET",
            UniversalTag::Num => "NUM",
            UniversalTag::Prt => "PRT",
            UniversalTag::Punct => ".",
            UniversalTag::X => "X",
        }
    }

    /// The tagset as a list of label strings, in the canonical order used for
    /// confusion matrices and classification reports.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(UniversalTag::as_str).collect()
    }
}

impl FromStr for UniversalTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VERB" => Ok(UniversalTag::Verb),
            "NOUN" => Ok(UniversalTag::Noun),
            "PRON" => Ok(UniversalTag::Pron),
            "ADJ" => Ok(UniversalTag::Adj),
            "ADV" => Ok(UniversalTag::Adv),
            "ADP" => Ok(UniversalTag::Adp),
            "CONJ" => Ok(UniversalTag::Conj),
            "DET" => Ok(UniversalTag::Det),
            "NUM" => Ok(UniversalTag::Num),
            "PRT" => Ok(UniversalTag::Prt),
            "." => Ok(UniversalTag::Punct),
            "X" => Ok(UniversalTag::X),
            other => Err(Error::Config(format!(
                "`{}` is not a universal tag",
                other
            ))),
        }
    }
}

impl fmt::Display for UniversalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
