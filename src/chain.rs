//! Resolution of a chain specification into a trained backoff cascade.
//!
//! A cascade is declared most-specific first (e.g. trigram, bigram, unigram,
//! default) and built in reverse: a fold over the reversed list trains each
//! variant in turn, so the arena ends up ordered least-specific first and
//! node `i` backs off to node `i - 1`. Tagging consults the head (the last
//! node) and cascades downwards until a variant commits to a tag.

use std::str::FromStr;

use log::info;
use serde::{Deserialize, Serialize};

use crate::taggers::{AffixTagger, ContextTagger, DefaultTagger, NGramTagger, RegexTagger, TaggerNode};
use crate::types::{Corpus, Sentence, TaggedWord};
use crate::Error;

/// Default fallback tag for the whole cascade. The noun class is by far the
/// most frequent open class, so it is the least damaging blind guess.
pub const DEFAULT_TAG: &str = "NOUN";

/// Default order of the generic n-gram variant.
pub const DEFAULT_NGRAM_N: usize = 4;

/// Default affix configuration: three-character prefix, stems of at least
/// two characters.
pub const DEFAULT_AFFIX_LENGTH: i32 = 3;
pub const DEFAULT_MIN_STEM_LENGTH: usize = 2;

/// Default rule set of the regex variant: numeric tokens.
pub const DEFAULT_REGEX_RULES: &[(&str, &str)] = &[(r"^-?\d+(.\d+)?$", "NUM")];

/// One element of a chain specification: a tagger variant and exactly the
/// hyperparameters it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaggerSpec {
    NGram { n: usize },
    Affix { affix_length: i32, min_stem_length: usize },
    Regex { rules: Vec<(String, String)> },
    Default { tag: String },
}

/// Optional hyperparameter bundle for [`ChainSpec::parse`]. Every field left
/// unset falls back to its documented default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggerOptions {
    /// Tag emitted by the `default` variant and used as the cascade-level
    /// fallback. Defaults to [`DEFAULT_TAG`].
    pub default_tag: Option<String>,
    /// Order of the generic `ngram` variant. Defaults to
    /// [`DEFAULT_NGRAM_N`]; `unigram`, `bigram` and `trigram` fix their own
    /// order.
    pub n: Option<usize>,
    /// Affix length for the `affix` variant; positive selects a prefix,
    /// negative a suffix. Defaults to [`DEFAULT_AFFIX_LENGTH`].
    pub affix_length: Option<i32>,
    /// Minimum stem length for the `affix` variant. Defaults to
    /// [`DEFAULT_MIN_STEM_LENGTH`].
    pub min_stem_length: Option<usize>,
    /// `(pattern, tag)` rules for the `regex` variant. Defaults to
    /// [`DEFAULT_REGEX_RULES`].
    pub regex_rules: Option<Vec<(String, String)>>,
}

/// An ordered chain specification, most-specific variant first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSpec {
    specs: Vec<TaggerSpec>,
    default_tag: String,
}

impl ChainSpec {
    /// Resolves variant names into a specification. Names are
    /// case-insensitive; surrounding whitespace and a trailing `tagger`
    /// suffix are accepted and ignored, so `"Unigram Tagger"` and `"unigram"`
    /// are the same variant. An unknown name is a configuration error,
    /// raised before any training happens.
    pub fn parse<S: AsRef<str>>(names: &[S], options: TaggerOptions) -> Result<Self, Error> {
        let default_tag = options
            .default_tag
            .clone()
            .unwrap_or_else(|| DEFAULT_TAG.to_string());

        let specs = names
            .iter()
            .map(|name| Self::resolve(name.as_ref(), &options))
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(ChainSpec { specs, default_tag })
    }

    /// Builds a specification directly from variant specs. The cascade-level
    /// fallback tag is taken from the last `Default` variant, if any.
    pub fn from_specs(specs: Vec<TaggerSpec>) -> Self {
        let default_tag = specs
            .iter()
            .rev()
            .find_map(|spec| match spec {
                TaggerSpec::Default { tag } => Some(tag.clone()),
                _ => None,
            })
            .unwrap_or_else(|| DEFAULT_TAG.to_string());

        ChainSpec { specs, default_tag }
    }

    fn resolve(name: &str, options: &TaggerOptions) -> Result<TaggerSpec, Error> {
        let cleaned = name.trim().to_lowercase();
        let cleaned = cleaned.strip_suffix("tagger").unwrap_or(&cleaned).trim_end();

        match cleaned {
            "default" => Ok(TaggerSpec::Default {
                tag: options
                    .default_tag
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TAG.to_string()),
            }),
            "unigram" => Ok(TaggerSpec::NGram { n: 1 }),
            "bigram" => Ok(TaggerSpec::NGram { n: 2 }),
            "trigram" => Ok(TaggerSpec::NGram { n: 3 }),
            "ngram" => Ok(TaggerSpec::NGram {
                n: options.n.unwrap_or(DEFAULT_NGRAM_N),
            }),
            "affix" => Ok(TaggerSpec::Affix {
                affix_length: options.affix_length.unwrap_or(DEFAULT_AFFIX_LENGTH),
                min_stem_length: options.min_stem_length.unwrap_or(DEFAULT_MIN_STEM_LENGTH),
            }),
            "regex" | "regexp" => Ok(TaggerSpec::Regex {
                rules: options.regex_rules.clone().unwrap_or_else(|| {
                    DEFAULT_REGEX_RULES
                        .iter()
                        .map(|(pattern, tag)| ((*pattern).to_string(), (*tag).to_string()))
                        .collect()
                }),
            }),
            _ => Err(Error::Config(format!(
                "unknown tagger variant `{}`, expected one of: default, unigram, bigram, \
                 trigram, ngram, affix, regex",
                name.trim()
            ))),
        }
    }

    pub fn specs(&self) -> &[TaggerSpec] {
        &self.specs
    }

    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }
}

impl FromStr for ChainSpec {
    type Err = Error;

    /// Parses a comma-separated variant-name list with default
    /// hyperparameters, e.g. `"trigram,bigram,unigram,default"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names: Vec<&str> = s.split(',').collect();
        ChainSpec::parse(&names, TaggerOptions::default())
    }
}

/// A trained backoff cascade.
///
/// Nodes are stored least-specific first; the head is the last node and each
/// node backs off to its predecessor, which makes the structure acyclic by
/// construction. The chain is immutable after [`TaggerChain::build`]: all
/// tagging methods take `&self`, so sharing a chain across threads for
/// read-only tagging is sound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggerChain {
    nodes: Vec<TaggerNode>,
    default_tag: String,
}

impl TaggerChain {
    /// Trains the cascade described by `spec` on `train`.
    ///
    /// The spec list is folded in reverse: the least-specific variant is
    /// trained first and each later variant backs off to the chain built so
    /// far. The returned head is the most-specific (first-declared) variant.
    pub fn build(spec: &ChainSpec, train: &Corpus) -> Result<Self, Error> {
        if spec.specs.is_empty() {
            return Err(Error::Config("chain specification is empty".into()));
        }

        let mut nodes: Vec<TaggerNode> = Vec::with_capacity(spec.specs.len());
        for tagger_spec in spec.specs.iter().rev() {
            let node = match tagger_spec {
                TaggerSpec::NGram { n } => NGramTagger::train(*n, train)?.into(),
                TaggerSpec::Affix {
                    affix_length,
                    min_stem_length,
                } => AffixTagger::train(*affix_length, *min_stem_length, train)?.into(),
                TaggerSpec::Regex { rules } => {
                    RegexTagger::from_rules(rules.iter().map(|(p, t)| (p.as_str(), t.as_str())))?
                        .into()
                }
                TaggerSpec::Default { tag } => TaggerNode::from(DefaultTagger::new(tag.as_str())),
            };
            info!(
                "trained {} tagger ({} of {})",
                node.name(),
                nodes.len() + 1,
                spec.specs.len()
            );
            nodes.push(node);
        }

        Ok(TaggerChain {
            nodes,
            default_tag: spec.default_tag.clone(),
        })
    }

    /// Number of cascade levels.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Variant names, least-specific first (build order).
    pub fn level_names(&self) -> Vec<String> {
        self.nodes.iter().map(TaggerNode::name).collect()
    }

    /// Tags a word sequence left to right. For each token the cascade is
    /// consulted from the head down; the history passed to every variant is
    /// the already-resolved tags of the preceding tokens, whichever level
    /// resolved them. If every variant abstains the cascade-level default tag
    /// is used, so the output always has exactly one tag per input token.
    pub fn tag_words(&self, words: &[String]) -> Vec<String> {
        self.tag_words_at_level(words, self.nodes.len().saturating_sub(1))
    }

    /// Tags consulting only the sub-cascade `nodes[..=level]`, i.e. the chain
    /// as it looked after `level + 1` build steps. Level 0 is the
    /// least-specific tagger alone.
    pub(crate) fn tag_words_at_level(&self, words: &[String], level: usize) -> Vec<String> {
        let mut history: Vec<String> = Vec::with_capacity(words.len());

        for index in 0..words.len() {
            let tag = self.nodes[..=level.min(self.nodes.len() - 1)]
                .iter()
                .rev()
                .find_map(|node| node.choose_tag(words, index, &history))
                .unwrap_or(&self.default_tag);
            history.push(tag.to_string());
        }

        history
    }

    /// Tags a word sequence, pairing each word with its resolved tag.
    pub fn tag_sentence<S: AsRef<str>>(&self, words: &[S]) -> Sentence {
        let owned: Vec<String> = words.iter().map(|word| word.as_ref().to_string()).collect();
        let tags = self.tag_words(&owned);

        owned
            .into_iter()
            .zip(tags)
            .map(|(word, tag)| TaggedWord::new(word, tag))
            .collect()
    }
}
