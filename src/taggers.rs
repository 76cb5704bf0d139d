//! The individual tagger variants a cascade is composed of.
//!
//! Every variant implements [`ContextTagger`]: given the words of a sentence,
//! the index of the current token and the tags already resolved for the
//! preceding tokens, it either commits to a tag or abstains with `None`.
//! Abstaining hands the token to the next variant down the cascade.

use std::collections::HashMap;

use enum_dispatch::enum_dispatch;
use itertools::Itertools;
use log::info;
use serde::{Deserialize, Serialize};

use crate::types::Corpus;
use crate::utils::regex::SerializableRegex;
use crate::Error;

#[enum_dispatch]
pub trait ContextTagger {
    /// Proposes a tag for `words[index]` or abstains. `history` holds the
    /// already-resolved tags of `words[..index]`.
    fn choose_tag(&self, words: &[String], index: usize, history: &[String]) -> Option<&str>;

    /// Short human-readable variant name, used in per-level reports.
    fn name(&self) -> String;
}

/// One trained tagger in a cascade.
#[enum_dispatch(ContextTagger)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TaggerNode {
    NGram(NGramTagger),
    Affix(AffixTagger),
    Regex(RegexTagger),
    Default(DefaultTagger),
}

/// Collapses per-context tag counts to the most frequent tag. Ties break
/// deterministically: higher count first, then lexicographically smaller tag.
fn most_frequent<C>(counts: HashMap<C, HashMap<String, usize>>) -> HashMap<C, String>
where
    C: std::hash::Hash + Eq,
{
    counts
        .into_iter()
        .filter_map(|(context, tag_counts)| {
            tag_counts
                .into_iter()
                .sorted_by(|(a_tag, a_count), (b_tag, b_count)| {
                    b_count.cmp(a_count).then_with(|| a_tag.cmp(b_tag))
                })
                .next()
                .map(|(tag, _)| (context, tag))
        })
        .collect()
}

/// Tags a token from the `n - 1` previously resolved tags plus the token
/// itself, as observed during training. `n = 1` is the unigram case, where
/// the context is the word alone.
///
/// Near the start of a sentence the context window shrinks to the available
/// tokens, the same way it does during training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NGramTagger {
    n: usize,
    contexts: HashMap<(Vec<String>, String), String>,
}

impl NGramTagger {
    pub fn train(n: usize, corpus: &Corpus) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::Config("n-gram order must be at least 1".into()));
        }
        if corpus.is_empty() {
            return Err(Error::MissingData(format!(
                "{}-gram tagger requires a non-empty training corpus",
                n
            )));
        }

        let mut counts: HashMap<(Vec<String>, String), HashMap<String, usize>> = HashMap::new();
        for sentence in corpus.iter() {
            let tags: Vec<&str> = sentence.iter().map(|token| token.tag()).collect();
            for (index, token) in sentence.iter().enumerate() {
                let context = tags[index.saturating_sub(n - 1)..index]
                    .iter()
                    .map(|tag| (*tag).to_string())
                    .collect();
                *counts
                    .entry((context, token.word().to_string()))
                    .or_default()
                    .entry(token.tag().to_string())
                    .or_default() += 1;
            }
        }

        let tagger = NGramTagger {
            n,
            contexts: most_frequent(counts),
        };
        info!("collapsed {} {}-gram contexts", tagger.context_count(), n);
        Ok(tagger)
    }

    pub fn context_count(&self) -> usize {
        self.contexts.len()
    }
}

impl ContextTagger for NGramTagger {
    fn choose_tag(&self, words: &[String], index: usize, history: &[String]) -> Option<&str> {
        let context: Vec<String> = history[index.saturating_sub(self.n - 1)..index].to_vec();
        self.contexts
            .get(&(context, words[index].clone()))
            .map(String::as_str)
    }

    fn name(&self) -> String {
        match self.n {
            1 => "Unigram".to_string(),
            2 => "Bigram".to_string(),
            3 => "Trigram".to_string(),
            n => format!("{}-gram", n),
        }
    }
}

/// Tags a token from a fixed-length prefix or suffix, trained like a unigram
/// tagger over affixes. Generalizes to unknown words through productive
/// morphology (e.g. `-mente` adverbs).
///
/// A positive `affix_length` selects a prefix of that many characters, a
/// negative one a suffix. Words shorter than `min_stem_length` plus the affix
/// are abstained on. Lengths count characters, not bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffixTagger {
    affix_length: i32,
    min_stem_length: usize,
    contexts: HashMap<String, String>,
}

impl AffixTagger {
    pub fn train(affix_length: i32, min_stem_length: usize, corpus: &Corpus) -> Result<Self, Error> {
        if affix_length == 0 {
            return Err(Error::Config("affix length must be non-zero".into()));
        }
        if corpus.is_empty() {
            return Err(Error::MissingData(
                "affix tagger requires a non-empty training corpus".into(),
            ));
        }

        let mut tagger = AffixTagger {
            affix_length,
            min_stem_length,
            contexts: HashMap::new(),
        };

        let mut counts: HashMap<String, HashMap<String, usize>> = HashMap::new();
        for sentence in corpus.iter() {
            for token in sentence {
                if let Some(affix) = tagger.affix(token.word()) {
                    *counts
                        .entry(affix)
                        .or_default()
                        .entry(token.tag().to_string())
                        .or_default() += 1;
                }
            }
        }

        tagger.contexts = most_frequent(counts);
        Ok(tagger)
    }

    fn affix(&self, word: &str) -> Option<String> {
        let chars: Vec<char> = word.chars().collect();
        let length = self.affix_length.unsigned_abs() as usize;

        if chars.len() < self.min_stem_length + length {
            return None;
        }

        if self.affix_length > 0 {
            Some(chars[..length].iter().collect())
        } else {
            Some(chars[chars.len() - length..].iter().collect())
        }
    }
}

impl ContextTagger for AffixTagger {
    fn choose_tag(&self, words: &[String], index: usize, _history: &[String]) -> Option<&str> {
        self.affix(&words[index])
            .and_then(|affix| self.contexts.get(&affix))
            .map(String::as_str)
    }

    fn name(&self) -> String {
        "Affix".to_string()
    }
}

/// Tags a token by the first matching pattern of an ordered rule list.
/// Needs no training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegexTagger {
    rules: Vec<(SerializableRegex, String)>,
}

impl RegexTagger {
    /// Compiles `(pattern, tag)` rules, keeping their declaration order.
    /// An invalid pattern is a configuration error.
    pub fn from_rules<P: AsRef<str>, T: Into<String>>(
        rules: impl IntoIterator<Item = (P, T)>,
    ) -> Result<Self, Error> {
        let rules = rules
            .into_iter()
            .map(|(pattern, tag)| {
                let regex = SerializableRegex::new(pattern.as_ref()).map_err(|error| {
                    Error::Config(format!(
                        "invalid regex rule `{}`: {}",
                        pattern.as_ref(),
                        error
                    ))
                })?;
                Ok((regex, tag.into()))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(RegexTagger { rules })
    }
}

impl ContextTagger for RegexTagger {
    fn choose_tag(&self, words: &[String], index: usize, _history: &[String]) -> Option<&str> {
        self.rules
            .iter()
            .find(|(regex, _)| regex.is_match(&words[index]))
            .map(|(_, tag)| tag.as_str())
    }

    fn name(&self) -> String {
        "Regex".to_string()
    }
}

/// Always tags with one constant tag. The canonical total terminal of a
/// cascade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultTagger {
    tag: String,
}

impl DefaultTagger {
    pub fn new<T: Into<String>>(tag: T) -> Self {
        DefaultTagger { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl ContextTagger for DefaultTagger {
    fn choose_tag(&self, _words: &[String], _index: usize, _history: &[String]) -> Option<&str> {
        Some(&self.tag)
    }

    fn name(&self) -> String {
        "Default".to_string()
    }
}
