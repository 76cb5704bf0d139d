//! Normalization of raw tagged corpora into universal-tagged corpora.
//!
//! A [`Tagset`] identifies the source tagset family of a corpus. It selects
//! the mapping table and the tag-string preprocessing to apply before lookup,
//! and [`normalize`] runs both over a whole corpus.

use std::str::FromStr;

use lazy_static::lazy_static;

use crate::tagset::{floresta, macmorpho, nilc, TagMapping};
use crate::types::{Corpus, Sentence};
use crate::Error;

lazy_static! {
    static ref FLORESTA: TagMapping = floresta::mapping();
    static ref MACMORPHO: TagMapping = macmorpho::mapping();
    static ref NILC: TagMapping = nilc::mapping();
}

/// A supported source tagset family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tagset {
    /// Floresta Sintá(c)tica (Linguateca); lowercase tags carrying syntactic
    /// information that is stripped before lookup.
    Floresta,
    /// Mac-Morpho (NILC).
    MacMorpho,
    /// NILC tagset as used by the LacioWeb corpus.
    Nilc,
}

impl Tagset {
    pub const ALL: [Tagset; 3] = [Tagset::Floresta, Tagset::MacMorpho, Tagset::Nilc];

    pub fn name(&self) -> &'static str {
        match self {
            Tagset::Floresta => "floresta",
            Tagset::MacMorpho => "macmorpho",
            Tagset::Nilc => "nilc",
        }
    }

    /// The mapping table for this family. Tables are built once per process
    /// and shared read-only afterwards.
    pub fn mapping(&self) -> &'static TagMapping {
        match self {
            Tagset::Floresta => &FLORESTA,
            Tagset::MacMorpho => &MACMORPHO,
            Tagset::Nilc => &NILC,
        }
    }

    /// Family-specific preprocessing of a raw tag string before table lookup.
    /// Floresta tags are reduced to their POS component; the other families
    /// use their tags as-is.
    pub fn pos_tag<'t>(&self, raw: &'t str) -> &'t str {
        match self {
            Tagset::Floresta => floresta::pos_tag(raw),
            Tagset::MacMorpho | Tagset::Nilc => raw,
        }
    }
}

impl FromStr for Tagset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "floresta" => Ok(Tagset::Floresta),
            "macmorpho" | "mac-morpho" | "mac_morpho" => Ok(Tagset::MacMorpho),
            "nilc" | "lacioweb" => Ok(Tagset::Nilc),
            other => Err(Error::Config(format!(
                "unknown tagset `{}`, expected one of: floresta, macmorpho, nilc",
                other
            ))),
        }
    }
}

/// Normalizes one sentence: preprocesses each raw tag for the family, then
/// maps it to the universal tagset. Words and order are preserved.
pub fn normalize_sentence(sentence: &Sentence, tagset: Tagset) -> Sentence {
    let mapping = tagset.mapping();
    sentence
        .iter()
        .map(|token| {
            let pos = tagset.pos_tag(token.tag());
            token.with_tag(mapping.map_tag(pos).as_str())
        })
        .collect()
}

/// Normalizes a whole corpus to the universal tagset.
pub fn normalize(corpus: &Corpus, tagset: Tagset) -> Corpus {
    corpus
        .iter()
        .map(|sentence| normalize_sentence(sentence, tagset))
        .collect()
}
