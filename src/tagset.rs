//! Mappings from source-corpus tagsets to the universal tagset.
//!
//! Each supported source tagset ships a fixed table reconciling its native
//! tag vocabulary with the 12-symbol universal tagset. Tags absent from a
//! table are resolved to the table's default, deterministically and without
//! error: an unknown source tag is an annotation artifact, not a failure.

use indexmap::IndexMap;

use crate::types::{Corpus, Sentence, UniversalTag};

pub mod floresta;
pub mod macmorpho;
pub mod nilc;

/// A finite mapping from source-tagset strings to universal tags, plus the
/// default universal tag used for source tags absent from the table.
///
/// The table is insertion-ordered so it iterates exactly as its author wrote
/// it, which keeps table dumps and diffs against the tagset manuals readable.
#[derive(Debug, Clone)]
pub struct TagMapping {
    table: IndexMap<String, UniversalTag>,
    default: UniversalTag,
}

impl TagMapping {
    pub fn new(default: UniversalTag) -> Self {
        TagMapping {
            table: IndexMap::new(),
            default,
        }
    }

    /// Inserts entries for every source tag in `keys`, all mapping to `tag`.
    /// The tagset tables are written as runs of same-target keys, mirroring
    /// how the tagset manuals group them.
    fn insert_all(&mut self, keys: &[&str], tag: UniversalTag) {
        for key in keys {
            self.table.insert((*key).to_string(), tag);
        }
    }

    pub fn default_tag(&self) -> UniversalTag {
        self.default
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.table.contains_key(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, UniversalTag)> + '_ {
        self.table.iter().map(|(key, tag)| (key.as_str(), *tag))
    }

    /// Maps one source tag to its universal tag, falling back to the default
    /// for tags absent from the table. Never fails.
    pub fn map_tag(&self, tag: &str) -> UniversalTag {
        self.table.get(tag).copied().unwrap_or(self.default)
    }

    /// Maps every token's tag, preserving words and order.
    pub fn map_sentence(&self, sentence: &Sentence) -> Sentence {
        sentence
            .iter()
            .map(|token| token.with_tag(self.map_tag(token.tag()).as_str()))
            .collect()
    }

    /// Lazily maps every sentence of a corpus. The iterator is restartable:
    /// calling this again on the same corpus yields the same sequence, as the
    /// mapping holds no mutable state.
    pub fn map_corpus<'a>(&'a self, corpus: &'a Corpus) -> impl Iterator<Item = Sentence> + 'a {
        corpus.iter().map(move |sentence| self.map_sentence(sentence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaggedWord;

    #[test]
    fn unknown_tags_resolve_to_the_default() {
        let mapping = floresta::mapping();

        assert!(!mapping.contains("no-such-tag"));
        assert_eq!(mapping.map_tag("no-such-tag"), UniversalTag::X);
        assert!(mapping.contains(""));
        assert_eq!(mapping.map_tag(""), UniversalTag::Prt);
    }

    #[test]
    fn every_table_entry_maps_to_itself() {
        for mapping in &[floresta::mapping(), macmorpho::mapping(), nilc::mapping()] {
            for (key, tag) in mapping.iter() {
                assert_eq!(mapping.map_tag(key), tag);
            }
        }
    }

    #[test]
    fn map_sentence_preserves_words_and_order() {
        let mapping = macmorpho::mapping();
        let sentence = vec![
            TaggedWord::new("O", "ART"),
            TaggedWord::new("gato", "N"),
            TaggedWord::new("dorme", "V"),
        ];

        let mapped = mapping.map_sentence(&sentence);

        assert_eq!(
            mapped,
            vec![
                TaggedWord::new("O", "DET"),
                TaggedWord::new("gato", "NOUN"),
                TaggedWord::new("dorme", "VERB"),
            ]
        );
    }

    #[test]
    fn map_corpus_is_restartable() {
        let mapping = nilc::mapping();
        let corpus = Corpus::from(vec![
            vec![TaggedWord::new("bom", "ADJ"), TaggedWord::new("dia", "N")],
            vec![TaggedWord::new("ocorrido", "INT")],
        ]);

        let first: Vec<Sentence> = mapping.map_corpus(&corpus).collect();
        let second: Vec<Sentence> = mapping.map_corpus(&corpus).collect();

        assert_eq!(first, second);
        assert_eq!(first[1][0], TaggedWord::new("ocorrido", "VERB"));
    }
}
