//! Universal-tagset normalization and cascading backoff part-of-speech
//! taggers.
//!
//! # Overview
//!
//! cascata has two core abstractions:
//! - Tagset normalization: fixed [`TagMapping`][tagset::TagMapping] tables
//!   reconcile the native tag vocabularies of the supported Portuguese
//!   corpora (Floresta, Mac-Morpho, NILC/LacioWeb) with the 12-symbol
//!   universal tagset, with a deterministic default for unknown tags.
//! - A backoff cascade: an ordered chain of tagger variants (n-gram, affix,
//!   regex, default), most-specific first, where each variant delegates to
//!   the next on a miss. The built [`CascadeTagger`][cascade::CascadeTagger]
//!   is total: every token always receives a tag.
//!
//! # Examples
//!
//! Normalize a corpus, train a cascade and evaluate it:
//!
//! ```no_run
//! use cascata::cascade::CascadeTagger;
//! use cascata::chain::ChainSpec;
//! use cascata::corpus::{normalize, Tagset};
//! use cascata::types::Corpus;
//! use std::io::BufReader;
//!
//! let reader = BufReader::new(fs_err::File::open("macmorpho-train.txt")?);
//! let raw = Corpus::from_tagged_reader(reader, '_')?;
//! let train = normalize(&raw, Tagset::MacMorpho);
//!
//! let spec: ChainSpec = "trigram,bigram,unigram,default".parse()?;
//! let tagger = CascadeTagger::train(&spec, &train)?;
//!
//! println!("{:?}", tagger.tag_tokenized_sentence(&["o", "gato", "dorme"]));
//! tagger.save("tagger.bin")?;
//! # Ok::<(), cascata::Error>(())
//! ```

use std::io;

use thiserror::Error;

pub mod cascade;
pub mod chain;
pub mod corpus;
pub mod eval;
pub mod taggers;
pub mod tagset;
pub mod types;
pub(crate) mod utils;

pub use cascade::CascadeTagger;
pub use chain::{ChainSpec, TaggerChain};
pub use eval::EvaluationReport;
pub use types::{Corpus, UniversalTag};

#[derive(Error, Debug)]
pub enum Error {
    /// Unknown tagset identifier, unknown tagger-variant name or malformed
    /// chain specification.
    #[error("configuration error: {0}")]
    Config(String),
    /// A trainable variant was built without a non-empty training corpus.
    #[error("missing training data: {0}")]
    MissingData(String),
    /// Gold and predicted sequences differ in total token count.
    #[error("shape mismatch: expected {expected} tokens, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
    /// (De)serialization error. Can have occured during deserialization or
    /// during serialization.
    #[error(transparent)]
    Serialization(#[from] bincode::Error),
}
