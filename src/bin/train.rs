use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use fs_err::File;

use cascata::cascade::CascadeTagger;
use cascata::chain::{ChainSpec, TaggerOptions};
use cascata::corpus::{normalize, Tagset};
use cascata::types::Corpus;

/// Trains a cascading POS tagger on one or more tagged corpora and saves it.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Tagged corpus files (one sentence per line, `word<sep>TAG` tokens).
    /// Several corpora are concatenated after normalization.
    #[arg(long, short, required = true)]
    corpus: Vec<PathBuf>,
    /// Source tagset of each corpus file, in the same order. Give it once to
    /// use the same tagset for every file.
    #[arg(long, short, required = true)]
    tagset: Vec<String>,
    /// Word/tag separator in the corpus files.
    #[arg(long, default_value = "_")]
    separator: char,
    /// Cascade specification, most-specific variant first.
    #[arg(long, short, default_value = "trigram,bigram,unigram,default")]
    sequence: String,
    /// Fallback tag of the `default` variant and the whole cascade.
    #[arg(long)]
    default_tag: Option<String>,
    /// Order of the generic `ngram` variant.
    #[arg(long)]
    n: Option<usize>,
    /// Affix length of the `affix` variant (negative for suffixes).
    #[arg(long)]
    affix_length: Option<i32>,
    /// Minimum stem length of the `affix` variant.
    #[arg(long)]
    min_stem_length: Option<usize>,
    /// Where to write the trained tagger.
    #[arg(long, short)]
    output: PathBuf,
}

fn main() -> Result<(), cascata::Error> {
    env_logger::init();
    let args = Args::parse();

    if args.tagset.len() != 1 && args.tagset.len() != args.corpus.len() {
        return Err(cascata::Error::Config(format!(
            "got {} corpora but {} tagsets",
            args.corpus.len(),
            args.tagset.len()
        )));
    }

    let mut train = Corpus::new();
    for (i, path) in args.corpus.iter().enumerate() {
        let name = args.tagset.get(i).unwrap_or(&args.tagset[0]);
        let tagset: Tagset = name.parse()?;

        let raw = Corpus::from_tagged_reader(BufReader::new(File::open(path)?), args.separator)?;
        train.concat(normalize(&raw, tagset));
    }

    let names: Vec<&str> = args.sequence.split(',').collect();
    let options = TaggerOptions {
        default_tag: args.default_tag,
        n: args.n,
        affix_length: args.affix_length,
        min_stem_length: args.min_stem_length,
        regex_rules: None,
    };
    let spec = ChainSpec::parse(&names, options)?;

    let tagger = CascadeTagger::train(&spec, &train)?;
    tagger.save(&args.output)?;

    println!(
        "trained on {} sentences, saved to {}",
        train.len(),
        args.output.display()
    );
    Ok(())
}
