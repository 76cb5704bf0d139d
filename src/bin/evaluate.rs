use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use fs_err::File;

use cascata::cascade::CascadeTagger;
use cascata::corpus::{normalize, Tagset};
use cascata::types::Corpus;

/// Evaluates a trained cascade against a held-out tagged corpus.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// A tagger saved by `train`.
    #[arg(long, short)]
    model: PathBuf,
    /// Held-out tagged corpus file.
    #[arg(long, short)]
    corpus: PathBuf,
    /// Source tagset of the corpus file.
    #[arg(long, short)]
    tagset: String,
    /// Word/tag separator in the corpus file.
    #[arg(long, default_value = "_")]
    separator: char,
    /// Also print the accuracy of each cascade level.
    #[arg(long)]
    levels: bool,
    /// Also print the confusion matrix.
    #[arg(long)]
    confusion: bool,
}

fn main() -> Result<(), cascata::Error> {
    env_logger::init();
    let args = Args::parse();

    let tagger = CascadeTagger::load(&args.model)?;
    let tagset: Tagset = args.tagset.parse()?;
    let raw = Corpus::from_tagged_reader(BufReader::new(File::open(&args.corpus)?), args.separator)?;
    let test = normalize(&raw, tagset);

    let report = tagger.evaluate(&test)?;
    println!("{}", report);

    if args.confusion {
        println!("{}", report.confusion);
    }

    if args.levels {
        println!("{:<10}{:<10}", "Tagger", "Accuracy");
        for level in tagger.evaluate_levels(&test)? {
            println!("{:<10}{:<10.4}", level.tagger, level.accuracy);
        }
    }

    Ok(())
}
