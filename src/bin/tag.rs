use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;

use cascata::cascade::CascadeTagger;

/// Tags text with a trained cascade, one sentence per line.
///
/// Reads pre-tokenized sentences (whitespace-separated words) from stdin and
/// writes `word_TAG` tokens to stdout.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// A tagger saved by `train`.
    #[arg(long, short)]
    model: PathBuf,
    /// Treat input lines as raw text and split them on Unicode word
    /// boundaries instead of whitespace.
    #[arg(long)]
    raw: bool,
}

fn main() -> Result<(), cascata::Error> {
    env_logger::init();
    let args = Args::parse();

    let tagger = CascadeTagger::load(&args.model)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let tagged = if args.raw {
            tagger.tag_raw_text(&line)
        } else {
            let words: Vec<&str> = line.split_whitespace().collect();
            tagger.tag_tokenized_sentence(&words)
        };

        println!("{}", tagged.iter().join(" "));
    }

    Ok(())
}
