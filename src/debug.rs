use std::path::PathBuf;

use argh::FromArgs;

use crate::{load_vocabulary, vocabulary::Vocabulary};

/// Print a vocabulary file as it was understood
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "debug")]
pub struct Entry {
    /// the vocabulary to check, defaults to the built-in Polish words
    #[argh(positional)]
    set: Option<PathBuf>,
}

impl Entry {
    pub fn run(self) {
        let vocabulary = load_vocabulary!(self.set.as_deref(), Vocabulary::polish_english());
        println!("{} entries", vocabulary.len());
        for entry in vocabulary.entries() {
            println!("  {entry}");
        }
    }
}
