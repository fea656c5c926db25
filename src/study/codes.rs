use std::{path::PathBuf, time::Duration};

use argh::FromArgs;

use crate::{
    load_vocabulary,
    quiz::{AnswerStyle, Quiz, QuizOptions, SpacingRule},
    vocabulary::Vocabulary,
};

use super::{spell::ComposeControls, StudyError};

#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "codes")]
/// Name the vehicle type behind each code
pub struct Entry {
    /// vocabulary file to study instead of the built-in vehicle codes
    #[argh(option)]
    set: Option<PathBuf>,
    /// study only this many random codes
    #[argh(option)]
    sample: Option<usize>,
    /// milliseconds to show each verdict, defaults to 2000
    #[argh(option, default = "2000")]
    delay_ms: u64,
}

impl Entry {
    pub fn run(self) -> Result<(), StudyError> {
        let vocabulary = load_vocabulary!(self.set.as_deref(), Vocabulary::vehicle_codes());
        let controls = ComposeControls {
            words: body_words(&vocabulary),
        };
        let quiz = Quiz::new(QuizOptions {
            style: AnswerStyle::Compose(SpacingRule::CODES),
            sample: self.sample,
        });
        super::run(quiz, vocabulary, Duration::from_millis(self.delay_ms), controls)
    }
}

/// The last word of every answer, each once, as tokens with a leading space.
/// Capped at the twelve function keys.
fn body_words(vocabulary: &Vocabulary) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for entry in vocabulary.entries() {
        if let Some((_, word)) = entry.answer.rsplit_once(' ') {
            let word = format!(" {word}");
            if !words.contains(&word) {
                words.push(word);
            }
        }
    }
    words.truncate(12);
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_codes_have_four_body_words() {
        assert_eq!(
            body_words(&Vocabulary::vehicle_codes()),
            [" Chassis", " Tipper", " Tractor", " Mixer"]
        );
    }

    #[test]
    fn single_word_answers_have_no_body() {
        let vocabulary = Vocabulary::from_pairs([("X1", "Trailer"), ("X2", "6x4 BB Chassis")]).unwrap();
        assert_eq!(body_words(&vocabulary), [" Chassis"]);
    }
}
