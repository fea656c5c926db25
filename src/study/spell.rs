use std::{path::PathBuf, time::Duration};

use argh::FromArgs;
use crossterm::event::KeyCode;

use crate::{
    load_vocabulary,
    output::Repeat,
    quiz::{AnswerStyle, Quiz, QuizError, QuizOptions, SpacingRule},
    vocabulary::Vocabulary,
};

use super::{Controls, StudyError};

#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "spell")]
/// Spell out the English word for each Polish one
pub struct Entry {
    /// vocabulary file to study instead of the built-in Polish words
    #[argh(option)]
    set: Option<PathBuf>,
    /// study only this many random words
    #[argh(option)]
    sample: Option<usize>,
    /// milliseconds to show each verdict, defaults to 2000
    #[argh(option, default = "2000")]
    delay_ms: u64,
}

impl Entry {
    pub fn run(self) -> Result<(), StudyError> {
        let vocabulary = load_vocabulary!(self.set.as_deref(), Vocabulary::polish_english());
        let quiz = Quiz::new(QuizOptions {
            style: AnswerStyle::Compose(SpacingRule::none()),
            sample: self.sample,
        });
        super::run(
            quiz,
            vocabulary,
            Duration::from_millis(self.delay_ms),
            ComposeControls::default(),
        )
    }
}

/// Typed characters become tokens.  Function keys append whole words from
/// `words`
#[derive(Debug, Default)]
pub(super) struct ComposeControls {
    pub words: Vec<String>,
}

impl Controls for ComposeControls {
    fn key_pressed(&mut self, quiz: &mut Quiz, code: KeyCode) -> Result<(), QuizError> {
        match code {
            KeyCode::Char(c) => quiz.append(c.encode_utf8(&mut [0; 4])).map(drop),
            KeyCode::F(n) => match (n as usize).checked_sub(1).and_then(|i| self.words.get(i)) {
                Some(word) => quiz.append(word).map(drop),
                None => Ok(()),
            },
            KeyCode::Backspace => quiz.remove_last().map(drop),
            KeyCode::Enter => quiz.check().map(drop),
            _ => Ok(()),
        }
    }

    /// The composed answer with a blank for each character still missing
    fn answer_text(&self, quiz: &Quiz) -> String {
        let missing = u16::try_from(quiz.remaining()).unwrap_or(u16::MAX);
        format!("{}{}", quiz.composed(), Repeat('_', missing))
    }

    fn hint(&self) -> String {
        let mut hint = "Type the answer   Backspace: undo   Enter: check   Esc: quit".to_owned();
        for (i, word) in self.words.iter().enumerate() {
            hint.push_str(&format!("   F{}:{}", i + 1, word.trim_start()));
        }
        hint
    }
}
