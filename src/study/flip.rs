use std::{path::PathBuf, time::Duration};

use argh::FromArgs;
use crossterm::event::KeyCode;

use crate::{
    load_vocabulary,
    quiz::{AnswerStyle, Quiz, QuizError, QuizOptions},
    vocabulary::Vocabulary,
};

use super::{Controls, StudyError};

#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "flip")]
/// Flip through a few flashcards and say whether you knew them
pub struct Entry {
    /// vocabulary file to study instead of the built-in Polish words
    #[argh(option)]
    set: Option<PathBuf>,
    /// how many cards to draw, defaults to 5
    #[argh(option, default = "5")]
    sample: usize,
    /// milliseconds to show each verdict, defaults to 2000
    #[argh(option, default = "2000")]
    delay_ms: u64,
}

impl Entry {
    pub fn run(self) -> Result<(), StudyError> {
        let vocabulary = load_vocabulary!(self.set.as_deref(), Vocabulary::polish_english());
        let quiz = Quiz::new(QuizOptions {
            style: AnswerStyle::Flip,
            sample: Some(self.sample),
        });
        super::run(
            quiz,
            vocabulary,
            Duration::from_millis(self.delay_ms),
            FlipControls,
        )
    }
}

#[derive(Debug)]
struct FlipControls;

impl Controls for FlipControls {
    fn key_pressed(&mut self, quiz: &mut Quiz, code: KeyCode) -> Result<(), QuizError> {
        match code {
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up | KeyCode::Down => {
                quiz.reveal().map(drop)
            }
            KeyCode::Char('y') | KeyCode::Right => quiz.judge(true).map(drop),
            KeyCode::Char('n') | KeyCode::Left => quiz.judge(false).map(drop),
            _ => Ok(()),
        }
    }

    fn answer_text(&self, quiz: &Quiz) -> String {
        match quiz.is_revealed() || quiz.last_judgment().is_some() {
            true => quiz.expected_answer().unwrap_or_default().to_owned(),
            false => "?".to_owned(),
        }
    }

    fn hint(&self) -> String {
        "Space: flip   y/→: knew it   n/←: didn't   Esc: quit".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn started() -> Quiz {
        let mut quiz = Quiz::new(QuizOptions {
            style: AnswerStyle::Flip,
            sample: Some(5),
        });
        quiz.start_session_with_rng(Vocabulary::polish_english(), &mut StdRng::seed_from_u64(2))
            .unwrap();
        quiz
    }

    #[test]
    fn space_flips_the_card_both_ways() {
        let mut quiz = started();
        let expected = quiz.expected_answer().unwrap().to_owned();
        assert_eq!(FlipControls.answer_text(&quiz), "?");
        FlipControls.key_pressed(&mut quiz, KeyCode::Char(' ')).unwrap();
        assert_eq!(FlipControls.answer_text(&quiz), expected);
        FlipControls.key_pressed(&mut quiz, KeyCode::Char(' ')).unwrap();
        assert_eq!(FlipControls.answer_text(&quiz), "?");
    }

    #[test]
    fn judging_shows_the_answer_and_locks_the_card() {
        let mut quiz = started();
        FlipControls.key_pressed(&mut quiz, KeyCode::Left).unwrap();
        assert!(!quiz.last_judgment().unwrap().correct);
        assert_ne!(FlipControls.answer_text(&quiz), "?");
        assert!(FlipControls.key_pressed(&mut quiz, KeyCode::Char('y')).is_err());
        assert_eq!(quiz.incorrect_tally().len(), 1);
        assert!(quiz.correct_tally().is_empty());
    }

    #[test]
    fn whole_flip_session() {
        let mut quiz = started();
        while !quiz.is_complete() {
            FlipControls.key_pressed(&mut quiz, KeyCode::Char('y')).unwrap();
            quiz.advance().unwrap();
        }
        let report = quiz.final_report().unwrap();
        assert_eq!(report.total(), 5);
        assert_eq!(format!("{:.2}", report.percentage()), "100.00");
    }
}
