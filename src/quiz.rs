//! The quiz session controller.
//!
//! A [`Quiz`] walks a shuffled sequence of prompts, accepts exactly one answer per
//! prompt and tallies the results.  It never draws anything: the study screens call
//! into it and poll its state afterwards.
//!
//! ```text
//! NotStarted -> AwaitingAnswer -> Judged -> (AwaitingAnswer | Complete)
//! ```

use std::fmt::{self, Display};

use rand::{
    seq::{index, SliceRandom},
    Rng,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::vocabulary::{Entry, Vocabulary};

use self::compose::Composer;
pub use self::{
    compose::{normalize, SpacingRule},
    report::{FinalReport, Judgment, Tally},
};

mod compose;
mod report;

/// How the user answers a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerStyle {
    /// The answer is built token by token and compared to the expected one
    Compose(SpacingRule),
    /// The card is flipped and the user says whether they knew it
    Flip,
}

impl Default for AnswerStyle {
    fn default() -> Self {
        AnswerStyle::Compose(SpacingRule::none())
    }
}

impl Display for AnswerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerStyle::Compose(_) => write!(f, "composing"),
            AnswerStyle::Flip => write!(f, "flipping"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizOptions {
    pub style: AnswerStyle,
    /// Drill only this many random prompts instead of the whole vocabulary
    pub sample: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    NotStarted,
    AwaitingAnswer,
    Judged,
    Complete,
}

impl Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use State::*;
        match self {
            NotStarted => write!(f, "not started"),
            AwaitingAnswer => write!(f, "awaiting an answer"),
            Judged => write!(f, "judged"),
            Complete => write!(f, "complete"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    StartSession,
    Advance,
    Append,
    RemoveLast,
    SubmitAnswer,
    Reveal,
    Judge,
    FinalReport,
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Operation::*;
        f.write_str(match self {
            StartSession => "start_session",
            Advance => "advance",
            Append => "append",
            RemoveLast => "remove_last",
            SubmitAnswer => "submit_answer",
            Reveal => "reveal",
            Judge => "judge",
            FinalReport => "final_report",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("vocabulary is empty")]
    EmptyVocabulary,
    #[error("sample size must be at least 1")]
    ZeroSample,
}

/// Why an operation was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("not allowed while the quiz is {0}")]
    State(State),
    #[error("not supported when answering by {0}")]
    Style(AnswerStyle),
    #[error("answer already has {0} characters")]
    AnswerFull(usize),
    #[error("answer is empty")]
    NothingToRemove,
    #[error("token adds nothing to the answer")]
    EmptyToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),
    #[error("cannot {operation}: {reason}")]
    InvalidOperation {
        operation: Operation,
        reason: Rejection,
    },
}

/// What [`Quiz::advance`] moved on to
#[derive(Debug, PartialEq)]
pub enum Step<'a> {
    Prompt(&'a str),
    Complete(FinalReport),
}

#[derive(Debug, Clone)]
pub struct Quiz {
    options: QuizOptions,
    state: State,
    vocabulary: Vocabulary,
    /// Indices into `vocabulary`, in the order they are asked
    sequence: Vec<usize>,
    /// Position in `sequence` of the current prompt.  Equal to the sequence length
    /// once complete
    cursor: usize,
    correct: Tally,
    incorrect: Tally,
    composer: Composer,
    revealed: bool,
    last_judgment: Option<Judgment>,
}

impl Quiz {
    #[must_use]
    pub fn new(options: QuizOptions) -> Self {
        let spacing = match options.style {
            AnswerStyle::Compose(spacing) => spacing,
            AnswerStyle::Flip => SpacingRule::none(),
        };
        Self {
            options,
            state: State::NotStarted,
            vocabulary: Vocabulary::new(),
            sequence: Vec::new(),
            cursor: 0,
            correct: Tally::default(),
            incorrect: Tally::default(),
            composer: Composer::new(spacing),
            revealed: false,
            last_judgment: None,
        }
    }

    /// Shuffles `vocabulary` and loads the first prompt, which is returned
    pub fn start_session(&mut self, vocabulary: Vocabulary) -> Result<&str, QuizError> {
        self.start_session_with_rng(vocabulary, &mut rand::thread_rng())
    }

    pub fn start_session_with_rng<R: Rng + ?Sized>(
        &mut self,
        vocabulary: Vocabulary,
        rng: &mut R,
    ) -> Result<&str, QuizError> {
        self.expect_state(Operation::StartSession, State::NotStarted)?;
        if vocabulary.is_empty() {
            return Err(ConfigurationError::EmptyVocabulary.into());
        }

        let len = vocabulary.len();
        self.sequence = match self.options.sample {
            Some(0) => return Err(ConfigurationError::ZeroSample.into()),
            Some(amount) if amount < len => index::sample(rng, len, amount).into_vec(),
            _ => {
                let mut sequence: Vec<usize> = (0..len).collect();
                sequence.shuffle(rng);
                sequence
            }
        };
        self.vocabulary = vocabulary;
        self.correct = Tally::default();
        self.incorrect = Tally::default();
        info!(
            prompts = self.sequence.len(),
            vocabulary = len,
            style = %self.options.style,
            "session started"
        );

        self.load(0);
        Ok(self.entry().prompt.as_str())
    }

    /// Moves past a judged prompt
    pub fn advance(&mut self) -> Result<Step<'_>, QuizError> {
        self.expect_state(Operation::Advance, State::Judged)?;
        let next = self.cursor + 1;
        if next >= self.sequence.len() {
            self.cursor = self.sequence.len();
            self.state = State::Complete;
            self.last_judgment = None;
            let report = self.report();
            info!(%report, "session complete");
            Ok(Step::Complete(report))
        } else {
            self.load(next);
            Ok(Step::Prompt(self.entry().prompt.as_str()))
        }
    }

    /// Adds a token to the composed answer and returns the answer so far.
    /// Rejected once the answer is as long as the expected one, both counted
    /// without spaces, or if the token adds nothing.
    pub fn append(&mut self, token: &str) -> Result<&str, QuizError> {
        self.expect_compose(Operation::Append)?;
        self.expect_state(Operation::Append, State::AwaitingAnswer)?;
        let limit = normalize(&self.entry().answer).chars().count();
        if self.composer.normalized_len() >= limit {
            return Err(self.reject(Operation::Append, Rejection::AnswerFull(limit)));
        }
        if !self.composer.push(token) {
            return Err(self.reject(Operation::Append, Rejection::EmptyToken));
        }
        Ok(self.composer.text())
    }

    /// Characters still missing from the composed answer, not counting spaces.
    /// Zero unless an answer is awaited.
    pub fn remaining(&self) -> usize {
        match self.state {
            State::AwaitingAnswer => normalize(&self.entry().answer)
                .chars()
                .count()
                .saturating_sub(self.composer.normalized_len()),
            _ => 0,
        }
    }

    /// Removes the last appended token and returns the answer so far
    pub fn remove_last(&mut self) -> Result<&str, QuizError> {
        self.expect_compose(Operation::RemoveLast)?;
        self.expect_state(Operation::RemoveLast, State::AwaitingAnswer)?;
        if !self.composer.pop() {
            return Err(self.reject(Operation::RemoveLast, Rejection::NothingToRemove));
        }
        Ok(self.composer.text())
    }

    /// Judges `candidate` against the current prompt's answer after [`normalize`]ing
    /// both.  Only one answer is accepted per prompt.
    pub fn submit_answer(&mut self, candidate: &str) -> Result<&Judgment, QuizError> {
        self.expect_compose(Operation::SubmitAnswer)?;
        self.expect_state(Operation::SubmitAnswer, State::AwaitingAnswer)?;
        let correct = normalize(candidate) == normalize(&self.entry().answer);
        Ok(self.record(correct, Some(candidate.to_owned())))
    }

    /// Submits the composed answer
    pub fn check(&mut self) -> Result<&Judgment, QuizError> {
        let candidate = self.composer.text().to_owned();
        self.submit_answer(&candidate)
    }

    /// Flips the current card, returning whether the answer is now showing
    pub fn reveal(&mut self) -> Result<bool, QuizError> {
        self.expect_flip(Operation::Reveal)?;
        self.expect_state(Operation::Reveal, State::AwaitingAnswer)?;
        self.revealed = !self.revealed;
        Ok(self.revealed)
    }

    /// Records the user's own verdict on the current card
    pub fn judge(&mut self, knew_it: bool) -> Result<&Judgment, QuizError> {
        self.expect_flip(Operation::Judge)?;
        self.expect_state(Operation::Judge, State::AwaitingAnswer)?;
        Ok(self.record(knew_it, None))
    }

    pub fn final_report(&self) -> Result<FinalReport, QuizError> {
        self.expect_state(Operation::FinalReport, State::Complete)?;
        Ok(self.report())
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == State::Complete
    }

    pub fn current_prompt(&self) -> Option<&str> {
        self.has_prompt().then(|| self.entry().prompt.as_str())
    }

    pub fn expected_answer(&self) -> Option<&str> {
        self.has_prompt().then(|| self.entry().answer.as_str())
    }

    pub fn composed(&self) -> &str {
        self.composer.text()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// The verdict on the current prompt, once it has been judged
    pub fn last_judgment(&self) -> Option<&Judgment> {
        self.last_judgment.as_ref()
    }

    /// Number of prompts judged and the number in the session
    pub fn progress(&self) -> (usize, usize) {
        (
            self.correct.len() + self.incorrect.len(),
            self.sequence.len(),
        )
    }

    pub fn correct_tally(&self) -> &Tally {
        &self.correct
    }

    pub fn incorrect_tally(&self) -> &Tally {
        &self.incorrect
    }

    fn has_prompt(&self) -> bool {
        matches!(self.state, State::AwaitingAnswer | State::Judged)
    }

    /// The entry under the cursor.  Only meaningful while there is a current prompt
    fn entry(&self) -> &Entry {
        &self.vocabulary.entries()[self.sequence[self.cursor]]
    }

    fn load(&mut self, cursor: usize) {
        self.cursor = cursor;
        self.composer.clear();
        self.revealed = false;
        self.last_judgment = None;
        self.state = State::AwaitingAnswer;
        debug!(cursor, prompt = %self.entry().prompt, "prompt loaded");
    }

    fn record(&mut self, correct: bool, given: Option<String>) -> &Judgment {
        let Entry { prompt, answer } = self.entry().clone();
        match correct {
            true => self.correct.record(&prompt, &answer),
            false => self.incorrect.record(&prompt, &answer),
        }
        self.state = State::Judged;
        debug!(%prompt, correct, "prompt judged");
        self.last_judgment.insert(Judgment {
            prompt,
            correct,
            expected: answer,
            given,
        })
    }

    fn report(&self) -> FinalReport {
        FinalReport {
            correct: self.correct.len(),
            incorrect: self.incorrect.len(),
            incorrect_tally: self.incorrect.clone(),
        }
    }

    fn reject(&self, operation: Operation, reason: Rejection) -> QuizError {
        debug!(%operation, %reason, "operation rejected");
        QuizError::InvalidOperation { operation, reason }
    }

    fn expect_state(&self, operation: Operation, state: State) -> Result<(), QuizError> {
        match self.state == state {
            true => Ok(()),
            false => Err(self.reject(operation, Rejection::State(self.state))),
        }
    }

    fn expect_compose(&self, operation: Operation) -> Result<(), QuizError> {
        match self.options.style {
            AnswerStyle::Compose(_) => Ok(()),
            style => Err(self.reject(operation, Rejection::Style(style))),
        }
    }

    fn expect_flip(&self, operation: Operation) -> Result<(), QuizError> {
        match self.options.style {
            AnswerStyle::Flip => Ok(()),
            style => Err(self.reject(operation, Rejection::Style(style))),
        }
    }
}
