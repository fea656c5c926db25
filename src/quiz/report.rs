use std::fmt::{self, Display};

use crate::vocabulary::Entry;

/// Judged prompts in the order they were judged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally(Vec<Entry>);

impl Tally {
    pub(crate) fn record(&mut self, prompt: &str, answer: &str) {
        debug_assert!(!self.contains(prompt));
        self.0.push(Entry {
            prompt: prompt.to_owned(),
            answer: answer.to_owned(),
        });
    }

    pub fn contains(&self, prompt: &str) -> bool {
        self.0.iter().any(|entry| entry.prompt == prompt)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The outcome of answering one prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgment {
    pub prompt: String,
    pub correct: bool,
    /// The canonical answer, unnormalized, for display
    pub expected: String,
    /// What was submitted.  `None` when the user judged themselves
    pub given: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinalReport {
    pub correct: usize,
    pub incorrect: usize,
    pub incorrect_tally: Tally,
}

impl FinalReport {
    pub fn total(&self) -> usize {
        self.correct + self.incorrect
    }

    /// `correct / total * 100`, or 0 for an empty session
    pub fn percentage(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.correct as f64 / total as f64 * 100.0,
        }
    }
}

impl Display for FinalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} correct ({:.2}%)",
            self.correct,
            self.total(),
            self.percentage()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(correct: usize, incorrect: usize) -> FinalReport {
        FinalReport {
            correct,
            incorrect,
            incorrect_tally: Tally::default(),
        }
    }

    #[test]
    fn percentage_of_empty_session_is_zero() {
        assert_eq!(report(0, 0).percentage(), 0.0);
        assert_eq!(report(0, 0).to_string(), "0/0 correct (0.00%)");
    }

    #[test]
    fn percentage_is_shown_with_two_decimals() {
        assert_eq!(format!("{:.2}", report(3, 2).percentage()), "60.00");
        assert_eq!(format!("{:.2}", report(1, 2).percentage()), "33.33");
        assert_eq!(report(4, 0).to_string(), "4/4 correct (100.00%)");
    }

    #[test]
    fn tally_keeps_judgment_order() {
        let mut tally = Tally::default();
        tally.record("kot", "cat");
        tally.record("dom", "house");
        assert!(tally.contains("dom"));
        assert!(!tally.contains("pies"));
        let prompts: Vec<_> = tally.entries().iter().map(|e| e.prompt.as_str()).collect();
        assert_eq!(prompts, ["kot", "dom"]);
    }
}
