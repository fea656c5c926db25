use std::{
    fmt::{self, Display, Write},
    fs,
    path::Path,
    str::FromStr,
};

use thiserror::Error;

use crate::output;

/// A prompt and the answer expected for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub prompt: String,
    pub answer: String,
}

/// A fixed mapping from prompts to expected answers.
///
/// Prompts are unique.  Insertion order is kept so a seeded shuffle always
/// produces the same session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error("answer for {prompt:?} is empty")]
    EmptyAnswer { prompt: String },
    #[error("prompt {0:?} is already in the vocabulary")]
    DuplicatePrompt(String),
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, rejecting empty sides and prompts that are already present
    pub fn insert(
        &mut self,
        prompt: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<&mut Self, VocabularyError> {
        let prompt = prompt.into();
        let answer = answer.into();
        if prompt.trim().is_empty() {
            return Err(VocabularyError::EmptyPrompt);
        }
        if answer.trim().is_empty() {
            return Err(VocabularyError::EmptyAnswer { prompt });
        }
        if self.get(&prompt).is_some() {
            return Err(VocabularyError::DuplicatePrompt(prompt));
        }
        self.entries.push(Entry { prompt, answer });
        Ok(self)
    }

    pub fn from_pairs<P, A>(
        pairs: impl IntoIterator<Item = (P, A)>,
    ) -> Result<Self, VocabularyError>
    where
        P: Into<String>,
        A: Into<String>,
    {
        let mut this = Self::new();
        for (prompt, answer) in pairs {
            this.insert(prompt, answer)?;
        }
        Ok(this)
    }

    pub fn get(&self, prompt: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.prompt == prompt)
            .map(|entry| entry.answer.as_str())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads the vocabulary from the path specified, printing error information if it
    /// cannot be loaded
    pub fn load_from_file_path(path: &Path) -> Option<Self> {
        match fs::read_to_string(path) {
            Ok(f) => match Vocabulary::from_str(&f) {
                Ok(vocabulary) => Some(vocabulary),
                Err(errors) => {
                    let mut s = format!("Unable to parse {}:\n", path.display());
                    for error in errors {
                        let _ = writeln!(s, "  {error}");
                    }
                    output::write_fatal_error(&s);
                    None
                }
            },
            Err(err) => {
                output::write_fatal_error(&format!(
                    "Unable to open {}: {err}",
                    path.display()
                ));
                None
            }
        }
    }

    /// Polish words and their English translations
    pub fn polish_english() -> Self {
        Self::from_literals(&[
            ("dom", "house"),
            ("kot", "cat"),
            ("pies", "dog"),
            ("jabłko", "apple"),
            ("woda", "water"),
            ("książka", "book"),
            ("okno", "window"),
            ("drzewo", "tree"),
            ("samochód", "car"),
            ("szkoła", "school"),
            ("chleb", "bread"),
            ("mleko", "milk"),
        ])
    }

    /// Vehicle type codes and their descriptions.  Every description is shaped
    /// like `4x4 BB Chassis` so it can be composed with [`SpacingRule::CODES`]
    ///
    /// [`SpacingRule::CODES`]: crate::quiz::SpacingRule::CODES
    pub fn vehicle_codes() -> Self {
        Self::from_literals(&[
            ("52E", "4x4 BB Chassis"),
            ("53F", "4x4 BB Tipper"),
            ("42C", "4x2 BB Chassis"),
            ("42T", "4x2 TT Tractor"),
            ("61A", "6x4 BB Chassis"),
            ("62B", "6x4 BB Tipper"),
            ("63C", "6x4 TT Tractor"),
            ("81D", "8x4 BB Mixer"),
        ])
    }

    /// Unchecked.  `built_in_sets_are_valid` covers the literals passed here
    fn from_literals(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|&(prompt, answer)| Entry {
                    prompt: prompt.to_owned(),
                    answer: answer.to_owned(),
                })
                .collect(),
        }
    }
}

/// One entry per line: `prompt: answer`.  Blank lines and lines starting with `#`
/// are skipped.  Every bad line is reported, not just the first one.
impl FromStr for Vocabulary {
    type Err = Vec<ParseError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut vocabulary = Vocabulary::new();
        let mut errors = Vec::new();

        for (line_number, line) in (1..).zip(s.lines().map(str::trim)) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split_once(':') {
                Some((prompt, answer)) => {
                    if let Err(source) = vocabulary.insert(prompt.trim(), answer.trim()) {
                        errors.push(ParseError::Entry {
                            source,
                            line_number,
                        });
                    }
                }
                None => errors.push(ParseError::MissingSeparator { line_number }),
            }
        }

        if errors.is_empty() {
            Ok(vocabulary)
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Missing ':' between prompt and answer on line {line_number}")]
    MissingSeparator { line_number: u32 },
    #[error("Bad entry on line {line_number}: {source}")]
    Entry {
        source: VocabularyError,
        line_number: u32,
    },
}

impl Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.prompt, self.answer)
    }
}

#[macro_export]
macro_rules! load_vocabulary {
    ($path:expr, $default:expr) => {
        match $path {
            Some(path) => match $crate::vocabulary::Vocabulary::load_from_file_path(path) {
                Some(vocabulary) => vocabulary,
                None => std::process::exit(1),
            },
            None => $default,
        }
    };
}
