use smallvec::SmallVec;

/// Positions in a composed answer that are filled with separator spaces
/// automatically.  Positions count characters and start at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpacingRule(&'static [usize]);

impl SpacingRule {
    /// Vehicle code descriptions look like `4x4 BB Chassis`
    pub const CODES: Self = Self(&[3, 6]);

    pub const fn none() -> Self {
        Self(&[])
    }

    fn separator_at(self, position: usize) -> bool {
        self.0.contains(&position)
    }
}

impl Default for SpacingRule {
    fn default() -> Self {
        Self::none()
    }
}

/// Strips surrounding whitespace and removes every space character.
/// Comparison after this is exact and case sensitive.
pub fn normalize(answer: &str) -> String {
    answer.trim().chars().filter(|&c| c != ' ').collect()
}

/// An answer built from discrete tokens
#[derive(Debug, Clone, Default)]
pub(crate) struct Composer {
    text: String,
    /// Length of `text` before each token was appended
    boundaries: SmallVec<[usize; 16]>,
    spacing: SpacingRule,
}

impl Composer {
    pub fn new(spacing: SpacingRule) -> Self {
        Self {
            text: String::new(),
            boundaries: SmallVec::new_const(),
            spacing,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Length of the answer as it will be judged
    pub fn normalized_len(&self) -> usize {
        normalize(&self.text).chars().count()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.boundaries.clear();
    }

    /// Appends `token`, then fills a separator if the answer now ends right
    /// before one.  Returns false if the token added nothing.
    pub fn push(&mut self, token: &str) -> bool {
        let token = if self.text.ends_with(' ') {
            token.trim_start_matches(' ')
        } else {
            token
        };
        if token.is_empty() {
            return false;
        }

        self.boundaries.push(self.text.len());
        for c in token.chars() {
            self.text.push(c);
            if c != ' ' && self.spacing.separator_at(self.char_len()) {
                self.text.push(' ');
            }
        }
        true
    }

    /// Removes the last token along with any separators filled after it
    pub fn pop(&mut self) -> bool {
        match self.boundaries.pop() {
            Some(len) => {
                self.text.truncate(len);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_removes_spaces_but_keeps_case() {
        assert_eq!(normalize("  4x4 BB  Chassis \n"), "4x4BBChassis");
        assert_eq!(normalize("House"), "House");
        assert_eq!(normalize("\t"), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in ["", " a b ", "\tx\u{a0}y ", "4x4 BB Chassis", "książka  "] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn normalize_keeps_interior_non_space_whitespace() {
        assert_eq!(normalize(" a\tb "), "a\tb");
    }

    #[test]
    fn codes_spacing_fills_separators() {
        let mut composer = Composer::new(SpacingRule::CODES);
        for token in ["4", "x", "4", "B", "B", "Chassis"] {
            assert!(composer.push(token));
        }
        assert_eq!(composer.text(), "4x4 BB Chassis");
        assert_eq!(normalize(composer.text()), "4x4BBChassis");
        assert_eq!(composer.normalized_len(), 12);
    }

    #[test]
    fn leading_space_does_not_double_a_separator() {
        let mut composer = Composer::new(SpacingRule::CODES);
        for token in ["4", "x", "4", " BB", " Chassis"] {
            composer.push(token);
        }
        assert_eq!(composer.text(), "4x4 BB Chassis");
    }

    #[test]
    fn pop_removes_token_and_its_separator() {
        let mut composer = Composer::new(SpacingRule::CODES);
        for token in ["4", "x", "4"] {
            composer.push(token);
        }
        assert_eq!(composer.text(), "4x4 ");
        assert!(composer.pop());
        assert_eq!(composer.text(), "4x");
        composer.push("4");
        composer.push("BB");
        assert_eq!(composer.text(), "4x4 BB ");
        assert!(composer.pop());
        assert_eq!(composer.text(), "4x4 ");
    }

    #[test]
    fn pop_on_empty_does_nothing() {
        let mut composer = Composer::new(SpacingRule::none());
        assert!(!composer.pop());
        assert_eq!(composer.text(), "");
    }

    #[test]
    fn no_spacing_keeps_tokens_verbatim() {
        let mut composer = Composer::new(SpacingRule::none());
        for token in ["h", "o", "u", "s", "e"] {
            composer.push(token);
        }
        assert_eq!(composer.text(), "house");
        assert_eq!(composer.char_len(), 5);
        assert_eq!(composer.normalized_len(), 5);
    }
}
