use crate::WORD_LENGTH;
use crate::errors::QueryError;

/// Marker for an unknown letter in a template string.
pub const WILDCARD: char = '_';

/// A position template: one slot per letter of the word, where `Some(c)` is a
/// confirmed (green) letter and `None` is a wildcard still to be solved.
///
/// Templates are parsed once from user input and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    slots: [Option<char>; WORD_LENGTH],
}

impl Template {
    /// Parse a template from its text form, e.g. `"sho__"`.
    ///
    /// Input is case-normalized to lowercase. Anything other than exactly
    /// [`WORD_LENGTH`] characters over `[a-z_]` is rejected.
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        let input = input.to_lowercase();
        let chars: Vec<char> = input.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(QueryError::TemplateLength(chars.len()));
        }

        let mut slots = [None; WORD_LENGTH];
        for (slot, &c) in slots.iter_mut().zip(&chars) {
            *slot = match c {
                WILDCARD => None,
                'a'..='z' => Some(c),
                other => return Err(QueryError::TemplateChar(other)),
            };
        }
        Ok(Self { slots })
    }

    pub fn slots(&self) -> &[Option<char>; WORD_LENGTH] {
        &self.slots
    }

    /// Whether the slot at `index` is still unknown.
    pub fn is_wildcard(&self, index: usize) -> bool {
        self.slots[index].is_none()
    }

    pub fn wildcard_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.unwrap_or(WILDCARD))?;
        }
        Ok(())
    }
}

/// A set of letters supplied as a constraint (absent or misplaced).
///
/// Duplicates in the input are irrelevant and dropped; order is normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSet {
    letters: Vec<char>,
}

impl LetterSet {
    /// Parse a letter set from raw input like `"tsgf"`.
    ///
    /// Input is case-normalized to lowercase and must be non-empty and
    /// contain only letters.
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        let input = input.to_lowercase();
        if input.is_empty() {
            return Err(QueryError::EmptyLetterSet);
        }
        let mut letters = Vec::new();
        for c in input.chars() {
            match c {
                'a'..='z' => letters.push(c),
                other => return Err(QueryError::LetterSetChar(other)),
            }
        }
        letters.sort_unstable();
        letters.dedup();
        Ok(Self { letters })
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.binary_search(&letter).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }
}
