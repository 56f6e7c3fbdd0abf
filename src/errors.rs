use crate::WORD_LENGTH;

/// Errors produced while parsing a query from user input.
///
/// All validation happens up front; a query that parses cleanly cannot fail
/// later in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("template must be exactly {WORD_LENGTH} characters long, got {0}")]
    TemplateLength(usize),
    #[error("template may only contain letters and '_', found {0:?}")]
    TemplateChar(char),
    #[error("letter set must contain at least 1 letter")]
    EmptyLetterSet,
    #[error("letter set may only contain letters, found {0:?}")]
    LetterSetChar(char),
}
