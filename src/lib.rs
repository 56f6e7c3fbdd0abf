// Library interface for wordle-helper
// This allows integration tests to access internal modules

pub mod cli;
pub mod errors;
pub mod solver;
pub mod template;
pub mod wordbank;

/// Word length for the target game
pub const WORD_LENGTH: usize = 5;

// Re-export commonly used items for easier testing
pub use errors::QueryError;
pub use solver::{Query, expand_candidates, find_valid_words};
pub use template::{LetterSet, Template, WILDCARD};
pub use wordbank::{
    Dictionary, EMBEDDED_WORDLIST, WordBank, load_wordbank_from_file, load_wordbank_from_str,
    user_wordlist_path,
};
