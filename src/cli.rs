use clap::Parser;

use crate::errors::QueryError;
use crate::solver::Query;

/// Wordle helper CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Confirmed letters and underscores, where the latter represent unknown letters
    pub template: String,

    /// Incorrect (gray) letters, in any order
    #[arg(short = 'i', long = "incorrect-letters")]
    pub incorrect_letters: Option<String>,

    /// Misplaced (yellow) letters, in any order
    #[arg(short = 'm', long = "misplaced-letters")]
    pub misplaced_letters: Option<String>,

    /// Path to a newline-delimited wordlist file
    #[arg(short = 'w', long = "wordlist")]
    pub wordlist_path: Option<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

impl Cli {
    /// Validate the raw argument strings into a runnable query.
    pub fn to_query(&self) -> Result<Query, QueryError> {
        Query::from_args(
            &self.template,
            self.incorrect_letters.as_deref(),
            self.misplaced_letters.as_deref(),
        )
    }
}
