use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::WORD_LENGTH;

pub const EMBEDDED_WORDLIST: &str = include_str!("resources/wordlist.txt");

/// Membership oracle for valid words.
///
/// The filtering core depends only on this one predicate, so any word source
/// (embedded list, user file, a spell-check service) is interchangeable.
pub trait Dictionary {
    fn contains(&self, word: &str) -> bool;
}

/// An in-memory word bank backed by a hash set.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: HashSet<String>,
}

impl WordBank {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordBank {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

fn is_playable(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_lowercase())
}

pub fn load_wordbank_from_str(data: &str) -> WordBank {
    let words = data
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| is_playable(word))
        .collect();
    WordBank { words }
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordBank> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = HashSet::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if is_playable(&word) {
            words.insert(word);
        }
    }
    Ok(WordBank { words })
}

/// Location of an optional per-user wordlist that overrides the embedded one.
pub fn user_wordlist_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("wordle-helper").join("wordlist.txt"))
}
