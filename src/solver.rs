use itertools::Itertools;

use crate::errors::QueryError;
use crate::template::{LetterSet, Template};
use crate::wordbank::Dictionary;

/// A fully validated query, ready to run against any dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub template: Template,
    pub absent: Option<LetterSet>,
    pub misplaced: Option<LetterSet>,
}

impl Query {
    /// Build a query from raw user input, validating everything up front.
    pub fn from_args(
        template: &str,
        incorrect_letters: Option<&str>,
        misplaced_letters: Option<&str>,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            template: Template::parse(template)?,
            absent: incorrect_letters.map(LetterSet::parse).transpose()?,
            misplaced: misplaced_letters.map(LetterSet::parse).transpose()?,
        })
    }

    pub fn run<D: Dictionary>(&self, dictionary: &D) -> Vec<String> {
        find_valid_words(
            &self.template,
            self.absent.as_ref(),
            self.misplaced.as_ref(),
            dictionary,
        )
    }
}

const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Expand a template into every concrete word obtainable by substituting each
/// letter of the alphabet into every wildcard slot.
///
/// Confirmed slots keep their single letter, so a template with zero
/// wildcards expands to exactly one candidate. Distinct substitutions yield
/// distinct strings; no deduplication is needed.
pub fn expand_candidates(template: &Template) -> impl Iterator<Item = String> + '_ {
    template
        .slots()
        .iter()
        .map(|slot| match slot {
            Some(c) => vec![*c],
            None => ALPHABET.to_vec(),
        })
        .multi_cartesian_product()
        .map(|letters| letters.into_iter().collect())
}

/// Whether `word` puts an absent letter in a slot that was a wildcard.
///
/// Absent (gray) feedback is positional: the letter was tried at a wildcard
/// slot and found wrong there. It says nothing about slots that were already
/// confirmed, so occurrences of an absent letter at confirmed positions do
/// not disqualify the word. Every occurrence is checked, not just the first.
fn places_absent_letter_in_wildcard(word: &str, template: &Template, absent: &LetterSet) -> bool {
    word.chars()
        .enumerate()
        .any(|(i, c)| template.is_wildcard(i) && absent.contains(c))
}

/// Whether `word` shows every misplaced letter in at least one wildcard slot.
///
/// Misplaced (yellow) feedback means the letter belongs in the word but not
/// where it was tried, so it has to surface among the unresolved slots. An
/// occurrence that merely coincides with a confirmed position proves nothing.
fn shows_misplaced_letters_in_wildcards(
    word: &str,
    template: &Template,
    misplaced: &LetterSet,
) -> bool {
    misplaced.iter().all(|letter| {
        word.chars()
            .enumerate()
            .any(|(i, c)| c == letter && template.is_wildcard(i))
    })
}

/// Find every dictionary word consistent with the template and the optional
/// absent/misplaced letter constraints, sorted alphabetically.
///
/// Pure and stateless: for fixed inputs and a fixed dictionary the output is
/// exactly reproducible.
pub fn find_valid_words<D: Dictionary>(
    template: &Template,
    absent: Option<&LetterSet>,
    misplaced: Option<&LetterSet>,
    dictionary: &D,
) -> Vec<String> {
    log::debug!(
        "expanding template {template} ({} wildcard slots)",
        template.wildcard_count()
    );

    let mut words: Vec<String> = expand_candidates(template)
        .filter(|word| dictionary.contains(word))
        .filter(|word| {
            absent.is_none_or(|set| !places_absent_letter_in_wildcard(word, template, set))
        })
        .filter(|word| {
            misplaced.is_none_or(|set| shows_misplaced_letters_in_wildcards(word, template, set))
        })
        .collect();
    words.sort_unstable();

    log::debug!("{} words match all constraints", words.len());
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::load_wordbank_from_str;

    fn template(s: &str) -> Template {
        Template::parse(s).unwrap()
    }

    fn letters(s: &str) -> LetterSet {
        LetterSet::parse(s).unwrap()
    }

    #[test]
    fn test_expand_zero_wildcards_yields_single_candidate() {
        let candidates: Vec<String> = expand_candidates(&template("cable")).collect();
        assert_eq!(candidates, vec!["cable".to_string()]);
    }

    #[test]
    fn test_expand_one_wildcard_yields_26_candidates() {
        let candidates: Vec<String> = expand_candidates(&template("_able")).collect();
        assert_eq!(candidates.len(), 26);
        assert!(candidates.contains(&"aable".to_string()));
        assert!(candidates.contains(&"zable".to_string()));
        // Confirmed slots are preserved in every candidate.
        assert!(candidates.iter().all(|w| w.ends_with("able")));
    }

    #[test]
    fn test_expand_two_wildcards_yields_all_combinations() {
        let candidates: Vec<String> = expand_candidates(&template("sho__")).collect();
        assert_eq!(candidates.len(), 26 * 26);
        // Distinct substitutions always yield distinct strings.
        let unique: std::collections::HashSet<_> = candidates.iter().collect();
        assert_eq!(unique.len(), candidates.len());
    }

    #[test]
    fn test_dictionary_filter_keeps_only_real_words() {
        let bank = load_wordbank_from_str("cable\nfable\n");
        let words = find_valid_words(&template("_able"), None, None, &bank);
        assert_eq!(words, vec!["cable", "fable"]);
    }

    #[test]
    fn test_zero_wildcard_template_returns_itself_if_word() {
        let bank = load_wordbank_from_str("cable\n");
        let words = find_valid_words(&template("cable"), None, None, &bank);
        assert_eq!(words, vec!["cable"]);
    }

    #[test]
    fn test_zero_wildcard_template_returns_empty_if_not_word() {
        let bank = load_wordbank_from_str("cable\n");
        assert!(find_valid_words(&template("bable"), None, None, &bank).is_empty());
    }

    #[test]
    fn test_absent_letters_filter_wildcard_positions() {
        let bank = load_wordbank_from_str("cable\nfable\ngable\nsable\ntable\n");
        let words = find_valid_words(&template("_able"), Some(&letters("tsgf")), None, &bank);
        assert_eq!(words, vec!["cable"]);
    }

    #[test]
    fn test_absent_letter_allowed_at_confirmed_position() {
        // "showy" contains 's' and 'o', both marked absent, but only at
        // confirmed slots; gray feedback was only ever about the wildcards.
        let bank = load_wordbank_from_str("showy\nshore\nshoot\n");
        let words = find_valid_words(
            &template("sho__"),
            Some(&letters("cableutrnpsok")),
            None,
            &bank,
        );
        assert_eq!(words, vec!["showy"]);
    }

    #[test]
    fn test_absent_letter_checks_every_occurrence() {
        // 'o' is fine at the confirmed slot of "shoot" but its second
        // occurrence lands on a wildcard, which disqualifies it.
        let bank = load_wordbank_from_str("shoot\nshown\n");
        let words = find_valid_words(&template("sho__"), Some(&letters("ot")), None, &bank);
        assert_eq!(words, vec!["shown"]);
    }

    #[test]
    fn test_misplaced_letter_must_appear_in_wildcard() {
        let bank = load_wordbank_from_str("cable\nfable\n");
        let words = find_valid_words(&template("_able"), None, Some(&letters("c")), &bank);
        assert_eq!(words, vec!["cable"]);
    }

    #[test]
    fn test_misplaced_letter_at_confirmed_position_only_is_rejected() {
        // Both words contain 's', but in "sable" only at the confirmed slot;
        // yellow feedback demands it surface among the unknowns.
        let bank = load_wordbank_from_str("sable\nsassy\n");
        let words = find_valid_words(&template("sa___"), None, Some(&letters("s")), &bank);
        assert_eq!(words, vec!["sassy"]);
    }

    #[test]
    fn test_misplaced_letter_missing_entirely_is_rejected() {
        let bank = load_wordbank_from_str("cable\nfable\n");
        assert!(find_valid_words(&template("_able"), None, Some(&letters("z")), &bank).is_empty());
    }

    #[test]
    fn test_all_misplaced_letters_required() {
        let bank = load_wordbank_from_str("moxie\nmovie\n");
        let words = find_valid_words(&template("____e"), None, Some(&letters("xo")), &bank);
        assert_eq!(words, vec!["moxie"]);
    }

    #[test]
    fn test_absent_and_misplaced_combined() {
        let bank = load_wordbank_from_str("moxie\noxide\nmovie\nnoble\n");
        let words = find_valid_words(
            &template("____e"),
            Some(&letters("cablyuthsnr")),
            Some(&letters("xo")),
            &bank,
        );
        assert_eq!(words, vec!["moxie", "oxide"]);
    }

    #[test]
    fn test_results_are_sorted_and_unique() {
        let bank = load_wordbank_from_str("table\nsable\ngable\nfable\ncable\n");
        let words = find_valid_words(&template("_able"), None, None, &bank);
        assert_eq!(words, vec!["cable", "fable", "gable", "sable", "table"]);
    }

    #[test]
    fn test_query_is_idempotent() {
        let bank = load_wordbank_from_str("cable\nfable\ngable\n");
        let tpl = template("_able");
        let first = find_valid_words(&tpl, None, None, &bank);
        let second = find_valid_words(&tpl, None, None, &bank);
        assert_eq!(first, second);
    }
}
