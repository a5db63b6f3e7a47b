//! Particular words rule - rejects passwords containing a known weak word.

use super::{RuleContext, RuleResult};
use crate::types::{RuleName, Violation};

pub const PARTICULAR_WORD: &str =
    "You are using a word or sequence that is not allowed, please try another password.";

/// Reports at most one violation, however many words match.
pub fn particular_words_rule(ctx: &RuleContext<'_>) -> RuleResult {
    match ctx.particular_words.find_in(&ctx.lowered) {
        Some(_) => vec![Violation::new(RuleName::ParticularWords, PARTICULAR_WORD)],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particular_words::ParticularWords;
    use crate::rules::RuleContext;
    use crate::rules::test_support::run;
    use crate::types::IdentityFields;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_particular_rule_exact_word() {
        assert_eq!(run(particular_words_rule, "password"), vec![PARTICULAR_WORD]);
    }

    #[test]
    fn test_particular_rule_substring_case_insensitive() {
        assert_eq!(run(particular_words_rule, "My-DRAGON-99"), vec![PARTICULAR_WORD]);
    }

    #[test]
    fn test_particular_rule_single_violation_for_many_matches() {
        assert_eq!(run(particular_words_rule, "password123456ninja"), vec![PARTICULAR_WORD]);
    }

    #[test]
    fn test_particular_rule_strong_password() {
        assert!(run(particular_words_rule, "CorrectHorse!7").is_empty());
    }

    #[test]
    fn test_particular_rule_custom_words() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "horse").expect("Failed to write");
        let words = ParticularWords::from_path(temp_file.path()).expect("words should load");

        let identity = IdentityFields::default();
        let ctx = RuleContext::new("CorrectHorse!7", &identity, None, &words);
        assert_eq!(particular_words_rule(&ctx).len(), 1);
    }
}
