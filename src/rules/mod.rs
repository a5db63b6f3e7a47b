//! Password rules
//!
//! Each rule checks one property of the candidate and returns its own
//! violations. Rules never depend on each other.

mod case;
mod identity;
mod length;
mod numeric;
mod particular;
mod prior;
mod sequence;
mod special;
mod whitespace;

pub use case::{MISSING_LOWERCASE, MISSING_UPPERCASE, case_sensitivity_rule};
pub use identity::{
    CONTAINS_EMAIL, CONTAINS_FIRST_NAME, CONTAINS_LAST_NAME, CONTAINS_USER_NAME, user_info_rule,
};
pub use length::{MAX_LENGTH, MIN_LENGTH, TOO_LONG, TOO_SHORT, length_rule};
pub use numeric::{MISSING_DIGIT, numeric_character_rule};
pub use particular::{PARTICULAR_WORD, particular_words_rule};
pub use prior::{MAX_SIMILARITY, TOO_SIMILAR, old_password_rule};
pub use sequence::{SEQUENCED_CHARACTERS, characters_sequence_rule};
pub use special::{MISSING_SPECIAL, special_character_rule};
pub use whitespace::{CONTAINS_WHITESPACE, white_spaces_rule};

use crate::particular_words::ParticularWords;
use crate::types::{IdentityFields, RuleName, Violation};

/// Violations produced by one rule, in the order found.
pub type RuleResult = Vec<Violation>;

/// Signature shared by every rule.
pub type RuleFn = fn(&RuleContext<'_>) -> RuleResult;

/// Inputs every rule may read.
pub struct RuleContext<'a> {
    pub password: &'a str,
    /// `password` lower-cased once for the containment rules.
    pub lowered: String,
    pub identity: &'a IdentityFields,
    pub prior: Option<&'a str>,
    pub particular_words: &'a ParticularWords,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        password: &'a str,
        identity: &'a IdentityFields,
        prior: Option<&'a str>,
        particular_words: &'a ParticularWords,
    ) -> Self {
        Self {
            password,
            lowered: password.to_lowercase(),
            identity,
            prior,
            particular_words,
        }
    }
}

/// Maps a rule name to its check.
pub fn rule_fn(rule: RuleName) -> RuleFn {
    match rule {
        RuleName::CaseSensitivity => case_sensitivity_rule,
        RuleName::NumericCharacter => numeric_character_rule,
        RuleName::SpecialCharacter => special_character_rule,
        RuleName::Length => length_rule,
        RuleName::UserInfo => user_info_rule,
        RuleName::WhiteSpaces => white_spaces_rule,
        RuleName::ParticularWords => particular_words_rule,
        RuleName::OldPassword => old_password_rule,
        RuleName::CharactersSequence => characters_sequence_rule,
    }
}
