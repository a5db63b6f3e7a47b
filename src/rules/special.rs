//! Special character rule - requires something other than letters, digits and space.

use super::{RuleContext, RuleResult};
use crate::types::{RuleName, Violation};

pub const MISSING_SPECIAL: &str = "Password should have at least 1 special character.";

/// A literal space does not count as special; any non-ASCII character does.
pub fn special_character_rule(ctx: &RuleContext<'_>) -> RuleResult {
    let has_special = ctx
        .password
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && c != ' ');
    if has_special {
        return Vec::new();
    }
    vec![Violation::new(RuleName::SpecialCharacter, MISSING_SPECIAL)]
}
