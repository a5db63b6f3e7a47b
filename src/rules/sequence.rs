//! Characters sequence rule - rejects 4 adjacent keyboard keys.

use super::{RuleContext, RuleResult};
use crate::keyboard::find_sequence;
use crate::types::{RuleName, Violation};

pub const SEQUENCED_CHARACTERS: &str = "Password cannot contain 4 sequenced characters.";

/// Looks for any sequential keyboard word, ignoring case.
pub fn characters_sequence_rule(ctx: &RuleContext<'_>) -> RuleResult {
    if find_sequence(&ctx.lowered).is_some() {
        return vec![Violation::new(RuleName::CharactersSequence, SEQUENCED_CHARACTERS)];
    }
    Vec::new()
}
