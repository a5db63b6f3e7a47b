//! Numeric rule - requires a digit.

use super::{RuleContext, RuleResult};
use crate::types::{RuleName, Violation};

pub const MISSING_DIGIT: &str = "Password should have at least one numerical digit.";

pub fn numeric_character_rule(ctx: &RuleContext<'_>) -> RuleResult {
    if ctx.password.chars().any(|c| c.is_ascii_digit()) {
        return Vec::new();
    }
    vec![Violation::new(RuleName::NumericCharacter, MISSING_DIGIT)]
}
