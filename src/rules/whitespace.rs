//! Whitespace rule.

use super::{RuleContext, RuleResult};
use crate::types::{RuleName, Violation};

pub const CONTAINS_WHITESPACE: &str = "Password cannot contain white spaces.";

pub fn white_spaces_rule(ctx: &RuleContext<'_>) -> RuleResult {
    if ctx.password.chars().any(char::is_whitespace) {
        return vec![Violation::new(RuleName::WhiteSpaces, CONTAINS_WHITESPACE)];
    }
    Vec::new()
}
