//! Length rule - checks minimum and maximum password length.

use super::{RuleContext, RuleResult};
use crate::types::{RuleName, Violation};

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 18;

pub const TOO_SHORT: &str = "Password should be at least 6 characters long.";
pub const TOO_LONG: &str = "Password should be maximum 18 characters long.";

/// Checks the password length in characters against both bounds.
///
/// # Returns
/// - one violation if shorter than [`MIN_LENGTH`]
/// - one violation if longer than [`MAX_LENGTH`]
/// - nothing otherwise
pub fn length_rule(ctx: &RuleContext<'_>) -> RuleResult {
    let len = ctx.password.chars().count();
    let mut violations = Vec::new();
    if len < MIN_LENGTH {
        violations.push(Violation::new(RuleName::Length, TOO_SHORT));
    }
    if len > MAX_LENGTH {
        violations.push(Violation::new(RuleName::Length, TOO_LONG));
    }
    violations
}
