//! Case sensitivity rule - requires both upper and lower case ASCII letters.

use super::{RuleContext, RuleResult};
use crate::types::{RuleName, Violation};

pub const MISSING_UPPERCASE: &str = "Password should include at least one upper case letter.";
pub const MISSING_LOWERCASE: &str = "Password should include at least one lower case letter.";

/// Checks for at least one `[A-Z]` and, independently, one `[a-z]`.
///
/// # Returns
/// Zero, one or two violations.
pub fn case_sensitivity_rule(ctx: &RuleContext<'_>) -> RuleResult {
    let pwd = ctx.password;
    let mut violations = Vec::new();
    if !pwd.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push(Violation::new(RuleName::CaseSensitivity, MISSING_UPPERCASE));
    }
    if !pwd.chars().any(|c| c.is_ascii_lowercase()) {
        violations.push(Violation::new(RuleName::CaseSensitivity, MISSING_LOWERCASE));
    }
    violations
}
