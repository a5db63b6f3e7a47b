//! Old password rule - the new password must not resemble the prior one.

use super::{RuleContext, RuleResult};
use crate::similarity::similarity_percent;
use crate::types::{RuleName, Violation};

/// Highest accepted similarity percentage.
pub const MAX_SIMILARITY: u8 = 50;

pub const TOO_SIMILAR: &str =
    "New password is too similar with old one. Please enter another password.";

/// Compares against the prior password. Absent or empty prior passwords are
/// never compared.
pub fn old_password_rule(ctx: &RuleContext<'_>) -> RuleResult {
    let Some(prior) = ctx.prior.filter(|p| !p.is_empty()) else {
        return Vec::new();
    };
    if similarity_percent(ctx.password, prior) > MAX_SIMILARITY {
        return vec![Violation::new(RuleName::OldPassword, TOO_SIMILAR)];
    }
    Vec::new()
}
