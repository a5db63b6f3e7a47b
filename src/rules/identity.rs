//! User info rule - the password must not contain the account identity.

use super::{RuleContext, RuleResult};
use crate::types::{RuleName, Violation};

pub const CONTAINS_EMAIL: &str = "Password must not contains the user's account email.";
pub const CONTAINS_FIRST_NAME: &str =
    "Password must not contains the user's entire account first name.";
pub const CONTAINS_LAST_NAME: &str =
    "Password must not contains the user's entire account last name.";
pub const CONTAINS_USER_NAME: &str =
    "Password must not contains the user's entire account user name.";

fn contains_ignore_case(lowered: &str, needle: &str) -> bool {
    !needle.is_empty() && lowered.contains(&needle.to_lowercase())
}

fn contains_any_token(lowered: &str, field: &str) -> bool {
    field
        .split_whitespace()
        .any(|token| contains_ignore_case(lowered, token))
}

/// Checks the email local part, each first and last name token, the whole
/// last name and the whole user name, case-insensitively.
///
/// The last name is checked twice (any token, then the whole field), so a
/// single-token last name that matches yields two identical violations.
pub fn user_info_rule(ctx: &RuleContext<'_>) -> RuleResult {
    let identity = ctx.identity;
    let lowered = ctx.lowered.as_str();
    let mut violations = Vec::new();

    let local_part = identity.email.split('@').next().unwrap_or_default();
    if contains_ignore_case(lowered, local_part) {
        violations.push(Violation::new(RuleName::UserInfo, CONTAINS_EMAIL));
    }

    if contains_any_token(lowered, &identity.first_name) {
        violations.push(Violation::new(RuleName::UserInfo, CONTAINS_FIRST_NAME));
    }

    if contains_any_token(lowered, &identity.last_name) {
        violations.push(Violation::new(RuleName::UserInfo, CONTAINS_LAST_NAME));
    }
    if contains_ignore_case(lowered, &identity.last_name) {
        violations.push(Violation::new(RuleName::UserInfo, CONTAINS_LAST_NAME));
    }

    if contains_ignore_case(lowered, &identity.user_name) {
        violations.push(Violation::new(RuleName::UserInfo, CONTAINS_USER_NAME));
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{run, run_with};
    use crate::types::IdentityFields;

    fn check(password: &str, identity: IdentityFields) -> Vec<&'static str> {
        run_with(user_info_rule, password, &identity, None)
    }

    #[test]
    fn test_user_info_rule_empty_identity() {
        assert!(run(user_info_rule, "johnsmith99").is_empty());
    }

    #[test]
    fn test_user_info_rule_first_name_case_insensitive() {
        let identity = IdentityFields::new().first_name("John");
        assert_eq!(check("johnsmith99", identity), vec![CONTAINS_FIRST_NAME]);
    }

    #[test]
    fn test_user_info_rule_first_name_any_token_reported_once() {
        let identity = IdentityFields::new().first_name("Mary  Ann");
        assert_eq!(check("xMARYannx", identity), vec![CONTAINS_FIRST_NAME]);
    }

    #[test]
    fn test_user_info_rule_email_local_part() {
        let identity = IdentityFields::new().email("J.Doe@example.com");
        assert_eq!(check("!j.doe2024", identity.clone()), vec![CONTAINS_EMAIL]);
        assert!(check("example.com", identity).is_empty());
    }

    #[test]
    fn test_user_info_rule_email_without_at() {
        let identity = IdentityFields::new().email("jdoe");
        assert_eq!(check("xxjdoexx", identity), vec![CONTAINS_EMAIL]);
    }

    #[test]
    fn test_user_info_rule_single_token_last_name_reported_twice() {
        let identity = IdentityFields::new().last_name("Smith");
        assert_eq!(
            check("johnsmith99", identity),
            vec![CONTAINS_LAST_NAME, CONTAINS_LAST_NAME]
        );
    }

    #[test]
    fn test_user_info_rule_multi_token_last_name() {
        let identity = IdentityFields::new().last_name("Van Damme");
        // token match only; the whole "van damme" is absent
        assert_eq!(check("damme#1", identity.clone()), vec![CONTAINS_LAST_NAME]);
        assert_eq!(
            check("van damme", identity),
            vec![CONTAINS_LAST_NAME, CONTAINS_LAST_NAME]
        );
    }

    #[test]
    fn test_user_info_rule_user_name_whole_field() {
        let identity = IdentityFields::new().user_name("admin user");
        assert_eq!(check("Admin User!", identity.clone()), vec![CONTAINS_USER_NAME]);
        assert!(check("adminuser", identity).is_empty());
    }

    #[test]
    fn test_user_info_rule_all_fields_in_order() {
        let identity = IdentityFields::new()
            .email("kim@example.com")
            .first_name("Lee")
            .last_name("Park")
            .user_name("klp");
        assert_eq!(
            check("kimleeparkklp", identity),
            vec![
                CONTAINS_EMAIL,
                CONTAINS_FIRST_NAME,
                CONTAINS_LAST_NAME,
                CONTAINS_LAST_NAME,
                CONTAINS_USER_NAME,
            ]
        );
    }
}
