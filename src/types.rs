//! Shared types: rule identifiers, violations, reports and identity fields.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifies one of the nine validation rules.
///
/// The variants are listed in rule number order (1 to 9). Note that the full
/// battery evaluates `CharactersSequence` before `OldPassword`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    /// Rule 1: at least one upper and one lower case letter.
    CaseSensitivity,
    /// Rule 2: at least one digit.
    NumericCharacter,
    /// Rule 3: at least one character outside `[A-Za-z0-9 ]`.
    SpecialCharacter,
    /// Rule 4: between 6 and 18 characters.
    Length,
    /// Rule 5: must not contain the account email, names or user name.
    UserInfo,
    /// Rule 6: no whitespace.
    WhiteSpaces,
    /// Rule 7: must not contain a known weak word.
    ParticularWords,
    /// Rule 8: must not be more than 50% similar to the prior password.
    OldPassword,
    /// Rule 9: must not contain 4 adjacent keyboard keys.
    CharactersSequence,
}

impl RuleName {
    /// All rules in rule number order.
    pub const ALL: [RuleName; 9] = [
        RuleName::CaseSensitivity,
        RuleName::NumericCharacter,
        RuleName::SpecialCharacter,
        RuleName::Length,
        RuleName::UserInfo,
        RuleName::WhiteSpaces,
        RuleName::ParticularWords,
        RuleName::OldPassword,
        RuleName::CharactersSequence,
    ];

    /// The method-style name accepted by [`FromStr`], e.g. `validateLength`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::CaseSensitivity => "validateCaseSensitivity",
            RuleName::NumericCharacter => "validateNumericCharacter",
            RuleName::SpecialCharacter => "validateSpecialCharacter",
            RuleName::Length => "validateLength",
            RuleName::UserInfo => "validateUserInfo",
            RuleName::WhiteSpaces => "validateWhiteSpaces",
            RuleName::ParticularWords => "validateParticularWords",
            RuleName::OldPassword => "validateOldPassword",
            RuleName::CharactersSequence => "validateCharactersSequence",
        }
    }

    /// Rule number as documented (1-based).
    pub fn number(&self) -> u8 {
        match self {
            RuleName::CaseSensitivity => 1,
            RuleName::NumericCharacter => 2,
            RuleName::SpecialCharacter => 3,
            RuleName::Length => 4,
            RuleName::UserInfo => 5,
            RuleName::WhiteSpaces => 6,
            RuleName::ParticularWords => 7,
            RuleName::OldPassword => 8,
            RuleName::CharactersSequence => 9,
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown password rule: {0}")]
pub struct UnknownRule(pub String);

impl FromStr for RuleName {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

/// A single failed rule check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub rule: RuleName,
    pub message: &'static str,
}

impl Violation {
    pub(crate) fn new(rule: RuleName, message: &'static str) -> Self {
        Self { rule, message }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// Ordered list of violations produced by one validation call.
///
/// Empty means the password was accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationReport {
    violations: Vec<Violation>,
}

impl ViolationReport {
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Messages in evaluation order. Duplicates are kept.
    pub fn messages(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.message).collect()
    }

    pub fn contains(&self, message: &str) -> bool {
        self.violations.iter().any(|v| v.message == message)
    }

    /// Returns `true` if `rule` produced at least one violation.
    pub fn violates(&self, rule: RuleName) -> bool {
        self.violations.iter().any(|v| v.rule == rule)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    pub(crate) fn extend(&mut self, violations: Vec<Violation>) {
        self.violations.extend(violations);
    }
}

impl IntoIterator for ViolationReport {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ViolationReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// Account identity the password must not contain.
///
/// Empty fields are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityFields {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
}

impl IdentityFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }
}
