//! Password validator - runs the rule battery and collects violations.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::particular_words::ParticularWords;
use crate::rules::{RuleContext, rule_fn};
use crate::types::{IdentityFields, RuleName, UnknownRule, ViolationReport};

/// Evaluation order of the full battery: rules 1 to 7, then 9, then 8.
pub const FULL_BATTERY: [RuleName; 9] = [
    RuleName::CaseSensitivity,
    RuleName::NumericCharacter,
    RuleName::SpecialCharacter,
    RuleName::Length,
    RuleName::UserInfo,
    RuleName::WhiteSpaces,
    RuleName::ParticularWords,
    RuleName::CharactersSequence,
    RuleName::OldPassword,
];

/// Validates one candidate password against the rules.
///
/// Inputs are borrowed and never modified; validating twice gives the same
/// report.
///
/// # Example
///
/// ```rust
/// use password_rules::{IdentityFields, PasswordValidator};
/// use secrecy::SecretString;
///
/// let candidate = SecretString::new("johnsmith99".to_string().into());
/// let report = PasswordValidator::new(&candidate)
///     .with_identity(IdentityFields::new().first_name("John"))
///     .validate();
/// assert!(!report.is_empty());
/// ```
#[derive(Debug)]
pub struct PasswordValidator<'a> {
    password: &'a SecretString,
    identity: IdentityFields,
    prior: Option<&'a SecretString>,
    particular_words: &'a ParticularWords,
}

impl<'a> PasswordValidator<'a> {
    pub fn new(password: &'a SecretString) -> Self {
        Self {
            password,
            identity: IdentityFields::default(),
            prior: None,
            particular_words: ParticularWords::builtin(),
        }
    }

    pub fn with_identity(mut self, identity: IdentityFields) -> Self {
        self.identity = identity;
        self
    }

    /// Sets the prior password. An empty prior password is treated as absent.
    pub fn with_prior_password(mut self, prior: &'a SecretString) -> Self {
        self.prior = Some(prior);
        self
    }

    /// Replaces the built-in particular words, e.g. with a list from
    /// [`ParticularWords::from_env`].
    pub fn with_particular_words(mut self, words: &'a ParticularWords) -> Self {
        self.particular_words = words;
        self
    }

    /// Runs the full battery in [`FULL_BATTERY`] order.
    pub fn validate(&self) -> ViolationReport {
        self.run_rules(&FULL_BATTERY, || false).unwrap_or_default()
    }

    /// Runs exactly `rules`, in the given order. Repeated names run repeatedly.
    pub fn validate_subset(&self, rules: &[RuleName]) -> ViolationReport {
        self.run_rules(rules, || false).unwrap_or_default()
    }

    /// Like [`PasswordValidator::validate_subset`], with rules given by their
    /// method-style names such as `"validateLength"`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownRule`] for the first name that is not a rule; no rule
    /// runs in that case.
    pub fn validate_named<S: AsRef<str>>(&self, names: &[S]) -> Result<ViolationReport, UnknownRule> {
        let rules = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<RuleName>, _>>()?;
        Ok(self.validate_subset(&rules))
    }

    /// Runs the full battery, checking `token` before each rule.
    ///
    /// Returns `None` if the token was cancelled before all rules ran.
    #[cfg(feature = "async")]
    pub fn validate_cancellable(&self, token: &CancellationToken) -> Option<ViolationReport> {
        self.run_rules(&FULL_BATTERY, || token.is_cancelled())
    }

    fn run_rules(&self, rules: &[RuleName], cancelled: impl Fn() -> bool) -> Option<ViolationReport> {
        let ctx = RuleContext::new(
            self.password.expose_secret(),
            &self.identity,
            self.prior.map(|p| p.expose_secret()),
            self.particular_words,
        );
        let mut report = ViolationReport::default();

        for &rule in rules {
            if cancelled() {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password validation cancelled before rule {}", rule);
                return None;
            }
            report.extend(rule_fn(rule)(&ctx));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Password validation finished: {} rules, {} violations {:?}",
            rules.len(),
            report.len(),
            report.iter().map(|v| v.rule).collect::<Vec<_>>()
        );

        Some(report)
    }
}

/// Validates `password` with no identity and no prior password.
pub fn validate_password(password: &SecretString) -> ViolationReport {
    PasswordValidator::new(password).validate()
}

/// Async version that sends the report via channel.
///
/// Nothing is sent if `token` is cancelled during validation.
#[cfg(feature = "async")]
pub async fn validate_tx(
    validator: &PasswordValidator<'_>,
    token: CancellationToken,
    tx: mpsc::Sender<ViolationReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("validation is about to start...");

    let Some(report) = validator.validate_cancellable(&token) else {
        return;
    };

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation report: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
