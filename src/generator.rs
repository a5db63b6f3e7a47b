//! Password generator - rejection-samples random passwords until one passes
//! every rule.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;
use thiserror::Error;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::rules::{MAX_LENGTH, MIN_LENGTH};
use crate::validator::validate_password;

/// Characters left out of the default alphabet because they are easy to confuse.
pub const DEFAULT_EXCLUDED: [char; 8] = ['0', '1', 'o', 'O', 'l', 'L', 'i', 'I'];

/// Attempt cap used by [`try_generate_password`] when none is set.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 10_000;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Invalid length range {min}..={max}: no length satisfies the 6 to 18 character rule")]
    InvalidLengthRange { min: usize, max: usize },
    #[error("Alphabet has {available} characters, at least {required} needed")]
    AlphabetTooSmall { available: usize, required: usize },
    #[error("Alphabet has no {0} character")]
    MissingCharacterClass(&'static str),
    #[error("No valid password found after {0} attempts")]
    AttemptsExhausted(u64),
    #[error("Password generation cancelled")]
    Cancelled,
    #[cfg(feature = "async")]
    #[error("Password generation timed out after {0:?}")]
    TimedOut(Duration),
    #[cfg(feature = "async")]
    #[error("Password generation task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// Options for [`generate_password`].
///
/// `excluded` only applies to the default alphabet; a custom alphabet is
/// used as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub min_len: usize,
    pub max_len: usize,
    pub alphabet: Option<String>,
    pub excluded: Vec<char>,
    /// `None` keeps sampling until a password passes.
    pub max_attempts: Option<u64>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            min_len: MIN_LENGTH,
            max_len: MAX_LENGTH,
            alphabet: None,
            excluded: DEFAULT_EXCLUDED.to_vec(),
            max_attempts: None,
        }
    }
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(mut self, min_len: usize, max_len: usize) -> Self {
        self.min_len = min_len;
        self.max_len = max_len;
        self
    }

    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }

    pub fn excluded(mut self, excluded: impl IntoIterator<Item = char>) -> Self {
        self.excluded = excluded.into_iter().collect();
        self
    }

    pub fn max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// The characters samples are drawn from.
    ///
    /// Defaults to printable ASCII 33..=126 minus `excluded`.
    pub fn resolved_alphabet(&self) -> Vec<char> {
        match &self.alphabet {
            Some(alphabet) => alphabet.chars().collect(),
            None => (33u8..=126)
                .map(char::from)
                .filter(|c| !self.excluded.contains(c))
                .collect(),
        }
    }

    /// Rejects options under which no sample can ever pass.
    ///
    /// This catches impossible length ranges, alphabets shorter than
    /// `min_len` and alphabets lacking a required character class. Other
    /// unsatisfiable alphabets (e.g. mostly whitespace) are only caught by
    /// `max_attempts`.
    pub fn check(&self) -> Result<(), GeneratorError> {
        if self.min_len > self.max_len || self.max_len < MIN_LENGTH || self.min_len > MAX_LENGTH {
            return Err(GeneratorError::InvalidLengthRange {
                min: self.min_len,
                max: self.max_len,
            });
        }

        let alphabet = self.resolved_alphabet();
        let required = self.min_len.max(MIN_LENGTH);
        if alphabet.len() < required {
            return Err(GeneratorError::AlphabetTooSmall {
                available: alphabet.len(),
                required,
            });
        }

        let classes: [(&'static str, fn(&char) -> bool); 4] = [
            ("upper case", char::is_ascii_uppercase),
            ("lower case", char::is_ascii_lowercase),
            ("digit", char::is_ascii_digit),
            ("special", |c: &char| !c.is_ascii_alphanumeric() && !c.is_whitespace()),
        ];
        for (name, is_class) in classes {
            if !alphabet.iter().any(is_class) {
                return Err(GeneratorError::MissingCharacterClass(name));
            }
        }

        Ok(())
    }
}

/// Generates a password that passes every rule.
///
/// With `max_attempts` unset this loops until a sample passes.
///
/// # Errors
///
/// Returns a configuration error from [`GeneratorOptions::check`], or
/// [`GeneratorError::AttemptsExhausted`] when the attempt cap is reached.
pub fn generate_password(options: &GeneratorOptions) -> Result<SecretString, GeneratorError> {
    run_generator(options, || false)
}

/// Like [`generate_password`] but never loops forever: an unset
/// `max_attempts` falls back to [`DEFAULT_MAX_ATTEMPTS`].
pub fn try_generate_password(options: &GeneratorOptions) -> Result<SecretString, GeneratorError> {
    let mut options = options.clone();
    options.max_attempts = Some(options.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS));
    run_generator(&options, || false)
}

fn run_generator(
    options: &GeneratorOptions,
    cancelled: impl Fn() -> bool,
) -> Result<SecretString, GeneratorError> {
    options.check()?;

    let mut alphabet = options.resolved_alphabet();
    let mut rng = rand::thread_rng();
    // Only lengths the length rule accepts; shuffle-and-truncate cannot
    // exceed the alphabet size.
    let min_len = options.min_len.max(MIN_LENGTH);
    let max_len = options.max_len.min(MAX_LENGTH).min(alphabet.len());
    let length = rng.gen_range(min_len..=max_len);

    let mut attempts: u64 = 0;
    loop {
        if options.max_attempts.is_some_and(|max| attempts >= max) {
            #[cfg(feature = "tracing")]
            tracing::warn!("Password generation gave up after {} attempts", attempts);
            return Err(GeneratorError::AttemptsExhausted(attempts));
        }
        if cancelled() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Password generation cancelled after {} attempts", attempts);
            return Err(GeneratorError::Cancelled);
        }
        attempts += 1;

        let (sample, _) = alphabet.partial_shuffle(&mut rng, length);
        let candidate = SecretString::new(sample.iter().collect::<String>().into());

        if validate_password(&candidate).is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password generated after {} attempts", attempts);
            return Ok(candidate);
        }
    }
}

/// Runs the generator on a blocking worker, stopping when `token` is cancelled.
#[cfg(feature = "async")]
pub async fn generate_password_async(
    options: GeneratorOptions,
    token: CancellationToken,
) -> Result<SecretString, GeneratorError> {
    tokio::task::spawn_blocking(move || run_generator(&options, || token.is_cancelled())).await?
}

/// Runs the generator for at most `timeout`.
#[cfg(feature = "async")]
pub async fn generate_password_timeout(
    options: GeneratorOptions,
    timeout: Duration,
) -> Result<SecretString, GeneratorError> {
    let token = CancellationToken::new();
    match tokio::time::timeout(timeout, generate_password_async(options, token.clone())).await {
        Ok(result) => result,
        Err(_) => {
            // stops the worker at its next attempt
            token.cancel();
            Err(GeneratorError::TimedOut(timeout))
        }
    }
}

/// Async version that sends the generated password via channel.
#[cfg(feature = "async")]
pub async fn generate_password_tx(
    options: GeneratorOptions,
    token: CancellationToken,
    tx: mpsc::Sender<Result<SecretString, GeneratorError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("password generation is about to start...");

    let result = generate_password_async(options, token).await;

    if tx.send(result).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send generated password: receiver dropped");
    }
}
