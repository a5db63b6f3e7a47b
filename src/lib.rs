//! Rule-based password validation
//!
//! This library checks a candidate password against a fixed battery of nine
//! rules and reports every violated rule, and generates random passwords that
//! satisfy all of them.
//!
//! 1. At least one upper and one lower case letter
//! 2. At least one digit
//! 3. At least one special character (other than `A-Z`, `a-z`, `0-9` and space)
//! 4. Between 6 and 18 characters
//! 5. No account email, first name, last name or user name
//! 6. No whitespace
//! 7. No known weak word
//! 8. At most 50% similar to the prior password
//! 9. No 4 sequential keyboard keys
//!
//! # Features
//!
//! - `async` (default): Enables cancellable validation and generation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_PARTICULAR_WORDS_PATH`: Custom path to an extra weak-words file
//!   (default: `./assets/particular_words.txt`), read by
//!   [`ParticularWords::from_env`]
//!
//! # Example
//!
//! ```rust,no_run
//! use password_rules::{GeneratorOptions, IdentityFields, PasswordValidator, generate_password};
//! use secrecy::SecretString;
//!
//! let candidate = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let prior = SecretString::new("MyP@ssw0rd".to_string().into());
//!
//! let report = PasswordValidator::new(&candidate)
//!     .with_identity(IdentityFields::new().email("jane@example.com"))
//!     .with_prior_password(&prior)
//!     .validate();
//!
//! for violation in &report {
//!     println!("{}: {}", violation.rule, violation.message);
//! }
//!
//! let generated = generate_password(&GeneratorOptions::default()).expect("Failed to generate");
//! ```

// Internal modules
mod generator;
mod keyboard;
mod particular_words;
mod rules;
mod similarity;
mod types;
mod validator;

// Public API
pub use generator::{
    DEFAULT_EXCLUDED, DEFAULT_MAX_ATTEMPTS, GeneratorError, GeneratorOptions, generate_password,
    try_generate_password,
};
pub use keyboard::{KEYBOARD_MAP, sequential_words};
pub use particular_words::{
    BUILTIN_WORDS, ParticularWords, ParticularWordsError, get_particular_words_path,
};
pub use similarity::{similar_chars, similarity_percent};
pub use types::{IdentityFields, RuleName, UnknownRule, Violation, ViolationReport};
pub use validator::{FULL_BATTERY, PasswordValidator, validate_password};

/// Violation message texts, one constant per message.
pub mod messages {
    pub use crate::rules::{
        CONTAINS_EMAIL, CONTAINS_FIRST_NAME, CONTAINS_LAST_NAME, CONTAINS_USER_NAME,
        CONTAINS_WHITESPACE, MISSING_DIGIT, MISSING_LOWERCASE, MISSING_SPECIAL, MISSING_UPPERCASE,
        PARTICULAR_WORD, SEQUENCED_CHARACTERS, TOO_LONG, TOO_SHORT, TOO_SIMILAR,
    };
}

pub use rules::{MAX_LENGTH, MAX_SIMILARITY, MIN_LENGTH};

#[cfg(feature = "async")]
pub use generator::{generate_password_async, generate_password_timeout, generate_password_tx};

#[cfg(feature = "async")]
pub use validator::validate_tx;
