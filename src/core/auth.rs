use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::credentials::CredentialRecord;
use crate::core::validate::{FieldErrors, fields};

/// Shape rule only: non-whitespace local part, non-whitespace domain
/// with at least one dot. No DNS or deliverability checking.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Symbols accepted by the signup form's strength rule.
const SIGNUP_SYMBOLS: &str = "@$!%*?&#";

/// Symbols accepted by the login form's strength rule. Wider than the
/// signup set; the two forms define their rules independently and both
/// sets are kept as-is.
const LOGIN_SYMBOLS: &str = r#"!@#$%^&*()_+={}[]|\:;"'<>,.?/-"#;

pub fn valid_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

fn strong_password(input: &str, symbols: &str) -> bool {
    input.chars().count() >= 8
        && input.chars().any(|c| c.is_ascii_lowercase())
        && input.chars().any(|c| c.is_ascii_uppercase())
        && input.chars().any(|c| c.is_ascii_digit())
        && input.chars().any(|c| symbols.contains(c))
}

pub fn strong_signup_password(input: &str) -> bool {
    strong_password(input, SIGNUP_SYMBOLS)
}

pub fn strong_login_password(input: &str) -> bool {
    strong_password(input, LOGIN_SYMBOLS)
}

/// Signup submission check: name length, email shape, signup password
/// strength. Field messages accumulate independently.
pub fn check_signup(name: &str, email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if name.chars().count() < 3 {
        errors.set(fields::NAME, "Name must be at least 3 characters");
    }
    if !valid_email(email) {
        errors.set(fields::EMAIL, "Enter a valid email");
    }
    if !strong_signup_password(password) {
        errors.set(fields::PASSWORD, "Password must be strong");
    }
    errors
}

/// Login submission check. Format rules run first; the credential
/// comparison runs unconditionally afterwards and its message lands on
/// the password field, replacing any format message there.
///
/// A missing record, a wrong email, and a wrong password all produce
/// the same generic message. The comparison is an exact, case-sensitive
/// string match; nothing is hashed.
pub fn check_login(
    email: &str,
    password: &str,
    stored: Option<&CredentialRecord>,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if !valid_email(email) {
        errors.set(fields::EMAIL, "Enter a valid email.");
    }
    if !strong_login_password(password) {
        errors.set(
            fields::PASSWORD,
            "Password must be 8+ chars with uppercase, lowercase, number & special char.",
        );
    }
    let matches = stored.is_some_and(|record| record.email == email && record.password == password);
    if !matches {
        errors.set(fields::PASSWORD, "Wrong email or password!");
    }
    errors
}
