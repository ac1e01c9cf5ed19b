//! Tests for the email/password format rules and the login check.
//!
//! Covers:
//! - Email shape validation
//! - Both password strength rule sets and where they diverge
//! - The generic, non-disclosing credential mismatch message
//! - Coexistence of format and credential errors across fields

mod common;

use collabspace::auth;
use common::*;

#[test]
fn test_email_shapes() {
    assert!(auth::valid_email("a@b.com"));
    assert!(auth::valid_email("first.last@mail.example.org"));

    assert!(!auth::valid_email(""));
    assert!(!auth::valid_email("plainaddress"));
    assert!(!auth::valid_email("no-domain@"));
    assert!(!auth::valid_email("a@b"));
    assert!(!auth::valid_email("a@b."));
    assert!(!auth::valid_email("has space@b.com"));
    assert!(!auth::valid_email("a@dom ain.com"));
    assert!(!auth::valid_email("two@@b.com"));
}

#[test]
fn test_password_strength_common_rules() {
    // Accepted by both rule sets
    assert!(auth::strong_signup_password("Abcdef1!"));
    assert!(auth::strong_login_password("Abcdef1!"));

    // Too short
    assert!(!auth::strong_signup_password("Ab1!xyz"));
    assert!(!auth::strong_login_password("Ab1!xyz"));
    // Missing lowercase
    assert!(!auth::strong_signup_password("ABCDEF1!"));
    assert!(!auth::strong_login_password("ABCDEF1!"));
    // Missing uppercase
    assert!(!auth::strong_signup_password("abcdef1!"));
    assert!(!auth::strong_login_password("abcdef1!"));
    // Missing digit
    assert!(!auth::strong_signup_password("Abcdefg!"));
    assert!(!auth::strong_login_password("Abcdefg!"));
    // Missing symbol
    assert!(!auth::strong_signup_password("Abcdefg1"));
    assert!(!auth::strong_login_password("Abcdefg1"));
}

#[test]
fn test_password_symbol_sets_diverge() {
    // The login form accepts a wider punctuation class than signup.
    for password in ["Abcdef1^", "Abcdef1(", "Abcdef1;", "Abcdef1-"] {
        assert!(
            auth::strong_login_password(password),
            "{password} should pass the login rule"
        );
        assert!(
            !auth::strong_signup_password(password),
            "{password} should fail the signup rule"
        );
    }
    // The shared symbols pass both.
    for password in ["Abcdef1@", "Abcdef1$", "Abcdef1#"] {
        assert!(auth::strong_login_password(password));
        assert!(auth::strong_signup_password(password));
    }
}

#[test]
fn test_login_without_stored_record() {
    let errors = auth::check_login("a@b.com", "Abc123!@", None);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(fields::PASSWORD), Some("Wrong email or password!"));
    assert_eq!(errors.get(fields::EMAIL), None);
}

#[test]
fn test_login_match_and_near_misses() {
    let record = sample_record();

    let ok = auth::check_login("a@b.com", "Abc123!@", Some(&record));
    assert!(ok.is_empty());

    // One character off in either field yields the same generic
    // message, indistinguishable from the no-account case.
    let wrong_email = auth::check_login("a@b.con", "Abc123!@", Some(&record));
    let wrong_password = auth::check_login("a@b.com", "Abc123!#", Some(&record));
    let no_account = auth::check_login("a@b.com", "Abc123!@", None);
    for errors in [&wrong_email, &wrong_password, &no_account] {
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(fields::PASSWORD),
            Some("Wrong email or password!")
        );
    }
}

#[test]
fn test_login_is_case_sensitive() {
    let record = sample_record();
    let errors = auth::check_login("A@B.COM", "Abc123!@", Some(&record));
    assert_eq!(errors.get(fields::PASSWORD), Some("Wrong email or password!"));
}

#[test]
fn test_login_format_and_credential_errors_coexist() {
    let record = sample_record();
    let errors = auth::check_login("not-an-email", "Abc123!#", Some(&record));
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(fields::EMAIL), Some("Enter a valid email."));
    // The mismatch message wins the password slot over the format one.
    assert_eq!(errors.get(fields::PASSWORD), Some("Wrong email or password!"));
}

#[test]
fn test_login_weak_password_still_generic_on_mismatch() {
    let errors = auth::check_login("a@b.com", "short", None);
    assert_eq!(errors.get(fields::PASSWORD), Some("Wrong email or password!"));
}

#[test]
fn test_signup_checks() {
    assert!(auth::check_signup("Amina Ahmad", "a@b.com", "Abc123!@").is_empty());

    let errors = auth::check_signup("ab", "a@b.com", "Abc123!@");
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(fields::NAME),
        Some("Name must be at least 3 characters")
    );

    let errors = auth::check_signup("Amina", "bad-email", "weak");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(fields::EMAIL), Some("Enter a valid email"));
    assert_eq!(errors.get(fields::PASSWORD), Some("Password must be strong"));
}
