//! Tests for the two project-creation rule sets.
//!
//! The dashboard modal and the project list's quick-add dialog define
//! their own minimums; the suite pins both, including inputs the two
//! rules disagree on.

mod common;

use collabspace::core::validate::{check_create_project, check_quick_project};
use common::*;

#[test]
fn test_create_project_name_too_short() {
    let errors = check_create_project("ab", "short desc", "1");
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(fields::NAME),
        Some("Project name must be at least 3 characters")
    );
}

#[test]
fn test_create_project_description_too_short() {
    let errors = check_create_project("Website", "desc", "1");
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(fields::DESCRIPTION),
        Some("Short description required")
    );
}

#[test]
fn test_create_project_members_must_be_positive() {
    let errors = check_create_project("Website", "Landing page", "0");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(fields::MEMBERS), Some("Members must be 1 or more"));
}

#[test]
fn test_create_project_members_must_be_an_integer() {
    for raw in ["", "abc", "2.5", "-3"] {
        let errors = check_create_project("Website", "Landing page", raw);
        assert_eq!(
            errors.get(fields::MEMBERS),
            Some("Members must be 1 or more"),
            "members input {raw:?} should be rejected"
        );
    }
}

#[test]
fn test_create_project_trims_before_measuring() {
    // Whitespace padding does not rescue a short value.
    let errors = check_create_project("  ab  ", "   then    ", "1");
    assert_eq!(errors.len(), 2);
    assert!(errors.get(fields::NAME).is_some());
    assert!(errors.get(fields::DESCRIPTION).is_some());
}

#[test]
fn test_create_project_valid() {
    let errors = check_create_project("Website", "Landing page", "4");
    assert!(errors.is_empty());
}

#[test]
fn test_quick_add_requires_both_fields() {
    let missing_name = check_quick_project("", "12 Feb 2025");
    let missing_due = check_quick_project("Launch", "");
    for errors in [&missing_name, &missing_due] {
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(fields::FORM), Some("Please fill all fields"));
    }

    assert!(check_quick_project("Launch", "12 Feb 2025").is_empty());
}

#[test]
fn test_the_two_rules_disagree_on_purpose() {
    // A one-letter name with a due date satisfies the quick-add rule
    // but not the dashboard rule.
    assert!(check_quick_project("X", "12 Feb 2025").is_empty());
    assert!(
        check_create_project("X", "Landing page", "1")
            .get(fields::NAME)
            .is_some()
    );
}
