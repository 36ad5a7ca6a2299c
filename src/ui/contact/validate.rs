// SPDX-License-Identifier: MPL-2.0
//! Contact form validation rules.
//!
//! The four rules are independent and all of them run on every submission;
//! violations are collected in rule order rather than stopping at the first
//! failure, so the user sees everything wrong at once.

use super::FormSubmission;

pub const NAME_MIN_CHARS: usize = 2;
pub const SUBJECT_MIN_CHARS: usize = 3;
pub const MESSAGE_MIN_CHARS: usize = 10;

pub const NAME_VIOLATION: &str = "Name must be at least 2 characters long";
pub const EMAIL_VIOLATION: &str = "Please enter a valid email address";
pub const SUBJECT_VIOLATION: &str = "Subject must be at least 3 characters long";
pub const MESSAGE_VIOLATION: &str = "Message must be at least 10 characters long";

/// Validates a submission, collecting all violated rules' messages.
pub fn validate(submission: &FormSubmission) -> Result<(), Vec<&'static str>> {
    let mut violations = Vec::new();

    if submission.name.trim().chars().count() < NAME_MIN_CHARS {
        violations.push(NAME_VIOLATION);
    }
    if !is_valid_email(&submission.email) {
        violations.push(EMAIL_VIOLATION);
    }
    if submission.subject.trim().chars().count() < SUBJECT_MIN_CHARS {
        violations.push(SUBJECT_VIOLATION);
    }
    if submission.message.trim().chars().count() < MESSAGE_MIN_CHARS {
        violations.push(MESSAGE_VIOLATION);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Joins violation messages into the single toast text.
#[must_use]
pub fn aggregate(violations: &[&str]) -> String {
    violations.join(". ")
}

/// Checks the `local@domain.tld` shape: exactly one `@`, a non-empty local
/// part, a domain with an interior dot, and no whitespace anywhere.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
