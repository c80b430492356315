//! Applicant contact validation. The email check runs exactly once, before
//! persistence; the unique index on `job_applications.email` is what rejects
//! a racing duplicate.

/// Validates the basic shape of an applicant email.
///
/// PASS conditions:
/// - Non-empty local part before a single `@`
/// - Domain containing a dot that is neither its first nor last character
/// - No whitespace anywhere
///
/// Anything stricter (full RFC 5322) is out of scope; the address is only
/// used for contact display and duplicate detection.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.find('.') {
        None | Some(0) => false,
        Some(_) => !domain.ends_with('.'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_address() {
        assert!(is_valid_email("jane.doe@example.com"));
    }

    #[test]
    fn accepts_subdomains() {
        assert!(is_valid_email("jane@mail.example.co.in"));
    }

    #[test]
    fn accepts_plus_tag() {
        assert!(is_valid_email("jane+jobs@example.com"));
    }

    #[test]
    fn rejects_missing_at() {
        assert!(!is_valid_email("jane.example.com"));
    }

    #[test]
    fn rejects_missing_domain_dot() {
        assert!(!is_valid_email("jane@example"));
    }

    #[test]
    fn rejects_empty_local_part() {
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn rejects_dot_leading_domain() {
        assert!(!is_valid_email("jane@.com"));
    }

    #[test]
    fn rejects_dot_trailing_domain() {
        assert!(!is_valid_email("jane@example."));
    }

    #[test]
    fn rejects_double_at() {
        assert!(!is_valid_email("jane@@example.com"));
    }

    #[test]
    fn rejects_whitespace() {
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email(" jane@example.com"));
    }

    #[test]
    fn rejects_empty() {
        assert!(!is_valid_email(""));
    }
}
