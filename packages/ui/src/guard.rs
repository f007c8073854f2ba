//! Access decision for protected routes.
//!
//! The decision reads only whether a credential is present right now. There
//! is no round-trip to validate it first: a stale credential is caught by the
//! first API call that gets a 401/403.

/// Outcome of a navigation attempt to a protected path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allowed,
    /// Send the user to login, remembering where they were headed.
    Denied { next: String },
}

pub fn guard(has_credential: bool, requested_path: &str) -> GuardDecision {
    if has_credential {
        GuardDecision::Allowed
    } else {
        GuardDecision::Denied {
            next: requested_path.to_string(),
        }
    }
}

/// Accept a post-login redirect target only if it is a same-origin path.
///
/// Rejects empty values, absolute URLs, protocol-relative `//host` paths and
/// backslash tricks browsers normalise into them.
pub fn safe_next(next: &str) -> Option<&str> {
    let next = next.trim();
    let same_origin = next.starts_with('/')
        && !next.starts_with("//")
        && !next.starts_with("/\\")
        && !next.contains("://");
    same_origin.then_some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denied_without_credential() {
        for path in ["/dashboard", "/boards/1", "/boards/abc"] {
            assert_eq!(
                guard(false, path),
                GuardDecision::Denied {
                    next: path.to_string()
                }
            );
        }
    }

    #[test]
    fn test_allowed_with_credential() {
        assert_eq!(guard(true, "/dashboard"), GuardDecision::Allowed);
        assert_eq!(guard(true, "/boards/7"), GuardDecision::Allowed);
    }

    #[test]
    fn test_safe_next() {
        assert_eq!(safe_next("/boards/7"), Some("/boards/7"));
        assert_eq!(safe_next(""), None);
        assert_eq!(safe_next("dashboard"), None);
        assert_eq!(safe_next("//evil.example"), None);
        assert_eq!(safe_next("/\\evil.example"), None);
        assert_eq!(safe_next("https://evil.example"), None);
        assert_eq!(safe_next("/redirect?to=https://evil.example"), None);
    }
}
