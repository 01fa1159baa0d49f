//! Exit codes for the CLI
//!
//! Exit codes let a publishing pipeline gate on the audit result.
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning | Example |
//! |------|----------|---------|---------|
//! | 0 | `SUCCESS` | Success | Draft audited, no violation |
//! | 1 | `VIOLATIONS` | Violations | A prohibited phrase or over-long title |
//! | 3 | `ERROR` | Runtime error | Unreadable lexicon, malformed batch file |
//! | 4 | `INVALID_ARGS` | Invalid arguments | No valid category in `--only` |
//!
//! Code 2 is not used.

/// Success - no violation found or command completed normally.
pub const SUCCESS: i32 = 0;

/// At least one audited draft has a violation.
///
/// Suggestions and safe items never change the exit code.
pub const VIOLATIONS: i32 = 1;

/// Runtime error (file not found, invalid configuration or lexicon, etc.).
pub const ERROR: i32 = 3;

/// Invalid arguments.
///
/// Used when:
/// - `--only` contains no valid category
/// - `init` would overwrite a configuration without `--force`
pub const INVALID_ARGS: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [SUCCESS, VIOLATIONS, ERROR, INVALID_ARGS];
        for i in 0..codes.len() {
            for j in (i + 1)..codes.len() {
                assert_ne!(codes[i], codes[j]);
            }
        }
    }

    #[test]
    fn test_success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
