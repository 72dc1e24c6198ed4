use log::warn;
use regex::Regex;

/// Pass limit before a rule is declared divergent.
pub const MAX_PASSES: usize = 100;

/// Applies a single pattern/replacement rule until the document stops
/// changing.
///
/// Each pass replaces every match simultaneously, then re-tests the
/// pattern against the new text: a replacement can shorten the document
/// and expose a match the previous pass could not see (non-greedy
/// patterns over nested argument lists do this routinely). Absence of a
/// match is the normal terminal condition, not an error.
///
/// Rule authors must guarantee convergence. A replacement that re-creates
/// its own trigger pattern would never settle; past [`MAX_PASSES`] the
/// loop gives up with a warning instead of hanging.
pub fn apply_until_stable(input: &str, pattern: &Regex, replacement: &str) -> String {
    let (text, converged) = apply_capped(input, pattern, replacement, MAX_PASSES);
    if !converged {
        warn!(
            "rule `{}` did not reach a fixed point within {} passes",
            pattern.as_str(),
            MAX_PASSES
        );
    }
    text
}

/// Fixed-point iteration with an explicit pass cap.
///
/// Returns the final text and whether the fixed point was reached, so a
/// divergent rule shows up as `false` in tests rather than as a hang.
pub fn apply_capped(
    input: &str,
    pattern: &Regex,
    replacement: &str,
    cap: usize,
) -> (String, bool) {
    let mut text = input.to_string();
    for _ in 0..cap {
        if !pattern.is_match(&text) {
            return (text, true);
        }
        text = pattern.replace_all(&text, replacement).into_owned();
    }
    let converged = !pattern.is_match(&text);
    (text, converged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_returns_input_unchanged() {
        let pattern = Regex::new(r"\.Stub\(").unwrap();
        let input = "var answer = 42;";
        assert_eq!(apply_until_stable(input, &pattern, ".Setup("), input);
    }

    #[test]
    fn replacement_exposing_new_match_converges() {
        // Non-overlapping global replace leaves "aa" after the first
        // pass; only the re-test picks it up.
        let pattern = Regex::new("aa").unwrap();
        assert_eq!(apply_until_stable("aaaa", &pattern, "a"), "a");
    }

    #[test]
    fn all_matches_replaced_in_one_pass() {
        let pattern = Regex::new(r"\.Return\((\w+)\);").unwrap();
        let input = "a.Return(x); b.Return(y);";
        assert_eq!(
            apply_until_stable(input, &pattern, ".Returns(${1});"),
            "a.Returns(x); b.Returns(y);"
        );
    }

    #[test]
    fn divergent_rule_is_detected_by_cap() {
        // Replacement regenerates its own trigger.
        let pattern = Regex::new("a").unwrap();
        let (_, converged) = apply_capped("a", &pattern, "aa", 10);
        assert!(!converged);
    }

    #[test]
    fn capped_run_reports_convergence() {
        let pattern = Regex::new("b").unwrap();
        let (text, converged) = apply_capped("abc", &pattern, "x", 10);
        assert_eq!(text, "axc");
        assert!(converged);
    }
}
