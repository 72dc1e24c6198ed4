use once_cell::sync::Lazy;
use regex::Regex;

use crate::rewrite::rule::apply_until_stable;

// Dot-all so a lambda argument may span lines. The `(\s*)` capture keeps
// the author's whitespace between the two chained calls.
static STUB_RETURN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\.Stub\((.*?)\)(\s*)\.Return\((.*?)\);").unwrap());
static STUB_WHEN_CALLED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\.Stub\((.*?)\)(\s*)\.WhenCalled\((.*?)\);").unwrap());
static STUB_DO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\.Stub\((.*?)\)(\s*)\.Do\((.*?)\);").unwrap());
static STUB_THROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\.Stub\((.*?)\)(\s*)\.Throw\((.*?)\);").unwrap());

/// Stub-configuration substitution: `.Stub(...)` chains become
/// `.Setup(...)` chains. Direct values, computed values and callbacks all
/// map to `.Returns`, thrown exceptions map to `.Throws`.
pub fn convert_stubs(input: &str) -> String {
    let text = apply_until_stable(input, &STUB_RETURN, ".Setup(${1})${2}.Returns(${3});");
    let text = apply_until_stable(&text, &STUB_WHEN_CALLED, ".Setup(${1})${2}.Returns(${3});");
    let text = apply_until_stable(&text, &STUB_DO, ".Setup(${1})${2}.Returns(${3});");
    apply_until_stable(&text, &STUB_THROW, ".Setup(${1})${2}.Throws(${3});")
}
