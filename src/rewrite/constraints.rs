use once_cell::sync::Lazy;
use regex::Regex;

use crate::rewrite::rule::apply_until_stable;

// One generic type argument. Refuses a bare top-level `>` or `(` so the
// lazy group can never cross out of its own `Arg<...>` and swallow a
// neighboring matcher of a different kind, while still admitting one
// level of nested generics like `Func<string, bool>`.
const TYPE_ARG: &str = r"((?:[^<>(]|<[^<>]*>)+?)";

fn matcher(tail: &str) -> Regex {
    Regex::new(&format!("(?s)Arg<{TYPE_ARG}>{tail}")).unwrap()
}

static ANYTHING: Lazy<Regex> = Lazy::new(|| matcher(r"\.Is\.Anything"));
static MATCHES: Lazy<Regex> = Lazy::new(|| matcher(r"\.Matches"));
static EQUAL: Lazy<Regex> = Lazy::new(|| matcher(r"\.Is\.Equal\((.*?)\)"));
static SAME: Lazy<Regex> = Lazy::new(|| matcher(r"\.Is\.Same\((.*?)\)"));
static NOT_EQUAL: Lazy<Regex> = Lazy::new(|| matcher(r"\.Is\.NotEqual\((.*?)\)"));
static NOT_NULL: Lazy<Regex> = Lazy::new(|| matcher(r"\.Is\.NotNull"));
static NULL: Lazy<Regex> = Lazy::new(|| matcher(r"\.Is\.Null"));
static BY_REF: Lazy<Regex> = Lazy::new(|| matcher(r"\.Ref\((.*?),\s*(.*?)\)\.Dummy"));
static OUT: Lazy<Regex> = Lazy::new(|| matcher(r"\.Out\((.*?)\)\.Dummy"));

/// Argument-constraint substitution: `Arg<T>` matchers become their `It`
/// equivalents. Equality and identity matchers turn into predicate
/// closures; ref/out matchers collapse to the supplied value, passed
/// straight through.
pub fn convert_argument_constraints(input: &str) -> String {
    let text = apply_until_stable(input, &ANYTHING, "It.IsAny<${1}>()");
    let text = apply_until_stable(&text, &MATCHES, "It.Is<${1}>");
    let text = apply_until_stable(&text, &EQUAL, "It.Is<${1}>(arg => arg == ${2})");
    let text = apply_until_stable(&text, &SAME, "It.Is<${1}>(arg => arg == ${2})");
    let text = apply_until_stable(&text, &NOT_EQUAL, "It.Is<${1}>(arg => arg != ${2})");
    let text = apply_until_stable(&text, &NOT_NULL, "It.Is<${1}>(arg => arg != null)");
    let text = apply_until_stable(&text, &NULL, "It.Is<${1}>(arg => arg == null)");
    let text = apply_until_stable(&text, &BY_REF, "${3}");
    apply_until_stable(&text, &OUT, "${2}")
}
