use once_cell::sync::Lazy;
use regex::Regex;

use crate::rewrite::rule::apply_until_stable;

static EXPECT_RETURN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\.Expect\((.*?)\)(\s*)\.Return\((.*?)\);").unwrap());
// Must run after the chained form or it would eat the `.Expect(...)` head
// of a `.Return` chain.
static EXPECT_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\.Expect\((.*?)\);").unwrap());

/// Expectation substitution: recorded calls become `.Setup` chains marked
/// `.Verifiable()`, with and without a return value.
pub fn convert_expects(input: &str) -> String {
    let text = apply_until_stable(
        input,
        &EXPECT_RETURN,
        ".Setup(${1})${2}.Returns(${3}).Verifiable();",
    );
    apply_until_stable(&text, &EXPECT_BARE, ".Setup(${1}).Verifiable();")
}
