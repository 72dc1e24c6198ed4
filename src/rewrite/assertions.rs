use once_cell::sync::Lazy;
use regex::Regex;

use crate::rewrite::rule::apply_until_stable;

static WAS_CALLED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)AssertWasCalled\((.*?)\);").unwrap());
static WAS_NOT_CALLED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)AssertWasNotCalled\((.*?)\);").unwrap());

/// Assertion substitution: call assertions become `.Verify` calls, with
/// "did not happen" expressed through the `Times.Never` cardinality.
pub fn convert_assertions(input: &str) -> String {
    let text = apply_until_stable(input, &WAS_CALLED, "Verify(${1});");
    let text = apply_until_stable(&text, &WAS_NOT_CALLED, "Verify(${1}, Times.Never);");
    text.replace("VerifyAllExpectations", "Verify")
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn assert_was_called_becomes_verify() {
        let input = indoc! {"
            mock
                .AssertWasCalled(x => x.Foo(
                    Arg<int>.Is.Equal(1),
                    Arg<int>.Is.Equal(2)));
        "};

        let expected = indoc! {"
            mock
                .Verify(x => x.Foo(
                    Arg<int>.Is.Equal(1),
                    Arg<int>.Is.Equal(2)));
        "};

        assert_eq!(convert_assertions(input), expected);
    }

    #[test]
    fn assert_was_not_called_becomes_verify_times_never() {
        let input = "mock.AssertWasNotCalled(x => x.Foo());";
        assert_eq!(
            convert_assertions(input),
            "mock.Verify(x => x.Foo(), Times.Never);"
        );
    }

    #[test]
    fn verify_all_expectations_becomes_verify() {
        let input = "mock.VerifyAllExpectations();";
        assert_eq!(convert_assertions(input), "mock.Verify();");
    }
}
