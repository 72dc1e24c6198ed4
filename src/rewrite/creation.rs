use once_cell::sync::Lazy;
use regex::Regex;

use crate::rewrite::rule::apply_until_stable;

static PARTIAL_MOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)MockRepository\.GeneratePartialMock<(.*?)>\((.*?)\);").unwrap()
});

/// Mock-creation substitution: static factory calls become `new Mock`
/// constructions. Partial mocks keep delegating unconfigured calls to the
/// real implementation through `CallBase`.
pub fn convert_mock_creation(input: &str) -> String {
    let text = input
        .replace("MockRepository.GenerateMock", "new Mock")
        .replace("MockRepository.GenerateStub", "new Mock");

    apply_until_stable(
        &text,
        &PARTIAL_MOCK,
        "new Mock<${1}>(${2}) { CallBase = true };",
    )
}
