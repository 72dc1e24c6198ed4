use once_cell::sync::Lazy;
use regex::Regex;

use crate::rewrite::rule::apply_until_stable;

// A mock binding is any assignment from a kernel GetMock call or a direct
// Mock construction.
static MOCK_ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<name>\w+)\s+=\s+(((\w+?)\.GetMock)|new Mock)").unwrap());

// Trailing contexts after which a reference is already in the right
// shape: setup/verify chains stay on the wrapper, an existing `.Object`
// must not be doubled, and assignment/declaration positions keep the
// bare name.
static ALREADY_HANDLED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\.Setup|\.Verify|\.Object|[=;])").unwrap());

/// Mock-usage stage.
///
/// Code written against the raw mocked type must now unwrap the mock
/// wrapper, so every variable observed holding a mock gets its bare
/// member declaration retyped to `Mock<T>` and its remaining references
/// suffixed with `.Object`.
pub fn convert_mock_usage(input: &str) -> String {
    // Bindings come from the stage input, before any suffixing: inserting
    // `.Object` changes what an occurrence of a name looks like.
    let names = discover_mock_bindings(input);

    let mut text = input.to_string();
    for name in &names {
        text = retype_declaration(&text, name);
        text = suffix_references(&text, name);
    }
    text
}

/// Analysis half: every distinct identifier assigned from a mock source,
/// in order of first appearance.
pub fn discover_mock_bindings(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    for caps in MOCK_ASSIGNMENT.captures_iter(text) {
        let name = caps["name"].to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// `SomeType name;` -> `Mock<SomeType> name;` so the member declaration
/// matches what the variable now holds. The leading character class keeps
/// `var`-style declarators out of the match.
fn retype_declaration(text: &str, name: &str) -> String {
    let pattern =
        Regex::new(&format!(r"([^vd\s]\w+)\s+{};", regex::escape(name))).unwrap();
    apply_until_stable(text, &pattern, &format!("Mock<${{1}}> {name};"))
}

/// Appends `.Object` to every whole-word occurrence of `name` whose
/// trailing context does not already handle the wrapper. The trailing
/// check is a punctuation heuristic over nearby text, not a structural
/// one: a name directly followed by `<`, `>` or `)` is suffixed even
/// inside a generic argument list. Kept as-is deliberately.
fn suffix_references(text: &str, name: &str) -> String {
    let word = Regex::new(&format!(r"\b{}\b", regex::escape(name))).unwrap();
    let mut text = text.to_string();
    loop {
        let next = suffix_pass(&text, &word);
        if next == text {
            return text;
        }
        text = next;
    }
}

fn suffix_pass(text: &str, word: &Regex) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for m in word.find_iter(text) {
        out.push_str(&text[last..m.end()]);
        if !ALREADY_HANDLED.is_match(&text[m.end()..]) {
            out.push_str(".Object");
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}
