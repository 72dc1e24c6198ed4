/// Import substitution: the Rhino Mocks namespace becomes the Moq one.
/// Plain literal replace, applied at most once per occurrence.
pub fn convert_usings(input: &str) -> String {
    input.replace("using Rhino.Mocks;", "using Moq;")
}
