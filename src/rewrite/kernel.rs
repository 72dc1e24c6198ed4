use once_cell::sync::Lazy;
use regex::Regex;

use crate::rewrite::rule::apply_until_stable;

static MEMBER_KERNEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(private|public|internal)\s+MoqMockingKernel\s+(?P<name>\w+)").unwrap()
});
static LOCAL_KERNEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(var|MoqMockingKernel)\s+(?P<name>\w+)\s+=\s+new\s+MoqMockingKernel\(\);")
        .unwrap()
});

/// Mocking-kernel stage.
///
/// Literal substitutions first (namespace, kernel type, kernel
/// construction), then `kernel.Get<IFoo>` calls on a discovered kernel
/// variable become `kernel.GetMock<IFoo>`. Member-scope and local-scope
/// declarations are discovered independently and both may fire in the
/// same document; only the first declaration of each kind is considered.
pub fn convert_mocking_kernel(input: &str) -> String {
    let mut text = input
        .replace(
            "using Ninject.MockingKernel.RhinoMock;",
            "using Ninject.MockingKernel.Moq;",
        )
        .replace("IKernel", "MoqMockingKernel")
        .replace("new RhinoMocksMockingKernel", "new MoqMockingKernel");

    if let Some(name) = discover_kernel_var(&text, &MEMBER_KERNEL) {
        text = rewrite_get_calls(&text, &name);
    }
    if let Some(name) = discover_kernel_var(&text, &LOCAL_KERNEL) {
        text = rewrite_get_calls(&text, &name);
    }

    text
}

/// Analysis half: the variable name bound by the first declaration the
/// pattern finds, if any.
fn discover_kernel_var(text: &str, pattern: &Regex) -> Option<String> {
    pattern.captures(text).map(|caps| caps["name"].to_string())
}

/// Rewrite half: `name.Get<IFoo>` -> `name.GetMock<IFoo>` for one kernel
/// variable. The type argument must look like an interface name.
fn rewrite_get_calls(text: &str, name: &str) -> String {
    let pattern =
        Regex::new(&format!(r"{}\.Get<(I[A-Z]\w+?)>", regex::escape(name))).unwrap();
    apply_until_stable(text, &pattern, &format!("{name}.GetMock<${{1}}>"))
}
