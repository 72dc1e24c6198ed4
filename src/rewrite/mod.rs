//! The conversion pipeline: an ordered sequence of text-rewrite stages
//! turning Rhino Mocks vocabulary into Moq vocabulary.
//!
//! Every stage is a pure `&str -> String` function; the document flows
//! through the table in [`STAGES`] value by value with no shared state
//! besides the text itself. Stages are total over arbitrary input: a
//! document containing none of the recognized patterns comes back
//! unchanged, and running the pipeline over its own output is a no-op
//! (all patterns target the source vocabulary only).

pub mod assertions;
pub mod constraints;
pub mod creation;
pub mod expects;
pub mod kernel;
pub mod rule;
pub mod stubs;
pub mod usage;
pub mod usings;

use log::debug;

/// One named step of the conversion pipeline.
pub struct Stage {
    pub name: &'static str,
    run: fn(&str) -> String,
}

impl Stage {
    pub fn apply(&self, input: &str) -> String {
        (self.run)(input)
    }
}

/// The pipeline in execution order. Discovery stages re-derive their
/// bindings from their own input, so reordering is a data change here,
/// not a code change — but the documented order is part of the contract
/// (mock-usage must see creations already rewritten to `new Mock`).
pub static STAGES: &[Stage] = &[
    Stage {
        name: "usings",
        run: usings::convert_usings,
    },
    Stage {
        name: "mocking-kernel",
        run: kernel::convert_mocking_kernel,
    },
    Stage {
        name: "mock-creation",
        run: creation::convert_mock_creation,
    },
    Stage {
        name: "stubs",
        run: stubs::convert_stubs,
    },
    Stage {
        name: "expectations",
        run: expects::convert_expects,
    },
    Stage {
        name: "argument-constraints",
        run: constraints::convert_argument_constraints,
    },
    Stage {
        name: "assertions",
        run: assertions::convert_assertions,
    },
    Stage {
        name: "mock-usage",
        run: usage::convert_mock_usage,
    },
];

/// Converts one whole document.
pub fn convert(input: &str) -> String {
    STAGES.iter().fold(input.to_string(), |text, stage| {
        let next = stage.apply(&text);
        if next != text {
            debug!("stage `{}` rewrote the document", stage.name);
        }
        next
    })
}

/// Stage names in execution order.
pub fn stage_names() -> Vec<&'static str> {
    STAGES.iter().map(|stage| stage.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stage_order_is_fixed() {
        assert_eq!(
            stage_names(),
            vec![
                "usings",
                "mocking-kernel",
                "mock-creation",
                "stubs",
                "expectations",
                "argument-constraints",
                "assertions",
                "mock-usage",
            ]
        );
    }

    #[test]
    fn irrelevant_document_is_returned_unchanged() {
        let input = "public class Plain\n{\n    public int Answer() => 42;\n}\n";
        assert_eq!(convert(input), input);
    }

    #[test]
    fn empty_document_stays_empty() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn line_endings_are_preserved() {
        let input = "using Rhino.Mocks;\r\nmock.Stub(x => x.Foo()).Return(true);\r\n";
        let expected = "using Moq;\r\nmock.Setup(x => x.Foo()).Returns(true);\r\n";
        assert_eq!(convert(input), expected);
    }
}
