//! In-memory stack frame standing in for a stopped debugee. Element values
//! are pre-rendered strings in the `type(value)` form a debugger prints.

use crate::command::parser::rust_identifier;
use crate::host::print::style::KeywordView;
use crate::host::FrameEvaluator;
use chumsky::error::Rich;
use chumsky::prelude::{end, just};
use chumsky::{extra, text, Parser};
use indexmap::IndexMap;
use itertools::Itertools;
use std::str::FromStr;

const NO_VALUE: &str = "No value";

type Err<'a> = extra::Err<Rich<'a, char>>;

fn path_parser<'a>() -> impl chumsky::Parser<'a, &'a str, (&'a str, usize), Err<'a>> {
    let op = |c| just(c).padded();

    let index = text::int(10)
        .padded()
        .try_map(|v: &str, span| {
            v.parse::<usize>()
                .map_err(|e| Rich::custom(span, format!("invalid index: {e}")))
        })
        .labelled("index value")
        .delimited_by(op('['), op(']'));

    rust_identifier().then(index).then_ignore(end())
}

/// Variable store with the lookup surface of a real frame: only paths of the
/// `name[index]` form resolve, anything else is the host's "No value" text.
pub struct SampleFrame {
    variables: IndexMap<String, Vec<String>>,
}

impl SampleFrame {
    pub fn empty() -> Self {
        Self {
            variables: IndexMap::default(),
        }
    }

    /// Frame pre-populated with a handful of array variables.
    pub fn with_samples() -> Self {
        let mut frame = Self::empty();
        frame.insert_var("arr_1", ["i32(1)", "i32(-1)", "i32(2)", "i32(-2)", "i32(3)"]);
        frame.insert_var(
            "primes",
            ["u64(2)", "u64(3)", "u64(5)", "u64(7)", "u64(11)", "u64(13)"],
        );
        frame.insert_var("words", ["String(one)", "String(two)", "String(three)"]);
        frame
    }

    pub fn insert_var(
        &mut self,
        name: impl Into<String>,
        elements: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.variables.insert(
            name.into(),
            elements.into_iter().map(Into::into).collect(),
        );
    }

    pub fn variable_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.variables.keys().map(String::as_str)
    }

    /// One-line frame description for the console greeting.
    pub fn summary(&self) -> String {
        if self.variables.is_empty() {
            return "frame has no variables".to_string();
        }

        let vars = self
            .variables
            .iter()
            .map(|(name, elements)| format!("{}[{}]", KeywordView::from(name), elements.len()))
            .join(", ");
        format!("frame variables: {vars}")
    }
}

impl FrameEvaluator for SampleFrame {
    fn value_for_path(&self, path: &str) -> String {
        let Ok((name, index)) = path_parser().parse(path).into_result() else {
            return NO_VALUE.to_string();
        };

        self.variables
            .get(name)
            .and_then(|elements| elements.get(index))
            .cloned()
            .unwrap_or_else(|| NO_VALUE.to_string())
    }
}

/// `NAME=V1,V2,..` variable definition taken from the command line.
#[derive(Debug, Clone)]
pub struct VarSpec {
    pub name: String,
    pub values: Vec<String>,
}

impl FromStr for VarSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, values) = s
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=V1,V2,.. definition, got `{s}`"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("empty variable name in `{s}`"));
        }

        Ok(VarSpec {
            name: name.to_string(),
            values: values.split(',').map(ToOwned::to_owned).collect(),
        })
    }
}

#[test]
fn test_value_for_path() {
    struct TestCase {
        path: &'static str,
        expected: &'static str,
    }
    let cases = vec![
        TestCase {
            path: "arr_1[0]",
            expected: "i32(1)",
        },
        TestCase {
            path: "arr_1[4]",
            expected: "i32(3)",
        },
        TestCase {
            path: "arr_1[5]",
            expected: "No value",
        },
        TestCase {
            path: "primes[2]",
            expected: "u64(5)",
        },
        TestCase {
            path: " primes [ 2 ] ",
            expected: "u64(5)",
        },
        TestCase {
            path: "unknown[0]",
            expected: "No value",
        },
        TestCase {
            path: "arr_1[-1]",
            expected: "No value",
        },
        TestCase {
            path: "arr_1",
            expected: "No value",
        },
        TestCase {
            path: "arr_1[0][1]",
            expected: "No value",
        },
        TestCase {
            path: "vec.buf[0]",
            expected: "No value",
        },
        TestCase {
            // larger than usize::MAX, must not abort the lookup
            path: "arr_1[18446744073709551616]",
            expected: "No value",
        },
    ];

    let frame = SampleFrame::with_samples();
    for tc in cases {
        assert_eq!(frame.value_for_path(tc.path), tc.expected, "path: {}", tc.path);
    }
}

#[test]
fn test_var_spec_from_str() {
    struct TestCase {
        string: &'static str,
        result: Result<(&'static str, Vec<&'static str>), ()>,
    }
    let cases = vec![
        TestCase {
            string: "arr=1,2,3",
            result: Ok(("arr", vec!["1", "2", "3"])),
        },
        TestCase {
            string: "single=x",
            result: Ok(("single", vec!["x"])),
        },
        TestCase {
            string: "empty=",
            result: Ok(("empty", vec![""])),
        },
        TestCase {
            string: "noequals",
            result: Err(()),
        },
        TestCase {
            string: "=1,2",
            result: Err(()),
        },
    ];

    for tc in cases {
        let spec: Result<VarSpec, _> = tc.string.parse();
        match tc.result {
            Ok((name, values)) => {
                let spec = spec.unwrap();
                assert_eq!(spec.name, name);
                assert_eq!(spec.values, values);
            }
            Err(()) => assert!(spec.is_err(), "input: {}", tc.string),
        }
    }
}

#[test]
fn test_frame_summary() {
    assert_eq!(SampleFrame::empty().summary(), "frame has no variables");

    let summary = SampleFrame::with_samples().summary();
    assert!(summary.contains("arr_1"));
    assert!(summary.contains("primes"));
    assert!(summary.contains("words"));
}
