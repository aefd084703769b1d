use super::{Command, CommandError, CommandResult};
use chumsky::error::Rich;
use chumsky::prelude::{any, choice, end, just, one_of};
use chumsky::text::Char;
use chumsky::{extra, text, IterParser, Parser};

pub const PARRAY_COMMAND: &str = "parray";

type Err<'a> = extra::Err<Rich<'a, char>>;

pub fn rust_identifier<'a>() -> impl chumsky::Parser<'a, &'a str, &'a str, Err<'a>> + Clone {
    text::ascii::ident()
        .separated_by(just("::"))
        .allow_leading()
        .at_least(1)
        .to_slice()
        .padded()
        .labelled("rust identifier")
}

fn single_quoted<'a>() -> impl chumsky::Parser<'a, &'a str, String, Err<'a>> + Clone {
    any()
        .filter(|c: &char| c.to_char() != '\'')
        .repeated()
        .collect::<String>()
        .delimited_by(just('\''), just('\''))
        .labelled("single quoted segment")
}

fn double_quoted<'a>() -> impl chumsky::Parser<'a, &'a str, String, Err<'a>> + Clone {
    // inside double quotes a backslash only escapes `"` and `\`, any other
    // backslash stays in the token verbatim, as in `sh`
    let escape = just('\\').ignore_then(one_of("\\\"")).map(String::from);
    let verbatim_backslash = just('\\')
        .then(any().filter(|c: &char| !matches!(c.to_char(), '"' | '\\')))
        .map(|(_, c): (char, char)| format!("\\{c}"));
    let plain = any()
        .filter(|c: &char| !matches!(c.to_char(), '"' | '\\'))
        .map(String::from);

    choice((escape, verbatim_backslash, plain))
        .repeated()
        .collect::<Vec<String>>()
        .map(|segments| segments.concat())
        .delimited_by(just('"'), just('"'))
        .labelled("double quoted segment")
}

fn word<'a>() -> impl chumsky::Parser<'a, &'a str, String, Err<'a>> + Clone {
    let escape = just('\\').ignore_then(any());
    let plain = any().filter(|c: &char| {
        let c = c.to_char();
        !c.is_whitespace() && !matches!(c, '\'' | '"' | '\\')
    });
    escape
        .or(plain)
        .repeated()
        .at_least(1)
        .collect::<String>()
        .labelled("word")
}

fn token<'a>() -> impl chumsky::Parser<'a, &'a str, String, Err<'a>> + Clone {
    // adjacent quoted and unquoted segments glue into one token, as in `sh`
    choice((single_quoted(), double_quoted(), word()))
        .repeated()
        .at_least(1)
        .collect::<Vec<String>>()
        .map(|segments| segments.concat())
        .labelled("token")
}

/// Raw argument text split into whitespace-delimited tokens with shell-style
/// quoting. An unterminated quote or a trailing escape is a parse failure.
pub fn arg_tokens<'a>() -> impl chumsky::Parser<'a, &'a str, Vec<String>, Err<'a>> {
    token()
        .padded()
        .repeated()
        .collect::<Vec<String>>()
        .padded()
        .then_ignore(end())
}

impl Command {
    /// Parse raw argument text into a command.
    ///
    /// Arity is checked before integer tokens are interpreted: any token
    /// count other than 2 or 3 yields [`Command::Usage`] even if some token
    /// is not a number.
    pub fn parse(args: &str) -> CommandResult<Command> {
        let mut tokens = arg_tokens()
            .parse(args)
            .into_result()
            .map_err(|e| CommandError::Parsing(e[0].to_string()))?;

        match tokens.len() {
            2 => {
                let count = int_token(&tokens[1])?;
                Ok(Command::FirstN {
                    array: tokens.swap_remove(0),
                    count,
                })
            }
            3 => {
                let first = int_token(&tokens[1])?;
                let count = int_token(&tokens[2])?;
                Ok(Command::Window {
                    array: tokens.swap_remove(0),
                    first,
                    count,
                })
            }
            _ => Ok(Command::Usage),
        }
    }
}

fn int_token(token: &str) -> CommandResult<i64> {
    token
        .parse()
        .map_err(|_| CommandError::Parsing(format!("expected integer, found `{token}`")))
}

#[test]
fn test_rust_identifier_parser() {
    struct TestCase {
        string: &'static str,
        result: Result<&'static str, ()>,
    }
    let cases = vec![
        TestCase {
            string: "some_var",
            result: Ok("some_var"),
        },
        TestCase {
            string: "  _some_var ",
            result: Ok("_some_var"),
        },
        TestCase {
            string: "::aa::BB::_CC1",
            result: Ok("::aa::BB::_CC1"),
        },
        TestCase {
            string: "1a",
            result: Err(()),
        },
        TestCase {
            string: "aa::",
            result: Err(()),
        },
    ];

    for tc in cases {
        let ident = rust_identifier().parse(tc.string).into_result();
        assert_eq!(ident.map_err(|_| ()), tc.result);
    }
}

#[test]
fn test_arg_tokens_parser() {
    struct TestCase {
        string: &'static str,
        result: Result<Vec<&'static str>, ()>,
    }
    let cases = vec![
        TestCase {
            string: "",
            result: Ok(vec![]),
        },
        TestCase {
            string: "   ",
            result: Ok(vec![]),
        },
        TestCase {
            string: "myArray 3",
            result: Ok(vec!["myArray", "3"]),
        },
        TestCase {
            string: "  a   b  ",
            result: Ok(vec!["a", "b"]),
        },
        TestCase {
            string: "'quoted arg' 2",
            result: Ok(vec!["quoted arg", "2"]),
        },
        TestCase {
            string: "\"d q\" 1",
            result: Ok(vec!["d q", "1"]),
        },
        TestCase {
            string: "ab'c d'e",
            result: Ok(vec!["abc de"]),
        },
        TestCase {
            string: "back\\ slash",
            result: Ok(vec!["back slash"]),
        },
        TestCase {
            string: "a\\'b",
            result: Ok(vec!["a'b"]),
        },
        TestCase {
            string: "\"esc \\\" quote\"",
            result: Ok(vec!["esc \" quote"]),
        },
        TestCase {
            string: r#""C:\path\to" 2"#,
            result: Ok(vec![r"C:\path\to", "2"]),
        },
        TestCase {
            string: r#""a\\b""#,
            result: Ok(vec![r"a\b"]),
        },
        TestCase {
            string: "''",
            result: Ok(vec![""]),
        },
        TestCase {
            string: "'unterminated",
            result: Err(()),
        },
        TestCase {
            string: "trailing\\",
            result: Err(()),
        },
    ];

    for tc in cases {
        let tokens = arg_tokens().parse(tc.string).into_result();
        let expected = tc
            .result
            .map(|tokens| tokens.into_iter().map(ToString::to_string).collect::<Vec<_>>());
        assert_eq!(tokens.map_err(|_| ()), expected, "input: {:?}", tc.string);
    }
}

#[test]
fn test_parser() {
    struct TestCase {
        inputs: Vec<&'static str>,
        command_matcher: fn(result: CommandResult<Command>),
    }
    let cases = vec![
        TestCase {
            inputs: vec!["myArray 3", "  myArray   3 "],
            command_matcher: |result| {
                assert!(matches!(
                    result.unwrap(),
                    Command::FirstN { array, count: 3 } if array == "myArray"
                ));
            },
        },
        TestCase {
            inputs: vec!["myArray 2 3", "myArray  2  3 "],
            command_matcher: |result| {
                assert!(matches!(
                    result.unwrap(),
                    Command::Window { array, first: 2, count: 3 } if array == "myArray"
                ));
            },
        },
        TestCase {
            inputs: vec!["myArray -3"],
            command_matcher: |result| {
                assert!(matches!(
                    result.unwrap(),
                    Command::FirstN { count: -3, .. }
                ));
            },
        },
        TestCase {
            inputs: vec!["myArray -2 4"],
            command_matcher: |result| {
                assert!(matches!(
                    result.unwrap(),
                    Command::Window { first: -2, count: 4, .. }
                ));
            },
        },
        TestCase {
            inputs: vec!["", "   "],
            command_matcher: |result| {
                assert!(matches!(result.unwrap(), Command::Usage));
            },
        },
        TestCase {
            inputs: vec!["myArray"],
            command_matcher: |result| {
                assert!(matches!(result.unwrap(), Command::Usage));
            },
        },
        TestCase {
            inputs: vec!["myArray 1 2 3", "a b c d e"],
            command_matcher: |result| {
                assert!(matches!(result.unwrap(), Command::Usage));
            },
        },
        TestCase {
            inputs: vec!["'two words' 2"],
            command_matcher: |result| {
                assert!(matches!(
                    result.unwrap(),
                    Command::FirstN { array, count: 2 } if array == "two words"
                ));
            },
        },
        TestCase {
            inputs: vec!["buf.items 2"],
            command_matcher: |result| {
                assert!(matches!(
                    result.unwrap(),
                    Command::FirstN { array, .. } if array == "buf.items"
                ));
            },
        },
        TestCase {
            inputs: vec!["myArray x", "myArray 0x10", "myArray 1.5", "myArray 1 x"],
            command_matcher: |result| {
                assert!(matches!(result, Err(CommandError::Parsing(_))));
            },
        },
        TestCase {
            inputs: vec!["'myArray 3"],
            command_matcher: |result| {
                assert!(matches!(result, Err(CommandError::Parsing(_))));
            },
        },
    ];

    for case in cases {
        for input in case.inputs {
            let result = Command::parse(input);
            (case.command_matcher)(result);
        }
    }
}
