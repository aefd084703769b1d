use crate::common::{exec_parray, RecordingFrame};
use parray::command::{CommandError, USAGE};
use parray::console::frame::SampleFrame;

#[test]
fn test_first_n_form_prints_elements_in_order() {
    let frame = RecordingFrame::with_values(&[
        ("myArray[0]", "i32(10)"),
        ("myArray[1]", "i32(20)"),
        ("myArray[2]", "i32(30)"),
    ]);

    let (result, lines) = exec_parray(&frame, "myArray 3");

    assert!(result.is_ok());
    assert_eq!(lines, vec!["i32(10)", "i32(20)", "i32(30)"]);
    assert_eq!(
        frame.queries(),
        vec!["myArray[0]", "myArray[1]", "myArray[2]"]
    );
}

#[test]
fn test_window_form_prints_elements_starting_at_first() {
    let frame = RecordingFrame::with_values(&[
        ("myArray[2]", "i32(30)"),
        ("myArray[3]", "i32(40)"),
        ("myArray[4]", "i32(50)"),
    ]);

    let (result, lines) = exec_parray(&frame, "myArray 2 3");

    assert!(result.is_ok());
    assert_eq!(lines, vec!["i32(30)", "i32(40)", "i32(50)"]);
    assert_eq!(
        frame.queries(),
        vec!["myArray[2]", "myArray[3]", "myArray[4]"]
    );
}

#[test]
fn test_usage_line_on_wrong_arity() {
    let inputs = ["", "   ", "myArray", "myArray 1 2 3", "a b c d e"];

    for input in inputs {
        let frame = RecordingFrame::empty();
        let (result, lines) = exec_parray(&frame, input);

        assert!(result.is_ok(), "input: {input:?}");
        assert_eq!(lines, vec![USAGE], "input: {input:?}");
        assert!(frame.queries().is_empty(), "input: {input:?}");
    }
}

#[test]
fn test_empty_range_prints_nothing() {
    let inputs = ["myArray 0", "myArray -3", "myArray 5 0", "myArray 2 -1"];

    for input in inputs {
        let frame = RecordingFrame::empty();
        let (result, lines) = exec_parray(&frame, input);

        assert!(result.is_ok(), "input: {input:?}");
        assert!(lines.is_empty(), "input: {input:?}");
        assert!(frame.queries().is_empty(), "input: {input:?}");
    }
}

#[test]
fn test_malformed_integer_aborts_invocation() {
    let inputs = [
        "myArray x",
        "myArray 1 x",
        "myArray 1.5",
        "myArray 0x10",
        "myArray 1O",
        "myArray '3",
    ];

    for input in inputs {
        let frame = RecordingFrame::empty();
        let (result, lines) = exec_parray(&frame, input);

        assert!(
            matches!(result, Err(CommandError::Parsing(_))),
            "input: {input:?}"
        );
        assert!(lines.is_empty(), "input: {input:?}");
        assert!(frame.queries().is_empty(), "input: {input:?}");
    }
}

#[test]
fn test_evaluator_failures_do_not_abort() {
    let frame = RecordingFrame::with_values(&[("sparse[0]", "i32(1)"), ("sparse[2]", "i32(3)")]);

    let (result, lines) = exec_parray(&frame, "sparse 3");

    assert!(result.is_ok());
    assert_eq!(
        lines,
        vec!["i32(1)", "error: `sparse[1]` does not resolve", "i32(3)"]
    );
    assert_eq!(frame.queries(), vec!["sparse[0]", "sparse[1]", "sparse[2]"]);
}

#[test]
fn test_quoted_array_expression() {
    let frame = RecordingFrame::with_values(&[("two words[0]", "i32(1)")]);

    let (result, lines) = exec_parray(&frame, "'two words' 1");

    assert!(result.is_ok());
    assert_eq!(lines, vec!["i32(1)"]);
    assert_eq!(frame.queries(), vec!["two words[0]"]);
}

#[test]
fn test_negative_first_window() {
    let frame = RecordingFrame::empty();

    let (result, _) = exec_parray(&frame, "arr -2 3");

    assert!(result.is_ok());
    assert_eq!(frame.queries(), vec!["arr[-2]", "arr[-1]", "arr[0]"]);
}

#[test]
fn test_unresolvable_array_expression_prints_no_value() {
    let frame = SampleFrame::with_samples();

    // index literal larger than usize::MAX, the frame must answer with its
    // error text instead of aborting the invocation
    let (result, lines) = exec_parray(&frame, "arr_1[18446744073709551616] 1");

    assert!(result.is_ok());
    assert_eq!(lines, vec!["No value"]);
}

#[test]
fn test_repeated_invocation_is_stateless() {
    let frame = RecordingFrame::with_values(&[("a[0]", "i32(1)")]);

    let (_, first) = exec_parray(&frame, "a 1");
    let (_, second) = exec_parray(&frame, "a 1");

    assert_eq!(first, second);
    assert_eq!(frame.queries(), vec!["a[0]", "a[0]"]);
}
