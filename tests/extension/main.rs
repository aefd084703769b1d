mod common;

mod command;
mod registry;

use crate::common::capture_printer;
use parray::console::frame::SampleFrame;
use parray::host::CommandTable;

#[test]
fn test_parray_on_sample_frame() {
    let mut commands = CommandTable::default();
    parray::register(&mut commands).unwrap();
    let command = commands.get("parray").expect("parray must be registered");

    let frame = SampleFrame::with_samples();

    let (printer, sink) = capture_printer();
    command.exec(&frame, &printer, "primes 3").unwrap();
    assert_eq!(sink.lines(), vec!["u64(2)", "u64(3)", "u64(5)"]);

    let (printer, sink) = capture_printer();
    command.exec(&frame, &printer, "primes 2 3").unwrap();
    assert_eq!(sink.lines(), vec!["u64(5)", "u64(7)", "u64(11)"]);

    // indices past the end resolve to the host's own "No value" text
    let (printer, sink) = capture_printer();
    command.exec(&frame, &printer, "words 5").unwrap();
    assert_eq!(
        sink.lines(),
        vec![
            "String(one)",
            "String(two)",
            "String(three)",
            "No value",
            "No value"
        ]
    );
}
