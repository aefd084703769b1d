use crate::common::{capture_printer, RecordingFrame};
use parray::command::CommandResult;
use parray::host::print::ExternalPrinter;
use parray::host::{CommandTable, ConsoleCommand, FrameEvaluator, RegistryError};
use std::sync::Arc;

/// Do-nothing command, for registry tests only.
struct NopCommand {
    name: &'static str,
}

impl ConsoleCommand for NopCommand {
    fn name(&self) -> &'static str {
        self.name
    }

    fn help(&self) -> &str {
        "nop command, for test purposes only"
    }

    fn exec(
        &self,
        _frame: &dyn FrameEvaluator,
        printer: &ExternalPrinter,
        _args: &str,
    ) -> CommandResult<()> {
        printer.print("nop");
        Ok(())
    }
}

#[test]
fn test_register_installs_parray() {
    let mut commands = CommandTable::default();
    parray::register(&mut commands).unwrap();

    let command = commands.get("parray").expect("parray must be registered");
    assert_eq!(command.name(), "parray");
    assert!(commands.get("unknown").is_none());
}

#[test]
fn test_duplicate_registration_rejected() {
    let mut commands = CommandTable::default();
    parray::register(&mut commands).unwrap();

    assert_eq!(
        parray::register(&mut commands),
        Err(RegistryError::Duplicate("parray".to_string()))
    );
}

#[test]
fn test_invalid_names_rejected() {
    let cases = ["", " ", "two words", "name\t"];

    for name in cases {
        let mut commands = CommandTable::default();
        let result = commands.register(Arc::new(NopCommand { name }));
        assert_eq!(result, Err(RegistryError::InvalidName(name.to_string())));
    }
}

#[test]
fn test_registration_order_preserved() {
    let mut commands = CommandTable::default();
    for name in ["ccc", "aaa", "bbb"] {
        commands.register(Arc::new(NopCommand { name })).unwrap();
    }

    let names = commands.names().collect::<Vec<_>>();
    assert_eq!(names, vec!["ccc", "aaa", "bbb"]);
}

#[test]
fn test_exec_through_table() {
    let mut commands = CommandTable::default();
    commands
        .register(Arc::new(NopCommand { name: "nop" }))
        .unwrap();

    let command = commands.get("nop").expect("nop must be registered");
    let (printer, sink) = capture_printer();
    command.exec(&RecordingFrame::empty(), &printer, "").unwrap();
    assert_eq!(sink.lines(), vec!["nop"]);
}
