use parray::command::CommandResult;
use parray::host::print::ExternalPrinter;
use parray::host::{CommandTable, FrameEvaluator};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Shared in-memory sink for output captured from an [`ExternalPrinter`].
#[derive(Clone, Default)]
pub struct CaptureSink(Arc<Mutex<Vec<u8>>>);

impl CaptureSink {
    pub fn lines(&self) -> Vec<String> {
        let buf = self.0.lock().unwrap();
        String::from_utf8(buf.clone())
            .expect("invalid utf-8 in captured output")
            .lines()
            .map(ToString::to_string)
            .collect()
    }
}

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn capture_printer() -> (ExternalPrinter, CaptureSink) {
    let sink = CaptureSink::default();
    (ExternalPrinter::new(sink.clone()), sink)
}

/// Frame evaluator over canned values that records every requested path.
pub struct RecordingFrame {
    values: HashMap<String, String>,
    queries: RefCell<Vec<String>>,
}

impl RecordingFrame {
    pub fn empty() -> Self {
        Self::with_values(&[])
    }

    pub fn with_values(values: &[(&str, &str)]) -> Self {
        Self {
            values: values
                .iter()
                .map(|(path, value)| (path.to_string(), value.to_string()))
                .collect(),
            queries: RefCell::default(),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl FrameEvaluator for RecordingFrame {
    fn value_for_path(&self, path: &str) -> String {
        self.queries.borrow_mut().push(path.to_string());
        self.values
            .get(path)
            .cloned()
            .unwrap_or_else(|| format!("error: `{path}` does not resolve"))
    }
}

/// Install the extension into a fresh command table and execute `parray`
/// with the given argument text.
pub fn exec_parray(frame: &dyn FrameEvaluator, args: &str) -> (CommandResult<()>, Vec<String>) {
    let mut commands = CommandTable::default();
    parray::register(&mut commands).expect("register parray");
    let command = commands.get("parray").expect("parray must be registered");

    let (printer, sink) = capture_printer();
    let result = command.exec(frame, &printer, args);
    (result, sink.lines())
}
