use crate::console::editor::{create_editor, RLHelper};
use crate::console::frame::{SampleFrame, VarSpec};
use crate::console::help::*;
use crate::host::print::style::ErrorView;
use crate::host::print::ExternalPrinter;
use crate::host::CommandTable;
use anyhow::Context;
use log::info;
use rustyline::error::ReadlineError;
use rustyline::history::MemHistory;
use rustyline::Editor;

mod editor;
pub mod frame;
mod help;

const WELCOME_TEXT: &str = r#"
parray demo console greets
"#;
const PROMT: &str = "(parray) ";

type DemoEditor = Editor<RLHelper, MemHistory>;

pub struct AppBuilder {
    frame: SampleFrame,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            frame: SampleFrame::with_samples(),
        }
    }

    /// Add (or override) a frame variable, typically from the `--var` option.
    pub fn with_variable(mut self, spec: VarSpec) -> Self {
        self.frame.insert_var(spec.name, spec.values);
        self
    }

    pub fn build(self) -> anyhow::Result<TerminalApplication> {
        let mut commands = CommandTable::default();
        crate::register(&mut commands).context("install `parray` command")?;

        let command_names = commands.names().collect::<Vec<_>>();
        let variables = self
            .frame
            .variable_names()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        let editor = create_editor(PROMT, &command_names, variables)?;

        Ok(TerminalApplication {
            commands,
            frame: self.frame,
            editor,
            printer: ExternalPrinter::default(),
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TerminalApplication {
    commands: CommandTable,
    frame: SampleFrame,
    editor: DemoEditor,
    printer: ExternalPrinter,
}

impl TerminalApplication {
    pub fn run(mut self) -> anyhow::Result<()> {
        info!(target: "console", "start interactive session");
        println!("{WELCOME_TEXT}");
        self.printer.print(self.frame.summary());

        loop {
            let line = self.editor.readline(PROMT);
            match line {
                Ok(input) => {
                    if input == QUIT_COMMAND || input == QUIT_COMMAND_SHORT {
                        break;
                    }
                    _ = self.editor.add_history_entry(&input);
                    self.handle_input(&input);
                }
                Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
                Err(err) => {
                    println!("error: {err:#}");
                    break;
                }
            }
        }

        Ok(())
    }

    fn handle_input(&self, input: &str) {
        let input = input.trim();
        if input.is_empty() {
            return;
        }

        let (name, args) = match input.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args),
            None => (input, ""),
        };

        if name == HELP_COMMAND || name == HELP_COMMAND_SHORT {
            let topic = args.trim();
            let topic = (!topic.is_empty()).then_some(topic);
            self.printer.print(help_for_command(&self.commands, topic));
            return;
        }

        match self.commands.get(name) {
            Some(command) => {
                if let Err(e) = command.exec(&self.frame, &self.printer, args) {
                    self.printer.print(ErrorView::from(format!("{e:#}")));
                }
            }
            None => self.printer.print(ErrorView::from(format!(
                "unknown command `{name}`, type `help` for list of commands"
            ))),
        }
    }
}
