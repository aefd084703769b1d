//! Host debugger surface: the traits a console exposes to its command
//! extensions and the table where extensions are installed.

pub mod print;

use crate::command::CommandResult;
use crate::host::print::ExternalPrinter;
use indexmap::IndexMap;
use log::info;
use std::sync::Arc;

/// Expression evaluator scoped to the currently selected stack frame.
pub trait FrameEvaluator {
    /// Evaluate a variable path (`arr[3]`, `buf.items[0]`) and render the
    /// result.
    ///
    /// The returned string is the host's own representation: a value, or the
    /// host's error text when the path does not resolve. Callers treat both
    /// alike and never try to classify the outcome.
    fn value_for_path(&self, path: &str) -> String;
}

/// A named console command installed into a [`CommandTable`].
pub trait ConsoleCommand {
    /// Command name, as typed at the prompt.
    fn name(&self) -> &'static str;

    /// Help for `help <name>`.
    fn help(&self) -> &str;

    /// Execute the command with raw (unsplit) argument text.
    fn exec(
        &self,
        frame: &dyn FrameEvaluator,
        printer: &ExternalPrinter,
        args: &str,
    ) -> CommandResult<()>;
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RegistryError {
    #[error("command `{0}` already registered")]
    Duplicate(String),
    #[error("invalid command name `{0}`")]
    InvalidName(String),
}

/// Console command registry. Iteration order is registration order.
#[derive(Default)]
pub struct CommandTable {
    commands: IndexMap<&'static str, Arc<dyn ConsoleCommand>>,
}

impl CommandTable {
    pub fn register(&mut self, command: Arc<dyn ConsoleCommand>) -> Result<(), RegistryError> {
        let name = command.name();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(RegistryError::InvalidName(name.to_string()));
        }
        if self.commands.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }

        info!(target: "host", "command `{name}` registered");
        self.commands.insert(name, command);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn ConsoleCommand>> {
        self.commands.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}
