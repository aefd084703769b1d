//! The `parray` command and its handler.
//!
//! Command is a request to print a run of consecutive elements of an
//! array-like variable. The command handler derives an index range from the
//! parsed arguments, resolves one `ARRAY[i]` variable path per index through
//! the host evaluator and prints whatever textual representation the host
//! returns, one value per line.

pub mod parser;

use crate::host::print::ExternalPrinter;
use crate::host::{ConsoleCommand, FrameEvaluator};
use log::debug;

#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    #[error("malformed command: {0}")]
    Parsing(String),
}

pub type CommandResult<T> = Result<T, CommandError>;

/// One `parray` invocation, parsed from raw argument text.
#[derive(Debug, Clone)]
pub enum Command {
    /// `parray ARRAY COUNT` form, prints indices `[0, count)`.
    FirstN { array: String, count: i64 },
    /// `parray ARRAY FIRST COUNT` form, prints indices `[first, first + count)`.
    Window {
        array: String,
        first: i64,
        count: i64,
    },
    /// Any other arity, print the usage line and do nothing else.
    Usage,
}

pub const USAGE: &str = "Usage: parray ARRAY [FIRST] COUNT";

pub const HELP_PARRAY: &str = "\
\x1b[32;1mparray\x1b[0m
Print consecutive elements of an array-like variable. Each element is
resolved as an `ARRAY[index]` variable path against the currently selected
stack frame; the host representation of the value is printed as is.

Available forms:
parray ARRAY COUNT - print ARRAY[0] .. ARRAY[COUNT-1]
parray ARRAY FIRST COUNT - print ARRAY[FIRST] .. ARRAY[FIRST+COUNT-1]

Examples of usage:
parray primes 3 - print first three elements of `primes`
parray primes 2 3 - print primes[2], primes[3] and primes[4]
parray 'two words' 2 - quote the array expression if it contains spaces
";

/// `parray` command handler.
pub struct Handler<'a> {
    frame: &'a dyn FrameEvaluator,
    printer: &'a ExternalPrinter,
}

impl<'a> Handler<'a> {
    pub fn new(frame: &'a dyn FrameEvaluator, printer: &'a ExternalPrinter) -> Self {
        Self { frame, printer }
    }

    /// Print an element for each index in the command range, in ascending
    /// order, one evaluator call per index. An empty range (including a
    /// negative count) prints nothing.
    pub fn handle(&self, cmd: Command) {
        let (array, indices) = match cmd {
            Command::Usage => {
                self.printer.print(USAGE);
                return;
            }
            Command::FirstN { array, count } => (array, 0..count),
            Command::Window {
                array,
                first,
                count,
            } => (array, first..first.saturating_add(count)),
        };

        for index in indices {
            let path = format!("{array}[{index}]");
            debug!(target: "parray", "resolve variable path `{path}`");
            self.printer.print(self.frame.value_for_path(&path));
        }
    }
}

/// The `parray` console command.
pub struct Parray;

impl ConsoleCommand for Parray {
    fn name(&self) -> &'static str {
        parser::PARRAY_COMMAND
    }

    fn help(&self) -> &str {
        HELP_PARRAY
    }

    fn exec(
        &self,
        frame: &dyn FrameEvaluator,
        printer: &ExternalPrinter,
        args: &str,
    ) -> CommandResult<()> {
        let command = Command::parse(args)?;
        Handler::new(frame, printer).handle(command);
        Ok(())
    }
}
