//! An lldb-style `parray` extension for interactive debuggers.
//!
//! The extension registers a single command, `parray`, that prints a run of
//! consecutive elements of an array-like variable. All real work (symbol
//! resolution, memory reads, value formatting) stays on the host side: the
//! command only derives an index range and asks the host evaluator for one
//! `ARRAY[i]` variable path per index.
//!
//! ```text
//! (parray) parray primes 3
//! u64(2)
//! u64(3)
//! u64(5)
//! (parray) parray primes 2 3
//! u64(5)
//! u64(7)
//! u64(11)
//! ```
//!
//! Host capabilities the extension consumes (command table, frame-scoped
//! evaluator, console printer) live in the [`host`] module. The [`console`]
//! module is a small terminal application that plays the host role over a
//! synthetic stack frame, so the command can be exercised without a real
//! debugger attached.

pub mod command;
pub mod console;
pub mod host;

use crate::command::Parray;
use crate::host::{CommandTable, RegistryError};
use std::sync::Arc;

/// Install the `parray` command into a host command table.
///
/// Must be called exactly once per extension load; the host rejects a
/// repeated installation with [`RegistryError::Duplicate`].
pub fn register(commands: &mut CommandTable) -> Result<(), RegistryError> {
    commands.register(Arc::new(Parray))
}
