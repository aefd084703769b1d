use crate::host::CommandTable;

pub const HELP_COMMAND: &str = "help";
pub const HELP_COMMAND_SHORT: &str = "h";
pub const QUIT_COMMAND: &str = "quit";
pub const QUIT_COMMAND_SHORT: &str = "q";

pub const HELP: &str = r#"
Available console commands:

parray <array> <count>                      -- print the first <count> elements of <array>
parray <array> <first> <count>              -- print <count> elements of <array> starting at index <first>
h, help <>|<command>                        -- show help
q, quit                                     -- exit the console
"#;

pub const HELP_HELP: &str = "\
\x1b[32;1mh, help\x1b[0m
Show help for the whole console or for a single command.
";

pub const HELP_QUIT: &str = "\
\x1b[32;1mq, quit\x1b[0m
Exit the console.
";

pub fn help_for_command(commands: &CommandTable, command: Option<&str>) -> String {
    match command {
        None => HELP.to_string(),
        Some(HELP_COMMAND) | Some(HELP_COMMAND_SHORT) => HELP_HELP.to_string(),
        Some(QUIT_COMMAND) | Some(QUIT_COMMAND_SHORT) => HELP_QUIT.to_string(),
        Some(name) => commands
            .get(name)
            .map(|cmd| cmd.help().to_string())
            .unwrap_or_else(|| "unknown command".to_string()),
    }
}
