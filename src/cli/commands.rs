//! Command table and input parsing
//!
//! Defines every command the interactive session understands and splits a
//! raw input line into a command name and its arguments.

use crate::error::{AddressBookError, AddressBookResult};

/// A command that can be typed at the prompt
#[derive(Debug, Clone)]
pub struct Command {
    /// Command name (what user types)
    pub name: &'static str,
    /// Argument synopsis shown in the help text
    pub usage: &'static str,
    /// Short description
    pub description: &'static str,
    /// Command action
    pub action: CommandAction,
}

/// Actions that commands can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

/// All available commands
pub static COMMANDS: &[Command] = &[
    Command {
        name: "hello",
        usage: "",
        description: "Greet the assistant",
        action: CommandAction::Hello,
    },
    Command {
        name: "add",
        usage: "<name> <phone>",
        description: "Add a contact or a phone to an existing contact",
        action: CommandAction::Add,
    },
    Command {
        name: "change",
        usage: "<name> <old phone> <new phone>",
        description: "Replace a contact's phone",
        action: CommandAction::Change,
    },
    Command {
        name: "phone",
        usage: "<name>",
        description: "Show a contact",
        action: CommandAction::Phone,
    },
    Command {
        name: "all",
        usage: "",
        description: "List all contacts",
        action: CommandAction::All,
    },
    Command {
        name: "add-birthday",
        usage: "<name> <DD.MM.YYYY>",
        description: "Set a contact's birthday",
        action: CommandAction::AddBirthday,
    },
    Command {
        name: "show-birthday",
        usage: "<name>",
        description: "Show a contact's birthday",
        action: CommandAction::ShowBirthday,
    },
    Command {
        name: "birthdays",
        usage: "[days]",
        description: "List birthdays in the coming days",
        action: CommandAction::Birthdays,
    },
    Command {
        name: "close",
        usage: "",
        description: "Save and quit",
        action: CommandAction::Exit,
    },
    Command {
        name: "exit",
        usage: "",
        description: "Save and quit",
        action: CommandAction::Exit,
    },
];

/// Find a command by exact name
pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|cmd| cmd.name == name)
}

/// A line split into command and arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Lowercased command name
    pub command: String,
    pub args: Vec<String>,
}

/// Split a line on whitespace into a lowercased command and its arguments
///
/// A blank line has no command and is rejected with an argument error.
pub fn parse_input(line: &str) -> AddressBookResult<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let command = tokens
        .next()
        .ok_or_else(|| AddressBookError::Argument("empty input".into()))?
        .trim()
        .to_lowercase();

    Ok(ParsedInput {
        command,
        args: tokens.map(str::to_string).collect(),
    })
}

/// The command overview printed when a session starts
pub fn help_text() -> String {
    COMMANDS
        .iter()
        .map(|cmd| {
            let synopsis = if cmd.usage.is_empty() {
                cmd.name.to_string()
            } else {
                format!("{} {}", cmd.name, cmd.usage)
            };
            format!("  - {:40} {}", synopsis, cmd.description)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercases_command_only() {
        let parsed = parse_input("ADD Alice 1234567890").unwrap();
        assert_eq!(parsed.command, "add");
        assert_eq!(parsed.args, vec!["Alice", "1234567890"]);
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let parsed = parse_input("  phone \t Alice  \n").unwrap();
        assert_eq!(parsed.command, "phone");
        assert_eq!(parsed.args, vec!["Alice"]);
    }

    #[test]
    fn test_parse_empty_line() {
        assert!(matches!(parse_input(""), Err(AddressBookError::Argument(_))));
        assert!(matches!(parse_input("   \t"), Err(AddressBookError::Argument(_))));
    }

    #[test]
    fn test_find_command() {
        assert_eq!(find_command("add").unwrap().action, CommandAction::Add);
        assert_eq!(
            find_command("add-birthday").unwrap().action,
            CommandAction::AddBirthday
        );
        assert_eq!(find_command("close").unwrap().action, CommandAction::Exit);
        assert_eq!(find_command("exit").unwrap().action, CommandAction::Exit);
        assert!(find_command("ADD").is_none());
        assert!(find_command("delete").is_none());
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = help_text();
        for cmd in COMMANDS {
            assert!(help.contains(cmd.name), "missing {}", cmd.name);
        }
        assert!(help.contains("birthdays [days]"));
        assert!(!help.contains("this week"));
    }
}
