//! # Command Table
//!
//! Single-letter menu tokens, matched case-insensitively.

/// A menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Read,
    Post,
    Update,
    Delete,
    Clear,
    Help,
    Quit,
}

/// One row of the dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub token: char,
    pub command: Command,
    pub help: &'static str,
}

const fn spec(token: char, command: Command, help: &'static str) -> CommandSpec {
    CommandSpec {
        token,
        command,
        help,
    }
}

/// Every accepted token. `o` is kept as an alias for help.
pub const COMMANDS: &[CommandSpec] = &[
    spec('l', Command::List, "List the messages you may read"),
    spec('r', Command::Read, "Read one message"),
    spec('p', Command::Post, "Post a new message"),
    spec('u', Command::Update, "Update an existing message"),
    spec('d', Command::Delete, "Delete an existing message"),
    spec('c', Command::Clear, "Clear every message at one level"),
    spec('h', Command::Help, "Display this list of options"),
    spec('o', Command::Help, "Display this list of options"),
    spec('q', Command::Quit, "Log out"),
];

/// Look up a token. Surrounding whitespace is ignored.
pub fn parse_command(input: &str) -> Option<Command> {
    let mut chars = input.trim().chars();
    let token = chars.next()?.to_ascii_lowercase();
    if chars.next().is_some() {
        return None;
    }
    COMMANDS
        .iter()
        .find(|spec| spec.token == token)
        .map(|spec| spec.command)
}

/// Menu text, one option per line.
pub fn help_text() -> String {
    let mut text = String::new();
    for spec in COMMANDS {
        text.push_str(&format!("\t{} .. {}\n", spec.token, spec.help));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_token_dispatches() {
        let expected = [
            ("l", Command::List),
            ("r", Command::Read),
            ("p", Command::Post),
            ("u", Command::Update),
            ("d", Command::Delete),
            ("c", Command::Clear),
            ("h", Command::Help),
            ("o", Command::Help),
            ("q", Command::Quit),
        ];
        for (token, command) in expected {
            assert_eq!(parse_command(token), Some(command), "token {token}");
            assert_eq!(
                parse_command(&token.to_uppercase()),
                Some(command),
                "token {token} upper-case"
            );
        }
    }

    #[test]
    fn test_unknown_tokens() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("x"), None);
        assert_eq!(parse_command("list"), None);
        assert_eq!(parse_command(" q "), Some(Command::Quit));
    }

    #[test]
    fn test_tokens_are_unique() {
        for (i, a) in COMMANDS.iter().enumerate() {
            for b in &COMMANDS[i + 1..] {
                assert_ne!(a.token, b.token);
            }
        }
    }

    #[test]
    fn test_help_lists_every_token() {
        let help = help_text();
        assert_eq!(help.lines().count(), COMMANDS.len());
        assert!(help.contains("\tq .. Log out"));
    }
}
