//! # Interactive Session
//!
//! Login loop and command loop over any `BufRead`/`Write` pair. The shell
//! owns no policy: every decision comes from `authenticate` or the store.

use std::io::{self, BufRead, Write};

use blp_01_policy::{
    authenticate, can_write, try_parse_level, CredentialProvider, SecurityLevel, Subject,
};
use blp_02_message_store::{Message, MessageId, MessageStoreApi, StoreError, WriteAccess};
use tracing::{debug, info, warn};

use crate::commands::{help_text, parse_command, Command};

const ACCESS_DENIED: &str = "\tACCESS DENIED: Cannot write down.\n";
const INVALID_LEVEL: &str = "\tERROR: Invalid security level.\n";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose quit.
    Logout,
    /// Input closed.
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Logout,
}

/// Console front end over one store and one credential provider.
pub struct Shell<'a, R, W> {
    input: R,
    output: W,
    store: &'a dyn MessageStoreApi,
    credentials: &'a dyn CredentialProvider,
}

impl<'a, R, W> Shell<'a, R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(
        input: R,
        output: W,
        store: &'a dyn MessageStoreApi,
        credentials: &'a dyn CredentialProvider,
    ) -> Self {
        Self {
            input,
            output,
            store,
            credentials,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run sessions until nobody else logs in or input closes.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            if self.session()? == SessionEnd::EndOfInput {
                return Ok(());
            }
            match self.prompt("Will another user be logging in? (y/n) ")? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => continue,
                _ => return Ok(()),
            }
        }
    }

    /// One login plus its command loop.
    pub fn session(&mut self) -> io::Result<SessionEnd> {
        let Some(subject) = self.login()? else {
            return Ok(SessionEnd::EndOfInput);
        };
        info!(
            "[blp-shell] 🔓 {} logged in at {}",
            subject.username(),
            subject.level()
        );

        writeln!(
            self.output,
            "\nWelcome, {}. Please select an option:\n",
            subject.username()
        )?;
        write!(self.output, "{}", help_text())?;

        let prompt = format!("{}> ", subject.username());
        loop {
            let Some(line) = self.prompt(&prompt)? else {
                info!("[blp-shell] Input closed during {}'s session", subject.username());
                return Ok(SessionEnd::EndOfInput);
            };
            if line.trim().is_empty() {
                continue;
            }

            let flow = match parse_command(&line) {
                Some(command) => {
                    debug!("[blp-shell] {} -> {:?}", subject.username(), command);
                    self.execute(&subject, command)?
                }
                None => {
                    writeln!(self.output, "Unknown command: '{}'", line.trim())?;
                    Flow::Continue
                }
            };

            if flow == Flow::Logout {
                info!("[blp-shell] 🔒 {} logged out", subject.username());
                return Ok(SessionEnd::Logout);
            }
        }
    }

    fn login(&mut self) -> io::Result<Option<Subject>> {
        writeln!(self.output, "Users:")?;
        for name in self.credentials.usernames() {
            writeln!(self.output, "\t{}", name)?;
        }

        loop {
            let Some(username) = self.prompt("\nWhat is your username? ")? else {
                return Ok(None);
            };
            let Some(password) = self.prompt("What is your password? ")? else {
                return Ok(None);
            };

            match authenticate(self.credentials, username.trim(), &password) {
                Ok(subject) => return Ok(Some(subject)),
                Err(e) => {
                    warn!("[blp-shell] {}", e);
                    writeln!(self.output, "Authentication failed! Please try again.")?;
                }
            }
        }
    }

    fn execute(&mut self, subject: &Subject, command: Command) -> io::Result<Flow> {
        match command {
            Command::List => self.list(subject)?,
            Command::Read => self.read(subject)?,
            Command::Post => self.post(subject)?,
            Command::Update => self.update(subject)?,
            Command::Delete => self.delete(subject)?,
            Command::Clear => self.clear(subject)?,
            Command::Help => {
                writeln!(self.output, "Options:")?;
                write!(self.output, "{}", help_text())?;
            }
            Command::Quit => {
                writeln!(self.output, "Goodbye, {}\n", subject.username())?;
                return Ok(Flow::Logout);
            }
        }
        Ok(Flow::Continue)
    }

    // === Commands ===

    fn list(&mut self, subject: &Subject) -> io::Result<()> {
        let messages = self.store.list_for(subject);
        writeln!(self.output, "Messages:")?;
        if messages.is_empty() {
            writeln!(self.output, "\t(none)")?;
        }
        for message in &messages {
            writeln!(self.output, "\t{}", message.short_header())?;
        }
        writeln!(self.output)
    }

    fn read(&mut self, subject: &Subject) -> io::Result<()> {
        let Some(id) = self.prompt_id("display")? else {
            return Ok(());
        };
        match self.store.get_for(subject, id) {
            Some(message) => self.show(&message),
            None => self.not_found(id),
        }
    }

    fn post(&mut self, subject: &Subject) -> io::Result<()> {
        writeln!(
            self.output,
            "Please provide a message (finish with an empty line):"
        )?;
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line.trim().is_empty() {
                break;
            }
            lines.push(line);
        }
        if lines.is_empty() {
            return writeln!(self.output, "\tERROR: Empty message, nothing posted.\n");
        }

        let prompt = format!(
            "Security level (Public, Confidential, Privileged, Secret) [{}]: ",
            subject.level()
        );
        let Some(raw) = self.prompt(&prompt)? else {
            return Ok(());
        };
        let level = if raw.trim().is_empty() {
            None
        } else {
            match try_parse_level(&raw) {
                Some(level) => Some(level),
                None => return write!(self.output, "{}", INVALID_LEVEL),
            }
        };

        match self.store.add_message(subject, &lines.join("\n"), level) {
            Ok(Some(message)) => writeln!(
                self.output,
                "\tMessage {} successfully added.\n",
                message.id()
            ),
            Ok(None) => write!(self.output, "{}", ACCESS_DENIED),
            Err(e) => self.report(&e),
        }
    }

    fn update(&mut self, subject: &Subject) -> io::Result<()> {
        let Some(id) = self.prompt_id("update")? else {
            return Ok(());
        };
        match self.store.write_access(subject, id) {
            WriteAccess::NotFound => return self.not_found(id),
            WriteAccess::Denied => return write!(self.output, "{}", ACCESS_DENIED),
            WriteAccess::Granted => {}
        }

        let Some(text) = self.prompt("Please provide an updated message: ")? else {
            return Ok(());
        };
        match self.store.update_message(subject, id, &text) {
            Ok(true) => writeln!(self.output, "\tMessage {} successfully updated.\n", id),
            Ok(false) => write!(self.output, "{}", ACCESS_DENIED),
            Err(e) => self.report(&e),
        }
    }

    fn delete(&mut self, subject: &Subject) -> io::Result<()> {
        let Some(id) = self.prompt_id("delete")? else {
            return Ok(());
        };
        match self.store.remove_message(subject, id) {
            Ok(WriteAccess::Granted) => {
                writeln!(self.output, "\tMessage {} successfully deleted.\n", id)
            }
            Ok(WriteAccess::Denied) => write!(self.output, "{}", ACCESS_DENIED),
            Ok(WriteAccess::NotFound) => self.not_found(id),
            Err(e) => self.report(&e),
        }
    }

    fn clear(&mut self, subject: &Subject) -> io::Result<()> {
        writeln!(self.output, "Select the level to clear:")?;
        for level in SecurityLevel::ALL {
            writeln!(self.output, "\t{} .. {}", level.rank(), level)?;
        }
        let Some(raw) = self.prompt("Level: ")? else {
            return Ok(());
        };

        // Menu number or level name
        let raw = raw.trim();
        let level = raw
            .parse::<u8>()
            .ok()
            .and_then(SecurityLevel::from_rank)
            .or_else(|| try_parse_level(raw));
        let Some(level) = level else {
            return write!(self.output, "{}", INVALID_LEVEL);
        };
        if !can_write(subject.level(), level) {
            return write!(self.output, "{}", ACCESS_DENIED);
        }

        match self.store.clear_messages_at_level(subject, level) {
            Ok(count) => writeln!(
                self.output,
                "\t{} message(s) cleared at {}.\n",
                count, level
            ),
            Err(e) => self.report(&e),
        }
    }

    // === Output helpers ===

    fn show(&mut self, message: &Message) -> io::Result<()> {
        writeln!(self.output, "\t{}", message.short_header())?;
        match message.display_text() {
            Some(text) => {
                for line in text.lines() {
                    writeln!(self.output, "\t\t{}", line)?;
                }
            }
            None => writeln!(self.output, "\t\t(cleared)")?,
        }
        writeln!(self.output)
    }

    fn not_found(&mut self, id: MessageId) -> io::Result<()> {
        writeln!(self.output, "ERROR! Message ID '{}' does not exist\n", id)
    }

    fn report(&mut self, error: &StoreError) -> io::Result<()> {
        writeln!(self.output, "\tERROR: {}\n", error)
    }

    // === Input helpers ===

    fn prompt_id(&mut self, verb: &str) -> io::Result<Option<MessageId>> {
        let Some(raw) = self.prompt(&format!("Select the message ID to {}: ", verb))? else {
            return Ok(None);
        };
        match raw.trim().parse::<MessageId>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.output, "\tERROR: '{}' is not a message ID.\n", raw.trim())?;
                Ok(None)
            }
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Next input line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}
