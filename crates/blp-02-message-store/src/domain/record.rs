//! # Record Codec
//!
//! Line format of the backing file, `|`-delimited, one record per line.
//!
//! ```text
//! extended:  id|author|timestamp|Level|text      (written)
//! legacy:    level|author|timestamp|text         (read only)
//! ```
//!
//! The layout is chosen by field count alone. Inside the text a backslash
//! is stored as `\\`, a newline as `\n` and a carriage return as `\r`.
//! Any other backslash pair is read back verbatim, so files that only
//! escaped newlines still load.

use blp_01_policy::{parse_level, SecurityLevel};

use super::errors::RecordError;
use super::message::Message;
use super::value_objects::MessageId;

/// Field separator.
pub const FIELD_DELIMITER: char = '|';

const ESCAPE: char = '\\';

/// A parsed line, before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    /// Literal id from an extended line; `None` for the legacy layout.
    pub id: Option<MessageId>,
    pub author: String,
    pub timestamp: String,
    pub level: SecurityLevel,
    pub text: String,
}

impl ParsedRecord {
    /// Build the message with the id chosen by the store.
    pub fn into_message(self, id: MessageId) -> Message {
        Message::new(id, self.author, self.text, self.timestamp, self.level)
    }
}

/// Escape backslashes and line breaks.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ESCAPE => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Reverse of [`escape_text`]. Unknown escape pairs are kept as written.
pub fn unescape_text(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != ESCAPE {
            text.push(c);
            continue;
        }
        match chars.next() {
            Some(ESCAPE) => text.push(ESCAPE),
            Some('n') => text.push('\n'),
            Some('r') => text.push('\r'),
            Some(other) => {
                text.push(ESCAPE);
                text.push(other);
            }
            None => text.push(ESCAPE),
        }
    }
    text
}

/// True if `text` can be stored without breaking the field count.
pub fn is_representable(text: &str) -> bool {
    !text.contains(FIELD_DELIMITER)
}

/// True if an unescaped field (author, timestamp) keeps the record on one
/// line with the right field count.
pub fn is_field_representable(value: &str) -> bool {
    !value.contains([FIELD_DELIMITER, '\n', '\r'])
}

/// Encode a message in the extended layout.
pub fn encode(message: &Message) -> String {
    format!(
        "{id}{d}{author}{d}{timestamp}{d}{level}{d}{text}",
        id = message.id(),
        author = message.author(),
        timestamp = message.timestamp(),
        level = message.level(),
        text = escape_text(message.text()),
        d = FIELD_DELIMITER,
    )
}

/// Decode and parse one raw line of the backing file.
///
/// Bytes that are not UTF-8 make only this line malformed.
pub fn decode_line(raw: &[u8]) -> Result<Option<ParsedRecord>, RecordError> {
    let line = std::str::from_utf8(raw).map_err(|e| RecordError::InvalidUtf8 {
        offset: e.valid_up_to(),
    })?;
    parse_line(line)
}

/// Parse one line of the backing file.
///
/// Returns `Ok(None)` for blank lines, which are skipped silently.
pub fn parse_line(line: &str) -> Result<Option<ParsedRecord>, RecordError> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    let record = match parts.as_slice() {
        [id, author, timestamp, level, text] => {
            let id = id
                .trim()
                .parse::<MessageId>()
                .map_err(|_| RecordError::InvalidId {
                    raw: id.to_string(),
                })?;
            ParsedRecord {
                id: Some(id),
                author: author.to_string(),
                timestamp: timestamp.to_string(),
                level: parse_level(level),
                text: unescape_text(text),
            }
        }
        [level, author, timestamp, text] => ParsedRecord {
            id: None,
            author: author.to_string(),
            timestamp: timestamp.to_string(),
            level: parse_level(level),
            text: unescape_text(text),
        },
        other => return Err(RecordError::FieldCount { found: other.len() }),
    };

    Ok(Some(record))
}
