//! # BLP Shell
//!
//! Console front end for the message vault. Configuration, the login loop
//! and the single-letter command table live here; all access decisions are
//! made by `blp-01-policy` and `blp-02-message-store`.
//!
//! ## Commands
//!
//! | Token | Action |
//! |-------|--------|
//! | `l` | List readable messages |
//! | `r` | Read one message |
//! | `p` | Post a message (multi-line, optional level) |
//! | `u` | Update a message |
//! | `d` | Delete a message |
//! | `c` | Clear every message at one level |
//! | `h` / `o` | Help |
//! | `q` | Log out |

pub mod cli;
pub mod commands;
pub mod config;
pub mod session;

pub use cli::Args;
pub use commands::{parse_command, Command, CommandSpec, COMMANDS};
pub use config::{ConfigError, RosterSource, ShellConfig};
pub use session::{SessionEnd, Shell};
