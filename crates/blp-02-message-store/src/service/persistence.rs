//! # Load / Save
//!
//! Dual-layout loading with sequential id assignment, and whole-file saves.

use tracing::{debug, error, info, warn};

use super::{MessageStoreService, StoreState};
use crate::domain::record::decode_line;
use crate::domain::{LoadReport, LoadSource, StoreError, FIRST_MESSAGE_ID};
use crate::ports::outbound::{Clock, MessageBackend};

impl<B, C> MessageStoreService<B, C>
where
    B: MessageBackend,
    C: Clock,
{
    /// Reload from the backend.
    ///
    /// Every loaded message is renumbered 1..N in file order; a literal id
    /// on an extended line is validated but not kept.
    pub(crate) fn load_from_backend(&self) -> LoadReport {
        let mut state = self.state.write();
        *state = StoreState::empty();

        let lines = match self.backend.read_lines() {
            Ok(Some(lines)) => lines,
            Ok(None) => {
                warn!(
                    "[blp-02] 📁 No messages file at {}; starting empty",
                    self.backend.describe()
                );
                return LoadReport::empty(LoadSource::Missing);
            }
            Err(e) => {
                error!(
                    "[blp-02] Unable to read {}: {}; starting empty",
                    self.backend.describe(),
                    e
                );
                return LoadReport::empty(LoadSource::Unavailable {
                    reason: e.to_string(),
                });
            }
        };

        let mut skipped = 0;
        let mut next_id = FIRST_MESSAGE_ID;

        for (index, line) in lines.iter().enumerate() {
            match decode_line(line) {
                Ok(Some(record)) => {
                    if let Some(literal) = record.id.filter(|literal| *literal != next_id) {
                        debug!("[blp-02] Renumbered record {} to {}", literal, next_id);
                    }
                    state.messages.push(record.into_message(next_id));
                    next_id += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    skipped += 1;
                    warn!(
                        "[blp-02] Skipping malformed record on line {}: {}",
                        index + 1,
                        e
                    );
                }
            }
        }
        state.next_id = next_id;

        info!(
            "[blp-02] 💾 Loaded {} messages from {} ({} skipped)",
            state.messages.len(),
            self.backend.describe(),
            skipped
        );

        LoadReport {
            source: LoadSource::Loaded,
            loaded: state.messages.len(),
            skipped,
        }
    }

    /// Serialize the full sequence to the backend.
    ///
    /// Callers hold the state lock for the duration.
    pub(crate) fn persist(&self, state: &StoreState) -> Result<(), StoreError> {
        let lines: Vec<String> = state.messages.iter().map(|m| m.to_line()).collect();
        self.backend.write_lines(&lines).map_err(|e| {
            error!(
                "[blp-02] Failed to save {} messages to {}: {}",
                lines.len(),
                self.backend.describe(),
                e
            );
            StoreError::from(e)
        })?;
        debug!(
            "[blp-02] Saved {} messages to {}",
            lines.len(),
            self.backend.describe()
        );
        Ok(())
    }
}
