use blp_01_policy::{SecurityLevel, Subject};

use crate::adapters::{FixedClock, InMemoryMessageBackend};
use crate::service::{InMemoryMessageStore, MessageStoreDependencies, MessageStoreService};

pub const TEST_TIMESTAMP: &str = "1941-05-27 10:40";

pub fn subject(name: &str, level: SecurityLevel) -> Subject {
    Subject::for_testing(name, level)
}

pub fn public() -> Subject {
    subject("Stowaway", SecurityLevel::Public)
}

pub fn confidential() -> Subject {
    subject("SeamanSam", SecurityLevel::Confidential)
}

pub fn privileged() -> Subject {
    subject("CaptainCharlie", SecurityLevel::Privileged)
}

pub fn secret() -> Subject {
    subject("AdmiralAbe", SecurityLevel::Secret)
}

/// Store over raw file lines, already loaded.
pub fn store_with_lines<I, S>(lines: I) -> InMemoryMessageStore<FixedClock>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let (store, _) = MessageStoreService::open(MessageStoreDependencies {
        backend: InMemoryMessageBackend::with_lines(lines),
        clock: FixedClock::new(TEST_TIMESTAMP),
    });
    store
}

/// One message per level, Public first, ids 1..=4.
pub fn store_one_per_level() -> InMemoryMessageStore<FixedClock> {
    store_with_lines([
        "Public|SeamanSue|1941-05-24 06:00|Weather is fair",
        "Confidential|SeamanSam|1941-05-24 07:00|Hood is hit",
        "Privileged|CaptainCharlie|1941-05-24 08:00|Change course",
        "Secret|AdmiralAbe|1941-05-24 09:00|Rodney to intercept",
    ])
}
