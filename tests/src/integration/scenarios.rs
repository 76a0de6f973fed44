//! # Access-Control Scenarios
//!
//! Authenticated subjects acting on an in-memory store.
//!
//! | Scenario | Property |
//! |----------|----------|
//! | A | Posting at, above and below the subject's clearance |
//! | B | Listing never shows higher-classified messages |
//! | C | Loading skips malformed lines and numbers from 1 |
//! | D | A forbidden clear changes nothing and never saves |

#[cfg(test)]
mod tests {
    use blp_01_policy::{authenticate, SecurityLevel, StaticCredentials, Subject};
    use blp_02_message_store::{
        FixedClock, InMemoryMessageBackend, InMemoryMessageStore, LoadSource, MessageStoreApi,
        MessageStoreDependencies, MessageStoreService,
    };
    use rstest::rstest;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn login(username: &str) -> Subject {
        authenticate(&StaticCredentials::default(), username, "password")
            .expect("default roster accepts the shared password")
    }

    fn store_with(lines: &[&str]) -> (InMemoryMessageStore<FixedClock>, LoadSource) {
        let (store, report) = MessageStoreService::open(MessageStoreDependencies {
            backend: InMemoryMessageBackend::with_lines(lines.iter().copied()),
            clock: FixedClock::new("2024-06-01 12:00"),
        });
        (store, report.source)
    }

    // =============================================================================
    // SCENARIO A: NO WRITE DOWN
    // =============================================================================

    #[test]
    fn test_scenario_a_confidential_subject_posting() {
        let (store, _) = store_with(&[
            "Public|SeamanSue|2024-06-01 08:00|Fair winds",
            "Secret|AdmiralAbe|2024-06-01 09:00|Orders",
        ]);
        let sam = login("SeamanSam");
        assert_eq!(sam.level(), SecurityLevel::Confidential);

        let own = store
            .add_message(&sam, "hello", Some(SecurityLevel::Confidential))
            .unwrap()
            .expect("write at own level");
        assert_eq!(own.id(), 3);

        let down = store
            .add_message(&sam, "leak", Some(SecurityLevel::Public))
            .unwrap();
        assert!(down.is_none());

        let up = store
            .add_message(&sam, "report up", Some(SecurityLevel::Secret))
            .unwrap()
            .expect("write up is allowed");
        assert_eq!(up.id(), 4);
        assert_eq!(store.len(), 4);
    }

    #[rstest]
    #[case("AdmiralAbe", SecurityLevel::Public, false)]
    #[case("AdmiralAbe", SecurityLevel::Secret, true)]
    #[case("CaptainCharlie", SecurityLevel::Confidential, false)]
    #[case("CaptainCharlie", SecurityLevel::Privileged, true)]
    #[case("CaptainCharlie", SecurityLevel::Secret, true)]
    #[case("Stowaway", SecurityLevel::Public, true)]
    fn test_post_outcome_by_clearance(
        #[case] username: &str,
        #[case] level: SecurityLevel,
        #[case] allowed: bool,
    ) {
        let (store, _) = store_with(&[]);
        let subject = login(username);
        let posted = store.add_message(&subject, "text", Some(level)).unwrap();
        assert_eq!(posted.is_some(), allowed);
    }

    // =============================================================================
    // SCENARIO B: NO READ UP
    // =============================================================================

    #[test]
    fn test_scenario_b_public_subject_sees_only_public() {
        let (store, _) = store_with(&[
            "Public|SeamanSue|2024-06-01 08:00|Fair winds",
            "Secret|AdmiralAbe|2024-06-01 09:00|Orders",
        ]);
        // Not on the roster: shared password, Public clearance
        let stowaway = login("Stowaway");
        assert_eq!(stowaway.level(), SecurityLevel::Public);

        let visible = store.list_for(&stowaway);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].level(), SecurityLevel::Public);
        assert_eq!(visible[0].text(), "Fair winds");

        assert!(store.get_for(&stowaway, 2).is_none());
        assert_eq!(store.list_for(&login("AdmiralAbe")).len(), 2);
    }

    // =============================================================================
    // SCENARIO C: MALFORMED INPUT
    // =============================================================================

    #[test]
    fn test_scenario_c_malformed_line_is_skipped() {
        let (store, source) = store_with(&[
            "Confidential|SeamanSam|2024-06-01 08:00|Hood is hit",
            "Public|SeamanSue|no text field",
        ]);
        assert_eq!(source, LoadSource::Loaded);
        assert_eq!(store.len(), 1);

        let admiral = login("AdmiralAbe");
        let only = store.get_for(&admiral, 1).expect("first valid line is id 1");
        assert_eq!(only.text(), "Hood is hit");
        assert!(store.get_for(&admiral, 2).is_none());
    }

    // =============================================================================
    // SCENARIO D: FORBIDDEN CLEAR
    // =============================================================================

    #[test]
    fn test_scenario_d_clear_below_clearance_is_a_no_op() {
        let (store, _) = store_with(&[
            "Public|SeamanSue|2024-06-01 08:00|Fair winds",
            "Confidential|SeamanSam|2024-06-01 09:00|Hood is hit",
        ]);
        let admiral = login("AdmiralAbe");

        let before = store.list_for(&admiral);
        let cleared = store
            .clear_messages_at_level(&admiral, SecurityLevel::Public)
            .unwrap();

        assert_eq!(cleared, 0);
        assert_eq!(store.list_for(&admiral), before);
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_clear_then_list_keeps_headers() {
        let (store, _) = store_with(&[
            "Confidential|SeamanSam|2024-06-01 08:00|one",
            "Confidential|SeamanSly|2024-06-01 09:00|two",
        ]);
        let sue = login("SeamanSue");

        assert_eq!(
            store
                .clear_messages_at_level(&sue, SecurityLevel::Confidential)
                .unwrap(),
            2
        );
        let listed = store.list_for(&sue);
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|m| m.is_cleared()));
        assert!(listed.iter().all(|m| m.display_text().is_none()));
        assert_eq!(
            listed[1].short_header(),
            "[002] (Confidential) SeamanSly @ 2024-06-01 09:00"
        );
    }
}
