//! # File-Backed Flows
//!
//! The store over a real messages file, the process lock, and complete
//! shell sessions whose effects survive a reopen.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;
    use std::thread;

    use blp_01_policy::{authenticate, SecurityLevel, StaticCredentials, Subject};
    use blp_02_message_store::{
        FileMessageStore, LoadSource, MessageStoreApi, StoreError, StoreLock,
    };
    use blp_shell::Shell;
    use parking_lot::Mutex;
    use tempfile::TempDir;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn login(username: &str) -> Subject {
        authenticate(&StaticCredentials::default(), username, "password").unwrap()
    }

    fn run_shell(store: &FileMessageStore, input: &str) -> String {
        let creds = StaticCredentials::default();
        let mut shell = Shell::new(input.as_bytes(), Vec::new(), store, &creds);
        shell.run().unwrap();
        String::from_utf8(shell.into_output()).unwrap()
    }

    // =============================================================================
    // PERSISTENCE
    // =============================================================================

    #[test]
    fn test_posts_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.txt");
        let sam = login("SeamanSam");

        {
            let (store, report) = FileMessageStore::open_file(&path);
            assert_eq!(report.source, LoadSource::Missing);
            store.add_message(&sam, "first", None).unwrap().unwrap();
            store
                .add_message(&sam, "second\nwith two lines", Some(SecurityLevel::Secret))
                .unwrap()
                .unwrap();
        }

        let (store, report) = FileMessageStore::open_file(&path);
        assert_eq!(report.loaded, 2);
        assert_eq!(report.skipped, 0);

        let admiral = login("AdmiralAbe");
        let all = store.list_for(&admiral);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].text(), "first");
        assert_eq!(all[0].author(), "SeamanSam");
        assert_eq!(all[1].text(), "second\nwith two lines");
        assert_eq!(all[1].level(), SecurityLevel::Secret);

        // next id continues after the loaded ones
        let third = store.add_message(&sam, "third", None).unwrap().unwrap();
        assert_eq!(third.id(), 3);
    }

    #[test]
    fn test_legacy_file_is_rewritten_in_extended_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.txt");
        fs::write(
            &path,
            "Public|SeamanSue|2024-06-01 08:00|Fair winds\r\n\
             broken line\r\n\
             \r\n\
             Privileged|CaptainCharlie|2024-06-01 09:00|Change course\r\n",
        )
        .unwrap();

        let (store, report) = FileMessageStore::open_file(&path);
        assert_eq!(report.loaded, 2);
        assert_eq!(report.skipped, 1);

        store.save().unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "1|SeamanSue|2024-06-01 08:00|Public|Fair winds\n\
             2|CaptainCharlie|2024-06-01 09:00|Privileged|Change course\n"
        );
        assert!(!dir.path().join("messages.txt.tmp").exists());
    }

    #[test]
    fn test_undecodable_line_is_skipped_and_neighbours_survive_a_post() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.txt");
        let mut content = b"Public|Sue|d|one\n".to_vec();
        content.extend_from_slice(b"Public|Eve|d|caf\xE9 au lait\n");
        content.extend_from_slice(b"Secret|Abe|d|two\n");
        fs::write(&path, content).unwrap();

        {
            let (store, report) = FileMessageStore::open_file(&path);
            assert_eq!(report.source, LoadSource::Loaded);
            assert_eq!(report.loaded, 2);
            assert_eq!(report.skipped, 1);
            store
                .add_message(&login("SeamanSam"), "three", None)
                .unwrap()
                .unwrap();
        }

        let (store, report) = FileMessageStore::open_file(&path);
        assert_eq!(report.loaded, 3);
        let texts: Vec<_> = store
            .list_for(&login("AdmiralAbe"))
            .iter()
            .map(|m| m.text().to_string())
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_backslashes_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.txt");
        let text = "C:\\new\\notes\nsecond line \\";

        {
            let (store, _) = FileMessageStore::open_file(&path);
            store
                .add_message(&login("SeamanSue"), text, None)
                .unwrap()
                .unwrap();
        }

        let (store, _) = FileMessageStore::open_file(&path);
        assert_eq!(store.get_for(&login("SeamanSue"), 1).unwrap().text(), text);
    }

    #[test]
    fn test_author_with_delimiter_cannot_post() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.txt");
        let spy = login("Eve|Spy");

        {
            let (store, _) = FileMessageStore::open_file(&path);
            store.add_message(&login("SeamanSue"), "kept", None).unwrap();
            assert!(matches!(
                store.add_message(&spy, "hello", None),
                Err(StoreError::UnrepresentableAuthor { .. })
            ));
        }

        let (store, report) = FileMessageStore::open_file(&path);
        assert_eq!(report.loaded, 1);
        assert_eq!(report.skipped, 0);
        assert_eq!(store.len(), 1);

        let out = run_shell(&store, "Eve|Spy\npassword\np\nhello\n\n\nq\nn\n");
        assert!(out.contains("ERROR: Author name 'Eve|Spy' cannot be stored"));
        assert!(!out.contains("successfully added"));
    }

    #[test]
    fn test_unreadable_path_starts_empty() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be
        let (store, report) = FileMessageStore::open_file(dir.path());

        assert!(matches!(report.source, LoadSource::Unavailable { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_concurrent_posts_get_unique_ids() {
        let dir = TempDir::new().unwrap();
        let (store, _) = FileMessageStore::open_file(dir.path().join("messages.txt"));
        let store = Arc::new(store);
        let ids = Arc::new(Mutex::new(Vec::new()));

        let handles: Vec<_> = ["SeamanSam", "SeamanSue", "SeamanSly", "AdmiralAbe"]
            .into_iter()
            .map(|name| {
                let store = Arc::clone(&store);
                let ids = Arc::clone(&ids);
                thread::spawn(move || {
                    let subject = login(name);
                    for i in 0..5 {
                        let msg = store
                            .add_message(&subject, &format!("{} #{}", name, i), None)
                            .unwrap()
                            .unwrap();
                        ids.lock().push(msg.id());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids = ids.lock().clone();
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<u64>>());

        let (reopened, report) =
            FileMessageStore::open_file(dir.path().join("messages.txt"));
        assert_eq!(report.loaded, 20);
        assert_eq!(reopened.len(), 20);
    }

    // =============================================================================
    // SHELL SESSIONS
    // =============================================================================

    #[test]
    fn test_shell_sessions_over_file_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("messages.txt");

        {
            let _lock = StoreLock::acquire(&path).unwrap();
            let (store, _) = FileMessageStore::open_file(&path);
            let out = run_shell(
                &store,
                "AdmiralAbe\npassword\np\nSink the Bismarck\n\n\n\
                 q\ny\n\
                 SeamanSam\npassword\np\nHood is hit\n\n\nl\nr\n1\nq\nn\n",
            );

            assert!(out.contains("Message 1 successfully added."));
            assert!(out.contains("Message 2 successfully added."));
            assert!(out.contains("ERROR! Message ID '1' does not exist"));
            assert!(!out.contains("Sink the Bismarck"));
        }

        let (store, _) = FileMessageStore::open_file(&path);
        let out = run_shell(&store, "CaptainCharlie\npassword\nc\n3\nl\nq\nn\n");
        assert!(out.contains("1 message(s) cleared at Secret."));

        let (reopened, _) = FileMessageStore::open_file(&path);
        let admiral = login("AdmiralAbe");
        assert!(reopened.get_for(&admiral, 1).unwrap().is_cleared());
        assert_eq!(reopened.get_for(&admiral, 2).unwrap().text(), "Hood is hit");
    }
}
