use chrono::{DateTime, TimeZone, Utc};
use portfolio_core::{
    Clock, ContactDraft, ContactField, ContactLog, ContactMessage, KeyValueStore, MemoryStore,
    StoreError, StoreResult, SubmitError, MESSAGES_KEY,
};
use std::cell::Cell;

#[derive(Clone)]
struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn frozen_clock() -> FixedClock {
    FixedClock(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap())
}

fn valid_draft() -> ContactDraft {
    ContactDraft {
        name: "Grace Hopper".to_string(),
        email: "grace@example.org".to_string(),
        message: "Interested in collaborating on a compiler.".to_string(),
    }
}

fn stored_messages(store: &MemoryStore) -> Vec<ContactMessage> {
    let blob = store.get(MESSAGES_KEY).unwrap().expect("blob must exist");
    serde_json::from_str(&blob).unwrap()
}

#[test]
fn submit_appends_message_with_id_and_iso_date() {
    let store = MemoryStore::new();
    let mut log = ContactLog::new(&store, frozen_clock());

    log.submit(&valid_draft()).unwrap();

    let messages = stored_messages(&store);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, "1700000000000");
    assert_eq!(messages[0].name, "Grace Hopper");
    assert_eq!(messages[0].date, "2023-11-14T22:13:20.000Z");
}

#[test]
fn submit_appends_to_the_existing_list_with_distinct_ids() {
    let store = MemoryStore::new();
    let mut log = ContactLog::new(&store, frozen_clock());

    log.submit(&valid_draft()).unwrap();
    log.submit(&valid_draft()).unwrap();

    let messages = stored_messages(&store);
    assert_eq!(messages.len(), 2);
    assert_ne!(messages[0].id, messages[1].id);
}

#[test]
fn submit_rejects_invalid_draft_without_writing() {
    let store = MemoryStore::new();
    let mut log = ContactLog::new(&store, frozen_clock());

    let draft = ContactDraft {
        email: "foo@bar".to_string(),
        ..valid_draft()
    };
    let err = log.submit(&draft).unwrap_err();

    match err {
        SubmitError::Validation(errors) => {
            assert_eq!(
                errors.get(ContactField::Email),
                Some("Please enter a valid email address")
            );
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.get(MESSAGES_KEY).unwrap(), None);
}

#[test]
fn corrupt_blob_restarts_the_log_from_empty() {
    let store = MemoryStore::new().with_entry(MESSAGES_KEY, "oops, not json");
    let mut log = ContactLog::new(&store, frozen_clock());

    log.submit(&valid_draft()).unwrap();

    assert_eq!(stored_messages(&store).len(), 1);
}

#[test]
fn ids_stay_above_those_already_in_the_log() {
    let existing = vec![ContactMessage {
        id: "1700000000005".to_string(),
        name: "Earlier".to_string(),
        email: "earlier@example.org".to_string(),
        message: "An earlier inquiry.".to_string(),
        date: "2023-11-14T22:13:20.005Z".to_string(),
    }];
    let store =
        MemoryStore::new().with_entry(MESSAGES_KEY, serde_json::to_string(&existing).unwrap());
    let mut log = ContactLog::new(&store, frozen_clock());

    log.submit(&valid_draft()).unwrap();

    let messages = stored_messages(&store);
    assert_eq!(messages[1].id, "1700000000006");
}

/// Store whose writes always fail.
struct ReadOnlyStore {
    inner: MemoryStore,
    writes_attempted: Cell<u32>,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
        self.writes_attempted.set(self.writes_attempted.get() + 1);
        Err(StoreError::Backend("read-only store".to_string()))
    }

    fn remove(&self, _key: &str) -> StoreResult<()> {
        Err(StoreError::Backend("read-only store".to_string()))
    }
}

#[test]
fn store_failure_surfaces_as_submit_error() {
    let store = ReadOnlyStore {
        inner: MemoryStore::new(),
        writes_attempted: Cell::new(0),
    };
    let mut log = ContactLog::new(&store, frozen_clock());

    let err = log.submit(&valid_draft()).unwrap_err();
    assert!(matches!(err, SubmitError::Store(_)));
    assert_eq!(store.writes_attempted.get(), 1);
}
