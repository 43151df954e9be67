use std::sync::{Arc, Mutex};
use userbook_core::{UserListAdapter, UserRecord};

type Seen = Arc<Mutex<Vec<UserRecord>>>;

fn recording_adapter() -> (UserListAdapter, Seen, Seen) {
    let selected: Seen = Arc::default();
    let deleted: Seen = Arc::default();
    let select_sink = Arc::clone(&selected);
    let delete_sink = Arc::clone(&deleted);
    let adapter = UserListAdapter::new(
        Vec::new(),
        move |user| select_sink.lock().unwrap().push(user.clone()),
        move |user| delete_sink.lock().unwrap().push(user.clone()),
    );
    (adapter, selected, deleted)
}

fn three_users() -> Vec<UserRecord> {
    vec![
        UserRecord::with_id(1, "Ana", "ana@x.com", "555-0001"),
        UserRecord::with_id(2, "Bo", "bo@x.com", "555-0002"),
        UserRecord::with_id(3, "Cy", "cy@x.com", "555-0003"),
    ]
}

#[test]
fn replace_then_bind_shows_record_fields() {
    let (mut adapter, _, _) = recording_adapter();
    adapter.replace(three_users());

    assert_eq!(adapter.item_count(), 3);
    let row = adapter.bind(1).unwrap();
    assert_eq!(row.name(), "Bo");
    assert_eq!(row.email(), "bo@x.com");
    assert_eq!(row.phone(), "555-0002");
}

#[test]
fn long_press_reports_delete_intent_and_is_handled() {
    let (mut adapter, selected, deleted) = recording_adapter();
    adapter.replace(three_users());

    let row = adapter.bind(1).unwrap();
    assert!(row.long_press());

    assert_eq!(*deleted.lock().unwrap(), vec![three_users()[1].clone()]);
    assert!(selected.lock().unwrap().is_empty());
}

#[test]
fn tap_reports_select() {
    let (mut adapter, selected, deleted) = recording_adapter();
    adapter.replace(three_users());

    adapter.bind(1).unwrap().tap();

    assert_eq!(*selected.lock().unwrap(), vec![three_users()[1].clone()]);
    assert!(deleted.lock().unwrap().is_empty());
}

#[test]
fn replace_with_empty_sequence_exposes_empty_state() {
    let (mut adapter, _, _) = recording_adapter();
    adapter.replace(three_users());
    adapter.replace(Vec::new());

    assert_eq!(adapter.item_count(), 0);
    assert!(adapter.is_empty());
    assert!(adapter.bind(0).is_none());
}

#[test]
fn item_count_tracks_every_replace() {
    let (mut adapter, _, _) = recording_adapter();
    for len in [3, 1, 0, 2] {
        adapter.replace(three_users().into_iter().take(len).collect());
        assert_eq!(adapter.item_count(), len);
        assert_eq!(adapter.snapshot().len(), len);
    }
}
