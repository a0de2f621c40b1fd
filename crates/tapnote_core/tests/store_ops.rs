use tapnote_core::{Note, NoteStore};

fn store_with(values: &[&str]) -> NoteStore {
    let notes = values
        .iter()
        .enumerate()
        .map(|(idx, value)| Note::with_id(format!("{}", idx + 1), *value))
        .collect();
    NoteStore::with_notes(notes)
}

#[test]
fn add_prepends_trimmed_value_and_grows_list_by_one() {
    let mut store = store_with(&["older"]);
    assert!(store.add("  Buy milk  "));
    assert_eq!(store.len(), 2);
    assert_eq!(store.notes()[0].value, "Buy milk");
    assert_eq!(store.notes()[1].value, "older");
}

#[test]
fn add_rejects_empty_and_whitespace_only_input() {
    let mut store = NoteStore::new();
    assert!(!store.add(""));
    assert!(!store.add("   "));
    assert!(store.is_empty());
}

#[test]
fn added_notes_get_distinct_ids() {
    let mut store = NoteStore::new();
    store.add("first");
    store.add("second");
    assert_ne!(store.notes()[0].id, store.notes()[1].id);
}

#[test]
fn submit_draft_adds_and_always_clears_the_draft() {
    let mut store = NoteStore::new();
    store.set_draft("  Call mom ");
    assert!(store.submit_draft());
    assert_eq!(store.draft(), "");
    assert_eq!(store.notes()[0].value, "Call mom");

    store.set_draft("   ");
    assert!(!store.submit_draft());
    assert_eq!(store.draft(), "");
    assert_eq!(store.len(), 1);
}

#[test]
fn begin_edit_seeds_buffer_with_current_value() {
    let mut store = store_with(&["alpha", "beta"]);
    store.begin_edit("2");
    assert_eq!(store.editing_id().map(String::as_str), Some("2"));
    assert_eq!(store.edit_buffer(), "beta");
}

#[test]
fn begin_edit_on_unknown_id_is_a_noop() {
    let mut store = store_with(&["alpha"]);
    store.begin_edit("missing");
    assert_eq!(store.editing_id(), None);
    assert_eq!(store.edit_buffer(), "");
}

#[test]
fn second_begin_edit_abandons_previous_buffer() {
    let mut store = store_with(&["alpha", "beta"]);
    store.begin_edit("1");
    store.set_edit_buffer("half-typed change");
    store.begin_edit("2");
    assert_eq!(store.editing_id().map(String::as_str), Some("2"));
    assert_eq!(store.edit_buffer(), "beta");
    assert_eq!(store.notes()[0].value, "alpha");
}

#[test]
fn commit_edit_replaces_only_target_value_keeping_id_and_position() {
    let mut store = store_with(&["alpha", "beta", "gamma"]);
    store.begin_edit("2");
    store.set_edit_buffer("  beta v2 ");
    assert!(store.commit_edit());

    let values: Vec<&str> = store.notes().iter().map(|n| n.value.as_str()).collect();
    assert_eq!(values, ["alpha", "beta v2", "gamma"]);
    assert_eq!(store.notes()[1].id, "2");
    assert_eq!(store.editing_id(), None);
    assert_eq!(store.edit_buffer(), "");
}

#[test]
fn commit_edit_with_blank_buffer_keeps_value_and_exits_edit_mode() {
    let mut store = store_with(&["alpha"]);
    store.begin_edit("1");
    store.set_edit_buffer("   ");
    assert!(!store.commit_edit());
    assert_eq!(store.notes()[0].value, "alpha");
    assert_eq!(store.editing_id(), None);
    assert_eq!(store.edit_buffer(), "");
}

#[test]
fn commit_edit_without_active_edit_is_a_noop() {
    let mut store = store_with(&["alpha"]);
    store.set_edit_buffer("stray text");
    assert!(!store.commit_edit());
    assert_eq!(store.notes()[0].value, "alpha");
    assert_eq!(store.edit_buffer(), "");
}

#[test]
fn delete_removes_exactly_the_matching_note() {
    let mut store = store_with(&["alpha", "beta", "gamma"]);
    assert!(store.delete("2"));
    let values: Vec<&str> = store.notes().iter().map(|n| n.value.as_str()).collect();
    assert_eq!(values, ["alpha", "gamma"]);
}

#[test]
fn delete_on_absent_id_leaves_list_unchanged() {
    let mut store = store_with(&["alpha"]);
    assert!(!store.delete("missing"));
    assert_eq!(store.len(), 1);
}

#[test]
fn delete_of_note_under_edit_clears_edit_state() {
    let mut store = store_with(&["alpha", "beta"]);
    store.begin_edit("1");
    assert!(store.delete("1"));
    assert_eq!(store.editing_id(), None);
    assert_eq!(store.edit_buffer(), "");
    assert_eq!(store.len(), 1);
}

#[test]
fn delete_of_other_note_keeps_edit_state() {
    let mut store = store_with(&["alpha", "beta"]);
    store.begin_edit("1");
    store.set_edit_buffer("alpha v2");
    assert!(store.delete("2"));
    assert_eq!(store.editing_id().map(String::as_str), Some("1"));
    assert_eq!(store.edit_buffer(), "alpha v2");
}
