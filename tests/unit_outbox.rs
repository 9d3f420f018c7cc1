// Unit tests for outbox pagination resolution and the note locator.

use serde_json::json;

use fedicheck::ap::outbox::{find_note, first_page_url, ordered_items};

#[test]
fn inline_outbox_has_no_first_page() {
    let outbox = json!({"orderedItems": []});
    assert_eq!(first_page_url(&outbox), None);
}

#[test]
fn string_first_reference_is_the_page_url() {
    let outbox = json!({"first": "https://example.social/users/alice/outbox?page=true"});
    assert_eq!(
        first_page_url(&outbox),
        Some("https://example.social/users/alice/outbox?page=true")
    );
}

#[test]
fn mapping_first_reference_uses_id() {
    let outbox = json!({"first": {
        "id": "https://example.social/users/alice/outbox?page=1",
        "href": "https://example.social/ignored"
    }});
    assert_eq!(
        first_page_url(&outbox),
        Some("https://example.social/users/alice/outbox?page=1")
    );
}

#[test]
fn mapping_first_reference_falls_back_to_href() {
    let outbox = json!({"first": {"href": "https://example.social/users/alice/outbox?page=1"}});
    assert_eq!(
        first_page_url(&outbox),
        Some("https://example.social/users/alice/outbox?page=1")
    );

    // An empty id also defers to href.
    let outbox = json!({"first": {
        "id": "",
        "href": "https://example.social/users/alice/outbox?page=1"
    }});
    assert_eq!(
        first_page_url(&outbox),
        Some("https://example.social/users/alice/outbox?page=1")
    );
}

#[test]
fn unusable_first_reference_means_inline() {
    assert_eq!(first_page_url(&json!({"first": {}})), None);
    assert_eq!(first_page_url(&json!({"first": 7})), None);
    assert_eq!(first_page_url(&json!({"first": null})), None);
    assert_eq!(first_page_url(&json!({"first": {"id": 7}})), None);
}

#[test]
fn ordered_items_defaults_to_empty() {
    assert!(ordered_items(&json!({})).is_empty());
    assert!(ordered_items(&json!({"orderedItems": null})).is_empty());
    assert!(ordered_items(&json!({"orderedItems": "nope"})).is_empty());

    let page = json!({"orderedItems": [{"type": "Note"}]});
    assert_eq!(ordered_items(&page).len(), 1);
}

#[test]
fn locator_unwraps_create_envelope() {
    let page = json!({"orderedItems": [
        {"type": "Create", "object": {"type": "Note", "content": "first"}}
    ]});
    let note = find_note(ordered_items(&page), 20).unwrap();
    assert_eq!(note["content"], "first");
}

#[test]
fn locator_unwraps_update_envelope() {
    let page = json!({"orderedItems": [
        {"type": "Update", "object": {"type": "Note", "content": "edited"}}
    ]});
    let note = find_note(ordered_items(&page), 20).unwrap();
    assert_eq!(note["content"], "edited");
}

#[test]
fn locator_accepts_bare_note() {
    let page = json!({"orderedItems": [{"type": "Note", "content": "bare"}]});
    let note = find_note(ordered_items(&page), 20).unwrap();
    assert_eq!(note["content"], "bare");
}

#[test]
fn first_match_wins() {
    let page = json!({"orderedItems": [
        {"type": "Announce", "object": "https://elsewhere.example/notes/1"},
        {"type": "Create", "object": {"type": "Note", "content": "first"}},
        {"type": "Note", "content": "second"}
    ]});
    let note = find_note(ordered_items(&page), 20).unwrap();
    assert_eq!(note["content"], "first");
}

#[test]
fn create_with_non_note_object_is_skipped() {
    let page = json!({"orderedItems": [
        {"type": "Create", "object": {"type": "Question", "content": "poll"}},
        {"type": "Note", "content": "fallback"}
    ]});
    let note = find_note(ordered_items(&page), 20).unwrap();
    assert_eq!(note["content"], "fallback");
}

#[test]
fn create_with_string_object_is_skipped() {
    let page = json!({"orderedItems": [
        {"type": "Create", "object": "https://example.social/notes/1"},
        {"type": "Note", "content": "fallback"}
    ]});
    let note = find_note(ordered_items(&page), 20).unwrap();
    assert_eq!(note["content"], "fallback");
}

#[test]
fn non_mapping_items_are_skipped() {
    let page = json!({"orderedItems": [
        "https://example.social/activities/1",
        42,
        {"type": "Note", "content": "found"}
    ]});
    let note = find_note(ordered_items(&page), 20).unwrap();
    assert_eq!(note["content"], "found");
}

#[test]
fn scan_stops_at_the_limit() {
    let page = json!({"orderedItems": [
        {"type": "Announce"},
        {"type": "Announce"},
        {"type": "Note", "content": "third"}
    ]});
    let items = ordered_items(&page);
    assert!(find_note(items, 2).is_none());
    assert!(find_note(items, 3).is_some());
}

#[test]
fn empty_items_yield_no_note() {
    assert!(find_note(&[], 20).is_none());
}
