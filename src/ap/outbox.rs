// Outbox pagination and note location.
//
// An outbox is either a page itself (inline `orderedItems`) or a
// collection summary pointing at a `first` page. Both shapes appear in
// the wild; the distinction here is best-effort structural, not a formal
// type check.

use serde_json::Value;

use super::value::{str_field, truthy};

/// Resolve the outbox's `first` reference to a page URL, if any.
///
/// A string reference is returned as-is; a mapping yields its `id` (or
/// `href` when `id` is absent or empty). `None` means the outbox itself
/// should be scanned as an inline page.
pub fn first_page_url(outbox: &Value) -> Option<&str> {
    match outbox.get("first") {
        Some(Value::String(url)) => Some(url.as_str()),
        Some(Value::Object(first)) => first
            .get("id")
            .filter(|id| truthy(id))
            .or_else(|| first.get("href"))
            .and_then(Value::as_str),
        _ => None,
    }
}

/// The page's ordered item sequence, defaulting to empty when absent.
pub fn ordered_items(page: &Value) -> &[Value] {
    page.get("orderedItems")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Scan up to `limit` items for the first note-like object.
///
/// A Create or Update envelope's embedded Note is checked before the
/// item's own type, per item, in sequence order. First match wins.
pub fn find_note(items: &[Value], limit: usize) -> Option<&Value> {
    for item in items.iter().take(limit) {
        if !item.is_object() {
            continue;
        }
        let item_type = str_field(item, "type");
        if item_type == "Create" || item_type == "Update" {
            if let Some(object) = item.get("object") {
                if object.is_object() && str_field(object, "type") == "Note" {
                    return Some(object);
                }
            }
        }
        if item_type == "Note" {
            return Some(item);
        }
    }
    None
}
