// Actor document validation.
//
// The structural check is key presence only — value types and semantic
// correctness are out of scope. A missing key is itself the finding.

use serde_json::Value;

/// Keys every interoperable actor document must carry, in report order.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "id",
    "type",
    "inbox",
    "outbox",
    "followers",
    "following",
    "publicKey",
];

/// Return the required keys the actor document is missing.
///
/// The result preserves [`REQUIRED_FIELDS`] order; empty means the actor
/// is structurally compliant. A non-mapping document is missing
/// everything.
pub fn missing_fields(actor: &Value) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|key| actor.get(key).is_none())
        .collect()
}

/// Derive the account's username from an actor URL.
///
/// Recognizes the two common path shapes, `/users/<name>` and
/// `/@<name>`. Returns `None` for anything else — the username is only
/// used for progress display, so unrecognized layouts are fine.
pub fn actor_username(actor_url: &str) -> Option<String> {
    let url = reqwest::Url::parse(actor_url).ok()?;
    let path = url.path().trim_matches('/');

    let name = if let Some(rest) = path.strip_prefix("users/") {
        rest.split('/').next().unwrap_or_default()
    } else if let Some(rest) = path.strip_prefix('@') {
        rest.split('/').next().unwrap_or_default()
    } else {
        return None;
    };

    (!name.is_empty()).then(|| name.to_string())
}
