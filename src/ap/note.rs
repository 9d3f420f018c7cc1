// Note predicates — per-post field probes.
//
// Each predicate answers one question about a note-like object and is
// total: a missing, null, or mistyped field is a plain `false`. Markup
// detection is a crude angle-bracket heuristic, not an HTML parse — the
// question is whether the server put markup there at all.

use serde_json::Value;

use super::value::{as_list, str_field, truthy};

/// Whether the note carries rich (marked-up) content.
pub fn has_html_content(note: &Value) -> bool {
    let content = str_field(note, "content").trim();
    content.contains('<') && content.contains('>')
}

/// Whether the note declares a plain-text source alongside its content.
///
/// Pleroma and Akkoma expose the pre-rendering text in a `source` block
/// with a `text/plain` media type.
pub fn has_source_plain(note: &Value) -> bool {
    let Some(source) = note.get("source").filter(|s| s.is_object()) else {
        return false;
    };
    let media = str_field(source, "mediaType").to_lowercase();
    media.contains("text/plain") && !str_field(source, "content").trim().is_empty()
}

/// Whether at least one tag entry is a Hashtag with a `#`-prefixed name.
pub fn has_hashtag_tags(note: &Value) -> bool {
    as_list(note.get("tag")).into_iter().any(|tag| {
        tag.is_object()
            && str_field(tag, "type") == "Hashtag"
            && str_field(tag, "name").starts_with('#')
    })
}

/// Whether at least one tag entry is a Mention with an http(s) href.
pub fn has_mention_tags(note: &Value) -> bool {
    as_list(note.get("tag")).into_iter().any(|tag| {
        tag.is_object()
            && str_field(tag, "type") == "Mention"
            && str_field(tag, "href").starts_with("http")
    })
}

/// Whether at least one attachment carries both a URL and a media type.
pub fn has_attachments(note: &Value) -> bool {
    as_list(note.get("attachment")).into_iter().any(|att| {
        att.is_object()
            && att.get("url").is_some_and(truthy)
            && att.get("mediaType").is_some_and(truthy)
    })
}
