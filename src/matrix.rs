// The compatibility matrix — per-server, per-check boolean report.
//
// The server set and check names are fixed; serde field order is the
// declared output order for both JSON and CSV. Note-dependent checks
// stay false when no representative note was found. The two featured
// checks come from actor-level collections and are filled either way.

use serde::Serialize;
use serde_json::Value;

use crate::ap::note;
use crate::ap::value::truthy;

/// Checks Mastodon cares about when rendering a remote post.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MastodonChecks {
    pub content_html: bool,
    pub hashtags: bool,
    pub mentions: bool,
    pub attachments: bool,
}

/// Checks for Misskey and its Sharkey fork, including the pinned-post
/// collections both expose on the actor.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MisskeyChecks {
    pub featured: bool,
    #[serde(rename = "featuredTags")]
    pub featured_tags: bool,
    pub content_html: bool,
    pub hashtags: bool,
}

/// Checks for Pleroma and Akkoma, which also surface the plain-text
/// source of a post.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PleromaChecks {
    pub content_html: bool,
    pub source_plain: bool,
    pub hashtags: bool,
}

/// Checks Pixelfed cares about — it is media-first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PixelfedChecks {
    pub content_html: bool,
    pub attachments: bool,
}

/// The full per-server compatibility report.
#[derive(Debug, Clone, Serialize)]
pub struct CompatMatrix {
    pub mastodon: MastodonChecks,
    pub misskey_sharkey: MisskeyChecks,
    pub pleroma_akkoma: PleromaChecks,
    pub pixelfed: PixelfedChecks,
}

impl CompatMatrix {
    /// Evaluate all checks against the actor and an optional note.
    pub fn evaluate(actor: &Value, note: Option<&Value>) -> Self {
        let mut matrix = Self {
            mastodon: MastodonChecks::default(),
            misskey_sharkey: MisskeyChecks {
                featured: actor.get("featured").is_some_and(truthy),
                featured_tags: actor.get("featuredTags").is_some_and(truthy),
                ..MisskeyChecks::default()
            },
            pleroma_akkoma: PleromaChecks::default(),
            pixelfed: PixelfedChecks::default(),
        };

        if let Some(note) = note {
            let content_html = note::has_html_content(note);
            let hashtags = note::has_hashtag_tags(note);
            let mentions = note::has_mention_tags(note);
            let attachments = note::has_attachments(note);
            let source_plain = note::has_source_plain(note);

            matrix.mastodon = MastodonChecks {
                content_html,
                hashtags,
                mentions,
                attachments,
            };
            matrix.misskey_sharkey.content_html = content_html;
            matrix.misskey_sharkey.hashtags = hashtags;
            matrix.pleroma_akkoma = PleromaChecks {
                content_html,
                source_plain,
                hashtags,
            };
            matrix.pixelfed = PixelfedChecks {
                content_html,
                attachments,
            };
        }

        matrix
    }

    /// Flatten into `(server, check, ok)` rows in declaration order.
    pub fn rows(&self) -> Vec<(&'static str, &'static str, bool)> {
        vec![
            ("mastodon", "content_html", self.mastodon.content_html),
            ("mastodon", "hashtags", self.mastodon.hashtags),
            ("mastodon", "mentions", self.mastodon.mentions),
            ("mastodon", "attachments", self.mastodon.attachments),
            ("misskey_sharkey", "featured", self.misskey_sharkey.featured),
            (
                "misskey_sharkey",
                "featuredTags",
                self.misskey_sharkey.featured_tags,
            ),
            (
                "misskey_sharkey",
                "content_html",
                self.misskey_sharkey.content_html,
            ),
            ("misskey_sharkey", "hashtags", self.misskey_sharkey.hashtags),
            (
                "pleroma_akkoma",
                "content_html",
                self.pleroma_akkoma.content_html,
            ),
            (
                "pleroma_akkoma",
                "source_plain",
                self.pleroma_akkoma.source_plain,
            ),
            ("pleroma_akkoma", "hashtags", self.pleroma_akkoma.hashtags),
            ("pixelfed", "content_html", self.pixelfed.content_html),
            ("pixelfed", "attachments", self.pixelfed.attachments),
        ]
    }

    /// Whether any server has a failing check.
    pub fn has_failures(&self) -> bool {
        self.rows().iter().any(|(_, _, ok)| !ok)
    }
}
