// Fedicheck: ActivityPub compatibility checker for fediverse actors.
//
// This is the library root. The `ap` module handles everything remote
// (fetching and inspecting ActivityPub documents); `matrix` holds the
// per-server compatibility report and `output` renders it.

pub mod ap;
pub mod matrix;
pub mod output;
