//! Error taxonomy for the snap engine.
//!
//! Only two things can go wrong in a way the caller must see: asking for the
//! nearest candidate in an empty key array, and handing the engine a bad
//! configuration. Everything that happens during a drag degrades to
//! "no snap" instead of surfacing here.

#[derive(Debug, thiserror::Error)]
pub enum SnapError {
    #[error("no candidate lines to search")]
    EmptyCandidates,
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
