//! Error types for playlist tree operations

use thiserror::Error;

/// Result type for playlist tree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by playlist and track operations
#[derive(Error, Debug)]
pub enum Error {
    /// Track and playlist names must be non-empty
    #[error("name must not be empty")]
    EmptyName,

    /// Playback speed multipliers must be positive and finite
    #[error("invalid playback speed: {0}")]
    InvalidSpeed(f32),

    /// Adding the item would make the playlist an ancestor of itself
    #[error("adding '{child}' to '{parent}' would create a cycle")]
    CycleDetected {
        /// Playlist the item was being added to
        parent: String,
        /// Item whose subtree already reaches the parent
        child: String,
    },

    /// The item is not present in the playlist
    #[error("item '{0}' not found in playlist")]
    ItemNotFound(String),
}
