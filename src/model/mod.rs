//! Playlist tree data model
//!
//! Defines the playable capability shared by all tree nodes, the `Track`
//! leaf and the `Playlist` composite. The model is independent of any
//! playback backend; see [`crate::playback`] for event sinks.

mod item;
mod playlist;
mod track;

pub use item::{Playable, PlayableHandle, PlaylistId};
pub use playlist::Playlist;
pub use track::Track;
