//! Mixtape - nested playlist trees
//!
//! Models a music collection as a composite tree: `Track` leaves and
//! `Playlist` containers share one playable capability, so a playlist can
//! nest other playlists (or individual tracks) and treat every entry
//! uniformly.

pub mod error;
pub mod model;
pub mod playback;

pub use error::{Error, Result};
pub use model::{Playable, PlayableHandle, Playlist, PlaylistId, Track};
pub use playback::{LogSink, MemorySink, PlaybackEvent, PlaybackSink};
