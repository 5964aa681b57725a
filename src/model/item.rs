//! Shared playable capability and tree handles

use crate::error::{Error, Result};
use crate::playback::PlaybackSink;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to any node of a playlist tree.
///
/// Handles are reference counted so a track (or a whole sub-playlist) can
/// appear in several parent playlists without cloning; the node is dropped
/// when the last playlist referencing it is gone.
pub type PlayableHandle = Rc<RefCell<dyn Playable>>;

/// Process-unique identity of a playlist, used to reject cyclic additions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaylistId(pub(crate) u64);

/// Capability shared by every node of a playlist tree
pub trait Playable: fmt::Debug {
    /// Play this node, reporting one event per leaf track to `sink`
    fn play(&self, sink: &mut dyn PlaybackSink);

    /// Propagate a speed multiplier through this subtree
    fn set_playback_speed(&mut self, speed: f32) -> Result<()>;

    /// Display name. Pure accessor.
    fn name(&self) -> &str;

    /// Whether the playlist with identity `id` appears anywhere in this
    /// subtree. Leaves have no subtree and report false.
    fn contains(&self, _id: PlaylistId) -> bool {
        false
    }
}

/// Speed multipliers must be positive and finite
pub(crate) fn validate_speed(speed: f32) -> Result<()> {
    if !speed.is_finite() || speed <= 0.0 {
        return Err(Error::InvalidSpeed(speed));
    }
    Ok(())
}
