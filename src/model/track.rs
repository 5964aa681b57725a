use super::item::{validate_speed, Playable, PlayableHandle};
use crate::error::{Error, Result};
use crate::playback::PlaybackSink;
use std::cell::RefCell;
use std::rc::Rc;

/// A terminal playable unit: a single named track with a speed multiplier
#[derive(Debug, Clone)]
pub struct Track {
    /// Display name, fixed at construction
    name: String,

    /// Playback speed multiplier (1.0 = normal)
    speed: f32,
}

impl Track {
    /// Speed of a freshly created track
    pub const DEFAULT_SPEED: f32 = 1.0;

    /// Create a track with the given name at normal speed
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Self {
            name,
            speed: Self::DEFAULT_SPEED,
        })
    }

    /// Wrap this track in a shared handle so playlists can reference it
    pub fn into_handle(self) -> PlayableHandle {
        Rc::new(RefCell::new(self))
    }

    /// Current playback speed multiplier
    pub fn speed(&self) -> f32 {
        self.speed
    }
}

impl Playable for Track {
    fn play(&self, sink: &mut dyn PlaybackSink) {
        sink.track_started(&self.name, self.speed);
    }

    fn set_playback_speed(&mut self, speed: f32) -> Result<()> {
        validate_speed(speed)?;
        self.speed = speed;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
