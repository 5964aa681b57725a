//! Playback event sinks
//!
//! There is no audio backend; playing a tree reports each leaf track it
//! reaches to a [`PlaybackSink`]. [`LogSink`] is the production sink,
//! [`MemorySink`] records events for tests and dry runs.

/// Receiver for playback events produced by [`crate::Playable::play`]
pub trait PlaybackSink {
    /// Called once for every leaf track played, in playback order
    fn track_started(&mut self, name: &str, speed: f32);
}

/// Sink that emits one log line per played track
#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl PlaybackSink for LogSink {
    fn track_started(&mut self, name: &str, speed: f32) {
        log::info!("Playing '{}' at {:.2}x", name, speed);
    }
}

/// A single recorded playback event
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackEvent {
    /// Track name as reported by the leaf
    pub name: String,

    /// Speed multiplier at play time
    pub speed: f32,
}

/// Sink that records events in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Vec<PlaybackEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, in playback order
    pub fn events(&self) -> &[PlaybackEvent] {
        &self.events
    }

    /// Names of the recorded events, in playback order
    pub fn names(&self) -> Vec<&str> {
        self.events.iter().map(|event| event.name.as_str()).collect()
    }
}

impl PlaybackSink for MemorySink {
    fn track_started(&mut self, name: &str, speed: f32) {
        self.events.push(PlaybackEvent {
            name: name.to_string(),
            speed,
        });
    }
}
