use super::item::{validate_speed, Playable, PlayableHandle, PlaylistId};
use crate::error::{Error, Result};
use crate::playback::PlaybackSink;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of process-unique playlist identities
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// An ordered collection of playable items, itself playable
///
/// Items are appended in insertion order and duplicates are allowed. Each
/// item may be shared with other playlists; adding transfers no ownership.
#[derive(Debug)]
pub struct Playlist {
    /// Identity used to reject cyclic additions
    id: PlaylistId,

    /// Playlist name
    name: String,

    /// Playlist entries (ordered)
    items: Vec<PlayableHandle>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Self {
            id: PlaylistId(NEXT_ID.fetch_add(1, Ordering::Relaxed)),
            name,
            items: Vec::new(),
        })
    }

    /// Wrap this playlist in a shared handle so parents can reference it
    pub fn into_handle(self) -> PlayableHandle {
        Rc::new(RefCell::new(self))
    }

    /// Append an item to the end of the playlist.
    ///
    /// The same handle may be added more than once. Any addition that
    /// would make this playlist an ancestor of itself (adding it to its
    /// own subtree, or to itself directly) fails with
    /// [`Error::CycleDetected`] and leaves the sequence unchanged.
    pub fn add(&mut self, item: PlayableHandle) -> Result<()> {
        // An item cell that cannot be borrowed while we hold `&mut self`
        // can only be this playlist itself, reached through its own handle.
        match item.try_borrow() {
            Ok(guard) => {
                if guard.contains(self.id) {
                    return Err(Error::CycleDetected {
                        parent: self.name.clone(),
                        child: guard.name().to_string(),
                    });
                }
                log::debug!("playlist '{}': adding '{}'", self.name, guard.name());
            }
            Err(_) => {
                return Err(Error::CycleDetected {
                    parent: self.name.clone(),
                    child: self.name.clone(),
                });
            }
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove the first occurrence of `item`, matching by handle identity.
    ///
    /// An item that is not in the playlist is reported as
    /// [`Error::ItemNotFound`] rather than silently ignored.
    pub fn remove(&mut self, item: &PlayableHandle) -> Result<()> {
        match self.items.iter().position(|entry| Rc::ptr_eq(entry, item)) {
            Some(position) => {
                let removed = self.items.remove(position);
                if let Ok(guard) = removed.try_borrow() {
                    log::debug!("playlist '{}': removed '{}'", self.name, guard.name());
                }
                Ok(())
            }
            None => {
                let name = item
                    .try_borrow()
                    .map(|guard| guard.name().to_string())
                    .unwrap_or_else(|_| self.name.clone());
                Err(Error::ItemNotFound(name))
            }
        }
    }

    /// Number of items in this playlist (direct children only)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the playlist is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Direct children, in insertion order
    pub fn items(&self) -> &[PlayableHandle] {
        &self.items
    }
}

impl Playable for Playlist {
    /// Plays every item in insertion order, recursing into nested
    /// playlists. An empty playlist is a no-op.
    fn play(&self, sink: &mut dyn PlaybackSink) {
        for item in &self.items {
            item.borrow().play(sink);
        }
    }

    /// Applies `speed` to every item in insertion order, recursing into
    /// nested playlists. Validated once before any child is touched.
    fn set_playback_speed(&mut self, speed: f32) -> Result<()> {
        validate_speed(speed)?;
        for item in &self.items {
            item.borrow_mut().set_playback_speed(speed)?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn contains(&self, id: PlaylistId) -> bool {
        // A cell that cannot be borrowed during this walk is the playlist
        // currently receiving the `add`, so it counts as a hit.
        self.id == id
            || self.items.iter().any(|item| match item.try_borrow() {
                Ok(guard) => guard.contains(id),
                Err(_) => true,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Track;
    use crate::playback::MemorySink;

    fn track(name: &str) -> PlayableHandle {
        Track::new(name).unwrap().into_handle()
    }

    #[test]
    fn test_new_playlist_is_empty() {
        let playlist = Playlist::new("Rock").unwrap();
        assert_eq!(playlist.name(), "Rock");
        assert_eq!(playlist.len(), 0);
        assert!(playlist.is_empty());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(Playlist::new(""), Err(Error::EmptyName)));
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut playlist = Playlist::new("Rock").unwrap();
        playlist.add(track("Nothing else matters")).unwrap();
        playlist.add(track("Sultans of swing")).unwrap();

        let names: Vec<String> = playlist
            .items()
            .iter()
            .map(|item| item.borrow().name().to_string())
            .collect();
        assert_eq!(names, vec!["Nothing else matters", "Sultans of swing"]);
    }

    #[test]
    fn test_remove_drops_first_identity_match() {
        let a = track("a");
        let b = track("b");
        let mut playlist = Playlist::new("P").unwrap();
        playlist.add(a.clone()).unwrap();
        playlist.add(b.clone()).unwrap();

        playlist.remove(&a).unwrap();
        assert_eq!(playlist.len(), 1);
        assert_eq!(playlist.items()[0].borrow().name(), "b");
    }

    #[test]
    fn test_remove_absent_item_is_reported() {
        let a = track("a");
        let b = track("b");
        let mut playlist = Playlist::new("P").unwrap();
        playlist.add(a).unwrap();

        let result = playlist.remove(&b);
        assert!(matches!(result, Err(Error::ItemNotFound(name)) if name == "b"));
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn test_duplicate_entries_allowed() {
        let a = track("a");
        let mut playlist = Playlist::new("P").unwrap();
        playlist.add(a.clone()).unwrap();
        playlist.add(a.clone()).unwrap();
        assert_eq!(playlist.len(), 2);

        // Removing takes out one occurrence, not both
        playlist.remove(&a).unwrap();
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn test_empty_playlist_play_is_noop() {
        let playlist = Playlist::new("Empty").unwrap();
        let mut sink = MemorySink::new();
        playlist.play(&mut sink);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_add_playlist_to_itself_rejected() {
        let playlist = Rc::new(RefCell::new(Playlist::new("Loop").unwrap()));
        let result = playlist.borrow_mut().add(playlist.clone());
        assert!(matches!(result, Err(Error::CycleDetected { .. })));
        assert!(playlist.borrow().is_empty());
    }

    #[test]
    fn test_add_ancestor_to_descendant_rejected() {
        let parent = Rc::new(RefCell::new(Playlist::new("Parent").unwrap()));
        let child = Rc::new(RefCell::new(Playlist::new("Child").unwrap()));
        parent.borrow_mut().add(child.clone()).unwrap();

        let result = child.borrow_mut().add(parent.clone());
        assert!(matches!(result, Err(Error::CycleDetected { .. })));
        assert!(child.borrow().is_empty());
    }

    #[test]
    fn test_invalid_speed_rejected_before_children() {
        let mut playlist = Playlist::new("P").unwrap();
        playlist.add(track("a")).unwrap();

        let result = playlist.set_playback_speed(0.0);
        assert!(matches!(result, Err(Error::InvalidSpeed(_))));

        // Child speed untouched
        let mut sink = MemorySink::new();
        playlist.play(&mut sink);
        assert_eq!(sink.events()[0].speed, Track::DEFAULT_SPEED);
    }
}
