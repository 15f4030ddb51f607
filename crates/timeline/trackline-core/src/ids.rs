//! Identifiers for layers and staged tracks.

use serde::{Deserialize, Serialize};

/// Compositing slot: higher layers draw over lower ones. Not unique.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LayerId(pub i32);

/// Identity of a track once it is handed to a [`crate::Stage`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TrackId(pub u32);

/// Monotonic allocator for TrackId.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_track: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_track(&mut self) -> TrackId {
        let id = TrackId(self.next_track);
        self.next_track = self.next_track.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_track(), TrackId(0));
        assert_eq!(alloc.alloc_track(), TrackId(1));
        alloc.reset();
        assert_eq!(alloc.alloc_track(), TrackId(0));
    }

    #[test]
    fn layers_order_by_value() {
        assert!(LayerId(1) < LayerId(4));
        assert_eq!(serde_json::to_string(&LayerId(3)).unwrap(), "3");
    }
}
