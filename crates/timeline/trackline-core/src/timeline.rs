//! Ordered collection of tracks on one master timeline.

use serde::Serialize;

use crate::data::Track;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Timeline {
    tracks: Vec<Track>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Indices of tracks active at `time`, in compositing order (ascending
    /// layer; equal layers keep authoring order).
    pub fn active_indices(&self, time: f64) -> Vec<usize> {
        let mut active: Vec<usize> = self
            .tracks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.contains(time))
            .map(|(i, _)| i)
            .collect();
        // sort_by_key is stable
        active.sort_by_key(|&i| self.tracks[i].layer_id());
        active
    }

    /// Tracks active at `time`, in compositing order.
    pub fn active_at(&self, time: f64) -> Vec<&Track> {
        self.active_indices(time)
            .into_iter()
            .map(|i| &self.tracks[i])
            .collect()
    }

    /// Latest end time across all tracks; 0 when empty.
    pub fn end_time(&self) -> f64 {
        self.tracks
            .iter()
            .map(Track::end_time)
            .fold(0.0, f64::max)
    }
}

impl Extend<Track> for Timeline {
    fn extend<I: IntoIterator<Item = Track>>(&mut self, iter: I) {
        self.tracks.extend(iter);
    }
}

impl FromIterator<Track> for Timeline {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        Self {
            tracks: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Timeline {
    type Item = Track;
    type IntoIter = std::vec::IntoIter<Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.into_iter()
    }
}
