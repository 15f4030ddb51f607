//! Expand one track into back-to-back copies.

use crate::data::Track;

/// Copies produced by [`repeat`] and the end of the whole sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Repeated {
    pub tracks: Vec<Track>,
    pub end_time: f64,
}

/// Produce `times` copies of `track`; copy `i` covers
/// `[start + duration * i, start + duration * (i + 1))`.
///
/// With `times == 0` there are no copies and `end_time` is the track start.
pub fn repeat(track: &Track, times: usize) -> Repeated {
    let start = track.start_time();
    let duration = track.duration();
    let tracks = (0..times)
        .map(|i| {
            let i = i as f64;
            track.with_range(start + duration * i, start + duration * (i + 1.0))
        })
        .collect();
    Repeated {
        tracks,
        end_time: start + duration * times as f64,
    }
}

/// [`repeat`], then hand the sequence end time to `on_complete` so the caller
/// can place whatever follows.
pub fn repeat_then(track: &Track, times: usize, on_complete: impl FnOnce(f64)) -> Vec<Track> {
    let Repeated { tracks, end_time } = repeat(track, times);
    on_complete(end_time);
    tracks
}
