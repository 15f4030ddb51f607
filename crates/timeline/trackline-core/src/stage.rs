//! Stage: drives track lifecycles against a renderer-provided surface.
//!
//! Per `render(time)`:
//! - tracks no longer containing `time` are detached
//! - newly active tracks are attached and initialized exactly once
//! - every active track is updated with `(elapsed, duration)` in layer order
//!
//! The surface decides what an element is and how it is composited.

use serde::{Deserialize, Serialize};

use crate::animatable::{Animatable, Element};
use crate::data::Track;
use crate::ids::{IdAllocator, LayerId, TrackId};
use crate::timeline::Timeline;

/// Renderer seam: creates and destroys the element backing a track.
pub trait Surface {
    type Element: Element;

    fn attach(&mut self, id: TrackId, track: &Track) -> Self::Element;
    fn detach(&mut self, id: TrackId, element: Self::Element);
}

/// Lifecycle transitions emitted by [`Stage::render`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StageEvent {
    Activated {
        track: TrackId,
        layer: LayerId,
        time: f64,
    },
    Deactivated {
        track: TrackId,
        time: f64,
    },
}

#[derive(Debug)]
struct Slot<E> {
    id: TrackId,
    index: usize,
    element: E,
}

pub struct Stage<S: Surface> {
    timeline: Timeline,
    ids: Vec<TrackId>,
    surface: S,
    /// Active tracks in compositing order.
    active: Vec<Slot<S::Element>>,
    events: Vec<StageEvent>,
    playhead: f64,
}

impl<S: Surface> Stage<S> {
    pub fn new(timeline: Timeline, surface: S) -> Self {
        let mut alloc = IdAllocator::new();
        let ids = timeline.tracks().iter().map(|_| alloc.alloc_track()).collect();
        Self {
            timeline,
            ids,
            surface,
            active: Vec::new(),
            events: Vec::new(),
            playhead: 0.0,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Id assigned to the track at `index` in the timeline.
    pub fn track_id(&self, index: usize) -> Option<TrackId> {
        self.ids.get(index).copied()
    }

    /// Currently active tracks in compositing order.
    pub fn active(&self) -> impl Iterator<Item = (TrackId, &Track)> + '_ {
        self.active
            .iter()
            .map(|slot| (slot.id, &self.timeline.tracks()[slot.index]))
    }

    /// Element backing an active track.
    pub fn element(&self, id: TrackId) -> Option<&S::Element> {
        self.active
            .iter()
            .find(|slot| slot.id == id)
            .map(|slot| &slot.element)
    }

    /// Bring the surface in line with the playhead at `time`.
    pub fn render(&mut self, time: f64) -> &[StageEvent] {
        self.events.clear();
        self.playhead = time;
        let wanted = self.timeline.active_indices(time);

        let mut kept = Vec::with_capacity(wanted.len());
        for slot in self.active.drain(..) {
            if wanted.contains(&slot.index) {
                kept.push(slot);
            } else {
                log::debug!("stage: deactivate {:?} at {time}", slot.id);
                self.surface.detach(slot.id, slot.element);
                self.events.push(StageEvent::Deactivated {
                    track: slot.id,
                    time,
                });
            }
        }

        let mut next = Vec::with_capacity(wanted.len());
        for index in wanted {
            let slot = match kept.iter().position(|s| s.index == index) {
                Some(pos) => kept.swap_remove(pos),
                None => {
                    let track = &self.timeline.tracks()[index];
                    let id = self.ids[index];
                    log::debug!(
                        "stage: activate {:?} ({} on layer {}) at {time}",
                        id,
                        track.media_type(),
                        track.layer_id().0
                    );
                    let mut element = self.surface.attach(id, track);
                    track.init(&mut element);
                    self.events.push(StageEvent::Activated {
                        track: id,
                        layer: track.layer_id(),
                        time,
                    });
                    Slot { id, index, element }
                }
            };
            next.push(slot);
        }

        for slot in &mut next {
            let track = &self.timeline.tracks()[slot.index];
            track.update(&mut slot.element, time - track.start_time(), track.duration());
        }
        self.active = next;
        &self.events
    }

    /// Time passed to the most recent `render`.
    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    /// Detach every active element; events carry the last rendered time.
    pub fn reset(&mut self) -> &[StageEvent] {
        self.events.clear();
        for slot in self.active.drain(..) {
            self.surface.detach(slot.id, slot.element);
            self.events.push(StageEvent::Deactivated {
                track: slot.id,
                time: self.playhead,
            });
        }
        &self.events
    }

    pub fn into_surface(mut self) -> S {
        self.reset();
        self.surface
    }
}
