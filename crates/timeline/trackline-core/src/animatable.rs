//! Element handle and per-media lifecycle behavior.
//!
//! The renderer owns the visual element; the core only writes properties to
//! it through [`Element`]. Each media variant implements [`Animatable`], and a
//! [`Track`] layers its own property writes on top of its media's behavior.

use crate::data::{BlockMedia, ImageMedia, Media, Track, VideoMedia};
use crate::value::Value;

/// Opaque visual element managed by the renderer.
pub trait Element {
    fn set_property(&mut self, name: &str, value: Value);
}

/// Lifecycle hooks invoked by a renderer while a track is active.
pub trait Animatable {
    /// Called once when the track becomes active.
    fn init(&self, _element: &mut dyn Element) {}

    /// Called every frame while active; `elapsed` is measured from the
    /// track's start and `duration` is its full length.
    fn update(&self, _element: &mut dyn Element, _elapsed: f64, _duration: f64) {}
}

impl Animatable for VideoMedia {
    fn init(&self, element: &mut dyn Element) {
        element.set_property("src", Value::Text(self.source.clone()));
        element.set_property("currentTime", Value::Float(self.trim_start.unwrap_or(0.0)));
    }

    fn update(&self, element: &mut dyn Element, elapsed: f64, _duration: f64) {
        element.set_property(
            "currentTime",
            Value::Float(self.trim_start.unwrap_or(0.0) + elapsed),
        );
    }
}

impl Animatable for ImageMedia {
    fn init(&self, element: &mut dyn Element) {
        element.set_property("src", Value::Text(self.source.clone()));
    }
}

impl Animatable for BlockMedia {}

impl Animatable for Media {
    fn init(&self, element: &mut dyn Element) {
        match self {
            Media::Video(m) => m.init(element),
            Media::Image(m) => m.init(element),
            Media::Block(m) => m.init(element),
        }
    }

    fn update(&self, element: &mut dyn Element, elapsed: f64, duration: f64) {
        match self {
            Media::Video(m) => m.update(element, elapsed, duration),
            Media::Image(m) => m.update(element, elapsed, duration),
            Media::Block(m) => m.update(element, elapsed, duration),
        }
    }
}

impl Animatable for Track {
    fn init(&self, element: &mut dyn Element) {
        self.media().init(element);
        for set in self.init_properties() {
            element.set_property(&set.property, set.value.clone());
        }
    }

    fn update(&self, element: &mut dyn Element, elapsed: f64, duration: f64) {
        self.media().update(element, elapsed, duration);
        for anim in self.animations() {
            element.set_property(&anim.property, anim.value(elapsed, duration));
        }
    }
}
