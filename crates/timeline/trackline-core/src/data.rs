//! Track data model.
//!
//! A [`Track`] places one visual element on the master timeline for
//! `[start_time, end_time)`. Its behavior is data: media-specific setup (see
//! [`crate::animatable`]), initial property writes, and per-frame property
//! animations driven by tweens.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, TimelineError};
use crate::ids::LayerId;
use crate::tween::{Fade, Tween};
use crate::value::Value;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Video,
    Image,
    Block,
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MediaType::Video => "video",
            MediaType::Image => "image",
            MediaType::Block => "block",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMedia {
    pub source: String,
    /// Offset into the media at which playback starts, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim_start: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageMedia {
    pub source: String,
}

/// Plain container element (text, color fills).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockMedia;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mediaType", rename_all = "lowercase")]
pub enum Media {
    Video(VideoMedia),
    Image(ImageMedia),
    Block(BlockMedia),
}

impl Media {
    pub fn video(source: impl Into<String>, trim_start: Option<f64>) -> Self {
        Media::Video(VideoMedia {
            source: source.into(),
            trim_start,
        })
    }

    pub fn image(source: impl Into<String>) -> Self {
        Media::Image(ImageMedia {
            source: source.into(),
        })
    }

    pub fn block() -> Self {
        Media::Block(BlockMedia)
    }

    #[inline]
    pub fn media_type(&self) -> MediaType {
        match self {
            Media::Video(_) => MediaType::Video,
            Media::Image(_) => MediaType::Image,
            Media::Block(_) => MediaType::Block,
        }
    }

    /// Media locator; blocks have none.
    pub fn source(&self) -> Option<&str> {
        match self {
            Media::Video(v) => Some(&v.source),
            Media::Image(i) => Some(&i.source),
            Media::Block(_) => None,
        }
    }
}

/// Property written once when the track becomes active.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertySet {
    pub property: String,
    pub value: Value,
}

/// Numeric source for a per-frame property animation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Driver {
    /// Tween phase measured in seconds since the track started.
    Tween(Tween),
    /// Fade over the whole track duration.
    Fade(Fade),
    /// Whole seconds left until the track ends.
    Remaining,
}

impl Driver {
    pub fn evaluate(&self, elapsed: f64, duration: f64) -> f64 {
        match self {
            Driver::Tween(tween) => tween.sample(elapsed),
            Driver::Fade(fade) => fade.sample(elapsed, duration),
            Driver::Remaining => (duration - elapsed).ceil(),
        }
    }
}

/// Property rewritten on every frame while the track is active.
///
/// With a `template`, each `{}` is replaced by the driven number and the
/// element receives text; without one it receives the number itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyAnimation {
    pub property: String,
    pub driver: Driver,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl PropertyAnimation {
    pub fn new(property: impl Into<String>, driver: Driver) -> Self {
        Self {
            property: property.into(),
            driver,
            template: None,
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn value(&self, elapsed: f64, duration: f64) -> Value {
        let v = self.driver.evaluate(elapsed, duration);
        match &self.template {
            Some(template) => Value::Text(template.replace("{}", &v.to_string())),
            None => Value::Float(v),
        }
    }
}

/// One timed visual element. Immutable once built; `end_time > start_time`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    layer_id: LayerId,
    #[serde(flatten)]
    media: Media,
    start_time: f64,
    end_time: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    init: Vec<PropertySet>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    update: Vec<PropertyAnimation>,
}

impl Track {
    /// Validate and build a track spanning `[start_time, end_time)`.
    pub fn new(layer_id: LayerId, media: Media, start_time: f64, end_time: f64) -> Result<Self> {
        // Written so NaN bounds fail too.
        if !(end_time > start_time) {
            log::warn!(
                "track on layer {}: rejecting range {start_time}..{end_time}",
                layer_id.0
            );
            return Err(TimelineError::InvalidRange {
                start: start_time,
                end: end_time,
            });
        }
        if media.source().is_some_and(str::is_empty) {
            return Err(TimelineError::MissingSource {
                media: media.media_type(),
            });
        }
        Ok(Self {
            layer_id,
            media,
            start_time,
            end_time,
            init: Vec::new(),
            update: Vec::new(),
        })
    }

    pub fn with_init(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.init.push(PropertySet {
            property: property.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_update(mut self, animation: PropertyAnimation) -> Self {
        self.update.push(animation);
        self
    }

    /// Copy with the same duration starting at `start_time`.
    pub fn shifted(&self, start_time: f64) -> Self {
        self.with_range(start_time, start_time + self.duration())
    }

    /// Range is trusted: callers derive it from an already valid track.
    pub(crate) fn with_range(&self, start_time: f64, end_time: f64) -> Self {
        Self {
            start_time,
            end_time,
            ..self.clone()
        }
    }

    #[inline]
    pub fn layer_id(&self) -> LayerId {
        self.layer_id
    }

    #[inline]
    pub fn media(&self) -> &Media {
        &self.media
    }

    #[inline]
    pub fn media_type(&self) -> MediaType {
        self.media.media_type()
    }

    #[inline]
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    #[inline]
    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    #[inline]
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Whether the playhead `time` lies in `[start_time, end_time)`.
    #[inline]
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time < self.end_time
    }

    pub fn init_properties(&self) -> &[PropertySet] {
        &self.init
    }

    pub fn animations(&self) -> &[PropertyAnimation] {
        &self.update
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_inverted_ranges() {
        assert!(Track::new(LayerId(1), Media::block(), 5.0, 5.0).is_err());
        assert!(Track::new(LayerId(1), Media::block(), 5.0, 4.0).is_err());
        assert!(Track::new(LayerId(1), Media::block(), f64::NAN, 4.0).is_err());
        assert!(Track::new(LayerId(1), Media::block(), 5.0, 8.0).is_ok());
    }

    #[test]
    fn requires_source_for_media() {
        let err = Track::new(LayerId(2), Media::image(""), 0.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            TimelineError::MissingSource {
                media: MediaType::Image
            }
        );
    }

    #[test]
    fn serializes_flat_camel_case() {
        let track = Track::new(LayerId(1), Media::video("bun.mp4", Some(10.0)), 0.0, 10.0)
            .unwrap()
            .with_init("opacity", 0.0);
        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["layerId"], 1);
        assert_eq!(json["mediaType"], "video");
        assert_eq!(json["trimStart"], 10.0);
        assert_eq!(json["endTime"], 10.0);
        assert_eq!(json["init"][0]["property"], "opacity");
        assert!(json.get("update").is_none());
    }

    #[test]
    fn template_renders_text() {
        let anim = PropertyAnimation::new("innerHTML", Driver::Remaining)
            .with_template("Count Down: {}");
        assert_eq!(anim.value(0.2, 3.0), Value::Text("Count Down: 3".into()));
        assert_eq!(anim.value(2.5, 3.0), Value::Text("Count Down: 1".into()));
    }
}
