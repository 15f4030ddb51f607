use serde::Deserialize;

use crate::data::{Driver, Media, MediaType, PropertyAnimation, Track};
use crate::error::{Result, TimelineError};
use crate::ids::LayerId;
use crate::repeat::{repeat, Repeated};
use crate::timecode::{TimeCursor, TimeInput};
use crate::timeline::Timeline;
use crate::value::Value;

/// Public API: parse a JSON timeline document into a [`Timeline`].
///
/// Notes:
/// - `startTime`/`endTime` accept seconds or time expressions; they are
///   resolved in document order through a single cursor (start before end),
///   so `"+5s"` is relative to the previous resolved time.
/// - `repeat: n` expands the track into `n` back-to-back copies and moves the
///   cursor to the end of the sequence.
/// - Property values are plain JSON scalars (`0.7`, `"green"`, `true`) or the
///   canonical `{ "type": ..., "data": ... }` form that [`Value`] serializes to.
/// - Every track is validated (`endTime > startTime`, source for video/image,
///   `trimStart` only on video, no `source` on blocks).
pub fn parse_timeline_json(s: &str) -> Result<Timeline> {
    let doc: StoredTimeline = serde_json::from_str(s)?;

    let mut cursor = TimeCursor::new();
    let mut timeline = Timeline::new();
    for (index, st) in doc.tracks.into_iter().enumerate() {
        let (track, times, next) = to_core_track(st, cursor).map_err(|e| {
            log::warn!("timeline track #{index}: {e}");
            e
        })?;
        cursor = next;
        match times {
            Some(times) => {
                let Repeated { tracks, end_time } = repeat(&track, times);
                timeline.extend(tracks);
                cursor = TimeCursor::at(end_time);
            }
            None => timeline.push(track),
        }
    }
    Ok(timeline)
}

fn to_core_track(
    st: StoredTrack,
    cursor: TimeCursor,
) -> Result<(Track, Option<usize>, TimeCursor)> {
    let start = cursor.resolve(st.start_time)?;
    let end = start.resolve(st.end_time)?;

    let media = match st.media_type {
        MediaType::Video => {
            Media::video(require_source(st.source, MediaType::Video)?, st.trim_start)
        }
        MediaType::Image => {
            reject_field(st.trim_start.is_some(), MediaType::Image, "trimStart")?;
            Media::image(require_source(st.source, MediaType::Image)?)
        }
        MediaType::Block => {
            reject_field(st.trim_start.is_some(), MediaType::Block, "trimStart")?;
            reject_field(st.source.is_some(), MediaType::Block, "source")?;
            Media::block()
        }
    };

    let mut track = Track::new(st.layer_id, media, start.seconds(), end.seconds())?;
    for p in st.init {
        track = track.with_init(p.property, to_core_value(p.value));
    }
    for a in st.update {
        let anim = PropertyAnimation {
            property: a.property,
            driver: a.driver,
            template: a.template,
        };
        track = track.with_update(anim);
    }
    Ok((track, st.repeat, end))
}

fn require_source(source: Option<String>, media: MediaType) -> Result<String> {
    source
        .filter(|s| !s.is_empty())
        .ok_or(TimelineError::MissingSource { media })
}

fn reject_field(present: bool, media: MediaType, field: &'static str) -> Result<()> {
    if present {
        return Err(TimelineError::UnexpectedField { media, field });
    }
    Ok(())
}

fn to_core_value(v: RawValue) -> Value {
    match v {
        RawValue::Boolean(b) => Value::Bool(b),
        RawValue::Number(n) => Value::Float(n),
        RawValue::String(s) => Value::Text(s),
        RawValue::Tagged(v) => v,
    }
}

// ---------- Raw serde model for the JSON document ----------

#[derive(Debug, Deserialize)]
struct StoredTimeline {
    tracks: Vec<StoredTrack>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTrack {
    layer_id: LayerId,
    media_type: MediaType,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    trim_start: Option<f64>,
    start_time: TimeInput,
    end_time: TimeInput,
    #[serde(default)]
    init: Vec<StoredProperty>,
    #[serde(default)]
    update: Vec<StoredAnimation>,
    #[serde(default)]
    repeat: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct StoredProperty {
    property: String,
    value: RawValue,
}

#[derive(Debug, Deserialize)]
struct StoredAnimation {
    property: String,
    driver: Driver,
    #[serde(default)]
    template: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Boolean(bool),
    Number(f64),
    String(String),
    Tagged(Value),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chains_relative_times_in_order() {
        let json = r#"{ "tracks": [
            { "layerId": 1, "mediaType": "block", "startTime": "1:30", "endTime": "+30s" },
            { "layerId": 1, "mediaType": "block", "startTime": "+5s", "endTime": "+10s" }
        ] }"#;
        let tl = parse_timeline_json(json).unwrap();
        let ranges: Vec<(f64, f64)> = tl
            .tracks()
            .iter()
            .map(|t| (t.start_time(), t.end_time()))
            .collect();
        assert_eq!(ranges, vec![(90.0, 120.0), (125.0, 135.0)]);
    }

    #[test]
    fn scalar_shorthand_values() {
        let json = r#"{ "tracks": [
            { "layerId": 3, "mediaType": "block", "startTime": 5, "endTime": 8,
              "init": [ { "property": "opacity", "value": 0.7 },
                        { "property": "backgroundColor", "value": "green" } ] }
        ] }"#;
        let tl = parse_timeline_json(json).unwrap();
        let init = tl.tracks()[0].init_properties();
        assert_eq!(init[0].value, Value::Float(0.7));
        assert_eq!(init[1].value, Value::Text("green".into()));
    }

    #[test]
    fn media_specific_fields_are_checked() {
        let image_trim = r#"{ "tracks": [
            { "layerId": 1, "mediaType": "image", "source": "a.png", "trimStart": 2,
              "startTime": 0, "endTime": 1 }
        ] }"#;
        assert_eq!(
            parse_timeline_json(image_trim).unwrap_err(),
            TimelineError::UnexpectedField {
                media: MediaType::Image,
                field: "trimStart"
            }
        );

        let block_source = r#"{ "tracks": [
            { "layerId": 1, "mediaType": "block", "source": "x", "startTime": 0, "endTime": 1 }
        ] }"#;
        let err = parse_timeline_json(block_source).unwrap_err();
        assert_eq!(
            err,
            TimelineError::UnexpectedField {
                media: MediaType::Block,
                field: "source"
            }
        );
        assert_eq!(err.category(), "validation");
    }
}
