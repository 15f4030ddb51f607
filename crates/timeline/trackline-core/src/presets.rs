//! Ready-made track shapes used by slideshow-style timelines.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::data::{Driver, Media, PropertyAnimation, Track};
use crate::error::Result;
use crate::ids::LayerId;
use crate::tween::Fade;

/// Where an image sits relative to the canvas center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePlacement {
    pub source: String,
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
    #[serde(default = "unit_scale")]
    pub scale: f64,
}

fn unit_scale() -> f64 {
    1.0
}

impl ImagePlacement {
    pub fn centered(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            offset_x: 0.0,
            offset_y: 0.0,
            scale: 1.0,
        }
    }
}

/// Centering transform for an element anchored at the canvas origin.
pub fn center_transform(config: &Config, placement: &ImagePlacement) -> String {
    format!(
        "translate(calc(-50% + {}px / 2 + {}px), calc(-50% + {}px / 2 + {}px)) scale({})",
        config.canvas.width,
        placement.offset_x,
        config.canvas.height,
        placement.offset_y,
        placement.scale
    )
}

/// Standard image track: centered on the canvas, bounded to the configured
/// extents, fading its opacity in and out over `config.image.ramp`.
///
/// `duration` defaults to `config.image.duration`.
pub fn image_track(
    config: &Config,
    layer: LayerId,
    placement: &ImagePlacement,
    start_time: f64,
    duration: Option<f64>,
) -> Result<Track> {
    let duration = duration.unwrap_or(config.image.duration);
    let track = Track::new(
        layer,
        Media::image(placement.source.clone()),
        start_time,
        start_time + duration,
    )?;
    Ok(track
        .with_init("transform", center_transform(config, placement))
        .with_init("maxWidth", format!("{}px", config.image.max_width))
        .with_init("maxHeight", format!("{}px", config.image.max_height))
        .with_init("opacity", 0.0)
        .with_update(PropertyAnimation::new(
            "opacity",
            Driver::Fade(Fade::new(config.image.ramp, config.image.peak_opacity)),
        )))
}

/// Block showing `prefix` followed by the whole seconds left on the track.
pub fn countdown_block(
    layer: LayerId,
    start_time: f64,
    end_time: f64,
    prefix: &str,
) -> Result<Track> {
    let track = Track::new(layer, Media::block(), start_time, end_time)?;
    let text = PropertyAnimation::new("innerHTML", Driver::Remaining)
        .with_template(format!("{prefix}{{}}"));
    Ok(track.with_update(text))
}
