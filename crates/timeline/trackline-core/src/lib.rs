//! Trackline Core (renderer-agnostic)
//!
//! Declarative timeline of timed visual tracks (video, image, block overlays)
//! plus the utilities used to author it: a time-expression parser with an
//! explicit carry cursor, a linear/quadratic tween engine with a composite
//! fade, and a track repeater. Creating and compositing the visual elements
//! is left to a [`Surface`] implementation supplied by the host.

pub mod animatable;
pub mod config;
pub mod data;
pub mod error;
pub mod ids;
pub mod presets;
pub mod repeat;
pub mod stage;
pub mod stored_timeline;
pub mod timecode;
pub mod timeline;
pub mod tween;
pub mod value;

// Re-exports for consumers (renderers, config builders)
pub use animatable::{Animatable, Element};
pub use config::{Canvas, Config, ImageDefaults};
pub use data::{
    BlockMedia, Driver, ImageMedia, Media, MediaType, PropertyAnimation, PropertySet, Track,
    VideoMedia,
};
pub use error::{Result, TimeFormatError, TimelineError};
pub use ids::{IdAllocator, LayerId, TrackId};
pub use presets::{countdown_block, image_track, ImagePlacement};
pub use repeat::{repeat, repeat_then, Repeated};
pub use stage::{Stage, StageEvent, Surface};
pub use stored_timeline::parse_timeline_json;
pub use timecode::{format_clock, parse_delta, resolve, TimeCursor, TimeInput};
pub use timeline::Timeline;
pub use tween::{fade, linear, quadratic, Easing, Fade, Tween};
pub use value::{Value, ValueKind};
