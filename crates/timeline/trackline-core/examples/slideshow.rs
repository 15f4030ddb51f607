//! Lay out a short slideshow with chained time expressions and play it
//! against a printing surface.

use trackline_core::{
    countdown_block, image_track, repeat_then, Config, Element, ImagePlacement, LayerId, Stage,
    Surface, TimeCursor, Timeline, Track, TrackId, Value,
};

struct Printer;

struct PrintedElement(TrackId);

impl Element for PrintedElement {
    fn set_property(&mut self, name: &str, value: Value) {
        println!("  #{} {name} = {value}", self.0 .0);
    }
}

impl Surface for Printer {
    type Element = PrintedElement;

    fn attach(&mut self, id: TrackId, track: &Track) -> PrintedElement {
        println!("attach #{} ({} on layer {})", id.0, track.media_type(), track.layer_id().0);
        PrintedElement(id)
    }

    fn detach(&mut self, id: TrackId, _element: PrintedElement) {
        println!("detach #{}", id.0);
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::default();
    let mut timeline = Timeline::new();

    let cursor = TimeCursor::new().resolve("0:05")?;
    let first = image_track(
        &config,
        LayerId(2),
        &ImagePlacement::centered("https://placehold.co/600x400"),
        cursor.seconds(),
        Some(6.0),
    )?;
    let mut after = 0.0;
    timeline.extend(repeat_then(&first, 2, |end| after = end));

    let start = TimeCursor::at(after).resolve("+500ms")?;
    let end = start.resolve("+3s")?;
    timeline.push(countdown_block(
        LayerId(4),
        start.seconds(),
        end.seconds(),
        "Count Down: ",
    )?);

    let mut stage = Stage::new(timeline, Printer);
    let mut t = 0.0;
    while t <= stage.timeline().end_time() {
        for event in stage.render(t) {
            println!("{t:>5.1}s {event:?}");
        }
        t += 0.5;
    }
    stage.reset();
    Ok(())
}
