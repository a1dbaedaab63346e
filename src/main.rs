//! Headless float label session.
//!
//! Loads `floatlabel.toml` (plus `FLOATLABEL_*` overrides), builds a control
//! over recording surfaces and replays a scripted session: focus, typing,
//! clearing, blur. Frames are pumped at ~60 fps. Run with `RUST_LOG=debug`
//! (or `trace` for per-frame colors) to watch the state machines.

use anyhow::{Context, Result};
use floatlabel_config::FloatLabelSettings;
use floatlabel_widget::recording::{ManualScheduler, RecordingEditable, RecordingLabel};
use floatlabel_widget::{FloatLabel, HostContext};

const FRAME_MS: f32 = 1000.0 / 60.0;

type Control = FloatLabel<RecordingEditable, RecordingLabel, ManualScheduler>;

enum Step {
    Focus(bool),
    Type(&'static str),
    Clear,
    Hint(&'static str),
}

fn pump_frames(control: &mut Control) -> Result<usize> {
    let runs = control
        .scheduler_mut()
        .map(|s| s.take_runs())
        .context("control has no scheduler")?;
    let mut frames = 0;
    for run in runs {
        for index in 0u64.. {
            frames += 1;
            let elapsed = index as f32 * FRAME_MS;
            if !control.on_animation_frame(run.frame(elapsed)).wants_more() {
                break;
            }
        }
    }
    Ok(frames)
}

fn main() -> Result<()> {
    env_logger::init();

    let settings = FloatLabelSettings::load();
    let config = settings.resolve();
    log::info!(
        "hint={:?} focused={} unfocused={} text_size={}sp",
        config.hint_text,
        config.focused_color.to_css_hex(),
        config.unfocused_color.to_css_hex(),
        config.text_size_sp
    );

    let mut control = FloatLabel::new(
        config,
        Some(HostContext::new(settings.display)),
        RecordingEditable::with_padding(16.0),
        RecordingLabel::default(),
        ManualScheduler::default(),
    );

    let script = [
        Step::Focus(true),
        Step::Type("h"),
        Step::Type("he"),
        Step::Type("hello"),
        Step::Hint("Greeting"),
        Step::Clear,
        Step::Focus(false),
        Step::Type("bye"),
    ];

    for step in script {
        match step {
            Step::Focus(has_focus) => control.on_focus_changed(has_focus),
            Step::Type(text) => control.set_text(text),
            Step::Clear => control.set_text(""),
            Step::Hint(hint) => control.set_hint(hint),
        }
        let frames = pump_frames(&mut control)?;
        log::info!(
            "text={:?} label={:?} frames={frames}",
            control.text(),
            control.visibility()
        );
    }

    let label = control.label().context("control was built without surfaces")?;
    println!("label text:      {}", label.text);
    println!("label visible:   {:?}", control.visibility());
    match label.text_color() {
        Some(color) => {
            let [r, g, b, a] = color.to_lin_premul();
            println!("label color:     {} (linear {r:.3} {g:.3} {b:.3} {a:.3})", color.to_css_hex());
        }
        None => println!("label color:     -"),
    }
    println!("slides played:   {}", label.animations.len());
    println!("colors applied:  {}", label.colors.len());
    Ok(())
}
