use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use rulerkit_core::{
    AppConfig, GestureEvent, GesturePhase, GestureSample, RecordingHaptics, RenderSnapshot,
    SharedValue, SlidingRuler, Vec2,
};

use super::RulerArgs;

/// Scripted drag followed by a release, simulated frame by frame.
#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub ruler: RulerArgs,
    /// Total drag translation along the axis, in pixels
    #[arg(long, default_value_t = -300.0, allow_negative_numbers = true)]
    pub drag: f64,
    /// Release velocity along the axis, in pixels per second
    #[arg(long, default_value_t = -500.0, allow_negative_numbers = true)]
    pub velocity: f64,
    /// Number of move samples the drag is split into
    #[arg(long, default_value_t = 10)]
    pub samples: u32,
    /// Visible extent of the ruler, in pixels
    #[arg(long, default_value_t = 375.0)]
    pub extent: f64,
    /// Simulated display refresh rate
    #[arg(long, default_value_t = 60)]
    pub fps: u32,
    /// Stop after this many animation frames
    #[arg(long, default_value_t = 600)]
    pub max_frames: u32,
}

/// One line of the JSON trace.
#[derive(Debug, Serialize)]
struct TraceLine {
    frame: u32,
    time_ms: f64,
    event: &'static str,
    editing: bool,
    impacts: Vec<String>,
    #[serde(flatten)]
    snapshot: RenderSnapshot,
}

struct Simulation<'a, W: Write> {
    ruler: SlidingRuler,
    haptics: RecordingHaptics,
    editing: Rc<Cell<bool>>,
    frame: u32,
    frame_interval: Duration,
    out: &'a mut W,
}

impl<W: Write> Simulation<'_, W> {
    fn emit(&mut self, event: &'static str) -> Result<()> {
        let line = TraceLine {
            frame: self.frame,
            time_ms: self.frame as f64 * self.frame_interval.as_secs_f64() * 1000.0,
            event,
            editing: self.editing.get(),
            impacts: self
                .haptics
                .drain()
                .into_iter()
                .map(|(style, intensity)| format!("{:?}:{}", style, intensity))
                .collect(),
            snapshot: self.ruler.render(),
        };
        serde_json::to_writer(&mut *self.out, &line)?;
        writeln!(self.out)?;
        self.frame += 1;
        Ok(())
    }

    fn gesture(&mut self, event: GestureEvent, name: &'static str) -> Result<()> {
        self.ruler.handle_gesture(event);
        self.emit(name)
    }
}

pub fn run(config: &AppConfig, args: &SimulateArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    simulate(config, args, &mut out)
}

/// Run the script, writing one JSON line per gesture event and frame.
fn simulate<W: Write>(config: &AppConfig, args: &SimulateArgs, out: &mut W) -> Result<()> {
    let value = SharedValue::new(config.ruler.value);
    let haptics = RecordingHaptics::new();
    let editing = Rc::new(Cell::new(false));
    let editing_flag = Rc::clone(&editing);

    let mut ruler = SlidingRuler::builder(value.clone())
        .configure(config)?
        .haptics(haptics.clone())
        .on_editing_changed(move |active| editing_flag.set(active))
        .build()?;
    ruler.set_control_extent(args.extent);

    let fps = args.fps.max(1);
    let frame_interval = Duration::from_secs_f64(1.0 / fps as f64);
    let axis = config.ruler.axis;
    let samples = args.samples.max(1);

    tracing::info!(
        value = value.get(),
        drag = args.drag,
        velocity = args.velocity,
        fps,
        "Starting simulation"
    );

    let mut sim = Simulation {
        ruler,
        haptics,
        editing,
        frame: 0,
        frame_interval,
        out,
    };

    sim.gesture(GestureEvent::TouchDown, "touch_down")?;
    sim.gesture(
        GestureEvent::Sample(GestureSample::new(
            GesturePhase::Began,
            Vec2::ZERO,
            Vec2::ZERO,
        )),
        "began",
    )?;

    let drag_velocity = args.drag / (samples as f64 * frame_interval.as_secs_f64());
    for i in 1..=samples {
        let translation = args.drag * i as f64 / samples as f64;
        sim.gesture(
            GestureEvent::Sample(GestureSample::new(
                GesturePhase::Changed,
                axis.vector(translation),
                axis.vector(drag_velocity),
            )),
            "changed",
        )?;
    }

    sim.gesture(
        GestureEvent::Sample(GestureSample::new(
            GesturePhase::Ended,
            axis.vector(args.drag),
            axis.vector(args.velocity),
        )),
        "ended",
    )?;

    for _ in 0..args.max_frames {
        let more = sim.ruler.on_frame(frame_interval);
        sim.emit("frame")?;
        if !more {
            break;
        }
    }

    tracing::info!(value = value.get(), state = %sim.ruler.state(), "Simulation finished");
    Ok(())
}
