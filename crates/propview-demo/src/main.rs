#![forbid(unsafe_code)]

//! Headless propview demo.
//!
//! Builds an inspector tree over a small simulated body whose fields live in
//! `Cell`s, then drives the panel for a number of frames with a scripted
//! pointer: a slow downward sweep, one click on the root header, and a
//! wheel notch. Per-frame summaries go to the log; `--dump` prints the last
//! frame's draw commands with their resolved palette colors.

mod cli;

use std::cell::{Cell, RefCell};
use std::time::Duration;

use propview::prelude::*;
use propview::{DrawCommand, Palette, PointerFlags};
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);

/// Simulated object whose fields the panel reads live.
struct Body {
    name: RefCell<String>,
    alive: Cell<bool>,
    layer: Cell<u8>,
    health: Cell<i32>,
    x: Cell<f32>,
    y: Cell<f32>,
    vx: Cell<f32>,
    vy: Cell<f32>,
}

impl Body {
    fn new() -> Self {
        Self {
            name: RefCell::new("probe".to_string()),
            alive: Cell::new(true),
            layer: Cell::new(3),
            health: Cell::new(100),
            x: Cell::new(0.0),
            y: Cell::new(0.0),
            vx: Cell::new(1.5),
            vy: Cell::new(-0.25),
        }
    }

    fn step(&self, frame: u32) {
        self.x.set(self.x.get() + self.vx.get());
        self.y.set(self.y.get() + self.vy.get());
        if frame % 10 == 9 {
            let health = (self.health.get() - 7).max(0);
            self.health.set(health);
            self.alive.set(health > 0);
        }
        if frame % 30 == 29 {
            let mut name = self.name.borrow_mut();
            name.clear();
            name.push_str(if frame % 60 == 29 { "probe-b" } else { "probe" });
        }
    }
}

fn populate<'a>(store: &mut PropertyStore<'a>, body: &'a Body) -> Result<()> {
    store.add_object_header("body")?;
    store.add_linked_string("name", "{}", &body.name)?;
    store.add_linked_bool("alive", "{}", &body.alive)?;
    store.add_linked_byte("layer", "{:08b}", &body.layer)?;
    store.add_linked_int("health", "{:4}", &body.health)?;

    store.add_array_header("position")?;
    store.add_linked_float("x", "{:.2}", &body.x)?;
    store.add_linked_float("y", "{:.2}", &body.y)?;
    store.add_closer()?;

    store.add_map_header("velocity")?;
    store.add_linked_float("vx", "{:.3}", &body.vx)?;
    store.add_linked_float("vy", "{:.3}", &body.vy)?;
    store.add_closer()?;

    store.add_collapsed_header("notes", CollectionKind::Object)?;
    store.add_multiline("log", "spawned\nentered layer 3")?;
    store.add_closer()?;

    store.add_fmt("kind", ValueKind::Any, format_args!("rigid"))?;
    store.add_closer()?;
    Ok(())
}

/// Scripted pointer for frame `i` of `total`.
fn pointer_for(i: u32, total: u32, bounds: Bounds, prev_y: i32) -> PointerState {
    let span = (bounds.height() - 1).max(1);
    let y = bounds.ymin + (i as i32 * span) / total.max(1) as i32;
    let mut pointer = PointerState::at(bounds.xmin + 40, y).moved_from(prev_y);
    if i == total / 3 {
        // Root header row.
        pointer = PointerState::at(bounds.xmin + 20, bounds.ymin + 10)
            .moved_from(prev_y)
            .clicked();
    }
    if i == (2 * total) / 3 {
        pointer = pointer.with_wheel(1);
    }
    if i + 1 == total {
        pointer = pointer.with_flags(PointerFlags::empty());
    }
    pointer
}

fn dump(surface: &DisplayList, palette: &Palette) {
    for command in surface.commands() {
        let color = palette.color(command.color());
        match command {
            DrawCommand::Text { text, x, y, .. } => {
                println!("text  {color} ({x:>4},{y:>4}) {text:?}");
            }
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                ..
            } => println!("rect  {color} ({x:>4},{y:>4}) {width}x{height}"),
            DrawCommand::Line { x1, y1, x2, y2, .. } => {
                println!("line  {color} ({x1:>4},{y1:>4}) -> ({x2:>4},{y2:>4})");
            }
        }
    }
}

fn main() -> Result<()> {
    let opts = cli::Opts::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let body = Body::new();
    let panel = PropertiesPanel::new();
    let mut state = panel.state();
    if state.show_for(1) {
        populate(state.store_mut(), &body)?;
    }

    let bounds = Bounds::new(0, 0, opts.width, opts.height);
    let mut surface = DisplayList::new();
    let mut clock = FrameClock::default();
    let mut prev_y = bounds.ymin;

    for i in 0..opts.frames {
        body.step(i);
        clock = clock.tick(FRAME);
        let pointer = pointer_for(i, opts.frames, bounds, prev_y);
        prev_y = pointer.y;

        surface.clear();
        let input = FrameInput::new(pointer, clock);
        let report = panel.render(bounds, &input, &mut surface, &mut state);
        if report.toggled.is_some() || !report.diagnostics.is_empty() {
            tracing::info!(
                frame = i,
                visible = report.visible_count,
                toggled = ?report.toggled,
                diagnostics = report.diagnostics.len(),
                "frame"
            );
        } else {
            tracing::debug!(frame = i, visible = report.visible_count, "frame");
        }
    }

    tracing::info!(
        frames = opts.frames,
        scroll_y = state.scroll_y(),
        commands = surface.len(),
        "done"
    );

    if opts.dump {
        dump(&surface, &Palette::DEFAULT);
    }
    Ok(())
}
