// File: crates/window-demo/src/main.rs
// Summary: Desktop window that plots functions with plot-core rendering blitted via winit + softbuffer.
// Keys: Tab switches chart type, R re-plots, T switches light/dark, Esc closes.
// A adds a series, D removes the last one, E cycles the examples into the last one,
// Up/Down change the range's point count.

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use plot_core::range::DEFAULT_RANGE;
use plot_core::{theme, ChartDisplay, PlotInputs, PlotKind, PlotStyle, RenderOptions, EXAMPLE_FUNCTIONS};
use std::num::NonZeroU32;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Parser)]
#[command(name = "blockplot-window")]
#[command(about = "Plot functions of x as a pseudo-3D block chart in a window")]
struct Cli {
    /// Function of x; repeat for several series
    #[arg(short = 'f', long = "function")]
    functions: Vec<String>,
    /// Range as start,end,count
    #[arg(long, default_value = DEFAULT_RANGE)]
    range: String,
    /// Chart type: rectangle or triangle
    #[arg(long, default_value = "rectangle")]
    kind: String,
    /// Style preset: light or dark
    #[arg(long, default_value = "light")]
    theme: String,
}

/// Window-lifetime state: the editable inputs and the display showing the last plot.
struct App {
    inputs: PlotInputs,
    kind: PlotKind,
    style: PlotStyle,
    display: ChartDisplay,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            inputs: PlotInputs::new(cli.functions, cli.range),
            kind: PlotKind::from_name(&cli.kind),
            style: theme::find(&cli.theme),
            display: ChartDisplay::new(),
        }
    }

    /// The "Plot" action: evaluate and hand the result to the display.
    fn plot(&mut self) -> Result<()> {
        let (categories, matrix) = match self.inputs.process() {
            Ok(v) => v,
            Err(e) => {
                // a bad range leaves nothing worth showing
                self.display.clear();
                return Err(anyhow::Error::new(e).context(format!("range {:?}", self.inputs.range())));
            }
        };
        info!(
            "Plotted {} function(s) over {} point(s) as {}",
            matrix.series_count(),
            categories.len(),
            self.kind.label()
        );
        self.display.set_data(self.kind, categories, matrix, self.inputs.functions().to_vec());
        Ok(())
    }

    fn toggle_kind(&mut self) {
        self.kind = self.kind.next();
        self.display.set_kind(self.kind);
        info!("Chart type: {}", self.kind.label());
    }

    fn toggle_theme(&mut self) {
        self.style = if self.style.name == "light" { PlotStyle::dark() } else { PlotStyle::light() };
    }

    /// New series, seeded with the example the list would offer next.
    fn add_series(&mut self) {
        let n = self.inputs.functions().len();
        self.inputs.add_function(EXAMPLE_FUNCTIONS[n % EXAMPLE_FUNCTIONS.len()]);
        info!("Added series {}: {}", n, self.inputs.functions()[n]);
    }

    fn remove_series(&mut self) {
        let last = self.inputs.functions().len().saturating_sub(1);
        if let Some(f) = self.inputs.remove_function(last) {
            info!("Removed series {last}: {f}");
        }
    }

    /// Put the next example into the last series.
    fn cycle_example(&mut self) {
        let last = self.inputs.functions().len().saturating_sub(1);
        if let Some(f) = self.inputs.cycle_example(last) {
            info!("Series {last}: {f}");
        }
    }

    fn adjust_points(&mut self, delta: i64) {
        match self.inputs.adjust_count(delta) {
            Ok(n) => info!("Range {} ({n} points)", self.inputs.range()),
            Err(e) => warn!("range not adjusted: {e}"),
        }
    }

    /// Render at `w` x `h` into 0RGB pixels.
    fn frame(&self, w: u32, h: u32) -> Result<Vec<u32>> {
        let opts = RenderOptions { width: w as i32, height: h as i32, style: self.style, draw_labels: true };
        let (rgba, _, _, _) = self.display.render_to_rgba8(&opts)?;
        Ok(rgba
            .chunks_exact(4)
            .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
            .collect())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let mut app = App::new(Cli::parse());
    if let Err(e) = app.plot() {
        warn!("initial plot failed: {e:#}");
    }

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Graph Visualization App")
        .with_inner_size(winit::dpi::LogicalSize::new(plot_core::types::WIDTH as f64, plot_core::types::HEIGHT as f64))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(_) => window.request_redraw(),
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    let replot = match key {
                        VirtualKeyCode::Escape => {
                            *cf = ControlFlow::Exit;
                            return;
                        }
                        VirtualKeyCode::Tab => {
                            app.toggle_kind();
                            false
                        }
                        VirtualKeyCode::T => {
                            app.toggle_theme();
                            false
                        }
                        VirtualKeyCode::R => true,
                        VirtualKeyCode::A => {
                            app.add_series();
                            true
                        }
                        VirtualKeyCode::D => {
                            app.remove_series();
                            true
                        }
                        VirtualKeyCode::E => {
                            app.cycle_example();
                            true
                        }
                        VirtualKeyCode::Up => {
                            app.adjust_points(1);
                            true
                        }
                        VirtualKeyCode::Down => {
                            app.adjust_points(-1);
                            true
                        }
                        _ => return,
                    };
                    if replot {
                        if let Err(e) = app.plot() {
                            warn!("plot failed: {e:#}");
                        }
                    }
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    error!("resize error: {e:?}");
                    return;
                }
                let pixels = match app.frame(w.get(), h.get()) {
                    Ok(p) => p,
                    Err(e) => {
                        error!("render error: {e:#}");
                        return;
                    }
                };
                let mut buffer = match surface.buffer_mut() {
                    Ok(b) => b,
                    Err(e) => {
                        error!("frame error: {e:?}");
                        return;
                    }
                };
                let n = buffer.len().min(pixels.len());
                buffer[..n].copy_from_slice(&pixels[..n]);
                if let Err(e) = buffer.present() {
                    error!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}
