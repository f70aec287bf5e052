// File: crates/plot-core/src/chart.rs
// Summary: ChartDisplay (last plotted data + paint entry point) and headless rendering via Skia CPU raster surfaces.

use anyhow::Result;
use log::debug;
use skia_safe as skia;

use crate::geometry::RectI32;
use crate::matrix::ValueMatrix;
use crate::painter::{Painter, Pen, SkiaPainter};
use crate::plot::{Plot, PlotData, PlotKind};
use crate::text::TextShaper;
use crate::theme::PlotStyle;
use crate::types::{HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub style: PlotStyle,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            style: PlotStyle::default(),
            draw_labels: true,
        }
    }
}

/// Holds the most recent plot until it is replaced; repaints it on demand.
#[derive(Default)]
pub struct ChartDisplay {
    data: Option<PlotData>,
}

impl ChartDisplay {
    pub fn new() -> Self {
        Self { data: None }
    }

    /// Replace what is shown. Takes effect on the next `render`.
    pub fn set_data(&mut self, kind: PlotKind, categories: Vec<f64>, matrix: ValueMatrix, labels: Vec<String>) {
        debug!("set_data: {:?}, {} categories, {} series", kind, categories.len(), matrix.series_count());
        self.data = Some(PlotData { kind, categories, matrix, labels });
    }

    /// Switch variant without re-evaluating.
    pub fn set_kind(&mut self, kind: PlotKind) {
        if let Some(d) = &mut self.data {
            d.kind = kind;
        }
    }

    pub fn clear(&mut self) {
        self.data = None;
    }

    /// Paint background and frame, then the grid, plot and zero-line passes.
    pub fn render(&self, painter: &mut dyn Painter, width: i32, height: i32, style: &PlotStyle) {
        painter.fill_rect(RectI32::from_ltwh(0, 0, width, height), style.background);
        painter.stroke_rect(RectI32::from_ltwh(0, 0, width - 1, height - 1), &Pen::solid(style.frame, 1.0));
        if let Some(data) = &self.data {
            Plot::build(data, width, height).render(painter, style);
        }
    }

    fn render_raster(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        let shaper = TextShaper::new();
        {
            let canvas = surface.canvas();
            let mut painter = SkiaPainter::new(canvas, &shaper);
            if !opts.draw_labels {
                painter = painter.without_labels();
            }
            self.render(&mut painter, opts.width, opts.height, &opts.style);
        }
        Ok(surface)
    }

    /// Render to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_raster(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to unpremultiplied RGBA8. Returns `(pixels, width, height, row_stride)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_raster(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {}x{} pixels failed", w, h);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}
