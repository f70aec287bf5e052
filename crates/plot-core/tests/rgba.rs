// File: crates/plot-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use plot_core::{ChartDisplay, PlotKind, RenderOptions, ValueMatrix};

#[test]
fn render_rgba8_buffer() {
    let mut display = ChartDisplay::new();
    display.set_data(
        PlotKind::Rectangle,
        vec![1.0, 2.0, 3.0],
        ValueMatrix::from_values(vec![vec![3.0, -1.0, 2.0]]),
        vec!["f(x)".into()],
    );

    let mut opts = RenderOptions::default();
    opts.width = 320;
    opts.height = 240;
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = display.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (320, 240));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Frame pixel at the top-left corner is opaque
    assert_eq!(px[3], 255);
    // Just inside the right margin, above the legend strip: plain background
    let (x, y) = (w as usize - 5, 10usize);
    let i = y * stride + x * 4;
    assert_eq!(&px[i..i + 4], &[255, 255, 255, 255]);
}

#[test]
fn zero_sized_surface_is_an_error() {
    let display = ChartDisplay::new();
    let mut opts = RenderOptions::default();
    opts.width = 0;
    assert!(display.render_to_png_bytes(&opts).is_err());
}
