// File: crates/plot-core/tests/render.rs
// Purpose: Drive the draw passes against a recording painter and check what gets drawn.

use plot_core::legend::{LegendLayout, ITEM_GAP};
use plot_core::painter::{LineStyle, Op};
use plot_core::plot::PlotFrame;
use plot_core::rectangle::RectanglePlot;
use plot_core::triangle::TrianglePlot;
use plot_core::types::Margins;
use plot_core::{process, ChartDisplay, PlotData, PlotKind, PlotPasses, PlotStyle, RecordingPainter, ValueMatrix};

const W: i32 = 600;
const H: i32 = 600;

fn data(kind: PlotKind, rows: Vec<Vec<f64>>, categories: usize) -> PlotData {
    let labels = (0..rows.len()).map(|i| format!("f{i}(x)")).collect();
    PlotData {
        kind,
        categories: (1..=categories).map(|c| c as f64).collect(),
        matrix: ValueMatrix::from_values(rows),
        labels,
    }
}

fn frame() -> PlotFrame {
    PlotFrame::new(W, H, Margins::default())
}

fn is_zero_pen(op: &Op) -> bool {
    matches!(op, Op::Line(_, _, pen) if pen.style == LineStyle::Solid && pen.width == 2.0)
}

#[test]
fn zero_cells_are_skipped_and_blocks_stay_in_band() {
    let plot = RectanglePlot::new(&data(PlotKind::Rectangle, vec![vec![5.0, -3.0, 0.0, 8.0]], 4), frame());
    let blocks = plot.blocks();
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks.iter().map(|b| b.category).collect::<Vec<_>>(), vec![0, 1, 3]);
    for b in &blocks {
        assert!(b.x_start >= 50 && b.x_end <= 50 + 535, "{:?}", b);
        assert!(b.x_start < b.x_end);
    }

    let mut rec = RecordingPainter::new();
    plot.draw_plot(&mut rec, &PlotStyle::light());
    // side, top and front face per block
    assert_eq!(rec.count(|op| matches!(op, Op::FillPolygon(..))), 9);
    assert_eq!(rec.count(|op| matches!(op, Op::StrokePolygon(..))), 9);
}

#[test]
fn front_face_is_drawn_last() {
    let plot = RectanglePlot::new(&data(PlotKind::Rectangle, vec![vec![5.0]], 1), frame());
    let style = PlotStyle::light();
    let mut rec = RecordingPainter::new();
    plot.draw_plot(&mut rec, &style);
    let fills: Vec<_> = rec
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::FillPolygon(_, c) => Some(*c),
            _ => None,
        })
        .collect();
    assert_eq!(fills.len(), 3);
    assert_eq!(fills[2], style.series_color(0));
    assert_ne!(fills[0], fills[2]);
    assert_ne!(fills[1], fills[2]);
}

#[test]
fn short_series_draws_fewer_blocks() {
    let plot = RectanglePlot::new(
        &data(PlotKind::Rectangle, vec![vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 2.0]], 4),
        frame(),
    );
    let blocks = plot.blocks();
    let full = blocks.iter().filter(|b| b.series == 0).count();
    let short = blocks.iter().filter(|b| b.series == 1).count();
    assert_eq!(full, 4);
    assert_eq!(short, 2);
    assert!(blocks.iter().filter(|b| b.series == 1).all(|b| b.category < 2));
}

#[test]
fn zero_line_coincides_with_grid_and_block_baseline() {
    let plot = RectanglePlot::new(&data(PlotKind::Rectangle, vec![vec![5.0, -3.0, 8.0]], 3), frame());
    let zero_x = plot.mapper().expect("valid plot").zero_px();
    let style = PlotStyle::light();

    let mut grid = RecordingPainter::new();
    plot.draw_grid(&mut grid, &style);
    // first tick is the zero tick
    match grid.ops.first() {
        Some(Op::Line(a, b, _)) => assert_eq!((a.x, b.x), (zero_x, zero_x)),
        other => panic!("unexpected first grid op {:?}", other),
    }

    let mut zero = RecordingPainter::new();
    plot.draw_zero_line(&mut zero, &style);
    match zero.ops.as_slice() {
        [Op::Line(a, b, pen)] => {
            assert_eq!((a.x, b.x), (zero_x, zero_x));
            assert_eq!(pen.style, LineStyle::Solid);
            assert_eq!(pen.width, style.grid_width + 1.0);
        }
        other => panic!("unexpected zero-line ops {:?}", other),
    }

    for b in plot.blocks() {
        assert!(b.x_start == zero_x || b.x_end == zero_x, "{:?} not anchored at {}", b, zero_x);
    }
}

#[test]
fn grid_labels_ticks_and_categories() {
    let plot = RectanglePlot::new(&data(PlotKind::Rectangle, vec![vec![-8.0, 1.0, 4.0]], 3), frame());
    let mut rec = RecordingPainter::new();
    plot.draw_grid(&mut rec, &PlotStyle::light());
    let texts: Vec<&str> = rec.texts().collect();
    for want in ["0.000", "2.000", "-2.000", "8.000", "-8.000", "1.00", "2.00", "3.00"] {
        assert!(texts.contains(&want), "missing label {want} in {texts:?}");
    }
    assert!(!texts.contains(&"-0.000"));
    // 1 zero tick + 4 mirrored pairs + 3 categories + 4 border edges
    assert_eq!(rec.count(|op| matches!(op, Op::Line(..))), 1 + 8 + 3 + 4);
}

#[test]
fn passes_run_grid_then_blocks_then_zero_line() {
    let mut display = ChartDisplay::new();
    let d = data(PlotKind::Rectangle, vec![vec![5.0, -3.0, 0.0, 8.0], vec![2.0, 2.0, 2.0, 2.0]], 4);
    display.set_data(d.kind, d.categories, d.matrix, d.labels);
    let mut rec = RecordingPainter::new();
    display.render(&mut rec, W, H, &PlotStyle::light());

    assert!(matches!(rec.ops[0], Op::FillRect(..)));
    assert!(matches!(rec.ops[1], Op::StrokeRect(..)));
    let first_line = rec.ops.iter().position(|op| matches!(op, Op::Line(..))).unwrap();
    let first_poly = rec.ops.iter().position(|op| matches!(op, Op::FillPolygon(..))).unwrap();
    let last_poly = rec.ops.iter().rposition(|op| matches!(op, Op::FillPolygon(..))).unwrap();
    assert!(first_line < first_poly);
    assert!(is_zero_pen(rec.ops.last().unwrap()));
    assert!(last_poly < rec.ops.len() - 1);
    assert_eq!(rec.count(is_zero_pen), 1);
}

#[test]
fn empty_function_list_draws_only_background_and_frame() {
    let mut display = ChartDisplay::new();
    display.set_data(PlotKind::Rectangle, vec![1.0, 2.0, 3.0], ValueMatrix::new(), Vec::new());
    let mut rec = RecordingPainter::new();
    display.render(&mut rec, W, H, &PlotStyle::light());
    assert_eq!(rec.ops.len(), 2);
    assert!(matches!(rec.ops[0], Op::FillRect(..)));
    assert!(matches!(rec.ops[1], Op::StrokeRect(..)));

    let plot = RectanglePlot::new(&data(PlotKind::Rectangle, vec![], 3), frame());
    assert!(!plot.is_valid());
    assert!(plot.blocks().is_empty());
}

#[test]
fn empty_categories_invalidate_the_chart() {
    let plot = RectanglePlot::new(&data(PlotKind::Rectangle, vec![vec![1.0]], 0), frame());
    assert!(!plot.is_valid());
    let mut rec = RecordingPainter::new();
    plot.draw_grid(&mut rec, &PlotStyle::light());
    plot.draw_plot(&mut rec, &PlotStyle::light());
    plot.draw_zero_line(&mut rec, &PlotStyle::light());
    assert!(rec.ops.is_empty());
}

#[test]
fn all_functions_failing_invalidates_both_variants() {
    let functions = ["sin(", "foo(x)"];
    let (categories, matrix) = process(&functions, "1,10,7").expect("range is valid");
    assert_eq!(matrix.series_count(), 2);
    assert!(!matrix.has_values());
    let labels: Vec<String> = functions.iter().map(|f| f.to_string()).collect();

    for kind in PlotKind::ALL {
        let d = PlotData { kind, categories: categories.clone(), matrix: matrix.clone(), labels: labels.clone() };
        let style = PlotStyle::light();
        let mut rec = RecordingPainter::new();
        match kind {
            PlotKind::Rectangle => {
                let plot = RectanglePlot::new(&d, frame());
                assert!(!plot.is_valid());
                plot.draw_grid(&mut rec, &style);
                plot.draw_plot(&mut rec, &style);
                plot.draw_zero_line(&mut rec, &style);
            }
            PlotKind::Triangle => {
                let plot = TrianglePlot::new(&d, frame());
                assert!(!plot.is_valid());
                plot.draw_grid(&mut rec, &style);
                plot.draw_plot(&mut rec, &style);
                plot.draw_zero_line(&mut rec, &style);
            }
        }
        assert!(rec.ops.is_empty(), "{kind:?} drew {:?}", rec.ops);

        let mut display = ChartDisplay::new();
        display.set_data(kind, categories.clone(), matrix.clone(), labels.clone());
        let mut all = RecordingPainter::new();
        display.render(&mut all, W, H, &style);
        assert_eq!(all.ops.len(), 2);
    }
}

#[test]
fn no_data_renders_background_and_frame() {
    let mut display = ChartDisplay::new();
    let mut rec = RecordingPainter::new();
    display.render(&mut rec, W, H, &PlotStyle::dark());
    assert_eq!(rec.ops.len(), 2);

    let d = data(PlotKind::Rectangle, vec![vec![1.0, 2.0]], 2);
    display.set_data(d.kind, d.categories, d.matrix, d.labels);
    let mut shown = RecordingPainter::new();
    display.render(&mut shown, W, H, &PlotStyle::dark());
    assert!(shown.ops.len() > 2);

    display.clear();
    let mut cleared = RecordingPainter::new();
    display.render(&mut cleared, W, H, &PlotStyle::dark());
    assert_eq!(cleared.ops.len(), 2);
}

#[test]
fn legend_width_is_sum_of_items_minus_trailing_gap() {
    let rec = RecordingPainter::new();
    let labels = ["10 * sin(x)", "x^2", "exp(x)"];
    let layout = LegendLayout::measure(&labels, &rec);
    assert_eq!(layout.item_widths.len(), 3);
    let sum: f32 = layout.item_widths.iter().sum();
    assert_eq!(layout.total_width, sum - ITEM_GAP as f32);
    // box 15 + offset 20 + gap 5 + 11 chars * 7
    assert_eq!(layout.item_widths[0], 40.0 + 77.0);

    let empty: [&str; 0] = [];
    assert_eq!(LegendLayout::measure(&empty, &rec).total_width, 0.0);
}

#[test]
fn legend_has_one_swatch_and_label_per_series() {
    let plot = RectanglePlot::new(&data(PlotKind::Rectangle, vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0], vec![5.0]], 1), frame());
    let style = PlotStyle::light();
    let mut rec = RecordingPainter::new();
    plot.draw_plot(&mut rec, &style);
    let labels: Vec<&str> = rec.texts().collect();
    assert_eq!(labels, vec!["f0(x)", "f1(x)", "f2(x)", "f3(x)", "f4(x)"]);
    // background + 5 swatches; the fifth reuses the first palette colour
    let rects: Vec<_> = rec
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::FillRect(r, c) => Some((*r, *c)),
            _ => None,
        })
        .collect();
    assert_eq!(rects.len(), 6);
    assert_eq!(rects[5].1, rects[1].1);
    assert_eq!(rects[1].1, style.series_color(0));
}

#[test]
fn triangle_variant_uses_default_zero_line_pass() {
    let d = data(PlotKind::Triangle, vec![vec![5.0, -3.0, 0.0, 8.0]], 4);
    let plot = TrianglePlot::new(&d, frame());
    assert_eq!(plot.spikes().len(), 3);
    for s in plot.spikes() {
        assert!(s.apex_y >= 0 && s.apex_y <= H - 50);
    }

    let mut rec = RecordingPainter::new();
    plot.draw_zero_line(&mut rec, &PlotStyle::light());
    assert!(rec.ops.is_empty());

    let mut display = ChartDisplay::new();
    display.set_data(d.kind, d.categories.clone(), d.matrix.clone(), d.labels.clone());
    let mut all = RecordingPainter::new();
    display.render(&mut all, W, H, &PlotStyle::light());
    assert_eq!(all.count(|op| matches!(op, Op::FillPolygon(..))), 3);
    assert_eq!(all.count(is_zero_pen), 1);
}

#[test]
fn kind_selector_names() {
    assert_eq!(PlotKind::from_name("Linear rectangle"), PlotKind::Rectangle);
    assert_eq!(PlotKind::from_name("rectangle"), PlotKind::Rectangle);
    assert_eq!(PlotKind::from_name("Gistogram triangle"), PlotKind::Triangle);
    assert_eq!(PlotKind::from_name("TRIANGLE"), PlotKind::Triangle);
    assert_eq!(PlotKind::from_name("3D Bar Chart"), PlotKind::Rectangle);
    assert_eq!(PlotKind::Rectangle.next(), PlotKind::Triangle);
}
