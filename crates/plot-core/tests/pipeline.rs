// File: crates/plot-core/tests/pipeline.rs
// Purpose: End-to-end plot action: range text + function texts -> categories, matrix and blocks.

use plot_core::plot::PlotFrame;
use plot_core::rectangle::RectanglePlot;
use plot_core::types::Margins;
use plot_core::{process, PlotData, PlotError, PlotKind, RangeError, ValueMatrix};

#[test]
fn default_inputs_produce_one_full_row_per_function() {
    let functions = ["10 * sin(x)", "10 * sin(2*x + exp(cos(abs(x))))"];
    let (categories, matrix) = process(&functions, "1,10,7").expect("process");
    assert_eq!(categories.len(), 7);
    assert_eq!(matrix.series_count(), 2);
    for row in matrix.rows() {
        assert_eq!(row.len(), 7);
        assert!(row.iter().all(|c| c.is_some()));
    }
    let first = matrix.rows()[0][0].unwrap();
    assert!((first - 10.0 * 1f64.sin()).abs() < 1e-12);
}

#[test]
fn unparsable_function_yields_an_empty_row() {
    let (_, matrix) = process(&["x", "sin(", "x^2"], "0,4,5").expect("process");
    assert_eq!(matrix.series_count(), 3);
    assert_eq!(matrix.rows()[1].len(), 0);
    assert_eq!(matrix.rows()[2].len(), 5);
}

#[test]
fn non_numeric_results_are_cleaned_to_zero_and_not_drawn() {
    // sqrt of a negative and log of zero are not real numbers
    let (categories, matrix) = process(&["sqrt(x)", "ln(x)"], "-2,2,5").expect("process");
    assert_eq!(matrix.rows()[0][0], None);
    assert_eq!(matrix.rows()[1][2], None);
    let cleaned = matrix.cleaned();
    assert_eq!(cleaned[0][0], 0.0);
    assert_eq!(cleaned[0].len(), 5);

    let data = PlotData {
        kind: PlotKind::Rectangle,
        categories,
        matrix,
        labels: vec!["sqrt(x)".into(), "ln(x)".into()],
    };
    let plot = RectanglePlot::new(&data, PlotFrame::new(600, 600, Margins::default()));
    // sqrt: x = 1, 2 drawn (0 maps onto the zero line); ln: x = 2 only (ln 1 = 0)
    let blocks = plot.blocks();
    assert_eq!(blocks.iter().filter(|b| b.series == 0).count(), 2);
    assert_eq!(blocks.iter().filter(|b| b.series == 1).count(), 1);
}

#[test]
fn ragged_rows_survive_cleaning() {
    let m = ValueMatrix::from_rows(vec![vec![Some(1.0), None, Some(f64::INFINITY)], vec![Some(2.0)]]);
    assert_eq!(m.cleaned(), vec![vec![1.0, 0.0, 0.0], vec![2.0]]);
}

#[test]
fn bad_range_is_reported() {
    let err = process(&["x"], "1,10").unwrap_err();
    assert!(matches!(err, PlotError::Range(RangeError::FieldCount(2))));
    assert!(err.to_string().contains("start,end,count"));
}
