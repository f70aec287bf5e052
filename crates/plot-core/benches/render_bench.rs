// File: crates/plot-core/benches/render_bench.rs
// Summary: Criterion benches for PNG rendering of both chart kinds and for function evaluation.

use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use plot_core::{process, ChartDisplay, PlotKind, RenderOptions};

fn build_display(functions: usize, points: usize, kind: PlotKind) -> ChartDisplay {
    let texts: Vec<String> = (0..functions).map(|i| format!("{} * sin(x + {})", i + 1, i)).collect();
    let (categories, matrix) = process(&texts, &format!("0,10,{points}")).expect("process");
    let mut display = ChartDisplay::new();
    display.set_data(kind, categories, matrix, texts);
    display
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for kind in PlotKind::ALL {
        for &(functions, points) in &[(1usize, 7usize), (4, 20)] {
            group.bench_function(format!("{kind:?}_{functions}x{points}"), |b| {
                let display = build_display(functions, points, kind);
                let mut opts = RenderOptions::default();
                opts.draw_labels = false;
                b.iter(|| -> Result<()> {
                    let bytes = display.render_to_png_bytes(&opts)?;
                    black_box(bytes);
                    Ok(())
                });
            });
        }
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    c.bench_function("process_3x1000", |b| {
        let functions = ["10 * sin(x)", "x^2 - 3*x + 1", "10 * sin(2*x + exp(cos(abs(x))))"];
        b.iter(|| black_box(process(&functions, "-50,50,1000").expect("process")));
    });
}

criterion_group!(benches, bench_render, bench_evaluate);
criterion_main!(benches);
