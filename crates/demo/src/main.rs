// File: crates/demo/src/main.rs
// Summary: Headless demo: evaluates functions over a range and renders block/triangle charts to PNGs.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use plot_core::range::DEFAULT_RANGE;
use plot_core::{theme, ChartDisplay, PlotInputs, PlotKind, RenderOptions, EXAMPLE_FUNCTIONS};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "blockplot-demo")]
#[command(about = "Evaluate functions of x over a range and render them as a block chart PNG")]
struct Cli {
    /// Function of x; repeat for several series
    #[arg(short = 'f', long = "function")]
    functions: Vec<String>,
    /// Also plot every built-in example function
    #[arg(long)]
    examples: bool,
    /// Range as start,end,count
    #[arg(long, default_value = DEFAULT_RANGE)]
    range: String,
    /// Chart type: rectangle or triangle
    #[arg(long, default_value = "rectangle")]
    kind: String,
    /// Render every chart type, suffixing the output name
    #[arg(long)]
    all_kinds: bool,
    /// Style preset: light or dark
    #[arg(long, default_value = "light")]
    theme: String,
    #[arg(long, default_value_t = plot_core::types::WIDTH)]
    width: i32,
    #[arg(long, default_value_t = plot_core::types::HEIGHT)]
    height: i32,
    /// Output PNG path
    #[arg(long, default_value = "target/out/blockplot.png")]
    out: PathBuf,
    /// Skip text labels (deterministic output)
    #[arg(long)]
    no_labels: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut inputs = PlotInputs::new(cli.functions.clone(), cli.range.clone());
    if cli.examples {
        for example in EXAMPLE_FUNCTIONS {
            if !inputs.functions().iter().any(|f| f == example) {
                inputs.add_function(example);
            }
        }
    }

    let (categories, matrix) = inputs
        .process()
        .with_context(|| format!("failed to process range {:?}", inputs.range()))?;
    info!("Evaluated {} function(s) at {} point(s)", matrix.series_count(), categories.len());
    for (f, row) in inputs.functions().iter().zip(matrix.rows()) {
        if row.is_empty() {
            info!("  {f:?}: not plotted (parse error)");
        }
    }

    let opts = RenderOptions {
        width: cli.width,
        height: cli.height,
        style: theme::find(&cli.theme),
        draw_labels: !cli.no_labels,
    };

    let kinds: Vec<PlotKind> = if cli.all_kinds {
        PlotKind::ALL.to_vec()
    } else {
        vec![PlotKind::from_name(&cli.kind)]
    };

    let mut display = ChartDisplay::new();
    display.set_data(kinds[0], categories, matrix, inputs.functions().to_vec());
    for kind in kinds {
        display.set_kind(kind);
        let out = if cli.all_kinds { out_name_with(&cli.out, kind) } else { cli.out.clone() };
        display
            .render_to_png(&opts, &out)
            .with_context(|| format!("failed to write {}", out.display()))?;
        info!("Wrote {} ({})", out.display(), kind.label());
    }
    Ok(())
}

/// `dir/name.png` -> `dir/name_<kind>.png`
fn out_name_with(base: &Path, kind: PlotKind) -> PathBuf {
    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("blockplot");
    let suffix = match kind {
        PlotKind::Rectangle => "rectangle",
        PlotKind::Triangle => "triangle",
    };
    base.with_file_name(format!("{stem}_{suffix}.png"))
}
