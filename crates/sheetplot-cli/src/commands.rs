use std::fs;

use anyhow::{Context, Result};
use tracing::debug;

use sheetplot_chart::ChartSpec;
use sheetplot_cli::pipeline::{
    build_record, run_chart_pipeline, run_inspect_pipeline, run_pipeline,
};
use sheetplot_ingest::inspect;
use sheetplot_model::NormalizationOptions;

use crate::cli::{ChartArgs, InspectArgs, NormalizeArgs};
use crate::summary::{print_inspect_summary, print_normalize_summary, print_series_summary};

pub fn run_normalize(args: &NormalizeArgs) -> Result<()> {
    let options = normalization_options(args);
    let outcome = run_pipeline(&args.file, options)?;

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&outcome.table).context("encode table")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        debug!(path = %path.display(), "wrote normalized table");
    }
    if let Some(path) = &args.record {
        let workbook = inspect(&args.file)?;
        let record = build_record(&outcome, workbook.sheets);
        let json = serde_json::to_string_pretty(&record).context("encode record")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        debug!(path = %path.display(), "wrote upload record");
    }

    print_normalize_summary(&outcome, args.preview_rows);
    Ok(())
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let outcome = run_inspect_pipeline(&args.file)?;
    if args.json {
        let json =
            serde_json::to_string_pretty(&outcome.workbook.sheets).context("encode sheets")?;
        println!("{json}");
    } else {
        print_inspect_summary(&outcome);
    }
    Ok(())
}

pub fn run_chart(args: &ChartArgs) -> Result<()> {
    let mut spec = ChartSpec::new(args.x_axis.clone(), args.y_axis.clone(), args.kind.into());
    spec.limit = if args.limit == 0 { None } else { Some(args.limit) };

    let outcome = run_chart_pipeline(&args.file, NormalizationOptions::default(), &spec)?;
    if args.json {
        let json = serde_json::to_string_pretty(&outcome.series).context("encode series")?;
        println!("{json}");
    } else {
        print_series_summary(&outcome);
    }
    Ok(())
}

fn normalization_options(args: &NormalizeArgs) -> NormalizationOptions {
    NormalizationOptions {
        trim_strings: args.trim_strings,
        convert_numbers: args.convert_numbers,
        remove_empty_strings: args.remove_empty_strings,
    }
}
