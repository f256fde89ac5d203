use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use phonespec_ingest::{LoadOptions, load_records};
use phonespec_model::{Column, PhoneRecord};
use phonespec_stats::{DatasetReport, delete_by_model, unique_values_for};

use crate::cli::{OutputFormatArg, ReportArgs, ShowArgs, SourceArgs, UniqueArgs};
use phonespec_cli::summary::{print_records, print_report, print_unique};

fn load(source: &SourceArgs) -> Result<Vec<PhoneRecord>> {
    let options = LoadOptions::default().with_dedupe(!source.no_dedupe);
    load_records(&source.path, &options)
        .with_context(|| format!("load phone records from {}", source.path.display()))
}

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let span = info_span!("report", path = %args.source.path.display());
    let _guard = span.enter();
    let mut records = load(&args.source)?;
    for model in &args.exclude_model {
        if delete_by_model(&mut records, model) {
            info!(model = %model, remaining = records.len(), "excluded model");
        } else {
            warn!(model = %model, "no records matched excluded model");
        }
    }
    let report = DatasetReport::build(&records, args.preview);
    match args.format {
        OutputFormatArg::Table => print_report(&report),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&report).context("serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_unique(args: &UniqueArgs) -> Result<()> {
    let span = info_span!("unique", column = %args.column);
    let _guard = span.enter();
    let records = load(&args.source)?;
    if Column::parse(&args.column).is_none() {
        warn!(
            column = %args.column,
            "unknown column; expected one of oem, model, status, platform"
        );
    }
    let values = unique_values_for(&args.column, &records);
    match args.format {
        OutputFormatArg::Table => print_unique(&args.column, &values),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&values).context("serialize values")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let span = info_span!("show", path = %args.source.path.display());
    let _guard = span.enter();
    let records = load(&args.source)?;
    let limit = args.limit.unwrap_or(usize::MAX);
    let selected: Vec<&PhoneRecord> = records
        .iter()
        .filter(|record| {
            args.model
                .as_deref()
                .is_none_or(|model| record.model_matches(model))
        })
        .take(limit)
        .collect();
    if selected.is_empty() {
        if let Some(model) = &args.model {
            warn!(model = %model, "no records matched model");
        }
        return Ok(());
    }
    print_records(selected);
    Ok(())
}
