use std::time::Instant;

use anyhow::Result;
use comfy_table::Table;
use tracing::{info, info_span};

use zoo_cli::pipeline::{IngestResult, ProcessResult, ingest, output, process};
use zoo_model::Season;
use zoo_report::group_by_habitat;

use crate::cli::ReportArgs;
use crate::summary::apply_table_style;
use crate::types::{HabitatSummary, RunResult};

pub fn run_seasons() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Season", "Birth month-day"]);
    apply_table_style(&mut table);
    for season in [Season::Spring, Season::Summer, Season::Fall, Season::Winter] {
        let (month, day) = season.month_day();
        table.add_row(vec![season.to_string(), format!("{month:02}-{day:02}")]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_report(args: &ReportArgs) -> Result<RunResult> {
    let report_span = info_span!("report", arrivals = %args.arrivals_file.display());
    let _report_guard = report_span.enter();

    // =========================================================================
    // Stage 1: Ingest - Load the name roster and arrival lines
    // =========================================================================
    let ingest_start = Instant::now();
    let IngestResult { names, arrivals } = ingest(&args.names_file, &args.arrivals_file)?;
    info!(
        names = names.len(),
        lines = arrivals.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Process - Parse, derive, and admit each arrival in input order
    // =========================================================================
    let process_start = Instant::now();
    let ProcessResult { animals, skipped } = process(&arrivals, names);
    info!(
        admitted = animals.len(),
        skipped = skipped.len(),
        duration_ms = process_start.elapsed().as_millis(),
        "processing complete"
    );

    // =========================================================================
    // Stage 3: Output - Group by habitat and write the population report
    // =========================================================================
    let written = output(&args.output, &animals, args.dry_run)?;
    if written {
        info!(output = %args.output.display(), "report written");
    }

    let habitats: Vec<HabitatSummary> = group_by_habitat(&animals)
        .into_iter()
        .map(|(species, residents)| HabitatSummary {
            species: species.to_string(),
            residents: residents.len(),
            ids: residents
                .iter()
                .map(|resident| resident.id.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    Ok(RunResult {
        output_path: args.output.clone(),
        written,
        admitted: animals.len(),
        habitats,
        skipped,
    })
}
