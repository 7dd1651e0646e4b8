//! Integration tests for the pipeline module.

use std::fs;

use tempfile::TempDir;

use zoo_cli::pipeline::{ingest, output, process};

const ARRIVALS: &str = "\
4 year old female hyena, born in spring, tan color, 70 pounds, from Friguia Park, Tunisia
2 year old male lion, born in summer, gold color, 400 pounds, from Kenya
incomplete line, with, three clauses
5 year old male hyena, born in fall, gray color, 80 pounds, from Tunisia
";

struct Fixture {
    _dir: TempDir,
    names: std::path::PathBuf,
    arrivals: std::path::PathBuf,
    report: std::path::PathBuf,
}

fn fixture(names: &str, arrivals: &str) -> Fixture {
    let dir = TempDir::new().expect("create temp dir");
    let names_path = dir.path().join("animalNames.txt");
    let arrivals_path = dir.path().join("arrivingAnimals.txt");
    let report_path = dir.path().join("zooPopulation.txt");
    fs::write(&names_path, names).expect("write names");
    fs::write(&arrivals_path, arrivals).expect("write arrivals");
    Fixture {
        _dir: dir,
        names: names_path,
        arrivals: arrivals_path,
        report: report_path,
    }
}

#[test]
fn full_run_writes_the_grouped_report() {
    let fx = fixture("Luna\nSimba\nBruno\n", ARRIVALS);

    let ingested = ingest(&fx.names, &fx.arrivals).expect("ingest");
    assert_eq!(ingested.names.len(), 3);
    assert_eq!(ingested.arrivals.len(), 4);

    let processed = process(&ingested.arrivals, ingested.names);
    assert_eq!(processed.animals.len(), 3);
    assert_eq!(processed.skipped.len(), 1);
    assert_eq!(processed.skipped[0].number, 3);

    assert!(output(&fx.report, &processed.animals, false).expect("write report"));
    let rendered = fs::read_to_string(&fx.report).expect("read report");
    let expected = "\
Hyena Habitat:
HY01; Luna; birth date 2020-03-15; tan color; female; 70 pounds; from Friguia Park; arrived 2024-03-05
HY02; Bruno; birth date 2019-09-15; gray color; male; 80 pounds; from Tunisia; arrived 2024-03-05

Lion Habitat:
LI01; Simba; birth date 2022-06-15; gold color; male; 400 pounds; from Kenya; arrived 2024-03-05

";
    assert_eq!(rendered, expected);
}

#[test]
fn skipped_lines_do_not_consume_names_or_sequences() {
    let fx = fixture("Ada\nBo\n", ARRIVALS);

    let ingested = ingest(&fx.names, &fx.arrivals).expect("ingest");
    let processed = process(&ingested.arrivals, ingested.names);

    // Roster of two wraps on the third admitted animal; the skipped line
    // never advances the cursor.
    let names: Vec<&str> = processed
        .animals
        .iter()
        .map(|animal| animal.name.as_str())
        .collect();
    assert_eq!(names, vec!["Ada", "Bo", "Ada"]);
}

#[test]
fn empty_roster_names_every_animal_unknown() {
    let fx = fixture("", ARRIVALS);

    let ingested = ingest(&fx.names, &fx.arrivals).expect("ingest");
    let processed = process(&ingested.arrivals, ingested.names);
    assert!(
        processed
            .animals
            .iter()
            .all(|animal| animal.name == "Unknown")
    );
}

#[test]
fn dry_run_writes_nothing() {
    let fx = fixture("Luna\n", ARRIVALS);

    let ingested = ingest(&fx.names, &fx.arrivals).expect("ingest");
    let processed = process(&ingested.arrivals, ingested.names);
    assert!(!output(&fx.report, &processed.animals, true).expect("dry run"));
    assert!(!fx.report.exists());
}

#[test]
fn missing_input_file_fails_the_run() {
    let fx = fixture("Luna\n", ARRIVALS);
    let missing = fx.names.with_file_name("missing.txt");
    assert!(ingest(&missing, &fx.arrivals).is_err());
    assert!(ingest(&fx.names, &missing).is_err());
}
